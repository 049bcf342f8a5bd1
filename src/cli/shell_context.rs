use std::path::Path;

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use miao_config::ConfigManager;
use miao_core::{ExpenseRepository, LedgerSession};
use miao_domain::ViewState;
use miao_storage_json::JsonFileStore;
use strsim::levenshtein;

use super::commands;
use super::core::{CliError, CommandError, CommandResult, LoopControl};
use super::io as cli_io;
use super::output::section as output_section;
use super::registry::{CommandEntry, CommandRegistry};
use super::ui::render::Screen;
use super::ui::{RenderStyle, ScreenRenderer};
use crate::utils::paths::app_home_dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: LedgerSession,
    pub theme: ColorfulTheme,
    pub style: RenderStyle,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, &app_home_dir())
    }

    /// Opens configuration under `<base>/config` and the storage slots in the
    /// configured data directory.
    pub fn with_base_dir(mode: CliMode, base: &Path) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        let data_dir = config.resolve_data_dir(base);
        let store = JsonFileStore::new(&data_dir)?;
        let session = LedgerSession::open(ExpenseRepository::new(Box::new(store)), today())?;
        tracing::info!(data_dir = %data_dir.display(), ?mode, "shell ready");

        Ok(Self {
            mode,
            registry,
            session,
            theme: ColorfulTheme::default(),
            style: RenderStyle::from_config(&config),
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        let ledger = self
            .session
            .current_ledger()
            .map(|ledger| ledger.name.as_str())
            .unwrap_or("no ledger");
        format!("miao[{} {} {}]> ", ledger, self.session.month(), self.session.view())
    }

    pub(crate) fn renderer(&self) -> ScreenRenderer<'_> {
        ScreenRenderer::new(&self.style)
    }

    pub(crate) fn print_screen(&self, screen: Screen) {
        output_section(screen.title);
        for line in screen.lines {
            cli_io::print_info(line);
        }
    }

    /// Redraws whichever screen the navigation state points at.
    pub(crate) fn show_current_view(&self) -> CommandResult {
        let renderer = self.renderer();
        let screen = match self.session.view() {
            ViewState::Home => renderer.home(
                self.session.current_ledger(),
                &self.session.report(),
                self.session.categories(),
            ),
            ViewState::Stats => renderer.stats(&self.session.report()),
            ViewState::Ledgers => renderer.ledgers(
                self.session.ledgers(),
                self.session.active_ledger_id(),
                self.session.transactions(),
            ),
        };
        self.print_screen(screen);
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let raw = &tokens[0];
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit Miao Ledger?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
pub(crate) fn process_script(base: &Path, lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut context = ShellContext::with_base_dir(CliMode::Script, base)?;
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(context)
}
