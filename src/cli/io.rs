use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miao_config::Config;
use miao_core::Confirmation;

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};

/// Applies display preferences from the loaded configuration.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_output: config.accessibility.plain_output,
        high_contrast: config.accessibility.high_contrast,
    });
    if !config.use_color() {
        colored::control::set_override(false);
    }
}

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text input, pre-filled with `initial`.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: &str,
    allow_empty: bool,
) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(CommandError::from)
}

/// Terminal confirmation for destructive actions. A failed prompt counts as
/// a refusal.
pub struct PromptConfirmation<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> PromptConfirmation<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }
}

impl Confirmation for PromptConfirmation<'_> {
    fn confirm(&mut self, prompt: &str) -> bool {
        match confirm_action(self.theme, prompt, false) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed");
                false
            }
        }
    }
}
