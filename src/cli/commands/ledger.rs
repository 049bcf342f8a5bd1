use miao_core::NavEvent;

use crate::cli::core::{parse_index, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("ledgers", "Open the ledger switcher", "ledgers", cmd_ledgers),
        CommandEntry::new(
            "use",
            "Make a ledger active",
            "use <ledger-id|number>",
            cmd_use,
        ),
    ]
}

fn cmd_ledgers(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.navigate(NavEvent::OpenLedgers);
    context.show_current_view()
}

fn cmd_use(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: use <ledger-id|number>".into(),
        ));
    };
    let ledgers = context.session.ledgers();
    let id = match parse_index(reference, ledgers.len()) {
        Some(index) => ledgers[index].id.clone(),
        None => reference.to_string(),
    };

    context.session.switch_ledger(&id)?;
    if let Some(ledger) = context.session.current_ledger() {
        io::print_success(format!("Now using `{}`.", ledger.name));
    }
    context.show_current_view()
}
