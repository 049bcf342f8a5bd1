use miao_core::NavEvent;

use crate::cli::core::{parse_month_arg, CommandError, CommandResult, MonthArg};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("home", "Show this month's records", "home", cmd_home),
        CommandEntry::new("stats", "Show the expense ranking", "stats", cmd_stats),
        CommandEntry::new("back", "Leave the ledger switcher", "back", cmd_back),
        CommandEntry::new("prev", "Go to the previous month", "prev", cmd_prev),
        CommandEntry::new("next", "Go to the next month", "next", cmd_next),
        CommandEntry::new(
            "month",
            "Jump by a number of months or to a given month",
            "month <-1|+2|YYYY-MM>",
            cmd_month,
        ),
    ]
}

fn cmd_home(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.navigate(NavEvent::ShowHome);
    context.show_current_view()
}

fn cmd_stats(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.navigate(NavEvent::ShowStats);
    context.show_current_view()
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.navigate(NavEvent::Back);
    context.show_current_view()
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    shift_month(context, -1)
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    shift_month(context, 1)
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [arg] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: month <-1|+2|YYYY-MM>".into(),
        ));
    };
    match parse_month_arg(arg)? {
        MonthArg::Offset(delta) => shift_month(context, delta),
        MonthArg::Absolute(month) => {
            context.session.set_month(month);
            context.show_current_view()
        }
    }
}

fn shift_month(context: &mut ShellContext, delta: i32) -> CommandResult {
    let month = context.session.change_month(delta);
    tracing::debug!(%month, "month changed");
    context.show_current_view()
}
