use chrono::Utc;
use miao_core::{CategoryService, DeleteOutcome, NavEvent};
use miao_domain::ViewState;

use crate::cli::core::{parse_index, CommandError, CommandResult};
use crate::cli::forms::{entry_from_args, run_entry_form, FormResult, ADD_USAGE};
use crate::cli::io::{self, PromptConfirmation};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{today, CliMode, ShellContext};
use crate::cli::ui::render::display_order;

const YES_FLAGS: [&str; 2] = ["--yes", "-y"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense or income in the active ledger",
            "add [<expense|income> <amount> [category-id] [YYYY-MM-DD] [note...]]",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete a record by row number or id",
            "delete <row|id> [--yes]",
            cmd_delete,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.session.view() == ViewState::Ledgers {
        return Err(CommandError::Message(
            "Pick a ledger first (`use <id>` or `back`).".into(),
        ));
    }
    context.session.navigate(NavEvent::OpenEntry);

    let draft = if args.is_empty() {
        if context.mode() == CliMode::Script {
            context.session.navigate(NavEvent::CloseEntry);
            return Err(CommandError::InvalidArguments(ADD_USAGE.into()));
        }
        match run_entry_form(context) {
            Ok(FormResult::Completed(draft)) => draft,
            Ok(FormResult::Cancelled) => {
                context.session.navigate(NavEvent::CloseEntry);
                io::print_info("Entry discarded.");
                return Ok(());
            }
            Err(err) => {
                context.session.navigate(NavEvent::CloseEntry);
                return Err(err);
            }
        }
    } else {
        let form = context.session.entry_form(today());
        match entry_from_args(form, context, args) {
            Ok(draft) => draft,
            Err(err) => {
                context.session.navigate(NavEvent::CloseEntry);
                return Err(err);
            }
        }
    };

    let saved = context.session.add_transaction(draft, Utc::now());
    let transaction = match saved {
        Ok(transaction) => transaction,
        Err(err) => {
            context.session.navigate(NavEvent::CloseEntry);
            return Err(err.into());
        }
    };

    let label = CategoryService::label(context.session.categories(), &transaction.category_id);
    io::print_success(format!(
        "Saved {} {} ({}, {}).",
        transaction.kind,
        context.renderer().signed_money(&transaction),
        label.name,
        transaction.date
    ));
    if !context.session.month().contains(transaction.date) {
        io::print_hint(format!(
            "The record is dated {}; use `month {}` to see it.",
            transaction.date,
            transaction.date.format("%Y-%m")
        ));
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let assume_yes = args.iter().any(|arg| YES_FLAGS.contains(arg));
    let references: Vec<&str> = args
        .iter()
        .copied()
        .filter(|arg| !YES_FLAGS.contains(arg))
        .collect();
    let [reference] = references.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "usage: delete <row|id> [--yes]".into(),
        ));
    };

    let id = resolve_transaction_id(context, reference)?;

    let outcome = if assume_yes {
        let mut accept = |_: &str| true;
        context.session.delete_transaction(&id, &mut accept)?
    } else if context.mode() == CliMode::Script {
        io::print_warning("No prompt available in script mode; pass --yes to delete.");
        let mut decline = |_: &str| false;
        context.session.delete_transaction(&id, &mut decline)?
    } else {
        let mut prompt = PromptConfirmation::new(&context.theme);
        context.session.delete_transaction(&id, &mut prompt)?
    };

    match outcome {
        DeleteOutcome::Deleted(removed) => io::print_success(format!(
            "Deleted {} {} from {}.",
            removed.kind,
            context.renderer().signed_money(&removed),
            removed.date
        )),
        DeleteOutcome::Cancelled => io::print_info("Deletion cancelled."),
    }
    Ok(())
}

/// A row number from the current month's listing, a full id, or a unique id
/// prefix within the active ledger.
fn resolve_transaction_id(context: &ShellContext, reference: &str) -> Result<String, CommandError> {
    let report = context.session.report();
    let rows = display_order(&report);
    if let Some(index) = parse_index(reference, rows.len()) {
        return Ok(rows[index].id.clone());
    }

    if let Some(found) = context.session.find_transaction(reference) {
        return Ok(found.id.clone());
    }

    let active = context.session.active_ledger_id();
    let matches: Vec<&str> = context
        .session
        .transactions()
        .iter()
        .filter(|txn| txn.ledger_id == active && txn.id.starts_with(reference))
        .map(|txn| txn.id.as_str())
        .collect();
    match matches.as_slice() {
        [only] => Ok(only.to_string()),
        [] => Err(CommandError::InvalidArguments(format!(
            "no record matches `{}`",
            reference
        ))),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` matches {} records; use a longer id",
            reference,
            matches.len()
        ))),
    }
}
