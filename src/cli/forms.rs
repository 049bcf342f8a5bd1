//! Interactive entry form for new records.

use dialoguer::Select;
use miao_core::{CategoryService, EntryForm};
use miao_domain::{TransactionDraft, TransactionType};

use crate::cli::core::{parse_date, CommandError};
use crate::cli::io;
use crate::cli::shell_context::{today, ShellContext};

/// Outcome of running a form to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

const KINDS: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

/// Walks through type, category, amount, date and note, then asks for
/// confirmation. Escape on any selection cancels.
pub fn run_entry_form(
    context: &ShellContext,
) -> Result<FormResult<TransactionDraft>, CommandError> {
    let categories = context.session.categories();
    let theme = &context.theme;
    let mut form = context.session.entry_form(today());

    let labels: Vec<String> = KINDS.iter().map(ToString::to_string).collect();
    let Some(kind_index) = Select::with_theme(theme)
        .with_prompt("Type")
        .items(&labels[..])
        .default(0)
        .interact_opt()?
    else {
        return Ok(FormResult::Cancelled);
    };
    form.set_kind(KINDS[kind_index], categories);

    let options = CategoryService::of_kind(categories, form.kind());
    if options.is_empty() {
        return Err(CommandError::Message(format!(
            "no {} categories available",
            form.kind()
        )));
    }
    let names: Vec<&str> = options.iter().map(|category| category.name.as_str()).collect();
    let Some(category_index) = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&names[..])
        .default(0)
        .interact_opt()?
    else {
        return Ok(FormResult::Cancelled);
    };
    form.select_category(&options[category_index].id, categories)?;

    loop {
        let input = io::prompt_text(theme, "Amount (empty to cancel)", "", true)?;
        if input.trim().is_empty() {
            return Ok(FormResult::Cancelled);
        }
        match form.set_amount(&input) {
            Ok(()) if form.amount().is_some_and(|amount| amount > 0.0) => break,
            Ok(()) => io::print_warning("Enter an amount greater than zero."),
            Err(err) => io::print_warning(err),
        }
    }

    loop {
        let input = io::prompt_text(theme, "Date", &form.date().to_string(), false)?;
        match parse_date(input.trim()) {
            Ok(date) => {
                form.set_date(date);
                break;
            }
            Err(err) => io::print_warning(err),
        }
    }

    let note = io::prompt_text(theme, "Note", "", true)?;
    form.set_note(note.trim());

    io::print_info(context.renderer().entry_summary(&form, categories));
    if !io::confirm_action(theme, "Save this record?", true)? {
        return Ok(FormResult::Cancelled);
    }

    Ok(FormResult::Completed(form.to_draft()?))
}

/// Fills a form from `add <expense|income> <amount> [category-id] [YYYY-MM-DD] [note...]`.
pub fn entry_from_args(
    mut form: EntryForm,
    context: &ShellContext,
    args: &[&str],
) -> Result<TransactionDraft, CommandError> {
    let categories = context.session.categories();
    let (kind, rest) = args
        .split_first()
        .ok_or_else(|| CommandError::InvalidArguments(ADD_USAGE.into()))?;
    let kind = kind
        .parse::<TransactionType>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    form.set_kind(kind, categories);

    let (amount, rest) = rest
        .split_first()
        .ok_or_else(|| CommandError::InvalidArguments(ADD_USAGE.into()))?;
    form.set_amount(amount)?;

    let mut rest = rest;
    if let Some((category, tail)) = rest.split_first() {
        form.select_category(category, categories)?;
        rest = tail;
    }
    if let Some((date, tail)) = rest.split_first() {
        form.set_date(parse_date(date)?);
        rest = tail;
    }
    form.set_note(rest.join(" "));

    Ok(form.to_draft()?)
}

pub const ADD_USAGE: &str =
    "usage: add <expense|income> <amount> [category-id] [YYYY-MM-DD] [note...]";
