use miao_core::CategoryService;
use miao_domain::TransactionType;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "categories",
        "List categories",
        "categories [expense|income]",
        cmd_categories,
    )]
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let categories = context.session.categories();
    let listed = match args.first() {
        Some(kind) => {
            let kind = kind
                .parse::<TransactionType>()
                .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
            CategoryService::of_kind(categories, kind)
        }
        None => categories.iter().collect(),
    };
    context.print_screen(context.renderer().categories(&listed));
    Ok(())
}
