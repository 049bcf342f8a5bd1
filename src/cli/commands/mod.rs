pub mod category;
pub mod ledger;
pub mod system;
pub mod transaction;
pub mod view;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in view::definitions()
        .into_iter()
        .chain(ledger::definitions())
        .chain(transaction::definitions())
        .chain(category::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
