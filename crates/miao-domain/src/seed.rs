//! Built-in ledgers and categories used when storage holds none.

use crate::{Category, Ledger, TransactionType};

/// Identifier of the first seed ledger, the default active ledger.
pub const DEFAULT_LEDGER_ID: &str = "l1";

pub fn default_ledgers() -> Vec<Ledger> {
    vec![
        Ledger::new(DEFAULT_LEDGER_ID, "Daily Ledger", "bg-rose-400", "Cat"),
        Ledger::new("l2", "Travel Fund", "bg-sky-400", "Bus"),
    ]
}

pub fn default_categories() -> Vec<Category> {
    use TransactionType::{Expense, Income};

    [
        ("c1", "Dining", "Utensils", Expense, "bg-orange-400"),
        ("c2", "Transport", "Bus", Expense, "bg-blue-400"),
        ("c3", "Shopping", "ShoppingBag", Expense, "bg-pink-400"),
        ("c4", "Housing", "Home", Expense, "bg-indigo-400"),
        ("c5", "Entertainment", "Gamepad2", Expense, "bg-purple-400"),
        ("c6", "Medical", "HeartPulse", Expense, "bg-red-400"),
        ("c7", "Education", "GraduationCap", Expense, "bg-teal-400"),
        ("c8", "Snacks", "Coffee", Expense, "bg-amber-400"),
        ("c9", "Salary", "Briefcase", Income, "bg-emerald-500"),
        ("c10", "Side Job", "Banknote", Income, "bg-lime-500"),
        ("c11", "Investments", "PiggyBank", Income, "bg-yellow-500"),
        ("c12", "Red Envelope", "Gift", Income, "bg-rose-500"),
    ]
    .into_iter()
    .map(|(id, name, icon, kind, color)| Category::new(id, name, icon, kind, color))
    .collect()
}
