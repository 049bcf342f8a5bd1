//! Category lookups, including the placeholder used for dangling references.

use miao_domain::{Category, TransactionType};

pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";
pub const UNKNOWN_CATEGORY_ICON: &str = "HelpCircle";
pub const UNKNOWN_CATEGORY_COLOR: &str = "bg-gray-400";

/// Presentation fields resolved for a category reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub name: String,
    pub icon: String,
    pub color: String,
    /// `false` when the reference did not resolve and placeholders were used.
    pub known: bool,
}

pub struct CategoryService;

impl CategoryService {
    pub fn find<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|category| category.id == id)
    }

    /// Categories of `kind`, in collection order.
    pub fn of_kind(categories: &[Category], kind: TransactionType) -> Vec<&Category> {
        categories
            .iter()
            .filter(|category| category.kind == kind)
            .collect()
    }

    /// First category of `kind` in collection order; the entry form's default.
    pub fn first_of_kind(categories: &[Category], kind: TransactionType) -> Option<&Category> {
        categories.iter().find(|category| category.kind == kind)
    }

    /// Resolves display fields, falling back to the "Unknown" placeholder.
    pub fn label(categories: &[Category], id: &str) -> CategoryLabel {
        match Self::find(categories, id) {
            Some(category) => CategoryLabel {
                name: category.name.clone(),
                icon: category.icon.clone(),
                color: category.color.clone(),
                known: true,
            },
            None => CategoryLabel {
                name: UNKNOWN_CATEGORY_NAME.to_string(),
                icon: UNKNOWN_CATEGORY_ICON.to_string(),
                color: UNKNOWN_CATEGORY_COLOR.to_string(),
                known: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miao_domain::seed::default_categories;

    #[test]
    fn first_of_kind_follows_collection_order() {
        let categories = default_categories();
        let first_income = CategoryService::first_of_kind(&categories, TransactionType::Income);
        assert_eq!(first_income.map(|c| c.id.as_str()), Some("c9"));
    }

    #[test]
    fn first_of_kind_is_none_without_matches() {
        let categories: Vec<Category> = default_categories()
            .into_iter()
            .filter(|c| c.kind == TransactionType::Expense)
            .collect();
        assert!(CategoryService::first_of_kind(&categories, TransactionType::Income).is_none());
    }

    #[test]
    fn dangling_reference_uses_placeholder() {
        let label = CategoryService::label(&default_categories(), "gone");
        assert!(!label.known);
        assert_eq!(label.name, UNKNOWN_CATEGORY_NAME);
        assert_eq!(label.color, UNKNOWN_CATEGORY_COLOR);
    }
}
