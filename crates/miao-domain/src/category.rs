//! Domain types representing transaction categories.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Classification tag for a transaction, scoped to one [`TransactionType`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Symbolic glyph name resolved by the presentation layer.
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Presentation color token, e.g. `bg-orange-400`.
    pub color: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        kind: TransactionType,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            kind,
            color: color.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}
