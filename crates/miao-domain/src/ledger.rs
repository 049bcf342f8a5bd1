//! A named money container partitioning transactions.

use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub id: String,
    pub name: String,
    pub cover_color: String,
    pub icon: String,
}

impl Ledger {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cover_color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cover_color: cover_color.into(),
            icon: icon.into(),
        }
    }
}

impl Identifiable for Ledger {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Ledger {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Ledger {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.id)
    }
}
