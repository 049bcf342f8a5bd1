//! Screen navigation as an explicit state value with pure transitions.

use miao_domain::ViewState;

/// User navigation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    ShowHome,
    ShowStats,
    OpenLedgers,
    /// Leaves the ledger switcher.
    Back,
    /// A ledger was picked in the switcher.
    LedgerSelected,
    OpenEntry,
    CloseEntry,
    EntrySaved,
}

/// Current screen plus the entry-form overlay flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    pub view: ViewState,
    pub entry_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after `event`. Events that make no sense in the
    /// current state leave it unchanged.
    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::ShowHome => Self {
                view: ViewState::Home,
                ..self
            },
            NavEvent::ShowStats => Self {
                view: ViewState::Stats,
                ..self
            },
            NavEvent::OpenLedgers => Self {
                view: ViewState::Ledgers,
                entry_open: false,
            },
            NavEvent::Back | NavEvent::LedgerSelected => match self.view {
                ViewState::Ledgers => Self {
                    view: ViewState::Home,
                    ..self
                },
                _ => self,
            },
            // The form overlays home and stats only.
            NavEvent::OpenEntry => match self.view {
                ViewState::Ledgers => self,
                _ => Self {
                    entry_open: true,
                    ..self
                },
            },
            NavEvent::CloseEntry | NavEvent::EntrySaved => Self {
                entry_open: false,
                ..self
            },
        }
    }
}
