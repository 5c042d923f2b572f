//! Navigation feature slice: which dashboard section is active and whether
//! the (mobile) sidebar is open.
//!
//! Same discipline as the portfolio session state: a plain serializable
//! value object with total mutations, owned by a single writer.

mod error;

pub use crate::error::NavigationError;

use dscope_domain::config::SessionConfig;
use dscope_domain::registry::{FeatureSlice, InitializedSlice};
use serde::{Deserialize, Serialize};
use std::any::Any;
use strum_macros::{Display, EnumString};

/// Dashboard sections, in sidebar order.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum TabId {
    #[default]
    #[serde(rename = "vuln")]
    #[strum(serialize = "vuln")]
    Vulnerabilities,
    #[serde(rename = "portfolio")]
    #[strum(serialize = "portfolio")]
    Portfolio,
    #[serde(rename = "reporting")]
    #[strum(serialize = "reporting")]
    Reporting,
}

/// Session-scoped navigation state.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_tab: TabId,
    pub sidebar_open: bool,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn starting_at(tab: TabId) -> Self {
        Self { active_tab: tab, sidebar_open: false }
    }

    /// Switches to `tab`; activation is last-write-wins.
    pub fn activate(&mut self, tab: TabId) {
        self.active_tab = tab;
        tracing::debug!(tab = %tab, "tab activated");
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// The Escape behavior: closes the sidebar, never anything else.
    /// Idempotent when the sidebar is already closed.
    pub fn dismiss(&mut self) {
        self.sidebar_open = false;
    }
}

/// Navigation feature state: the tab a fresh session starts on.
#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    default_tab: TabId,
}

impl FeatureSlice for Navigation {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Navigation {
    #[must_use]
    pub const fn default_tab(&self) -> TabId {
        self.default_tab
    }

    /// Starts a session on the configured tab with the sidebar closed.
    #[must_use]
    pub const fn session(&self) -> NavigationState {
        NavigationState::starting_at(self.default_tab)
    }
}

/// Initialize the navigation feature from the session config.
///
/// An unrecognized `active_tab` value falls back to the default tab rather
/// than failing startup.
///
/// # Errors
/// Infallible today; the `Result` keeps the slice signature uniform.
pub fn init(config: &SessionConfig) -> Result<InitializedSlice, NavigationError> {
    let default_tab = config.active_tab.parse::<TabId>().unwrap_or_else(|_| {
        tracing::warn!(tab = %config.active_tab, "unknown active_tab in config, using default");
        TabId::default()
    });

    tracing::info!("Navigation slice initialized");
    Ok(InitializedSlice::new("navigation", Navigation { default_tab }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_the_original_ui() {
        let state = NavigationState::new();
        assert_eq!(state.active_tab, TabId::Vulnerabilities);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn activation_is_last_write_wins() {
        let mut state = NavigationState::new();
        state.activate(TabId::Portfolio);
        state.activate(TabId::Reporting);
        assert_eq!(state.active_tab, TabId::Reporting);
    }

    #[test]
    fn dismiss_closes_the_sidebar_and_is_idempotent() {
        let mut state = NavigationState::new();
        state.open_sidebar();
        state.activate(TabId::Portfolio);

        state.dismiss();
        assert!(!state.sidebar_open);
        // A second Escape changes nothing.
        state.dismiss();
        assert!(!state.sidebar_open);
        // And never touches the active tab.
        assert_eq!(state.active_tab, TabId::Portfolio);
    }

    #[test]
    fn sidebar_toggle_round_trips() {
        let mut state = NavigationState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_open);
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn tab_ids_parse_from_their_config_strings() {
        assert_eq!("vuln".parse::<TabId>().unwrap(), TabId::Vulnerabilities);
        assert_eq!("portfolio".parse::<TabId>().unwrap(), TabId::Portfolio);
        assert_eq!("reporting".parse::<TabId>().unwrap(), TabId::Reporting);
        assert!("settings".parse::<TabId>().is_err());
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = NavigationState::starting_at(TabId::Reporting);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"reporting\""));
        let back: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn init_falls_back_on_unknown_tab() {
        let config = SessionConfig { active_tab: "nope".to_owned(), ..SessionConfig::default() };
        let slice = init(&config).unwrap();
        let nav = slice.downcast::<Navigation>().unwrap();
        assert_eq!(nav.default_tab(), TabId::Vulnerabilities);
    }
}
