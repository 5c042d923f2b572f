//! # Project Portfolio
//!
//! Feature slice behind the project-portfolio tree view: an immutable
//! hierarchy of projects and their vulnerable components, plus the
//! session-scoped selection/expansion state a tree widget renders from.
//!
//! ## Architecture
//!
//! * **Dataset** ([`Portfolio`]): the fixed tree, shared read-only across
//!   every observer in the session. Safe to read concurrently; it never
//!   changes after [`init`].
//! * **Session** ([`PortfolioSession`]): one user's view state — expansion
//!   flags and the current selection — owned by a single writer and mutated
//!   synchronously per UI event.
//! * **Queries** ([`tree`]): pure functions over explicit arguments;
//!   [`tree::visible_nodes`] is the single query a tree widget needs, and
//!   [`PortfolioSession::resolve`] drives the detail panel.
//!
//! Mutations never fail. The only error the model produces is
//! [`PortfolioError::NotFound`], returned when resolving an id that matches
//! no node; what to display for that is the presentation layer's call.

mod error;
pub mod state;
pub mod tree;

pub use crate::error::{PortfolioError, PortfolioErrorExt};
pub use crate::state::{ExpansionState, Selection};
pub use crate::tree::{ROOT_DEPTH, VisibleNode, VisibleNodes, find_node, visible_nodes};

use dscope_domain::portfolio::{Node, sample_portfolio};
use dscope_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::sync::Arc;

/// Portfolio feature state: the immutable dataset every session reads from.
#[derive(Debug, Clone)]
pub struct Portfolio {
    roots: Arc<[Node]>,
}

impl FeatureSlice for Portfolio {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Portfolio {
    #[must_use]
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots: roots.into() }
    }

    /// The root list, in display order.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Starts a session with everything collapsed and nothing selected.
    #[must_use]
    pub fn session(&self) -> PortfolioSession {
        PortfolioSession {
            roots: Arc::clone(&self.roots),
            expansion: ExpansionState::new(),
            selection: Selection::new(),
        }
    }

    /// Starts a session with the given node ids pre-expanded.
    pub fn session_with_expanded<I, S>(&self, ids: I) -> PortfolioSession
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PortfolioSession {
            roots: Arc::clone(&self.roots),
            expansion: ExpansionState::with_expanded(ids),
            selection: Selection::new(),
        }
    }
}

/// One user's session over a shared portfolio.
///
/// Holds the two mutable pieces of view state. All mutations are total and
/// run to completion within one UI event; reads re-derive their output from
/// the current state with nothing hidden.
#[derive(Debug, Clone)]
pub struct PortfolioSession {
    roots: Arc<[Node]>,
    expansion: ExpansionState,
    selection: Selection,
}

impl PortfolioSession {
    /// Resolves a node by id, preorder, first match wins.
    ///
    /// # Errors
    /// Returns [`PortfolioError::NotFound`] if no node in the tree carries `id`.
    pub fn resolve(&self, id: &str) -> Result<&Node, PortfolioError> {
        find_node(&self.roots, id)
            .ok_or_else(|| PortfolioError::NotFound { id: id.to_owned(), context: None })
    }

    /// The node behind the current selection, if it resolves.
    ///
    /// A selection pointing at no existing node reads as no selection, which
    /// is exactly what the detail panel should render.
    #[must_use]
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.current().and_then(|id| find_node(&self.roots, id))
    }

    /// Flips the expansion flag for `id`; any id is accepted.
    pub fn toggle_expansion(&mut self, id: &str) {
        self.expansion.toggle(id);
        tracing::debug!(id, expanded = self.expansion.is_expanded(id), "expansion toggled");
    }

    /// Replaces the selection with `id`, valid or not.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(id = %id, "node selected");
        self.selection.select(id);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The rows a tree widget should render, in display order.
    #[must_use]
    pub fn visible_nodes(&self) -> VisibleNodes<'_> {
        visible_nodes(&self.roots, &self.expansion)
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// Initialize the portfolio feature with the fixed sample dataset.
///
/// # Errors
/// Infallible today; the `Result` keeps the slice signature uniform.
pub fn init() -> Result<InitializedSlice, PortfolioError> {
    let portfolio = Portfolio::new(sample_portfolio());

    if let Some(id) = tree::duplicate_id(portfolio.roots()) {
        tracing::warn!(id, "duplicate node id in portfolio dataset; first preorder match wins");
    }

    tracing::info!("Portfolio slice initialized");
    Ok(InitializedSlice::new("portfolio", portfolio))
}
