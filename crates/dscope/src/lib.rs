//! Facade crate for `DepScope` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `dscope` as the single dependency of an application shell.
//! - Call [`init`] to register feature slices; extend as new slices appear.

pub use dscope_domain as domain;
pub use dscope_kernel as kernel;

use dscope_domain::config::DashboardConfig;
use dscope_domain::registry::InitializedSlice;

/// Feature registry for runtime introspection.
pub mod features {
    pub use dscope_navigation as navigation;
    pub use dscope_portfolio as portfolio;
    pub use dscope_reporting as reporting;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["portfolio", "navigation", "reporting"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &DashboardConfig,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Portfolio tree
    slices.push(features::portfolio::init()?);

    // Navigation (tabs + sidebar)
    slices.push(features::navigation::init(&config.session)?);

    // Reporting
    slices.push(features::reporting::init()?);

    for slice in &slices {
        tracing::debug!(slice = slice.name, "slice registered");
    }

    Ok(slices)
}
