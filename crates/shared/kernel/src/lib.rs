//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and provides
//! layered config loading for the application shell.
//!
//! ## Config loading
//! ```rust,ignore
//! use dscope_kernel::config::load_config;
//! use dscope_kernel::domain::config::DashboardConfig;
//!
//! let cfg: DashboardConfig = load_config(Some("dashboard")).unwrap_or_default();
//! ```

pub mod config;
pub mod prelude;

pub use dscope_domain as domain;
