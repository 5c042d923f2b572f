//! Convenience re-exports for application shells.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use dscope_domain::config::{DashboardConfig, LoggingConfig, SessionConfig};
pub use dscope_domain::portfolio::{Node, NodeKind, SeverityBreakdown, sample_portfolio};
pub use dscope_domain::registry::{FeatureSlice, InitializedSlice};
