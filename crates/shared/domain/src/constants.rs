//! Canonical entity strings shared between the domain enums and any
//! text-facing surface (config files, serialized session state).

/// Node kind tag for projects (aggregating nodes).
pub const PROJECT: &str = "project";
/// Node kind tag for components (dependency leaves).
pub const COMPONENT: &str = "component";

/// Tab id for the vulnerability management section.
pub const TAB_VULNERABILITIES: &str = "vuln";
/// Tab id for the project portfolio section.
pub const TAB_PORTFOLIO: &str = "portfolio";
/// Tab id for the reporting section.
pub const TAB_REPORTING: &str = "reporting";
