//! Console shell: stands in for the dashboard's presentation layer.
//! Loads config, initializes logging and the feature slices, then walks one
//! session through the moves a user would make and logs what would render.

use anyhow::Context;
use dscope::domain::config::DashboardConfig;
use dscope::features::navigation::Navigation;
use dscope::features::portfolio::Portfolio;
use dscope::features::reporting::Reporting;
use dscope::kernel::config::load_config;
use dscope_logger::{LevelFilter, Logger};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config: DashboardConfig = load_config(Some("dashboard")).unwrap_or_default();

    let mut builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(config.logging.console)
        .level(config.logging.level.parse().unwrap_or(LevelFilter::INFO));
    if let Some(path) = &config.logging.path {
        builder = builder.path(path);
    }
    let _log = builder.init()?;

    let slices = dscope::init(&config).map_err(anyhow::Error::from_boxed)?;

    let portfolio = slices
        .iter()
        .find_map(|slice| slice.downcast::<Portfolio>())
        .context("portfolio slice missing")?;
    let navigation = slices
        .iter()
        .find_map(|slice| slice.downcast::<Navigation>())
        .context("navigation slice missing")?;
    let reporting = slices
        .iter()
        .find_map(|slice| slice.downcast::<Reporting>())
        .context("reporting slice missing")?;

    let nav = navigation.session();
    info!(tab = %nav.active_tab, "session started");

    let mut session = portfolio.session_with_expanded(config.session.expanded.iter().cloned());
    for row in session.visible_nodes() {
        info!(
            "{:indent$}{} ({} vulns)",
            "",
            row.node.name,
            row.node.vulnerabilities,
            indent = (row.depth - 1) * 2
        );
    }

    session.select("comp-1");
    if let Some(node) = session.selected_node() {
        info!(id = %node.id, vulns = node.vulnerabilities, "selected {}", node.name);
    }

    let report = reporting.report();
    info!(total = report.density_total(), risk = report.risk.value(), "portfolio report ready");

    Ok(())
}
