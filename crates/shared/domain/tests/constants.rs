use dscope_domain::constants::{COMPONENT, PROJECT, TAB_PORTFOLIO, TAB_REPORTING, TAB_VULNERABILITIES};
use dscope_domain::portfolio::NodeKind;

#[test]
fn constants_match_entity_strings() {
    assert_eq!(PROJECT, "project");
    assert_eq!(COMPONENT, "component");
    assert_eq!(TAB_VULNERABILITIES, "vuln");
    assert_eq!(TAB_PORTFOLIO, "portfolio");
    assert_eq!(TAB_REPORTING, "reporting");
}

#[test]
fn node_kind_strings_match_constants() {
    assert_eq!(NodeKind::Project.to_string(), PROJECT);
    assert_eq!(NodeKind::Component.to_string(), COMPONENT);
    assert_eq!(PROJECT.parse::<NodeKind>().unwrap(), NodeKind::Project);
    assert_eq!(COMPONENT.parse::<NodeKind>().unwrap(), NodeKind::Component);
}
