use chart_embed::EmbedError;
use chart_embed::compose::{
    Component, ComponentRegistry, ComponentSet, REGISTRY_SNAPSHOT_JSON_SCHEMA_V1, RegistrySnapshot,
};

#[test]
fn registering_a_set_enables_each_capability() {
    let mut registry = ComponentRegistry::new();
    registry.register(ComponentSet::line_chart());

    assert_eq!(registry.len(), 5);
    assert!(registry.is_registered(Component::LineController));
    assert!(registry.is_registered(Component::LinearScale));
    assert!(!registry.is_registered(Component::Tooltip));
}

#[test]
fn re_registration_is_idempotent() {
    let mut registry = ComponentRegistry::new();
    registry.register(ComponentSet::line_chart());
    let before = registry.snapshot();

    registry.register(ComponentSet::line_chart());
    registry.register(ComponentSet::line_chart());

    assert_eq!(registry.snapshot(), before);
    assert_eq!(registry.len(), 5);
}

#[test]
fn register_component_reports_first_insertion_only() {
    let mut registry = ComponentRegistry::new();
    assert!(registry.register_component(Component::Tooltip));
    assert!(!registry.register_component(Component::Tooltip));
    assert_eq!(registry.len(), 1);
}

#[test]
fn first_registration_order_is_preserved() {
    let mut registry = ComponentRegistry::new();
    registry.register_component(Component::Tooltip);
    registry.register(ComponentSet::line_chart());

    let components: Vec<Component> = registry.components().collect();
    assert_eq!(components[0], Component::Tooltip);
    assert_eq!(components.len(), 6);
}

#[test]
fn tooltip_dependent_configuration_needs_the_full_set() {
    let tooltip_chart = ComponentSet::line_chart().with_tooltip();

    let mut reduced = ComponentRegistry::new();
    reduced.register(ComponentSet::line_chart());
    assert!(reduced.supports(ComponentSet::line_chart()));
    assert!(!reduced.supports(tooltip_chart));
    let missing: Vec<Component> = reduced.missing(tooltip_chart).iter().collect();
    assert_eq!(missing, vec![Component::Tooltip]);

    let mut full = ComponentRegistry::new();
    full.register(tooltip_chart);
    assert!(full.supports(tooltip_chart));
    assert!(full.missing(tooltip_chart).is_empty());
}

#[test]
fn snapshot_contract_round_trips() {
    let mut registry = ComponentRegistry::new();
    registry.register(ComponentSet::line_chart().with_tooltip());

    let snapshot = registry.snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains(&format!("\"schema_version\": {REGISTRY_SNAPSHOT_JSON_SCHEMA_V1}")));
    assert!(json.contains("\"line-controller\""));

    let parsed = RegistrySnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_parser_accepts_bare_snapshot_payloads() {
    let parsed = RegistrySnapshot::from_json_compat_str(r#"{ "components": ["tooltip"] }"#)
        .expect("parse bare snapshot");
    assert_eq!(parsed.components, vec![Component::Tooltip]);
}

#[test]
fn snapshot_parser_rejects_unknown_schema_versions() {
    let err = RegistrySnapshot::from_json_compat_str(
        r#"{ "schema_version": 99, "snapshot": { "components": [] } }"#,
    )
    .expect_err("unsupported version must fail");
    assert!(matches!(err, EmbedError::InvalidData(_)));
}

#[test]
fn component_names_resolve_back_to_capabilities() {
    assert_eq!(
        Component::from_name("tooltip").expect("known name"),
        Component::Tooltip
    );
    let err = Component::from_name("doughnut-controller").expect_err("unknown must fail");
    assert!(matches!(err, EmbedError::UnknownComponent(_)));
}
