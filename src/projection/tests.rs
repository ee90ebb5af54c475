//! Tests for structural projection.

use super::*;
use crate::config::{Cluster, ClusterNodeGroup, Funding};
use crate::orchestration::ClusterOptions;
use std::collections::BTreeMap;

#[derive(Debug, Default, PartialEq)]
struct NarrowOptions {
    name: String,
    namespace: String,
    api_domain: String,
}

projection_target!(NarrowOptions {
    name: String,
    namespace: String,
    api_domain: String,
});

#[derive(Debug, Default, PartialEq)]
struct NameOnly {
    name: String,
}

projection_target!(NameOnly { name: String });

#[derive(Debug, Default, PartialEq)]
struct MismatchedOptions {
    name: String,
    namespace: bool,
}

projection_target!(MismatchedOptions {
    name: String,
    namespace: bool,
});

#[derive(Debug, PartialEq)]
struct PrefilledOptions {
    name: String,
    api_scheme: String,
}

impl Default for PrefilledOptions {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            api_scheme: "https".to_string(),
        }
    }
}

projection_target!(PrefilledOptions {
    name: String,
    api_scheme: String,
});

#[derive(Debug, Default, PartialEq)]
struct TopologyOptions {
    funding: Funding,
    node_groups: BTreeMap<String, ClusterNodeGroup>,
}

projection_target!(TopologyOptions {
    funding: Funding,
    node_groups: BTreeMap<String, ClusterNodeGroup>,
});

#[derive(Debug, Default, PartialEq)]
struct Opaque;

projection_target!(Opaque {});

#[derive(Debug, Default)]
struct PartialSource {
    name: Option<String>,
    api_insecure_tls: Option<bool>,
}

projection_source!(PartialSource {
    name: String,
    api_insecure_tls: bool,
});

fn namespace_only() -> Cluster {
    Cluster {
        namespace: Some("beta".to_string()),
        ..Default::default()
    }
}

#[test]
fn copies_only_present_fields() {
    let projected: NarrowOptions = project(&namespace_only());

    assert_eq!(
        projected,
        NarrowOptions {
            name: String::new(),
            namespace: "beta".to_string(),
            api_domain: String::new(),
        }
    );
}

#[test]
fn absent_fields_keep_destination_defaults() {
    let projected: PrefilledOptions = project(&namespace_only());
    assert_eq!(projected, PrefilledOptions::default());

    let cluster = Cluster {
        api_scheme: Some("http".to_string()),
        ..Default::default()
    };
    let projected: PrefilledOptions = project(&cluster);
    assert_eq!(projected.name, "unnamed");
    assert_eq!(projected.api_scheme, "http");
}

#[test]
fn present_empty_value_is_copied() {
    let cluster = Cluster {
        name: Some(String::new()),
        ..Default::default()
    };
    let projected: PrefilledOptions = project(&cluster);
    assert_eq!(projected.name, "");
}

#[test]
fn missing_destination_field_is_skipped() {
    let plan = ProjectionPlan::<Cluster, NameOnly>::new();
    assert_eq!(plan.fields(), ["name"]);

    let cluster = Cluster {
        name: Some("local".to_string()),
        namespace: Some("beta".to_string()),
        api_domain: Some("example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(
        plan.apply(&cluster),
        NameOnly {
            name: "local".to_string()
        }
    );
}

#[test]
fn mismatched_kind_is_skipped() {
    let plan = ProjectionPlan::<Cluster, MismatchedOptions>::new();
    assert_eq!(plan.fields(), ["name"]);

    let cluster = Cluster {
        name: Some("local".to_string()),
        namespace: Some("beta".to_string()),
        ..Default::default()
    };
    let projected = plan.apply(&cluster);
    assert_eq!(projected.name, "local");
    assert!(!projected.namespace);
}

#[test]
fn destination_without_fields_projects_to_default() {
    let plan = ProjectionPlan::<Cluster, Opaque>::new();
    assert!(plan.fields().is_empty());
    assert_eq!(plan.apply(&namespace_only()), Opaque);
}

#[test]
fn projection_is_idempotent() {
    let cluster = Cluster {
        name: Some("local".to_string()),
        namespace: Some("beta".to_string()),
        use_static_endpoints: Some(true),
        ..Default::default()
    };

    let first: ClusterOptions = project(&cluster);
    let second: ClusterOptions = project(&cluster);
    assert_eq!(first, second);
    assert_eq!(cluster.export(), first);
}

#[test]
fn structured_values_are_carried_through() {
    let mut groups = BTreeMap::new();
    groups.insert(
        "light".to_string(),
        ClusterNodeGroup {
            count: 3,
            ..Default::default()
        },
    );
    let cluster = Cluster {
        funding: Some(Funding {
            eth: 1.5,
            ..Default::default()
        }),
        node_groups: Some(groups.clone()),
        ..Default::default()
    };

    let projected: TopologyOptions = project(&cluster);
    assert_eq!(projected.funding.eth, 1.5);
    assert_eq!(projected.node_groups, groups);
}

#[test]
fn cluster_options_plan_skips_topology() {
    let plan = ProjectionPlan::<Cluster, ClusterOptions>::new();

    assert!(plan.fields().contains(&"namespace"));
    assert!(plan.fields().contains(&"api_insecure_tls"));
    assert!(!plan.fields().contains(&"funding"));
    assert!(!plan.fields().contains(&"node_groups"));
}

#[test]
fn custom_source_projects_into_cluster_options() {
    let source = PartialSource {
        name: None,
        api_insecure_tls: Some(true),
    };
    let projected: ClusterOptions = project(&source);

    assert!(projected.api_insecure_tls);
    assert_eq!(projected, ClusterOptions {
        api_insecure_tls: true,
        ..Default::default()
    });
}

#[test]
fn source_reports_absent_fields_as_none() {
    let cluster = namespace_only();

    assert_eq!(
        cluster.field_value("namespace"),
        Some(FieldValue::Text("beta".to_string()))
    );
    assert_eq!(cluster.field_value("name"), None);
    assert_eq!(cluster.field_value("no_such_field"), None);
}

#[test]
fn target_rejects_wrong_kind_on_assign() {
    let mut options = NameOnly::default();
    assert!(!options.assign("name", FieldValue::Flag(true)));
    assert!(!options.assign("namespace", FieldValue::Text("x".to_string())));
    assert_eq!(options, NameOnly::default());

    assert!(options.assign("name", FieldValue::Text("local".to_string())));
    assert_eq!(options.name, "local");
}

#[test]
fn schema_lookup_reports_kinds() {
    assert_eq!(Cluster::field("funding").map(|f| f.kind), Some(FieldKind::Funding));
    assert_eq!(Cluster::field("api_domain").map(|f| f.kind), Some(FieldKind::Text));
    assert_eq!(MismatchedOptions::field("namespace").map(|f| f.kind), Some(FieldKind::Flag));
    assert!(Cluster::field("labels").is_none());
    assert_eq!(FieldValue::Flag(false).kind(), FieldKind::Flag);
}
