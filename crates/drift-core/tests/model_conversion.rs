use drift_core::model::{parse_mapping, Mapping, ModelError, Node, NodeKind, Scalar};

#[test]
fn yaml_document_normalizes_to_mapping() {
    let mapping = parse_mapping(
        "kind: Service\nmetadata:\n  name: web\n  labels:\n    app: web\nports:\n  - 80\n  - 443\n",
    )
    .expect("valid document");

    assert_eq!(mapping["kind"].as_str(), Some("Service"));

    let metadata = mapping["metadata"].as_mapping().expect("metadata mapping");
    assert_eq!(metadata["name"].as_str(), Some("web"));

    let ports = mapping["ports"].as_sequence().expect("ports sequence");
    assert_eq!(ports, &vec![Node::Scalar(Scalar::Int(80)), Node::Scalar(Scalar::Int(443))]);
}

#[test]
fn non_mapping_root_is_rejected() {
    let err = parse_mapping("- a\n- b\n").expect_err("sequence root");
    match err {
        ModelError::UnexpectedRoot { kind } => assert_eq!(kind, NodeKind::Sequence),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn scalar_yaml_keys_render_as_field_names() {
    // YAML permits non-string keys; they must address like ordinary fields.
    let mapping = parse_mapping("1: one\ntrue: yes\n").expect("scalar keys");
    assert_eq!(mapping["1"].as_str(), Some("one"));
    assert!(mapping.contains_key("true"));
}

#[test]
fn json_value_converts_like_yaml() {
    let json = serde_json::json!({"replicas": 3, "paused": false, "note": null});
    let node = Node::try_from(json).expect("json conversion");
    let mapping = node.as_mapping().expect("object root");

    assert_eq!(mapping["replicas"], Node::Scalar(Scalar::Int(3)));
    assert_eq!(mapping["paused"], Node::Scalar(Scalar::Bool(false)));
    assert_eq!(mapping["note"], Node::Scalar(Scalar::Null));
}

#[test]
fn rendering_is_locale_independent_and_stable() {
    assert_eq!(Scalar::Int(123).render(), "123");
    assert_eq!(Scalar::Float(123.456).render(), "123.456");
    assert_eq!(Scalar::Bool(true).render(), "true");
    assert_eq!(Scalar::Null.render(), "");

    let seq = Node::Sequence(vec![
        Node::Scalar(Scalar::String("1".into())),
        Node::Scalar(Scalar::String("2".into())),
    ]);
    assert_eq!(seq.render(), "[1 2]");

    let mut entries = Mapping::new();
    entries.insert("b".to_string(), Node::Scalar(Scalar::Int(2)));
    entries.insert("a".to_string(), Node::Scalar(Scalar::Int(1)));
    // Opaque mapping rendering sorts keys regardless of insertion order.
    assert_eq!(Node::Mapping(entries).render(), "map[a:1 b:2]");
}
