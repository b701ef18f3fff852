use super::*;

#[test]
fn display_names_offending_node() {
    let err = SceneError::singular_transform(NodeId::from_raw(7), "hud");
    let msg = err.to_string();
    assert!(msg.contains("#7"), "{msg}");
    assert!(msg.contains("'hud'"), "{msg}");

    let err = SceneError::orphan_filter(NodeId::from_raw(3), "label-filter");
    assert!(err.to_string().contains("has no parent"));
    assert_eq!(err.node(), Some(NodeId::from_raw(3)));
}

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::SingularMatrix { det: 0.0 }
            .to_string()
            .contains("singular matrix")
    );
    assert_eq!(SceneError::validation("x").node(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
