use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PreviewError::invalid_garment_type("Crewneck")
            .to_string()
            .contains("invalid garment type:")
    );
    assert!(PreviewError::decode("x").to_string().contains("decode error:"));
    assert!(
        PreviewError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PreviewError::EmptyDesign.to_string().contains("empty design"));
}

#[test]
fn invalid_garment_type_keeps_offending_tag() {
    let err = PreviewError::invalid_garment_type("Tank Top");
    assert!(err.to_string().contains("Tank Top"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PreviewError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
