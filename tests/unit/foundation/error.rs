use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CartelloError::SessionConflict
            .to_string()
            .contains("session conflict")
    );
    assert!(
        CartelloError::PermissionDenied
            .to_string()
            .contains("permission denied")
    );
    assert!(
        CartelloError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        CartelloError::resource_missing("x")
            .to_string()
            .contains("resource missing:")
    );
    assert!(CartelloError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CartelloError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
