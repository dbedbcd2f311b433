use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BrushworkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BrushworkError::allocation("x")
            .to_string()
            .contains("allocation error:")
    );
    assert!(
        BrushworkError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        BrushworkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BrushworkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn every_variant_reports_its_message() {
    let cases = [
        (BrushworkError::validation("bad size"), "validation error: bad size"),
        (BrushworkError::allocation("no room"), "allocation error: no room"),
        (BrushworkError::decode("not a png"), "decode error: not a png"),
        (BrushworkError::serde("trailing comma"), "serialization error: trailing comma"),
    ];
    for (err, want) in cases {
        assert_eq!(err.to_string(), want);
    }
}

#[test]
fn anyhow_context_lands_in_other() {
    fn read() -> BrushworkResult<()> {
        use anyhow::Context as _;
        Err::<(), _>(std::io::Error::other("missing")).context("read style parameters")?;
        Ok(())
    }
    let err = read().unwrap_err();
    assert!(matches!(err, BrushworkError::Other(_)));
    assert_eq!(err.to_string(), "read style parameters");
}
