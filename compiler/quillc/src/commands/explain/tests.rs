use super::*;

#[test]
fn known_codes() {
    let text = explanation("E2002").unwrap_or_default();
    assert!(text.starts_with("E2002: "));
    assert!(text.contains("explicitly"));
    assert!(explanation(" e2006 ").is_some());
}

#[test]
fn unknown_codes() {
    assert_eq!(explanation("E9999"), None);
    assert_eq!(explanation("2002"), None);
}
