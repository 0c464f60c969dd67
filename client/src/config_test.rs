use super::*;

#[test]
fn from_parts_trims_trailing_slash_and_whitespace() {
    let cfg = ClientConfig::from_parts(Some(" https://abc.supabase.co/ "), Some(" anon ")).unwrap();
    assert_eq!(cfg.backend_url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
}

#[test]
fn from_parts_requires_both_values() {
    assert_eq!(ClientConfig::from_parts(None, Some("anon")), None);
    assert_eq!(ClientConfig::from_parts(Some("https://abc.supabase.co"), None), None);
    assert_eq!(ClientConfig::from_parts(Some("   "), Some("anon")), None);
    assert_eq!(ClientConfig::from_parts(Some("https://abc.supabase.co"), Some("")), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_is_none_outside_browser() {
    assert_eq!(ClientConfig::from_document(), None);
}
