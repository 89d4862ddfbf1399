use super::*;

#[test]
fn default_matches_hosted_deployment() {
    let cfg = LoginConfig::default();
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.session_flag_key, "auth");
    assert_eq!(cfg.toast_duration_ms, 2000);
    assert_eq!(cfg.dashboard_route, "/dashboard");
    assert_eq!(cfg.signup_route, "/auth/signup");
}

#[test]
fn overrides_trim_trailing_slash_from_api_base() {
    let cfg = LoginConfig::from_overrides(Some("https://api.noteum.test/"), None);
    assert_eq!(cfg.api_base, "https://api.noteum.test");
    assert_eq!(cfg.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
}

#[test]
fn overrides_parse_toast_duration() {
    let cfg = LoginConfig::from_overrides(None, Some(" 3500 "));
    assert_eq!(cfg.toast_duration_ms, 3500);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn invalid_overrides_fall_back_to_defaults() {
    let cfg = LoginConfig::from_overrides(Some("   "), Some("soon"));
    assert_eq!(cfg, LoginConfig::default());
}
