use aiforge_core::config::{ForgeConfig, ViewportConfig};
use aiforge_core::error::ForgeError;
use aiforge_core::consts::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

#[test]
fn test_defaults() {
    let config = ForgeConfig::default();
    assert_eq!(config.analysis.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.analysis.model, DEFAULT_MODEL);
    assert_eq!(config.analysis.api_key_env, "API_KEY");
    assert_eq!(config.analysis.timeout_secs, 30);
    assert!(config.analysis.structured_output);
    assert_eq!(config.viewport.zoom_min, 0.5);
    assert_eq!(config.viewport.zoom_max, 3.0);
    assert_eq!(config.demo.settle_delay_ms, 1200);
    assert!(config.gui.urdu_font.is_none());
}

#[test]
fn test_toml_roundtrip() {
    let mut config = ForgeConfig::default();
    config.analysis.model = "gemini-test".into();
    config.analysis.structured_output = false;
    config.viewport.zoom_max = 2.5;
    config.demo.settle_delay_ms = 500;
    config.gui.urdu_font = Some("fonts/NotoNastaliqUrdu.ttf".into());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aiforge.toml");
    config.save(&path).unwrap();

    let loaded = ForgeConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_sections_default() {
    let config: ForgeConfig = toml::from_str(
        r#"
[analysis]
timeout_secs = 5
"#,
    )
    .unwrap();
    assert_eq!(config.analysis.timeout_secs, 5);
    assert_eq!(config.analysis.model, DEFAULT_MODEL);
    assert_eq!(config.viewport, Default::default());
    assert_eq!(config.demo, Default::default());
}

#[test]
fn test_empty_file_is_default() {
    let config: ForgeConfig = toml::from_str("").unwrap();
    assert_eq!(config, ForgeConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[analysis\nmodel = ").unwrap();
    assert!(ForgeConfig::load(&path).is_err());
}

#[test]
fn test_to_toml_string_has_sections() {
    let text = ForgeConfig::default().to_toml_string().unwrap();
    assert!(text.contains("[analysis]"));
    assert!(text.contains("[viewport]"));
    assert!(text.contains("[demo]"));
}

// ---------------------------------------------------------------------------
// API key
// ---------------------------------------------------------------------------

#[test]
fn test_api_key_unset() {
    let mut config = ForgeConfig::default();
    config.analysis.api_key_env = "AIFORGE_TEST_KEY_UNSET_7731".into();
    assert_eq!(config.analysis.api_key(), None);
}

#[test]
fn test_api_key_set() {
    std::env::set_var("AIFORGE_TEST_KEY_SET_7732", "abc123");
    let mut config = ForgeConfig::default();
    config.analysis.api_key_env = "AIFORGE_TEST_KEY_SET_7732".into();
    assert_eq!(config.analysis.api_key().as_deref(), Some("abc123"));
}

#[test]
fn test_api_key_blank_is_none() {
    std::env::set_var("AIFORGE_TEST_KEY_BLANK_7733", "   ");
    let mut config = ForgeConfig::default();
    config.analysis.api_key_env = "AIFORGE_TEST_KEY_BLANK_7733".into();
    assert_eq!(config.analysis.api_key(), None);
}

// ---------------------------------------------------------------------------
// Viewport validation
// ---------------------------------------------------------------------------

fn load_str(text: &str) -> aiforge_core::error::Result<ForgeConfig> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aiforge.toml");
    std::fs::write(&path, text).unwrap();
    ForgeConfig::load(&path)
}

#[test]
fn test_default_viewport_is_valid() {
    assert!(ViewportConfig::default().validate().is_ok());
}

#[test]
fn test_load_rejects_inverted_zoom_bounds() {
    let err = load_str("[viewport]\nzoom_min = 3.0\nzoom_max = 0.5\n").unwrap_err();
    assert!(matches!(err, ForgeError::InvalidConfig(_)), "{err}");
}

#[test]
fn test_load_rejects_non_finite_bounds() {
    let err = load_str("[viewport]\nzoom_max = nan\n").unwrap_err();
    assert!(matches!(err, ForgeError::InvalidConfig(_)), "{err}");

    let err = load_str("[viewport]\nzoom_max = inf\n").unwrap_err();
    assert!(matches!(err, ForgeError::InvalidConfig(_)), "{err}");
}

#[test]
fn test_load_rejects_bad_zoom_step() {
    for step in ["-0.2", "0.0", "nan"] {
        let err = load_str(&format!("[viewport]\nzoom_step = {step}\n")).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidConfig(_)), "{step}: {err}");
    }
}

#[test]
fn test_load_rejects_non_positive_zoom_min() {
    let err = load_str("[viewport]\nzoom_min = 0.0\n").unwrap_err();
    assert!(matches!(err, ForgeError::InvalidConfig(_)), "{err}");
}

#[test]
fn test_sanitized_keeps_valid_limits() {
    let limits = ViewportConfig {
        zoom_min: 0.8,
        zoom_max: 2.0,
        ..ViewportConfig::default()
    };
    assert_eq!(limits.sanitized(), limits);
}

#[test]
fn test_session_survives_unvalidated_config() {
    // Parsed without `load`, so validation is skipped.
    let config: ForgeConfig = toml::from_str("[viewport]\nzoom_min = 3.0\nzoom_max = 0.5").unwrap();
    let s = aiforge_core::session::Session::new(&config);
    assert_eq!(*s.viewport.limits(), ViewportConfig::default());
}
