use links_import::config::settings::{DEFAULT_BASE_URL, DEFAULT_TOKEN};
use links_import::Settings;

// Runs alone in its own test binary: the override variables are process-wide,
// so no other test here may call Settings::load.
#[test]
fn test_env_overrides_beat_file_and_defaults() {
    std::env::set_var("LINKS_API_URL", "https://other.example.com/");
    std::env::set_var("LINKS_API_TOKEN", "env-token");

    let settings = Settings::load("no-such-settings-file.toml").unwrap();
    assert_eq!(settings.api.base_url, "https://other.example.com");
    assert_eq!(settings.api.token, "env-token");

    std::env::remove_var("LINKS_API_URL");
    std::env::remove_var("LINKS_API_TOKEN");

    let settings = Settings::load("no-such-settings-file.toml").unwrap();
    assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.api.token, DEFAULT_TOKEN);
}
