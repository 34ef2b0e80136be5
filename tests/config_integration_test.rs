//! Integration tests for configuration loading

use folio::config::load_config;
use folio::domain::FolioError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const VALID_CONFIG: &str = r#"
[application]
log_level = "debug"

[repository]
rest_url = "https://fedora.example.edu/fedora/"
ri_url = "https://fedora.example.edu/fedora/risearch"

[export]
root_pid = "coccc:root"
output_dir = "./out"
"#;

#[test]
fn load_valid_config() {
    let file = write_config(VALID_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.repository.rest_url,
        "https://fedora.example.edu/fedora/"
    );
    assert_eq!(config.export.root_pid.as_deref(), Some("coccc:root"));
    assert_eq!(config.export.output_dir, "./out");
    // Defaults fill the rest
    assert_eq!(
        config.repository.collection_model,
        "islandora:collectionCModel"
    );
    assert!(config.repository.tls_verify);
    assert!(!config.logging.local_enabled);
}

#[test]
fn minimal_config_uses_defaults() {
    let file = write_config(
        r#"
[repository]
rest_url = "http://localhost:8080/fedora/"
ri_url = "http://localhost:8080/fedora/risearch"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.export.output_dir, "./export");
    assert!(config.export.root_pid.is_none());
}

#[test]
fn env_var_substitution_in_values() {
    std::env::set_var("FOLIO_TEST_CONFIG_PASSWORD", "hunter2");
    let file = write_config(
        r#"
[repository]
rest_url = "http://localhost:8080/fedora/"
ri_url = "http://localhost:8080/fedora/risearch"
username = "admin"
password = "${FOLIO_TEST_CONFIG_PASSWORD}"
"#,
    );
    let config = load_config(file.path()).unwrap();
    std::env::remove_var("FOLIO_TEST_CONFIG_PASSWORD");

    use secrecy::ExposeSecret;
    assert_eq!(
        config.repository.password.unwrap().expose_secret().as_ref(),
        "hunter2"
    );
}

#[test]
fn missing_substitution_var_is_error() {
    let file = write_config(
        r#"
[repository]
rest_url = "http://localhost:8080/fedora/"
ri_url = "http://localhost:8080/fedora/risearch"
password = "${FOLIO_TEST_CONFIG_UNSET_VAR}"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::Configuration(_)));
    assert!(err.to_string().contains("FOLIO_TEST_CONFIG_UNSET_VAR"));
}

#[test]
fn username_override_from_environment() {
    std::env::set_var("FOLIO_REPOSITORY_USERNAME", "overridden");
    let file = write_config(VALID_CONFIG);
    let config = load_config(file.path()).unwrap();
    std::env::remove_var("FOLIO_REPOSITORY_USERNAME");

    assert_eq!(config.repository.username.as_deref(), Some("overridden"));
}

#[test]
fn invalid_log_level_fails_validation() {
    let file = write_config(
        r#"
[application]
log_level = "loud"

[repository]
rest_url = "http://localhost:8080/fedora/"
ri_url = "http://localhost:8080/fedora/risearch"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("log_level"));
}

#[test]
fn invalid_root_pid_fails_validation() {
    let file = write_config(
        r#"
[repository]
rest_url = "http://localhost:8080/fedora/"
ri_url = "http://localhost:8080/fedora/risearch"

[export]
root_pid = "not-a-pid"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("root_pid"));
}

#[test]
fn malformed_toml_is_configuration_error() {
    let file = write_config("this is not toml = = =");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::Configuration(_)));
}

#[test]
fn missing_repository_section_is_error() {
    let file = write_config("[application]\nlog_level = \"info\"\n");
    assert!(load_config(file.path()).is_err());
}
