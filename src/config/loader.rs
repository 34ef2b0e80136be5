//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FolioConfig;
use crate::config::secret_string;
use crate::domain::errors::FolioError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FolioConfig
/// 4. Applies environment variable overrides (FOLIO_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use folio::config::load_config;
///
/// let config = load_config("folio.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FolioConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FolioError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FolioError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: FolioConfig = toml::from_str(&contents)
        .map_err(|e| FolioError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        FolioError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Referencing an unset variable is an
/// error, reported once per variable.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env var pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FolioError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the FOLIO_* prefix
///
/// Variables follow the pattern FOLIO_<SECTION>_<KEY>, for example
/// FOLIO_REPOSITORY_REST_URL or FOLIO_EXPORT_OUTPUT_DIR.
fn apply_env_overrides(config: &mut FolioConfig) {
    if let Ok(value) = std::env::var("FOLIO_REPOSITORY_REST_URL") {
        config.repository.rest_url = value;
    }
    if let Ok(value) = std::env::var("FOLIO_REPOSITORY_RI_URL") {
        config.repository.ri_url = value;
    }
    if let Ok(value) = std::env::var("FOLIO_REPOSITORY_USERNAME") {
        config.repository.username = Some(value);
    }
    if let Ok(value) = std::env::var("FOLIO_REPOSITORY_PASSWORD") {
        config.repository.password = Some(secret_string(value));
    }
    if let Ok(value) = std::env::var("FOLIO_EXPORT_ROOT_PID") {
        config.export.root_pid = Some(value);
    }
    if let Ok(value) = std::env::var("FOLIO_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = value;
    }
}
