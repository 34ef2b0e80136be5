//! Configuration scaffolding command

use clap::Args;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# folio configuration

[application]
# trace, debug, info, warn, error
log_level = "info"

[repository]
rest_url = "https://fedora.example.edu/fedora/"
ri_url = "https://fedora.example.edu/fedora/risearch"
# Credentials are optional; use ${VAR} to pull them from the environment
# username = "fedoraAdmin"
# password = "${FOLIO_REPOSITORY_PASSWORD}"
tls_verify = true
collection_model = "islandora:collectionCModel"
compound_model = "islandora:compoundCModel"

[export]
# Collection exported when no --pid is given
# root_pid = "coccc:root"
output_dir = "./export"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command, writing a starter configuration file
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let path = Path::new(config_path);
        if path.exists() && !self.force {
            eprintln!("{config_path} already exists; use --force to overwrite");
            return Ok(2);
        }

        std::fs::write(path, CONFIG_TEMPLATE)?;
        println!("Wrote starter configuration to {config_path}");
        println!("Edit the repository URLs and credentials before running an export.");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: Result<toml::Value, _> = toml::from_str(CONFIG_TEMPLATE);
        assert!(parsed.is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "existing = true\n").unwrap();

        let args = InitArgs { force: false };
        let code = args.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing = true\n"
        );
    }

    #[tokio::test]
    async fn test_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");

        let args = InitArgs { force: false };
        let code = args.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 0);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("[repository]"));
    }
}
