use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Output directory used when nothing overrides it
pub const DEFAULT_OUTPUT_DIR: &str = "env_configs";
/// Identity whose principal is exported as the admin principal
pub const DEFAULT_ADMIN_IDENTITY: &str = "dev_main";

/// Settings for one generator run.
///
/// Every field has a default reproducing the stock local-dev layout, so an
/// empty YAML document (or no document at all) yields a usable config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory receiving both env files, relative to the working directory
    pub output_dir: PathBuf,
    /// File name of the canister id exports
    pub canister_ids_file: String,
    /// File name of the principal exports
    pub principals_file: String,
    /// dfx identity resolved to the admin principal
    pub admin_identity: String,
    /// Prefix of every canister id variable
    pub canister_id_prefix: String,
    /// Variable holding the admin principal block
    pub admin_principal_var: String,
    /// Comment line placed above the admin principal
    pub admin_comment: String,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
    #[error("Invalid variable name: {0}")]
    InvalidVariable(String),
}

impl GeneratorConfig {
    /// Full path of the canister id env file
    pub fn canister_ids_path(&self) -> PathBuf {
        self.output_dir.join(&self.canister_ids_file)
    }

    /// Full path of the principal env file
    pub fn principals_path(&self) -> PathBuf {
        self.output_dir.join(&self.principals_file)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for file in [&self.canister_ids_file, &self.principals_file] {
            if file.trim().is_empty() {
                return Err(ValidationError::InvalidFileName(
                    "env file names must not be empty".to_string(),
                ));
            }
            if file.contains('/') || file.contains('\\') {
                return Err(ValidationError::InvalidFileName(format!(
                    "'{}' must be a bare file name, not a path",
                    file
                )));
            }
        }

        if self.canister_ids_file == self.principals_file {
            return Err(ValidationError::InvalidFileName(format!(
                "canister ids and principals would both be written to '{}'",
                self.canister_ids_file
            )));
        }

        if self.admin_identity.trim().is_empty() {
            return Err(ValidationError::InvalidIdentity(
                "admin identity name must not be empty".to_string(),
            ));
        }

        for var in [&self.canister_id_prefix, &self.admin_principal_var] {
            if !is_shell_identifier(var) {
                return Err(ValidationError::InvalidVariable(format!(
                    "'{}' is not an exportable shell variable name",
                    var
                )));
            }
        }

        Ok(())
    }
}

/// Upper-case shell identifier: `[A-Z_][A-Z0-9_]*`
pub fn is_shell_identifier(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").expect("static pattern compiles"))
        .is_match(name)
}

/// Default implementation for GeneratorConfig
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            canister_ids_file: "dev.canister_ids.env".to_string(),
            principals_file: "dev.principals.env".to_string(),
            admin_identity: DEFAULT_ADMIN_IDENTITY.to_string(),
            canister_id_prefix: "COMMON_CANISTER_IDS_".to_string(),
            admin_principal_var: "COMMON_PRINCIPAL_NAME_ADMIN".to_string(),
            admin_comment: "# main node".to_string(),
        }
    }
}
