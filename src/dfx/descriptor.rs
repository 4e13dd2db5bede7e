//! `dfx.json` deployment descriptor.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Descriptor file name inside a dfx project
pub const DFX_JSON: &str = "dfx.json";

/// Errors that can occur while reading the deployment descriptor
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The parts of `dfx.json` the generator reads.
///
/// Canister entries are kept as raw JSON; only the key set matters here and
/// `serde_json`'s `preserve_order` keeps it in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DfxDescriptor {
    #[serde(default)]
    canisters: Map<String, Value>,
}

impl DfxDescriptor {
    /// Read `<project_dir>/dfx.json`
    pub fn load(project_dir: &Path) -> Result<Self, DescriptorError> {
        let path = project_dir.join(DFX_JSON);
        let content = std::fs::read_to_string(&path).map_err(|source| DescriptorError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DescriptorError::Parse { path, source })
    }

    /// Declared canister names, in declaration order
    pub fn canister_names(&self) -> Vec<String> {
        self.canisters.keys().cloned().collect()
    }
}
