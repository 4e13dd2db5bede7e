//! Canister registry: create declared canisters and resolve their ids.

use crate::dfx::command::{DfxCommand, DfxError};
use crate::dfx::descriptor::{DescriptorError, DfxDescriptor};
use crate::dfx::LOCAL_NETWORK;
use log::{debug, info};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Errors raised by a canister registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Dfx(#[from] DfxError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("Failed to read canister ids from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse canister ids in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What the generator needs from the canister registry.
pub trait CanisterRegistry {
    /// Create every canister declared in the descriptor that does not exist yet
    fn create_all(&self) -> Result<(), RegistryError>;

    /// Declared canister names, in descriptor order
    fn canister_names(&self) -> Vec<String>;

    /// Identifier assigned to `name`, `None` when the registry has none
    fn canister_id(&self, name: &str) -> Result<Option<String>, RegistryError>;
}

/// Registry backed by a local dfx project.
///
/// `canister_ids.json` is parsed on the first lookup and reused until the
/// next `create_all`, which may add ids.
#[derive(Debug)]
pub struct DfxRegistry {
    dfx: DfxCommand,
    descriptor: DfxDescriptor,
    ids: RefCell<Option<BTreeMap<String, String>>>,
}

impl DfxRegistry {
    /// Bind to the project the command runs in, reading its `dfx.json`
    pub fn open(dfx: DfxCommand) -> Result<Self, RegistryError> {
        let descriptor = DfxDescriptor::load(dfx.project_dir())?;
        info!(
            "Loaded {} canister declarations from {:?}",
            descriptor.canister_names().len(),
            dfx.project_dir()
        );
        Ok(Self {
            dfx,
            descriptor,
            ids: RefCell::new(None),
        })
    }

    /// `<project>/.dfx/local/canister_ids.json`
    pub fn canister_ids_path(&self) -> PathBuf {
        self.dfx
            .project_dir()
            .join(".dfx")
            .join(LOCAL_NETWORK)
            .join("canister_ids.json")
    }

    /// name -> id for the local network; absent file means no ids yet
    fn local_ids(&self) -> Result<BTreeMap<String, String>, RegistryError> {
        let path = self.canister_ids_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No canister ids recorded yet at {:?}", path);
                return Ok(BTreeMap::new());
            }
            Err(source) => return Err(RegistryError::Io { path, source }),
        };

        let raw: BTreeMap<String, BTreeMap<String, Value>> = serde_json::from_str(&content)
            .map_err(|source| RegistryError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok(raw
            .into_iter()
            .filter_map(|(name, networks)| {
                networks
                    .get(LOCAL_NETWORK)
                    .and_then(Value::as_str)
                    .map(|id| (name, id.to_string()))
            })
            .collect())
    }
}

impl CanisterRegistry for DfxRegistry {
    fn create_all(&self) -> Result<(), RegistryError> {
        info!("Creating declared canisters on the {} network", LOCAL_NETWORK);
        self.dfx.run(&["canister", "create", "--all"])?;
        self.ids.borrow_mut().take();
        Ok(())
    }

    fn canister_names(&self) -> Vec<String> {
        self.descriptor.canister_names()
    }

    fn canister_id(&self, name: &str) -> Result<Option<String>, RegistryError> {
        let mut cached = self.ids.borrow_mut();
        if cached.is_none() {
            *cached = Some(self.local_ids()?);
        }
        Ok(cached.as_ref().and_then(|ids| ids.get(name).cloned()))
    }
}
