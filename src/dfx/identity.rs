//! Identity resolver: dfx identity name to principal text.

use crate::dfx::command::{DfxCommand, DfxError};
use log::debug;
use std::env;
use std::path::PathBuf;

/// Identity store below the user's home directory
const IDENTITY_STORE: &str = ".config/dfx/identity";

/// Errors raised by an identity resolver
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error(transparent)]
    Dfx(#[from] DfxError),

    #[error("Cannot determine home directory")]
    NoHomeDir,
}

/// What the generator needs to turn an identity name into a principal.
pub trait IdentityResolver {
    /// Principal text of `identity`, `None` when the identity is unknown
    fn principal(&self, identity: &str) -> Result<Option<String>, IdentityError>;
}

/// Resolver backed by the dfx identity store
#[derive(Debug, Clone)]
pub struct DfxIdentityResolver {
    dfx: DfxCommand,
    store: PathBuf,
}

impl DfxIdentityResolver {
    /// Resolver using `~/.config/dfx/identity`
    pub fn new(dfx: DfxCommand) -> Result<Self, IdentityError> {
        let home = env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| IdentityError::NoHomeDir)?;
        Ok(Self::with_store(dfx, home.join(IDENTITY_STORE)))
    }

    /// Resolver using an explicit identity store directory
    pub fn with_store(dfx: DfxCommand, store: impl Into<PathBuf>) -> Self {
        Self {
            dfx,
            store: store.into(),
        }
    }
}

impl IdentityResolver for DfxIdentityResolver {
    fn principal(&self, identity: &str) -> Result<Option<String>, IdentityError> {
        let identity_dir = self.store.join(identity);
        if !identity_dir.is_dir() {
            debug!("Identity '{}' not found in {:?}", identity, self.store);
            return Ok(None);
        }

        let out = self
            .dfx
            .run(&["identity", "get-principal", "--identity", identity])?;
        let principal = out.trim();
        if principal.is_empty() {
            return Ok(None);
        }
        Ok(Some(principal.to_string()))
    }
}
