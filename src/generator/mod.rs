//! # Env File Generator
//!
//! Produces the two local-dev env files from the current registry and
//! identity state:
//!
//! ```text
//! env_configs/
//! |-- dev.canister_ids.env   # export COMMON_CANISTER_IDS_<NAME>=<id>, one per canister
//! \-- dev.principals.env     # export COMMON_PRINCIPAL_NAME_ADMIN="..." block
//! ```
//!
//! A run is strictly sequential:
//!
//! 1. Create every declared canister through the registry
//! 2. Enumerate the declared canister names
//! 3. Ensure the output directory exists
//! 4. Resolve each name to its id
//! 5. Write the canister id file
//! 6. Resolve the admin identity to its principal
//! 7. Render the principal block
//! 8. Write the principal file
//!
//! Both files are rewritten in full on every run, so repeated runs against
//! unchanged state produce identical bytes. Other files in the output
//! directory are never touched.
//!
//! Unresolved canister ids and an unknown admin identity are not errors: the
//! literal text `undefined` is written in their place and a warning is logged.
//! Any registry, identity or filesystem failure aborts the run at that step.

pub mod render;

pub use render::{canister_id_var, render_canister_ids, render_principals, UNDEFINED};

use crate::config::GeneratorConfig;
use crate::dfx::{CanisterRegistry, IdentityError, IdentityResolver, RegistryError};
use crate::utils::fs::{ensure_dir, write_truncate, FsError};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Errors that abort a generator run
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Canister registry failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Identity resolution failed: {0}")]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub canister_ids_path: PathBuf,
    pub principals_path: PathBuf,
    /// Canister names in the order they were written
    pub canisters: Vec<String>,
    /// Canisters written as `undefined`
    pub undefined_ids: Vec<String>,
    pub admin_principal: Option<String>,
}

/// Run the generator once against the given collaborators.
pub fn generate(
    config: &GeneratorConfig,
    registry: &dyn CanisterRegistry,
    identity: &dyn IdentityResolver,
) -> Result<GenerationReport, GenerateError> {
    // Provision whatever the descriptor declares but the replica lacks
    registry.create_all()?;
    info!("Canister creation finished");

    let names = registry.canister_names();
    info!("Exporting ids for {} canisters", names.len());

    // Reused as-is when present
    ensure_dir(&config.output_dir)?;

    let mut ids = Vec::with_capacity(names.len());
    let mut undefined_ids = Vec::new();
    for name in &names {
        let id = registry.canister_id(name)?;
        match &id {
            Some(id) => debug!("{} = {}", canister_id_var(&config.canister_id_prefix, name), id),
            None => {
                warn!("Canister '{}' has no id, writing '{}'", name, UNDEFINED);
                undefined_ids.push(name.clone());
            }
        }
        ids.push((name.clone(), id));
    }

    // Truncate-and-write, never merged with a previous run
    let canister_ids_path = config.canister_ids_path();
    write_truncate(
        &canister_ids_path,
        &render_canister_ids(&config.canister_id_prefix, &ids),
    )?;
    info!("Wrote {:?}", canister_ids_path);

    // An unknown identity is not an error
    let admin_principal = identity.principal(&config.admin_identity)?;
    if admin_principal.is_none() {
        warn!(
            "Identity '{}' has no principal, writing '{}'",
            config.admin_identity, UNDEFINED
        );
    }

    let principals_path = config.principals_path();
    let content = render_principals(
        &config.admin_principal_var,
        &config.admin_comment,
        admin_principal.as_deref(),
    );
    write_truncate(&principals_path, &content)?;
    info!("Wrote {:?}", principals_path);

    Ok(GenerationReport {
        canister_ids_path,
        principals_path,
        canisters: names,
        undefined_ids,
        admin_principal,
    })
}
