//! dfx-backed collaborators.
//!
//! The generator only talks to two narrow capability sets: a canister
//! registry (create, enumerate, resolve ids) and an identity resolver
//! (identity name to principal text). This module defines both traits and
//! the implementations that drive a local `dfx` project:
//!
//! - `command.rs`: runs the `dfx` executable and captures stdout
//! - `descriptor.rs`: parses the `dfx.json` deployment descriptor
//! - `registry.rs`: `CanisterRegistry` and the dfx-backed `DfxRegistry`
//! - `identity.rs`: `IdentityResolver` and the dfx-backed `DfxIdentityResolver`
//!
//! Only the `local` network is supported.

pub mod command;
pub mod descriptor;
pub mod identity;
pub mod registry;

pub use command::{DfxCommand, DfxError};
pub use descriptor::{DescriptorError, DfxDescriptor};
pub use identity::{DfxIdentityResolver, IdentityError, IdentityResolver};
pub use registry::{CanisterRegistry, DfxRegistry, RegistryError};

/// Network whose canister ids are exported
pub const LOCAL_NETWORK: &str = "local";
