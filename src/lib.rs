//! # canister-envgen - local canister environment files
//!
//! Generates the shell env files a local Internet Computer project sources
//! before building its canisters: one export per declared canister with its
//! local id, and one multi-line export carrying the admin developer principal.
//!
//! ## Architecture
//!
//! - `config`: `GeneratorConfig`, output paths and variable names
//! - `config_loader`: optional YAML overrides for the config
//! - `dfx`: the canister registry and identity resolver collaborators, as
//!   traits plus dfx-backed implementations
//! - `generator`: the single generation pass and the env file renderers
//! - `utils`: filesystem helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use canister_envgen::config::GeneratorConfig;
//! use canister_envgen::dfx::{DfxCommand, DfxIdentityResolver, DfxRegistry};
//! use canister_envgen::generator::generate;
//!
//! let dfx = DfxCommand::new("dfx", ".");
//! let registry = DfxRegistry::open(dfx.clone())?;
//! let identity = DfxIdentityResolver::new(dfx)?;
//!
//! let report = generate(&GeneratorConfig::default(), &registry, &identity)?;
//! println!("wrote {:?}", report.canister_ids_path);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library errors are typed with `thiserror`; the binary reports them through
//! `color_eyre`. Every failure is fatal for the run.

pub mod config;
pub mod config_loader;
pub mod dfx;
pub mod generator;
pub mod utils;
