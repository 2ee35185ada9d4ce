//! Build-time Wi-Fi credential provisioning for firmware images.
//!
//! Runs before the firmware is compiled: reads a plaintext `KEY=VALUE`
//! provisioning file from the project root, extracts the recognized
//! credentials, and appends compiled-in symbol definitions to the ambient
//! build environment. When the file is missing or the credential set is
//! incomplete, the hook emits a deterministic setup-mode fallback instead of
//! failing the build, so a fresh checkout always produces an image that can
//! start its own provisioning flow.
//!
//! The stages are small and separately testable: [`env_file::scan_env_file`]
//! reads and strips the file, [`fields::extract_fields`] captures the
//! recognized keys, [`policy::resolve_credentials`] applies the fallback
//! rules, and [`emit::build_defines`] turns the result into the definition
//! set for one of the supported [`Convention`]s. [`pipeline::provision_project`]
//! wires them together for callers that just want the whole hook.

pub mod convention;
pub mod emit;
pub mod env_file;
pub mod escape;
pub mod fields;
pub mod logging;
pub mod pipeline;
pub mod policy;

pub use convention::Convention;
pub use emit::{
    build_defines, BuildEnv, CapturedDefines, CargoDefines, ConsoleDefines, Define, DefineValue,
};
pub use env_file::{scan_env_file, FileScan};
pub use escape::escape_literal;
pub use fields::{extract_fields, ExtractedFields};
pub use logging::Logger;
pub use pipeline::{provision_project, ProvisionReport};
pub use policy::{
    mask_secret, resolve_credentials, ProvisionOutcome, ResolvedCredentials, FORCE_SETUP_OFF,
    FORCE_SETUP_ON,
};
