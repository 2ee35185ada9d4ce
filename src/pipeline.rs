use std::path::Path;

use serde::Serialize;

use crate::convention::Convention;
use crate::emit::{build_defines, BuildEnv};
use crate::env_file::scan_env_file;
use crate::logging::Logger;
use crate::policy::{mask_secret, resolve_credentials, ProvisionOutcome};

/// Summary of one provisioning pass, suitable for build logs and artifacts.
/// Carries the emitted symbol names but never the rendered literals: the
/// passphrase appears masked, and the report is not a credential store.
#[derive(Clone, Debug, Serialize)]
pub struct ProvisionReport {
    pub outcome: ProvisionOutcome,
    pub convention: Convention,
    pub env_file: String,
    pub ssid: String,
    pub password_masked: String,
    pub force_setup: String,
    pub symbols: Vec<String>,
}

/// Runs the whole hook for one project: scan the provisioning file named by
/// the convention, resolve credentials through the fallback policy, and
/// append the definition set to the given build environment. Infallible by
/// design of the policy - a broken or missing file still produces a full
/// definition set.
pub fn provision_project(
    project_dir: &Path,
    convention: Convention,
    env: &mut dyn BuildEnv,
    logger: &mut Logger,
) -> ProvisionReport {
    let env_path = project_dir.join(convention.env_file_name());
    let scan = scan_env_file(&env_path);
    let (outcome, credentials) = resolve_credentials(&env_path, scan, logger);
    let defines = build_defines(&credentials, convention);
    env.append_defines(&defines);

    ProvisionReport {
        outcome,
        convention,
        env_file: env_path.display().to_string(),
        ssid: credentials.ssid,
        password_masked: mask_secret(&credentials.password),
        force_setup: credentials.force_setup,
        symbols: defines.iter().map(|define| define.name.to_owned()).collect(),
    }
}
