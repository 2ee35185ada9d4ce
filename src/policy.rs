use std::path::Path;

use serde::Serialize;

use crate::env_file::FileScan;
use crate::fields::{extract_fields, ExtractedFields};
use crate::logging::Logger;

pub const FORCE_SETUP_ON: &str = "1";
pub const FORCE_SETUP_OFF: &str = "0";

/// Which branch of the fallback policy produced the credentials. The build
/// proceeds in every case; the firmware decides at boot what an empty SSID
/// means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvisionOutcome {
    FileAbsent,
    IncompleteCredentials,
    Configured,
}

impl ProvisionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileAbsent => "file-absent",
            Self::IncompleteCredentials => "incomplete-credentials",
            Self::Configured => "configured",
        }
    }
}

/// The value set that will be compiled into the image. Always fully
/// populated: fallback paths fill it with empty credentials and the
/// setup-mode flag switched on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub ssid: String,
    pub password: String,
    /// Raw flag token, passed through exactly as written in the file. Never
    /// parsed as a boolean here; the firmware's preprocessor interprets it.
    pub force_setup: String,
}

impl ResolvedCredentials {
    fn setup_fallback() -> Self {
        Self {
            ssid: String::new(),
            password: String::new(),
            force_setup: FORCE_SETUP_ON.to_owned(),
        }
    }
}

/// Decides what gets compiled in. Exactly one of three ways out: the file is
/// absent, the credentials are unusable, or both credentials are present.
/// Whenever either credential is missing or empty, both come out empty and
/// the setup-mode flag comes out "1" so the image never carries a half
/// handshake.
pub fn resolve_credentials(
    env_path: &Path,
    scan: FileScan,
    logger: &mut Logger,
) -> (ProvisionOutcome, ResolvedCredentials) {
    let lines = match scan {
        FileScan::Absent => {
            logger.info(format!(
                "no {} found - building for setup mode only",
                env_path.display()
            ));
            return (ProvisionOutcome::FileAbsent, ResolvedCredentials::setup_fallback());
        }
        FileScan::Unreadable(err) => {
            logger.warn(format!(
                "could not read {}: {err} - building for setup mode only",
                env_path.display()
            ));
            return (
                ProvisionOutcome::IncompleteCredentials,
                ResolvedCredentials::setup_fallback(),
            );
        }
        FileScan::Lines(lines) => lines,
    };

    logger.info(format!("loading wifi config from {}", env_path.display()));
    let fields = extract_fields(&lines);
    decide(env_path, fields, logger)
}

fn decide(
    env_path: &Path,
    fields: ExtractedFields,
    logger: &mut Logger,
) -> (ProvisionOutcome, ResolvedCredentials) {
    let ssid = fields.ssid.unwrap_or_default();
    let password = fields.password.unwrap_or_default();

    if ssid.is_empty() || password.is_empty() {
        logger.warn(format!(
            "wifi ssid or password missing in {} - building for setup mode only",
            env_path.display()
        ));
        return (
            ProvisionOutcome::IncompleteCredentials,
            ResolvedCredentials::setup_fallback(),
        );
    }

    let force_setup = match fields.force_setup {
        Some(token) if !token.is_empty() => token,
        _ => FORCE_SETUP_OFF.to_owned(),
    };

    logger.info(format!(
        "wifi configured: ssid={ssid} password={}",
        mask_secret(&password)
    ));
    (
        ProvisionOutcome::Configured,
        ResolvedCredentials {
            ssid,
            password,
            force_setup,
        },
    )
}

/// One asterisk per character, so logs and reports reveal length only.
pub fn mask_secret(value: &str) -> String {
    "*".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_logger() -> Logger {
        Logger::new(None).expect("logger")
    }

    fn lines(raw: &[&str]) -> FileScan {
        FileScan::Lines(raw.iter().map(|s| (*s).to_owned()).collect())
    }

    #[test]
    fn absent_file_falls_back_with_flag_on() {
        let (outcome, creds) = resolve_credentials(
            Path::new("wifi.env"),
            FileScan::Absent,
            &mut quiet_logger(),
        );
        assert_eq!(outcome, ProvisionOutcome::FileAbsent);
        assert_eq!(creds, ResolvedCredentials::setup_fallback());
    }

    #[test]
    fn unreadable_file_counts_as_incomplete() {
        let err = std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8");
        let (outcome, creds) = resolve_credentials(
            Path::new("wifi.env"),
            FileScan::Unreadable(err),
            &mut quiet_logger(),
        );
        assert_eq!(outcome, ProvisionOutcome::IncompleteCredentials);
        assert_eq!(creds.force_setup, FORCE_SETUP_ON);
    }

    #[test]
    fn complete_credentials_pass_through() {
        let (outcome, creds) = resolve_credentials(
            Path::new("wifi.env"),
            lines(&["WIFI_SSID=Home Net", "WIFI_PASSWORD=hunter2"]),
            &mut quiet_logger(),
        );
        assert_eq!(outcome, ProvisionOutcome::Configured);
        assert_eq!(creds.ssid, "Home Net");
        assert_eq!(creds.password, "hunter2");
        assert_eq!(creds.force_setup, FORCE_SETUP_OFF);
    }

    #[test]
    fn missing_password_empties_both_credentials() {
        let (outcome, creds) = resolve_credentials(
            Path::new("wifi.env"),
            lines(&["WIFI_SSID=Home Net", "FORCE_SETUP_MODE=0"]),
            &mut quiet_logger(),
        );
        assert_eq!(outcome, ProvisionOutcome::IncompleteCredentials);
        assert_eq!(creds.ssid, "");
        assert_eq!(creds.password, "");
        // The flag from the file must not survive the fallback.
        assert_eq!(creds.force_setup, FORCE_SETUP_ON);
    }

    #[test]
    fn empty_assignment_counts_as_missing() {
        let (outcome, _) = resolve_credentials(
            Path::new("wifi.env"),
            lines(&["WIFI_SSID=Home Net", "WIFI_PASSWORD="]),
            &mut quiet_logger(),
        );
        assert_eq!(outcome, ProvisionOutcome::IncompleteCredentials);
    }

    #[test]
    fn flag_token_passes_through_verbatim() {
        let (_, creds) = resolve_credentials(
            Path::new("wifi.env"),
            lines(&["WIFI_SSID=a", "WIFI_PASSWORD=b", "FORCE_SETUP_MODE=true"]),
            &mut quiet_logger(),
        );
        assert_eq!(creds.force_setup, "true");
    }

    #[test]
    fn empty_flag_assignment_defaults_off() {
        let (_, creds) = resolve_credentials(
            Path::new("wifi.env"),
            lines(&["WIFI_SSID=a", "WIFI_PASSWORD=b", "FORCE_SETUP_MODE="]),
            &mut quiet_logger(),
        );
        assert_eq!(creds.force_setup, FORCE_SETUP_OFF);
    }

    #[test]
    fn mask_covers_length_in_characters() {
        assert_eq!(mask_secret("hunter2"), "*******");
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("päss"), "****");
    }
}
