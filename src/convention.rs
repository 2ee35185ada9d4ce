use serde::Serialize;

/// The two provisioning-file conventions used by firmware projects in the
/// wild: a `wifi.env` file injected as `PRESET_WIFI_*` macros plus a
/// `FORCE_SETUP_MODE` flag, and a bare `.env` file injected as paired
/// `WIFI_SSID`/`WIFI_PASSWORD` macros with no flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Preset,
    DotEnv,
}

impl Convention {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preset => "preset",
            Self::DotEnv => "dotenv",
        }
    }

    pub fn from_str(raw: &str) -> Result<Self, String> {
        match raw {
            "preset" => Ok(Self::Preset),
            "dotenv" => Ok(Self::DotEnv),
            _ => Err(format!("invalid convention '{raw}', expected preset|dotenv")),
        }
    }

    /// Name of the provisioning file expected at the project root.
    pub fn env_file_name(self) -> &'static str {
        match self {
            Self::Preset => "wifi.env",
            Self::DotEnv => ".env",
        }
    }

    pub fn ssid_symbol(self) -> &'static str {
        match self {
            Self::Preset => "PRESET_WIFI_SSID",
            Self::DotEnv => "WIFI_SSID",
        }
    }

    pub fn password_symbol(self) -> &'static str {
        match self {
            Self::Preset => "PRESET_WIFI_PASSWORD",
            Self::DotEnv => "WIFI_PASSWORD",
        }
    }

    /// The mode-flag symbol, for conventions that carry one.
    pub fn mode_flag_symbol(self) -> Option<&'static str> {
        match self {
            Self::Preset => Some("FORCE_SETUP_MODE"),
            Self::DotEnv => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_both_conventions() {
        assert_eq!(Convention::from_str("preset").unwrap(), Convention::Preset);
        assert_eq!(Convention::from_str("dotenv").unwrap(), Convention::DotEnv);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = Convention::from_str("yaml").expect_err("unknown convention must fail");
        assert!(err.contains("invalid convention"));
    }

    #[test]
    fn preset_carries_mode_flag_dotenv_does_not() {
        assert_eq!(
            Convention::Preset.mode_flag_symbol(),
            Some("FORCE_SETUP_MODE")
        );
        assert_eq!(Convention::DotEnv.mode_flag_symbol(), None);
    }
}
