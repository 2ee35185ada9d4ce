use std::path::PathBuf;

use crate::convention::Convention;
use crate::escape::escape_literal;
use crate::policy::ResolvedCredentials;

/// How a definition's value is rendered. String literals are stored raw and
/// escaped only at render time; tokens are never quoted or escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefineValue {
    StringLiteral(String),
    Token(String),
}

/// One build-symbol definition, e.g. `PRESET_WIFI_SSID=\"Home Net\"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Define {
    pub name: &'static str,
    pub value: DefineValue,
}

impl Define {
    pub fn string_literal(name: &'static str, raw: impl Into<String>) -> Self {
        Self {
            name,
            value: DefineValue::StringLiteral(raw.into()),
        }
    }

    pub fn token(name: &'static str, token: impl Into<String>) -> Self {
        Self {
            name,
            value: DefineValue::Token(token.into()),
        }
    }

    /// The macro text exactly as the firmware build consumes it: string
    /// values wrapped in escaped double quotes so they survive the compiler
    /// command line as C string literals, flag tokens verbatim.
    pub fn render_macro(&self) -> String {
        match &self.value {
            DefineValue::StringLiteral(raw) => {
                format!("{}=\\\"{}\\\"", self.name, escape_literal(raw))
            }
            DefineValue::Token(token) => format!("{}={}", self.name, token),
        }
    }

    /// The unescaped value, for environment-style consumers.
    pub fn raw_value(&self) -> &str {
        match &self.value {
            DefineValue::StringLiteral(raw) => raw,
            DefineValue::Token(token) => token,
        }
    }
}

/// Seam to the ambient build environment. The pipeline hands the finished
/// definition set to exactly one of these per run.
pub trait BuildEnv {
    fn append_defines(&mut self, defines: &[Define]);
}

/// Collects definitions in memory, for tests and for callers that map them
/// onto their own output format.
#[derive(Debug, Default)]
pub struct CapturedDefines {
    pub defines: Vec<Define>,
}

impl CapturedDefines {
    pub fn rendered(&self) -> Vec<String> {
        self.defines.iter().map(Define::render_macro).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Define> {
        self.defines.iter().find(|define| define.name == name)
    }
}

impl BuildEnv for CapturedDefines {
    fn append_defines(&mut self, defines: &[Define]) {
        self.defines.extend_from_slice(defines);
    }
}

/// Prints one definition per stdout line for the invoking build tool.
/// With `dflag_prefix` each line is ready to splice into compiler flags.
pub struct ConsoleDefines {
    pub dflag_prefix: bool,
}

impl BuildEnv for ConsoleDefines {
    fn append_defines(&mut self, defines: &[Define]) {
        for define in defines {
            if self.dflag_prefix {
                println!("-D{}", define.render_macro());
            } else {
                println!("{}", define.render_macro());
            }
        }
    }
}

/// Prints `cargo:` directives so a firmware crate can run the hook from its
/// build script and read the values back with `env!()`. Values go out raw:
/// they land in environment variables, not in C source.
pub struct CargoDefines {
    pub rerun_path: Option<PathBuf>,
}

impl BuildEnv for CargoDefines {
    fn append_defines(&mut self, defines: &[Define]) {
        if let Some(path) = &self.rerun_path {
            println!("cargo:rerun-if-changed={}", path.display());
        }
        for define in defines {
            println!("cargo:rustc-env={}={}", define.name, define.raw_value());
        }
    }
}

/// The fixed symbol set for one convention, in stable order: SSID, password,
/// then the mode flag where the convention carries one. Emitted on every
/// run, fallback or not, so the firmware source can assume the symbols
/// exist.
pub fn build_defines(credentials: &ResolvedCredentials, convention: Convention) -> Vec<Define> {
    let mut defines = vec![
        Define::string_literal(convention.ssid_symbol(), credentials.ssid.clone()),
        Define::string_literal(convention.password_symbol(), credentials.password.clone()),
    ];
    if let Some(flag) = convention.mode_flag_symbol() {
        defines.push(Define::token(flag, credentials.force_setup.clone()));
    }
    defines
}
