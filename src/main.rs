use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use wifi_provision::logging::ensure_parent_dir;
use wifi_provision::{
    provision_project, CargoDefines, ConsoleDefines, Convention, Logger, ProvisionReport,
};

#[derive(Debug, Parser)]
#[command(name = "wifi_provision")]
#[command(about = "Build-time Wi-Fi credential provisioning hook")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Emit(EmitArgs),
    Init(InitArgs),
}

#[derive(Debug, Args)]
struct EmitArgs {
    #[arg(long)]
    project_dir: Option<PathBuf>,
    #[arg(long, default_value = "preset")]
    convention: String,
    #[arg(long, default_value = "defines")]
    format: String,
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct InitArgs {
    #[arg(long)]
    project_dir: Option<PathBuf>,
    #[arg(long, default_value = "preset")]
    convention: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Bare macro text, one definition per line.
    Defines,
    /// Same, prefixed with `-D` for splicing into compiler flags.
    Dflags,
    /// `cargo:` directives for use from a firmware crate's build script.
    Cargo,
}

fn parse_format(raw: &str) -> Result<OutputFormat> {
    match raw {
        "defines" => Ok(OutputFormat::Defines),
        "dflags" => Ok(OutputFormat::Dflags),
        "cargo" => Ok(OutputFormat::Cargo),
        _ => Err(anyhow!("invalid format '{raw}', expected defines|dflags|cargo")),
    }
}

fn parse_convention(raw: &str) -> Result<Convention> {
    Convention::from_str(raw).map_err(|err| anyhow!(err))
}

/// Explicit flag wins, then the environment, then the working directory.
fn resolve_project_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("WIFI_PROVISION_PROJECT_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    std::env::current_dir().context("failed to determine current directory")
}

fn run_emit(logger: &mut Logger, args: EmitArgs) -> Result<()> {
    let project_dir = resolve_project_dir(args.project_dir)?;
    let convention = parse_convention(&args.convention)?;
    let format = parse_format(&args.format)?;

    let report = match format {
        OutputFormat::Defines => {
            let mut env = ConsoleDefines {
                dflag_prefix: false,
            };
            provision_project(&project_dir, convention, &mut env, logger)
        }
        OutputFormat::Dflags => {
            let mut env = ConsoleDefines { dflag_prefix: true };
            provision_project(&project_dir, convention, &mut env, logger)
        }
        OutputFormat::Cargo => {
            let mut env = CargoDefines {
                rerun_path: Some(project_dir.join(convention.env_file_name())),
            };
            provision_project(&project_dir, convention, &mut env, logger)
        }
    };

    if let Some(path) = args.report {
        write_report(&path, &report)?;
        logger.info(format!("wrote provisioning report {}", path.display()));
    }
    Ok(())
}

fn write_report(path: &Path, report: &ProvisionReport) -> Result<()> {
    ensure_parent_dir(path)?;
    let json =
        serde_json::to_string_pretty(report).context("failed to serialize provisioning report")?;
    fs::write(path, json).with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}

fn run_init(logger: &mut Logger, args: InitArgs) -> Result<()> {
    let project_dir = resolve_project_dir(args.project_dir)?;
    let convention = parse_convention(&args.convention)?;
    let path = project_dir.join(format!("{}.example", convention.env_file_name()));
    if path.exists() {
        return Err(anyhow!("{} already exists, not overwriting", path.display()));
    }
    fs::write(&path, template_body(convention))
        .with_context(|| format!("failed to write {}", path.display()))?;
    logger.info(format!(
        "wrote {}; copy it to {} and fill in your network credentials",
        path.display(),
        convention.env_file_name()
    ));
    Ok(())
}

fn template_body(convention: Convention) -> String {
    let name = convention.env_file_name();
    let mut body = format!(
        "# Wi-Fi provisioning for the firmware build.\n\
         # Copy this file to {name} and fill in your network credentials.\n\
         # Keep {name} out of version control.\n\
         WIFI_SSID=your-network-name\n\
         WIFI_PASSWORD=your-network-password\n"
    );
    if convention.mode_flag_symbol().is_some() {
        body.push_str(
            "# Set to 1 to boot into setup mode even when credentials are present.\n\
             FORCE_SETUP_MODE=0\n",
        );
    }
    body
}

fn run(cli: Cli) -> Result<()> {
    let mut logger = Logger::from_env()?;
    match cli.command {
        Commands::Emit(args) => run_emit(&mut logger, args),
        Commands::Init(args) => run_init(&mut logger, args),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}
