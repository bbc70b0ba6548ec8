use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process;

use ark_helper::config::AttributeOverrides;
use ark_helper::error::ArkError;
use ark_helper::output::{self, OutputFormat};
use ark_helper::plan::{plan, PlanOptions};
use ark_helper::platform::{self, PlatformDescriptor, PlatformFamily};
use ark_helper::resolver::{resolve_with, Resolution, ResolveContext};

#[derive(Parser)]
#[command(name = "ark")]
#[command(version = "0.1.0")]
#[command(about = "Ark helper - platform packages and defaults for archive installs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(
        long,
        value_name = "FILE",
        global = true,
        help = "Node attributes JSON file with ark overrides"
    )]
    attributes: Option<PathBuf>,
}

#[derive(Args)]
struct PlatformArgs {
    #[arg(
        long,
        conflicts_with = "family",
        help = "Platform name, e.g. ubuntu, centos, mac_os_x"
    )]
    platform: Option<String>,

    #[arg(long, help = "Platform family, e.g. debian, rhel, windows")]
    family: Option<String>,

    #[arg(
        long = "platform-version",
        value_name = "VERSION",
        default_value = "",
        help = "Platform version"
    )]
    platform_version: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Show packages and attributes for a platform")]
    Resolve {
        #[command(flatten)]
        target: PlatformArgs,
    },

    #[command(about = "List the packages required on a platform")]
    Packages {
        #[command(flatten)]
        target: PlatformArgs,
    },

    #[command(about = "Show default attributes for a platform")]
    Attributes {
        #[arg(help = "Single attribute to print")]
        name: Option<String>,

        #[command(flatten)]
        target: PlatformArgs,
    },

    #[command(about = "Show the converge plan for the default recipe")]
    Plan {
        #[command(flatten)]
        target: PlatformArgs,

        #[arg(long, help = "Include the 7-Zip recipe on Windows")]
        seven_zip: bool,
    },

    #[command(about = "Detect this host's platform and resolve it")]
    Detect {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ArkError>() {
            Some(ark_error) => eprint!("{ark_error}"),
            None => eprintln!("{} {:#}", "✗".red().bold(), e),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }
    ark_helper::logging::init_logging(cli.verbose)?;

    let overrides = load_overrides(cli.attributes.as_deref())?;

    let rendered = match cli.command {
        Commands::Resolve { target } => {
            let resolution = resolve_target(&target, &overrides);
            output::render_resolution(&resolution, target.format)?
        }
        Commands::Packages { target } => {
            let resolution = resolve_target(&target, &overrides);
            output::render_packages(&resolution, target.format)?
        }
        Commands::Attributes { name, target } => {
            let resolution = resolve_target(&target, &overrides);
            match name {
                Some(name) => output::render_attribute(&resolution, &name, target.format)?,
                None => output::render_attributes(&resolution, target.format)?,
            }
        }
        Commands::Plan { target, seven_zip } => {
            let resolution = resolve_target(&target, &overrides);
            let actions = plan(&resolution, &PlanOptions { seven_zip });
            output::render_plan(&actions, target.format)?
        }
        Commands::Detect { format } => {
            let descriptor = platform::detect();
            let context = if descriptor.family() == PlatformFamily::Windows {
                ResolveContext::from_env()
            } else {
                ResolveContext::default()
            };
            let resolution = resolve_with(&descriptor, &context).with_overrides(&overrides);
            output::render_resolution(&resolution, format)?
        }
    };

    print!("{rendered}");
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn load_overrides(path: Option<&Path>) -> Result<AttributeOverrides> {
    let overrides = match path {
        Some(path) => AttributeOverrides::load(path)?,
        None => AttributeOverrides::load_default()?,
    };
    Ok(overrides)
}

fn descriptor_for(target: &PlatformArgs) -> PlatformDescriptor {
    match (&target.platform, &target.family) {
        (Some(name), _) => PlatformDescriptor::from_platform(name, target.platform_version.clone()),
        (None, Some(family)) => PlatformDescriptor::new(
            PlatformFamily::from_platform_name(family),
            target.platform_version.clone(),
        ),
        (None, None) => PlatformDescriptor::new(
            PlatformFamily::Other,
            target.platform_version.clone(),
        ),
    }
}

fn resolve_target(target: &PlatformArgs, overrides: &AttributeOverrides) -> Resolution {
    let descriptor = descriptor_for(target);
    resolve_with(&descriptor, &ResolveContext::default()).with_overrides(overrides)
}
