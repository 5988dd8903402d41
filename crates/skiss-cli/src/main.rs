mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use skiss_core::error::SkissError;
use skiss_core::profile::schema::HeuristicProfile;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skiss",
    version,
    about = "Extract a title and heading outline from PDF text"
)]
struct Cli {
    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Heuristic profile selection shared by extract and explain.
#[derive(Args)]
struct ProfileArgs {
    /// Predefined profile: default, strict
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Custom JSON profile file (takes precedence over --preset)
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,
}

impl ProfileArgs {
    fn load(&self) -> Result<HeuristicProfile, SkissError> {
        commands::select_profile(self.preset.as_deref(), self.profile.as_deref())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract title and outline from a PDF, a .txt file or a directory of PDFs
    Extract {
        /// PDF file, form-feed separated .txt file, or directory of PDFs
        input: PathBuf,

        /// Output file (single document) or directory (batch)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format for a single document printed to stdout
        #[arg(short, long, default_value = "json", value_parser = ["json", "table"])]
        format: String,

        /// Run pdftotext in -layout mode
        #[arg(long)]
        layout: bool,

        /// Worker threads for directory input (default: one per core)
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
    },
    /// Show why each line was or was not taken as a heading
    Explain {
        /// PDF file or form-feed separated .txt file
        input: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", value_parser = ["json", "table"])]
        format: String,

        /// Run pdftotext in -layout mode
        #[arg(long)]
        layout: bool,
    },
    /// Check extraction JSON files against the output schema
    Validate {
        /// JSON file or directory of JSON files
        path: PathBuf,

        /// Rewrite files through the lenient sanitizer
        #[arg(long)]
        fix: bool,
    },
    /// Inspect and check heuristic profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined profiles
    List,
    /// Print the JSON of a predefined profile
    Show {
        /// Preset name (e.g., "strict")
        preset: String,
    },
    /// Describe the profile JSON format
    Schema,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input,
            out,
            profile,
            format,
            layout,
            jobs,
        } => profile
            .load()
            .and_then(|p| commands::extract::run(&input, out, &p, &format, layout, jobs)),
        Commands::Explain {
            input,
            profile,
            format,
            layout,
        } => profile
            .load()
            .and_then(|p| commands::explain::run(&input, &p, &format, layout)),
        Commands::Validate { path, fix } => commands::validate::run(&path, fix),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Show { preset } => commands::profiles::show(&preset),
            ProfilesAction::Schema => commands::profiles::schema(),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
