#![forbid(unsafe_code)]
//! sitebrief Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sitebrief::commands::{
    execute_clear, execute_generate, execute_init, execute_show, ClearOptions, ClearTarget,
    GenerateOptions, InitOptions, ShowOptions,
};
use sitebrief::config::CONFIG_FILE;
use sitebrief::{Config, OutputFormat, UserRequirements};

#[derive(Parser)]
#[command(name = "sitebrief")]
#[command(about = "Website design brief generator for AI coding assistants")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Model identifier for the completion endpoint
        #[arg(long)]
        model: Option<String>,

        /// Disable remote generation in the written config
        #[arg(long)]
        offline: bool,
    },

    /// Generate a design brief
    Generate {
        #[command(flatten)]
        fields: FieldArgs,

        /// Requirements file (JSON, or YAML by extension)
        #[arg(short = 'F', long)]
        file: Option<PathBuf>,

        /// Prompt for every field
        #[arg(short, long)]
        interactive: bool,

        /// Ignore the stored form
        #[arg(long)]
        fresh: bool,

        /// Use the built-in rules only
        #[arg(long)]
        offline: bool,

        /// API key for the completion endpoint
        #[arg(long, env = "SITEBRIEF_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Output format (markdown, json)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Write the brief to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not store the form or the result
        #[arg(long)]
        no_save: bool,

        /// Show which rule branch each facet used
        #[arg(long)]
        explain: bool,
    },

    /// Clear stored inputs or the stored result
    Clear {
        #[command(subcommand)]
        target: ClearCommands,
    },

    /// Print the last generated brief
    Show {
        /// Also list the stored inputs
        #[arg(long)]
        inputs: bool,
    },
}

#[derive(Subcommand)]
enum ClearCommands {
    /// Clear the stored form inputs
    Inputs {
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Clear the stored result
    Result {
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Form fields accepted as flags
#[derive(Args, Debug, Default)]
struct FieldArgs {
    /// Website theme (required)
    #[arg(short, long)]
    theme: Option<String>,

    /// Target audience
    #[arg(long)]
    target: Option<String>,

    /// Color and atmosphere
    #[arg(long)]
    color: Option<String>,

    /// Content to publish
    #[arg(long)]
    content: Option<String>,

    /// Font and style
    #[arg(long)]
    font: Option<String>,

    /// Animation wishes
    #[arg(long)]
    animation: Option<String>,

    /// Page structure
    #[arg(long)]
    pages: Option<String>,

    /// Contact placement
    #[arg(long)]
    contact: Option<String>,

    /// Image and icon atmosphere
    #[arg(long)]
    images: Option<String>,

    /// World view keywords (comma separated)
    #[arg(short, long)]
    keywords: Option<String>,

    /// Other requests
    #[arg(long)]
    memo: Option<String>,
}

impl From<FieldArgs> for UserRequirements {
    fn from(args: FieldArgs) -> Self {
        UserRequirements {
            theme: args.theme.unwrap_or_default(),
            target_audience: args.target.unwrap_or_default(),
            color_preference: args.color.unwrap_or_default(),
            content: args.content.unwrap_or_default(),
            font_preference: args.font.unwrap_or_default(),
            animation_preference: args.animation.unwrap_or_default(),
            page_structure_hint: args.pages.unwrap_or_default(),
            contact_placement: args.contact.unwrap_or_default(),
            image_style_hint: args.images.unwrap_or_default(),
            keywords: args.keywords.unwrap_or_default(),
            freeform_notes: args.memo.unwrap_or_default(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "sitebrief=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init { force, model, offline } => {
            let options = InitOptions {
                path: cli.config,
                force,
                model,
                offline,
            };
            execute_init(options)?;
        }

        Commands::Generate {
            fields,
            file,
            interactive,
            fresh,
            offline,
            api_key,
            format,
            output,
            no_save,
            explain,
        } => {
            let options = GenerateOptions {
                fields: fields.into(),
                file,
                interactive,
                fresh,
                offline,
                api_key,
                format,
                output,
                no_save,
                explain,
            };
            execute_generate(options, &config)?;
        }

        Commands::Clear { target } => {
            let options = match target {
                ClearCommands::Inputs { yes } => ClearOptions {
                    target: ClearTarget::Inputs,
                    yes,
                },
                ClearCommands::Result { yes } => ClearOptions {
                    target: ClearTarget::Result,
                    yes,
                },
            };
            execute_clear(options, &config)?;
        }

        Commands::Show { inputs } => {
            execute_show(ShowOptions { inputs }, &config)?;
        }
    }

    Ok(())
}
