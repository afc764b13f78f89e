#![forbid(unsafe_code)]
//! apialt Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apialt::commands::{
    execute_batch, execute_link, execute_parse, execute_resolve, BatchOptions, LinkOptions,
    ParseOptions, ResolveOptions,
};
use apialt::config::DEFAULT_CONFIG_FILE;
use apialt::Config;

#[derive(Parser)]
#[command(name = "apialt")]
#[command(about = "Resolve public alternatives documented on hidden API members")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// SDK level from which an alternative is required (overrides config)
    #[arg(long, global = true)]
    min_sdk: Option<u32>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a dex signature
    Parse {
        /// Signature, e.g. La/b/C;->foo(IJ)V
        signature: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decompose the body of a {@link} tag
    Link {
        /// Link body, e.g. a.b.C#foo(int)
        body: String,

        /// Signature of the documented member
        #[arg(long)]
        context: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the documented alternative of one member
    Resolve {
        /// Signature of the documented member
        #[arg(long)]
        signature: String,

        /// Documentation comment ('-' reads stdin)
        #[arg(long)]
        doc: Option<String>,

        /// maxTargetSdk of the member
        #[arg(long)]
        max_target_sdk: u32,

        /// Public API list (descriptors or hidden API flags CSV)
        #[arg(long, env = "APIALT_PUBLIC_APIS")]
        public_apis: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check many members from a JSON lines file
    Batch {
        /// Input file ('-' reads stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Public API list (descriptors or hidden API flags CSV)
        #[arg(long, env = "APIALT_PUBLIC_APIS")]
        public_apis: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
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
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(min_sdk) = cli.min_sdk {
        config.min_sdk_requiring_alternative = min_sdk;
    }
    if !config.output.colors {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Commands::Parse { signature, json } => {
            execute_parse(ParseOptions { signature, json })?;
        }

        Commands::Link { body, context, json } => {
            execute_link(LinkOptions { body, context, json })?;
        }

        Commands::Resolve {
            signature,
            doc,
            max_target_sdk,
            public_apis,
            json,
        } => {
            let options = ResolveOptions {
                signature,
                doc,
                max_target_sdk,
                public_apis,
                json,
            };
            execute_resolve(options, &config)?;
        }

        Commands::Batch {
            input,
            public_apis,
            json,
        } => {
            let options = BatchOptions {
                input,
                public_apis,
                json,
            };
            execute_batch(options, &config)?;
        }
    }

    Ok(())
}
