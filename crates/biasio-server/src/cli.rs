use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biasio")]
#[command(
    author,
    version,
    about = "Bias In, Bias Out: contrasting biased and fair chatbot responses"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// Compose the response pair for one message and print it as JSON
    Classify {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Topic catalog file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the active topic catalog as YAML
    Catalog {
        /// Topic catalog file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "biasio.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Topic catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Allow cross-origin requests from any origin
    #[arg(long, env = "BIASIO_ALLOW_ANY_ORIGIN")]
    pub allow_any_origin: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
