use anyhow::bail;
use biasio_classifiers::{ResponseComposer, TopicCatalog};
use biasio_server::cli::{Cli, Commands};
use biasio_server::config::ServerConfig;
use biasio_server::server::{run_server, EMPTY_MESSAGE};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            init_logging(args.verbose);

            let config = ServerConfig::load(&args.config, &args)?;
            let addr = config.socket_addr()?;

            info!("Starting Bias In, Bias Out");
            match &config.catalog_path {
                Some(path) => info!("Catalog: {}", path.display()),
                None => info!("Catalog: built-in"),
            }

            println!();
            println!("  {}", config.title);
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(config, addr).await?;
        }

        Commands::Classify { message, catalog } => {
            init_logging(false);

            let message = message.join(" ");
            let message = message.trim();
            if message.is_empty() {
                bail!(EMPTY_MESSAGE);
            }

            let composer = ResponseComposer::new(load_catalog(catalog.as_deref())?)?;
            let response = composer.build_response(message);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Catalog { catalog } => {
            init_logging(false);

            let catalog = load_catalog(catalog.as_deref())?;
            print!("{}", catalog.to_yaml()?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> biasio_core::Result<TopicCatalog> {
    match path {
        Some(path) => TopicCatalog::from_file(path),
        None => TopicCatalog::builtin(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "biasio=debug,biasio_server=debug,biasio_classifiers=debug,tower_http=debug"
    } else {
        "biasio=info,biasio_server=info,biasio_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
