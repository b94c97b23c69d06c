use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use page_composer::config::{ServerConfig, DEFAULT_PORT};
use page_composer::{api, outline, PageDraft, Portal};

#[derive(Parser)]
#[command(name = "pgc")]
#[command(about = "Compose portal pages from containers and applications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the page registry over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "PAGE_COMPOSER_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, env = "PAGE_COMPOSER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Build a page draft and print its layout
    Outline {
        /// JSON page draft
        file: PathBuf,
    },
    /// Build a page draft and print the resulting page as JSON
    Validate {
        /// JSON page draft
        file: PathBuf,
    },
}

/// Initialize tracing on stderr so command output stays clean on stdout
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "page_composer=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServerConfig::new(host, port);
            let app = api::create_router_with_config(Portal::new(), &config);

            let listener = tokio::net::TcpListener::bind(config.address()).await?;
            tracing::info!("Page composer listening on http://{}", config.address());

            axum::serve(listener, app).await?;
        }
        Commands::Outline { file } => {
            let page = PageDraft::from_path(&file)?.into_page()?;
            print!("{}", outline::render_page(&page));
        }
        Commands::Validate { file } => {
            let page = PageDraft::from_path(&file)?.into_page()?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }

    Ok(())
}
