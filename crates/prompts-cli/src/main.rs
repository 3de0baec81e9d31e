// prompts - server for the Prompts for Everyone site
//
// Serves the server-rendered page shells, the crawl policy at /robots.txt and
// the bundled static assets.

use anyhow::{Context, Result};
use clap::Parser;
use prompts_config::{ConfigLoader, SiteConfig};
use prompts_core::get_crawl_policy;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands, ConfigCommands};

const CRATES: &[&str] = &[
    "prompts",
    "prompts_web",
    "prompts_core",
    "prompts_config",
    "tower_http",
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;

    init_logging(&cli, &config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            if let Some(host) = host {
                config.web.host = host;
            }
            if let Some(port) = port {
                config.web.port = port;
            }
            if static_dir.is_some() {
                config.web.static_dir = static_dir;
            }
            config.validate()?;

            tracing::info!("prompts v{}", env!("CARGO_PKG_VERSION"));
            prompts_web::start_server(&config.web).await?;
        }
        Commands::Robots { json } => {
            let policy = get_crawl_policy();
            if json {
                println!("{}", serde_json::to_string_pretty(&policy)?);
            } else {
                print!("{}", policy.to_robots_txt());
            }
        }
        Commands::Config(ConfigCommands::Show) => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins, then the command line, then the config file.
fn init_logging(cli: &Cli, config: &SiteConfig) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        let level = cli
            .requested_level()
            .map(|l| l.to_string().to_lowercase())
            .unwrap_or_else(|| config.logging.level.to_lowercase());
        EnvFilter::new(filter_directives(&level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.logging.ansi)
        .with_writer(std::io::stderr)
        .init();
}

fn filter_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}
