use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info, warn};

use proxy_endpoint::{ProxyEndpoint, ProxyEndpointBuilder, ProxyListSettings, PORT_UNSPECIFIED};

/// Parse, format and check proxy endpoint URIs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse endpoint URIs and print their fields as JSON
    Parse {
        #[arg(value_name = "URI", required = true)]
        uris: Vec<String>,
    },

    /// Build an endpoint from its fields and print its URI
    Format {
        #[arg(long)]
        host: String,

        /// Port, omitted from the URI when not given
        #[arg(long, default_value_t = PORT_UNSPECIFIED, allow_hyphen_values = true)]
        port: i32,

        #[arg(long)]
        scheme: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },

    /// Load a proxy list file and validate every entry
    Check {
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match args.command {
        Command::Parse { uris } => {
            for uri in uris {
                let endpoint: ProxyEndpoint = uri
                    .parse()
                    .with_context(|| format!("Failed to parse endpoint '{}'", uri))?;
                println!("{}", serde_json::to_string(&endpoint.parts())?);
            }
        }
        Command::Format {
            host,
            port,
            scheme,
            username,
            password,
        } => {
            let mut builder = ProxyEndpointBuilder::new(host).port(port);
            if let Some(scheme) = scheme {
                builder = builder.scheme(scheme);
            }
            if let Some(username) = username {
                builder = builder.username(username);
            }
            if let Some(password) = password {
                builder = builder.password(password);
            }
            println!("{}", builder.build().to_uri()?);
        }
        Command::Check { config } => check(&config)?,
    }

    Ok(())
}

fn check(config: &Path) -> anyhow::Result<()> {
    let settings = ProxyListSettings::load_from_file(config)
        .with_context(|| format!("Failed to load proxy list {}", config.display()))?;

    let unique = settings.unique_endpoints();
    let duplicates = settings.proxies.len() - unique.len();
    if duplicates > 0 {
        warn!("Skipped {} duplicate proxy endpoint(s)", duplicates);
    }

    let mut failures = 0;
    for endpoint in &unique {
        match endpoint.to_uri() {
            Ok(uri) => println!("{}", uri),
            Err(e) => {
                error!("Invalid proxy endpoint {}: {}", endpoint, e);
                failures += 1;
            }
        }
    }

    info!(
        "Checked {} endpoint(s): {} unique, {} invalid",
        settings.proxies.len(),
        unique.len(),
        failures
    );
    if failures > 0 {
        bail!("{} invalid endpoint(s) in {}", failures, config.display());
    }
    Ok(())
}
