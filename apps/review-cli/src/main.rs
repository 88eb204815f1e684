//! Contract review portal, terminal edition
//!
//! Each invocation logs in, runs one page action and prints the result.
//! Without `--api-base-url` everything runs against the built-in sample
//! contracts, so nothing persists between invocations.

use anyhow::{bail, Result};
use clap::Parser;
use review_core::routes::resolve;
use review_core::{ApiClient, ApiConfig, AuthContext, LoginPage, Resolved, Route};
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod display;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ApiConfig::new(cli.api_base_url.clone(), cli.storage_base_url.clone());
    let api = ApiClient::from_config(&config)?;
    debug!(mock = api.is_mock(), "API client ready");

    let target = match &cli.command {
        Commands::Review(args) => Route::Review(args.id.clone()),
        _ => Route::Documents,
    };

    let mut auth = AuthContext::new();
    let route = match resolve(target, &auth) {
        Resolved::Allow(route) => route,
        Resolved::Login { from } => login(&mut auth, &cli, from).await?,
    };
    debug!("Navigated to {}", route);

    match cli.command {
        Commands::Documents(args) => commands::documents(&api, &auth, args).await,
        Commands::Bulk(args) => commands::bulk(&api, &auth, args).await,
        Commands::Export(args) => commands::export(&api, args).await,
        Commands::Review(args) => commands::review(&api, &auth, args).await,
    }
}

async fn login(auth: &mut AuthContext, cli: &Cli, from: Route) -> Result<Route> {
    let mut page = LoginPage::new(Some(from));
    page.email = cli.email.clone();
    page.password = cli.password.clone();

    match page.submit(auth).await {
        Some(route) => Ok(route),
        None => bail!(
            "{}",
            page.error().unwrap_or(review_core::LOGIN_FAILED_MESSAGE)
        ),
    }
}
