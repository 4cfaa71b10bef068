//! Studio Makeup CLI - drive the catalog and the local auth store from a
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the remote catalog (Ctrl+C cancels the fetch)
//! sm-cli products list
//!
//! # Add a product locally on top of the remote catalog (not persisted)
//! sm-cli products add --name "Gloss" --price 19,50 --image file:///gloss.jpg --with-remote
//!
//! # Register, then log in
//! sm-cli register --name "Maria" --email maria@studio.com --password s3nha
//! sm-cli login --email maria@studio.com --password s3nha
//!
//! # Show the user recorded by the last login
//! sm-cli session
//! ```
//!
//! Configuration comes from the environment (see
//! `studio_makeup_storefront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use studio_makeup_storefront::config::StorefrontConfig;
use studio_makeup_storefront::error::AppError;
use studio_makeup_storefront::telemetry;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "sm-cli")]
#[command(author, version, about = "Studio Makeup storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Register a new local user
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address (must not be registered yet)
        #[arg(short, long)]
        email: String,

        /// Password (stored as typed)
        #[arg(short, long)]
        password: String,
    },
    /// Log in with a registered email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Show the user recorded by the last successful login
    Session,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Fetch and show the remote catalog
    List,
    /// Add a product to an in-memory catalog and show it
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Price, with `,` or `.` as decimal separator
        #[arg(short, long)]
        price: String,

        /// Image URI
        #[arg(short, long)]
        image: String,

        /// Load the remote catalog first and add on top of it
        #[arg(long)]
        with_remote: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing();
            let alert = AppError::from(e).alert();
            commands::report(&alert.to_string());
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing();

    if let Err(e) = run(cli, config).await {
        match e {
            CliError::App(err) => commands::report(&err.alert().to_string()),
            CliError::Io(err) => tracing::error!("Failed to write output: {err}"),
            // Already rendered as part of the view-state
            CliError::CatalogUnavailable => {}
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&config).await?,
            ProductsAction::Add {
                name,
                price,
                image,
                with_remote,
            } => commands::products::add(&config, name, price, image, with_remote).await?,
        },
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&config, &name, &email, &password).await?,
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, &password).await?;
        }
        Commands::Session => commands::auth::session(&config).await?,
    }
    Ok(())
}
