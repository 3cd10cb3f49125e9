//! FoodCourt CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! foodcourt-cli migrate
//!
//! # Seed the menu with the default catalog
//! foodcourt-cli seed
//!
//! # Create an admin user
//! foodcourt-cli admin create -e admin@example.com -p secret \
//!     --first-name Danish --last-name Khan --phone 03001234567 --address "HQ"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the menu with the default catalog
//! - `admin create` - Create admin users

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "foodcourt-cli")]
#[command(author, version, about = "FoodCourt CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the menu with the default catalog
    Seed,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password (hashed before storage)
        #[arg(short, long)]
        password: String,

        /// First name
        #[arg(long, default_value = "Admin")]
        first_name: String,

        /// Last name
        #[arg(long, default_value = "User")]
        last_name: String,

        /// Phone number (11 digits)
        #[arg(long)]
        phone: String,

        /// Postal address
        #[arg(long, default_value = "N/A")]
        address: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::menu().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                password,
                first_name,
                last_name,
                phone,
                address,
            } => {
                commands::admin::create_user(
                    &email,
                    &password,
                    &first_name,
                    &last_name,
                    &phone,
                    &address,
                )
                .await?;
            }
        },
    }
    Ok(())
}
