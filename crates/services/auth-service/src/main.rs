//! Auth Service - command-line front end for login and registration.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_service_lib::{
    config::AuthServiceConfig,
    service::{LoginOutcome, LoginRejection},
    AuthContext, MigrateAction,
};
use common::AppError;
use domain::{Credentials, NewUser, UserResponse, ValidationResult};

#[derive(Parser)]
#[command(name = "auth-service")]
#[command(about = "User registration and login validation")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, env = "AUTH_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: String,
    },
    /// Authenticate a user by email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Check database connectivity
    Ping,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

/// Printed when a login does not authenticate.
#[derive(Serialize)]
struct LoginFailure {
    status: bool,
    reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<ValidationResult>,
}

impl From<LoginRejection> for LoginFailure {
    fn from(rejection: LoginRejection) -> Self {
        let (reason, validation) = match rejection {
            LoginRejection::Invalid(result) => ("invalid_input", Some(result)),
            LoginRejection::NotFound => ("user_not_found", None),
            LoginRejection::PasswordMismatch => ("incorrect_password", None),
        };
        Self {
            status: false,
            reason,
            validation,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            match e.downcast_ref::<AppError>() {
                Some(app) => {
                    tracing::error!(code = app.code(), "Command failed: {}", app.user_message())
                }
                None => tracing::error!("Command failed: {}", e),
            }
            std::process::exit(1);
        }
    }
}

/// Execute a command; `Ok(false)` means the request was rejected.
async fn run(command: Commands) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Commands::Register {
            name,
            username,
            email,
            phone,
            password,
            confirm_password,
        } => {
            let context = AuthContext::connect(&AuthServiceConfig::from_env()).await?;
            let candidate = NewUser::new(name, username, email, phone, password, confirm_password);
            let result = context.registration.register(candidate).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(result.is_ok())
        }
        Commands::Login { email, password } => {
            let context = AuthContext::connect(&AuthServiceConfig::from_env()).await?;
            let credentials = Credentials::new(email, password);
            match context.login.authenticate(&credentials).await? {
                LoginOutcome::Authenticated(user) => {
                    println!("{}", serde_json::to_string_pretty(&UserResponse::from(user))?);
                    Ok(true)
                }
                LoginOutcome::Rejected(rejection) => {
                    let failure = LoginFailure::from(rejection);
                    println!("{}", serde_json::to_string_pretty(&failure)?);
                    Ok(false)
                }
            }
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            auth_service_lib::run_migrations(migrate_action).await?;
            Ok(true)
        }
        Commands::Ping => {
            auth_service_lib::ping_database().await?;
            Ok(true)
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    dotenvy::dotenv().ok();

    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
