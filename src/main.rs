use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_session::api::ApiError;
use storefront_session::config::ConfigError;
use storefront_session::notify::{self, StderrNotifier};
use storefront_session::{FileStorage, HttpAuthApi, RestoreOutcome, SessionConfig, SessionController, SessionError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Parser, Debug)]
#[command(name = "storefront-session", about = "Storefront session client")]
struct Cli {
    /// File holding the session scope; one file per simulated tab.
    #[arg(long, env = "SESSION_STORAGE_PATH", default_value = ".storefront-session.json")]
    storage_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SESSION_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SESSION_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    /// Show the user restored from the session scope.
    Whoami,
    UserName {
        user_id: String,
    },
}

type Controller = SessionController<HttpAuthApi, FileStorage>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = SessionConfig::from_env()?;
    let api = HttpAuthApi::from_config(&config)?;
    tracing::debug!(base_url = api.base_url(), storage = %cli.storage_path.display(), "session client configured");

    let (controller, outcome) =
        SessionController::start(api, FileStorage::new(cli.storage_path), config.storage_key).await;

    if let Err(err) = run(&controller, outcome, cli.command).await {
        notify::report(&StderrNotifier, &err);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(controller: &Controller, outcome: RestoreOutcome, command: Command) -> Result<(), SessionError> {
    match command {
        Command::Signup { name, email, password } => {
            let user_id = controller.signup(&name, &email, &password).await?;
            println!("{user_id}");
        }
        Command::Login { email, password } => {
            let confirmation = controller.login(&email, &password).await?;
            println!("{confirmation}");
        }
        Command::Logout => {
            controller.logout().await?;
            println!("logged out");
        }
        Command::Whoami => match outcome {
            RestoreOutcome::Restored(user) => println!("{} ({})", user.name, user.user_id),
            RestoreOutcome::NoSession => println!("not logged in"),
            RestoreOutcome::Invalidated => println!("stored session is no longer valid"),
        },
        Command::UserName { user_id } => {
            println!("{}", controller.fetch_user_name(&user_id).await?);
        }
    }
    Ok(())
}
