#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoStrategy, InitStrategy, ReplyInput, ReplyStrategy, ThreadsStrategy,
    VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "gumzo")]
#[command(about = "Customer chat replies from Gemini", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reply to messages as if they came from a messaging-platform user
    Reply {
        /// Platform user id (e.g. a phone number)
        #[arg(short, long)]
        user: String,

        /// Display name of the user
        #[arg(short, long, default_value = "Mteja")]
        name: String,

        /// Single message to send; reads stdin line by line when omitted
        #[arg(short, long)]
        message: Option<String>,
    },
    /// List stored user threads
    Threads,
    /// Show the effective configuration
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Reply {
            user,
            name,
            message,
        } => {
            ReplyStrategy
                .execute(ReplyInput {
                    user_id: user,
                    display_name: name,
                    message,
                })
                .await
        }
        Commands::Threads => ThreadsStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
