//! Stratus — a CLI toolkit for everyday cloud service operations.
//!
//! One subcommand per backing service: DynamoDB items, S3 objects,
//! RDS MySQL queries, MongoDB documents, and a local grade report.
//! Behavior is configured through environment variables (a `.env` file
//! is honored) with per-command flag overrides.

use clap::Parser;

mod aws;
mod dynamodb;
mod grades;
mod mongo;
mod prelude;
mod rds;
mod s3;

/// Cloud service operations for the stratus toolkit
#[derive(Debug, Parser)]
#[command(name = "stratus")]
#[command(about = "Cloud service operations", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence the command output
    #[clap(long, global = true)]
    pub silent: bool,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Read and write DynamoDB items
    Dynamodb(dynamodb::DynamodbCommand),

    /// List and upload S3 objects
    S3(s3::S3Command),

    /// Query an RDS MySQL database
    Rds(rds::RdsCommand),

    /// Insert documents into MongoDB
    Mongo(mongo::MongoCommand),

    /// Compute a grade average and write the CSV report
    Grades(grades::GradesCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a .env file before anything reads the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.global);

    match cli.command {
        Commands::Dynamodb(dynamodb_cmd) => {
            dynamodb::run(dynamodb_cmd, cli.global).await?;
        }
        Commands::S3(s3_cmd) => {
            s3::run(s3_cmd, cli.global).await?;
        }
        Commands::Rds(rds_cmd) => {
            rds::run(rds_cmd, cli.global).await?;
        }
        Commands::Mongo(mongo_cmd) => {
            mongo::run(mongo_cmd, cli.global).await?;
        }
        Commands::Grades(grades_cmd) => {
            grades::run(grades_cmd, cli.global)?;
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default
/// directive from warn to debug.
fn init_tracing(global: &Global) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_directive = if global.is_verbose() {
        "stratus=debug"
    } else {
        "stratus=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
