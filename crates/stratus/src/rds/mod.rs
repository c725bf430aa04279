//! RDS MySQL commands.

mod config;
mod error;
mod render;

use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

pub use config::RdsConfig;
pub use error::{RdsError, Result};

use crate::prelude::*;

/// RDS MySQL commands.
#[derive(Debug, clap::Parser)]
pub struct RdsCommand {
    #[command(subcommand)]
    pub action: RdsAction,
}

/// Available RDS actions.
#[derive(Debug, clap::Subcommand)]
pub enum RdsAction {
    /// Connect and print the server version.
    Ping,

    /// Run a SELECT and print the rows.
    Query(QueryCommand),

    /// Run an INSERT/UPDATE/DELETE and print the affected-row count.
    Exec(ExecCommand),
}

/// Run a SELECT and print the rows.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Run a SELECT statement against the RDS MySQL instance.

Environment variables:
  RDS_HOST, RDS_USER, RDS_PASSWORD, RDS_DATABASE - required
  RDS_PORT                                       - optional (default: 3306)

All missing required variables are reported together before any
connection is attempted.")]
pub struct QueryCommand {
    /// SQL statement to run.
    #[arg(long, value_name = "SQL")]
    pub sql: String,
}

/// Run an INSERT/UPDATE/DELETE and print the affected-row count.
#[derive(Debug, clap::Parser)]
pub struct ExecCommand {
    /// SQL statement to run.
    #[arg(long, value_name = "SQL")]
    pub sql: String,
}

/// Main entry point for the rds command.
pub async fn run(command: RdsCommand, global: crate::Global) -> Result<()> {
    // Validate the whole environment up front; no connection is made
    // when anything is missing.
    let config = RdsConfig::from_env()?;

    match command.action {
        RdsAction::Ping => run_ping(&config, &global).await,
        RdsAction::Query(query_cmd) => run_query(&config, query_cmd, &global).await,
        RdsAction::Exec(exec_cmd) => run_exec(&config, exec_cmd, &global).await,
    }
}

async fn connect(config: &RdsConfig) -> Result<MySqlConnection> {
    MySqlConnection::connect_with(&config.connect_options())
        .await
        .map_err(|e| {
            tracing::error!(host = %config.host, error = %e, "connection failed");
            RdsError::Sql(e)
        })
}

/// Runs a statement inside an explicit transaction and returns the
/// affected-row count. The transaction commits before the connection
/// closes.
pub async fn execute_insert(conn: &mut MySqlConnection, sql: &str) -> Result<u64> {
    let mut tx = conn.begin().await?;
    let result = sqlx::query(sql).execute(&mut *tx).await.map_err(|e| {
        tracing::error!(error = %e, "statement failed");
        RdsError::Sql(e)
    })?;
    tx.commit().await?;

    Ok(result.rows_affected())
}

async fn run_ping(config: &RdsConfig, global: &crate::Global) -> Result<()> {
    let mut conn = connect(config).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Connection to RDS MySQL successful!"));
    }

    // Close on the error path too before propagating.
    let version = sqlx::query_scalar::<_, String>("SELECT VERSION()")
        .fetch_one(&mut conn)
        .await;
    conn.close().await?;
    let version = version.map_err(|e| {
        tracing::error!(error = %e, "version query failed");
        RdsError::Sql(e)
    })?;

    aprintln!("{} {}", p_b("MySQL version:"), version);

    Ok(())
}

async fn run_query(config: &RdsConfig, cmd: QueryCommand, global: &crate::Global) -> Result<()> {
    let mut conn = connect(config).await?;

    let rows = sqlx::query(&cmd.sql).fetch_all(&mut conn).await;
    conn.close().await?;
    let rows = rows.map_err(|e| {
        tracing::error!(error = %e, "query failed");
        RdsError::Sql(e)
    })?;

    match rows.first() {
        Some(first) => {
            if !global.is_silent() {
                aprintln!("{}", p_c(&render::header(first).join(", ")));
            }
            for row in &rows {
                aprintln!("{}", render::render_row(row).join(", "));
            }
            if !global.is_silent() {
                aprintln!();
                aprintln!("{} {} row(s)", p_b("Returned:"), rows.len());
            }
        }
        None => aprintln!("No rows returned"),
    }

    Ok(())
}

async fn run_exec(config: &RdsConfig, cmd: ExecCommand, global: &crate::Global) -> Result<()> {
    let mut conn = connect(config).await?;
    let affected = execute_insert(&mut conn, &cmd.sql).await;
    conn.close().await?;
    let affected = affected?;

    if global.is_silent() {
        aprintln!("{}", affected);
    } else {
        aprintln!("{} {} row(s) affected", p_g("Success:"), affected);
    }

    Ok(())
}
