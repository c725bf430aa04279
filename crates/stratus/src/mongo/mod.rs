//! MongoDB document commands.

mod error;

use mongodb::{Client, Collection};
use stratus_core::student::Student;

pub use error::{MongoError, Result};

use crate::prelude::*;

const STUDENTS_COLLECTION: &str = "students";

/// MongoDB document commands.
#[derive(Debug, clap::Parser)]
pub struct MongoCommand {
    #[command(subcommand)]
    pub action: MongoAction,
}

/// Available MongoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum MongoAction {
    /// Insert a student document.
    Insert(InsertCommand),
}

/// Insert a student document.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Insert one student document into the 'students' collection.

Environment variables (both required, validated together):
  connection_string - MongoDB connection URI
  db_name           - Database name

A .env file in the working directory is honored.")]
pub struct InsertCommand {
    /// Student first name.
    #[arg(long, default_value = "Rodrigo")]
    pub name: String,

    /// Student surname.
    #[arg(long, default_value = "Lima")]
    pub surname: String,

    /// First note.
    #[arg(long, default_value = "8")]
    pub note1: String,

    /// Second note.
    #[arg(long, default_value = "6")]
    pub note2: String,
}

/// Connection configuration for the document store.
///
/// The variable names are lower-case on purpose; they are the
/// established interface of the deployments this tool targets.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub connection_string: String,
    pub db_name: String,
}

impl MongoConfig {
    pub fn from_env() -> Result<Self> {
        let vars = stratus_core::env::require(&["connection_string", "db_name"])?;
        Ok(Self {
            connection_string: vars["connection_string"].clone(),
            db_name: vars["db_name"].clone(),
        })
    }
}

/// Main entry point for the mongo command.
pub async fn run(command: MongoCommand, global: crate::Global) -> Result<()> {
    let config = MongoConfig::from_env()?;

    match command.action {
        MongoAction::Insert(insert_cmd) => run_insert(&config, insert_cmd, &global).await,
    }
}

async fn students_collection(config: &MongoConfig) -> Result<Collection<Student>> {
    let client = Client::with_uri_str(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "cannot connect to MongoDB");
            MongoError::Driver(e)
        })?;

    Ok(client
        .database(&config.db_name)
        .collection::<Student>(STUDENTS_COLLECTION))
}

/// Inserts one student document and returns its id as a string.
pub async fn insert_student(collection: &Collection<Student>, student: &Student) -> Result<String> {
    let result = collection.insert_one(student).await.map_err(|e| {
        tracing::error!(error = %e, "insert_one failed");
        MongoError::Driver(e)
    })?;

    Ok(result.inserted_id.to_string())
}

async fn run_insert(config: &MongoConfig, cmd: InsertCommand, global: &crate::Global) -> Result<()> {
    let student = Student {
        name: cmd.name,
        surname: cmd.surname,
        note1: cmd.note1,
        note2: cmd.note2,
    };

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Database:"), config.db_name);
        aprintln!(
            "{} {} {} into '{}'",
            p_b("Inserting:"),
            student.name,
            student.surname,
            STUDENTS_COLLECTION
        );
    }

    let collection = students_collection(config).await?;
    let inserted_id = insert_student(&collection, &student).await?;

    if global.is_silent() {
        aprintln!("{}", inserted_id);
    } else {
        aprintln!("{} inserted with id {}", p_g("Success:"), inserted_id);
    }

    Ok(())
}
