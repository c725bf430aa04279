//! S3 object commands.

mod error;
mod listing;

use std::path::{Path, PathBuf};

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

pub use error::{Result, S3Error};
pub use listing::ObjectInfo;

use crate::aws::AwsConfig;
use crate::prelude::*;

/// S3 object commands.
#[derive(Debug, clap::Parser)]
pub struct S3Command {
    #[command(subcommand)]
    pub action: S3Action,
}

/// Available S3 actions.
#[derive(Debug, clap::Subcommand)]
pub enum S3Action {
    /// List the objects in a bucket.
    List(ListCommand),

    /// Upload a file to a bucket.
    Upload(UploadCommand),
}

/// List the objects in a bucket.
#[derive(Debug, clap::Parser)]
#[command(long_about = "List every object in an S3 bucket.

All result pages are fetched before anything is printed, so the count
reflects the whole bucket (or the whole prefix).

Environment variables:
  S3_BUCKET_NAME   - Bucket to list (or use --bucket)
  AWS_ENDPOINT_URL - Use a local endpoint (e.g., http://localhost:4566)
  AWS_REGION       - AWS region (defaults to us-east-1)")]
pub struct ListCommand {
    /// Bucket name (falls back to S3_BUCKET_NAME).
    #[arg(long)]
    pub bucket: Option<String>,

    /// Only list keys starting with this prefix.
    #[arg(long, default_value = "")]
    pub prefix: String,
}

/// Upload a file to a bucket.
#[derive(Debug, clap::Parser)]
pub struct UploadCommand {
    /// Bucket name (falls back to S3_BUCKET_NAME).
    #[arg(long)]
    pub bucket: Option<String>,

    /// Path of the file to upload.
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Object key (defaults to the file name).
    #[arg(long)]
    pub key: Option<String>,
}

/// Main entry point for the s3 command.
pub async fn run(command: S3Command, global: crate::Global) -> Result<()> {
    match command.action {
        S3Action::List(list_cmd) => run_list(list_cmd, &global).await,
        S3Action::Upload(upload_cmd) => run_upload(upload_cmd, &global).await,
    }
}

/// Resolve the bucket name from the flag or the environment.
///
/// Must be called before any client is built so a missing variable
/// never reaches the network.
fn resolve_bucket(flag: Option<String>) -> Result<String> {
    match flag {
        Some(bucket) => Ok(bucket),
        None => {
            let vars = stratus_core::env::require(&["S3_BUCKET_NAME"])?;
            Ok(vars["S3_BUCKET_NAME"].clone())
        }
    }
}

async fn create_client(config: &AwsConfig) -> Client {
    Client::new(&config.load().await)
}

/// Lists every object in the bucket, aggregating all pages before
/// returning. An empty bucket yields an empty vec.
pub async fn list_bucket_files(
    client: &Client,
    bucket_name: &str,
    prefix: &str,
) -> Result<Vec<ObjectInfo>> {
    let mut files = Vec::new();

    let mut pages = client
        .list_objects_v2()
        .bucket(bucket_name)
        .prefix(prefix)
        .into_paginator()
        .send();

    while let Some(page) = pages.next().await {
        let page = page.map_err(|e| {
            let mapped = error::map_list_error(e, bucket_name);
            tracing::error!(bucket = bucket_name, error = %mapped, "list_objects failed");
            mapped
        })?;
        listing::collect_page(&mut files, &page);
    }

    Ok(files)
}

/// Uploads a local file under the given key.
pub async fn upload_file(
    client: &Client,
    bucket_name: &str,
    key: &str,
    path: &Path,
) -> Result<()> {
    let body = ByteStream::from_path(path)
        .await
        .map_err(|e| S3Error::Upload(format!("cannot read '{}': {}", path.display(), e)))?;

    client
        .put_object()
        .bucket(bucket_name)
        .key(key)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let mapped = error::map_put_error(e);
            tracing::error!(bucket = bucket_name, key, error = %mapped, "put_object failed");
            mapped
        })?;

    Ok(())
}

async fn run_list(cmd: ListCommand, global: &crate::Global) -> Result<()> {
    let bucket_name = resolve_bucket(cmd.bucket)?;

    let aws_config = AwsConfig::default();
    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display("S3"));
        aprintln!("{} {}", p_b("Listing files in bucket:"), bucket_name);
    }

    let client = create_client(&aws_config).await;
    let files = list_bucket_files(&client, &bucket_name, &cmd.prefix).await?;

    if files.is_empty() {
        aprintln!("No files found in bucket");
        return Ok(());
    }

    aprintln!();
    aprintln!("{}", p_c(&format!("Found {} file(s):", files.len())));
    aprintln!();
    for file in &files {
        aprintln!(
            "  {} ({} bytes) - {}",
            file.key,
            file.size,
            file.last_modified
        );
    }

    Ok(())
}

async fn run_upload(cmd: UploadCommand, global: &crate::Global) -> Result<()> {
    let bucket_name = resolve_bucket(cmd.bucket)?;

    let key = match cmd.key {
        Some(key) => key,
        None => cmd
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                S3Error::Upload(format!("'{}' has no file name", cmd.file.display()))
            })?,
    };

    let aws_config = AwsConfig::default();
    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display("S3"));
        aprintln!("{} {} -> s3://{}/{}", p_b("Uploading:"), cmd.file.display(), bucket_name, key);
    }

    let client = create_client(&aws_config).await;
    upload_file(&client, &bucket_name, &key, &cmd.file).await?;

    if !global.is_silent() {
        aprintln!("{} Uploaded '{}'", p_g("Success:"), key);
    }

    Ok(())
}
