//! DynamoDB item commands.

mod error;
mod item;

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::json;

pub use error::{DynamodbError, Result};

use crate::aws::AwsConfig;
use crate::prelude::*;

/// DynamoDB item commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Write an item to a table.
    Put(PutCommand),

    /// Read an item by its key.
    Get(GetCommand),

    /// Write a sample item, then read it back.
    Demo(DemoCommand),
}

/// Write an item to a table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Write an item to a DynamoDB table.

The item is given as a JSON object and must include the table's
partition key attribute(s).

Environment variables:
  DYNAMODB_TABLE_NAME - Table to write to (or use --table)
  AWS_ENDPOINT_URL    - Use a local endpoint (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)")]
pub struct PutCommand {
    /// Table name (falls back to DYNAMODB_TABLE_NAME).
    #[arg(long)]
    pub table: Option<String>,

    /// Item as a JSON object.
    #[arg(long, value_name = "JSON")]
    pub item: String,
}

/// Read an item by its key.
#[derive(Debug, clap::Parser)]
pub struct GetCommand {
    /// Table name (falls back to DYNAMODB_TABLE_NAME).
    #[arg(long)]
    pub table: Option<String>,

    /// Key as a JSON object, e.g. '{"id": "12345"}'.
    #[arg(long, value_name = "JSON")]
    pub key: String,
}

/// Write a sample item, then read it back.
#[derive(Debug, clap::Parser)]
pub struct DemoCommand {
    /// Table name (falls back to DYNAMODB_TABLE_NAME).
    #[arg(long)]
    pub table: Option<String>,
}

/// Main entry point for the dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Put(put_cmd) => run_put(put_cmd, &global).await,
        DynamodbAction::Get(get_cmd) => run_get(get_cmd, &global).await,
        DynamodbAction::Demo(demo_cmd) => run_demo(demo_cmd, &global).await,
    }
}

/// Resolve the table name from the flag or the environment.
///
/// Must be called before any client is built so a missing variable
/// never reaches the network.
fn resolve_table(flag: Option<String>) -> Result<String> {
    match flag {
        Some(table) => Ok(table),
        None => {
            let vars = stratus_core::env::require(&["DYNAMODB_TABLE_NAME"])?;
            Ok(vars["DYNAMODB_TABLE_NAME"].clone())
        }
    }
}

async fn create_client(config: &AwsConfig) -> Client {
    Client::new(&config.load().await)
}

/// Write an item to the table.
pub async fn put_item(
    client: &Client,
    table_name: &str,
    item: HashMap<String, AttributeValue>,
) -> Result<()> {
    client
        .put_item()
        .table_name(table_name)
        .set_item(Some(item))
        .send()
        .await
        .map_err(|e| {
            let mapped = error::map_put_item_error(e, table_name);
            tracing::error!(table = table_name, error = %mapped, "put_item failed");
            mapped
        })?;

    Ok(())
}

/// Read an item by key. Returns `None` when the key is absent.
pub async fn get_item(
    client: &Client,
    table_name: &str,
    key: HashMap<String, AttributeValue>,
) -> Result<Option<HashMap<String, AttributeValue>>> {
    let result = client
        .get_item()
        .table_name(table_name)
        .set_key(Some(key))
        .send()
        .await
        .map_err(|e| {
            let mapped = error::map_get_item_error(e, table_name);
            tracing::error!(table = table_name, error = %mapped, "get_item failed");
            mapped
        })?;

    Ok(result.item)
}

async fn run_put(cmd: PutCommand, global: &crate::Global) -> Result<()> {
    let table_name = resolve_table(cmd.table)?;
    let value: serde_json::Value = serde_json::from_str(&cmd.item)?;
    let item = item::json_to_item(&value)?;

    let aws_config = AwsConfig::default();
    if !global.is_silent() {
        aprintln!(
            "{} {}",
            p_b("Target:"),
            aws_config.target_display("DynamoDB")
        );
    }

    let client = create_client(&aws_config).await;
    put_item(&client, &table_name, item).await?;

    if !global.is_silent() {
        aprintln!(
            "{} Item created in table '{}'",
            p_g("Success:"),
            table_name
        );
    }

    Ok(())
}

async fn run_get(cmd: GetCommand, global: &crate::Global) -> Result<()> {
    let table_name = resolve_table(cmd.table)?;
    let value: serde_json::Value = serde_json::from_str(&cmd.key)?;
    let key = item::json_to_item(&value)?;

    let aws_config = AwsConfig::default();
    let client = create_client(&aws_config).await;

    match get_item(&client, &table_name, key).await? {
        Some(item) => {
            let json = item::item_to_json(&item)?;
            aprintln!("{}", serde_json::to_string_pretty(&json)?);
        }
        None => {
            if !global.is_silent() {
                aprintln!("Item not found");
            }
        }
    }

    Ok(())
}

async fn run_demo(cmd: DemoCommand, global: &crate::Global) -> Result<()> {
    let table_name = resolve_table(cmd.table)?;

    let sample = json!({
        "id": "12345",
        "name": "Sample Document",
        "description": "This is a test document",
        "status": "active"
    });

    let aws_config = AwsConfig::default();
    if !global.is_silent() {
        aprintln!(
            "{} {}",
            p_b("Target:"),
            aws_config.target_display("DynamoDB")
        );
        aprintln!("{} {}", p_b("Creating item in table:"), table_name);
    }

    let client = create_client(&aws_config).await;
    put_item(&client, &table_name, item::json_to_item(&sample)?).await?;

    if !global.is_silent() {
        aprintln!("{} Item created", p_g("Success:"));
        aprintln!();
        aprintln!("{} id: 12345", p_b("Retrieving item with"));
    }

    let key = item::json_to_item(&json!({ "id": "12345" }))?;
    match get_item(&client, &table_name, key).await? {
        Some(item) => {
            let json = item::item_to_json(&item)?;
            aprintln!("{}", serde_json::to_string_pretty(&json)?);
        }
        None => aprintln!("Item not found"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
    use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
    use aws_smithy_types::body::SdkBody;

    /// A client whose single GetItem round trip replays a canned
    /// response body. No network access.
    fn client_replying_with(body: &str) -> Client {
        let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
            http::Request::builder()
                .uri("https://dynamodb.us-east-1.amazonaws.com/")
                .body(SdkBody::from(
                    r#"{"TableName":"students","Key":{"id":{"S":"12345"}}}"#,
                ))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(body.to_string()))
                .unwrap(),
        )]);

        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(Credentials::for_tests())
            .region(Region::new("us-east-1"))
            .http_client(http_client)
            .build();

        Client::from_conf(config)
    }

    #[tokio::test]
    async fn test_get_item_absent_key_returns_none() {
        let client = client_replying_with("{}");
        let key = item::json_to_item(&json!({ "id": "missing" })).unwrap();

        let result = get_item(&client, "students", key).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_item_present_key_returns_attributes() {
        let client =
            client_replying_with(r#"{"Item":{"id":{"S":"12345"},"status":{"S":"active"}}}"#);
        let key = item::json_to_item(&json!({ "id": "12345" })).unwrap();

        let found = get_item(&client, "students", key).await.unwrap().unwrap();
        assert_eq!(found["id"], AttributeValue::S("12345".to_string()));
        assert_eq!(found["status"], AttributeValue::S("active".to_string()));
    }
}
