use std::time::Duration;

use catalog::{Catalog, NewToolRecord, RecordError, ToolDescriptor, ToolPatch};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use uuid::Uuid;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("nothing to update; pass at least one field")]
    EmptyUpdate,
    #[error("invalid tool: {0}")]
    Invalid(#[from] RecordError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "toolbox-cli", about = "Toolbox catalog queries and admin API client")]
struct Cli {
    #[arg(long, env = "TOOLBOX_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "TOOLBOX_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    timeout: Duration,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Catalog(CatalogCommand),
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Subcommand, Debug)]
enum CatalogSubcommand {
    /// List categories with tool counts.
    Categories,
    /// List tools, optionally narrowed by category or curation flag.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = false)]
        featured: bool,
        #[arg(long, default_value_t = false)]
        new: bool,
    },
    /// Case-insensitive search over name, description, and category.
    Search { query: String },
    /// Print one tool descriptor as JSON.
    Show { id: String },
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Args, Debug, Default)]
struct ToolFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    featured: Option<bool>,
    #[arg(long)]
    new: Option<bool>,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value_t = false)]
        featured: bool,
        #[arg(long, default_value_t = false)]
        new: bool,
    },
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: ToolFields,
    },
    Delete {
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, timeout: Duration::from_secs(cli.timeout_secs) };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Catalog(catalog) => run_catalog(&Catalog::builtin(), catalog),
        Command::Admin(admin) => run_admin(&ctx, &Catalog::builtin(), admin).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = http_client(cli)?;
    let response = client.get(api_url(&cli.base_url, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

fn run_catalog(catalog: &Catalog, command: CatalogCommand) -> Result<(), CliError> {
    match command.command {
        CatalogSubcommand::Categories => {
            for category in catalog.categories() {
                println!("{:<14} {:>3}  {}", category.id, catalog.count_in(category.id), category.name);
            }
            Ok(())
        }
        CatalogSubcommand::List { category, featured, new } => {
            let tools = list_tools(catalog, category.as_deref(), featured, new)?;
            print_tool_lines(&tools);
            Ok(())
        }
        CatalogSubcommand::Search { query } => {
            print_tool_lines(&catalog.search(&query));
            Ok(())
        }
        CatalogSubcommand::Show { id } => {
            let tool = catalog.tool(&id).ok_or(CliError::UnknownTool(id))?;
            let mut json = serde_json::to_value(tool)?;
            if let Value::Object(map) = &mut json {
                map.insert("path".to_owned(), Value::String(tool.path()));
            }
            print_json(&json)
        }
    }
}

fn list_tools(
    catalog: &Catalog,
    category: Option<&str>,
    featured: bool,
    new: bool,
) -> Result<Vec<&'static ToolDescriptor>, CliError> {
    let tools = match category {
        Some(id) if catalog.category(id).is_none() => return Err(CliError::UnknownCategory(id.to_owned())),
        Some(id) => catalog.list_by_category(id),
        None => catalog.tools().iter().collect(),
    };
    Ok(tools
        .into_iter()
        .filter(|tool| !featured || tool.featured)
        .filter(|tool| !new || tool.is_new)
        .collect())
}

fn tool_line(tool: &ToolDescriptor) -> String {
    let mut flags = String::new();
    if tool.featured {
        flags.push('*');
    }
    if tool.is_new {
        flags.push('+');
    }
    format!("{:<26} {:<12} {:<2} {}", tool.id, tool.category, flags, tool.name)
}

fn print_tool_lines(tools: &[&ToolDescriptor]) {
    for tool in tools {
        println!("{}", tool_line(tool));
    }
}

async fn run_admin(cli: &CliContext, catalog: &Catalog, admin: AdminCommand) -> Result<(), CliError> {
    match admin.command {
        AdminSubcommand::List => {
            let json = api_request(cli, reqwest::Method::GET, "/api/tools", None).await?;
            print_json(&json)
        }
        AdminSubcommand::Add { name, category, description, url, featured, new } => {
            let record = NewToolRecord { name, description, category_id: category, url, featured, is_new: new };
            record.validate(catalog)?;
            let body = serde_json::to_value(&record)?;
            let json = api_request(cli, reqwest::Method::POST, "/api/tools", Some(body)).await?;
            print_json(&json)
        }
        AdminSubcommand::Update { id, fields } => {
            let patch = build_patch(fields);
            if patch.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            patch.validate(catalog)?;
            let body = serde_json::to_value(&patch)?;
            let path = format!("/api/tools/{id}");
            let json = api_request(cli, reqwest::Method::PATCH, &path, Some(body)).await?;
            print_json(&json)
        }
        AdminSubcommand::Delete { id } => {
            let path = format!("/api/tools/{id}");
            api_request(cli, reqwest::Method::DELETE, &path, None).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

fn build_patch(fields: ToolFields) -> ToolPatch {
    ToolPatch {
        name: fields.name,
        description: fields.description,
        category_id: fields.category,
        url: fields.url,
        featured: fields.featured,
        is_new: fields.new,
    }
}

fn api_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn http_client(cli: &CliContext) -> Result<reqwest::Client, CliError> {
    Ok(reqwest::Client::builder().timeout(cli.timeout).build()?)
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let client = http_client(cli)?;
    let request = client.request(method, api_url(&cli.base_url, path));
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_message(&value, status.as_u16()) });
    }

    Ok(value)
}

fn error_message(body: &Value, status: u16) -> String {
    match (body, status) {
        (Value::Null, 404) => "not found".to_owned(),
        (Value::Null, 422) => "rejected: check name, category, and url".to_owned(),
        (Value::Null, _) => "request failed".to_owned(),
        (other, _) => other.to_string(),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
