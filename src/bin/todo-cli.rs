use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(about = "Management CLI for the TODO service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(long, default_value = "test")]
    user: String,

    /// Plaintext password; hashed server-side credentials are compared
    /// against its SHA-256 digest.
    #[arg(long, default_value = "password")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List TODOs (newest first)
    List {
        #[arg(long, default_value_t = 0)]
        prev_id: i64,
        #[arg(long, default_value_t = 5)]
        size: i64,
    },
    /// Create a new TODO
    Add {
        subject: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Update an existing TODO
    Update {
        id: i64,
        subject: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Delete TODOs by id
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/todos", cli.url);

    let request = match cli.command {
        Commands::List { prev_id, size } => client
            .get(&endpoint)
            .query(&[("prev_id", prev_id.to_string()), ("size", size.to_string())]),
        Commands::Add {
            subject,
            description,
        } => client
            .post(&endpoint)
            .json(&json!({ "subject": subject, "description": description })),
        Commands::Update {
            id,
            subject,
            description,
        } => client
            .put(&endpoint)
            .json(&json!({ "id": id, "subject": subject, "description": description })),
        Commands::Remove { ids } => client.delete(&endpoint).json(&json!({ "ids": ids })),
    };

    let response = request
        .basic_auth(&cli.user, Some(&cli.password))
        .send()
        .await?;

    print_response(response).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            if !text.is_empty() {
                eprintln!("Response: {}", text);
            }
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
