use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "opgl-cli")]
#[command(about = "Command-line client for the opgl-data service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Look up a summoner by Riot ID
    Summoner {
        region: String,
        game_name: String,
        tag_line: String,
    },
    /// Fetch recent matches by PUUID or Riot ID
    Matches(MatchesArgs),
}

#[derive(Args)]
struct MatchesArgs {
    region: String,

    #[arg(long, conflicts_with_all = ["game_name", "tag_line"], required_unless_present = "game_name")]
    puuid: Option<String>,

    #[arg(long, requires = "tag_line")]
    game_name: Option<String>,

    #[arg(long, requires = "game_name")]
    tag_line: Option<String>,

    #[arg(short, long)]
    count: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.post(format!("{base}/health")).send().await?,
        Commands::Summoner {
            region,
            game_name,
            tag_line,
        } => {
            client
                .post(format!("{base}/api/v1/summoner"))
                .json(&json!({ "region": region, "gameName": game_name, "tagLine": tag_line }))
                .send()
                .await?
        }
        Commands::Matches(args) => {
            client
                .post(format!("{base}/api/v1/matches"))
                .json(&json!({
                    "region": args.region,
                    "puuid": args.puuid,
                    "gameName": args.game_name,
                    "tagLine": args.tag_line,
                    "count": args.count,
                }))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
