use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use scl90_cli::commands;
use scl90_cli::config::{self, Scl90Config};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the access token for an order id
    Verify {
        /// Order id; whitespace anywhere in it is ignored
        #[arg(required = true, num_args = 1..)]
        order_id: Vec<String>,
    },
    /// Check an access token against an order id
    Check { order_id: String, token: String },
    /// Admit an access token and begin or resume the questionnaire
    Start { token: String },
    /// Record the response (1-5) for one item
    Answer { item: u16, value: u8 },
    /// Show progress and the admitted token
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Score the completed questionnaire and consume the token
    Finish {
        #[arg(long)]
        json: bool,
    },
    /// Show the report for the stored answers again
    #[command(name = "result")]
    Report {
        #[arg(long)]
        json: bool,
    },
    /// Score an answers JSON file ({"1": 3, "2": 1, ...})
    Score {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Discard the in-progress answers
    Reset,
    /// Write the effective config to the config file
    InitConfig,
}

#[derive(Parser, Debug)]
#[command(name = "scl90")]
#[command(about = "SCL-90 self-assessment with order-based access tokens", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to <config dir>/scl90/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the local store, overriding the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let mut config = config::load_config(&config_path)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    let output = match cli.command {
        Commands::Verify { order_id } => commands::verify(&config, &order_id.concat())?,
        Commands::Check { order_id, token } => {
            if !commands::check(&config, &order_id, &token) {
                eprintln!("Token does not match this order id.");
                std::process::exit(1);
            }
            "Token is valid.".to_string()
        }
        Commands::Start { token } => commands::start(&config, &token)?,
        Commands::Answer { item, value } => commands::answer(&config, item, value)?,
        Commands::Status { json } => commands::status(&config, json)?,
        Commands::Finish { json } => commands::finish(&config, json)?,
        Commands::Report { json } => commands::report(&config, json)?,
        Commands::Score { file, json } => commands::score_file(&file, json)?,
        Commands::Reset => commands::reset(&config)?,
        Commands::InitConfig => init_config(&config_path, config)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn init_config(path: &std::path::Path, config: Scl90Config) -> Result<String> {
    config::save_config(path, &config)?;
    Ok(format!("Config written to {}", path.display()))
}
