use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use askgh::cli::Commands;
use askgh::{
    env_lookup, format_answer, resolve_credential, AnswerQuestionUseCase, ChatTransport,
    ClientConfig, HttpChatTransport, InferenceClient, MockChatTransport, Repl,
};

#[derive(Parser)]
#[command(name = "askgh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Bearer token; falls back to GITHUB_TOKEN
    #[arg(long, global = true)]
    token: Option<String>,

    /// Chat-completion endpoint; falls back to ASKGH_ENDPOINT
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Model id; falls back to ASKGH_MODEL, then gpt-4o
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Answer from an offline mock instead of the network
    #[arg(long, global = true)]
    mock: bool,

    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = build_config(&cli);
    config.validate()?;

    let transport: Arc<dyn ChatTransport> = if cli.mock {
        info!("Using mock chat transport");
        Arc::new(MockChatTransport::default())
    } else {
        Arc::new(HttpChatTransport::new())
    };

    let client = Arc::new(InferenceClient::new(transport, config));
    let use_case = AnswerQuestionUseCase::new(client);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let repl = Repl::new(use_case)
                .with_progress(!cli.no_progress && std::io::stderr().is_terminal());
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            repl.run(stdin.lock(), &mut stdout).await?;
        }

        Commands::Ask { question } => {
            let answer = use_case.execute(&question).await;
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", format_answer(&answer))?;
            stdout.flush()?;
            if !answer.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(endpoint) = cli.endpoint.as_deref() {
        config = config.with_endpoint(endpoint);
    }
    if let Some(model) = cli.model.as_deref() {
        config = config.with_model(model);
    }
    if cli.token.is_some() {
        config = config.with_credential(resolve_credential(cli.token.as_deref(), env_lookup));
    }
    config
}
