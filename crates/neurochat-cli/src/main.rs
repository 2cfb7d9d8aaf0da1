use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use neurochat_core::{
    ChatConfig, ChatExport, Role, Transcript, APP_NAME, DEFAULT_API_URL,
    DEFAULT_MAX_HISTORY_MESSAGES, DEFAULT_MAX_TOKENS, DEFAULT_MODEL_NAME,
    DEFAULT_RATE_LIMIT_SECONDS, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE,
};
use neurochat_llm::{submit, CompletionClient, RateLimiter, RequestError};

mod logging;

use logging::init_logging;

/// Canned prompts offered in the interactive shell via /prompts.
const QUICK_PROMPTS: [&str; 5] = [
    "Tell me a joke about programming.",
    "Explain how APIs work in simple terms.",
    "Write a short Python function to calculate fibonacci numbers.",
    "What are the best practices for code documentation?",
    "Generate a creative story about AI and humans working together.",
];

#[derive(Parser, Debug)]
#[command(name = "neurochat")]
#[command(about = "Terminal chat client for a locally hosted language model")]
#[command(version)]
struct Cli {
    /// Completion endpoint URL
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Model name sent with every request
    #[arg(long, env = "MODEL_NAME", default_value = DEFAULT_MODEL_NAME)]
    model: String,

    /// Number of prior messages included in each request
    #[arg(long, env = "MAX_HISTORY_MESSAGES", default_value_t = DEFAULT_MAX_HISTORY_MESSAGES)]
    max_history_messages: usize,

    /// Minimum seconds between requests
    #[arg(long, env = "RATE_LIMIT_SECONDS", default_value_t = DEFAULT_RATE_LIMIT_SECONDS)]
    rate_limit_seconds: f64,

    /// System prompt sent ahead of the history; pass an empty string to disable
    #[arg(long, env = "SYSTEM_PROMPT")]
    system_prompt: Option<String>,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Maximum tokens to generate per reply
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Enable debug logging
    #[arg(long, short, env = "DEBUG", default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start interactive chat (the default)
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message content
        message: String,
    },
    /// Probe the endpoint and report connectivity
    Health,
}

impl Cli {
    fn config(&self) -> anyhow::Result<ChatConfig> {
        let config = ChatConfig {
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            max_history_messages: self.max_history_messages,
            rate_limit: ChatConfig::rate_limit_from_secs(self.rate_limit_seconds)?,
            system_prompt: self
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = cli.config()?;
    log::info!("{} starting", APP_NAME);
    log::info!("  Endpoint: {}", config.api_url);
    log::info!("  Model: {}", config.model);
    log::info!("  History window: {} messages", config.max_history_messages);
    log::info!("  Rate limit: {:.1}s", config.rate_limit.as_secs_f64());

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_interactive_chat(config).await,
        Commands::Send { message } => send_once(config, &message).await,
        Commands::Health => report_health(config).await,
    }
}

async fn run_interactive_chat(config: ChatConfig) -> anyhow::Result<()> {
    let client = CompletionClient::new(config.api_url.clone());
    let mut limiter = RateLimiter::new(config.rate_limit);
    let mut transcript = Transcript::new();

    println!(
        "{}",
        format!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"))
            .cyan()
            .bold()
    );
    println!(
        "{}",
        format!("Model: {} @ {}", config.model, config.api_url).dimmed()
    );
    println!(
        "{}",
        "Commands: /history  /clear  /export [path]  /health  /prompts  /quit".dimmed()
    );

    if client.check_health().await {
        println!("{}", "Endpoint reachable.".green());
    } else {
        println!(
            "{}",
            "Endpoint not reachable yet; messages will fail until the server is up.".yellow()
        );
    }
    println!();

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.starts_with('/') {
            let mut parts = input.splitn(2, ' ');
            let command = parts.next().unwrap_or("");
            let arg = parts.next().unwrap_or("").trim();

            match command {
                "/quit" | "/exit" => {
                    println!("{}", "Goodbye!".cyan());
                    break;
                }
                "/clear" => {
                    transcript.clear();
                    println!("{}", "Chat history has been reset.".green());
                }
                "/health" => {
                    if client.check_health().await {
                        println!("{}", "Endpoint reachable.".green());
                    } else {
                        println!("{}", "Endpoint not reachable.".red());
                    }
                }
                "/history" => print_transcript(&transcript),
                "/prompts" => print_quick_prompts(),
                "/prompt" => match arg.parse::<usize>() {
                    Ok(n) if (1..=QUICK_PROMPTS.len()).contains(&n) => {
                        let text = QUICK_PROMPTS[n - 1];
                        println!("{} {}", "You:".cyan().bold(), text);
                        send_turn(&client, &config, &mut transcript, &mut limiter, text).await;
                    }
                    _ => println!("Usage: /prompt <1-{}>", QUICK_PROMPTS.len()),
                },
                "/export" => handle_export(&transcript, &config.system_prompt, arg),
                _ => println!(
                    "Unknown command {command}. Available: /history /clear /export /health /prompts /quit"
                ),
            }
            continue;
        }

        send_turn(&client, &config, &mut transcript, &mut limiter, input).await;
    }

    Ok(())
}

async fn send_turn(
    client: &CompletionClient,
    config: &ChatConfig,
    transcript: &mut Transcript,
    limiter: &mut RateLimiter,
    text: &str,
) {
    match submit(client, config, transcript, limiter, text).await {
        Ok(reply) => {
            println!("{} {}", "Assistant:".green().bold(), reply.text);
            transcript.commit_exchange(text, &reply.text);
        }
        Err(err) => render_error(&err),
    }
}

fn render_error(err: &RequestError) {
    match err {
        RequestError::RateLimited { wait } => {
            println!(
                "{}",
                format!(
                    "Please wait {:.1}s between messages.",
                    wait.as_secs_f64()
                )
                .yellow()
            );
        }
        RequestError::ConnectionFailed(_) => {
            log::error!("{err}");
            println!(
                "{}",
                format!("{err}. Is the model server running?").red()
            );
        }
        RequestError::ServerError { .. } => {
            log::error!("{err}");
            println!("{}", err.to_string().red());
        }
        RequestError::MalformedResponse(_) => {
            log::error!("{err}");
            println!(
                "{}",
                format!("{err}. Check the endpoint URL and model name.").red()
            );
        }
    }
    println!(
        "{}",
        "Your message was not added to the history; send it again to retry.".dimmed()
    );
}

fn print_transcript(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("{}", "No messages yet.".dimmed());
        return;
    }
    for message in transcript.messages() {
        match message.role {
            Role::User => println!("{} {}", "You:".cyan().bold(), message.content),
            Role::Assistant => println!("{} {}", "Assistant:".green().bold(), message.content),
        }
    }
}

fn print_quick_prompts() {
    println!("{}", "Quick prompts:".cyan());
    for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
        println!("  {}. {}", i + 1, prompt);
    }
    println!("{}", "Send one with /prompt <number>.".dimmed());
}

fn handle_export(transcript: &Transcript, system_prompt: &str, path_arg: &str) {
    if transcript.is_empty() {
        println!("{}", "Nothing to export yet.".yellow());
        return;
    }

    let path = if path_arg.is_empty() {
        PathBuf::from(ChatExport::default_filename())
    } else {
        PathBuf::from(path_arg)
    };

    match write_export(transcript, system_prompt, &path) {
        Ok(()) => println!(
            "{}",
            format!(
                "Exported {} messages to {}",
                transcript.len(),
                path.display()
            )
            .green()
        ),
        Err(err) => println!("{}", format!("Export failed: {err}").red()),
    }
}

fn write_export(transcript: &Transcript, system_prompt: &str, path: &Path) -> anyhow::Result<()> {
    let export = ChatExport::new(transcript, system_prompt);
    std::fs::write(path, export.to_pretty_json()?)?;
    Ok(())
}

async fn send_once(config: ChatConfig, message: &str) -> anyhow::Result<()> {
    let message = message.trim();
    anyhow::ensure!(!message.is_empty(), "message must not be empty");

    let client = CompletionClient::new(config.api_url.clone());
    let mut limiter = RateLimiter::new(config.rate_limit);
    let transcript = Transcript::new();

    let reply = submit(&client, &config, &transcript, &mut limiter, message).await?;
    println!("{}", reply.text);
    Ok(())
}

async fn report_health(config: ChatConfig) -> anyhow::Result<()> {
    let client = CompletionClient::new(config.api_url.clone());
    if client.check_health().await {
        println!("{}", format!("{} is reachable", config.api_url).green());
    } else {
        println!("{}", format!("{} is not reachable", config.api_url).red());
    }
    Ok(())
}
