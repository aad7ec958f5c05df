//! CLI entrypoint for Weather Vibes
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::IsTerminal;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vibes_application::{
    AgentFactory, NoToolHooks, RecommendVideoPipeline, ToolHooks, UmbrellaPipeline,
    WeatherPipeline,
};
use vibes_infrastructure::{
    ConfigIssue, ConfigLoader, Credentials, FileConfig, WeatherVibesAgentFactory, load_dotenv,
};
use vibes_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credentials may live in .env; load it before anything reads the environment
    let dotenv_path = load_dotenv();

    // Initialize logging: RUST_LOG wins, otherwise the verbosity level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Weather Vibes");
    if let Some(path) = &dotenv_path {
        info!(path = %path.display(), "Loaded environment from .env");
    }

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        let config = load_config(&cli)?;
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let show_progress = !cli.quiet && !command_wants_json(&command);
    let hooks: Arc<dyn ToolHooks> = if !show_progress || matches!(command, Command::Serve { .. }) {
        Arc::new(NoToolHooks)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let factory = WeatherVibesAgentFactory::new(&config, Credentials::from_env())
        .context("Failed to build HTTP client")?
        .with_hooks(hooks);

    let credentials = factory.credentials();
    if credentials.weather_key().is_none() {
        warn!(
            missing = %credentials.missing_weather_keys(),
            "No weather API key configured, weather results will be mock data"
        );
    }
    if credentials.youtube_key().is_none() {
        warn!("YOUTUBE_API_KEY not set, video results will be mock data");
    }

    match command {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let addr = resolve_bind_address(&server.bind_address()).await?;
            println!(
                "{} http://{}",
                "Weather Vibes API listening on".bold(),
                addr
            );
            let factory: Arc<dyn AgentFactory> = Arc::new(factory);
            vibes_presentation::serve(factory, addr, &server.allowed_origins).await?;
        }
        Command::Weather { location, json } => {
            let mut agent = factory.create_agent()?;
            let report = agent.run(&WeatherPipeline, &location).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&report));
            } else {
                println!("{}", ConsoleFormatter::format_weather(&report));
            }
        }
        Command::Umbrella { location } => {
            let mut agent = factory.create_agent()?;
            let advice = agent.run(&UmbrellaPipeline, &location).await?;
            println!("{}", ConsoleFormatter::format_umbrella(&advice));
        }
        Command::Vibes { location, json } => {
            let mut agent = factory.create_agent()?;
            let rec = agent.run(&RecommendVideoPipeline, &location).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&rec));
            } else {
                println!("{}", ConsoleFormatter::format_recommendation(&rec));
            }
        }
        Command::Tools { tags } => {
            let agent = factory.create_agent()?;
            let tools = if tags.is_empty() {
                agent.registry().list()
            } else {
                agent.registry().find_by_tags(tags.as_slice())
            };
            println!("{}", ConsoleFormatter::format_tools(&tools));
        }
    }

    Ok(())
}

fn command_wants_json(command: &Command) -> bool {
    matches!(
        command,
        Command::Weather { json: true, .. } | Command::Vibes { json: true, .. }
    )
}

/// Load and validate configuration; errors abort, warnings are printed
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let issues = config.validate();
    for issue in &issues {
        eprintln!("{} {}", "config".yellow(), issue);
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration");
    }
    Ok(config)
}

async fn resolve_bind_address(bind: &str) -> Result<SocketAddr> {
    tokio::net::lookup_host(bind)
        .await
        .with_context(|| format!("Failed to resolve bind address {}", bind))?
        .next()
        .with_context(|| format!("No address found for {}", bind))
}
