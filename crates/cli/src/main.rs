//! Creator Partner CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: load the optional TOML file, apply command-line
//!    overrides, and validate the result.
//! 2. **Wire observability**: configure `tracing-subscriber` with a pretty or
//!    JSON layer and, when an endpoint is configured, an OpenTelemetry OTLP
//!    exporter. All `tracing` spans and events emitted by every crate in the
//!    workspace flow through this subscriber.
//! 3. **Validate input**: collect the request fields and reject a request
//!    missing a mandatory field before any generation call is made.
//! 4. **Construct infrastructure**: create the [`llm::GeminiProvider`] (or a
//!    [`llm::MockGenerator`] for `--dry-run`), wrap it in an
//!    [`nodes::LlmGateway`], and inject it into [`nodes::PipelineExecutor`].
//! 5. **Render**: print the three expert sections as markdown or JSON.

mod config;
mod render;
mod telemetry;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use llm::{GeminiConfig, GeminiProvider, MockGenerator};
use nodes::{LlmGateway, PipelineExecutor};
use pipeline::{ExpertPersona, InputFields, ServiceType, TextGenerator};

use crate::config::{Config, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "creator-partner", version)]
#[command(about = "Three AI experts plan your content, one after another", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true, env = "CREATOR_PARTNER_CONFIG")]
    config: Option<PathBuf>,

    /// Log output format; overrides `telemetry.format`.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the strategist, writer and platform specialist for one request
    Run(RunArgs),
    /// Show the expert profiles
    Experts,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Service type: youtube, blog, instagram, integrated, or any other label.
    #[arg(long, short = 's')]
    service: String,

    #[arg(long)]
    topic: Option<String>,

    #[arg(long)]
    goals: Option<String>,

    #[arg(long)]
    target_audience: Option<String>,

    /// Additional request field, e.g. `--field channel_size=5k`. Repeatable.
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Print the result as JSON instead of markdown.
    #[arg(long)]
    json: bool,

    /// Answer every stage with its own prompt instead of calling Gemini.
    #[arg(long)]
    dry_run: bool,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Overrides `generation.model`.
    #[arg(long)]
    model: Option<String>,

    /// Overrides `generation.timeout_secs`.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl RunArgs {
    /// Extra fields first so the dedicated flags win on a name clash.
    fn input_fields(&self) -> InputFields {
        let mut fields: InputFields = self.fields.iter().cloned().collect();
        let mandatory = [
            (InputFields::TOPIC, &self.topic),
            (InputFields::GOALS, &self.goals),
            (InputFields::TARGET_AUDIENCE, &self.target_audience),
        ];
        for (name, value) in mandatory {
            if let Some(value) = value {
                fields.insert(name, value.as_str());
            }
        }
        fields
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty field name in `{raw}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(format) = cli.log_format {
        config.telemetry.format = format;
    }
    let telemetry = telemetry::init(&config.telemetry)?;

    let outcome = match cli.command {
        Command::Run(args) => run(config, args).await,
        Command::Experts => {
            print!("{}", render::roster_markdown(&ExpertPersona::roster()));
            Ok(())
        }
    };

    telemetry.shutdown();
    outcome
}

async fn run(mut config: Config, args: RunArgs) -> Result<()> {
    let service_type = ServiceType::parse(&args.service);
    let fields = args.input_fields();
    fields.require_mandatory()?;

    config.apply_overrides(args.model.as_deref(), args.timeout_secs);
    config.validate()?;

    let generator = build_generator(&config, &args)?;
    tracing::info!(
        provider = generator.name(),
        service_type = %service_type,
        "Starting content planning"
    );

    let gateway = LlmGateway::new(generator).with_timeout(Some(config.generation.timeout()));
    let executor = PipelineExecutor::new(gateway);

    let result = executor
        .run(service_type.clone(), &fields)
        .await
        .context("content planning did not complete")?;

    if args.json {
        println!("{}", render::json(&service_type, &result)?);
    } else {
        print!("{}", render::markdown(&service_type, &result));
    }
    Ok(())
}

fn build_generator(config: &Config, args: &RunArgs) -> Result<Arc<dyn TextGenerator>> {
    if args.dry_run {
        return Ok(Arc::new(MockGenerator::echo()));
    }

    let Some(api_key) = args.api_key.clone() else {
        bail!("no API key: pass --api-key or set GEMINI_API_KEY (or use --dry-run)");
    };

    let generation = &config.generation;
    let provider = GeminiProvider::new(GeminiConfig {
        api_key,
        model: generation.model.clone(),
        base_url: generation.base_url.clone(),
        temperature: generation.temperature,
        max_output_tokens: generation.max_output_tokens,
    })?;
    Ok(Arc::new(provider))
}
