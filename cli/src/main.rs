//! CLI entrypoint for LegalAi
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use legalai_application::{
    ChatDispatcher, ChatRequest, ConversationLogger, DispatchProgressNotifier, LegalSearchPort,
    NoConversationLogger, NoDispatchProgress,
};
use legalai_domain::MediaReference;
use legalai_infrastructure::{
    CaseLawCatalog, ConfigLoader, FileConfig, FileOutputFormat, GeminiConfig, GeminiModelService,
    JsonSchemaToolConverter, JsonlConversationLogger, LegalToolExecutor, LocalContentStore,
};
use legalai_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Split a log file path into its (created) directory and file name.
fn prepare_log_file(path: &Path) -> Result<(PathBuf, OsString)> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "legalai.log".into());
    Ok((dir, name))
}

/// Install stderr logging plus an optional file sink.
///
/// The returned guard flushes the file writer on drop and must outlive `main`'s work.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(log_filter(verbose));

    let (file_layer, guard) = match file {
        Some(path) => {
            let (dir, name) = prepare_log_file(path)?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
                ));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn output_format(cli: &Cli, config: &FileConfig) -> OutputFormat {
    cli.output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    })
}

/// Wire adapters into a dispatcher.
fn build_dispatcher(config: &FileConfig) -> Result<ChatDispatcher> {
    let model = Arc::new(GeminiModelService::new(GeminiConfig::from_file_config(
        &config.model,
    )?)?);
    let content_store = Arc::new(LocalContentStore::new(config.content.max_bytes));

    let catalog = match &config.case_law.catalog_path {
        Some(path) => CaseLawCatalog::from_file(path)?,
        None => CaseLawCatalog::seeded(),
    };
    info!("Case-law catalogue ready ({} cases)", catalog.len());
    let legal_search: Arc<dyn LegalSearchPort> = Arc::new(catalog);

    let params = config.dispatch.to_execution_params();
    let tools = Arc::new(LegalToolExecutor::new(
        legal_search.clone(),
        params.tool_search_limit,
    ));

    let conversation_logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log
    {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Conversation log disabled");
                Arc::new(NoConversationLogger)
            }
        },
        None => Arc::new(NoConversationLogger),
    };

    Ok(ChatDispatcher::new(
        model,
        content_store,
        legal_search,
        tools,
        Arc::new(JsonSchemaToolConverter),
    )
    .with_params(params)
    .with_conversation_logger(conversation_logger))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting LegalAi");

    if !config.output.color {
        colored::control::set_override(false);
    }

    let role = match cli.role {
        Some(role) => role,
        None => config.default_role()?,
    };
    let output = output_format(&cli, &config);
    let document = cli.document.clone().map(MediaReference::new);
    let audio = cli.audio.clone().map(MediaReference::new);

    // Chat mode
    if cli.chat {
        let dispatcher = Arc::new(build_dispatcher(&config)?);
        let mut repl = ChatRepl::new(dispatcher, role)
            .with_progress(!cli.quiet)
            .with_output(output)
            .with_document(document)
            .with_audio(audio);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single message mode - message is required
    let Some(message) = cli.message.clone() else {
        bail!("A message is required. Use --chat for interactive mode.");
    };

    let cancellation = CancellationToken::new();
    let dispatcher = build_dispatcher(&config)?.with_cancellation(cancellation.clone());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancellation.cancel();
        }
    });

    let mut request = ChatRequest::new(message).with_role(role);
    if let Some(document) = document {
        request = request.with_document(document);
    }
    if let Some(audio) = audio {
        request = request.with_audio(audio);
    }

    let progress: Box<dyn DispatchProgressNotifier> = if cli.quiet || output == OutputFormat::Json
    {
        Box::new(NoDispatchProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    match dispatcher.dispatch(&request, progress.as_ref()).await {
        Ok(envelope) => {
            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format(&envelope),
                OutputFormat::Json => ConsoleFormatter::format_json(&envelope),
            };
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            Ok(if e.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
