//! Taskboard server entry point.
//!
//! # Responsibility
//! - Resolve configuration from environment and command-line flags.
//! - Bootstrap logging, bind the listener and serve until a shutdown signal.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::config::{parse_bind, ENV_BIND, ENV_DATA_DIR, ENV_LOG_DIR, ENV_LOG_LEVEL};
use taskboard_core::logging::normalize_level;
use taskboard_core::{init_logging, logging_status, AppConfig, ConfigError, CsvStore};
use taskboard_web::{build_router, shutdown_signal, AppState};

#[derive(Parser, Debug)]
#[command(name = "taskboard", version)]
#[command(about = "Project and task tracker backed by CSV files")]
struct Cli {
    /// Directory holding projetos.csv and tarefas.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Listen address, host:port
    #[arg(long, value_parser = parse_bind)]
    bind: Option<std::net::SocketAddr>,
    /// trace|debug|info|warn|error
    #[arg(long, value_parser = normalize_level)]
    log_level: Option<&'static str>,
    /// Absolute directory for rolling log files; stderr when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Resolves configuration with flags taking precedence over `env`.
    ///
    /// Flags replace the raw environment values before anything is parsed,
    /// so an invalid variable is never reported when its flag is given.
    fn resolve_config<F>(&self, env: F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        AppConfig::from_lookup(|key| self.flag_value(key).or_else(|| env(key)))
    }

    fn flag_value(&self, key: &str) -> Option<String> {
        match key {
            ENV_DATA_DIR => self
                .data_dir
                .as_ref()
                .map(|dir| dir.to_string_lossy().into_owned()),
            ENV_BIND => self.bind.map(|addr| addr.to_string()),
            ENV_LOG_LEVEL => self.log_level.map(str::to_string),
            ENV_LOG_DIR => self
                .log_dir
                .as_ref()
                .map(|dir| dir.to_string_lossy().into_owned()),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("taskboard: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, config.log_dir.as_deref()) {
        eprintln!("taskboard: {err}");
        return ExitCode::FAILURE;
    }
    if let Some((level, log_dir)) = logging_status() {
        info!(
            "event=logging_ready module=cli status=ok level={} target={}",
            level,
            log_dir.map_or_else(|| "stderr".to_string(), |dir| dir.display().to_string())
        );
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=cli status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: AppConfig) -> std::io::Result<()> {
    let store = CsvStore::new(&config.data_dir);
    info!(
        "event=store_ready module=cli status=ok projects_file={} tasks_file={}",
        store.projects_path().display(),
        store.tasks_path().display()
    );
    let router = build_router(AppState::new(taskboard_core::TrackerService::new(store)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_listen module=cli status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_shutdown module=cli status=ok");
    Ok(())
}
