//! CLI smoke entry point.
//!
//! # Responsibility
//! - Run the reference workflow against the in-memory document API.
//! - Print both persisted documents as JSON for quick local inspection.
//!
//! # Configuration
//! - `CATNOTE_LOG_LEVEL`: log level, defaults to the build-mode default.
//! - `CATNOTE_LOG_DIR`: absolute log directory, defaults to a temp subdir.
//! - `CATNOTE_SERVER_HOST`: host recorded in document links.

use catnote_core::workflow::active_inference_workflow;
use catnote_core::{
    check_references, default_log_level, init_logging, validate_document, InMemoryDocumentApi,
    NotebookClient,
};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

const DEFAULT_SERVER_HOST: &str = "localhost";
const DEFAULT_LOG_DIR_NAME: &str = "catnote-logs";

static CLI_CONFIG: OnceLock<CliConfig> = OnceLock::new();

#[derive(Debug)]
struct CliConfig {
    log_level: String,
    log_dir: PathBuf,
    server_host: String,
}

fn config() -> &'static CliConfig {
    CLI_CONFIG.get_or_init(|| CliConfig {
        log_level: env_non_blank("CATNOTE_LOG_LEVEL")
            .unwrap_or_else(|| default_log_level().to_string()),
        log_dir: env_non_blank("CATNOTE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
        server_host: env_non_blank("CATNOTE_SERVER_HOST")
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
    })
}

fn env_non_blank(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = config();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("catnote: logging disabled: {err}");
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={}", message);
            eprintln!("catnote: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &CliConfig) -> Result<(), String> {
    let api = Arc::new(InMemoryDocumentApi::new(config.server_host.as_str()));
    let client = NotebookClient::new(Arc::clone(&api));

    let ids = active_inference_workflow(&client)
        .await
        .map_err(|err| format!("workflow failed: {err}"))?;
    info!(
        "event=cli_run module=cli status=ok model_id={} diagram_id={}",
        ids.model_id, ids.diagram_id
    );

    for ref_id in [ids.model_id, ids.diagram_id] {
        let document = api
            .document(ref_id)
            .ok_or_else(|| format!("persisted document {ref_id} is missing"))?;
        if !validate_document(&document) {
            return Err(format!("persisted document {ref_id} failed validation"));
        }
        if let Err(findings) = check_references(&document) {
            return Err(format!(
                "persisted document {ref_id} has {} dangling reference(s)",
                findings.len()
            ));
        }
        let json = serde_json::to_string_pretty(&document)
            .map_err(|err| format!("failed to encode {ref_id}: {err}"))?;
        println!("# {ref_id}\n{json}");
    }
    Ok(())
}
