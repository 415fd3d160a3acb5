use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clientele_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "server.bind_address",
        &config.server.bind_address,
        field_source(
            "server.bind_address",
            &["CLIENTELE_SERVER_BIND_ADDRESS"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "server.port",
        &config.server.port.to_string(),
        field_source(
            "server.port",
            &["CLIENTELE_SERVER_PORT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "server.graceful_shutdown_secs",
        &config.server.graceful_shutdown_secs.to_string(),
        field_source(
            "server.graceful_shutdown_secs",
            &["CLIENTELE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "seed.path",
        &config.seed.path.display().to_string(),
        field_source(
            "seed.path",
            &["CLIENTELE_SEED_PATH"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            &["CLIENTELE_LOGGING_LEVEL", "CLIENTELE_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format).to_lowercase(),
        field_source(
            "logging.format",
            &["CLIENTELE_LOGGING_FORMAT", "CLIENTELE_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("clientele.toml"), PathBuf::from("config/clientele.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    toml::from_str::<Value>(&raw).ok()
}

fn field_source(
    field: &str,
    env_keys: &[&str],
    doc: Option<&Value>,
    path: Option<&Path>,
) -> String {
    for env_key in env_keys {
        let is_set = env::var(env_key).ok().filter(|value| !value.trim().is_empty()).is_some();
        if is_set {
            return format!("env:{env_key}");
        }
    }

    if doc_has_field(doc, field) {
        if let Some(path) = path {
            return format!("file:{}", path.display());
        }
    }

    "default".to_string()
}

fn doc_has_field(doc: Option<&Value>, field: &str) -> bool {
    let Some(mut value) = doc else {
        return false;
    };

    for part in field.split('.') {
        match value.get(part) {
            Some(next) => value = next,
            None => return false,
        }
    }

    true
}

fn render_line(field: &str, value: &str, source: String) -> String {
    format!("  {field:<30} {value:<28} ({source})")
}
