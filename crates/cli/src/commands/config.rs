use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use storefront_core::config::{AppConfig, LoadOptions};
use toml::Value;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct ConfigField {
    key: String,
    value: String,
    source: String,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                2,
            )
        }
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut fields = vec![
        field(
            "storefront.business_name",
            &config.storefront.business_name,
            source("storefront.business_name", &["STOREFRONT_BUSINESS_NAME"]),
        ),
        field(
            "storefront.currency_label",
            &config.storefront.currency_label,
            source("storefront.currency_label", &["STOREFRONT_CURRENCY_LABEL"]),
        ),
        field(
            "storefront.deep_link_base",
            &config.storefront.deep_link_base,
            source("storefront.deep_link_base", &["STOREFRONT_DEEP_LINK_BASE"]),
        ),
    ];

    let catalog_path = config
        .storefront
        .catalog_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<built-in>".to_string());
    fields.push(field(
        "storefront.catalog_path",
        &catalog_path,
        source("storefront.catalog_path", &["STOREFRONT_CATALOG_PATH"]),
    ));

    let agents_source = source("routing.agents", &[]);
    for (index, agent) in config.routing.agents.iter().enumerate() {
        fields.push(field(
            &format!("routing.agents[{index}]"),
            &format!("{} {} ({}) {}", agent.label, agent.display, agent.address, agent.status),
            agents_source.clone(),
        ));
    }

    fields.push(field(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["STOREFRONT_LOGGING_LEVEL", "STOREFRONT_LOG_LEVEL"]),
    ));
    fields.push(field(
        "logging.format",
        &format!("{:?}", config.logging.format).to_ascii_lowercase(),
        source("logging.format", &["STOREFRONT_LOGGING_FORMAT", "STOREFRONT_LOG_FORMAT"]),
    ));

    CommandResult::success_with_data(
        "config",
        "effective config (source precedence: env > file > default)",
        &fields,
    )
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("storefront.toml"), PathBuf::from("config/storefront.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

/// Blank env values are skipped, as the loader skips them.
fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let env_key = env_keys.iter().find(|key| {
        env::var(key).map(|value| !value.trim().is_empty()).unwrap_or(false)
    });
    if let Some(env_key) = env_key {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn field(key: &str, value: &str, source: String) -> ConfigField {
    ConfigField { key: key.to_string(), value: value.to_string(), source }
}
