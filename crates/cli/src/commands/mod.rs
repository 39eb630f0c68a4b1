pub mod catalog;
pub mod checkout;
pub mod config;
pub mod inquire;
pub mod order;
pub mod roster;

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use storefront_core::config::{AppConfig, LoadOptions};
use storefront_core::{ApplicationError, DomainError, InMemoryCatalog, InterfaceError, Storefront};

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::ok(command, message.into(), None)
    }

    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: &impl Serialize,
    ) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self::ok(command, message.into(), Some(value)),
            Err(error) => Self::failure(command, "serialization", error.to_string(), 1),
        }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Maps a domain rejection to exit code 3 with the user-facing notice
    /// alongside the technical detail.
    pub fn domain_failure(command: &str, error: DomainError) -> Self {
        let error_class = domain_error_class(&error);
        let interface: InterfaceError = ApplicationError::from(error).into_interface(command);
        let detail = match &interface {
            InterfaceError::BadRequest { message, .. }
            | InterfaceError::NotFound { message, .. }
            | InterfaceError::Internal { message, .. } => message.clone(),
        };
        Self::failure(command, error_class, format!("{} ({detail})", interface.user_message()), 3)
    }

    fn ok(command: &str, message: String, data: Option<serde_json::Value>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message,
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }
}

fn domain_error_class(error: &DomainError) -> &'static str {
    match error {
        DomainError::ProductNotFound(_) => "product_not_found",
        DomainError::InvalidChannelIndex { .. } => "invalid_channel_index",
        DomainError::UnknownChannelStatus(_) => "unknown_channel_status",
        DomainError::EmptyRoster => "empty_roster",
        DomainError::EmptyCart => "empty_cart",
        DomainError::MissingCustomerDetails => "missing_customer_details",
        DomainError::InvalidProduct(_) => "invalid_product",
        DomainError::InvalidFilter(_) => "invalid_filter",
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Loads config and builds a fresh session, or the failure to print.
pub(crate) fn open_storefront(command: &str) -> Result<Storefront, CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(command, "config_validation", format!("configuration issue: {error}"), 2)
    })?;

    let catalog = match &config.storefront.catalog_path {
        Some(path) => load_catalog(path).map_err(|error| {
            CommandResult::failure(command, "catalog_load", format!("{error:#}"), 4)
        })?,
        None => InMemoryCatalog::seeded(),
    };

    Storefront::from_config(&config, catalog).map_err(|error| CommandResult::domain_failure(command, error))
}

fn load_catalog(path: &Path) -> anyhow::Result<InMemoryCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read catalog file `{}`", path.display()))?;
    InMemoryCatalog::from_json(&raw)
        .with_context(|| format!("could not load catalog file `{}`", path.display()))
}
