use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checkout::link::WHATSAPP_BASE;
use crate::domain::channel::{default_roster, ContactChannel};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storefront: StorefrontConfig,
    pub routing: RoutingConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    pub business_name: String,
    pub currency_label: String,
    pub deep_link_base: String,
    /// JSON product listing that replaces the built-in catalog when set.
    pub catalog_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct RoutingConfig {
    pub agents: Vec<ContactChannel>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub business_name: Option<String>,
    pub currency_label: Option<String>,
    pub deep_link_base: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storefront: StorefrontConfig {
                business_name: "AGS Limited Company".to_string(),
                currency_label: "Ksh".to_string(),
                deep_link_base: WHATSAPP_BASE.to_string(),
                catalog_path: None,
            },
            routing: RoutingConfig { agents: default_roster() },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from("storefront.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(storefront) = patch.storefront {
            if let Some(business_name) = storefront.business_name {
                self.storefront.business_name = business_name;
            }
            if let Some(currency_label) = storefront.currency_label {
                self.storefront.currency_label = currency_label;
            }
            if let Some(deep_link_base) = storefront.deep_link_base {
                self.storefront.deep_link_base = deep_link_base;
            }
            if let Some(catalog_path) = storefront.catalog_path {
                self.storefront.catalog_path = Some(catalog_path);
            }
        }

        if let Some(routing) = patch.routing {
            if let Some(agents) = routing.agents {
                self.routing.agents = agents;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("STOREFRONT_BUSINESS_NAME") {
            self.storefront.business_name = value;
        }
        if let Some(value) = read_env("STOREFRONT_CURRENCY_LABEL") {
            self.storefront.currency_label = value;
        }
        if let Some(value) = read_env("STOREFRONT_DEEP_LINK_BASE") {
            self.storefront.deep_link_base = value;
        }
        if let Some(value) = read_env("STOREFRONT_CATALOG_PATH") {
            self.storefront.catalog_path = Some(PathBuf::from(value));
        }

        let log_level =
            read_env("STOREFRONT_LOGGING_LEVEL").or_else(|| read_env("STOREFRONT_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("STOREFRONT_LOGGING_FORMAT").or_else(|| read_env("STOREFRONT_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "STOREFRONT_LOGGING_FORMAT".to_string(),
                value,
            })?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(business_name) = overrides.business_name {
            self.storefront.business_name = business_name;
        }
        if let Some(currency_label) = overrides.currency_label {
            self.storefront.currency_label = currency_label;
        }
        if let Some(deep_link_base) = overrides.deep_link_base {
            self.storefront.deep_link_base = deep_link_base;
        }
        if let Some(catalog_path) = overrides.catalog_path {
            self.storefront.catalog_path = Some(catalog_path);
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_storefront(&self.storefront)?;
        validate_routing(&self.routing)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("storefront.toml"), PathBuf::from("config/storefront.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_storefront(storefront: &StorefrontConfig) -> Result<(), ConfigError> {
    if storefront.business_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "storefront.business_name must not be empty".to_string(),
        ));
    }

    if storefront.currency_label.trim().is_empty() {
        return Err(ConfigError::Validation(
            "storefront.currency_label must not be empty".to_string(),
        ));
    }

    let base = storefront.deep_link_base.trim();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(ConfigError::Validation(
            "storefront.deep_link_base must start with http:// or https://".to_string(),
        ));
    }

    Ok(())
}

fn validate_routing(routing: &RoutingConfig) -> Result<(), ConfigError> {
    if routing.agents.is_empty() {
        return Err(ConfigError::Validation(
            "routing.agents must list at least one contact channel".to_string(),
        ));
    }

    for (index, agent) in routing.agents.iter().enumerate() {
        let address = agent.address.trim();
        if address.is_empty() || !address.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(ConfigError::Validation(format!(
                "routing.agents[{index}].address must contain digits only (international form without `+`), got `{}`",
                agent.address
            )));
        }
        if agent.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "routing.agents[{index}].label must not be empty"
            )));
        }
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    storefront: Option<StorefrontPatch>,
    routing: Option<RoutingPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct StorefrontPatch {
    business_name: Option<String>,
    currency_label: Option<String>,
    deep_link_base: Option<String>,
    catalog_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RoutingPatch {
    agents: Option<Vec<ContactChannel>>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io;
    use std::sync::{Mutex, OnceLock};

    use tempfile::TempDir;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
    use crate::domain::channel::ChannelStatus;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    fn ensure(condition: bool, message: &'static str) -> Result<(), String> {
        if condition {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }

    fn write_config(dir: &TempDir, body: &str) -> Result<std::path::PathBuf, String> {
        let path = dir.path().join("storefront.toml");
        fs::write(&path, body).map_err(|err| err.to_string())?;
        Ok(path)
    }

    #[test]
    fn defaults_carry_the_shipped_roster() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let config = AppConfig::load(LoadOptions::default())
            .map_err(|err| format!("config load failed: {err}"))?;

        ensure(config.routing.agents.len() == 4, "default roster should have four channels")?;
        ensure(
            config.routing.agents[2].status == ChannelStatus::Away,
            "customer service starts away",
        )?;
        ensure(config.storefront.currency_label == "Ksh", "default currency label is Ksh")?;
        ensure(
            matches!(config.logging.format, LogFormat::Compact),
            "default logging format should be compact",
        )
    }

    #[test]
    fn file_roster_replaces_default_and_supports_interpolation() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("TEST_STOREFRONT_DESK_NUMBER", "254700111222");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = write_config(
                &dir,
                r#"
[storefront]
business_name = "Green Grocers"

[[routing.agents]]
address = "${TEST_STOREFRONT_DESK_NUMBER}"
display = "0700 111 222"
label = "Front Desk"
status = "away"

[[routing.agents]]
address = "254700333444"
display = "0700 333 444"
label = "Night Desk"
"#,
            )?;

            let config =
                AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
                    .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.storefront.business_name == "Green Grocers", "file business name wins")?;
            ensure(config.routing.agents.len() == 2, "file roster replaces default roster")?;
            ensure(
                config.routing.agents[0].address == "254700111222",
                "address should be interpolated from environment",
            )?;
            ensure(
                config.routing.agents[0].status == ChannelStatus::Away,
                "explicit status should be kept",
            )?;
            ensure(
                config.routing.agents[1].status == ChannelStatus::Available,
                "missing status defaults to online",
            )
        })();

        clear_vars(&["TEST_STOREFRONT_DESK_NUMBER"]);
        result
    }

    #[test]
    fn precedence_defaults_file_env_overrides() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("STOREFRONT_CURRENCY_LABEL", "KES");
        env::set_var("STOREFRONT_LOG_LEVEL", "warn");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = write_config(
                &dir,
                r#"
[storefront]
currency_label = "USD"
business_name = "From File"

[logging]
level = "error"
format = "json"
"#,
            )?;

            let config = AppConfig::load(LoadOptions {
                config_path: Some(path),
                overrides: ConfigOverrides {
                    business_name: Some("From Override".to_string()),
                    ..ConfigOverrides::default()
                },
                ..LoadOptions::default()
            })
            .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.storefront.business_name == "From Override", "override should win")?;
            ensure(config.storefront.currency_label == "KES", "env should win over file")?;
            ensure(config.logging.level == "warn", "env log level alias should win over file")?;
            ensure(matches!(config.logging.format, LogFormat::Json), "file format should apply")
        })();

        clear_vars(&["STOREFRONT_CURRENCY_LABEL", "STOREFRONT_LOG_LEVEL"]);
        result
    }

    #[test]
    fn empty_roster_fails_validation() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = write_config(&dir, "[routing]\nagents = []\n")?;

        let error =
            match AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
            {
                Ok(_) => return Err("expected validation failure for empty roster".to_string()),
                Err(error) => error,
            };
        ensure(
            matches!(error, ConfigError::Validation(ref message) if message.contains("routing.agents")),
            "validation failure should mention routing.agents",
        )
    }

    #[test]
    fn non_numeric_address_is_rejected_with_its_index() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = write_config(
            &dir,
            r#"
[[routing.agents]]
address = "+254 700 000 000"
display = "0700 000 000"
label = "Desk"
"#,
        )?;

        let error =
            match AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
            {
                Ok(_) => return Err("expected validation failure for address".to_string()),
                Err(error) => error,
            };
        ensure(
            matches!(error, ConfigError::Validation(ref message) if message.contains("routing.agents[0].address")),
            "validation failure should point at the offending agent",
        )
    }

    #[test]
    fn unknown_status_in_file_is_a_parse_error() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = write_config(
            &dir,
            r#"
[[routing.agents]]
address = "254700000000"
display = "0700 000 000"
label = "Desk"
status = "offline"
"#,
        )?;

        let result =
            AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() });
        ensure(matches!(result, Err(ConfigError::ParseFile { .. })), "offline is not a status")
    }

    #[test]
    fn invalid_log_format_env_is_reported() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("STOREFRONT_LOGGING_FORMAT", "xml");
        let result = AppConfig::load(LoadOptions::default());
        clear_vars(&["STOREFRONT_LOGGING_FORMAT"]);

        ensure(
            matches!(result, Err(ConfigError::InvalidEnvOverride { ref key, .. }) if key == "STOREFRONT_LOGGING_FORMAT"),
            "bad format should be reported as an env override error",
        )
    }

    #[test]
    fn required_file_must_exist() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let result = AppConfig::load(LoadOptions {
            config_path: Some(dir.path().join("missing.toml")),
            require_file: true,
            ..LoadOptions::default()
        });

        ensure(
            matches!(result, Err(ConfigError::MissingConfigFile(_))),
            "missing required file should be reported",
        )
    }
}
