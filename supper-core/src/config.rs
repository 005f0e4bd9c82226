use supper_common::IdeaContract;
use thiserror::Error;
use tracing::debug;

/// Default name of the exported document
pub const EXPORT_FILE_NAME: &str = "SupperIdeas.docx";
/// Title passed to the platform share sheet
pub const SHARE_TITLE: &str = "My Supper Ideas";

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Client configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the identity provider (also hosts the functions endpoint)
    pub auth_url: String,
    /// Public API key sent as `apikey` with every request
    pub anon_key: String,
    /// Base URL of the event functions. Defaults to `{auth_url}/functions/v1`.
    pub functions_url: String,
    /// Application id attached to every generation event
    pub app_id: String,
    /// Response contract for idea requests
    pub contract: IdeaContract,
    /// Where third-party sign-in redirects back to. None = the current page.
    pub redirect_url: Option<String>,
    pub export_file_name: String,
    pub share_title: String,
}

impl ClientConfig {
    /// Load from `SUPPER_*` variables.
    ///
    /// Native builds read the process environment (after loading `.env` if
    /// present); wasm builds only see values baked in at compile time.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = dotenvy::dotenv() {
            tracing::info!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| runtime_var(key).or_else(|| build_time_var(key)))
    }

    /// Build from any key lookup. Used by `load` and by tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let auth_url = require("SUPPER_AUTH_URL")?
            .trim_end_matches('/')
            .to_string();
        let anon_key = require("SUPPER_ANON_KEY")?;
        let app_id = require("SUPPER_APP_ID")?;

        let functions_url = get("SUPPER_FUNCTIONS_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("{auth_url}/functions/v1"));

        let contract = match get("SUPPER_IDEA_CONTRACT") {
            None => IdeaContract::default(),
            Some(value) => parse_contract(&value).ok_or(ConfigError::Invalid {
                key: "SUPPER_IDEA_CONTRACT",
                value,
            })?,
        };

        let config = Self {
            auth_url,
            anon_key,
            functions_url,
            app_id,
            contract,
            redirect_url: get("SUPPER_REDIRECT_URL"),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            share_title: SHARE_TITLE.to_string(),
        };
        debug!(
            "Client config: auth={} functions={} contract={:?}",
            config.auth_url, config.functions_url, config.contract
        );
        Ok(config)
    }
}

fn parse_contract(value: &str) -> Option<IdeaContract> {
    match value.trim().to_ascii_lowercase().as_str() {
        "markdown" | "text" => Some(IdeaContract::Markdown),
        "meal-list" | "meals" | "json" => Some(IdeaContract::MealList),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_key: &str) -> Option<String> {
    None
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "SUPPER_AUTH_URL" => option_env!("SUPPER_AUTH_URL"),
        "SUPPER_ANON_KEY" => option_env!("SUPPER_ANON_KEY"),
        "SUPPER_APP_ID" => option_env!("SUPPER_APP_ID"),
        "SUPPER_FUNCTIONS_URL" => option_env!("SUPPER_FUNCTIONS_URL"),
        "SUPPER_IDEA_CONTRACT" => option_env!("SUPPER_IDEA_CONTRACT"),
        "SUPPER_REDIRECT_URL" => option_env!("SUPPER_REDIRECT_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
