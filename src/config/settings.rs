use crate::utils::error::{ImportError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://goto.adamnant.com";
pub const DEFAULT_TOKEN: &str = "5c26f0a4e3f4ee6ef91bdd7e31561c56a5db5f492724abc9";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_TOKEN_PREVIEW_LEN: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_token_preview_len")]
    pub token_preview_len: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_token_preview_len() -> usize {
    DEFAULT_TOKEN_PREVIEW_LEN
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: default_token(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            token_preview_len: default_token_preview_len(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Settings {
    /// 載入設定：檔案存在就讀取，不存在就用預設值；最後套用環境變數覆蓋
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut settings = if path.as_ref().exists() {
            let content = std::fs::read_to_string(&path).map_err(ImportError::IoError)?;
            Self::from_toml_str(&content)?
        } else {
            Self::default()
        };
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ImportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// LINKS_API_URL / LINKS_API_TOKEN 優先於檔案與預設值
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("LINKS_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(token) = std::env::var("LINKS_API_TOKEN") {
            self.api.token = token;
        }
        // 結尾斜線會讓拼出來的路徑出現 //
        while self.api.base_url.ends_with('/') {
            self.api.base_url.pop();
        }
    }

    /// Token prefix shown in the usage text, truncated at a char boundary.
    pub fn token_preview(&self) -> String {
        self.api
            .token
            .chars()
            .take(self.display.token_preview_len)
            .collect()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_non_empty_string("api.token", &self.api.token)?;
        validation::validate_range("api.timeout_seconds", self.api.timeout_seconds, 1, 600)?;
        validation::validate_range(
            "display.token_preview_len",
            self.display.token_preview_len,
            1,
            usize::MAX,
        )?;
        Ok(())
    }
}
