use crate::core::placeholder::DEFAULT_PLACEHOLDER_BASE_URL;
use crate::core::styles::{Locale, SUPPORTED_LOCALES};
use crate::core::ConfigProvider;
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{validate_one_of, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub generator: GeneratorConfig,
    pub titles: TitlesConfig,
    pub imagery: ImageryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 固定種子可重現輸出；未設定時使用系統亂數
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlesConfig {
    pub locale: String,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().code().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageryConfig {
    pub placeholder_base_url: String,
    /// 先向影像產生器取得房間資料，失敗時退回本地生成
    pub use_image_generator: bool,
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            placeholder_base_url: DEFAULT_PLACEHOLDER_BASE_URL.to_string(),
            use_image_generator: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PlanError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PLAN_SEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlanError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("imagery.placeholder_base_url", &self.imagery.placeholder_base_url)?;
        validate_one_of("titles.locale", &self.titles.locale, &SUPPORTED_LOCALES)?;
        Ok(())
    }

    pub fn pretty_output(&self) -> bool {
        self.output.pretty
    }
}

impl ConfigProvider for TomlConfig {
    fn seed(&self) -> Option<u64> {
        self.generator.seed
    }

    fn locale(&self) -> &str {
        &self.titles.locale
    }

    fn placeholder_base_url(&self) -> &str {
        &self.imagery.placeholder_base_url
    }

    fn use_image_generator(&self) -> bool {
        self.imagery.use_image_generator
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[generator]
seed = 42

[titles]
locale = "ru"

[imagery]
placeholder_base_url = "https://images.example.com"
use_image_generator = true

[output]
pretty = false
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.locale(), "ru");
        assert_eq!(config.placeholder_base_url(), "https://images.example.com");
        assert!(config.use_image_generator());
        assert!(!config.pretty_output());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[generator]\n").unwrap();

        assert_eq!(config.seed(), None);
        assert_eq!(config.locale(), "en");
        assert_eq!(config.placeholder_base_url(), DEFAULT_PLACEHOLDER_BASE_URL);
        assert!(!config.use_image_generator());
        assert!(config.pretty_output());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PLAN_GEN_TEST_BASE_URL", "https://cdn.test.com");

        let toml_content = r#"
[imagery]
placeholder_base_url = "${PLAN_GEN_TEST_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.imagery.placeholder_base_url, "https://cdn.test.com");

        std::env::remove_var("PLAN_GEN_TEST_BASE_URL");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str(
            r#"
[imagery]
placeholder_base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_locale = TomlConfig::from_toml_str(
            r#"
[titles]
locale = "fr"
"#,
        )
        .unwrap();
        assert!(bad_locale.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[generator\nseed = ").unwrap_err();
        assert!(matches!(err, PlanError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[generator]\nseed = 7\n\n[titles]\nlocale = \"en\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.generator.seed, Some(7));

        let missing = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(missing, PlanError::ConfigError { .. }));
    }
}
