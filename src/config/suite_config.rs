use crate::core::{Case, CaseSource};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{
    validate_non_decreasing, validate_non_empty, validate_non_empty_string, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: SuiteInfo,
    #[serde(default)]
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteInfo {
    pub name: String,
    pub description: Option<String>,
}

impl SuiteConfig {
    /// 從 TOML 檔案載入題組
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析題組
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${TARGET})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn description(&self) -> Option<&str> {
        self.suite.description.as_deref()
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("suite.name", &self.suite.name)?;
        validate_non_empty("cases", &self.cases)?;

        for (i, case) in self.cases.iter().enumerate() {
            if let Case::Search { nums, .. } = case {
                validate_non_decreasing(&format!("cases[{}].nums", i), nums)?;
            }
        }

        Ok(())
    }
}

impl CaseSource for SuiteConfig {
    fn suite_name(&self) -> &str {
        &self.suite.name
    }

    fn cases(&self) -> &[Case] {
        &self.cases
    }
}
