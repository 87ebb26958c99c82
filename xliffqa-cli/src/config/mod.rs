//! Project configuration file (`qa.toml`)

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use xliffqa_core::{GlossaryTermRecord, SuppressionRuleRecord, CUSTOM_RULE_CATEGORY};
use xliffqa_engine::EngineConfig;

/// Identity used for rows built from the local config file
pub const LOCAL_SCOPE: &str = "local";

/// Project QA configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QaConfig {
    #[serde(default)]
    pub parser: ParserSection,

    #[serde(default)]
    pub engine: EngineSection,

    /// Approved terminology pairs
    #[serde(default)]
    pub glossary: Vec<GlossaryEntry>,

    #[serde(default)]
    pub suppress: SuppressSection,

    /// Regex rules run against target text
    #[serde(default)]
    pub custom_rules: Vec<CustomRuleEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserSection {
    /// Largest accepted document in megabytes
    pub max_file_size_mb: u64,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            max_file_size_mb: (xliffqa_core::MAX_PARSE_BYTES / (1024 * 1024)) as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    /// Excerpt ceiling in characters
    pub excerpt_limit: usize,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            excerpt_limit: xliffqa_engine::config::defaults::EXCERPT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GlossaryEntry {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SuppressSection {
    /// Category names left out of reports
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomRuleEntry {
    pub pattern: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl QaConfig {
    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: QaConfig = toml::from_str(text)?;
        if config.parser.max_file_size_mb == 0 {
            return Err(CliError::ConfigError("parser.max_file_size_mb must be greater than 0".into()).into());
        }
        Ok(config)
    }

    pub fn max_bytes(&self) -> usize {
        (self.parser.max_file_size_mb as usize).saturating_mul(1024 * 1024)
    }

    pub fn engine_config(&self) -> Result<EngineConfig> {
        EngineConfig::builder()
            .excerpt_limit(self.engine.excerpt_limit)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    pub fn glossary_terms(&self) -> Vec<GlossaryTermRecord> {
        self.glossary
            .iter()
            .enumerate()
            .map(|(i, entry)| GlossaryTermRecord {
                id: format!("glossary-{}", i + 1),
                glossary_id: LOCAL_SCOPE.to_string(),
                source_term: entry.source.clone(),
                target_term: entry.target.clone(),
                case_sensitive: entry.case_sensitive,
            })
            .collect()
    }

    /// Suppressed categories and custom rules as suppression rows
    pub fn suppression_records(&self) -> Vec<SuppressionRuleRecord> {
        let categories = self.suppress.categories.iter().enumerate().map(|(i, category)| {
            SuppressionRuleRecord {
                id: format!("suppress-{}", i + 1),
                project_id: LOCAL_SCOPE.to_string(),
                tenant_id: LOCAL_SCOPE.to_string(),
                pattern: String::new(),
                category: category.clone(),
                reason: String::new(),
                is_active: true,
            }
        });
        let rules = self.custom_rules.iter().enumerate().map(|(i, rule)| SuppressionRuleRecord {
            id: format!("custom-{}", i + 1),
            project_id: LOCAL_SCOPE.to_string(),
            tenant_id: LOCAL_SCOPE.to_string(),
            pattern: rule.pattern.clone(),
            category: CUSTOM_RULE_CATEGORY.to_string(),
            reason: rule.reason.clone(),
            is_active: rule.active,
        });
        categories.chain(rules).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use xliffqa_engine::{split_suppression_rules, RuleCategory};

    const SAMPLE: &str = r#"
[parser]
max_file_size_mb = 2

[engine]
excerpt_limit = 80

[[glossary]]
source = "database"
target = "ฐานข้อมูล"

[suppress]
categories = ["spacing"]

[[custom_rules]]
pattern = "TODO"
reason = "Leftover marker"

[[custom_rules]]
pattern = "FIXME"
active = false
"#;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = QaConfig::from_toml("").unwrap();
        assert_eq!(config.max_bytes(), xliffqa_core::MAX_PARSE_BYTES);
        assert_eq!(config.engine_config().unwrap().excerpt_limit(), 500);
        assert!(config.glossary_terms().is_empty());
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config = QaConfig::from_toml("[parser]\n[engine]\n[suppress]").unwrap();
        assert_eq!(config, QaConfig::default());
        assert_eq!(config.max_bytes(), xliffqa_core::MAX_PARSE_BYTES);

        let config = QaConfig::from_toml("[engine]\n").unwrap();
        assert_eq!(config.engine_config().unwrap().excerpt_limit(), 500);
    }

    #[test]
    fn test_sections_map_to_engine_inputs() {
        let config = QaConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.max_bytes(), 2 * 1024 * 1024);
        assert_eq!(config.engine_config().unwrap().excerpt_limit(), 80);

        let terms = config.glossary_terms();
        assert_eq!(terms.len(), 1);
        assert!(!terms[0].case_sensitive);

        let (categories, rules) = split_suppression_rules(&config.suppression_records());
        assert!(categories.contains(&RuleCategory::Spacing));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pattern, "TODO");
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(QaConfig::from_toml("[parser]\nmax_file_size_mb = 0").is_err());
        let config = QaConfig::from_toml("[engine]\nexcerpt_limit = 0").unwrap();
        assert!(config.engine_config().is_err());
        assert!(QaConfig::from_toml("[unknown]\nkey = 1").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("qa.toml");
        std::fs::write(&path, "[engine]\nexcerpt_limit = \"many\"").unwrap();
        let err = QaConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("qa.toml"));
    }
}
