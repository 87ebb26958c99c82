//! Engine configuration

use crate::error::{EngineError, Result};
use xliffqa_core::ConfirmationState;

/// Default configuration constants
pub mod defaults {
    use xliffqa_core::{
        ConfirmationState, MAX_CUSTOM_RULE_PATTERN_LEN, MAX_EXCERPT_CHARS, QA_SKIP_STATES,
    };

    /// Excerpt ceiling in characters
    pub const EXCERPT_LIMIT: usize = MAX_EXCERPT_CHARS;

    /// Longest custom-rule pattern that is compiled
    pub const MAX_CUSTOM_PATTERN_LEN: usize = MAX_CUSTOM_RULE_PATTERN_LEN;

    /// States excluded from QA
    pub fn skip_states() -> Vec<ConfirmationState> {
        QA_SKIP_STATES.to_vec()
    }
}

/// Rule engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub(crate) excerpt_limit: usize,
    pub(crate) max_custom_pattern_len: usize,
    pub(crate) skip_states: Vec<ConfirmationState>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            excerpt_limit: defaults::EXCERPT_LIMIT,
            max_custom_pattern_len: defaults::MAX_CUSTOM_PATTERN_LEN,
            skip_states: defaults::skip_states(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    pub fn excerpt_limit(&self) -> usize {
        self.excerpt_limit
    }

    pub fn max_custom_pattern_len(&self) -> usize {
        self.max_custom_pattern_len
    }

    pub fn skip_states(&self) -> &[ConfirmationState] {
        &self.skip_states
    }

    /// Whether segments in `state` are left out of a run
    pub fn skips(&self, state: Option<ConfirmationState>) -> bool {
        state.is_some_and(|s| self.skip_states.contains(&s))
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.excerpt_limit == 0 {
            return Err(EngineError::Configuration(
                "excerpt_limit must be greater than 0".into(),
            ));
        }

        if self.max_custom_pattern_len == 0 {
            return Err(EngineError::Configuration(
                "max_custom_pattern_len must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for engine configuration
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    excerpt_limit: Option<usize>,
    max_custom_pattern_len: Option<usize>,
    skip_states: Option<Vec<ConfirmationState>>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the excerpt ceiling in characters
    pub fn excerpt_limit(mut self, chars: usize) -> Self {
        self.excerpt_limit = Some(chars);
        self
    }

    /// Set the longest custom-rule pattern accepted
    pub fn max_custom_pattern_len(mut self, chars: usize) -> Self {
        self.max_custom_pattern_len = Some(chars);
        self
    }

    /// Replace the set of states excluded from QA
    pub fn skip_states(mut self, states: impl IntoIterator<Item = ConfirmationState>) -> Self {
        self.skip_states = Some(states.into_iter().collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let mut config = EngineConfig::default();

        if let Some(limit) = self.excerpt_limit {
            config.excerpt_limit = limit;
        }

        if let Some(len) = self.max_custom_pattern_len {
            config.max_custom_pattern_len = len;
        }

        if let Some(states) = self.skip_states {
            config.skip_states = states;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.excerpt_limit(), 500);
        assert_eq!(config.max_custom_pattern_len(), 500);
        assert_eq!(config.skip_states(), &[ConfirmationState::ApprovedSignOff]);
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::builder()
            .excerpt_limit(120)
            .skip_states([ConfirmationState::ApprovedTranslation])
            .build()
            .unwrap();
        assert_eq!(config.excerpt_limit(), 120);
        assert!(config.skips(Some(ConfirmationState::ApprovedTranslation)));
        assert!(!config.skips(Some(ConfirmationState::ApprovedSignOff)));
        assert!(!config.skips(None));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let err = EngineConfig::builder().excerpt_limit(0).build().unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
        assert!(EngineConfig::builder()
            .max_custom_pattern_len(0)
            .build()
            .is_err());
    }
}
