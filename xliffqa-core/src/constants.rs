//! Fixed limits and identifiers shared with the persistence layer
//!
//! These values are part of the contract with stored findings and golden
//! test fixtures. Changing any of them changes observable output.

use crate::model::ConfirmationState;

/// Maximum accepted document size in bytes (15 MB)
pub const MAX_PARSE_BYTES: usize = 15 * 1024 * 1024;

/// Maximum length of a finding's source/target excerpt, in characters
pub const MAX_EXCERPT_CHARS: usize = 500;

/// Row count per finding insert batch used by the storage collaborator
pub const FINDING_INSERT_BATCH_SIZE: usize = 100;

/// Maximum accepted length of a custom rule regex, in characters
pub const MAX_CUSTOM_RULE_PATTERN_LEN: usize = 500;

/// Difference between the Thai solar (Buddhist Era) year and the Gregorian year
pub const BUDDHIST_YEAR_OFFSET: i64 = 543;

/// Namespace URI marking a document as SDLXLIFF
pub const SDL_NAMESPACE_URI: &str = "http://sdl.com/FileTypes/SdlXliff/1.0";

/// Confirmation states excluded from rule checking
pub const QA_SKIP_STATES: &[ConfirmationState] = &[ConfirmationState::ApprovedSignOff];

/// Separator placed between multiple comments on one segment
pub const COMMENT_SEPARATOR: &str = " | ";
