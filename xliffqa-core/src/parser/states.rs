//! Confirmation-state tables for both dialects

use crate::model::ConfirmationState;

/// XLIFF 1.2 `state` values collapsed onto internal states
pub const XLIFF_STATE_TABLE: [(&str, ConfirmationState); 8] = [
    ("new", ConfirmationState::Draft),
    ("needs-translation", ConfirmationState::Draft),
    ("needs-adaptation", ConfirmationState::Draft),
    ("needs-l10n", ConfirmationState::Draft),
    ("needs-review-translation", ConfirmationState::Translated),
    ("translated", ConfirmationState::Translated),
    ("signed-off", ConfirmationState::ApprovedTranslation),
    ("final", ConfirmationState::ApprovedSignOff),
];

/// Map a `<target state="">` value
pub fn from_xliff_state(state: &str) -> Option<ConfirmationState> {
    let state = state.trim();
    XLIFF_STATE_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(state))
        .map(|(_, mapped)| *mapped)
}

/// Map an `<sdl:seg conf="">` value; SDL uses the internal names directly
pub fn from_sdl_conf(conf: &str) -> Option<ConfirmationState> {
    conf.trim().parse().ok()
}
