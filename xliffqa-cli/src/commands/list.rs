//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use xliffqa_core::parser::states::XLIFF_STATE_TABLE;
use xliffqa_core::{ConfirmationState, InlineTagType};
use xliffqa_engine::RuleCategory;

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// Rule categories findings are reported under
    Categories,

    /// Confirmation states and the XLIFF state values mapped onto them
    States,

    /// Inline tag types the extractor records
    Tags,
}

pub fn execute(subcommand: ListCommands) -> Result<()> {
    for line in lines(subcommand) {
        println!("{line}");
    }
    Ok(())
}

fn lines(subcommand: ListCommands) -> Vec<String> {
    match subcommand {
        ListCommands::Categories => RuleCategory::all()
            .map(|category| {
                if category.is_reserved() {
                    format!("{category} (reserved)")
                } else {
                    category.to_string()
                }
            })
            .collect(),
        ListCommands::States => ConfirmationState::ALL
            .iter()
            .map(|state| {
                let xliff: Vec<&str> = XLIFF_STATE_TABLE
                    .iter()
                    .filter(|(_, mapped)| mapped == state)
                    .map(|(raw, _)| *raw)
                    .collect();
                if xliff.is_empty() {
                    state.to_string()
                } else {
                    format!("{:<20} <- {}", state.as_str(), xliff.join(", "))
                }
            })
            .collect(),
        ListCommands::Tags => InlineTagType::ALL.iter().map(|tag| format!("<{tag}>")).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_mark_reserved() {
        let lines = lines(ListCommands::Categories);
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "completeness");
        assert!(lines.contains(&"spelling (reserved)".to_string()));
        assert!(lines.contains(&"custom_rule".to_string()));
    }

    #[test]
    fn test_states_show_xliff_values() {
        let lines = lines(ListCommands::States);
        assert_eq!(lines.len(), ConfirmationState::ALL.len());
        let signed_off = lines
            .iter()
            .find(|l| l.starts_with("ApprovedSignOff"))
            .unwrap();
        assert!(signed_off.contains("final"));
    }

    #[test]
    fn test_tags() {
        let lines = lines(ListCommands::Tags);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "<g>");
    }
}
