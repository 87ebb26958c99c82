//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "qa.toml")]
    pub output: PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

/// Commented `qa.toml` whose active values are the defaults
pub const CONFIG_TEMPLATE: &str = r#"# xliffqa project configuration

[parser]
# Documents larger than this are rejected before parsing
max_file_size_mb = 15

[engine]
# Source and target excerpts in findings are cut to this many characters
excerpt_limit = 500

# Approved terminology. Each pair is checked wherever the source term occurs.
# [[glossary]]
# source = "database"
# target = "ฐานข้อมูล"
# case_sensitive = false

[suppress]
# Categories left out of reports; `xliffqa list categories` prints them all
categories = []

# Regex rules run against target text. Invalid patterns are skipped with a warning.
# [[custom_rules]]
# pattern = "\\bTODO\\b"
# reason = "Leftover marker in translation"
# active = true
"#;

impl GenerateConfigArgs {
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        std::fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Add glossary pairs and custom rules");
        println!(
            "2. Run checks with it: xliffqa check -i <FILE> -c {}",
            self.output.display()
        );

        Ok(())
    }
}
