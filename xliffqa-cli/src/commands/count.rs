//! Count command implementation

use anyhow::Result;
use clap::Args;
use xliffqa_core::count_words;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Locale that selects the counting strategy (en, th-TH, zh-CN, ...)
    #[arg(short, long, value_name = "LANG", default_value = "en")]
    pub locale: String,

    /// Text to count
    #[arg(value_name = "TEXT")]
    pub text: String,
}

impl CountArgs {
    pub fn execute(&self) -> Result<()> {
        println!("{}", count_words(&self.text, &self.locale));
        Ok(())
    }
}
