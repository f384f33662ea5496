use crate::adapters::decider::{FixedDecider, PromptDecider, RandomDecider};
use crate::core::SugarDecider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub const MAX_CUPS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SugarPolicy {
    /// Flip a coin for every cup
    Random,
    /// Always add sugar
    Always,
    /// Never add sugar
    Never,
    /// Ask on the terminal for every cup
    Ask,
}

impl SugarPolicy {
    pub fn decider(self) -> Box<dyn SugarDecider> {
        match self {
            SugarPolicy::Random => Box::new(RandomDecider),
            SugarPolicy::Always => Box::new(FixedDecider(true)),
            SugarPolicy::Never => Box::new(FixedDecider(false)),
            SugarPolicy::Ask => Box::new(PromptDecider::stdin()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Notifications go through the logger
    Log,
    /// Plain lines on stdout
    Console,
    /// One JSON receipt per cup on stdout
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "beverage-template")]
#[command(about = "Brews coffee through a fixed recipe with an optional sugar step")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "random")]
    pub sugar: SugarPolicy,

    #[arg(long, default_value = "1")]
    pub cups: usize,

    #[arg(long, value_enum, default_value = "console")]
    pub output: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("cups", self.cups, 1, MAX_CUPS)
    }
}
