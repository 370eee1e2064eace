//! CLI enum types for the color-effect option.

use clap::ValueEnum;

use crate::frame::ColorEffect;

/// Color-effect mode requested at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Effect {
    #[default]
    Color,
    Mono,
}

impl From<Effect> for ColorEffect {
    fn from(e: Effect) -> Self {
        match e {
            Effect::Color => ColorEffect::Color,
            Effect::Mono => ColorEffect::Mono,
        }
    }
}

impl Effect {
    /// Parse the config-file spelling of the effect, if recognized.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "color" => Some(Effect::Color),
            "mono" => Some(Effect::Mono),
            _ => None,
        }
    }
}
