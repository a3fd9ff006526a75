// src/cli/text.rs — `khelpers text ...`

use super::TextAction;
use crate::infra::config::Config;
use crate::text::{ellipsize, truncate_words};

pub fn run_text(action: &TextAction, config: &Config) -> String {
    match action {
        TextAction::Ellipsize {
            text,
            max,
            position,
            ellipsis,
        } => {
            let ellipsis = ellipsis.as_deref().unwrap_or(&config.text.ellipsis);
            ellipsize(text, *max, *position, ellipsis)
        }
        TextAction::Truncate {
            text,
            max,
            ellipsis,
        } => {
            let ellipsis = ellipsis.as_deref().unwrap_or(&config.text.ellipsis);
            truncate_words(text, *max, ellipsis)
        }
    }
}
