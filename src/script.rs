//! Replay scripts: a prompt plus the snapshots an engine would produce.
//!
//! ```json
//! {
//!   "prompt": { "kind": "select", "message": "Pick a color",
//!               "options": [{ "value": "red" }, { "value": "blue", "hint": "calm" }] },
//!   "frames": [ { "state": "active", "cursor": 1 }, { "state": "submit", "cursor": 1 } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::prompts::{confirm, select, text};
use crate::render::engine::Scripted;
use crate::render::theme::Palette;
use crate::sink::Sink;
use crate::types::{ConfirmOptions, Outcome, SelectOption, SelectOptions, Snapshot, TextOptions};

/// The prompt a script replays against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PromptSpec {
    Text {
        message: String,
        #[serde(default)]
        placeholder: Option<String>,
    },
    Confirm {
        message: String,
        #[serde(default = "default_active")]
        active: String,
        #[serde(default = "default_inactive")]
        inactive: String,
        #[serde(default = "default_initial")]
        initial_value: bool,
    },
    Select {
        message: String,
        options: Vec<OptionSpec>,
        #[serde(default)]
        initial_value: Option<Value>,
    },
}

fn default_active() -> String {
    "Yes".to_string()
}

fn default_inactive() -> String {
    "No".to_string()
}

fn default_initial() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionSpec {
    pub value: Value,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl OptionSpec {
    /// Strings label themselves without JSON quotes.
    fn into_option(self) -> SelectOption<Value> {
        let label = self.label.unwrap_or_else(|| match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        SelectOption {
            value: self.value,
            label: Some(label),
            hint: self.hint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub prompt: PromptSpec,
    #[serde(default)]
    pub frames: Vec<Snapshot>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Replay the frames into `sink` and return the answer as JSON.
    pub fn replay<S: Sink>(self, sink: S, palette: Palette) -> Result<Outcome<Value>> {
        let mut engine = Scripted::new(sink, palette, self.frames);
        match self.prompt {
            PromptSpec::Text {
                message,
                placeholder,
            } => {
                let mut opts = TextOptions::new(message);
                opts.placeholder = placeholder;
                Ok(text(&mut engine, opts)?.map(Value::String))
            }
            PromptSpec::Confirm {
                message,
                active,
                inactive,
                initial_value,
            } => {
                let opts = ConfirmOptions::new(message)
                    .active(active)
                    .inactive(inactive)
                    .initial_value(initial_value);
                Ok(confirm(&mut engine, opts)?.map(Value::Bool))
            }
            PromptSpec::Select {
                message,
                options,
                initial_value,
            } => {
                let options = options.into_iter().map(OptionSpec::into_option).collect();
                let mut opts = SelectOptions::new(message, options);
                opts.initial_value = initial_value;
                select(&mut engine, opts)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
