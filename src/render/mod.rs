//! Frame rendering for prompts.
//!
//! Organized along the same pure/effect boundary as the rest of the crate:
//! - `theme`: glyphs, colors, the state symbol
//! - `view`: pure `(snapshot) -> String` renderers
//! - `engine`: the engine seam that decides when to render and writes frames

pub mod engine;
pub mod theme;
pub mod view;

use std::fmt::Display;

use crate::types::{Choice, ConfirmOptions, SelectOption, Snapshot, TextOptions};

use theme::Palette;

/// Display data of a select prompt, decoupled from the option values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub message: String,
    pub choices: Vec<Choice>,
    /// Cursor position the engine starts from.
    pub initial: usize,
}

impl SelectView {
    pub fn from_options<V: Display>(
        message: impl Into<String>,
        options: &[SelectOption<V>],
        initial: usize,
    ) -> Self {
        SelectView {
            message: message.into(),
            choices: options.iter().map(SelectOption::choice).collect(),
            initial,
        }
    }
}

/// The closed set of prompt kinds, each with its own render strategy.
#[derive(Debug)]
pub enum Prompt {
    Text(TextOptions),
    Confirm(ConfirmOptions),
    Select(SelectView),
}

impl Prompt {
    /// Render the frame for `snap`.
    pub fn render(&self, palette: Palette, snap: &Snapshot) -> String {
        match self {
            Prompt::Text(opts) => view::text_frame(palette, opts, snap),
            Prompt::Confirm(opts) => view::confirm_frame(palette, opts, snap),
            Prompt::Select(select) => view::select_frame(palette, select, snap),
        }
    }

    /// Run the caller's validator. Only text prompts validate.
    pub fn validate(&self, value: &str) -> Option<String> {
        match self {
            Prompt::Text(opts) => opts.check(value),
            Prompt::Confirm(_) | Prompt::Select(_) => None,
        }
    }

    /// Snapshot the engine starts from, seeded with the prompt's initial value.
    pub fn initial_snapshot(&self) -> Snapshot {
        let snap = Snapshot::default();
        match self {
            Prompt::Text(_) => snap,
            Prompt::Confirm(opts) => snap.with_confirmed(opts.initial_value),
            Prompt::Select(select) => snap.with_cursor(select.initial),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Prompt::Text(_) => "text",
            Prompt::Confirm(_) => "confirm",
            Prompt::Select(_) => "select",
        }
    }
}
