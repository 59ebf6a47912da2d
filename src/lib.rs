//! clack-prompts: styled terminal frames for interactive prompts.
//!
//! Renders text, confirm and select prompts for each state of an external
//! prompt engine, plus a spinner and intro/outro/cancel lines.

pub mod block;
pub mod error;
pub mod logging;
pub mod prompts;
pub mod render;
pub mod script;
pub mod sink;
pub mod spinner;
pub mod types;

pub use error::{Error, Result};
pub use prompts::{cancel, confirm, intro, outro, select, spinner, text};
pub use render::engine::{Answer, Engine, Scripted};
pub use render::theme::Palette;
pub use render::Prompt;
pub use types::{
    ConfirmOptions, Outcome, PromptState, SelectOption, SelectOptions, Snapshot, TextOptions,
    is_cancel,
};
