//! Glyphs, colors and the state symbol.
//!
//! Color semantics:
//! - Gray: finished prompts, bars of static lines
//! - Cyan: the prompt currently taking input
//! - Yellow: validation error
//! - Green: submitted, highlighted choice, outro message
//! - Red: cancelled
//! - Magenta: running spinner
//!
//! A [`Palette`] decides whether any of this reaches the terminal. When it is
//! disabled every helper returns the text untouched.

use std::io::IsTerminal;

use crossterm::style::{StyledContent, Stylize};

use crate::types::{ColorChoice, PromptState};

// ============================================================================
// GLYPHS
// ============================================================================

/// Opens an intro line.
pub const BAR_START: &str = "┌";

/// Continuation bar down the left edge.
pub const BAR: &str = "│";

/// Closes a prompt or the whole session.
pub const BAR_END: &str = "└";

/// Highlighted / chosen option.
pub const SQUARE_FILLED: &str = "◼";

/// Option that is not highlighted.
pub const SQUARE_HOLLOW: &str = "◻";

/// Spinner marker.
pub const DIAMOND: &str = "◆";

pub const GLYPH_ACTIVE: &str = "●";
pub const GLYPH_CANCEL: &str = "■";
pub const GLYPH_ERROR: &str = "▲";
pub const GLYPH_SUBMIT: &str = "✔";

// ============================================================================
// PALETTE
// ============================================================================

/// Styling switch threaded through every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Emit ANSI styling.
    pub const fn ansi() -> Self {
        Palette { enabled: true }
    }

    /// Emit bare text.
    pub const fn plain() -> Self {
        Palette { enabled: false }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Resolve `ColorChoice::Auto` against the real process environment
    /// and stdout.
    pub fn detect(choice: ColorChoice) -> Self {
        Self::resolve(choice, std::io::stdout().is_terminal(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Resolve a color choice.
    ///
    /// `Auto` follows the usual conventions: `NO_COLOR` wins, then
    /// `FORCE_COLOR`, Windows consoles, a terminal whose `TERM` is not
    /// `dumb`, or a CI environment turn styling on.
    pub fn resolve(
        choice: ColorChoice,
        is_tty: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if env("NO_COLOR").is_some() {
                    false
                } else {
                    let dumb = env("TERM").as_deref() == Some("dumb");
                    env("FORCE_COLOR").is_some()
                        || cfg!(windows)
                        || (is_tty && !dumb)
                        || env("CI").is_some()
                }
            }
        };
        Palette { enabled }
    }

    fn paint<'a>(self, text: &'a str, style: impl FnOnce(&'a str) -> StyledContent<&'a str>) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn gray(self, text: &str) -> String {
        self.paint(text, |t| t.dark_grey())
    }

    pub fn cyan(self, text: &str) -> String {
        self.paint(text, |t| t.dark_cyan())
    }

    pub fn red(self, text: &str) -> String {
        self.paint(text, |t| t.dark_red())
    }

    pub fn yellow(self, text: &str) -> String {
        self.paint(text, |t| t.dark_yellow())
    }

    pub fn green(self, text: &str) -> String {
        self.paint(text, |t| t.dark_green())
    }

    pub fn magenta(self, text: &str) -> String {
        self.paint(text, |t| t.dark_magenta())
    }

    pub fn dim(self, text: &str) -> String {
        self.paint(text, |t| t.dim())
    }

    pub fn inverse(self, text: &str) -> String {
        self.paint(text, |t| t.reverse())
    }

    /// Dimmed and struck through, for cancelled values.
    pub fn dim_struck(self, text: &str) -> String {
        self.paint(text, |t| t.dim().crossed_out())
    }

    /// An inverted but invisible `_`: a block cursor with nothing behind it.
    pub fn block_cursor(self) -> String {
        self.paint("_", |t| t.reverse().hidden())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::detect(ColorChoice::Auto)
    }
}

// ============================================================================
// SYMBOL
// ============================================================================

/// Colored glyph announcing a prompt's state.
pub fn symbol(palette: Palette, state: PromptState) -> String {
    match state {
        PromptState::Initial | PromptState::Active => palette.cyan(GLYPH_ACTIVE),
        PromptState::Cancel => palette.red(GLYPH_CANCEL),
        PromptState::Error => palette.yellow(GLYPH_ERROR),
        PromptState::Submit => palette.green(GLYPH_SUBMIT),
    }
}

// ============================================================================
// TESTS
// ============================================================================
