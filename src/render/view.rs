//! Pure rendering: map a prompt snapshot to the text frame that represents it.
//!
//! Every function here is `(palette, options, snapshot) -> String` with no
//! hidden state. Writing the frame, and clearing the previous one, is the
//! engine's job.

use crate::types::{Choice, ConfirmOptions, PromptState, Snapshot, TextOptions};

use super::theme::{
    BAR, BAR_END, BAR_START, DIAMOND, Palette, SQUARE_FILLED, SQUARE_HOLLOW, symbol,
};
use super::SelectView;

// ============================================================================
// SHARED PIECES
// ============================================================================

/// Gray bar line followed by the state symbol and the message.
fn title(palette: Palette, state: PromptState, message: &str) -> String {
    format!(
        "{}\n{}  {}\n",
        palette.gray(BAR),
        symbol(palette, state),
        message
    )
}

/// First character inverted, the rest dimmed.
fn placeholder(palette: Palette, text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut head = [0u8; 4];
            format!(
                "{}{}",
                palette.inverse(first.encode_utf8(&mut head)),
                palette.dim(chars.as_str())
            )
        }
        None => palette.block_cursor(),
    }
}

// ============================================================================
// TEXT
// ============================================================================

pub fn text_frame(palette: Palette, opts: &TextOptions, snap: &Snapshot) -> String {
    let title = title(palette, snap.state, &opts.message);
    let value = if snap.value.is_empty() {
        placeholder(palette, opts.placeholder.as_deref().unwrap_or_default())
    } else {
        match &snap.value_with_cursor {
            Some(with_cursor) => with_cursor.clone(),
            None => format!("{}{}", snap.value, palette.block_cursor()),
        }
    };

    match snap.state {
        PromptState::Error => format!(
            "{}\n{}  {}\n{}  {}\n",
            title.trim(),
            palette.yellow(BAR),
            value,
            palette.yellow(BAR_END),
            palette.yellow(&snap.error)
        ),
        PromptState::Submit => {
            format!("{title}{}  {}", palette.gray(BAR), palette.dim(&snap.value))
        }
        PromptState::Cancel => {
            let mut frame = format!(
                "{title}{}  {}",
                palette.gray(BAR),
                palette.dim_struck(&snap.value)
            );
            if !snap.value.trim().is_empty() {
                frame.push('\n');
                frame.push_str(&palette.gray(BAR));
            }
            frame
        }
        PromptState::Initial | PromptState::Active => format!(
            "{title}{}  {value}\n{}\n",
            palette.cyan(BAR),
            palette.cyan(BAR_END)
        ),
    }
}

// ============================================================================
// CONFIRM
// ============================================================================

pub fn confirm_frame(palette: Palette, opts: &ConfirmOptions, snap: &Snapshot) -> String {
    let title = title(palette, snap.state, &opts.message);
    let chosen = if snap.confirmed {
        &opts.active
    } else {
        &opts.inactive
    };

    match snap.state {
        PromptState::Submit => format!("{title}{}  {}", palette.gray(BAR), palette.dim(chosen)),
        PromptState::Cancel => format!(
            "{title}{}  {}\n{}",
            palette.gray(BAR),
            palette.dim_struck(chosen),
            palette.gray(BAR)
        ),
        _ => format!(
            "{title}{}  {} {} {}\n{}\n",
            palette.cyan(BAR),
            toggle(palette, &opts.active, snap.confirmed),
            palette.dim("/"),
            toggle(palette, &opts.inactive, !snap.confirmed),
            palette.cyan(BAR_END)
        ),
    }
}

/// One side of the yes/no pair.
fn toggle(palette: Palette, label: &str, on: bool) -> String {
    if on {
        format!("{} {}", palette.green(SQUARE_FILLED), label)
    } else {
        format!("{} {}", palette.dim(SQUARE_HOLLOW), palette.dim(label))
    }
}

// ============================================================================
// SELECT
// ============================================================================

/// How a single option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLook {
    /// Listed but not under the cursor.
    Inactive,
    /// Under the cursor.
    Active,
    /// Submitted.
    Selected,
    /// The prompt was cancelled on this option.
    Cancelled,
}

pub fn option_line(palette: Palette, choice: &Choice, look: OptionLook) -> String {
    match look {
        OptionLook::Active => match &choice.hint {
            Some(hint) => format!(
                "{} {} {}",
                palette.green(SQUARE_FILLED),
                choice.label,
                palette.dim(&format!("({hint})"))
            ),
            None => format!("{} {}", palette.green(SQUARE_FILLED), choice.label),
        },
        OptionLook::Selected => palette.dim(&choice.label),
        OptionLook::Cancelled => palette.dim_struck(&choice.label),
        OptionLook::Inactive => format!(
            "{} {}",
            palette.dim(SQUARE_HOLLOW),
            palette.dim(&choice.label)
        ),
    }
}

pub fn select_frame(palette: Palette, view: &SelectView, snap: &Snapshot) -> String {
    let title = title(palette, snap.state, &view.message);
    let at_cursor = |look| {
        view.choices
            .get(snap.cursor)
            .map(|choice| option_line(palette, choice, look))
            .unwrap_or_default()
    };

    match snap.state {
        PromptState::Submit => format!(
            "{title}{}  {}",
            palette.gray(BAR),
            at_cursor(OptionLook::Selected)
        ),
        PromptState::Cancel => format!(
            "{title}{}  {}\n{}",
            palette.gray(BAR),
            at_cursor(OptionLook::Cancelled),
            palette.gray(BAR)
        ),
        _ => {
            let separator = format!("\n{}  ", palette.cyan(BAR));
            let lines: Vec<String> = view
                .choices
                .iter()
                .enumerate()
                .map(|(i, choice)| {
                    let look = if i == snap.cursor {
                        OptionLook::Active
                    } else {
                        OptionLook::Inactive
                    };
                    option_line(palette, choice, look)
                })
                .collect();
            format!(
                "{title}{}  {}\n{}\n",
                palette.cyan(BAR),
                lines.join(&separator),
                palette.cyan(BAR_END)
            )
        }
    }
}

// ============================================================================
// STATIC LINES
// ============================================================================

pub fn intro_line(palette: Palette, title: &str) -> String {
    format!("{}  {}\n", palette.gray(BAR_START), title)
}

pub fn outro_line(palette: Palette, message: &str) -> String {
    format!(
        "{}\n{}  {}\n\n",
        palette.gray(BAR),
        palette.gray(BAR_END),
        palette.green(message)
    )
}

pub fn cancel_line(palette: Palette, message: &str) -> String {
    format!("{}  {}\n\n", palette.gray(BAR_END), palette.red(message))
}

// ============================================================================
// SPINNER
// ============================================================================

/// Running spinner frame with `dots` trailing periods.
pub fn spinner_frame(palette: Palette, message: &str, dots: usize) -> String {
    format!(
        "{}\n{}  {}{}\n",
        palette.gray(BAR),
        palette.magenta(DIAMOND),
        message,
        ".".repeat(dots)
    )
}

/// Frame left behind once the spinner stops.
pub fn spinner_done_frame(palette: Palette, message: &str) -> String {
    format!(
        "{}\n{}  {}\n",
        palette.gray(BAR),
        palette.gray(DIAMOND),
        message
    )
}

// ============================================================================
// TESTS
// ============================================================================
