//! Public prompt surface.
//!
//! `text`, `confirm` and `select` build the matching render strategy and
//! hand it to an [`Engine`]; `intro`, `outro` and `cancel` are one-shot
//! writes; `spinner` builds a stdout spinner.

use std::fmt::Display;
use std::io::Stdout;

use crate::block::HiddenCursor;
use crate::error::{Error, Result};
use crate::render::engine::{Answer, Engine};
use crate::render::theme::Palette;
use crate::render::{Prompt, SelectView, view};
use crate::sink::{Sink, Terminal};
use crate::spinner::Spinner;
use crate::types::{
    ColorChoice, ConfirmOptions, Outcome, SelectOptions, SpinnerConfig, TextOptions,
};

// ============================================================================
// PROMPTS
// ============================================================================

/// Ask for a line of text.
pub fn text<E: Engine + ?Sized>(engine: &mut E, opts: TextOptions) -> Result<Outcome<String>> {
    let prompt = Prompt::Text(opts);
    match engine.run(&prompt)? {
        Answer::Text(value) => Ok(Outcome::Value(value)),
        Answer::Cancelled => Ok(Outcome::Cancelled),
        other => Err(mismatch(&prompt, &other)),
    }
}

/// Ask a yes/no question.
pub fn confirm<E: Engine + ?Sized>(engine: &mut E, opts: ConfirmOptions) -> Result<Outcome<bool>> {
    let prompt = Prompt::Confirm(opts);
    match engine.run(&prompt)? {
        Answer::Confirm(value) => Ok(Outcome::Value(value)),
        Answer::Cancelled => Ok(Outcome::Cancelled),
        other => Err(mismatch(&prompt, &other)),
    }
}

/// Ask the user to pick one option; returns the chosen option's value.
///
/// Fails with [`Error::NoOptions`] before the engine runs when `options`
/// is empty.
pub fn select<E, V>(engine: &mut E, opts: SelectOptions<V>) -> Result<Outcome<V>>
where
    E: Engine + ?Sized,
    V: Display + PartialEq,
{
    if opts.options.is_empty() {
        return Err(Error::NoOptions);
    }
    let view = SelectView::from_options(opts.message.as_str(), &opts.options, opts.initial_cursor());
    let prompt = Prompt::Select(view);

    match engine.run(&prompt)? {
        Answer::Select(cursor) => {
            let len = opts.options.len();
            opts.options
                .into_iter()
                .nth(cursor)
                .map(|option| Outcome::Value(option.value))
                .ok_or(Error::CursorOutOfRange { cursor, len })
        }
        Answer::Cancelled => Ok(Outcome::Cancelled),
        other => Err(mismatch(&prompt, &other)),
    }
}

fn mismatch(prompt: &Prompt, answer: &Answer) -> Error {
    Error::AnswerMismatch {
        prompt: prompt.kind(),
        answer: answer.kind(),
    }
}

// ============================================================================
// STATIC LINES
// ============================================================================

/// Open a prompt session on stdout.
pub fn intro(title: &str) -> Result<()> {
    intro_to(&mut Terminal::stdout(), Palette::detect(ColorChoice::Auto), title)
}

/// Close a prompt session on stdout.
pub fn outro(message: &str) -> Result<()> {
    outro_to(&mut Terminal::stdout(), Palette::detect(ColorChoice::Auto), message)
}

/// Close a prompt session after the user cancelled.
pub fn cancel(message: &str) -> Result<()> {
    cancel_to(&mut Terminal::stdout(), Palette::detect(ColorChoice::Auto), message)
}

pub fn intro_to<S: Sink + ?Sized>(sink: &mut S, palette: Palette, title: &str) -> Result<()> {
    emit(sink, &view::intro_line(palette, title))
}

pub fn outro_to<S: Sink + ?Sized>(sink: &mut S, palette: Palette, message: &str) -> Result<()> {
    emit(sink, &view::outro_line(palette, message))
}

pub fn cancel_to<S: Sink + ?Sized>(sink: &mut S, palette: Palette, message: &str) -> Result<()> {
    emit(sink, &view::cancel_line(palette, message))
}

fn emit<S: Sink + ?Sized>(sink: &mut S, line: &str) -> Result<()> {
    sink.write(line)?;
    sink.flush()?;
    Ok(())
}

// ============================================================================
// SPINNER
// ============================================================================

/// A spinner on stdout that hides the cursor while it runs.
pub fn spinner() -> Spinner<Terminal<Stdout>, HiddenCursor> {
    Spinner::new(
        Terminal::stdout(),
        HiddenCursor,
        Palette::detect(ColorChoice::Auto),
        SpinnerConfig::default(),
    )
}

// ============================================================================
// TESTS
// ============================================================================
