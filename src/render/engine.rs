//! The engine seam: who drives a prompt from first frame to answer.
//!
//! An [`Engine`] owns the prompt lifecycle. It decides when the state
//! changes, asks the [`Prompt`] for a frame, clears the previous frame and
//! writes the new one. This crate only renders; it ships [`Scripted`], an
//! engine that replays a fixed list of snapshots, for previews and tests.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::sink::Sink;
use crate::types::{PromptState, Snapshot};

use super::Prompt;
use super::theme::Palette;

/// Far enough left to reach column 0 on any terminal.
const FAR_LEFT: i16 = -999;

/// What an engine settles a prompt on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    /// Index into the select prompt's options.
    Select(usize),
    Cancelled,
}

impl Answer {
    pub fn kind(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Confirm(_) => "confirm",
            Answer::Select(_) => "select",
            Answer::Cancelled => "cancelled",
        }
    }
}

/// Drives a prompt until it is submitted or cancelled.
pub trait Engine {
    fn run(&mut self, prompt: &Prompt) -> Result<Answer>;
}

// ============================================================================
// SCRIPTED ENGINE
// ============================================================================

/// Replays recorded snapshots as if a user had produced them.
///
/// The prompt's initial snapshot is drawn first, then each queued snapshot
/// in order. A `Submit` snapshot of a text prompt goes through the prompt's
/// validator; a rejected value is drawn as `Error` and the replay carries on.
/// The first `Submit` or `Cancel` that sticks ends the run.
pub struct Scripted<S: Sink> {
    sink: S,
    palette: Palette,
    frames: VecDeque<Snapshot>,
}

impl<S: Sink> Scripted<S> {
    pub fn new(sink: S, palette: Palette, frames: impl IntoIterator<Item = Snapshot>) -> Self {
        Scripted {
            sink,
            palette,
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue more snapshots, e.g. for the next prompt in a session.
    pub fn extend(&mut self, frames: impl IntoIterator<Item = Snapshot>) {
        self.frames.extend(frames);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn draw(&mut self, previous: &mut Option<String>, frame: String) -> Result<()> {
        if let Some(prev) = previous.as_deref() {
            let lines = prev.matches('\n').count();
            let up = i16::try_from(lines).unwrap_or(i16::MAX);
            self.sink.move_cursor(FAR_LEFT, -up)?;
            self.sink.erase_down(1)?;
        }
        self.sink.write(&frame)?;
        self.sink.flush()?;
        *previous = Some(frame);
        Ok(())
    }
}

impl<S: Sink> Engine for Scripted<S> {
    fn run(&mut self, prompt: &Prompt) -> Result<Answer> {
        let mut previous = None;
        let first = prompt.initial_snapshot();
        self.draw(&mut previous, prompt.render(self.palette, &first))?;

        while let Some(mut snap) = self.frames.pop_front() {
            if snap.state == PromptState::Submit {
                if let Some(error) = prompt.validate(&snap.value) {
                    debug!(%error, "submit rejected by validator");
                    snap.state = PromptState::Error;
                    snap.error = error;
                }
            }
            trace!(kind = prompt.kind(), state = %snap.state, "frame");
            self.draw(&mut previous, prompt.render(self.palette, &snap))?;

            if snap.state.is_finished() {
                self.sink.write("\n")?;
                self.sink.flush()?;
                let answer = settle(prompt, &snap);
                debug!(kind = prompt.kind(), answer = answer.kind(), "prompt settled");
                return Ok(answer);
            }
        }
        Err(Error::Unfinished)
    }
}

/// Read the answer off a finished snapshot.
fn settle(prompt: &Prompt, snap: &Snapshot) -> Answer {
    if snap.state == PromptState::Cancel {
        return Answer::Cancelled;
    }
    match prompt {
        Prompt::Text(_) => Answer::Text(snap.value.clone()),
        Prompt::Confirm(_) => Answer::Confirm(snap.confirmed),
        Prompt::Select(_) => Answer::Select(snap.cursor),
    }
}

// ============================================================================
// TESTS
// ============================================================================
