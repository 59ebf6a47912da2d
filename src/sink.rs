//! Output sinks: where frames go.
//!
//! Everything that writes to the terminal goes through [`Sink`], so the
//! process-wide stdout and cursor can be swapped for a [`Capture`] in tests.

use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crossterm::QueueableCommand;
use crossterm::cursor::{MoveDown, MoveLeft, MoveRight, MoveUp};
use crossterm::terminal::{Clear, ClearType};

/// Terminal output capability.
pub trait Sink: Send {
    /// Write text at the cursor.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Move the cursor relative to where it is. Negative `dx` is left,
    /// negative `dy` is up.
    fn move_cursor(&mut self, dx: i16, dy: i16) -> io::Result<()>;

    /// Erase from the cursor downward, once per line.
    fn erase_down(&mut self, lines: u16) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// TERMINAL
// ============================================================================

/// Sink that emits ANSI control sequences to a writer.
///
/// Commands are queued; nothing reaches the writer until [`Sink::flush`].
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Terminal<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Sink for Terminal<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) -> io::Result<()> {
        // A zero count is read by terminals as one.
        if dx < 0 {
            self.out.queue(MoveLeft(dx.unsigned_abs()))?;
        } else if dx > 0 {
            self.out.queue(MoveRight(dx.unsigned_abs()))?;
        }
        if dy < 0 {
            self.out.queue(MoveUp(dy.unsigned_abs()))?;
        } else if dy > 0 {
            self.out.queue(MoveDown(dy.unsigned_abs()))?;
        }
        Ok(())
    }

    fn erase_down(&mut self, lines: u16) -> io::Result<()> {
        for _ in 0..lines {
            self.out.queue(Clear(ClearType::FromCursorDown))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// ============================================================================
// CAPTURE
// ============================================================================

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Write(String),
    MoveCursor { dx: i16, dy: i16 },
    EraseDown(u16),
}

/// Sink that records every call instead of touching a terminal.
///
/// Clones share the same record, so a clone can be handed to a spinner
/// while the original is inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    ops: Arc<Mutex<Vec<Op>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, op: Op) {
        self.ops
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(op);
    }

    /// Every call so far, in order.
    pub fn ops(&self) -> Vec<Op> {
        self.ops
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the written text, in order.
    pub fn writes(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Write(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// All written text concatenated.
    pub fn text(&self) -> String {
        self.writes().concat()
    }
}

impl Sink for Capture {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.record(Op::Write(text.to_string()));
        Ok(())
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) -> io::Result<()> {
        self.record(Op::MoveCursor { dx, dy });
        Ok(())
    }

    fn erase_down(&mut self, lines: u16) -> io::Result<()> {
        self.record(Op::EraseDown(lines));
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
