//! Input blocking while something animates.
//!
//! A [`Blocker`] hands out a guard; the terminal is released when the guard
//! is dropped, which happens exactly once however the holder exits.

use std::io::{self, Write};

use crossterm::ExecutableCommand;
use crossterm::cursor::{Hide, Show};

pub trait Blocker {
    /// Released on drop.
    type Guard: Send + 'static;

    fn block(&mut self) -> io::Result<Self::Guard>;
}

/// Blocks nothing. For sinks that are not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBlock;

impl Blocker for NoBlock {
    type Guard = ();

    fn block(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hides the terminal cursor so stray keystrokes and the caret stay out of
/// the animated frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenCursor;

impl Blocker for HiddenCursor {
    type Guard = CursorGuard;

    fn block(&mut self) -> io::Result<CursorGuard> {
        io::stdout().execute(Hide)?;
        Ok(CursorGuard { _private: () })
    }
}

/// Shows the cursor again on drop.
#[derive(Debug)]
pub struct CursorGuard {
    _private: (),
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        // Best-effort: the terminal may already be gone.
        let mut out = io::stdout();
        let _ = out.execute(Show);
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_block_always_succeeds() {
        let mut blocker = NoBlock;
        assert!(blocker.block().is_ok());
        assert!(blocker.block().is_ok());
    }
}
