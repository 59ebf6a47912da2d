//! Error type shared by every fallible operation in the crate.
//!
//! Validation messages from a caller's validator are not errors: they are
//! display strings carried in a [`Snapshot`](crate::types::Snapshot).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the terminal or sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A select prompt was built without any options.
    #[error("select prompt needs at least one option")]
    NoOptions,

    /// `Spinner::start` was called while the spinner was already running.
    #[error("spinner is already running")]
    SpinnerRunning,

    /// An engine answered a prompt with an answer of another kind.
    #[error("engine answered a {prompt} prompt with a {answer} answer")]
    AnswerMismatch {
        prompt: &'static str,
        answer: &'static str,
    },

    /// An engine settled a select prompt on a position with no option.
    #[error("select cursor {cursor} is out of range for {len} options")]
    CursorOutOfRange { cursor: usize, len: usize },

    /// A replay ran out of snapshots before reaching submit or cancel.
    #[error("replay ended before the prompt was submitted or cancelled")]
    Unfinished,

    /// A replay script could not be parsed.
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
