//! Domain types for clack-prompts.
//!
//! Everything the renderer reads (prompt state, snapshots, options) and
//! everything a prompt hands back to the caller (outcomes).

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// PROMPT STATE
// ============================================================================

/// Lifecycle state of a prompt, owned and advanced by the engine.
///
/// The renderer only reads it to decide which frame to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptState {
    /// Constructed, nothing typed yet.
    #[default]
    Initial,
    /// Receiving input.
    Active,
    /// The last submit failed validation.
    Error,
    /// Finished with a value.
    Submit,
    /// Abandoned by the user.
    Cancel,
}

impl PromptState {
    /// True for the two terminal states.
    pub fn is_finished(self) -> bool {
        matches!(self, PromptState::Submit | PromptState::Cancel)
    }

    /// Lowercase name, as used in replay scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            PromptState::Initial => "initial",
            PromptState::Active => "active",
            PromptState::Error => "error",
            PromptState::Submit => "submit",
            PromptState::Cancel => "cancel",
        }
    }
}

impl fmt::Display for PromptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// The renderer's read-only view of a prompt at render time.
///
/// One type serves all three prompt kinds; each kind reads only the fields
/// it needs. Every field defaults so replay scripts can omit the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Current lifecycle state.
    pub state: PromptState,
    /// Text entered so far (text prompts).
    pub value: String,
    /// `value` with the engine's cursor marker embedded (text prompts).
    pub value_with_cursor: Option<String>,
    /// Current yes/no value (confirm prompts).
    pub confirmed: bool,
    /// Index of the highlighted option (select prompts).
    pub cursor: usize,
    /// Validation message held by the engine while in `Error`.
    pub error: String,
}

impl Snapshot {
    pub fn new(state: PromptState) -> Self {
        Snapshot {
            state,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_value_with_cursor(mut self, value: impl Into<String>) -> Self {
        self.value_with_cursor = Some(value.into());
        self
    }

    pub fn with_confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }
}

// ============================================================================
// PROMPT OPTIONS
// ============================================================================

/// Caller-supplied validator: `Some(message)` rejects the value.
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Options for a free-text prompt.
pub struct TextOptions {
    /// Question shown next to the state symbol.
    pub message: String,
    /// Hint shown while the value is empty.
    pub placeholder: Option<String>,
    /// Run by the engine on submit.
    pub validate: Option<Validator>,
}

impl TextOptions {
    pub fn new(message: impl Into<String>) -> Self {
        TextOptions {
            message: message.into(),
            placeholder: None,
            validate: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Run the validator, if any, against `value`.
    pub fn check(&self, value: &str) -> Option<String> {
        self.validate.as_ref().and_then(|validate| validate(value))
    }
}

impl fmt::Debug for TextOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextOptions")
            .field("message", &self.message)
            .field("placeholder", &self.placeholder)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Options for a yes/no prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub message: String,
    /// Label of the `true` choice.
    pub active: String,
    /// Label of the `false` choice.
    pub inactive: String,
    /// Value the engine starts from.
    pub initial_value: bool,
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        ConfirmOptions {
            message: message.into(),
            active: "Yes".to_string(),
            inactive: "No".to_string(),
            initial_value: true,
        }
    }

    pub fn active(mut self, label: impl Into<String>) -> Self {
        self.active = label.into();
        self
    }

    pub fn inactive(mut self, label: impl Into<String>) -> Self {
        self.inactive = label.into();
        self
    }

    pub fn initial_value(mut self, value: bool) -> Self {
        self.initial_value = value;
        self
    }
}

/// One candidate of a select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    /// Returned to the caller when this option is chosen.
    pub value: V,
    /// Display text; falls back to `value`'s `Display` form.
    pub label: Option<String>,
    /// Dimmed note shown next to the highlighted option.
    pub hint: Option<String>,
}

impl<V> SelectOption<V> {
    pub fn new(value: V) -> Self {
        SelectOption {
            value,
            label: None,
            hint: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl<V: fmt::Display> SelectOption<V> {
    /// Project this option to what the renderer draws.
    pub fn choice(&self) -> Choice {
        Choice {
            label: self
                .label
                .clone()
                .unwrap_or_else(|| self.value.to_string()),
            hint: self.hint.clone(),
        }
    }
}

/// Display projection of a [`SelectOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: Option<String>,
}

/// Options for a single-select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptions<V> {
    pub message: String,
    /// Candidates in display order. Must not be empty.
    pub options: Vec<SelectOption<V>>,
    /// Value whose option starts highlighted.
    pub initial_value: Option<V>,
}

impl<V> SelectOptions<V> {
    pub fn new(message: impl Into<String>, options: Vec<SelectOption<V>>) -> Self {
        SelectOptions {
            message: message.into(),
            options,
            initial_value: None,
        }
    }

    pub fn initial_value(mut self, value: V) -> Self {
        self.initial_value = Some(value);
        self
    }
}

impl<V: PartialEq> SelectOptions<V> {
    /// Index of `initial_value` among the options, or 0.
    pub fn initial_cursor(&self) -> usize {
        self.initial_value
            .as_ref()
            .and_then(|initial| self.options.iter().position(|o| &o.value == initial))
            .unwrap_or(0)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of running a prompt to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T> {
    /// The prompt was submitted.
    Value(T),
    /// The user cancelled the prompt.
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancel(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// The submitted value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

/// Whether a prompt outcome is the cancellation marker.
pub fn is_cancel<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_cancel()
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Decide from the environment and whether stdout is a terminal.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

/// Configuration for the spinner animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerConfig {
    /// Delay between animation frames.
    pub interval: Duration,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(300),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submit_and_cancel_are_finished() {
        assert!(!PromptState::Initial.is_finished());
        assert!(!PromptState::Active.is_finished());
        assert!(!PromptState::Error.is_finished());
        assert!(PromptState::Submit.is_finished());
        assert!(PromptState::Cancel.is_finished());
    }

    #[test]
    fn snapshot_deserializes_with_defaults() {
        let snap: Snapshot = serde_json::from_str(r#"{"state":"submit","cursor":2}"#).unwrap();
        assert_eq!(snap.state, PromptState::Submit);
        assert_eq!(snap.cursor, 2);
        assert!(snap.value.is_empty());
        assert!(snap.value_with_cursor.is_none());
        assert!(!snap.confirmed);
    }

    #[test]
    fn confirm_defaults_match_yes_no_true() {
        let opts = ConfirmOptions::new("Continue?");
        assert_eq!(opts.active, "Yes");
        assert_eq!(opts.inactive, "No");
        assert!(opts.initial_value);
    }

    #[test]
    fn text_check_runs_validator() {
        let opts = TextOptions::new("Name").validate(|v| {
            if v.len() < 2 {
                Some("too short".to_string())
            } else {
                None
            }
        });
        assert_eq!(opts.check("a").as_deref(), Some("too short"));
        assert_eq!(opts.check("ab"), None);
        assert_eq!(TextOptions::new("Name").check(""), None);
    }

    #[test]
    fn choice_label_falls_back_to_value() {
        let plain = SelectOption::new(42);
        assert_eq!(plain.choice().label, "42");

        let labelled = SelectOption::new(1).label("One").hint("first");
        let choice = labelled.choice();
        assert_eq!(choice.label, "One");
        assert_eq!(choice.hint.as_deref(), Some("first"));
    }

    #[test]
    fn initial_cursor_finds_matching_value() {
        let opts = SelectOptions::new(
            "Pick",
            vec![SelectOption::new("a"), SelectOption::new("b"), SelectOption::new("c")],
        );
        assert_eq!(opts.initial_cursor(), 0);
        assert_eq!(opts.clone().initial_value("c").initial_cursor(), 2);
        assert_eq!(opts.initial_value("zzz").initial_cursor(), 0);
    }

    #[test]
    fn outcome_helpers() {
        let done: Outcome<u8> = Outcome::Value(3);
        assert!(!is_cancel(&done));
        assert_eq!(done.clone().map(|v| v * 2), Outcome::Value(6));
        assert_eq!(done.value(), Some(3));

        let cancelled: Outcome<u8> = Outcome::Cancelled;
        assert!(is_cancel(&cancelled));
        assert_eq!(cancelled.value(), None);
    }

    #[test]
    fn spinner_interval_defaults_to_300ms() {
        assert_eq!(SpinnerConfig::default().interval, Duration::from_millis(300));
    }
}
