//! A whole prompt session through the public API, captured instead of drawn.

use std::thread;
use std::time::Duration;

use clack_prompts::block::NoBlock;
use clack_prompts::prompts::{intro_to, outro_to};
use clack_prompts::sink::{Capture, Op};
use clack_prompts::spinner::Spinner;
use clack_prompts::types::SpinnerConfig;
use clack_prompts::{
    ConfirmOptions, Error, Outcome, Palette, PromptState, Scripted, SelectOption, SelectOptions,
    Snapshot, TextOptions, confirm, select, text,
};

#[test]
fn session_renders_every_prompt_in_order() {
    let capture = Capture::new();
    let mut sink = capture.clone();
    intro_to(&mut sink, Palette::plain(), "setup").unwrap();

    let mut engine = Scripted::new(
        capture.clone(),
        Palette::plain(),
        vec![
            Snapshot::new(PromptState::Submit).with_value("ab"),
            Snapshot::new(PromptState::Submit).with_value("abc"),
            Snapshot::new(PromptState::Active).with_cursor(1),
            Snapshot::new(PromptState::Submit).with_cursor(1),
            Snapshot::new(PromptState::Submit).with_confirmed(false),
        ],
    );

    let name = text(
        &mut engine,
        TextOptions::new("Name?")
            .validate(|v| (v.len() < 3).then(|| "too short".to_string())),
    )
    .unwrap();
    assert_eq!(name, Outcome::Value("abc".to_string()));

    let pick = select(
        &mut engine,
        SelectOptions::new(
            "Pick",
            vec![SelectOption::new('A'), SelectOption::new('B').hint("second")],
        ),
    )
    .unwrap();
    assert_eq!(pick, Outcome::Value('B'));

    let ok = confirm(&mut engine, ConfirmOptions::new("Sure?")).unwrap();
    assert_eq!(ok, Outcome::Value(false));
    assert_eq!(engine.remaining(), 0);

    outro_to(&mut sink, Palette::plain(), "done").unwrap();

    let text = capture.text();
    assert!(text.starts_with("┌  setup\n"));
    assert!(text.contains("└  too short\n"));
    assert!(text.contains("◼ B (second)"));
    assert!(text.ends_with("│\n└  done\n\n"));

    let name_at = text.find("Name?").unwrap();
    let pick_at = text.find("Pick").unwrap();
    let sure_at = text.find("Sure?").unwrap();
    assert!(name_at < pick_at && pick_at < sure_at);
}

#[test]
fn cancelled_text_and_unfinished_replay() {
    let mut engine = Scripted::new(
        Capture::new(),
        Palette::plain(),
        vec![Snapshot::new(PromptState::Cancel).with_value("x")],
    );
    assert!(text(&mut engine, TextOptions::new("Name?")).unwrap().is_cancel());

    let err = confirm(&mut engine, ConfirmOptions::new("Sure?")).unwrap_err();
    assert!(matches!(err, Error::Unfinished));
}

#[test]
fn spinner_runs_once_at_a_time() {
    let capture = Capture::new();
    let mut spinner = Spinner::new(
        capture.clone(),
        NoBlock,
        Palette::plain(),
        SpinnerConfig {
            interval: Duration::from_millis(5),
        },
    );

    spinner.start("Fetching...").unwrap();
    assert!(matches!(spinner.start("Again"), Err(Error::SpinnerRunning)));
    thread::sleep(Duration::from_millis(30));
    spinner.stop("Fetched").unwrap();
    spinner.stop("Ignored").unwrap();

    let writes = capture.writes();
    assert_eq!(writes.first().map(String::as_str), Some("│\n◆  Fetching\n"));
    assert_eq!(writes.last().map(String::as_str), Some("│\n◆  Fetched\n"));
    assert!(!capture.text().contains("Ignored"));
    assert!(matches!(capture.ops().last(), Some(Op::Write(_))));
}
