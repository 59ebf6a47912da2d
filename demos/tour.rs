//! A scripted session - run with: cargo run --example tour
//!
//! Every prompt is driven by a replay engine writing to stdout, so the
//! frames can be watched without typing anything.

use std::thread;
use std::time::Duration;

use clack_prompts::sink::Terminal;
use clack_prompts::types::ColorChoice;
use clack_prompts::{
    ConfirmOptions, Outcome, Palette, PromptState, Scripted, SelectOption, SelectOptions,
    Snapshot, TextOptions, cancel, confirm, intro, outro, select, spinner, text,
};

fn main() {
    intro("create-app").expect("Failed to write intro");

    let mut engine = Scripted::new(
        Terminal::stdout(),
        Palette::detect(ColorChoice::Auto),
        vec![
            Snapshot::new(PromptState::Active).with_value("a"),
            Snapshot::new(PromptState::Submit).with_value("a"),
            Snapshot::new(PromptState::Active).with_value("app"),
            Snapshot::new(PromptState::Submit).with_value("app"),
        ],
    );

    let name = text(
        &mut engine,
        TextOptions::new("Project name?")
            .placeholder("my-app")
            .validate(|v| (v.len() < 3).then(|| "At least 3 characters".to_string())),
    )
    .expect("Text prompt failed");
    let Outcome::Value(name) = name else {
        cancel("Operation cancelled").expect("Failed to write cancel");
        return;
    };

    engine.extend([
        Snapshot::new(PromptState::Active).with_cursor(2),
        Snapshot::new(PromptState::Submit).with_cursor(2),
    ]);
    let language = select(
        &mut engine,
        SelectOptions::new(
            "Language?",
            vec![
                SelectOption::new("ts").label("TypeScript"),
                SelectOption::new("js").label("JavaScript"),
                SelectOption::new("rs").label("Rust").hint("fast"),
            ],
        ),
    )
    .expect("Select prompt failed");

    engine.extend([
        Snapshot::new(PromptState::Active).with_confirmed(false),
        Snapshot::new(PromptState::Submit).with_confirmed(false),
    ]);
    let git = confirm(&mut engine, ConfirmOptions::new("Initialize git?"))
        .expect("Confirm prompt failed");

    let mut s = spinner();
    s.start("Installing dependencies...").expect("Failed to start spinner");
    thread::sleep(Duration::from_millis(1200));
    s.stop("Installed").expect("Failed to stop spinner");

    outro(&format!(
        "{} ({}), git: {}",
        name,
        language.value().unwrap_or("?"),
        git.value().unwrap_or(false)
    ))
    .expect("Failed to write outro");
}
