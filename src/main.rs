//! clack-prompts CLI
//!
//! Print session banners, run a spinner, or replay a prompt script from a
//! shell.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;

use clack_prompts::block::HiddenCursor;
use clack_prompts::prompts::{cancel_to, intro_to, outro_to};
use clack_prompts::script::Script;
use clack_prompts::sink::Terminal;
use clack_prompts::spinner::Spinner;
use clack_prompts::types::{ColorChoice, SpinnerConfig};
use clack_prompts::{Palette, logging};

#[derive(Parser)]
#[command(name = "clack-prompts")]
#[command(about = "Render prompt frames, spinners and session banners")]
#[command(version)]
struct Cli {
    /// When to use colors
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorArg,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a session: ┌  TITLE
    Intro {
        #[arg(default_value = "")]
        title: String,
    },

    /// Close a session: └  MESSAGE
    Outro {
        #[arg(default_value = "")]
        message: String,
    },

    /// Close a cancelled session
    Cancel {
        #[arg(default_value = "")]
        message: String,
    },

    /// Animate a spinner for a while, then stop it
    Spin {
        /// Message shown while spinning
        #[arg(long, default_value = "Working")]
        message: String,

        /// Message left behind when done
        #[arg(long, default_value = "Done")]
        done: String,

        /// How long to spin, in milliseconds
        #[arg(long, default_value_t = 1500)]
        millis: u64,
    },

    /// Replay a JSON prompt script and print its answer on stderr
    Preview {
        /// Script file
        script: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// Exit code of a replay that ended cancelled, as for SIGINT.
const EXIT_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let palette = Palette::detect(cli.color.into());

    if let Err(e) = logging::init_logging(cli.verbose, palette.is_enabled()) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        Commands::Intro { title } => intro_to(&mut Terminal::stdout(), palette, &title),
        Commands::Outro { message } => outro_to(&mut Terminal::stdout(), palette, &message),
        Commands::Cancel { message } => cancel_to(&mut Terminal::stdout(), palette, &message),
        Commands::Spin {
            message,
            done,
            millis,
        } => cmd_spin(palette, &message, &done, millis),
        Commands::Preview { script } => return cmd_preview(palette, script),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_spin(palette: Palette, message: &str, done: &str, millis: u64) -> clack_prompts::Result<()> {
    let mut spinner = Spinner::new(
        Terminal::stdout(),
        HiddenCursor,
        palette,
        SpinnerConfig::default(),
    );
    spinner.start(message)?;
    thread::sleep(Duration::from_millis(millis));
    spinner.stop(done)
}

fn cmd_preview(palette: Palette, path: PathBuf) -> ExitCode {
    let outcome = match Script::load(&path).and_then(|s| s.replay(Terminal::stdout(), palette)) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    debug!(path = %path.display(), cancelled = outcome.is_cancel(), "replay finished");
    match serde_json::to_string(&outcome) {
        Ok(json) => eprintln!("{}", json),
        Err(e) => eprintln!("Warning: could not encode answer: {}", e),
    }

    if outcome.is_cancel() {
        ExitCode::from(EXIT_CANCELLED)
    } else {
        ExitCode::SUCCESS
    }
}
