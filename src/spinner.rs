//! Animated "working..." line.
//!
//! `idle → running → idle`. While running, a ticker thread redraws the
//! two-line frame every interval with 0–3 trailing dots. The sink is shared
//! behind a mutex and `stop` joins the ticker before drawing the final
//! frame, so ticks never interleave with other output from this spinner.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::block::Blocker;
use crate::error::{Error, Result};
use crate::render::theme::Palette;
use crate::render::view::{spinner_done_frame, spinner_frame};
use crate::sink::Sink;
use crate::types::SpinnerConfig;

/// Lines occupied by a spinner frame.
const FRAME_LINES: u16 = 2;

/// Far enough left to reach column 0 on any terminal.
const FAR_LEFT: i16 = -999;

pub struct Spinner<S: Sink + 'static, B: Blocker> {
    sink: Arc<Mutex<S>>,
    blocker: B,
    palette: Palette,
    config: SpinnerConfig,
    session: Option<Session<B::Guard>>,
}

/// Everything owned while the spinner runs.
struct Session<G> {
    stop: mpsc::Sender<()>,
    ticker: JoinHandle<()>,
    guard: G,
}

impl<S: Sink + 'static, B: Blocker> Spinner<S, B> {
    pub fn new(sink: S, blocker: B, palette: Palette, config: SpinnerConfig) -> Self {
        Spinner {
            sink: Arc::new(Mutex::new(sink)),
            blocker,
            palette,
            config,
            session: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Draw the first frame and start animating.
    ///
    /// A trailing `"..."` is dropped since the animation supplies its own
    /// dots. Fails with [`Error::SpinnerRunning`] if already started.
    pub fn start(&mut self, message: &str) -> Result<()> {
        if self.session.is_some() {
            return Err(Error::SpinnerRunning);
        }
        let message = message.strip_suffix("...").unwrap_or(message).to_string();

        let guard = self.blocker.block()?;
        {
            let mut sink = lock(&self.sink);
            sink.write(&spinner_frame(self.palette, &message, 0))?;
            sink.flush()?;
        }

        let (stop, stopped) = mpsc::channel();
        let sink = Arc::clone(&self.sink);
        let palette = self.palette;
        let interval = self.config.interval;
        debug!(%message, ?interval, "spinner started");
        let ticker = thread::spawn(move || tick_loop(sink, stopped, palette, message, interval));

        self.session = Some(Session {
            stop,
            ticker,
            guard,
        });
        Ok(())
    }

    /// Replace the animation with a finished frame and release the terminal.
    ///
    /// Does nothing when the spinner is idle.
    pub fn stop(&mut self, message: &str) -> Result<()> {
        let Some(Session {
            stop,
            ticker,
            guard,
        }) = self.session.take()
        else {
            debug!("spinner stop while idle");
            return Ok(());
        };

        halt(stop, ticker);
        {
            let mut sink = lock(&self.sink);
            redraw(&mut *sink, &spinner_done_frame(self.palette, message))?;
        }
        drop(guard);
        debug!(%message, "spinner stopped");
        Ok(())
    }
}

impl<S: Sink + 'static, B: Blocker> Drop for Spinner<S, B> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            warn!("spinner dropped while running");
            halt(session.stop, session.ticker);
        }
    }
}

// ============================================================================
// TICKER
// ============================================================================

fn lock<S>(sink: &Mutex<S>) -> MutexGuard<'_, S> {
    sink.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Signal the ticker and wait until it has finished its last tick.
fn halt(stop: mpsc::Sender<()>, ticker: JoinHandle<()>) {
    // The ticker may already have exited on a write error.
    let _ = stop.send(());
    if ticker.join().is_err() {
        warn!("spinner ticker panicked");
    }
}

/// Step back over the previous frame and draw `frame` in its place.
fn redraw<S: Sink + ?Sized>(sink: &mut S, frame: &str) -> io::Result<()> {
    sink.move_cursor(FAR_LEFT, -(FRAME_LINES as i16))?;
    sink.erase_down(FRAME_LINES)?;
    sink.write(frame)?;
    sink.flush()
}

fn tick_loop<S: Sink>(
    sink: Arc<Mutex<S>>,
    stopped: mpsc::Receiver<()>,
    palette: Palette,
    message: String,
    interval: Duration,
) {
    let mut dots = 0;
    loop {
        match stopped.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                let frame = spinner_frame(palette, &message, dots);
                if let Err(e) = redraw(&mut *lock(&sink), &frame) {
                    warn!(error = %e, "spinner tick failed");
                    break;
                }
                trace!(dots, "spinner tick");
                dots = (dots + 1) % 4;
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Capture, Op};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct Counting {
        blocked: Arc<AtomicUsize>,
        released: Arc<AtomicUsize>,
    }

    struct CountingGuard(Arc<AtomicUsize>);

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Blocker for Counting {
        type Guard = CountingGuard;

        fn block(&mut self) -> io::Result<CountingGuard> {
            self.blocked.fetch_add(1, Ordering::SeqCst);
            Ok(CountingGuard(Arc::clone(&self.released)))
        }
    }

    fn spinner_with(interval: Duration) -> (Spinner<Capture, Counting>, Capture, Counting) {
        let capture = Capture::new();
        let counting = Counting::default();
        let spinner = Spinner::new(
            capture.clone(),
            counting.clone(),
            Palette::plain(),
            SpinnerConfig { interval },
        );
        (spinner, capture, counting)
    }

    /// Long enough that no tick fires during a test.
    const NEVER: Duration = Duration::from_secs(60);

    fn redraw_ops(frame: &str) -> [Op; 3] {
        [
            Op::MoveCursor { dx: -999, dy: -2 },
            Op::EraseDown(2),
            Op::Write(frame.to_string()),
        ]
    }

    #[test]
    fn start_then_stop_writes_initial_and_final_frames() {
        let (mut spinner, capture, counting) = spinner_with(NEVER);
        spinner.start("Loading").unwrap();
        assert!(spinner.is_running());
        spinner.stop("Done").unwrap();
        assert!(!spinner.is_running());

        let mut expected = vec![Op::Write("│\n◆  Loading\n".to_string())];
        expected.extend(redraw_ops("│\n◆  Done\n"));
        assert_eq!(capture.ops(), expected);
        assert_eq!(counting.blocked.load(Ordering::SeqCst), 1);
        assert_eq!(counting.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ticks_cycle_through_dots() {
        let (mut spinner, capture, counting) = spinner_with(Duration::from_millis(5));
        spinner.start("Loading").unwrap();
        thread::sleep(Duration::from_millis(60));
        spinner.stop("Done").unwrap();

        let ops = capture.ops();
        assert_eq!(ops[0], Op::Write("│\n◆  Loading\n".to_string()));
        let rest = &ops[1..];
        assert_eq!(rest.len() % 3, 0);

        let groups: Vec<&[Op]> = rest.chunks(3).collect();
        let (last, ticks) = groups.split_last().unwrap();
        assert_eq!(*last, &redraw_ops("│\n◆  Done\n")[..]);
        for (i, tick) in ticks.iter().enumerate() {
            let frame = format!("│\n◆  Loading{}\n", ".".repeat(i % 4));
            assert_eq!(*tick, &redraw_ops(&frame)[..]);
        }

        let finals = capture.writes().iter().filter(|w| w.contains("Done")).count();
        assert_eq!(finals, 1);
        assert_eq!(counting.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn trailing_ellipsis_is_stripped() {
        let (mut spinner, capture, _) = spinner_with(NEVER);
        spinner.start("Installing...").unwrap();
        spinner.stop("Installed").unwrap();
        assert_eq!(capture.writes()[0], "│\n◆  Installing\n");
    }

    #[test]
    fn second_start_is_rejected() {
        let (mut spinner, capture, counting) = spinner_with(NEVER);
        spinner.start("One").unwrap();
        assert!(matches!(spinner.start("Two"), Err(Error::SpinnerRunning)));
        assert_eq!(counting.blocked.load(Ordering::SeqCst), 1);
        assert_eq!(capture.writes().len(), 1);
        spinner.stop("Done").unwrap();
        assert_eq!(counting.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let (mut spinner, capture, counting) = spinner_with(NEVER);
        spinner.stop("Done").unwrap();
        assert!(capture.ops().is_empty());
        assert_eq!(counting.released.load(Ordering::SeqCst), 0);

        spinner.start("Go").unwrap();
        spinner.stop("Done").unwrap();
        spinner.stop("Again").unwrap();
        assert_eq!(counting.released.load(Ordering::SeqCst), 1);
        assert!(!capture.text().contains("Again"));
    }

    #[test]
    fn spinner_can_restart_after_stop() {
        let (mut spinner, capture, counting) = spinner_with(NEVER);
        spinner.start("First").unwrap();
        spinner.stop("One").unwrap();
        spinner.start("Second").unwrap();
        spinner.stop("Two").unwrap();
        assert_eq!(counting.blocked.load(Ordering::SeqCst), 2);
        assert_eq!(counting.released.load(Ordering::SeqCst), 2);
        assert!(capture.text().ends_with("│\n◆  Two\n"));
    }

    #[test]
    fn dropping_a_running_spinner_releases_the_terminal() {
        let (mut spinner, capture, counting) = spinner_with(NEVER);
        spinner.start("Loading").unwrap();
        drop(spinner);
        assert_eq!(counting.released.load(Ordering::SeqCst), 1);
        assert_eq!(capture.writes().len(), 1);
    }
}
