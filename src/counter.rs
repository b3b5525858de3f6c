use std::{
    io::Write,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use log::trace;

/// Counting stops when the counter reaches this value
pub const BOUND: u32 = 10;

/// Text written after each count
pub const SUFFIX: &str = " Hello";

/// Wait after each line
pub const PAUSE: Duration = Duration::from_millis(1000);

/// A wait that ended before its full duration elapsed
#[derive(Debug, thiserror::Error)]
#[error("Wait of {requested:?} was interrupted after {elapsed:?}")]
pub struct InterruptedWait {
    pub requested: Duration,
    pub elapsed: Duration,
}

/// Suspends the caller between lines
pub trait Pause {
    fn pause(&mut self, duration: Duration) -> std::result::Result<(), InterruptedWait>;
}

/// Blocking sleep on the current thread
#[derive(Debug, Default)]
pub struct Sleep;

impl Pause for Sleep {
    fn pause(&mut self, duration: Duration) -> std::result::Result<(), InterruptedWait> {
        let start = Instant::now();
        thread::sleep(duration);
        let elapsed = start.elapsed();
        if elapsed < duration {
            return Err(InterruptedWait {
                requested: duration,
                elapsed,
            });
        }
        Ok(())
    }
}

/// Loop counter, always in `[0, BOUND)` while active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter(u32);

impl Counter {
    pub fn new() -> Counter {
        Counter::default()
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_active(self) -> bool {
        self.0 < BOUND
    }

    pub fn advance(&mut self) {
        debug_assert!(self.is_active());
        self.0 += 1;
    }
}

/// Writes `<i> Hello` for each count from 0 up to `BOUND`, pausing after every
/// line. Stops at the first interrupted pause.
pub fn run<W: Write, P: Pause>(out: &mut W, pause: &mut P) -> Result<()> {
    let mut counter = Counter::new();
    while counter.is_active() {
        let value = counter.value();
        trace!("Count: {}", value);

        write!(out, "{}", value).context("Unable to write count")?;
        writeln!(out, "{}", SUFFIX).context("Unable to write count")?;
        out.flush().context("Unable to flush output")?;

        trace!("Pausing for {:?}", PAUSE);
        pause
            .pause(PAUSE)
            .with_context(|| format!("Wait after count {} failed", value))?;

        counter.advance();
    }
    Ok(())
}
