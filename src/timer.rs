//! This module contains the [SessionTimer](struct.SessionTimer.html) which
//! tracks how long a play session has been running.

/// Tracks the time spent on a play session in whole seconds.
///
/// The timer does not read a clock. It only counts calls to
/// [SessionTimer.tick](struct.SessionTimer.html#method.tick), which the
/// embedding frontend is expected to issue once per second while the game is
/// on screen. Keeping the clock external makes sessions deterministic: a
/// test can play through an entire game including its timing without
/// waiting.
///
/// ```
/// use sudoku_play::timer::SessionTimer;
///
/// let mut timer = SessionTimer::new();
/// timer.start();
/// timer.tick();
/// timer.tick();
/// assert_eq!(2, timer.elapsed_seconds());
///
/// timer.stop();
/// timer.tick();
/// assert_eq!(2, timer.elapsed_seconds());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionTimer {
    elapsed_seconds: u64,
    running: bool
}

impl SessionTimer {

    /// Creates a new timer with zero elapsed seconds which is not running.
    pub fn new() -> SessionTimer {
        SessionTimer {
            elapsed_seconds: 0,
            running: false
        }
    }

    /// Starts the timer from zero. Any previously counted time is
    /// discarded, so this doubles as a restart.
    pub fn start(&mut self) {
        self.elapsed_seconds = 0;
        self.running = true;
    }

    /// Stops the timer. The counted time is kept and can still be queried
    /// with [SessionTimer.elapsed_seconds](#method.elapsed_seconds).
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances the timer by one second. If the timer is not running, this
    /// call has no effect.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds += 1;
        }
    }

    /// Returns the number of whole seconds counted since the timer was last
    /// started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Indicates whether the timer is currently running, that is, whether
    /// [SessionTimer.tick](#method.tick) advances it.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
