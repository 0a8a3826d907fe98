//! Periodic timers counted in host ticks.
//!
//! A timer with period `p` fires on every `p`-th host tick, starting `p`
//! ticks after it was started. Timers that fire on the same tick are reported
//! in registration order.

use arrayvec::ArrayVec;
use log::debug;

/// Most timers a host keeps at once
pub const MAX_TIMERS: usize = 8;

/// Handle returned by [`Timers::start`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u8);

/// Why a timer could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    ZeroPeriod,
    Full,
}

impl std::fmt::Display for TimerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerError::ZeroPeriod => f.write_str("timer period must be at least one tick"),
            TimerError::Full => write!(f, "no more than {} timers", MAX_TIMERS),
        }
    }
}

impl std::error::Error for TimerError {}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    period: u32,
    remaining: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    timers: ArrayVec<Timer, MAX_TIMERS>,
    next_id: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a periodic timer
    pub fn start(&mut self, period_ticks: u32) -> Result<TimerId, TimerError> {
        if period_ticks == 0 {
            return Err(TimerError::ZeroPeriod);
        }
        let id = TimerId(self.next_id);
        self.timers
            .try_push(Timer {
                id,
                period: period_ticks,
                remaining: period_ticks,
            })
            .map_err(|_| TimerError::Full)?;
        self.next_id = self.next_id.wrapping_add(1);
        debug!("timer {} started, period {} ticks", id.0, period_ticks);
        Ok(id)
    }

    /// Stop a timer; false if it was not running
    pub fn stop(&mut self, id: TimerId) -> bool {
        match self.timers.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.timers.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn period(&self, id: TimerId) -> Option<u32> {
        self.timers.iter().find(|t| t.id == id).map(|t| t.period)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance one host tick and report the timers that fired
    pub fn advance(&mut self) -> ArrayVec<TimerId, MAX_TIMERS> {
        let mut fired = ArrayVec::new();
        for timer in self.timers.iter_mut() {
            timer.remaining -= 1;
            if timer.remaining == 0 {
                timer.remaining = timer.period;
                fired.push(timer.id);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_period() {
        let mut timers = Timers::new();
        let id = timers.start(3).unwrap();

        let fired: Vec<bool> = (0..9).map(|_| !timers.advance().is_empty()).collect();
        assert_eq!(
            fired,
            vec![false, false, true, false, false, true, false, false, true]
        );
        assert_eq!(timers.period(id), Some(3));
    }

    #[test]
    fn test_same_tick_in_registration_order() {
        let mut timers = Timers::new();
        let a = timers.start(2).unwrap();
        let b = timers.start(1).unwrap();

        timers.advance();
        let fired = timers.advance();
        assert_eq!(fired.as_slice(), &[a, b]);
    }

    #[test]
    fn test_rejects_zero_and_overflow() {
        let mut timers = Timers::new();
        assert_eq!(timers.start(0), Err(TimerError::ZeroPeriod));
        for _ in 0..MAX_TIMERS {
            timers.start(5).unwrap();
        }
        assert_eq!(timers.start(5), Err(TimerError::Full));
    }

    #[test]
    fn test_stop() {
        let mut timers = Timers::new();
        let id = timers.start(1).unwrap();
        assert!(timers.stop(id));
        assert!(!timers.stop(id));
        assert!(timers.advance().is_empty());
    }
}
