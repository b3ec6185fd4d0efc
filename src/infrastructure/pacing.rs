//! Step pacing
//!
//! A fixed pause between removal steps that a second party can cut short.
//! Cutting it short is not a skip: the pending and every later pause fail.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::ports::{Interrupted, StepDelay};

#[derive(Debug, Default)]
struct Gate {
    interrupted: Mutex<bool>,
    wake: Condvar,
}

/// Sleeps for the configured delay after every step
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    gate: Arc<Gate>,
}

/// Handle that interrupts a `Pacer` from another thread
#[derive(Debug, Clone)]
pub struct PaceInterrupter {
    gate: Arc<Gate>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            gate: Arc::new(Gate::default()),
        }
    }

    pub fn interrupter(&self) -> PaceInterrupter {
        PaceInterrupter {
            gate: Arc::clone(&self.gate),
        }
    }
}

impl StepDelay for Pacer {
    fn pause(&self) -> Result<(), Interrupted> {
        let guard = self
            .gate
            .interrupted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.delay.is_zero() {
            return if *guard { Err(Interrupted) } else { Ok(()) };
        }

        let (guard, _) = self
            .gate
            .wake
            .wait_timeout_while(guard, self.delay, |interrupted| !*interrupted)
            .unwrap_or_else(PoisonError::into_inner);
        if *guard {
            tracing::warn!("step delay interrupted");
            Err(Interrupted)
        } else {
            Ok(())
        }
    }
}

impl PaceInterrupter {
    pub fn interrupt(&self) {
        let mut interrupted = self
            .gate
            .interrupted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *interrupted = true;
        self.gate.wake.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn zero_delay_returns_immediately() {
        let pacer = Pacer::new(Duration::ZERO);
        assert!(pacer.pause().is_ok());
    }

    #[test]
    fn waits_for_the_delay() {
        let pacer = Pacer::new(Duration::from_millis(30));
        let start = Instant::now();
        pacer.pause().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn interrupt_wakes_a_pending_pause() {
        let pacer = Pacer::new(Duration::from_secs(60));
        let interrupter = pacer.interrupter();

        let waiter = thread::spawn(move || pacer.pause());
        thread::sleep(Duration::from_millis(20));
        interrupter.interrupt();

        assert_eq!(waiter.join().unwrap(), Err(Interrupted));
    }

    #[test]
    fn interruption_is_sticky() {
        let pacer = Pacer::new(Duration::from_millis(5));
        pacer.interrupter().interrupt();

        assert_eq!(pacer.pause(), Err(Interrupted));
        assert_eq!(pacer.pause(), Err(Interrupted));
    }
}
