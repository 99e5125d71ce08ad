//! Periodic tick driver.
//!
//! A dedicated thread that sends [`RuntimeEvent::Tick`] at a fixed cadence.
//! It reports real elapsed time per tick rather than the nominal interval,
//! so a delayed wakeup does not lose simulated time. Whether a tick actually
//! advances the simulation is the receiver's decision (ticks are dropped
//! while auto-play is off), which keeps pause/reset effective before the
//! next tick without cross-thread coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::runtime::RuntimeEvent;

pub struct TickDriver {
    stop_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Spawn the driver thread. It runs until [`TickDriver::stop`] or until
    /// the receiving end of `events` goes away.
    #[must_use]
    pub fn spawn(events: Sender<RuntimeEvent>, interval: Duration) -> Self {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop_flag);

        let thread = thread::spawn(move || {
            let mut last = Instant::now();
            while !thread_stop.load(Ordering::SeqCst) {
                thread::sleep(interval);
                if thread_stop.load(Ordering::SeqCst) {
                    break;
                }
                let now = Instant::now();
                let delta = now.duration_since(last).as_secs_f64();
                last = now;
                if events.send(RuntimeEvent::Tick(delta)).is_err() {
                    break;
                }
            }
        });

        Self {
            stop_flag,
            thread: Some(thread),
        }
    }

    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use crate::runtime::RuntimeEvent;

    use super::TickDriver;

    #[test]
    fn driver_ticks_with_positive_deltas() {
        let (tx, rx) = mpsc::channel();
        let mut driver = TickDriver::spawn(tx, Duration::from_millis(10));

        let first = rx.recv_timeout(Duration::from_secs(1)).expect("first tick");
        let second = rx
            .recv_timeout(Duration::from_secs(1))
            .expect("second tick");
        driver.stop();

        for event in [first, second] {
            match event {
                RuntimeEvent::Tick(delta) => assert!(delta > 0.0),
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[test]
    fn driver_stops_when_the_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel();
        let mut driver = TickDriver::spawn(tx, Duration::from_millis(10));
        drop(rx);
        // Must return instead of hanging on a dead channel.
        driver.stop();
    }
}
