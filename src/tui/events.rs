use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent};

const INPUT_POLL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Calls `on_tick` every `period` on a background thread until cancelled,
/// dropped, or `on_tick` returns `false`.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut next = Instant::now() + period;
            while !flag.load(Ordering::Acquire) {
                let now = Instant::now();
                if now < next {
                    thread::park_timeout(next - now);
                    continue;
                }
                if !on_tick() {
                    break;
                }
                next += period;
                // Skip ticks missed while suspended instead of bursting.
                if next < Instant::now() {
                    next = Instant::now() + period;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Merges terminal key presses and a 1-second tick into one channel.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    ticker: Ticker,
    stop_input: Arc<AtomicBool>,
    input: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let tick_tx = tx.clone();
        let ticker = Ticker::spawn(tick_rate, move || tick_tx.send(Event::Tick).is_ok());

        let stop_input = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop_input);
        let input = thread::spawn(move || {
            while !flag.load(Ordering::Acquire) {
                if !event::poll(INPUT_POLL).unwrap_or(false) {
                    continue;
                }
                match event::read() {
                    Ok(CEvent::Key(key)) => {
                        if tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });

        Self {
            rx,
            ticker,
            stop_input,
            input: Some(input),
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.ticker.cancel();
        self.stop_input.store(true, Ordering::Release);
        if let Some(input) = self.input.take() {
            let _ = input.join();
        }
    }
}
