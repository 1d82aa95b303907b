use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval};

/// A cancellable fixed-period ticker.
///
/// The first tick completes immediately. Once cancelled, [`Ticker::tick`]
/// never resolves, which silences its branch in a `tokio::select!` loop
/// until [`Ticker::resume`] is called.
pub struct Ticker {
    period: Duration,
    interval: Interval,
    cancelled: bool,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            period,
            interval,
            cancelled: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub async fn tick(&mut self) -> Instant {
        if self.cancelled {
            return std::future::pending::<Instant>().await;
        }
        self.interval.tick().await
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Restart ticking; the next tick is one full period from now
    pub fn resume(&mut self) {
        if self.cancelled {
            self.interval.reset();
            self.cancelled = false;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
