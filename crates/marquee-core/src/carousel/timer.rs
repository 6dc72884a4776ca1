//! Auto-advance scheduling
//!
//! A timer holds at most one recurring schedule. Every firing is tagged with
//! the generation it was scheduled under so the controller can drop ticks
//! that were already queued when the schedule was replaced.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::controller::CarouselEvent;

/// A cancellable recurring schedule
pub trait AutoAdvanceTimer {
    /// Cancel the pending schedule (if any) and start a new one
    fn restart(&mut self, period: Duration, generation: u64);

    /// Drop the pending schedule (if any)
    fn cancel(&mut self);

    /// Whether a schedule is pending
    fn is_pending(&self) -> bool;
}

/// Timer backed by a tokio task that posts ticks into the event queue
#[derive(Debug)]
pub struct TokioTimer {
    tx: mpsc::UnboundedSender<CarouselEvent>,
    task: Option<JoinHandle<()>>,
}

impl TokioTimer {
    /// Create a timer posting `CarouselEvent::AutoAdvance` into `tx`
    ///
    /// `restart` spawns onto the current tokio runtime and must be called
    /// from within one.
    pub fn new(tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        Self { tx, task: None }
    }
}

impl AutoAdvanceTimer for TokioTimer {
    fn restart(&mut self, period: Duration, generation: u64) {
        self.cancel();

        if period.is_zero() {
            warn!("Ignoring zero auto-advance period");
            return;
        }

        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tx.send(CarouselEvent::AutoAdvance { generation }).is_err() {
                    debug!("Auto-advance receiver dropped, stopping timer");
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Timer that only records what was asked of it
///
/// Firings are triggered by the caller through
/// `CarouselController::on_auto_advance`.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    pending: Option<(Duration, u64)>,
    restarts: usize,
    cancels: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the pending schedule
    pub fn period(&self) -> Option<Duration> {
        self.pending.map(|(period, _)| period)
    }

    /// Generation of the pending schedule
    pub fn generation(&self) -> Option<u64> {
        self.pending.map(|(_, generation)| generation)
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn cancels(&self) -> usize {
        self.cancels
    }
}

impl AutoAdvanceTimer for ManualTimer {
    fn restart(&mut self, period: Duration, generation: u64) {
        self.cancel();
        self.restarts += 1;
        if !period.is_zero() {
            self.pending = Some((period, generation));
        }
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancels += 1;
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<CarouselEvent>) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::from_millis(4000), 1);

        tokio::time::sleep(Duration::from_millis(3999)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![CarouselEvent::AutoAdvance { generation: 1 }]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recurs_every_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::from_millis(4000), 3);

        tokio::time::sleep(Duration::from_millis(12_001)).await;
        assert_eq!(drain(&mut rx).len(), 3);
        assert!(timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_restart_leaves_one_schedule() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::from_millis(4000), 1);
        timer.restart(Duration::from_millis(4000), 2);

        tokio::time::sleep(Duration::from_millis(4001)).await;
        assert_eq!(drain(&mut rx), vec![CarouselEvent::AutoAdvance { generation: 2 }]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::from_millis(4000), 1);
        timer.cancel();
        assert!(!timer.is_pending());

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::from_millis(4000), 1);
        drop(timer);

        tokio::time::sleep(Duration::from_millis(9000)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::from_millis(4000), 1);
        assert!(timer.is_pending());

        drop(rx);
        tokio::time::sleep(Duration::from_millis(4001)).await;
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_schedules_nothing() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        timer.restart(Duration::ZERO, 1);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_manual_timer_keeps_one_schedule() {
        let mut timer = ManualTimer::new();
        timer.restart(Duration::from_millis(4000), 1);
        timer.restart(Duration::from_millis(4000), 2);
        assert!(timer.is_pending());
        assert_eq!(timer.generation(), Some(2));
        assert_eq!(timer.restarts(), 2);
        assert_eq!(timer.cancels(), 1);
    }
}
