//! One-shot timers for the simulated delays in the drawers
//!
//! Flows never sleep. They hand a [`TimerToken`] to a [`Scheduler`] and get
//! the token back through their `on_timer` method once the delay elapses.
//! Each token carries the epoch of the flow session that armed it, so a
//! token that outlives a reset is recognised as stale and ignored.
//!
//! Two schedulers are provided:
//! - [`BrowserScheduler`] drives real `setTimeout` timers via `gloo-timers`.
//! - [`ManualScheduler`] is a fake clock that only moves when told to, for tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// What a timer was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Simulated competitor analysis after the trial form is submitted
    Analysis,
    /// Simulated onboarding hand-off before redirecting to the app
    Handoff,
    /// Simulated demo request submission
    DemoSubmission,
    /// Simulated sign-in before redirecting to the app
    Login,
}

/// Delivered back to the flow when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub epoch: u64,
    pub purpose: TimerPurpose,
}

impl TimerToken {
    pub fn new(epoch: u64, purpose: TimerPurpose) -> Self {
        Self { epoch, purpose }
    }
}

/// Source of one-shot delays
pub trait Scheduler {
    /// Owned handle for a pending timer
    type Handle;

    /// Arrange for `token` to be delivered after `delay`
    fn schedule(&self, delay: Duration, token: TimerToken) -> Self::Handle;

    /// Cancel a pending timer. Cancelling a timer that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Holds at most one pending timer for a flow, plus the flow's epoch.
///
/// Disarming bumps the epoch, so tokens from the previous session no longer
/// match even if the underlying timer could not be cancelled in time.
pub struct TimerSlot<S: Scheduler> {
    epoch: u64,
    pending: Option<(TimerPurpose, S::Handle)>,
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            pending: None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Purpose of the pending timer, if any
    pub fn pending_purpose(&self) -> Option<TimerPurpose> {
        self.pending.as_ref().map(|(purpose, _)| *purpose)
    }

    /// Start a timer, replacing (and cancelling) any pending one
    pub fn arm(&mut self, scheduler: &S, delay: Duration, purpose: TimerPurpose) {
        if let Some((_, handle)) = self.pending.take() {
            scheduler.cancel(handle);
        }
        let handle = scheduler.schedule(delay, TimerToken::new(self.epoch, purpose));
        self.pending = Some((purpose, handle));
    }

    /// Cancel the pending timer and start a new epoch
    pub fn disarm(&mut self, scheduler: &S) {
        if let Some((_, handle)) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.epoch += 1;
    }

    /// Accept a delivered token if it belongs to the pending timer.
    ///
    /// Returns `false` for stale tokens (older epoch) and for tokens whose
    /// purpose does not match what is pending.
    pub fn accept(&mut self, token: TimerToken) -> bool {
        let matches = token.epoch == self.epoch && self.pending_purpose() == Some(token.purpose);
        if matches {
            self.pending = None;
        }
        matches
    }
}

impl<S: Scheduler> Default for TimerSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake clock for driving flows synchronously.
///
/// Clones share the same clock, so a test can keep one clone and pass
/// another to the flow.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

struct PendingTimer {
    id: u64,
    due: Duration,
    token: TimerToken,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on this clock
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers that have not fired or been cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward and return the tokens of every timer that came
    /// due, in firing order
    pub fn advance(&self, by: Duration) -> Vec<TimerToken> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            clock.pending.drain(..).partition(|timer| timer.due <= now);
        clock.pending = waiting;

        due.sort_by_key(|timer| (timer.due, timer.id));
        due.into_iter().map(|timer| timer.token).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, token: TimerToken) -> u64 {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.pending.push(PendingTimer { id, due, token });
        id
    }

    fn cancel(&self, handle: u64) {
        self.clock
            .borrow_mut()
            .pending
            .retain(|timer| timer.id != handle);
    }
}

/// Scheduler backed by browser `setTimeout`.
///
/// Fired tokens are handed to `sink` on a fresh task, after the timer
/// callback has returned, so the sink may freely drop the timer's handle.
/// During server rendering nothing is scheduled.
#[derive(Clone)]
pub struct BrowserScheduler {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    sink: Rc<dyn Fn(TimerToken)>,
}

impl BrowserScheduler {
    pub fn new(sink: impl Fn(TimerToken) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }
}

impl Scheduler for BrowserScheduler {
    #[cfg(feature = "hydrate")]
    type Handle = gloo_timers::callback::Timeout;
    #[cfg(not(feature = "hydrate"))]
    type Handle = ();

    fn schedule(&self, delay: Duration, token: TimerToken) -> Self::Handle {
        #[cfg(feature = "hydrate")]
        {
            let sink = Rc::clone(&self.sink);
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || {
                wasm_bindgen_futures::spawn_local(async move { sink(token) });
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, token);
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        #[cfg(feature = "hydrate")]
        {
            handle.cancel();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_manual_scheduler_fires_in_due_order() {
        let clock = ManualScheduler::new();
        let late = TimerToken::new(0, TimerPurpose::Handoff);
        let early = TimerToken::new(0, TimerPurpose::Analysis);

        clock.schedule(MS * 1500, late);
        clock.schedule(MS * 1000, early);

        assert!(clock.advance(MS * 999).is_empty());
        assert_eq!(clock.advance(MS * 600), vec![early, late]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), MS * 1599);
    }

    #[test]
    fn test_manual_scheduler_cancel() {
        let clock = ManualScheduler::new();
        let handle = clock.schedule(MS * 10, TimerToken::new(0, TimerPurpose::Login));
        assert_eq!(clock.pending(), 1);

        clock.cancel(handle);

        assert_eq!(clock.pending(), 0);
        assert!(clock.advance(MS * 100).is_empty());
    }

    #[test]
    fn test_manual_scheduler_clones_share_clock() {
        let clock = ManualScheduler::new();
        let other = clock.clone();
        other.schedule(MS * 5, TimerToken::new(3, TimerPurpose::DemoSubmission));

        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.advance(MS * 5).len(), 1);
        assert_eq!(other.pending(), 0);
    }

    #[test]
    fn test_slot_accepts_matching_token_once() {
        let clock = ManualScheduler::new();
        let mut slot: TimerSlot<ManualScheduler> = TimerSlot::new();
        slot.arm(&clock, MS * 20, TimerPurpose::Analysis);

        let fired = clock.advance(MS * 20);
        assert_eq!(fired.len(), 1);
        assert!(slot.accept(fired[0]));
        assert!(!slot.is_armed());
        assert!(!slot.accept(fired[0]));
    }

    #[test]
    fn test_slot_rejects_stale_epoch() {
        let clock = ManualScheduler::new();
        let mut slot: TimerSlot<ManualScheduler> = TimerSlot::new();
        slot.arm(&clock, MS * 20, TimerPurpose::Analysis);
        let stale = TimerToken::new(slot.epoch(), TimerPurpose::Analysis);

        slot.disarm(&clock);
        assert_eq!(clock.pending(), 0);
        assert_eq!(slot.epoch(), 1);

        slot.arm(&clock, MS * 20, TimerPurpose::Analysis);
        assert!(!slot.accept(stale));
        assert!(slot.is_armed());
    }

    #[test]
    fn test_slot_rejects_wrong_purpose() {
        let clock = ManualScheduler::new();
        let mut slot: TimerSlot<ManualScheduler> = TimerSlot::new();
        slot.arm(&clock, MS * 20, TimerPurpose::Handoff);

        assert!(!slot.accept(TimerToken::new(0, TimerPurpose::Analysis)));
        assert!(slot.is_armed());
    }

    #[test]
    fn test_rearm_cancels_previous_timer() {
        let clock = ManualScheduler::new();
        let mut slot: TimerSlot<ManualScheduler> = TimerSlot::new();
        slot.arm(&clock, MS * 20, TimerPurpose::Analysis);
        slot.arm(&clock, MS * 30, TimerPurpose::Handoff);

        assert_eq!(clock.pending(), 1);
        assert_eq!(
            clock.advance(MS * 30),
            vec![TimerToken::new(0, TimerPurpose::Handoff)]
        );
    }
}
