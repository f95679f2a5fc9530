//! Mount lifetimes, unsubscribe handles and cancellable repeating tasks.
//!
//! Every listener, observer and loop the engine starts is represented by a
//! [`Subscription`] or a [`RepeatingTask`]. Hosts collect them in a
//! [`Disposer`] and release everything exactly once on teardown.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// `Uninitialized -> Running -> TornDown`. There is no way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Running,
    TornDown,
}

/// Shared lifecycle cell checked by callbacks that may fire after a
/// cancellation was requested.
#[derive(Clone, Debug, Default)]
pub struct AliveFlag(Rc<Cell<Lifecycle>>);

impl AliveFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Lifecycle {
        self.0.get()
    }

    /// Returns false unless this call performed `Uninitialized -> Running`.
    pub fn start(&self) -> bool {
        if self.0.get() == Lifecycle::Uninitialized {
            self.0.set(Lifecycle::Running);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.0.get() == Lifecycle::Running
    }

    /// Returns true only for the call that performed the transition.
    pub fn tear_down(&self) -> bool {
        if self.0.get() == Lifecycle::TornDown {
            return false;
        }
        self.0.set(Lifecycle::TornDown);
        true
    }
}

/// Unsubscribe handle. The release closure runs at most once, either through
/// [`Subscription::unsubscribe`] or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Handle for a registration that holds nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Owns every subscription of one mount.
#[derive(Debug, Default)]
pub struct Disposer {
    subs: SmallVec<[Subscription; 8]>,
}

impl Disposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sub: Subscription) {
        self.subs.push(sub);
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Releases every held subscription in registration order. Safe to call
    /// repeatedly.
    pub fn dispose_all(&mut self) {
        let count = self.subs.len();
        for mut sub in self.subs.drain(..) {
            sub.unsubscribe();
        }
        if count > 0 {
            log::debug!("released {} subscriptions", count);
        }
    }
}

impl Extend<Subscription> for Disposer {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.subs.extend(iter);
    }
}

/// A step function invoked repeatedly by a host scheduler (a frame callback
/// or a periodic timer) until cancelled.
///
/// The host calls [`RepeatingTask::fire`] whenever its scheduled callback
/// runs and reschedules only while `fire` returns true. A callback that was
/// already queued when [`RepeatingTask::cancel`] ran still reaches `fire`,
/// which then does nothing.
pub struct RepeatingTask {
    alive: AliveFlag,
    step: RefCell<Box<dyn FnMut(f64)>>,
    fired: Cell<u64>,
}

impl RepeatingTask {
    pub fn new(step: impl FnMut(f64) + 'static) -> Rc<Self> {
        Rc::new(Self {
            alive: AliveFlag::new(),
            step: RefCell::new(Box::new(step)),
            fired: Cell::new(0),
        })
    }

    pub fn start(&self) -> bool {
        self.alive.start()
    }

    /// Runs one step at host time `now_ms`. Returns whether the host should
    /// schedule another call.
    pub fn fire(&self, now_ms: f64) -> bool {
        if !self.alive.is_running() {
            return false;
        }
        // A re-entrant fire from inside the step is dropped.
        if let Ok(mut step) = self.step.try_borrow_mut() {
            step(now_ms);
            self.fired.set(self.fired.get() + 1);
        }
        self.alive.is_running()
    }

    pub fn cancel(&self) {
        if self.alive.tear_down() {
            log::debug!("repeating task cancelled after {} steps", self.fired.get());
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.alive.state()
    }

    pub fn fired(&self) -> u64 {
        self.fired.get()
    }

    pub fn alive(&self) -> AliveFlag {
        self.alive.clone()
    }
}

impl fmt::Debug for RepeatingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatingTask")
            .field("state", &self.state())
            .field("fired", &self.fired())
            .finish()
    }
}
