#[cfg(test)]
pub(crate) mod virtual_clock;

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A timer-driven piece of view state.
///
/// Each step is scheduled as a one-shot timer after `next_delay`, so an
/// animation is idle between frames and never busy-loops.
pub trait Animation: Send + 'static {
    type Frame: Clone + Send + 'static;

    /// Delay until the next step, or `None` once the animation is finished.
    fn next_delay(&self) -> Option<Duration>;

    /// Apply one step. Returns false when the visible frame did not change.
    fn step(&mut self) -> bool;

    fn frame(&self) -> Self::Frame;
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Source of one-shot timers.
pub trait Scheduler: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

type Listener<F> = Arc<dyn Fn(&F) + Send + Sync>;

struct Inner<A: Animation, H> {
    animation: Option<A>,
    pending: Option<H>,
    // bumped on every start/cancel so callbacks from an older run are ignored
    generation: u64,
    cancelled: bool,
    listeners: Vec<Listener<A::Frame>>,
}

/// Drives an [`Animation`] with a [`Scheduler`] and pushes each new frame to
/// its listeners.
///
/// Listeners are called without the internal lock held, so they may call
/// back into the animator (e.g. to cancel it).
pub struct Animator<A: Animation, S: Scheduler> {
    inner: Arc<Mutex<Inner<A, S::Handle>>>,
    scheduler: Arc<S>,
}

impl<A: Animation, S: Scheduler> Clone for Animator<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            scheduler: Arc::clone(&self.scheduler),
        }
    }
}

impl<A: Animation, S: Scheduler> Animator<A, S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                animation: None,
                pending: None,
                generation: 0,
                cancelled: false,
                listeners: Vec::new(),
            })),
            scheduler: Arc::new(scheduler),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&A::Frame) + Send + Sync + 'static) {
        self.lock().listeners.push(Arc::new(listener));
    }

    /// Replace any running animation with `animation`, emit its first frame
    /// immediately and schedule the next step.
    pub fn start(&self, animation: A) {
        let (generation, frame, listeners) = {
            let mut inner = self.lock();
            if let Some(handle) = inner.pending.take() {
                self.scheduler.cancel(handle);
            }
            inner.generation += 1;
            inner.cancelled = false;
            let frame = animation.frame();
            inner.animation = Some(animation);
            (inner.generation, frame, inner.listeners.clone())
        };
        for listener in &listeners {
            listener(&frame);
        }
        self.schedule_next(generation);
    }

    /// Stop the animation. The pending timer is cleared and no further frames
    /// are emitted. Calling this more than once is harmless.
    pub fn cancel(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.cancelled = true;
        if let Some(handle) = inner.pending.take() {
            log::debug!("cancelling pending animation step");
            self.scheduler.cancel(handle);
        }
    }

    /// Mutate the current animation in place and re-emit its frame. Does
    /// nothing once the animator has been cancelled.
    pub fn update(&self, f: impl FnOnce(&mut A)) {
        let (frame, listeners) = {
            let mut inner = self.lock();
            let inner = &mut *inner;
            if inner.cancelled {
                return;
            }
            let Some(animation) = inner.animation.as_mut() else {
                return;
            };
            f(animation);
            (animation.frame(), inner.listeners.clone())
        };
        for listener in &listeners {
            listener(&frame);
        }
    }

    pub fn frame(&self) -> Option<A::Frame> {
        self.lock().animation.as_ref().map(Animation::frame)
    }

    /// Whether a step is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.lock().pending.is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<A, S::Handle>> {
        self.inner
            .lock()
            .expect("should be able to lock animator state")
    }

    fn schedule_next(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation != generation {
            return;
        }
        let Some(delay) = inner.animation.as_ref().and_then(Animation::next_delay) else {
            return;
        };
        let this = self.clone();
        let handle = self
            .scheduler
            .schedule(delay, Box::new(move || this.fire(generation)));
        inner.pending = Some(handle);
    }

    fn fire(&self, generation: u64) {
        let emit = {
            let mut inner = self.lock();
            let inner = &mut *inner;
            if inner.generation != generation {
                return;
            }
            inner.pending = None;
            let Some(animation) = inner.animation.as_mut() else {
                return;
            };
            if animation.step() {
                Some((animation.frame(), inner.listeners.clone()))
            } else {
                None
            }
        };
        if let Some((frame, listeners)) = emit {
            for listener in &listeners {
                listener(&frame);
            }
        }
        self.schedule_next(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::virtual_clock::VirtualClock;
    use super::*;

    /// Counts up to `limit`, one step every 10ms.
    struct Ticks {
        count: u32,
        limit: u32,
    }

    impl Animation for Ticks {
        type Frame = u32;

        fn next_delay(&self) -> Option<Duration> {
            (self.count < self.limit).then_some(Duration::from_millis(10))
        }

        fn step(&mut self) -> bool {
            self.count += 1;
            true
        }

        fn frame(&self) -> u32 {
            self.count
        }
    }

    fn recorder(animator: &Animator<Ticks, VirtualClock>) -> Arc<Mutex<Vec<u32>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        animator.subscribe(move |frame| sink.lock().unwrap().push(*frame));
        seen
    }

    #[test]
    fn test_runs_to_completion() {
        let clock = VirtualClock::new();
        let animator = Animator::new(clock.clone());
        let seen = recorder(&animator);

        animator.start(Ticks { count: 0, limit: 3 });
        assert_eq!(*seen.lock().unwrap(), vec![0]);
        assert!(animator.is_running());

        clock.advance(Duration::from_millis(100));
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3]);
        assert!(!animator.is_running());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel_stops_emission() {
        let clock = VirtualClock::new();
        let animator = Animator::new(clock.clone());
        let seen = recorder(&animator);

        animator.start(Ticks { count: 0, limit: 10 });
        clock.advance(Duration::from_millis(25));
        animator.cancel();
        animator.cancel();
        clock.advance(Duration::from_secs(1));

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(animator.frame(), Some(2));
    }

    #[test]
    fn test_restart_discards_old_timer() {
        let clock = VirtualClock::new();
        let animator = Animator::new(clock.clone());
        let seen = recorder(&animator);

        animator.start(Ticks { count: 0, limit: 10 });
        clock.advance(Duration::from_millis(15));
        animator.start(Ticks { count: 100, limit: 101 });
        clock.advance(Duration::from_secs(1));

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 100, 101]);
    }

    #[test]
    fn test_listener_can_cancel() {
        let clock = VirtualClock::new();
        let animator = Animator::new(clock.clone());
        let seen = recorder(&animator);
        let handle = animator.clone();
        animator.subscribe(move |frame| {
            if *frame == 2 {
                handle.cancel();
            }
        });

        animator.start(Ticks { count: 0, limit: 10 });
        clock.advance(Duration::from_secs(1));

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_update_reemits_frame() {
        let clock = VirtualClock::new();
        let animator = Animator::new(clock.clone());
        let seen = recorder(&animator);

        animator.update(|t| t.count = 50);
        assert!(seen.lock().unwrap().is_empty());

        animator.start(Ticks { count: 0, limit: 10 });
        animator.update(|t| t.count = 7);
        assert_eq!(*seen.lock().unwrap(), vec![0, 7]);
    }

    #[test]
    fn test_update_after_cancel_is_silent() {
        let clock = VirtualClock::new();
        let animator = Animator::new(clock.clone());
        let seen = recorder(&animator);

        animator.start(Ticks { count: 0, limit: 10 });
        clock.advance(Duration::from_millis(15));
        animator.cancel();
        animator.update(|t| t.count = 99);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
        assert_eq!(animator.frame(), Some(1));
        assert_eq!(clock.pending(), 0);

        animator.start(Ticks { count: 0, limit: 10 });
        animator.update(|t| t.count = 5);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 0, 5]);
    }
}
