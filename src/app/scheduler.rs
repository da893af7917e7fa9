use std::time::Duration;

use leptos::prelude::*;

use crate::animate::{Animation, Animator, Scheduler, Task};

/// Schedules animation steps with `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        set_timeout_with_handle(task, delay)
            .map_err(|e| log::error!("Couldn't schedule animation step: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// Schedules animation steps on the next `requestAnimationFrame`, ignoring
/// the requested delay. The browser pauses these in background tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameScheduler;

impl Scheduler for FrameScheduler {
    type Handle = Option<AnimationFrameRequestHandle>;

    fn schedule(&self, _delay: Duration, task: Task) -> Self::Handle {
        request_animation_frame_with_handle(task)
            .map_err(|e| log::error!("Couldn't request animation frame: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.cancel();
        }
    }
}

/// Create an animator whose frames land in a signal. The animator is
/// cancelled when the calling component is unmounted; starting it is left to
/// the caller, typically from an effect so it only runs in the browser.
pub fn use_animator<A>(initial: A::Frame) -> (ReadSignal<A::Frame>, Animator<A, BrowserScheduler>)
where
    A: Animation,
    A::Frame: Sync,
{
    use_animator_with(initial, BrowserScheduler)
}

/// [`use_animator`] with an explicit scheduler.
pub fn use_animator_with<A, S>(initial: A::Frame, scheduler: S) -> (ReadSignal<A::Frame>, Animator<A, S>)
where
    A: Animation,
    A::Frame: Sync,
    S: Scheduler,
{
    let (frame, set_frame) = signal(initial);
    let animator = Animator::new(scheduler);
    animator.subscribe(move |f: &A::Frame| {
        _ = set_frame.try_set(f.clone());
    });

    let on_unmount = animator.clone();
    on_cleanup(move || on_unmount.cancel());

    (frame, animator)
}
