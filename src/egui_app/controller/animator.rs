//! Per-frame reconciliation of the drawn viewport toward the store's target.
//!
//! The animator owns the visual viewport. Each frame it reads the target,
//! normalizes the frame time against a 60 fps baseline and applies
//! frame-rate independent exponential smoothing at the rate selected by the
//! target's motion tag. Once within the settle epsilons it snaps and stops
//! scheduling frames until the viewport slice changes again.

use super::*;

/// Receives the transform to draw with, outside the widget tree.
pub trait TransformSink {
    fn apply_transform(&mut self, viewport: Viewport);
}

/// Sink that keeps the latest transform for the painter to read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceTransform {
    current: Viewport,
}

impl SurfaceTransform {
    pub fn current(&self) -> Viewport {
        self.current
    }
}

impl TransformSink for SurfaceTransform {
    fn apply_transform(&mut self, viewport: Viewport) {
        self.current = viewport;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing scheduled; no transform written.
    Idle,
    /// Moved toward the target; another frame is needed.
    Animating,
    /// Snapped onto the target; the loop stops.
    Settled,
}

pub struct ViewportAnimator<S: TransformSink = SurfaceTransform> {
    store: SharedStore,
    sink: S,
    visual: Viewport,
    watcher: SliceWatcher,
    last_frame_ms: Option<f64>,
    scheduled: bool,
}

impl<S: TransformSink> ViewportAnimator<S> {
    /// Seed the visual viewport from the current target and draw it once.
    pub fn new(store: SharedStore, mut sink: S) -> Self {
        let (visual, watcher) = {
            let store = store.borrow();
            (
                store.target_viewport(),
                SliceWatcher::new(&store, Slice::Viewport),
            )
        };
        sink.apply_transform(visual);
        Self {
            store,
            sink,
            visual,
            watcher,
            last_frame_ms: None,
            scheduled: false,
        }
    }

    pub fn visual(&self) -> Viewport {
        self.visual
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Schedule frames if the target changed since the last check.
    pub fn sync(&mut self) -> bool {
        let changed = self.watcher.changed(&self.store.borrow());
        if changed && !self.scheduled {
            self.scheduled = true;
            self.last_frame_ms = None;
        }
        self.scheduled
    }

    /// Advance one frame at `now_ms`. The first frame after scheduling uses `dt = 1`.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.scheduled {
            return FrameOutcome::Idle;
        }
        let (target, motion, tuning) = {
            let store = self.store.borrow();
            (store.target_viewport(), store.motion(), *store.tuning())
        };
        let dt = match self.last_frame_ms {
            Some(last) => {
                let elapsed = ((now_ms - last) / f64::from(tuning.reference_frame_ms)) as f32;
                elapsed.clamp(0.0, tuning.max_frame_dt)
            }
            None => 1.0,
        };
        self.last_frame_ms = Some(now_ms);
        let lerp = smoothing_factor(motion.rate(&tuning), dt);
        self.visual.scale += (target.scale - self.visual.scale) * lerp;
        self.visual.pan_x += (target.pan_x - self.visual.pan_x) * lerp;
        self.visual.pan_y += (target.pan_y - self.visual.pan_y) * lerp;

        let outcome = if self.visual.settled_on(&target, &tuning) {
            self.visual = target;
            self.scheduled = false;
            self.last_frame_ms = None;
            FrameOutcome::Settled
        } else {
            FrameOutcome::Animating
        };
        self.sink.apply_transform(self.visual);
        outcome
    }

    /// Sync then advance; returns whether another frame should be requested.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.sync();
        matches!(self.frame(now_ms), FrameOutcome::Animating)
    }

    /// Stop the frame loop, e.g. when the map view goes away.
    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.last_frame_ms = None;
    }
}

/// `1 - (1 - rate)^dt`, with a full-rate step always landing on the target.
fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    if rate >= 1.0 {
        return 1.0;
    }
    (1.0 - (1.0 - rate).powf(dt)).clamp(0.0, 1.0)
}
