use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// What a frame step wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Finish,
}

/// A repeating `requestAnimationFrame` task with an explicit stop handle.
///
/// Each frame the step receives the frame timestamp in milliseconds. The
/// pending frame lives in `pending`; dropping it cancels the browser
/// callback, which is how `stop` works.
#[derive(Clone)]
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let frame_loop = Self {
            pending: Rc::new(RefCell::new(None)),
            stopped: Rc::new(Cell::new(false)),
        };
        frame_loop.schedule(Rc::new(RefCell::new(step)));
        frame_loop
    }

    fn schedule<F>(&self, step: Rc<RefCell<F>>)
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        if self.stopped.get() {
            return;
        }
        let next = self.clone();
        let frame = request_animation_frame(move |timestamp| {
            next.pending.borrow_mut().take();
            if next.stopped.get() {
                return;
            }
            let control = (step.borrow_mut())(timestamp);
            match control {
                FrameControl::Continue => next.schedule(step),
                FrameControl::Finish => next.stopped.set(true),
            }
        });
        *self.pending.borrow_mut() = Some(frame);
    }

    /// Cancels the pending frame. Idempotent, and safe from inside a step.
    pub fn stop(&self) {
        self.stopped.set(true);
        self.pending.borrow_mut().take();
    }
}
