//! Render scheduling primitives.
//!
//! Each surface owns a `FrameLoop` and the mount effect owns every
//! `IntervalTask`/`TimeoutTask`; the effect's cleanup closure cancels them
//! all so no orphaned callback can touch state after the view is gone.

pub mod heat;
pub mod tactical;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// A continuously rescheduled animation-frame task. `cancel` both revokes
/// the pending frame and sets a flag, so a callback that was already queued
/// when cancellation happened draws nothing.
///
/// The tick closure holds the `Rc` cell that stores it (it must, to
/// reschedule itself), so `cancel` also empties the cell to break the cycle
/// and let the closure drop.
pub struct FrameLoop {
    window: Window,
    raf_id: Rc<RefCell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(window: &Window, draw: Rc<dyn Fn()>) -> Self {
        let raf_id = Rc::new(RefCell::new(None));
        let cancelled = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let raf_id = raf_id.clone();
            let cancelled = cancelled.clone();
            let tick_cell = tick.clone();
            let window = window.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if cancelled.get() {
                    return;
                }
                draw();
                if let Some(cb) = tick_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                *raf_id.borrow_mut() = Some(id);
            }
        }
        Self {
            window: window.clone(),
            raf_id,
            cancelled,
            tick,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.raf_id.borrow_mut().take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

/// A periodic timer whose lifetime is tied to the view that created it.
pub struct IntervalTask {
    window: Window,
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl IntervalTask {
    pub fn start(window: &Window, interval_ms: i32, f: impl FnMut() + 'static) -> Option<Self> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                interval_ms,
            )
            .ok()?;
        Some(Self {
            window: window.clone(),
            id,
            _cb: cb,
        })
    }

    pub fn cancel(&self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// One-shot delayed task, same ownership rules as `IntervalTask`.
pub struct TimeoutTask {
    window: Window,
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl TimeoutTask {
    pub fn start(window: &Window, delay_ms: i32, f: impl FnMut() + 'static) -> Option<Self> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            window: window.clone(),
            id,
            _cb: cb,
        })
    }

    pub fn cancel(&self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}
