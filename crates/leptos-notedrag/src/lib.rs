//! Leptos NoteDrag Utilities
//!
//! Free-position dragging for absolutely positioned elements using mouse
//! events. Captures the grab offset on mousedown and clamps every move to
//! the container rectangle.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// An in-progress drag: which element is held and where it was grabbed.
///
/// `grab_x`/`grab_y` are the container-relative offsets between the pointer
/// and the element origin at mousedown; they stay fixed for the whole drag.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag {
    pub id: String,
    pub grab_x: f64,
    pub grab_y: f64,
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub active_read: ReadSignal<Option<ActiveDrag>>,
    pub active_write: WriteSignal<Option<ActiveDrag>>,
}

pub fn create_drag_signals() -> DragSignals {
    let (active_read, active_write) = signal(None::<ActiveDrag>);
    DragSignals {
        active_read,
        active_write,
    }
}

/// Begin a drag. `pointer_*` and `origin_*` are container-relative, so the
/// stored grab offset is independent of where the container sits on screen.
pub fn begin_drag(dnd: &DragSignals, id: String, pointer_x: f64, pointer_y: f64, origin_x: f64, origin_y: f64) {
    dnd.active_write.set(Some(ActiveDrag {
        id,
        grab_x: pointer_x - origin_x,
        grab_y: pointer_y - origin_y,
    }));
}

/// End the drag. A save already armed via [`SaveDebounce`] keeps its timer.
pub fn end_drag(dnd: &DragSignals) {
    dnd.active_write.set(None);
}

/// Clamp an element origin to the container rectangle. The lower bound wins
/// when the element is larger than the container.
pub fn clamp_to_board(x: f64, y: f64, elem_w: f64, elem_h: f64, board_w: f64, board_h: f64) -> (f64, f64) {
    let clamped_x = x.min(board_w - elem_w).max(0.0);
    let clamped_y = y.min(board_h - elem_h).max(0.0);
    (clamped_x, clamped_y)
}

/// Next element origin for a pointer position during a drag, clamped to the
/// container.
pub fn drag_position(
    drag: &ActiveDrag,
    pointer_x: f64,
    pointer_y: f64,
    elem_w: f64,
    elem_h: f64,
    board_w: f64,
    board_h: f64,
) -> (f64, f64) {
    clamp_to_board(
        pointer_x - drag.grab_x,
        pointer_y - drag.grab_y,
        elem_w,
        elem_h,
        board_w,
        board_h,
    )
}

/// Pointer position relative to a container rectangle.
pub fn relative_pointer(ev: &web_sys::MouseEvent, rect: &web_sys::DomRect) -> (f64, f64) {
    (
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// True when the event target is a control that should win over dragging.
pub fn is_control_target(ev: &web_sys::MouseEvent) -> bool {
    if let Some(target) = ev.target() {
        if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
            return true;
        }
        if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
            return true;
        }
        if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() {
            return true;
        }
    }
    false
}

/// Cancel-and-rearm wrapper around a timeout: rapid [`schedule`] calls
/// within the delay collapse into the final callback, so a burst of drag
/// moves produces a single persistence call.
///
/// [`schedule`]: SaveDebounce::schedule
#[derive(Clone, Default)]
pub struct SaveDebounce {
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl SaveDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, cancelling any pending firing.
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if let Some(pending) = self.timer.borrow_mut().take() {
            pending.cancel();
        }
        let slot = Rc::clone(&self.timer);
        let timeout = Timeout::new(delay_ms, move || {
            slot.borrow_mut().take();
            callback();
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    /// Drop the pending callback without firing it.
    pub fn cancel(&self) {
        if let Some(pending) = self.timer.borrow_mut().take() {
            pending.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_in_range_positions() {
        assert_eq!(clamp_to_board(50.0, 60.0, 200.0, 200.0, 800.0, 600.0), (50.0, 60.0));
    }

    #[test]
    fn clamp_stops_at_the_far_edges() {
        // 800 - 200 = 600 is the largest legal x
        assert_eq!(clamp_to_board(700.0, 500.0, 200.0, 200.0, 800.0, 600.0), (600.0, 400.0));
    }

    #[test]
    fn clamp_stops_at_zero() {
        assert_eq!(clamp_to_board(-30.0, -1.0, 200.0, 200.0, 800.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn clamp_prefers_zero_for_oversized_elements() {
        // Element wider than the board: the upper bound goes negative and
        // the lower bound must win.
        assert_eq!(clamp_to_board(120.0, 10.0, 900.0, 700.0, 800.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn drag_position_preserves_the_grab_offset() {
        let drag = ActiveDrag {
            id: "n1".into(),
            grab_x: 15.0,
            grab_y: 25.0,
        };
        // Pointer at (115, 125) with a (15, 25) grab puts the origin at (100, 100).
        assert_eq!(
            drag_position(&drag, 115.0, 125.0, 200.0, 200.0, 800.0, 600.0),
            (100.0, 100.0)
        );
    }

    #[test]
    fn drag_position_clamps_fast_moves() {
        let drag = ActiveDrag {
            id: "n1".into(),
            grab_x: 0.0,
            grab_y: 0.0,
        };
        assert_eq!(
            drag_position(&drag, 5_000.0, -40.0, 200.0, 200.0, 800.0, 600.0),
            (600.0, 0.0)
        );
    }

    #[test]
    fn debounce_starts_unarmed_and_cancel_is_idempotent() {
        let saver = SaveDebounce::new();
        assert!(!saver.is_armed());
        saver.cancel();
        saver.cancel();
        assert!(!saver.is_armed());
    }
}
