//! Drag gesture state machine shared by both map surfaces.
//!
//! At most one drag session exists process-wide; the session is tagged with
//! the surface it started on, so a stale "active surface" reference cannot
//! outlive the drag. Wheel zoom is handled elsewhere and is deliberately
//! independent of this machine: it targets the surface the wheel event fired
//! over, while a drag targets the surface that received pointer-down.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    Tactical,
    Heat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Dragging {
        surface: SurfaceId,
        last_x: f64,
        last_y: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureController {
    state: GestureState,
}

impl Default for GestureController {
    fn default() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }
}

impl GestureController {
    /// Idle -> Dragging. A pointer-down during an ongoing drag retargets the
    /// session, matching a missed mouseup followed by a fresh press.
    pub fn pointer_down(&mut self, surface: SurfaceId, x: f64, y: f64) {
        self.state = GestureState::Dragging {
            surface,
            last_x: x,
            last_y: y,
        };
    }

    /// Dragging self-loop. Returns the surface to pan and the incremental
    /// delta since the previous move; deltas accumulate from the last
    /// recorded position, not the original down-position. No-op while Idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<(SurfaceId, f64, f64)> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                surface,
                last_x,
                last_y,
            } => {
                let dx = x - last_x;
                let dy = y - last_y;
                self.state = GestureState::Dragging {
                    surface,
                    last_x: x,
                    last_y: y,
                };
                Some((surface, dx, dy))
            }
        }
    }

    /// Dragging -> Idle. Wired to a window-level mouseup so releasing the
    /// pointer outside the canvas still terminates the session.
    pub fn pointer_up(&mut self) {
        self.state = GestureState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_while_idle_is_a_no_op() {
        let mut g = GestureController::default();
        assert_eq!(g.pointer_move(50.0, 50.0), None);
        assert!(!g.is_dragging());
    }

    #[test]
    fn deltas_accumulate_incrementally() {
        let mut g = GestureController::default();
        g.pointer_down(SurfaceId::Tactical, 10.0, 10.0);
        assert_eq!(
            g.pointer_move(14.0, 7.0),
            Some((SurfaceId::Tactical, 4.0, -3.0))
        );
        // Second delta is relative to (14, 7), not (10, 10).
        assert_eq!(
            g.pointer_move(15.0, 7.0),
            Some((SurfaceId::Tactical, 1.0, 0.0))
        );
    }

    #[test]
    fn session_stays_on_the_surface_it_started_on() {
        let mut g = GestureController::default();
        g.pointer_down(SurfaceId::Heat, 0.0, 0.0);
        let (surface, _, _) = g.pointer_move(5.0, 5.0).unwrap();
        assert_eq!(surface, SurfaceId::Heat);
    }

    #[test]
    fn drag_on_one_surface_leaves_the_other_viewport_untouched() {
        use crate::state::Viewport;
        let mut g = GestureController::default();
        let mut tactical = Viewport::default();
        let mut heat = Viewport::default();
        g.pointer_down(SurfaceId::Tactical, 100.0, 100.0);
        for (x, y) in [(110.0, 95.0), (130.0, 90.0)] {
            if let Some((surface, dx, dy)) = g.pointer_move(x, y) {
                match surface {
                    SurfaceId::Tactical => tactical.pan_by(dx, dy),
                    SurfaceId::Heat => heat.pan_by(dx, dy),
                }
            }
        }
        assert_eq!(tactical.offset_x, 30.0);
        assert_eq!(tactical.offset_y, -10.0);
        assert_eq!(heat, Viewport::default());
    }

    #[test]
    fn pointer_up_anywhere_returns_to_idle() {
        let mut g = GestureController::default();
        g.pointer_down(SurfaceId::Tactical, 0.0, 0.0);
        // Pointer left the canvas and was released over the document.
        g.pointer_move(-200.0, -200.0);
        g.pointer_up();
        assert!(!g.is_dragging());
        assert_eq!(g.pointer_move(1.0, 1.0), None);
    }

    #[test]
    fn down_during_drag_retargets_the_session() {
        let mut g = GestureController::default();
        g.pointer_down(SurfaceId::Tactical, 0.0, 0.0);
        g.pointer_down(SurfaceId::Heat, 20.0, 20.0);
        assert_eq!(
            g.pointer_move(21.0, 20.0),
            Some((SurfaceId::Heat, 1.0, 0.0))
        );
    }
}
