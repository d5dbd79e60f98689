use egui::Pos2;

/// Side of one grid cell on the editing matrix, in points. Painting
/// granularity is always one cell, whatever scale a surface displays at.
pub const CELL_SIZE: f32 = 16.0;

/// Maps a pointer position to the grid cell under it, given the matrix
/// widget's origin. Positions left of, above, or past the grid yield
/// `None`; the check is per-axis, so a pointer right of the last column
/// does not wrap onto the next row.
pub fn cell_at(origin: Pos2, pos: Pos2, width: usize, height: usize) -> Option<(usize, usize)> {
    let dx = ((pos.x - origin.x) / CELL_SIZE).floor() as i64;
    let dy = ((pos.y - origin.y) / CELL_SIZE).floor() as i64;
    if dx < 0 || dy < 0 || dx >= width as i64 || dy >= height as i64 {
        return None;
    }
    Some((dx as usize, dy as usize))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Normalized pointer input: mouse buttons and touches arrive here as the
/// same four phases.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerEvent {
    Down(PointerButton),
    Move,
    Up,
    Cancel,
}

/// What the editor should do in response to a pointer event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrokeAction {
    Paint,
    Sample,
}

/// The two-state freehand machine. A primary press starts a stroke and
/// paints immediately; every move while drawing paints the cell under the
/// pointer (no interpolation, fast strokes may skip cells); release or
/// cancel ends the stroke. The secondary button samples without touching
/// the stroke state.
#[derive(Default)]
pub struct PointerState {
    drawing: bool,
}

impl PointerState {
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn on_event(&mut self, event: PointerEvent) -> Option<StrokeAction> {
        match event {
            PointerEvent::Down(PointerButton::Primary) => {
                self.drawing = true;
                Some(StrokeAction::Paint)
            }
            PointerEvent::Down(PointerButton::Secondary) => Some(StrokeAction::Sample),
            PointerEvent::Move if self.drawing => Some(StrokeAction::Paint),
            PointerEvent::Move => None,
            PointerEvent::Up | PointerEvent::Cancel => {
                self.drawing = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn maps_positions_to_cells() {
        let origin = pos2(100.0, 50.0);
        assert_eq!(cell_at(origin, pos2(100.0, 50.0), 32, 32), Some((0, 0)));
        assert_eq!(cell_at(origin, pos2(115.9, 65.9), 32, 32), Some((0, 0)));
        assert_eq!(cell_at(origin, pos2(116.0, 50.0), 32, 32), Some((1, 0)));
        assert_eq!(cell_at(origin, pos2(100.0 + 31.0 * 16.0, 50.0 + 31.0 * 16.0), 32, 32), Some((31, 31)));
    }

    #[test]
    fn positions_outside_the_grid_are_dropped() {
        let origin = pos2(0.0, 0.0);
        // Left / above.
        assert_eq!(cell_at(origin, pos2(-1.0, 5.0), 32, 32), None);
        assert_eq!(cell_at(origin, pos2(5.0, -1.0), 32, 32), None);
        // Past the last column must not wrap onto the next row.
        assert_eq!(cell_at(origin, pos2(32.0 * 16.0, 5.0), 32, 32), None);
        // Past the last row.
        assert_eq!(cell_at(origin, pos2(5.0, 32.0 * 16.0), 32, 32), None);
    }

    #[test]
    fn primary_press_starts_a_stroke_and_paints() {
        let mut state = PointerState::default();
        assert_eq!(
            state.on_event(PointerEvent::Down(PointerButton::Primary)),
            Some(StrokeAction::Paint)
        );
        assert!(state.is_drawing());
        assert_eq!(state.on_event(PointerEvent::Move), Some(StrokeAction::Paint));
    }

    #[test]
    fn moves_while_idle_do_nothing() {
        let mut state = PointerState::default();
        assert_eq!(state.on_event(PointerEvent::Move), None);
        assert!(!state.is_drawing());
    }

    #[test]
    fn release_and_cancel_end_the_stroke_without_painting() {
        for finish in [PointerEvent::Up, PointerEvent::Cancel] {
            let mut state = PointerState::default();
            state.on_event(PointerEvent::Down(PointerButton::Primary));
            assert_eq!(state.on_event(finish), None);
            assert!(!state.is_drawing());
            assert_eq!(state.on_event(PointerEvent::Move), None);
        }
    }

    #[test]
    fn secondary_button_samples_without_changing_state() {
        let mut state = PointerState::default();
        assert_eq!(
            state.on_event(PointerEvent::Down(PointerButton::Secondary)),
            Some(StrokeAction::Sample)
        );
        assert!(!state.is_drawing());

        state.on_event(PointerEvent::Down(PointerButton::Primary));
        assert_eq!(
            state.on_event(PointerEvent::Down(PointerButton::Secondary)),
            Some(StrokeAction::Sample)
        );
        assert!(state.is_drawing());
    }
}
