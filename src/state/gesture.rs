// Gesture session state for the chart pan/zoom adapter.

/// Where in a gesture stream an event sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
}

/// Recognized gesture events, as reported by the recognizer library.
/// Pan deltas are cumulative since the gesture started; pinch scale is
/// relative to the distance between the fingers at the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    DoubleTap,
    Pan { phase: GesturePhase, dx: f64, dy: f64 },
    Pinch { phase: GesturePhase, scale: f64 },
}

/// Operations requested of the pan/zoom controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartCommand {
    ZoomIn,
    ZoomTo(f64),
    PanBy { x: f64, y: f64 },
}

/// Accumulators for the gesture in progress.
#[derive(Clone, Debug)]
pub struct GestureState {
    panned_x: f64,
    panned_y: f64,
    initial_scale: f64,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            panned_x: 0.0,
            panned_y: 0.0,
            initial_scale: 1.0,
        }
    }
}

impl GestureState {
    /// Folds one recognizer event into the session state.
    ///
    /// `current_zoom` is the controller's zoom factor at the time of the
    /// event. It is only read at pinch start, where it becomes the baseline
    /// every later pinch move of the same gesture scales against.
    pub fn on_gesture(&mut self, gesture: Gesture, current_zoom: f64) -> Option<ChartCommand> {
        match gesture {
            Gesture::DoubleTap => Some(ChartCommand::ZoomIn),
            Gesture::Pan {
                phase: GesturePhase::Start,
                ..
            } => {
                self.panned_x = 0.0;
                self.panned_y = 0.0;
                None
            }
            Gesture::Pan {
                phase: GesturePhase::Move,
                dx,
                dy,
            } => {
                // The recognizer reports cumulative deltas; pan only the
                // difference so no movement is ever applied twice.
                let step = ChartCommand::PanBy {
                    x: dx - self.panned_x,
                    y: dy - self.panned_y,
                };
                self.panned_x = dx;
                self.panned_y = dy;
                Some(step)
            }
            Gesture::Pinch {
                phase: GesturePhase::Start,
                scale,
            } => {
                self.initial_scale = current_zoom;
                Some(ChartCommand::ZoomTo(self.initial_scale * scale))
            }
            Gesture::Pinch {
                phase: GesturePhase::Move,
                scale,
            } => Some(ChartCommand::ZoomTo(self.initial_scale * scale)),
        }
    }
}

/// Maps a recognizer event name and payload onto a [`Gesture`].
/// Unknown event names are ignored.
pub fn parse(kind: &str, dx: f64, dy: f64, scale: f64) -> Option<Gesture> {
    match kind {
        "doubletap" => Some(Gesture::DoubleTap),
        "panstart" => Some(Gesture::Pan {
            phase: GesturePhase::Start,
            dx,
            dy,
        }),
        "panmove" => Some(Gesture::Pan {
            phase: GesturePhase::Move,
            dx,
            dy,
        }),
        "pinchstart" => Some(Gesture::Pinch {
            phase: GesturePhase::Start,
            scale,
        }),
        "pinchmove" => Some(Gesture::Pinch {
            phase: GesturePhase::Move,
            scale,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pan(phase: GesturePhase, dx: f64, dy: f64) -> Gesture {
        Gesture::Pan { phase, dx, dy }
    }

    fn pinch(phase: GesturePhase, scale: f64) -> Gesture {
        Gesture::Pinch { phase, scale }
    }

    #[test]
    fn double_tap_zooms_in_each_time() {
        let mut state = GestureState::default();
        assert_eq!(
            state.on_gesture(Gesture::DoubleTap, 1.0),
            Some(ChartCommand::ZoomIn)
        );
        assert_eq!(
            state.on_gesture(Gesture::DoubleTap, 3.0),
            Some(ChartCommand::ZoomIn)
        );
    }

    #[test]
    fn pan_start_resets_and_pans_nothing() {
        let mut state = GestureState::default();
        assert_eq!(state.on_gesture(pan(GesturePhase::Start, 4.0, 4.0), 1.0), None);
    }

    #[test]
    fn pan_moves_apply_only_the_new_movement() {
        let mut state = GestureState::default();
        state.on_gesture(pan(GesturePhase::Start, 0.0, 0.0), 1.0);
        assert_eq!(
            state.on_gesture(pan(GesturePhase::Move, 10.0, 5.0), 1.0),
            Some(ChartCommand::PanBy { x: 10.0, y: 5.0 })
        );
        assert_eq!(
            state.on_gesture(pan(GesturePhase::Move, 15.0, 15.0), 1.0),
            Some(ChartCommand::PanBy { x: 5.0, y: 10.0 })
        );
    }

    #[test]
    fn incremental_pans_sum_to_the_last_cumulative_delta() {
        let mut state = GestureState::default();
        state.on_gesture(pan(GesturePhase::Start, 0.0, 0.0), 1.0);
        let cumulative = [(3.0, 1.0), (7.0, 2.0), (12.0, 9.0), (11.0, 14.0)];
        let mut sum = (0.0, 0.0);
        for (dx, dy) in cumulative {
            match state.on_gesture(pan(GesturePhase::Move, dx, dy), 1.0) {
                Some(ChartCommand::PanBy { x, y }) => {
                    sum.0 += x;
                    sum.1 += y;
                }
                other => panic!("pan move must pan, got {other:?}"),
            }
        }
        assert_eq!(sum, (11.0, 14.0));
    }

    #[test]
    fn a_new_pan_starts_from_a_fresh_baseline() {
        let mut state = GestureState::default();
        state.on_gesture(pan(GesturePhase::Start, 0.0, 0.0), 1.0);
        state.on_gesture(pan(GesturePhase::Move, 40.0, -8.0), 1.0);
        state.on_gesture(pan(GesturePhase::Start, 0.0, 0.0), 1.0);
        assert_eq!(
            state.on_gesture(pan(GesturePhase::Move, 3.0, 4.0), 1.0),
            Some(ChartCommand::PanBy { x: 3.0, y: 4.0 })
        );
    }

    #[test]
    fn pan_move_without_a_start_uses_the_zero_baseline() {
        let mut state = GestureState::default();
        assert_eq!(
            state.on_gesture(pan(GesturePhase::Move, 6.0, 2.0), 1.0),
            Some(ChartCommand::PanBy { x: 6.0, y: 2.0 })
        );
    }

    #[test]
    fn pinch_zoom_stays_relative_to_the_gesture_start() {
        let mut state = GestureState::default();
        assert_eq!(
            state.on_gesture(pinch(GesturePhase::Start, 1.0), 1.0),
            Some(ChartCommand::ZoomTo(1.0))
        );
        assert_eq!(
            state.on_gesture(pinch(GesturePhase::Move, 2.0), 2.0),
            Some(ChartCommand::ZoomTo(2.0))
        );
        // Spreading further to 1.5x must not compound on the 2.0x applied
        // above: the baseline stays the zoom captured at pinch start.
        assert_eq!(
            state.on_gesture(pinch(GesturePhase::Move, 1.5), 2.0),
            Some(ChartCommand::ZoomTo(1.5))
        );
    }

    #[test]
    fn each_pinch_captures_its_own_baseline() {
        let mut state = GestureState::default();
        state.on_gesture(pinch(GesturePhase::Start, 1.0), 1.0);
        state.on_gesture(pinch(GesturePhase::Move, 2.0), 2.0);
        assert_eq!(
            state.on_gesture(pinch(GesturePhase::Start, 1.0), 4.0),
            Some(ChartCommand::ZoomTo(4.0))
        );
        assert_eq!(
            state.on_gesture(pinch(GesturePhase::Move, 0.5), 4.0),
            Some(ChartCommand::ZoomTo(2.0))
        );
    }

    #[test]
    fn parse_maps_the_recognizer_event_names() {
        assert_eq!(parse("doubletap", 0.0, 0.0, 1.0), Some(Gesture::DoubleTap));
        assert_eq!(
            parse("panstart", 1.0, 2.0, 1.0),
            Some(pan(GesturePhase::Start, 1.0, 2.0))
        );
        assert_eq!(
            parse("panmove", 3.0, 4.0, 1.0),
            Some(pan(GesturePhase::Move, 3.0, 4.0))
        );
        assert_eq!(
            parse("pinchstart", 0.0, 0.0, 1.5),
            Some(pinch(GesturePhase::Start, 1.5))
        );
        assert_eq!(
            parse("pinchmove", 0.0, 0.0, 0.75),
            Some(pinch(GesturePhase::Move, 0.75))
        );
        assert_eq!(parse("press", 0.0, 0.0, 1.0), None);
    }
}
