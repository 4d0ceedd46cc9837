//! Logical actions and the intent flags derived from them.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    MoveBackward,
    RotateLeft,
    RotateRight,
    ToggleOverlay,
}

/// Snapshot consumed by one simulation tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub move_forward: bool,
    pub move_backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Set only on the tick following a fresh press of the toggle key.
    pub overlay_toggle_edge: bool,
}

/// Held-key state fed by press/release events.
///
/// Presses of the toggle key while it is already held are treated as
/// auto-repeat and do not produce another edge.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    toggle_held: bool,
    toggle_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveForward => self.forward = true,
            Action::MoveBackward => self.backward = true,
            Action::RotateLeft => self.left = true,
            Action::RotateRight => self.right = true,
            Action::ToggleOverlay => {
                if !self.toggle_held {
                    self.toggle_held = true;
                    // two presses before a tick cancel out
                    self.toggle_pending = !self.toggle_pending;
                }
            }
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::MoveForward => self.forward = false,
            Action::MoveBackward => self.backward = false,
            Action::RotateLeft => self.left = false,
            Action::RotateRight => self.right = false,
            Action::ToggleOverlay => self.toggle_held = false,
        }
    }

    /// Reads the current flags and consumes any pending toggle edge.
    pub fn take_intent(&mut self) -> InputIntent {
        let intent = InputIntent {
            move_forward: self.forward,
            move_backward: self.backward,
            rotate_left: self.left,
            rotate_right: self.right,
            overlay_toggle_edge: self.toggle_pending,
        };
        self.toggle_pending = false;
        intent
    }
}
