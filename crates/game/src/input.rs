use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const RUN = 1 << 0;
        const CROUCH = 1 << 1;
        const JUMP = 1 << 2;
    }
}

/// One tick's worth of input, snapshotted by the host before the update.
///
/// `pressed` and `released` carry the edges observed since the previous
/// tick; a host that saw a key go down and back up within a single tick
/// sets the button in both.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Raw look delta in device units.
    pub look: Vec2,
    /// Raw movement axes, strafe on x and forward on y, each in -1..=1.
    pub movement: Vec2,
    pub held: Buttons,
    pub pressed: Buttons,
    pub released: Buttons,
}

impl InputFrame {
    pub fn is_held(&self, buttons: Buttons) -> bool {
        self.held.contains(buttons)
    }

    pub fn just_pressed(&self, buttons: Buttons) -> bool {
        self.pressed.contains(buttons)
    }

    pub fn just_released(&self, buttons: Buttons) -> bool {
        self.released.contains(buttons)
    }
}

/// Derives press/release edges from successive held-button sets.
#[derive(Debug, Default)]
pub struct ButtonTracker {
    previous: Buttons,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&mut self, look: Vec2, movement: Vec2, held: Buttons) -> InputFrame {
        let pressed = held & !self.previous;
        let released = self.previous & !held;
        self.previous = held;

        InputFrame {
            look,
            movement,
            held,
            pressed,
            released,
        }
    }
}
