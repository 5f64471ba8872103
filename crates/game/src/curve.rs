use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub t: f32,
    pub value: f32,
}

impl Key {
    pub fn new(t: f32, value: f32) -> Self {
        Self { t, value }
    }
}

/// Piecewise-linear keyframe curve, clamped to its end values outside the
/// key range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    keys: Vec<Key>,
}

impl Curve {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Jump force over time in the air: full force at takeoff decaying to
    /// nothing, so gravity always wins eventually.
    pub fn jump_fall_off() -> Self {
        Self::new(vec![
            Key::new(0.0, 1.0),
            Key::new(0.25, 0.85),
            Key::new(0.6, 0.4),
            Key::new(1.0, 0.0),
        ])
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn is_valid(&self) -> bool {
        !self.keys.is_empty() && self.keys.windows(2).all(|pair| pair[0].t <= pair[1].t)
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };
        if t <= first.t {
            return first.value;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t < b.t {
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return b.value;
                }
                let alpha = (t - a.t) / span;
                return a.value + (b.value - a.value) * alpha;
            }
        }

        self.keys.last().map(|k| k.value).unwrap_or(0.0)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::jump_fall_off()
    }
}
