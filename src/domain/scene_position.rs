use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Position in scene units: X points east, Y up and Z north.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        ScenePosition { x, y, z }
    }
}

impl Display for ScenePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
