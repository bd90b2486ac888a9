use crate::domain::{LocalOffset, ScenePosition};

pub const DEFAULT_MIN_HEIGHT: f64 = 10.0;

/// Converts local offsets into scene units. The height floor is applied here, after scaling,
/// and never inside the geodetic transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePlacement {
    scale: f64,
    min_height: f64,
}

impl Default for ScenePlacement {
    fn default() -> Self {
        ScenePlacement {
            scale: 1.0,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }
}

impl ScenePlacement {
    pub fn new(scale: f64, min_height: f64) -> Self {
        ScenePlacement { scale, min_height }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    pub fn place(&self, offset: &LocalOffset) -> ScenePosition {
        ScenePosition {
            x: offset.east * self.scale,
            y: self.clamp_height(offset.up * self.scale),
            z: offset.north * self.scale,
        }
    }

    pub fn clamp_height(&self, height: f64) -> f64 {
        height.max(self.min_height)
    }
}
