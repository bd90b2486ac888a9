/// East-North-Up displacement in meters relative to a [`GeoOrigin`](crate::domain::GeoOrigin).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct LocalOffset {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl LocalOffset {
    pub fn new(east: f64, north: f64, up: f64) -> Self {
        LocalOffset { east, north, up }
    }

    pub fn horizontal_distance(&self) -> f64 {
        self.east.hypot(self.north)
    }
}
