mod transform;

pub use transform::{EARTH_RADIUS_M, rotate, transform};
