mod source;
mod tracker;

pub use source::read_fixes;
pub use tracker::{FixRejection, LocationTracker, TrackerReport, TrackerSettings, track};
