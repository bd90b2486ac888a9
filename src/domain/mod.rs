pub mod coordinate;
pub mod device;
pub mod events;
mod geo_origin;
mod geo_sample;
mod local_offset;
mod location_fix;
mod scene_position;

pub use coordinate::CoordinateError;
pub use geo_origin::GeoOrigin;
pub use geo_sample::GeoSample;
pub use local_offset::LocalOffset;
pub use location_fix::LocationFix;
pub use scene_position::ScenePosition;
