pub mod app_config;
pub mod device_rules;
pub mod domain;
pub mod geo;
mod geo_origin_deserializer;
pub mod location;
pub mod placement;
pub mod store;
pub mod store_listener;
