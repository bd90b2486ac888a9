use crate::domain::GeoOrigin;
use crate::placement::ScenePlacement;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    scene: Scene,
    tracker: Tracker,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("SIMWORLD").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
    fix_buffer_size: usize,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }

    pub fn fix_buffer_size(&self) -> usize {
        self.fix_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Scene {
    origin: GeoOrigin,
    #[serde(default)]
    rotation_degrees: f64,
    scale: f64,
    min_marker_height: f64,
}

impl Scene {
    pub fn origin(&self) -> &GeoOrigin {
        &self.origin
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn placement(&self) -> ScenePlacement {
        ScenePlacement::new(self.scale, self.min_marker_height)
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracker {
    #[serde(with = "humantime_serde")]
    stale_after: Duration,
    #[serde(default)]
    max_accuracy_m: Option<f64>,
}

impl Tracker {
    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    pub fn max_accuracy_m(&self) -> Option<f64> {
        self.max_accuracy_m
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    store_buffer_size: 1,
                    fix_buffer_size: 1,
                },
                scene: Scene {
                    origin: GeoOrigin::new(24.942349, 121.367164),
                    rotation_degrees: 0.0,
                    scale: 1.0,
                    min_marker_height: 10.0,
                },
                tracker: Tracker {
                    stale_after: Duration::from_secs(30),
                    max_accuracy_m: None,
                },
            },
        }
    }

    pub fn rotation_degrees(mut self, rotation_degrees: f64) -> Self {
        self.config.scene.rotation_degrees = rotation_degrees;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.config.scene.scale = scale;
        self
    }

    pub fn max_accuracy_m(mut self, max_accuracy_m: f64) -> Self {
        self.config.tracker.max_accuracy_m = Some(max_accuracy_m);
        self
    }

    pub fn stale_after(mut self, stale_after: Duration) -> Self {
        self.config.tracker.stale_after = stale_after;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
