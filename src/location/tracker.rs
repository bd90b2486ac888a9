use crate::app_config::AppConfig;
use crate::domain::device::DevicePatch;
use crate::domain::events::Event;
use crate::domain::{CoordinateError, GeoOrigin, LocationFix, ScenePosition};
use crate::geo::transform;
use crate::placement::ScenePlacement;
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Debug)]
pub struct TrackerSettings {
    pub origin: GeoOrigin,
    pub rotation_degrees: f64,
    pub placement: ScenePlacement,
    pub stale_after: Duration,
    pub max_accuracy_m: Option<f64>,
}

impl From<&AppConfig> for TrackerSettings {
    fn from(config: &AppConfig) -> Self {
        TrackerSettings {
            origin: *config.scene().origin(),
            rotation_degrees: config.scene().rotation_degrees(),
            placement: config.scene().placement(),
            stale_after: config.tracker().stale_after(),
            max_accuracy_m: config.tracker().max_accuracy_m(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerReport {
    pub accepted: usize,
    pub rejected: usize,
    pub stale_gaps: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum FixRejection {
    #[error(transparent)]
    Invalid(#[from] CoordinateError),
    #[error("accuracy of {accuracy} m exceeds the limit of {limit} m")]
    Inaccurate { accuracy: f64, limit: f64 },
    #[error("fix from {timestamp} is older than the last accepted fix from {last}")]
    OutOfOrder { timestamp: DateTime<Utc>, last: DateTime<Utc> },
}

/// Turns location fixes into user marker positions. Fixes are validated here, at ingestion,
/// and a fix older than the last accepted one is dropped.
#[derive(Debug)]
pub struct LocationTracker {
    settings: TrackerSettings,
    last_timestamp: Option<DateTime<Utc>>,
}

impl LocationTracker {
    pub fn new(settings: TrackerSettings) -> Self {
        LocationTracker {
            settings,
            last_timestamp: None,
        }
    }

    pub fn accept(&mut self, fix: &LocationFix) -> Result<ScenePosition, FixRejection> {
        let sample = fix.to_sample()?;

        if let (Some(accuracy), Some(limit)) = (fix.accuracy, self.settings.max_accuracy_m) {
            if accuracy > limit {
                return Err(FixRejection::Inaccurate { accuracy, limit });
            }
        }

        if let (Some(timestamp), Some(last)) = (fix.timestamp, self.last_timestamp) {
            if timestamp < last {
                return Err(FixRejection::OutOfOrder { timestamp, last });
            }
        }
        if fix.timestamp.is_some() {
            self.last_timestamp = fix.timestamp;
        }

        let offset = transform(&sample, &self.settings.origin, self.settings.rotation_degrees);
        debug!(east = offset.east, north = offset.north, up = offset.up, "📍 Local offset");
        Ok(self.settings.placement.place(&offset))
    }
}

#[instrument(skip_all)]
pub async fn track(mut rx: Receiver<LocationFix>, tx: Sender<Event>, settings: TrackerSettings) -> TrackerReport {
    let stale_after = settings.stale_after;
    let mut tracker = LocationTracker::new(settings);
    let mut report = TrackerReport::default();
    let mut stale = false;

    loop {
        match timeout(stale_after, rx.recv()).await {
            Ok(Some(fix)) => {
                stale = false;
                match tracker.accept(&fix) {
                    Ok(position) => {
                        if tx.send(Event::UpsertDevice(DevicePatch::user_marker(position))).await.is_err() {
                            warn!("⚠️ Store is gone, stopping location tracker");
                            break;
                        }
                        report.accepted += 1;
                        info!(accuracy = fix.accuracy, "📍 User marker moved to {}", position);
                    }
                    Err(e) => {
                        report.rejected += 1;
                        warn!(latitude = fix.latitude, longitude = fix.longitude, "⚠️ Skipped location fix: {}", e);
                    }
                }
            }
            Ok(None) => {
                info!("🔴 Location feed closed");
                break;
            }
            Err(_) if !stale => {
                warn!("⏳ No location fix for {:?}, marker may be stale", stale_after);
                report.stale_gaps += 1;
                stale = true;
            }
            Err(_) => {}
        }
    }

    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        stale_gaps = report.stale_gaps,
        "📍 Location tracker stopped"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::device::{DeviceRole, USER_DEVICE_ID};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::fmt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_log::test;
    use tokio::sync::mpsc;
    use tracing::field::{Field, Visit};
    use tracing::{Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn settings() -> TrackerSettings {
        TrackerSettings::from(&AppConfigBuilder::new().max_accuracy_m(50.0).build())
    }

    fn fix_at(latitude: f64, longitude: f64, second: u32) -> LocationFix {
        LocationFix {
            timestamp: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, second).unwrap()),
            ..LocationFix::new(latitude, longitude)
        }
    }

    #[test]
    fn accept_places_a_fix_north_of_the_origin() {
        let mut tracker = LocationTracker::new(settings());

        let position = tracker.accept(&LocationFix::new(24.943349, 121.367164)).unwrap();

        assert!(position.x.abs() < 0.01);
        assert!((position.z - 111.19).abs() < 1.0);
        assert_eq!(position.y, 10.0);
    }

    #[test]
    fn accept_applies_rotation_and_scale_from_the_configuration() {
        let config = AppConfigBuilder::new().rotation_degrees(90.0).scale(2.0).build();
        let mut tracker = LocationTracker::new(TrackerSettings::from(&config));

        let position = tracker.accept(&LocationFix::new(24.943349, 121.367164)).unwrap();

        // North rotated counter-clockwise by 90 degrees points west.
        assert!((position.x + 2.0 * 111.19).abs() < 2.0);
        assert!(position.z.abs() < 0.01);
    }

    #[test]
    fn accept_rejects_invalid_coordinates() {
        let mut tracker = LocationTracker::new(settings());

        let result = tracker.accept(&LocationFix::new(24.9, 200.0));

        assert!(matches!(result, Err(FixRejection::Invalid(_))));
    }

    #[test]
    fn accept_rejects_inaccurate_fixes() {
        let mut tracker = LocationTracker::new(settings());
        let fix = LocationFix {
            accuracy: Some(75.0),
            ..LocationFix::new(24.9, 121.3)
        };

        assert_eq!(tracker.accept(&fix), Err(FixRejection::Inaccurate { accuracy: 75.0, limit: 50.0 }));
    }

    #[test]
    fn accept_drops_fixes_older_than_the_last_accepted_one() {
        let mut tracker = LocationTracker::new(settings());

        assert!(tracker.accept(&fix_at(24.9424, 121.3672, 10)).is_ok());
        assert!(matches!(tracker.accept(&fix_at(24.9425, 121.3672, 5)), Err(FixRejection::OutOfOrder { .. })));
        assert!(tracker.accept(&fix_at(24.9426, 121.3672, 10)).is_ok());
        assert!(tracker.accept(&LocationFix::new(24.9427, 121.3672)).is_ok());
    }

    #[test(tokio::test)]
    async fn track_upserts_the_user_marker_for_each_valid_fix() {
        let (fix_tx, fix_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);

        fix_tx.send(fix_at(24.943349, 121.367164, 1)).await.unwrap();
        fix_tx.send(LocationFix::new(95.0, 121.367164)).await.unwrap();
        fix_tx.send(fix_at(24.942349, 121.367164, 2)).await.unwrap();
        drop(fix_tx);

        let report = track(fix_rx, event_tx, settings()).await;

        assert_eq!(
            report,
            TrackerReport {
                accepted: 2,
                rejected: 1,
                stale_gaps: 0
            }
        );

        let mut positions = Vec::new();
        while let Some(event) = event_rx.recv().await {
            match event {
                Event::UpsertDevice(patch) => {
                    assert_eq!(patch.id, USER_DEVICE_ID);
                    assert_eq!(patch.role, Some(DeviceRole::User));
                    positions.push(patch.position.unwrap());
                }
                other => panic!("Expected an upsert event, got {:?}", other),
            }
        }
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1], ScenePosition::new(0.0, 10.0, 0.0));
    }

    #[derive(Clone, Default)]
    struct StaleWarnings(Arc<AtomicUsize>);

    impl StaleWarnings {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: Subscriber> Layer<S> for StaleWarnings {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() != Level::WARN {
                return;
            }
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            if visitor.0.contains("No location fix") {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn track_warns_once_per_quiet_period() {
        let warnings = StaleWarnings::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(warnings.clone()));

        let config = AppConfigBuilder::new().stale_after(Duration::from_millis(10)).build();
        let (fix_tx, fix_rx) = mpsc::channel(1);
        let (event_tx, _event_rx) = mpsc::channel(4);
        let handle = tokio::spawn(track(fix_rx, event_tx, TrackerSettings::from(&config)));

        // Several timeout periods pass without a fix.
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(warnings.count(), 1);

        fix_tx.send(LocationFix::new(24.942349, 121.367164)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(warnings.count(), 2);

        drop(fix_tx);
        let report = handle.await.unwrap();
        assert_eq!(
            report,
            TrackerReport {
                accepted: 1,
                rejected: 0,
                stale_gaps: 2
            }
        );
    }

    #[test(tokio::test)]
    async fn track_stops_when_the_store_is_gone() {
        let (fix_tx, fix_rx) = mpsc::channel(2);
        let (event_tx, event_rx) = mpsc::channel(1);
        drop(event_rx);

        fix_tx.send(LocationFix::new(24.942349, 121.367164)).await.unwrap();

        let report = track(fix_rx, event_tx, settings()).await;
        assert_eq!(report, TrackerReport::default());
    }
}
