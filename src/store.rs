use crate::device_rules::ensure_operational;
use crate::domain::device::{Device, DevicePatch, USER_DEVICE_ID};
use crate::domain::events::Event;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

pub type DeviceMap = HashMap<i64, Device>;

#[derive(Clone, Debug, Default)]
pub struct StoreSnapshot {
    pub devices: Arc<DeviceMap>,
}

#[derive(Debug)]
pub struct Store {
    devices: DeviceMap,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<StoreSnapshot>,
    notifier_rx: WatchReceiver<StoreSnapshot>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(StoreSnapshot::default());

        Store {
            devices: HashMap::new(),
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<StoreSnapshot> {
        self.notifier_rx.clone()
    }

    /// Copies the devices into a fresh snapshot, so listeners never hold a lock the store
    /// needs to apply the next event.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            devices: Arc::new(self.devices.clone()),
        }
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            let changed = match event {
                Event::DiscoveredDevices(discovered_devices) => self.register(discovered_devices),
                Event::UpsertDevice(patch) => self.upsert(patch),
                Event::RemoveDevice(device_id) => self.remove(device_id),
            };

            if changed {
                self.notifier_tx.send(self.snapshot()).unwrap_or_default();
            }
        }
        debug!("🔵 Event channel closed, store stopped");
    }

    fn register(&mut self, discovered_devices: Vec<Device>) -> bool {
        let num_devices = discovered_devices.len();
        debug!("🔵 Registering {} device(s)...", num_devices);

        self.devices
            .extend(discovered_devices.into_iter().map(|device| (device.id, device)));
        info!("🔵 Registering {} device(s)... OK", num_devices);
        true
    }

    fn upsert(&mut self, patch: DevicePatch) -> bool {
        let Some(device) = self.devices.get(&patch.id) else {
            let device = patch.into_device();
            info!(device_id = device.id, "🟢 Added device '{}' at {}", device.name, device.position);
            self.devices.insert(device.id, device);
            return true;
        };

        let previous_position = device.position;
        let mut updated = device.clone();
        updated.apply(patch);

        if is_checked(&updated) {
            let after = self.devices.values().filter(|d| d.id != updated.id).chain(std::iter::once(&updated));
            if let Err(e) = ensure_operational(after) {
                warn!(device_id = updated.id, "⚠️ Refused to update device '{}': {}", updated.name, e);
                return false;
            }
        }

        debug!(
            device_id = updated.id,
            "🟢 Updated device '{}', moved to {}, was {}", updated.name, updated.position, previous_position
        );
        self.devices.insert(updated.id, updated);
        true
    }

    fn remove(&mut self, device_id: i64) -> bool {
        let Some(device) = self.devices.get(&device_id) else {
            warn!(device_id, "⚠️ Cannot remove unknown device '{}'", device_id);
            return false;
        };

        if is_checked(device) {
            let remaining = self.devices.values().filter(|d| d.id != device_id);
            if let Err(e) = ensure_operational(remaining) {
                warn!(device_id, "⚠️ Refused to remove device '{}': {}", device.name, e);
                return false;
            }
        }

        if let Some(device) = self.devices.remove(&device_id) {
            info!(device_id, "🔴 Removed device '{}'", device.name);
        }
        true
    }
}

/// Persisted devices other than the user marker must leave at least one active desired
/// transmitter and one active receiver behind when they change or go away.
fn is_checked(device: &Device) -> bool {
    !device.is_temporary() && device.id != USER_DEVICE_ID
}
