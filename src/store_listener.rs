use crate::device_rules::{count_active, sorted_for_sidebar};
use crate::store::StoreSnapshot;
use tokio::sync::watch::Receiver;
use tracing::{debug, info, instrument};

#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<StoreSnapshot>) -> usize {
    let mut updates = 0;
    while rx.changed().await.is_ok() {
        let snapshot: StoreSnapshot = rx.borrow_and_update().clone();
        updates += 1;

        let counts = count_active(snapshot.devices.values());
        info!(tx = counts.tx, rx = counts.rx, "📡 Scene holds {} device(s)", snapshot.devices.len());
        for device in sorted_for_sidebar(snapshot.devices.values()) {
            debug!(device_id = device.id, "  {:?} '{}' at {}", device.role, device.name, device.position);
        }
    }
    updates
}
