use crate::domain::device::{Device, DevicePatch};

#[derive(Debug)]
pub enum Event {
    DiscoveredDevices(Vec<Device>),
    UpsertDevice(DevicePatch),
    RemoveDevice(i64),
}
