use crate::domain::device::{Device, DeviceRole};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveCounts {
    pub tx: usize,
    pub rx: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum DeviceRuleError {
    #[error("at least one active desired transmitter and one active receiver are required, found {tx} and {rx}")]
    NotOperational { tx: usize, rx: usize },
}

pub fn count_active<'a>(devices: impl IntoIterator<Item = &'a Device>) -> ActiveCounts {
    devices
        .into_iter()
        .filter(|device| device.active)
        .fold(ActiveCounts::default(), |mut counts, device| {
            match device.role {
                DeviceRole::Desired => counts.tx += 1,
                DeviceRole::Receiver => counts.rx += 1,
                DeviceRole::Jammer | DeviceRole::User => {}
            }
            counts
        })
}

pub fn ensure_operational<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Result<ActiveCounts, DeviceRuleError> {
    let counts = count_active(devices);
    if counts.tx < 1 || counts.rx < 1 {
        return Err(DeviceRuleError::NotOperational {
            tx: counts.tx,
            rx: counts.rx,
        });
    }

    Ok(counts)
}

/// Receivers first, then desired transmitters, jammers and the user marker, each group by name.
pub fn sorted_for_sidebar<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Vec<&'a Device> {
    let mut sorted = devices.into_iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| {
        a.role
            .sidebar_rank()
            .cmp(&b.role.sidebar_rank())
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}
