use crate::domain::ScenePosition;
use serde::{Deserialize, Serialize};

/// Reserved id of the live user marker. Persisted devices use positive ids and temporary,
/// not yet persisted devices negative ones.
pub const USER_DEVICE_ID: i64 = 0;
pub const USER_DEVICE_NAME: &str = "user";

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub role: DeviceRole,
    pub active: bool,
    pub position: ScenePosition,
}

impl Device {
    pub fn is_temporary(&self) -> bool {
        self.id < 0
    }

    pub fn apply(&mut self, patch: DevicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceRole {
    Receiver,
    Desired,
    Jammer,
    User,
}

impl DeviceRole {
    pub fn sidebar_rank(&self) -> u8 {
        match self {
            DeviceRole::Receiver => 1,
            DeviceRole::Desired => 2,
            DeviceRole::Jammer => 3,
            DeviceRole::User => 4,
        }
    }
}

/// A partial device update. Fields left as `None` keep their current value.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DevicePatch {
    pub id: i64,
    pub name: Option<String>,
    pub role: Option<DeviceRole>,
    pub active: Option<bool>,
    pub position: Option<ScenePosition>,
}

impl DevicePatch {
    pub fn new(id: i64) -> Self {
        DevicePatch { id, ..Default::default() }
    }

    pub fn user_marker(position: ScenePosition) -> Self {
        DevicePatch {
            id: USER_DEVICE_ID,
            name: Some(USER_DEVICE_NAME.to_string()),
            role: Some(DeviceRole::User),
            active: Some(true),
            position: Some(position),
        }
    }

    pub fn position(mut self, position: ScenePosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn into_device(self) -> Device {
        Device {
            id: self.id,
            name: self.name.unwrap_or_else(|| format!("device-{}", self.id)),
            role: self.role.unwrap_or(DeviceRole::User),
            active: self.active.unwrap_or(true),
            position: self.position.unwrap_or_default(),
        }
    }
}
