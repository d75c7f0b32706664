//! Storage stock and its drive specializations.

use core::fmt;

use serde::Serialize;

use hwstock_core::{Label, ValidationError, ValidationResult, require};

use crate::resource::{Inventoried, Resource, ResourceKind, impl_summary_display};

/// Lowest supported spindle speed (exclusive).
pub const HDD_RPM_FLOOR: u64 = 2000;
/// Highest supported spindle speed (exclusive).
pub const HDD_RPM_CEILING: u64 = 10300;

/// Generic storage stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Storage {
    #[serde(flatten)]
    resource: Resource,
    capacity_gb: u64,
}

impl Storage {
    pub fn new(resource: Resource, capacity_gb: i64) -> ValidationResult<Self> {
        Ok(Self {
            resource,
            capacity_gb: require("capacity_gb", capacity_gb)?,
        })
    }

    pub fn capacity_gb(&self) -> u64 {
        self.capacity_gb
    }
}

impl Inventoried for Storage {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Storage
    }

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

/// Spinning disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hdd {
    #[serde(flatten)]
    storage: Storage,
    size: Label,
    rpm: u64,
}

impl Hdd {
    /// `rpm` must lie strictly between [`HDD_RPM_FLOOR`] and [`HDD_RPM_CEILING`].
    pub fn new(storage: Storage, size: impl fmt::Display, rpm: i64) -> ValidationResult<Self> {
        let rpm = require("rpm", rpm)?;
        if !(HDD_RPM_FLOOR < rpm && rpm < HDD_RPM_CEILING) {
            let err = ValidationError::unavailable(format!("HDD with {rpm} rpm"));
            tracing::warn!(field = "rpm", rpm, error = %err, "rejected value at construction");
            return Err(err);
        }
        Ok(Self {
            storage,
            size: Label::new(size),
            rpm,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn capacity_gb(&self) -> u64 {
        self.storage.capacity_gb
    }

    pub fn size(&self) -> &str {
        self.size.as_str()
    }

    pub fn rpm(&self) -> u64 {
        self.rpm
    }
}

impl Inventoried for Hdd {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Hdd
    }

    fn resource(&self) -> &Resource {
        &self.storage.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.storage.resource
    }
}

/// Solid-state drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ssd {
    #[serde(flatten)]
    storage: Storage,
    interface: Label,
}

impl Ssd {
    pub fn new(storage: Storage, interface: impl fmt::Display) -> Self {
        Self {
            storage,
            interface: Label::new(interface),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn capacity_gb(&self) -> u64 {
        self.storage.capacity_gb
    }

    pub fn interface(&self) -> &str {
        self.interface.as_str()
    }
}

impl Inventoried for Ssd {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Ssd
    }

    fn resource(&self) -> &Resource {
        &self.storage.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.storage.resource
    }
}

impl_summary_display!(Storage, Hdd, Ssd);
