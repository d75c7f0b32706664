use core::fmt;

use serde::Serialize;

use hwstock_core::{Label, ValidationResult, require};

use crate::resource::{Inventoried, Resource, ResourceKind, impl_summary_display};

/// Processor stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cpu {
    #[serde(flatten)]
    resource: Resource,
    cores: u64,
    socket: Label,
    power_watts: u64,
}

impl Cpu {
    pub fn new(
        resource: Resource,
        cores: i64,
        socket: impl fmt::Display,
        power_watts: i64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            resource,
            cores: require("cores", cores)?,
            socket: Label::new(socket),
            power_watts: require("power_watts", power_watts)?,
        })
    }

    pub fn cores(&self) -> u64 {
        self.cores
    }

    pub fn socket(&self) -> &str {
        self.socket.as_str()
    }

    pub fn power_watts(&self) -> u64 {
        self.power_watts
    }
}

impl Inventoried for Cpu {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Cpu
    }

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

impl_summary_display!(Cpu);
