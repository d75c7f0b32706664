use serde::Serialize;

use crate::cpu::Cpu;
use crate::resource::{Inventoried, Resource, ResourceKind};
use crate::storage::{Hdd, Ssd, Storage};

/// Any inventory record, for holding mixed kinds side by side.
///
/// Serializes with a `category` tag, e.g. `{"category": "hdd", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum AnyResource {
    Resource(Resource),
    Cpu(Cpu),
    Storage(Storage),
    Hdd(Hdd),
    Ssd(Ssd),
}

macro_rules! dispatch {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            AnyResource::Resource($r) => $body,
            AnyResource::Cpu($r) => $body,
            AnyResource::Storage($r) => $body,
            AnyResource::Hdd($r) => $body,
            AnyResource::Ssd($r) => $body,
        }
    };
}

impl Inventoried for AnyResource {
    fn kind(&self) -> ResourceKind {
        dispatch!(self, r => r.kind())
    }

    fn resource(&self) -> &Resource {
        dispatch!(self, r => r.resource())
    }

    fn resource_mut(&mut self) -> &mut Resource {
        dispatch!(self, r => r.resource_mut())
    }
}

impl core::fmt::Display for AnyResource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        dispatch!(self, r => core::fmt::Display::fmt(r, f))
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for AnyResource {
                fn from(value: $variant) -> Self {
                    AnyResource::$variant(value)
                }
            }
        )+
    };
}

impl_from_kind!(Resource, Cpu, Storage, Hdd, Ssd);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_wrapped_kind() {
        let base = Resource::new("Evo 830i 240GB", "Samsung", 100, 250).unwrap();
        let ssd = Ssd::new(Storage::new(base, 240).unwrap(), "SATA");
        let mut any = AnyResource::from(ssd);

        assert_eq!(any.kind(), ResourceKind::Ssd);
        assert_eq!(any.to_string(), "SSD(Evo 830i 240GB)");
        assert!(any.freeup(19).is_applied());
        assert_eq!((any.total(), any.allocated()), (119, 231));
    }

    #[test]
    fn serializes_with_category_tag() {
        let base = Resource::new("Intel Core i9-9900k", "Intel", 50, 20).unwrap();
        let any = AnyResource::from(Cpu::new(base, 8, "AM4", 94).unwrap());
        let json = serde_json::to_value(&any).unwrap();
        assert_eq!(json["category"], "cpu");
        assert_eq!(json["cores"], 8);
        assert_eq!(json["allocated"], 20);
    }
}
