use core::fmt;

use serde::{Deserialize, Serialize};

use hwstock_core::{Label, ValidationResult};

use crate::ledger::{Ledger, LedgerOp, LedgerSnapshot, Transition};

/// Classification of an inventory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Resource,
    Cpu,
    Storage,
    Hdd,
    Ssd,
}

impl ResourceKind {
    /// Name used in the textual forms, e.g. `CPU(...)`.
    pub fn display_name(self) -> &'static str {
        match self {
            ResourceKind::Resource => "Resource",
            ResourceKind::Cpu => "CPU",
            ResourceKind::Storage => "Storage",
            ResourceKind::Hdd => "HDD",
            ResourceKind::Ssd => "SSD",
        }
    }

    /// Lowercased kind name.
    pub fn category(self) -> &'static str {
        match self {
            ResourceKind::Resource => "resource",
            ResourceKind::Cpu => "cpu",
            ResourceKind::Storage => "storage",
            ResourceKind::Hdd => "hdd",
            ResourceKind::Ssd => "ssd",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Generic inventory resource: identification plus a [`Ledger`].
///
/// Specialized kinds embed a `Resource` and add descriptive attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    name: Label,
    manufacturer: Label,
    #[serde(flatten)]
    ledger: Ledger,
}

impl Resource {
    pub fn new(
        name: impl fmt::Display,
        manufacturer: impl fmt::Display,
        total: i64,
        allocated: i64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            name: Label::new(name),
            manufacturer: Label::new(manufacturer),
            ledger: Ledger::new(total, allocated)?,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}

/// Capability shared by every inventory kind: access to the embedded
/// [`Resource`] and, through it, the ledger operations.
///
/// Implementors only supply [`Inventoried::kind`] and the two accessors.
pub trait Inventoried {
    fn kind(&self) -> ResourceKind;

    fn resource(&self) -> &Resource;

    fn resource_mut(&mut self) -> &mut Resource;

    fn name(&self) -> &str {
        self.resource().name.as_str()
    }

    fn manufacturer(&self) -> &str {
        self.resource().manufacturer.as_str()
    }

    fn total(&self) -> u64 {
        self.resource().ledger.total()
    }

    fn allocated(&self) -> u64 {
        self.resource().ledger.allocated()
    }

    fn snapshot(&self) -> LedgerSnapshot {
        self.resource().ledger.snapshot()
    }

    fn category(&self) -> &'static str {
        self.kind().category()
    }

    fn claim(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Claim, n)
    }

    fn freeup(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Freeup, n)
    }

    fn died(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Died, n)
    }

    fn purchased(&mut self, n: i64) -> Transition {
        self.apply(LedgerOp::Purchased, n)
    }

    /// Run a ledger operation inside a span naming this record.
    fn apply(&mut self, op: LedgerOp, n: i64) -> Transition {
        let span = tracing::info_span!(
            "resource",
            kind = self.kind().display_name(),
            name = %self.name()
        );
        let _enter = span.enter();
        self.resource_mut().ledger.apply(op, n)
    }

    /// Short form, `Kind(name)`.
    fn summary(&self) -> String {
        format!("{}({})", self.kind(), self.name())
    }

    /// Long form listing every ledger-relevant field.
    fn detail(&self) -> String {
        format!(
            "{}(name={}, manufacturer={}, total={}, allocated={})",
            self.kind(),
            self.name(),
            self.manufacturer(),
            self.total(),
            self.allocated()
        )
    }
}

impl Inventoried for Resource {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Resource
    }

    fn resource(&self) -> &Resource {
        self
    }

    fn resource_mut(&mut self) -> &mut Resource {
        self
    }
}

/// Implements `Display` as the short form for an [`Inventoried`] type.
macro_rules! impl_summary_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl core::fmt::Display for $t {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(&$crate::resource::Inventoried::summary(self))
                }
            }
        )+
    };
}

pub(crate) use impl_summary_display;

impl_summary_display!(Resource);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resource {
        Resource::new("  Intel Core i9-9900k ", "Intel\n", 50, 20).unwrap()
    }

    #[test]
    fn text_fields_are_trimmed() {
        let r = sample();
        assert_eq!(r.name(), "Intel Core i9-9900k");
        assert_eq!(r.manufacturer(), "Intel");
    }

    #[test]
    fn construction_propagates_validation_errors() {
        assert!(Resource::new("x", "y", -1, 0).is_err());
        assert!(Resource::new("x", "y", 0, -1).is_err());
    }

    #[test]
    fn category_is_lowercased_kind() {
        assert_eq!(sample().category(), "resource");
        assert_eq!(ResourceKind::Hdd.category(), "hdd");
        assert_eq!(ResourceKind::Cpu.display_name(), "CPU");
    }

    #[test]
    fn string_forms() {
        let r = sample();
        assert_eq!(r.to_string(), "Resource(Intel Core i9-9900k)");
        assert_eq!(
            r.detail(),
            "Resource(name=Intel Core i9-9900k, manufacturer=Intel, total=50, allocated=20)"
        );
    }

    #[test]
    fn trait_operations_mutate_the_embedded_ledger() {
        let mut r = sample();
        assert!(r.freeup(19).is_applied());
        assert_eq!(r.snapshot(), LedgerSnapshot { total: 69, allocated: 1 });
        assert!(r.claim(100).is_rejected());
        assert_eq!(r.ledger().total(), 69);
    }

    #[test]
    fn serializes_with_flattened_counters() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Intel Core i9-9900k",
                "manufacturer": "Intel",
                "total": 50,
                "allocated": 20
            })
        );
    }
}
