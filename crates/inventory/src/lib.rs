//! Inventory domain module.
//!
//! Quantity accounting for hardware stock, implemented as plain in-memory
//! values (no IO, no storage). Every kind embeds a [`Resource`], which in turn
//! embeds a [`Ledger`]; the [`Inventoried`] trait exposes the shared
//! operations.

pub mod any;
pub mod cpu;
pub mod ledger;
pub mod resource;
pub mod storage;

pub use any::AnyResource;
pub use cpu::Cpu;
pub use ledger::{Ledger, LedgerOp, LedgerSnapshot, Transition};
pub use resource::{Inventoried, Resource, ResourceKind};
pub use storage::{HDD_RPM_CEILING, HDD_RPM_FLOOR, Hdd, Ssd, Storage};
