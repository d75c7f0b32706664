use std::io::Write;

use hwstock_core::ValidationResult;
use hwstock_inventory::{AnyResource, Cpu, Hdd, Inventoried, LedgerOp, Resource, Ssd, Storage};

/// Steps replayed against every sample resource.
pub const TRACE: [(LedgerOp, i64); 7] = [
    (LedgerOp::Freeup, 19),
    (LedgerOp::Died, 30),
    (LedgerOp::Claim, 19),
    (LedgerOp::Purchased, 30),
    (LedgerOp::Claim, 100),
    (LedgerOp::Freeup, 100),
    (LedgerOp::Died, 100),
];

pub fn sample_inventory() -> ValidationResult<Vec<AnyResource>> {
    let cpu = Cpu::new(
        Resource::new("Intel Core i9-9900k", "Intel", 50, 20)?,
        8,
        "AM4",
        94,
    )?;
    let wd = || -> ValidationResult<Storage> {
        Storage::new(Resource::new("Fak0_A320GB_7200", "Western Digital", 50, 20)?, 320)
    };
    let hdd = Hdd::new(wd()?, 2.5, 7200)?;
    let ssd = Ssd::new(
        Storage::new(Resource::new("Evo 830i 240GB", "Samsung", 100, 250)?, 240)?,
        "PCIe NVMe 3.0 x4",
    );

    Ok(vec![cpu.into(), wd()?.into(), hdd.into(), ssd.into()])
}

/// Print the long form, run [`TRACE`], then print both string forms.
pub fn walk_through(resource: &mut AnyResource, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", resource.detail())?;
    writeln!(out, "{}", progress("Start", resource))?;

    for (op, n) in TRACE {
        let transition = resource.apply(op, n);
        if let Some(err) = transition.error() {
            writeln!(out, "{err}")?;
        }
        writeln!(out, "{}", progress(&format!("{op}({n})"), resource))?;
    }

    writeln!(out, "{resource}")?;
    writeln!(out, "{}", resource.detail())?;
    writeln!(out)
}

pub fn print_snapshot(json: &str, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{json}")
}

fn progress(step: &str, resource: &AnyResource) -> String {
    format!(
        "{step}: total: {}, allocated: {}",
        resource.total(),
        resource.allocated()
    )
}
