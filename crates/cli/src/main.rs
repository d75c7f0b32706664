//! Console walkthrough of the ledger operations on a sample inventory.

mod demo;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    hwstock_observability::init().context("failed to initialize logging")?;

    let mut inventory = demo::sample_inventory().context("failed to build sample inventory")?;
    tracing::info!(resources = inventory.len(), "sample inventory ready");

    let mut stdout = std::io::stdout().lock();
    for resource in &mut inventory {
        demo::walk_through(resource, &mut stdout)?;
    }

    let snapshot = serde_json::to_string_pretty(&inventory)?;
    demo::print_snapshot(&snapshot, &mut stdout)?;
    Ok(())
}
