//! Strategies command implementation.

use landgrab::strategy::Registry;

/// Execute the strategies command.
pub(crate) fn execute() {
    let registry = Registry::standard();
    let width = registry
        .entries()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0);

    println!("Available strategies:");
    for entry in registry.entries() {
        println!("  {:width$}  {}", entry.name, entry.description);
    }
}
