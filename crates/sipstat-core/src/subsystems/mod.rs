//! Built-in subsystem catalogs.
//!
//! Adding a subsystem means declaring its `StatSpec` table and listing it in
//! `BUILTIN`; no dispatch code changes.

pub mod core;
pub mod net;
pub mod shmem;

use crate::catalog::{Catalog, StatSpec};
use crate::error::Result;
use crate::registry::Registry;

/// `(subsystem, declarations)` for every built-in subsystem.
pub const BUILTIN: &[(&str, &[StatSpec])] = &[
    (self::core::SUBSYSTEM, self::core::STATS),
    (shmem::SUBSYSTEM, shmem::STATS),
    (net::SUBSYSTEM, net::STATS),
];

/// Build the catalog of a built-in subsystem.
pub fn catalog(namespace: &str, subsystem: &str) -> Option<Result<Catalog>> {
    BUILTIN
        .iter()
        .find(|(name, _)| *name == subsystem)
        .map(|(name, specs)| Catalog::new(namespace, name, specs))
}

/// Install every built-in subsystem into `registry`.
pub fn install_defaults(registry: &mut Registry, namespace: &str) -> Result<()> {
    for (subsystem, specs) in BUILTIN {
        registry.install(Catalog::new(namespace, subsystem, specs)?)?;
    }
    Ok(())
}
