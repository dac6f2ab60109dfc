//! pinmap-rs — workspace crate re-exporting [`pinmap_core`]; hosts the
//! runnable demos under `demos/`.

pub use pinmap_core::*;
