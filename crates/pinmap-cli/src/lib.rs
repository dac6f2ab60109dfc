//! pinmap-cli
//! ==========
//!
//! Command-line interface for the `pinmap-core` pin-map fixture.
//!
//! This crate primarily provides a binary (`pinmap-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! pinmap-cli --help
//! pinmap-cli stats
//! pinmap-cli search paris
//! pinmap-cli goto zuri
//! pinmap-cli tile-url street 3 4 2
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`pinmap-core`] crate directly.
//!
//! [`pinmap-core`]: https://docs.rs/pinmap-core

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
