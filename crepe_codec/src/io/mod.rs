mod lengths;
mod reader;
pub mod text;
mod writer;

pub use lengths::*;
pub use reader::*;
pub use writer::*;

/// Upper bound on elements (or bytes) allocated up front from a decoded length.
/// Longer containers still decode; they just grow as they go.
pub const PREALLOC_LIMIT: usize = 4096;
