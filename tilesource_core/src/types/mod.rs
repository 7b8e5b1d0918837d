//! Small value types shared by the source and config modules.

mod tile_scheme;
pub use tile_scheme::*;
