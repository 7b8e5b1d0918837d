//! Tile-source properties and the options mapping derived from them.

mod definition;
mod init;
mod option_key;
mod option_value;
mod options;
mod tile_source;

pub use definition::{SourceDefinition, SourceKind};
pub use init::SourceInit;
pub use option_key::TileSourceOption;
pub use option_value::TileSourceOptionValue;
pub use options::TileSourceOptions;
pub use tile_source::TileSourceConfig;
