//! Tile-source configuration for map engines.
//!
//! A [`TileSourceConfig`] holds the properties of a tile source (descriptor URL,
//! tile URL templates, attribution, zoom bounds, TMS flag) and turns them into a
//! [`TileSourceOptions`] mapping with [`TileSourceConfig::options`].
//!
//! ## Modules
//! - [`source`]: the property bag, the option keys and values, and [`SourceInit`]
//! - [`types`]: [`TileScheme`]
//! - [`tilejson`]: building a config from a TileJSON document
//! - [`config`]: YAML files listing named sources

pub mod config;
pub mod source;
pub mod tilejson;
pub mod types;

pub use config::Config;
pub use source::*;
pub use types::*;
