//! Resolve IP addresses and host names to the cloud-provider region that owns them.
//!
//! Range datasets published by several providers, each in its own format, are parsed into
//! `(region, CIDR)` pairs, aggregated into per-region records and flattened into a containment
//! index. A [RegionResolver] answers lookups against the current [RegionSnapshot] held by a
//! [SnapshotStore].
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! let config = ipregions::Config::new();
//! let loader = ipregions::FileLoader::new(config.dataset_root());
//! let snapshot = ipregions::load_snapshot(&config, &loader)?;
//!
//! let resolver = ipregions::RegionResolver::new(Arc::new(ipregions::SnapshotStore::new(snapshot)));
//! println!("{}", resolver.resolve("www.example.com")?);
//! # Ok::<(), ipregions::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::alias::AliasTable;
pub use crate::core::builder::build_regions;
pub use crate::core::config::{Config, ConfigBuilder, DatasetSource};
pub use crate::core::errors::{Error, Result};
pub use crate::core::index::{ContainmentIndex, IndexEntry};
pub use crate::core::loader::{load_snapshot, DatasetLoader, FileLoader};
pub use crate::core::provider::Provider;
pub use crate::core::region_record::RegionRecord;
pub use crate::core::resolver::{
    HostResolver, RegionResolver, Resolution, SystemHostResolver, REGION_NOT_FOUND,
};
pub use crate::core::snapshot::{RegionSnapshot, SnapshotStore};
pub use crate::core::source::{RangeEntry, RangeSource};
pub use crate::core::subnet::Subnet;

/*--------------------------------------------------------------------------------------
  Range Parsers
--------------------------------------------------------------------------------------*/

pub mod parsers {
    pub use crate::core::json::parse as parse_object_list;
    pub use crate::core::lines::parse as parse_lines;
    pub use crate::core::markup::parse as parse_markup;
}
