use crate::core::alias::AliasTable;
use crate::core::builder::build_regions;
use crate::core::errors::Result;
use crate::core::index::ContainmentIndex;
use crate::core::provider::Provider;
use crate::core::region_record::RegionRecord;
use crate::core::source::RangeEntry;
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::sync::Arc;

/*-------------------------------------------------------------------------------------------------
  Region Snapshot
-------------------------------------------------------------------------------------------------*/

/// One immutable build of the region model: the region records, the containment index derived
/// from them, and the alias table used to name them.
#[derive(Clone, Debug)]
pub struct RegionSnapshot {
    regions: Vec<RegionRecord>,
    index: ContainmentIndex,
    aliases: AliasTable,
    loaded_at: DateTime<Utc>,
}

impl Default for RegionSnapshot {
    fn default() -> Self {
        RegionSnapshot::new(Vec::new(), AliasTable::default())
    }
}

impl RegionSnapshot {
    pub fn new(regions: Vec<RegionRecord>, aliases: AliasTable) -> Self {
        let index = ContainmentIndex::from_regions(&regions);
        RegionSnapshot {
            regions,
            index,
            aliases,
            loaded_at: Utc::now(),
        }
    }

    /// Build a snapshot straight from parsed `(provider, region, CIDR)` entries.
    pub fn from_entries<I>(entries: I, aliases: AliasTable) -> Result<Self>
    where
        I: IntoIterator<Item = (Provider, RangeEntry)>,
    {
        Ok(RegionSnapshot::new(build_regions(entries)?, aliases))
    }

    pub fn regions(&self) -> &[RegionRecord] {
        &self.regions
    }

    pub fn index(&self) -> &ContainmentIndex {
        &self.index
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn loaded_at(&self) -> &DateTime<Utc> {
        &self.loaded_at
    }

    /// Display name for a region, falling back to the region name when no alias is defined.
    pub fn display_name<'s>(&'s self, region: &'s str) -> &'s str {
        self.aliases.display_name(region).unwrap_or_else(|| {
            warn!("No display name for region `{region}`");
            region
        })
    }

    pub fn total_address_count(&self) -> u64 {
        self.regions
            .iter()
            .map(RegionRecord::total_address_count)
            .sum()
    }
}

/*-------------------------------------------------------------------------------------------------
  Snapshot Store
-------------------------------------------------------------------------------------------------*/

/// Holds the live [RegionSnapshot]. Readers take a shared handle without locking; a refresh
/// builds a complete new snapshot and swaps it in atomically.
#[derive(Debug)]
pub struct SnapshotStore {
    current: ArcSwap<RegionSnapshot>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        SnapshotStore::new(RegionSnapshot::default())
    }
}

impl SnapshotStore {
    pub fn new(snapshot: RegionSnapshot) -> Self {
        SnapshotStore {
            current: ArcSwap::from_pointee(snapshot),
        }
    }

    /// The snapshot currently being served.
    pub fn current(&self) -> Arc<RegionSnapshot> {
        self.current.load_full()
    }

    /// Swap in a new snapshot, returning the one it replaced.
    pub fn replace(&self, snapshot: RegionSnapshot) -> Arc<RegionSnapshot> {
        self.current.swap(Arc::new(snapshot))
    }

    /// Build a new snapshot with `load` and swap it in.
    ///
    /// When `load` fails the current snapshot keeps being served and the error is returned.
    pub fn refresh<F>(&self, load: F) -> Result<Arc<RegionSnapshot>>
    where
        F: FnOnce() -> Result<RegionSnapshot>,
    {
        match load() {
            Ok(snapshot) => {
                info!(
                    "Loaded {} region(s) and {} subnet(s)",
                    snapshot.regions().len(),
                    snapshot.index().len()
                );
                let snapshot = Arc::new(snapshot);
                self.current.store(Arc::clone(&snapshot));
                Ok(snapshot)
            }
            Err(err) => {
                error!(
                    "Failed to refresh region snapshot; keeping snapshot loaded at {}: {}",
                    self.current.load().loaded_at(),
                    err
                );
                Err(err)
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
