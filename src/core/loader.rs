use crate::core::alias::AliasTable;
use crate::core::config::Config;
use crate::core::errors::{Error, Result};
use crate::core::snapshot::RegionSnapshot;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Dataset Loader
-------------------------------------------------------------------------------------------------*/

/// Supplies the text of a dataset file, keyed by its path relative to the dataset root.
pub trait DatasetLoader {
    fn load(&self, path: &Path) -> Result<String>;
}

/// Reads dataset files from a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        FileLoader {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DatasetLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<String> {
        let path = self.root.join(path);
        fs::read_to_string(&path)
            .map(|text| match text.strip_prefix('\u{feff}') {
                Some(text) => text.to_string(),
                None => text,
            })
            .inspect(|_| info!("Read range dataset: {:?}", &path))
            .map_err(|source| Error::Io { path, source })
    }
}

/*-------------------------------------------------------------------------------------------------
  Load Snapshot
-------------------------------------------------------------------------------------------------*/

/// Load, parse and aggregate every configured dataset into a new [RegionSnapshot].
///
/// Providers are processed in [Config::sources] order and each provider's files in the
/// configured order. Any unreadable file, malformed dataset or invalid CIDR fails the load.
pub fn load_snapshot<L: DatasetLoader>(config: &Config, loader: &L) -> Result<RegionSnapshot> {
    let mut entries = Vec::new();

    for dataset in config.sources() {
        let source = dataset.provider.source();
        for file in &dataset.files {
            let raw = loader.load(file)?;
            let parsed = source.parse(&raw)?;
            info!(
                "Parsed {} {} range(s) from {:?} ({} format)",
                parsed.len(),
                dataset.provider,
                file,
                source.format_name()
            );
            entries.extend(parsed.into_iter().map(|entry| (dataset.provider, entry)));
        }
    }

    let aliases = match config.alias_table() {
        Some(path) => AliasTable::from_json(&loader.load(path)?)?,
        None => AliasTable::default(),
    };

    RegionSnapshot::from_entries(entries, aliases)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
