use crate::cli;
use ipregions::{Config, ConfigBuilder, HostResolver, RegionResolver, Resolution};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build configuration from CLI arguments
--------------------------------------------------------------------------------------*/

/// Environment configuration, overridden by any locations given on the command line.
pub fn build_config(args: &cli::Args) -> Config {
    let mut builder = ConfigBuilder::new();

    if let Some(dataset_root) = &args.dataset_root {
        builder.dataset_root(dataset_root);
    }
    if let Some(alias_table) = &args.alias_table {
        builder.alias_table(alias_table);
    }

    builder.build()
}

/*--------------------------------------------------------------------------------------
  Resolve hosts from CLI arguments
--------------------------------------------------------------------------------------*/

pub struct HostResolution {
    pub host: String,
    pub result: ipregions::Result<Resolution>,
}

impl HostResolution {
    pub fn is_found(&self) -> bool {
        matches!(&self.result, Ok(resolution) if resolution.is_found())
    }
}

pub fn resolve_hosts<H: HostResolver>(
    resolver: &RegionResolver<H>,
    hosts: &[String],
) -> Vec<HostResolution> {
    hosts
        .iter()
        .map(|host| HostResolution {
            host: host.clone(),
            result: resolver.resolve(host),
        })
        .collect()
}
