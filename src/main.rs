mod cli;

use clap::Parser;
use ipregions::{load_snapshot, FileLoader, RegionResolver, SnapshotStore};
use log::error;
use std::process::ExitCode;
use std::sync::Arc;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    // Initialize logging
    if let Err(error) = cli::log::init(args.verbose.log_level_filter()) {
        eprintln!("Failed to initialize logging: {error}");
    }

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> cli::Result<ExitCode> {
    // Load the region snapshot
    let config = cli::build_config(args);
    let loader = FileLoader::new(config.dataset_root());
    let store = Arc::new(SnapshotStore::default());
    store.refresh(|| load_snapshot(&config, &loader))?;

    let resolver = RegionResolver::new(store);

    // Resolve hosts
    if !args.hosts.is_empty() {
        let resolutions = cli::resolve_hosts(&resolver, &args.hosts);
        cli::log::resolutions(&resolutions);
        cli::output::resolution_table(&resolutions);

        return Ok(if resolutions.iter().all(|resolution| resolution.is_found()) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // List regions
    let regions = resolver.list_regions();

    match args.output {
        cli::OutputFormat::Table => cli::output::region_table(&regions),
        cli::OutputFormat::Json => cli::output::regions_in_json_format(&regions)?,
        cli::OutputFormat::Cidr => cli::output::subnets_in_cidr_format(&regions),
        cli::OutputFormat::Netmask => cli::output::subnets_in_netmask_format(&regions),
        cli::OutputFormat::Regions => cli::output::region_names(&regions),
    };

    if args.summary {
        cli::output::summary(&resolver.store().current());
    }

    // Save CSV
    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&regions, csv_file)?;
    }

    Ok(ExitCode::SUCCESS)
}
