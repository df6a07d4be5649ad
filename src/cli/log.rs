use crate::cli::HostResolution;
use log::{error, info, warn, LevelFilter, SetLoggerError};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/// Install the stderr logger for this crate's modules.
pub fn init(verbosity: LevelFilter) -> Result<(), SetLoggerError> {
    stderrlog::new()
        .module(env!("CARGO_CRATE_NAME"))
        .verbosity(verbosity)
        .init()
}

/*--------------------------------------------------------------------------------------
  Host Resolutions
--------------------------------------------------------------------------------------*/

pub fn resolutions(resolutions: &[HostResolution]) {
    let count_hosts = resolutions.len();
    info!("Resolved {count_hosts} host(s) against the region snapshot");

    let count_found = resolutions.iter().filter(|r| r.is_found()).count();
    if count_found > 0 {
        info!("Found regions for {count_found} host(s)");
    };

    for resolution in resolutions {
        match &resolution.result {
            Ok(result) if !result.is_found() => {
                warn!("{}: region not found for {}", resolution.host, result.address())
            }
            Err(error) => error!("{}: {}", resolution.host, error),
            Ok(_) => (),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
