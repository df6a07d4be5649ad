/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Modules
-------------------------------------------------------------------------------------------------*/

mod args;
mod core;

pub mod csv;
pub mod log;
pub mod output;

/*--------------------------------------------------------------------------------------
  CLI Module Interface
--------------------------------------------------------------------------------------*/

pub use self::args::{Args, OutputFormat};
pub use self::core::{build_config, resolve_hosts, HostResolution};

// Errors surfaced by the binary, library errors included.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;
