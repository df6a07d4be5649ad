use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Find the cloud region that owns an IP address or host.", long_about = None)]
pub struct Args {
    /// Directory containing the Azure/, AWS/ and AliCloud/ range files
    #[arg(short = 'd', long)]
    pub dataset_root: Option<PathBuf>,

    /// JSON file mapping region names to display names (relative to the dataset root)
    #[arg(short = 'a', long)]
    pub alias_table: Option<PathBuf>,

    /// Output format used when listing regions
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Include a summary of the loaded regions and subnets
    #[arg(long)]
    pub summary: bool,

    /// Save the region list to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// IP addresses, host names or URLs to resolve to regions
    pub hosts: Vec<String>,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Table of regions with subnet and address counts
    Table,
    /// JSON list of region records
    Json,
    /// List of (RFC4632) CIDR-format subnets
    Cidr,
    /// List of subnets in network mask format (n.n.n.n m.m.m.m)
    Netmask,
    /// List of region names
    Regions,
}
