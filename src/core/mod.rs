/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod alias;
pub mod builder;
pub mod config;
pub mod datetime;
pub mod errors;
pub mod index;
pub mod json;
pub mod lines;
pub mod loader;
pub mod markup;
pub mod provider;
pub mod region_record;
pub mod resolver;
pub mod snapshot;
pub mod source;
pub mod subnet;
