use crate::core::provider::Provider;
use log::{info, warn};
use std::env;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Config Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Config] struct that locates the range datasets. The [ConfigBuilder]
/// struct provides setters for each configuration value and a [ConfigBuilder::build] method to
/// create a [Config] instance.
///
/// ```
/// let config = ipregions::ConfigBuilder::default()
///     .dataset_root("/srv/ip-ranges")
///     .azure_files(["PublicIPs_1.xml", "PublicIPs_2.xml"])
///     .aws_files(["ip-ranges.json"])
///     .alicloud_files(["ip-ranges.txt"])
///     .alias_table("region-names.json")
///     .build();
///
/// assert_eq!(config.sources().len(), 3);
/// ```
///
/// The [ConfigBuilder::new] method sources configuration values from environment variables when
/// set and uses default values when the environment variables are not set. Use
/// [ConfigBuilder::default] to ignore the environment.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    dataset_root: PathBuf,
    azure_files: Vec<String>,
    aws_files: Vec<String>,
    alicloud_files: Vec<String>,
    alias_table: Option<PathBuf>,
}

/*--------------------------------------------------------------------------------------
  Config Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ConfigBuilder {
    /// Create a new [ConfigBuilder] with default configuration values.
    ///
    /// ```
    /// let config = ipregions::ConfigBuilder::default().build();
    ///
    /// assert!(config.dataset_root().ends_with("ipregions"));
    /// assert_eq!(config.azure_files(), ["PublicIPs.xml"]);
    /// assert_eq!(config.aws_files(), ["ip-ranges.json"]);
    /// assert_eq!(config.alicloud_files(), ["ip-ranges.txt"]);
    /// assert_eq!(config.alias_table(), None);
    /// ```
    fn default() -> Self {
        Self {
            dataset_root: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ipregions"), // ${XDG_DATA_HOME}/ipregions
            azure_files: vec!["PublicIPs.xml".to_string()],
            aws_files: vec!["ip-ranges.json".to_string()],
            alicloud_files: vec!["ip-ranges.txt".to_string()],
            alias_table: None,
        }
    }
}

impl ConfigBuilder {
    /// Create a new [ConfigBuilder] reading initial configuration values from environment
    /// variables when set and default values when they are not set.
    ///
    /// The environment variables used to set the initial configuration values are:
    /// - `IPREGIONS_DATASET_ROOT`
    /// - `IPREGIONS_AZURE_FILES` (`;`-separated)
    /// - `IPREGIONS_AWS_FILES` (`;`-separated)
    /// - `IPREGIONS_ALICLOUD_FILES` (`;`-separated)
    /// - `IPREGIONS_ALIAS_TABLE`
    pub fn new() -> Self {
        let default = ConfigBuilder::default();

        Self {
            dataset_root: get_env_var("IPREGIONS_DATASET_ROOT", default.dataset_root),
            azure_files: get_env_list("IPREGIONS_AZURE_FILES", default.azure_files),
            aws_files: get_env_list("IPREGIONS_AWS_FILES", default.aws_files),
            alicloud_files: get_env_list("IPREGIONS_ALICLOUD_FILES", default.alicloud_files),
            alias_table: env::var("IPREGIONS_ALIAS_TABLE")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .inspect(|value| info!("Using IPREGIONS_ALIAS_TABLE: {}", value))
                .map(PathBuf::from)
                .or(default.alias_table),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the directory holding one sub-directory of range files per provider.
    pub fn dataset_root<P: AsRef<Path>>(&mut self, dataset_root: P) -> &mut Self {
        self.dataset_root = dataset_root.as_ref().to_path_buf();
        self
    }

    /// Set the markup range files, relative to `<dataset_root>/Azure`.
    pub fn azure_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.azure_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the JSON prefix-record files, relative to `<dataset_root>/AWS`.
    pub fn aws_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aws_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the line-oriented range files, relative to `<dataset_root>/AliCloud`.
    pub fn alicloud_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alicloud_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the alias table file, relative to the dataset root unless absolute.
    pub fn alias_table<P: AsRef<Path>>(&mut self, alias_table: P) -> &mut Self {
        self.alias_table = Some(alias_table.as_ref().to_path_buf());
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Config {
        Config {
            dataset_root: self.dataset_root.clone(),
            azure_files: self.azure_files.clone(),
            aws_files: self.aws_files.clone(),
            alicloud_files: self.alicloud_files.clone(),
            alias_table: self.alias_table.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Config
-------------------------------------------------------------------------------------------------*/

/// Locations of the range datasets and the alias table.
#[derive(Debug, Clone)]
pub struct Config {
    dataset_root: PathBuf,
    azure_files: Vec<String>,
    aws_files: Vec<String>,
    alicloud_files: Vec<String>,
    alias_table: Option<PathBuf>,
}

/// The files one provider publishes, as paths under the dataset root.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DatasetSource {
    pub provider: Provider,
    pub files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::default().build()
    }
}

impl Config {
    pub fn new() -> Self {
        ConfigBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn dataset_root(&self) -> &Path {
        &self.dataset_root
    }

    pub fn azure_files(&self) -> &[String] {
        &self.azure_files
    }

    pub fn aws_files(&self) -> &[String] {
        &self.aws_files
    }

    pub fn alicloud_files(&self) -> &[String] {
        &self.alicloud_files
    }

    pub fn alias_table(&self) -> Option<&Path> {
        self.alias_table.as_deref()
    }

    /// Provider datasets in processing order: Azure, AWS, then AliCloud.
    pub fn sources(&self) -> Vec<DatasetSource> {
        Provider::ALL
            .iter()
            .map(|&provider| {
                let files = match provider {
                    Provider::Azure => &self.azure_files,
                    Provider::Aws => &self.aws_files,
                    Provider::AliCloud => &self.alicloud_files,
                };
                DatasetSource {
                    provider,
                    files: files
                        .iter()
                        .map(|file| Path::new(provider.directory()).join(file))
                        .collect(),
                }
            })
            .collect()
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/// Get a `;`-separated list from an environment variable or return a default list.
fn get_env_list(env_var: &str, default: Vec<String>) -> Vec<String> {
    let values: Option<Vec<String>> = env::var(env_var).ok().map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    });

    match values {
        Some(values) if !values.is_empty() => {
            info!("Using {}: {:?}", env_var, values);
            values
        }
        Some(_) => {
            warn!("Invalid {}: empty file list", env_var);
            default
        }
        None => default,
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use env::VarError;

    /*-------------------------------------------------------------------------
      Test Environment Variable Configuration
    -------------------------------------------------------------------------*/

    /// ENV_VAR: IPREGIONS_DATASET_ROOT
    /// ENV_VAR: IPREGIONS_AZURE_FILES
    /// ENV_VAR: IPREGIONS_AWS_FILES
    /// ENV_VAR: IPREGIONS_ALICLOUD_FILES
    /// ENV_VAR: IPREGIONS_ALIAS_TABLE
    #[test]
    fn test_environment_variable_configuration() {
        let test_env_vars = [
            ("IPREGIONS_DATASET_ROOT", "./scratch/datasets"),
            ("IPREGIONS_AZURE_FILES", "PublicIPs_1.xml; PublicIPs_2.xml;"),
            ("IPREGIONS_AWS_FILES", "ip-ranges.json"),
            ("IPREGIONS_ALICLOUD_FILES", "aliyun.txt"),
            ("IPREGIONS_ALIAS_TABLE", "region-names.json"),
        ];

        let default = Config::default();

        // Store environment variable values
        let stored_env_vars: Vec<(String, std::result::Result<String, VarError>)> = test_env_vars
            .iter()
            .map(|(env_var, _)| (env_var.to_string(), env::var(env_var)))
            .collect();

        // Unset all environment variables
        test_env_vars.iter().for_each(|(env_var, _)| {
            env::remove_var(env_var);
        });

        // Test default cases
        let new = Config::new();
        assert_eq!(new.dataset_root(), default.dataset_root());
        assert_eq!(new.azure_files(), default.azure_files());
        assert_eq!(new.aws_files(), default.aws_files());
        assert_eq!(new.alicloud_files(), default.alicloud_files());
        assert_eq!(new.alias_table(), default.alias_table());

        // Set all environment variables
        for (env_var, value) in test_env_vars.iter() {
            env::set_var(env_var, value);
        }

        // Test environment variable configuration
        let env_config = Config::new();
        assert_eq!(env_config.dataset_root(), Path::new("./scratch/datasets"));
        assert_eq!(env_config.azure_files(), ["PublicIPs_1.xml", "PublicIPs_2.xml"]);
        assert_eq!(env_config.aws_files(), ["ip-ranges.json"]);
        assert_eq!(env_config.alicloud_files(), ["aliyun.txt"]);
        assert_eq!(env_config.alias_table(), Some(Path::new("region-names.json")));

        // Reset environment variables
        for (env_var, value) in stored_env_vars {
            match value {
                Ok(value) => env::set_var(env_var, value),
                Err(VarError::NotPresent) => env::remove_var(env_var),
                Err(VarError::NotUnicode(value)) => env::set_var(env_var, value),
            }
        }
    }

    /*-------------------------------------------------------------------------
      Test Setter Methods and Sources
    -------------------------------------------------------------------------*/

    #[test]
    fn test_setters_and_sources() {
        let config = ConfigBuilder::default()
            .dataset_root("./scratch/test_setters_and_sources")
            .azure_files(["PublicIPs_1.xml", "PublicIPs_2.xml"])
            .aws_files(["ip-ranges.json"])
            .alicloud_files(Vec::<String>::new())
            .alias_table("region-names.json")
            .build();

        assert_eq!(
            config.dataset_root(),
            Path::new("./scratch/test_setters_and_sources")
        );
        assert_eq!(config.alias_table(), Some(Path::new("region-names.json")));

        assert_eq!(
            config.sources(),
            [
                DatasetSource {
                    provider: Provider::Azure,
                    files: vec![
                        PathBuf::from("Azure/PublicIPs_1.xml"),
                        PathBuf::from("Azure/PublicIPs_2.xml"),
                    ],
                },
                DatasetSource {
                    provider: Provider::Aws,
                    files: vec![PathBuf::from("AWS/ip-ranges.json")],
                },
                DatasetSource {
                    provider: Provider::AliCloud,
                    files: vec![],
                },
            ]
        );
    }
}
