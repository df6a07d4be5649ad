use crate::core::source::RangeSource;
use serde::Serialize;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Provider
-------------------------------------------------------------------------------------------------*/

/// Cloud provider that published a range dataset. Providers only attribute region records;
/// they take no part in lookups.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Provider {
    #[serde(rename = "Azure")]
    Azure,
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "AliCloud")]
    AliCloud,
}

impl Provider {
    /// Providers in the order their datasets are processed.
    pub const ALL: [Provider; 3] = [Provider::Azure, Provider::Aws, Provider::AliCloud];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Azure => "Azure",
            Provider::Aws => "AWS",
            Provider::AliCloud => "AliCloud",
        }
    }

    /// Directory, relative to the dataset root, holding the provider's range files.
    pub fn directory(&self) -> &'static str {
        self.name()
    }

    /// The range format the provider publishes.
    pub fn source(&self) -> RangeSource {
        match self {
            Provider::Azure => RangeSource::Markup,
            Provider::Aws => RangeSource::ObjectList,
            Provider::AliCloud => RangeSource::Lines {
                region: self.name().to_string(),
            },
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
