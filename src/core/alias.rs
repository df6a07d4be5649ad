use crate::core::errors::{Error, Result};
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Alias Table
-------------------------------------------------------------------------------------------------*/

/// Maps published region names (aliases such as `europewest`) to human-readable display names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasTable {
    names: BTreeMap<String, String>,
}

impl AliasTable {
    /// Parse a JSON object of `"alias": "Display Name"` pairs.
    ///
    /// ```
    /// let aliases = ipregions::AliasTable::from_json(r#"{"europewest": "West Europe"}"#)?;
    /// assert_eq!(aliases.display_name("europewest"), Some("West Europe"));
    /// # Ok::<(), ipregions::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let names: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|error| Error::malformed("alias table", error))?;
        Ok(AliasTable { names })
    }

    pub fn display_name(&self, alias: &str) -> Option<&str> {
        self.names.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<A: Into<String>, D: Into<String>> FromIterator<(A, D)> for AliasTable {
    fn from_iter<T: IntoIterator<Item = (A, D)>>(iter: T) -> Self {
        AliasTable {
            names: iter
                .into_iter()
                .map(|(alias, display_name)| (alias.into(), display_name.into()))
                .collect(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
