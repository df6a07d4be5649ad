use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;
use serde::{self, Deserialize, Deserializer};
use serde_json::Value;

/*-------------------------------------------------------------------------------------------------
  Optional Publication DateTime Format
-------------------------------------------------------------------------------------------------*/

const PUBLISHED_DATETIME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Publication timestamp of a dataset. Only informational: a value in any other shape is
/// logged and treated as absent.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let date = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match NaiveDateTime::parse_from_str(&s, PUBLISHED_DATETIME_FORMAT) {
            Ok(naive_date_time) => Some(naive_date_time.and_utc()),
            Err(error) => {
                warn!("Ignoring unrecognized publication date {s:?}: {error}");
                None
            }
        },
        Some(other) => {
            warn!("Ignoring unrecognized publication date {other}");
            None
        }
    };

    Ok(date)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
