use serde::{Deserialize, Deserializer};

/// Trims surrounding whitespace and lower-cases the value.
///
/// Used for usernames so that `" Alice_01 "` and `"alice_01"` name the same
/// account before length rules and the unique index see them.
pub fn deserialize_normalized_username<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_lowercase())
}
