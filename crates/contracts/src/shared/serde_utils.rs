use serde::{Deserialize, Deserializer};

/// Read an explicit JSON `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key; nullable backend columns
/// arrive as `"route": null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
