use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON scalar for a text field, so `"phone": 5550199` is kept as
/// `"5550199"`. `null` and a missing key both read as `None`.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text, found {}",
            other
        ))),
    }
}

/// Fields are optional here so that absence is reported per field instead of as a
/// generic payload error.
#[derive(Deserialize)]
pub struct AppointmentRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub doctor: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub department: Option<String>,
    pub is_urgent: Option<bool>,
}
