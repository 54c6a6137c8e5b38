use serde::{Deserialize, Deserializer};

/// Accept a JSON string or number where the backend is inconsistent
/// (e.g. `years: [2026, "2025"]`, numeric politician ids).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Same as [`string_or_number`] applied element-wise to a sequence.
pub fn string_or_number_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Item(#[serde(deserialize_with = "string_or_number")] String);

    let items = Vec::<Item>::deserialize(deserializer)?;
    Ok(items.into_iter().map(|i| i.0).collect())
}

/// Whitespace-only strings count as absent for validation purposes.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
