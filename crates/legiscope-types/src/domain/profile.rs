use serde::{Deserialize, Serialize};

/// Curated topic attached to a KOM profile.
///
/// Order is display order; titles are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    #[serde(default, alias = "title")]
    pub titulo: String,
    #[serde(default, alias = "content")]
    pub contenido: String,
}

/// External link attached to a KOM profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default, alias = "titulo")]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// The stored KOM (knowledge/outreach management) record for one politician,
/// keyed server-side by (chamber, id).
///
/// Every scalar field is independently optional on the wire; missing fields
/// decode to empty strings and missing sequences to empty vecs. The backend
/// has emitted both `notas` and `notes` over time, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KomProfile {
    #[serde(default)]
    pub foto_url: String,
    #[serde(default)]
    pub biografia: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub web: String,
    #[serde(default, alias = "notes")]
    pub notas: String,
    #[serde(default)]
    pub topicos: Vec<TopicEntry>,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
    /// Set by the server on save; never sent by the client.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<String>,
}

/// Politician directory entry as listed by `/api/politicians`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    #[serde(default, deserialize_with = "crate::string_or_number")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub nombre: String,
    #[serde(default, alias = "role")]
    pub cargo: String,
    #[serde(default, alias = "camara")]
    pub chamber: String,
    #[serde(default, alias = "url")]
    pub url_ficha: String,
}
