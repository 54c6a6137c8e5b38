use serde::{Deserialize, Serialize};

/// Recent legislative activity row (one commission session occurrence).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(default, alias = "commission_name")]
    pub commission: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, alias = "Fecha")]
    pub fecha: String,
    #[serde(default, alias = "ID", deserialize_with = "crate::string_or_number")]
    pub session_id: String,
    #[serde(default, alias = "Estado")]
    pub estado: String,
    #[serde(default, alias = "Citacion")]
    pub citacion: String,
}

/// News item from the configured source (diario oficial export).
///
/// The export duplicates most fields in Spanish and English; either spelling
/// decodes. `url` falls back to the PDF link when the plain link is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, alias = "title")]
    pub titulo: String,
    #[serde(default, alias = "date")]
    pub fecha: String,
    #[serde(default, alias = "summary")]
    pub resumen: String,
    #[serde(default, alias = "pdf_url")]
    pub url: String,
    #[serde(default)]
    pub cve: String,
    #[serde(default)]
    pub edition: String,
    #[serde(default)]
    pub tab: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_english_aliases() {
        let item: NewsItem = serde_json::from_str(
            r#"{"title": "Ley 21.000", "date": "01-02-2026", "summary": "s"}"#,
        )
        .unwrap();
        assert_eq!(item.titulo, "Ley 21.000");
        assert_eq!(item.fecha, "01-02-2026");
        assert_eq!(item.resumen, "s");
    }

    #[test]
    fn test_activity_item_capitalized_aliases() {
        let item: ActivityItem = serde_json::from_str(
            r#"{"commission": "Hacienda", "group": "Permanentes",
                "Fecha": "10-01-2026", "ID": "s9", "Estado": "Citada"}"#,
        )
        .unwrap();
        assert_eq!(item.session_id, "s9");
        assert_eq!(item.estado, "Citada");
    }
}
