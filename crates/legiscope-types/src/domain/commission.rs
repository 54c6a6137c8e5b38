use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Commission directory entry as listed by `/api/commissions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    #[serde(default)]
    pub group: String,
    #[serde(default, alias = "name")]
    pub commission_name: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub total_sessions: u64,
}

/// One row of a commission's session history.
///
/// The backend exports `historial.csv` rows with Spanish capitalized headers;
/// field names here follow the wire shape, not Rust convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRow {
    #[serde(default, rename = "ID", alias = "id", deserialize_with = "crate::string_or_number")]
    pub id: String,
    #[serde(default, rename = "Año", alias = "anio", deserialize_with = "crate::string_or_number")]
    pub anio: String,
    #[serde(default, rename = "Mes", alias = "mes")]
    pub mes: String,
    #[serde(default, rename = "Fecha", alias = "fecha")]
    pub fecha: String,
    #[serde(default, rename = "Estado", alias = "estado")]
    pub estado: String,
    #[serde(default, rename = "Citacion", alias = "citacion")]
    pub citacion: String,
    #[serde(default, rename = "Acta", alias = "acta")]
    pub acta: String,
    #[serde(default, rename = "Cuenta", alias = "cuenta")]
    pub cuenta: String,
    #[serde(default)]
    pub transcript: bool,
}

/// Session history for one commission, grouped by year (newest year first in
/// `years`; `sessions_by_year` is keyed by the year rendered as a string).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommissionSessions {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub commission_name: String,
    #[serde(default, deserialize_with = "crate::string_or_number_seq")]
    pub years: Vec<String>,
    #[serde(default)]
    pub sessions_by_year: BTreeMap<String, Vec<SessionRow>>,
}

impl CommissionSessions {
    /// Total sessions across all years.
    pub fn total_sessions(&self) -> usize {
        self.sessions_by_year.values().map(Vec::len).sum()
    }
}
