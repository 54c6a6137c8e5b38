//! Canned backend payloads.
//!
//! These mirror the loose shapes the real backend emits, including the
//! Spanish/English field duplication (`notas` vs `notes`, `titulo` vs
//! `title`) and the `commissions` → `items` collection-key rename, so decoder
//! tests exercise the same tolerance the dashboard needed.

pub const HEALTH_OK: &str = r#"{"success": true, "gemini_configured": true}"#;

pub const COMMISSIONS: &str = r#"{
  "success": true,
  "items": [
    {"group": "Permanentes", "commission_name": "Hacienda", "nombre": "Hacienda", "total_sessions": 42},
    {"group": "Permanentes", "commission_name": "Salud", "nombre": "Salud", "total_sessions": 17}
  ],
  "total": 2,
  "group": "Permanentes"
}"#;

/// Older backend revision: same list under the `commissions` key.
pub const COMMISSIONS_LEGACY: &str = r#"{
  "success": true,
  "commissions": [
    {"group": "Permanentes", "commission_name": "Hacienda", "nombre": "Hacienda", "total_sessions": 42}
  ]
}"#;

pub const SESSIONS: &str = r#"{
  "success": true,
  "commission": {
    "group": "Permanentes",
    "commission_name": "Hacienda",
    "meta": {"nombre": "Hacienda"},
    "years": [2026, 2025],
    "sessions_by_year": {
      "2026": [
        {"ID": "s100", "Año": "2026", "Mes": "Enero", "Fecha": "08-01-2026",
         "Estado": "Citada", "Citacion": "citacion.pdf", "Acta": "", "Cuenta": "", "transcript": false}
      ],
      "2025": [
        {"ID": "s99", "Año": "2025", "Mes": "Diciembre", "Fecha": "17-12-2025",
         "Estado": "Celebrada", "Citacion": "", "Acta": "acta99.pdf", "Cuenta": "cuenta99.pdf", "transcript": true}
      ]
    }
  }
}"#;

pub const POLITICIANS: &str = r#"{
  "success": true,
  "politicians": [
    {"id": "42", "nombre": "Jane Doe", "cargo": "Diputada", "chamber": "camara", "url_ficha": "https://example.org/42"},
    {"id": 7, "nombre": "John Roe", "cargo": "Senador", "chamber": "senado", "url_ficha": ""}
  ],
  "total": 2
}"#;

pub const PROFILE_FULL: &str = r#"{
  "success": true,
  "exists": true,
  "profile": {
    "foto_url": "https://example.org/foto.jpg",
    "biografia": "x",
    "email": "jane@example.org",
    "telefono": "+56 2 1234",
    "web": "https://janedoe.cl",
    "notas": "seguimiento",
    "topicos": [{"titulo": "A", "contenido": "B"}],
    "links": [{"title": "Prensa", "url": "https://example.org/p"}],
    "updated_at": "2026-08-30T12:00:00Z"
  }
}"#;

/// Unknown politician: success envelope with the backend's skeleton profile.
pub const PROFILE_MISSING: &str = r#"{
  "success": true,
  "exists": false,
  "profile": {"id": "42", "chamber": "camara", "tags": [], "notes": "", "links": [], "updated_at": null}
}"#;

pub const SAVE_OK: &str = r#"{"success": true, "saved": true}"#;

pub const SAVE_FAIL: &str = r#"{"success": false, "error": "disk full"}"#;

pub const ACTIVITY: &str = r#"{
  "success": true,
  "items": [
    {"commission": "Hacienda", "group": "Permanentes", "fecha": "08-01-2026",
     "session_id": "s100", "estado": "Citada", "citacion": "citacion.pdf"},
    {"commission": "Salud", "group": "Permanentes", "Fecha": "05-01-2026",
     "ID": "s55", "Estado": "Celebrada", "Citacion": ""}
  ],
  "total": 2
}"#;

pub const NEWS: &str = r#"{
  "success": true,
  "items": [
    {"titulo": "Ley 21.000 publicada", "fecha": "07-01-2026", "url": "https://example.org/a.pdf",
     "cve": "CVE-1", "edition": "43.000", "tab": "Normas Generales"},
    {"title": "Decreto 12", "date": "06-01-2026", "summary": "resumen", "pdf_url": "https://example.org/b.pdf"}
  ],
  "total": 2
}"#;

pub const TRANSCRIPT: &str = r#"{"success": true, "text": "Sesion ordinaria. Se abre la sesion."}"#;

pub const CHAT_OK: &str = r#"{"success": true, "response": "Segun el acta citada, la comision sesiono el 17-12-2025."}"#;

pub const CHAT_FAIL: &str = r#"{"success": false, "error": "quota exceeded", "response": "Error: quota exceeded"}"#;

pub const UPLOAD_OK: &str = r#"{"success": true, "saved_as": "upload_20260831_doc.pdf"}"#;

pub const UPLOAD_FAIL: &str = r#"{"success": false, "error": "unsupported extension"}"#;
