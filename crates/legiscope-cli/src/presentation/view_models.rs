//! Plain data handed from presenters to views.
//!
//! Everything derives `Serialize` so `--format json` can print the view model
//! directly; the plain renderer goes through the `views` Display impls.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthViewModel {
    pub api_url: String,
    pub success: bool,
    pub gemini_configured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommissionRowViewModel {
    pub name: String,
    pub total_sessions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommissionListViewModel {
    pub group: String,
    pub query: String,
    pub total: usize,
    pub shown: usize,
    pub items: Vec<CommissionRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionRowViewModel {
    pub id: String,
    pub mes: String,
    pub fecha: String,
    pub estado: String,
    pub citacion: String,
    pub acta: String,
    pub cuenta: String,
    pub transcript: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearBlockViewModel {
    pub year: String,
    pub rows: Vec<SessionRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionsViewModel {
    pub group: String,
    pub commission_name: String,
    pub total: usize,
    pub shown: usize,
    pub blocks: Vec<YearBlockViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoliticianRowViewModel {
    pub id: String,
    pub nombre: String,
    pub cargo: String,
    pub chamber: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoliticianListViewModel {
    pub query: String,
    pub total: usize,
    pub shown: usize,
    pub items: Vec<PoliticianRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicViewModel {
    pub titulo: String,
    pub contenido: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkViewModel {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewModel {
    pub chamber: String,
    pub id: String,
    pub foto_url: String,
    pub biografia: String,
    pub email: String,
    pub telefono: String,
    pub web: String,
    pub notas: String,
    pub updated_at: Option<String>,
    pub topics: Vec<TopicViewModel>,
    pub links: Vec<LinkViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityRowViewModel {
    pub fecha: String,
    pub group: String,
    pub commission: String,
    pub estado: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityViewModel {
    pub total: usize,
    pub shown: usize,
    pub items: Vec<ActivityRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsRowViewModel {
    pub fecha: String,
    pub titulo: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsViewModel {
    pub source: String,
    pub total: usize,
    pub shown: usize,
    pub items: Vec<NewsRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptViewModel {
    pub group: String,
    pub commission_name: String,
    pub session_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatViewModel {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadViewModel {
    pub file: String,
    pub saved_as: String,
}
