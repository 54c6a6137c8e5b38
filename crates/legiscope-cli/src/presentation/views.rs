//! Plain-text renderers over the view models.

use std::fmt;

use super::formatters::{clean_inline, or_dash, relative_age, truncate};
use super::view_models::*;

const NAME_COL: usize = 45;
const ESTADO_COL: usize = 12;
const FECHA_COL: usize = 12;
const SNIPPET_MAX: usize = 60;

fn shown_note(f: &mut fmt::Formatter, shown: usize, total: usize) -> fmt::Result {
    if shown < total {
        writeln!(f, "(showing first {} of {})", shown, total)?;
    }
    Ok(())
}

pub struct HealthView<'a>(pub &'a HealthViewModel);

impl fmt::Display for HealthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let agent = if self.0.gemini_configured {
            "configured"
        } else {
            "not configured"
        };
        writeln!(f, "Backend: {} (ok)", self.0.api_url)?;
        writeln!(f, "Agent:   {}", agent)
    }
}

pub struct CommissionListView<'a>(pub &'a CommissionListViewModel);

impl fmt::Display for CommissionListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.items.is_empty() {
            writeln!(f, "No commissions found in group '{}'.", self.0.group)?;
            return Ok(());
        }

        writeln!(f, "{:<w$}  SESSIONS", "COMMISSION", w = NAME_COL)?;
        writeln!(f, "{}", "-".repeat(NAME_COL + 10))?;
        for item in &self.0.items {
            writeln!(
                f,
                "{:<w$}  {}",
                truncate(&item.name, NAME_COL),
                item.total_sessions,
                w = NAME_COL
            )?;
        }
        shown_note(f, self.0.shown, self.0.total)
    }
}

pub struct SessionsView<'a>(pub &'a SessionsViewModel);

impl fmt::Display for SessionsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} / {} ({} sessions)",
            self.0.group, self.0.commission_name, self.0.total
        )?;

        if self.0.blocks.iter().all(|b| b.rows.is_empty()) {
            writeln!(f, "No sessions registered.")?;
            return Ok(());
        }

        for block in &self.0.blocks {
            if block.rows.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "== {} ==", block.year)?;
            writeln!(
                f,
                "{:<8}  {:<f$}  {:<e$}  {:<10}  DOCS",
                "SESSION",
                "DATE",
                "STATUS",
                "MONTH",
                f = FECHA_COL,
                e = ESTADO_COL
            )?;
            for row in &block.rows {
                let mut docs = Vec::new();
                if !row.citacion.trim().is_empty() {
                    docs.push("citacion");
                }
                if !row.acta.trim().is_empty() {
                    docs.push("acta");
                }
                if !row.cuenta.trim().is_empty() {
                    docs.push("cuenta");
                }
                if row.transcript {
                    docs.push("transcript");
                }
                let docs = if docs.is_empty() {
                    "--".to_string()
                } else {
                    docs.join(",")
                };
                writeln!(
                    f,
                    "{:<8}  {:<f$}  {:<e$}  {:<10}  {}",
                    or_dash(&row.id),
                    or_dash(&row.fecha),
                    truncate(or_dash(&row.estado), ESTADO_COL),
                    truncate(or_dash(&row.mes), 10),
                    docs,
                    f = FECHA_COL,
                    e = ESTADO_COL
                )?;
            }
        }
        shown_note(f, self.0.shown, self.0.total)
    }
}

pub struct PoliticianListView<'a>(pub &'a PoliticianListViewModel);

impl fmt::Display for PoliticianListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.items.is_empty() {
            if self.0.query.is_empty() {
                writeln!(f, "No politicians found.")?;
            } else {
                writeln!(f, "No politicians match '{}'.", self.0.query)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<6}  {:<35}  {:<20}  CHAMBER",
            "ID", "NAME", "ROLE"
        )?;
        writeln!(f, "{}", "-".repeat(75))?;
        for item in &self.0.items {
            writeln!(
                f,
                "{:<6}  {:<35}  {:<20}  {}",
                item.id,
                truncate(&item.nombre, 35),
                truncate(or_dash(&item.cargo), 20),
                or_dash(&item.chamber)
            )?;
        }
        shown_note(f, self.0.shown, self.0.total)
    }
}

pub struct ProfileView<'a>(pub &'a ProfileViewModel);

impl fmt::Display for ProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KOM profile {}/{}", self.0.chamber, self.0.id)?;
        if let Some(updated) = &self.0.updated_at {
            writeln!(f, "Last saved: {}", updated)?;
        }
        writeln!(f)?;
        writeln!(f, "Biography: {}", or_dash(&self.0.biografia))?;
        writeln!(f, "Email:     {}", or_dash(&self.0.email))?;
        writeln!(f, "Phone:     {}", or_dash(&self.0.telefono))?;
        writeln!(f, "Web:       {}", or_dash(&self.0.web))?;
        writeln!(f, "Photo:     {}", or_dash(&self.0.foto_url))?;
        writeln!(f, "Notes:     {}", or_dash(&self.0.notas))?;

        writeln!(f)?;
        if self.0.topics.is_empty() {
            writeln!(f, "Topics: (no topics registered)")?;
        } else {
            writeln!(f, "Topics:")?;
            for (i, topic) in self.0.topics.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {} - {}",
                    i + 1,
                    topic.titulo,
                    clean_inline(&topic.contenido, SNIPPET_MAX)
                )?;
            }
        }

        if self.0.links.is_empty() {
            writeln!(f, "Links:  (no links)")?;
        } else {
            writeln!(f, "Links:")?;
            for (i, link) in self.0.links.iter().enumerate() {
                writeln!(f, "  {}. {} <{}>", i + 1, link.title, link.url)?;
            }
        }
        Ok(())
    }
}

pub struct ActivityView<'a>(pub &'a ActivityViewModel);

impl fmt::Display for ActivityView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.items.is_empty() {
            writeln!(f, "No recent activity.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<f$}  {:<12}  {:<12}  {:<35}  {:<e$}  SESSION",
            "DATE",
            "AGE",
            "GROUP",
            "COMMISSION",
            "STATUS",
            f = FECHA_COL,
            e = ESTADO_COL
        )?;
        writeln!(f, "{}", "-".repeat(100))?;
        for item in &self.0.items {
            writeln!(
                f,
                "{:<f$}  {:<12}  {:<12}  {:<35}  {:<e$}  {}",
                or_dash(&item.fecha),
                relative_age(&item.fecha),
                truncate(or_dash(&item.group), 12),
                truncate(or_dash(&item.commission), 35),
                truncate(or_dash(&item.estado), ESTADO_COL),
                or_dash(&item.session_id),
                f = FECHA_COL,
                e = ESTADO_COL
            )?;
        }
        shown_note(f, self.0.shown, self.0.total)
    }
}

pub struct NewsView<'a>(pub &'a NewsViewModel);

impl fmt::Display for NewsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.items.is_empty() {
            writeln!(f, "No news from '{}'.", self.0.source)?;
            return Ok(());
        }

        for item in &self.0.items {
            writeln!(
                f,
                "{:<f$}  {}",
                or_dash(&item.fecha),
                truncate(&item.titulo, 80),
                f = FECHA_COL
            )?;
            if !item.url.trim().is_empty() {
                writeln!(f, "{:<f$}  {}", "", item.url, f = FECHA_COL)?;
            }
        }
        shown_note(f, self.0.shown, self.0.total)
    }
}

pub struct TranscriptView<'a>(pub &'a TranscriptViewModel);

impl fmt::Display for TranscriptView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Transcript {} / {} / {}",
            self.0.group, self.0.commission_name, self.0.session_id
        )?;
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f, "{}", self.0.text)
    }
}

pub struct ChatView<'a>(pub &'a ChatViewModel);

impl fmt::Display for ChatView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.answer)
    }
}

pub struct UploadView<'a>(pub &'a UploadViewModel);

impl fmt::Display for UploadView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Uploaded {} as {}", self.0.file, self.0.saved_as)
    }
}
