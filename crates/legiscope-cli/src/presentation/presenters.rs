//! Domain → view-model mapping, including the client-side render cap.

use legiscope_types::{
    ActivityItem, Commission, CommissionSessions, HealthStatus, KomProfile, NewsItem, Politician,
};

use super::view_models::*;

/// Lists render at most this many rows; the backend sends everything and the
/// client truncates, the same way the dashboard capped its tables.
pub const RENDER_CAP: usize = 100;

pub fn present_health(api_url: &str, health: &HealthStatus) -> HealthViewModel {
    HealthViewModel {
        api_url: api_url.to_string(),
        success: health.success,
        gemini_configured: health.gemini_configured,
    }
}

pub fn present_commission_list(
    group: &str,
    query: &str,
    commissions: Vec<Commission>,
) -> CommissionListViewModel {
    let total = commissions.len();
    let items: Vec<CommissionRowViewModel> = commissions
        .into_iter()
        .take(RENDER_CAP)
        .map(|c| CommissionRowViewModel {
            name: if c.commission_name.is_empty() {
                c.nombre
            } else {
                c.commission_name
            },
            total_sessions: c.total_sessions,
        })
        .collect();

    CommissionListViewModel {
        group: group.to_string(),
        query: query.to_string(),
        total,
        shown: items.len(),
        items,
    }
}

pub fn present_sessions(
    sessions: CommissionSessions,
    year_filter: Option<&str>,
) -> SessionsViewModel {
    let total = sessions.total_sessions();
    // The cap bounds the whole table, not each year block.
    let mut remaining = RENDER_CAP;
    let mut shown = 0;
    let mut blocks = Vec::new();
    for year in &sessions.years {
        if year_filter.map(|y| y != year.as_str()).unwrap_or(false) {
            continue;
        }
        let rows: Vec<SessionRowViewModel> = sessions
            .sessions_by_year
            .get(year)
            .map(|rows| {
                rows.iter()
                    .take(remaining)
                    .map(|r| SessionRowViewModel {
                        id: r.id.clone(),
                        mes: r.mes.clone(),
                        fecha: r.fecha.clone(),
                        estado: r.estado.clone(),
                        citacion: r.citacion.clone(),
                        acta: r.acta.clone(),
                        cuenta: r.cuenta.clone(),
                        transcript: r.transcript,
                    })
                    .collect()
            })
            .unwrap_or_default();
        remaining -= rows.len();
        shown += rows.len();
        blocks.push(YearBlockViewModel {
            year: year.clone(),
            rows,
        });
        if remaining == 0 {
            break;
        }
    }

    SessionsViewModel {
        group: sessions.group,
        commission_name: sessions.commission_name,
        total,
        shown,
        blocks,
    }
}

pub fn present_politician_list(query: &str, politicians: Vec<Politician>) -> PoliticianListViewModel {
    let total = politicians.len();
    let items: Vec<PoliticianRowViewModel> = politicians
        .into_iter()
        .take(RENDER_CAP)
        .map(|p| PoliticianRowViewModel {
            id: p.id,
            nombre: p.nombre,
            cargo: p.cargo,
            chamber: p.chamber,
        })
        .collect();

    PoliticianListViewModel {
        query: query.to_string(),
        total,
        shown: items.len(),
        items,
    }
}

pub fn present_profile(chamber: &str, id: &str, profile: KomProfile) -> ProfileViewModel {
    ProfileViewModel {
        chamber: chamber.to_string(),
        id: id.to_string(),
        foto_url: profile.foto_url,
        biografia: profile.biografia,
        email: profile.email,
        telefono: profile.telefono,
        web: profile.web,
        notas: profile.notas,
        updated_at: profile.updated_at,
        topics: profile
            .topicos
            .into_iter()
            .map(|t| TopicViewModel {
                titulo: t.titulo,
                contenido: t.contenido,
            })
            .collect(),
        links: profile
            .links
            .into_iter()
            .map(|l| LinkViewModel {
                title: l.title,
                url: l.url,
            })
            .collect(),
    }
}

pub fn present_activity(items: Vec<ActivityItem>) -> ActivityViewModel {
    let total = items.len();
    let items: Vec<ActivityRowViewModel> = items
        .into_iter()
        .take(RENDER_CAP)
        .map(|a| ActivityRowViewModel {
            fecha: a.fecha,
            group: a.group,
            commission: a.commission,
            estado: a.estado,
            session_id: a.session_id,
        })
        .collect();

    ActivityViewModel {
        total,
        shown: items.len(),
        items,
    }
}

pub fn present_news(source: &str, items: Vec<NewsItem>) -> NewsViewModel {
    let total = items.len();
    let items: Vec<NewsRowViewModel> = items
        .into_iter()
        .take(RENDER_CAP)
        .map(|n| NewsRowViewModel {
            fecha: n.fecha,
            titulo: n.titulo,
            url: n.url,
        })
        .collect();

    NewsViewModel {
        source: source.to_string(),
        total,
        shown: items.len(),
        items,
    }
}
