use legiscope_types::{is_blank, KomProfile, LinkEntry, TopicEntry};

use crate::error::{Error, Result};

/// Which topic entry a composition will land on when committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Append to the end of the topic list.
    New,
    /// Replace the entry at this index in place.
    Existing(usize),
}

/// Topic composition state.
///
/// `Idle` means no topic form is open. `Composing` holds the in-progress
/// title/content pair; nothing touches the draft until the composition is
/// committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composer {
    Idle,
    Composing {
        target: Target,
        titulo: String,
        contenido: String,
    },
}

/// In-memory draft of one politician's KOM profile.
///
/// The display name/role come from caller context (the politician list) and
/// are never serialized back to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub display_name: String,
    pub display_role: String,
    pub profile: KomProfile,
}

/// One open profile-editing session.
///
/// The session is the sole owner of the draft between load and save; dropping
/// it discards all local edits. A new session always starts from a fresh
/// fetch - there is no cross-open cache.
#[derive(Debug, Clone)]
pub struct EditorSession {
    chamber: String,
    id: String,
    draft: Draft,
    composer: Composer,
}

impl EditorSession {
    /// Open a session over an already-fetched profile.
    ///
    /// Fetch failures are surfaced by the API layer before any session
    /// exists, so an `EditorSession` never holds stale data.
    pub fn open(
        chamber: impl Into<String>,
        id: impl Into<String>,
        display_name: impl Into<String>,
        display_role: impl Into<String>,
        profile: KomProfile,
    ) -> Self {
        Self {
            chamber: chamber.into(),
            id: id.into(),
            draft: Draft {
                display_name: display_name.into(),
                display_role: display_role.into(),
                profile,
            },
            composer: Composer::Idle,
        }
    }

    pub fn chamber(&self) -> &str {
        &self.chamber
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the draft's free-text fields (biography, contacts).
    pub fn profile_mut(&mut self) -> &mut KomProfile {
        &mut self.draft.profile
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.composer, Composer::Composing { .. })
    }

    // ---- topic composition ----

    /// `Idle → Composing(New)`. Rejects an empty title without changing state.
    pub fn compose_new(&mut self, titulo: &str) -> Result<()> {
        if is_blank(titulo) {
            return Err(Error::Validation("topic title is required".to_string()));
        }
        self.composer = Composer::Composing {
            target: Target::New,
            titulo: titulo.trim().to_string(),
            contenido: String::new(),
        };
        Ok(())
    }

    /// `Idle → Composing(Existing(i))`, pre-filled from entry i.
    pub fn compose_existing(&mut self, index: usize) -> Result<()> {
        let len = self.draft.profile.topicos.len();
        let entry = self
            .draft
            .profile
            .topicos
            .get(index)
            .ok_or(Error::OutOfBounds { index, len })?;
        self.composer = Composer::Composing {
            target: Target::Existing(index),
            titulo: entry.titulo.clone(),
            contenido: entry.contenido.clone(),
        };
        Ok(())
    }

    /// The in-progress (title, content) buffers, editable while composing.
    pub fn composition_mut(&mut self) -> Option<(&mut String, &mut String)> {
        match &mut self.composer {
            Composer::Composing {
                titulo, contenido, ..
            } => Some((titulo, contenido)),
            Composer::Idle => None,
        }
    }

    /// Commit the open composition into the draft and return to `Idle`.
    ///
    /// Both title and content must be non-empty; otherwise the composer stays
    /// open with its buffers untouched.
    pub fn commit_topic(&mut self) -> Result<()> {
        let (target, titulo, contenido) = match &self.composer {
            Composer::Idle => {
                return Err(Error::Validation("no topic composition open".to_string()))
            }
            Composer::Composing {
                target,
                titulo,
                contenido,
            } => (*target, titulo.clone(), contenido.clone()),
        };

        if is_blank(&titulo) || is_blank(&contenido) {
            return Err(Error::Validation(
                "topic title and content are required".to_string(),
            ));
        }

        let entry = TopicEntry { titulo, contenido };
        match target {
            Target::New => self.draft.profile.topicos.push(entry),
            Target::Existing(index) => {
                let len = self.draft.profile.topicos.len();
                let slot = self
                    .draft
                    .profile
                    .topicos
                    .get_mut(index)
                    .ok_or(Error::OutOfBounds { index, len })?;
                *slot = entry;
            }
        }
        self.composer = Composer::Idle;
        Ok(())
    }

    /// Discard the open composition. Idempotent.
    pub fn cancel_topic(&mut self) {
        self.composer = Composer::Idle;
    }

    /// Remove topic `index`, shifting later entries down.
    ///
    /// Any open composition is resolved first so no dangling index survives:
    /// composing the deleted entry closes the form, composing a later entry
    /// remaps its target down by one, composing a new entry is unaffected.
    pub fn delete_topic(&mut self, index: usize) -> Result<TopicEntry> {
        let len = self.draft.profile.topicos.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }

        match &mut self.composer {
            Composer::Composing {
                target: Target::Existing(j),
                ..
            } => {
                if *j == index {
                    self.composer = Composer::Idle;
                } else if *j > index {
                    *j -= 1;
                }
            }
            _ => {}
        }

        Ok(self.draft.profile.topicos.remove(index))
    }

    // ---- link list ----

    /// Append a link. Both title and url are required.
    pub fn add_link(&mut self, title: &str, url: &str) -> Result<()> {
        if is_blank(title) || is_blank(url) {
            return Err(Error::Validation("link title and url are required".to_string()));
        }
        self.draft.profile.links.push(LinkEntry {
            title: title.trim().to_string(),
            url: url.trim().to_string(),
        });
        Ok(())
    }

    /// Remove link `index` unconditionally (no confirmation step).
    pub fn remove_link(&mut self, index: usize) -> Result<LinkEntry> {
        let len = self.draft.profile.links.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        Ok(self.draft.profile.links.remove(index))
    }

    // ---- persistence ----

    /// The payload POSTed on save: the full draft, sent atomically.
    ///
    /// Does not mutate the session, so a failed save leaves the draft exactly
    /// as it was and the editor open for a manual retry.
    pub fn save_payload(&self) -> KomProfile {
        let mut payload = self.draft.profile.clone();
        payload.updated_at = None;
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_topics(titles: &[(&str, &str)]) -> EditorSession {
        let profile = KomProfile {
            topicos: titles
                .iter()
                .map(|(t, c)| TopicEntry {
                    titulo: t.to_string(),
                    contenido: c.to_string(),
                })
                .collect(),
            ..KomProfile::default()
        };
        EditorSession::open("camara", "42", "Jane Doe", "Diputada", profile)
    }

    #[test]
    fn test_open_with_empty_lists() {
        let session = session_with_topics(&[]);
        assert!(session.draft().profile.topicos.is_empty());
        assert!(session.draft().profile.links.is_empty());
        assert!(!session.is_composing());
    }

    #[test]
    fn test_new_topic_appends() {
        let mut session = session_with_topics(&[]);
        session.compose_new("T1").unwrap();
        let (_, contenido) = session.composition_mut().unwrap();
        contenido.push_str("C1");
        session.commit_topic().unwrap();

        assert_eq!(
            session.draft().profile.topicos,
            vec![TopicEntry {
                titulo: "T1".to_string(),
                contenido: "C1".to_string()
            }]
        );
        assert!(!session.is_composing());
    }

    #[test]
    fn test_compose_new_rejects_empty_title() {
        let mut session = session_with_topics(&[]);
        let err = session.compose_new("   ").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!session.is_composing());
    }

    #[test]
    fn test_commit_requires_content() {
        let mut session = session_with_topics(&[]);
        session.compose_new("T1").unwrap();
        let err = session.commit_topic().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        // Still composing, nothing appended.
        assert!(session.is_composing());
        assert!(session.draft().profile.topicos.is_empty());
    }

    #[test]
    fn test_edit_existing_replaces_in_place() {
        let mut session = session_with_topics(&[("A", "a"), ("B", "b"), ("C", "c")]);
        session.compose_existing(0).unwrap();
        {
            let (titulo, _) = session.composition_mut().unwrap();
            titulo.clear();
            titulo.push_str("T2");
        }
        session.commit_topic().unwrap();

        let topics = &session.draft().profile.topicos;
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].titulo, "T2");
        assert_eq!(topics[0].contenido, "a");
        assert_eq!(topics[1].titulo, "B");
        assert_eq!(topics[2].titulo, "C");
    }

    #[test]
    fn test_compose_existing_prefills() {
        let mut session = session_with_topics(&[("A", "body")]);
        session.compose_existing(0).unwrap();
        match session.composer() {
            Composer::Composing {
                target,
                titulo,
                contenido,
            } => {
                assert_eq!(*target, Target::Existing(0));
                assert_eq!(titulo, "A");
                assert_eq!(contenido, "body");
            }
            Composer::Idle => panic!("expected composing state"),
        }
    }

    #[test]
    fn test_delete_middle_preserves_order() {
        let mut session = session_with_topics(&[("A", "a"), ("B", "b"), ("C", "c")]);
        let removed = session.delete_topic(1).unwrap();
        assert_eq!(removed.titulo, "B");

        let topics = &session.draft().profile.topicos;
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].titulo, "A");
        assert_eq!(topics[1].titulo, "C");
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let mut session = session_with_topics(&[("A", "a")]);
        let err = session.delete_topic(3).unwrap_err();
        assert_eq!(err, Error::OutOfBounds { index: 3, len: 1 });
    }

    #[test]
    fn test_delete_closes_composer_on_same_entry() {
        let mut session = session_with_topics(&[("A", "a"), ("B", "b")]);
        session.compose_existing(1).unwrap();
        session.delete_topic(1).unwrap();
        assert!(!session.is_composing());
        assert_eq!(session.draft().profile.topicos.len(), 1);
    }

    #[test]
    fn test_delete_remaps_composer_on_later_entry() {
        let mut session = session_with_topics(&[("A", "a"), ("B", "b"), ("C", "c")]);
        session.compose_existing(2).unwrap();
        session.delete_topic(0).unwrap();

        match session.composer() {
            Composer::Composing { target, .. } => assert_eq!(*target, Target::Existing(1)),
            Composer::Idle => panic!("composer should survive unrelated delete"),
        }

        // Committing after the remap still lands on "C".
        {
            let (titulo, _) = session.composition_mut().unwrap();
            titulo.clear();
            titulo.push_str("C2");
        }
        session.commit_topic().unwrap();
        assert_eq!(session.draft().profile.topicos[1].titulo, "C2");
    }

    #[test]
    fn test_delete_keeps_new_composition() {
        let mut session = session_with_topics(&[("A", "a")]);
        session.compose_new("fresh").unwrap();
        session.delete_topic(0).unwrap();
        assert!(session.is_composing());
    }

    #[test]
    fn test_add_link_requires_both_fields() {
        let mut session = session_with_topics(&[]);
        let err = session.add_link("Prensa", "").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(session.draft().profile.links.is_empty());

        session.add_link("Prensa", "https://example.org").unwrap();
        assert_eq!(session.draft().profile.links.len(), 1);
    }

    #[test]
    fn test_remove_link_shifts_down() {
        let mut session = session_with_topics(&[]);
        session.add_link("a", "u1").unwrap();
        session.add_link("b", "u2").unwrap();
        session.remove_link(0).unwrap();
        assert_eq!(session.draft().profile.links[0].title, "b");
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut session = session_with_topics(&[("A", "a")]);
        session.compose_existing(0).unwrap();
        {
            let (titulo, _) = session.composition_mut().unwrap();
            titulo.push_str("-edited");
        }
        session.cancel_topic();
        session.cancel_topic(); // idempotent

        assert!(!session.is_composing());
        assert_eq!(session.draft().profile.topicos[0].titulo, "A");
    }

    #[test]
    fn test_save_payload_does_not_mutate() {
        let mut session = session_with_topics(&[("A", "a")]);
        session.profile_mut().biografia = "bio".to_string();
        let before = session.draft().clone();

        let payload = session.save_payload();
        assert_eq!(payload.biografia, "bio");
        assert!(payload.updated_at.is_none());

        // Simulated failed save: the caller keeps the session as-is.
        assert_eq!(*session.draft(), before);
    }
}
