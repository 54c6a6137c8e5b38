use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use legiscope_editor::EditorSession;
use legiscope_types::KomProfile;

/// Persists the draft when the user hits save.
///
/// The editor stays open on failure, so the trait reports errors as plain
/// strings for the status bar instead of aborting the loop.
pub trait ProfileStore {
    fn save(&mut self, chamber: &str, id: &str, profile: &KomProfile) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
    Fields,
    Topics,
    Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Biografia,
    Email,
    Telefono,
    Web,
    FotoUrl,
    Notas,
}

pub(crate) const FIELDS: [Field; 6] = [
    Field::Biografia,
    Field::Email,
    Field::Telefono,
    Field::Web,
    Field::FotoUrl,
    Field::Notas,
];

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Biografia => "Biography",
            Field::Email => "Email",
            Field::Telefono => "Phone",
            Field::Web => "Web",
            Field::FotoUrl => "Photo URL",
            Field::Notas => "Notes",
        }
    }

    pub fn get<'a>(self, profile: &'a KomProfile) -> &'a str {
        match self {
            Field::Biografia => &profile.biografia,
            Field::Email => &profile.email,
            Field::Telefono => &profile.telefono,
            Field::Web => &profile.web,
            Field::FotoUrl => &profile.foto_url,
            Field::Notas => &profile.notas,
        }
    }

    pub fn set(self, profile: &mut KomProfile, value: String) {
        match self {
            Field::Biografia => profile.biografia = value,
            Field::Email => profile.email = value,
            Field::Telefono => profile.telefono = value,
            Field::Web => profile.web = value,
            Field::FotoUrl => profile.foto_url = value,
            Field::Notas => profile.notas = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComposeFocus {
    Titulo,
    Contenido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkFocus {
    Title,
    Url,
}

/// Which input surface owns the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    Browse,
    EditField { field: Field, buffer: String },
    TopicTitlePrompt { buffer: String },
    ComposeTopic { focus: ComposeFocus },
    AddLink { title: String, url: String, focus: LinkFocus },
    ConfirmDeleteTopic { index: usize },
    ConfirmQuit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

pub(crate) struct EditorApp {
    pub session: EditorSession,
    pub mode: Mode,
    pub pane: Pane,
    pub field_cursor: usize,
    pub topic_cursor: usize,
    pub link_cursor: usize,
    pub status: Option<Status>,
    pub dirty: bool,
    pub should_quit: bool,
}

impl EditorApp {
    pub fn new(session: EditorSession) -> Self {
        Self {
            session,
            mode: Mode::Browse,
            pane: Pane::Fields,
            field_cursor: 0,
            topic_cursor: 0,
            link_cursor: 0,
            status: None,
            dirty: false,
            should_quit: false,
        }
    }

    fn topic_count(&self) -> usize {
        self.session.draft().profile.topicos.len()
    }

    fn link_count(&self) -> usize {
        self.session.draft().profile.links.len()
    }

    fn clamp_cursors(&mut self) {
        let topics = self.topic_count();
        if topics == 0 {
            self.topic_cursor = 0;
        } else if self.topic_cursor >= topics {
            self.topic_cursor = topics - 1;
        }
        let links = self.link_count();
        if links == 0 {
            self.link_cursor = 0;
        } else if self.link_cursor >= links {
            self.link_cursor = links - 1;
        }
    }

    fn info(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Info(msg.into()));
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Error(msg.into()));
    }

    pub fn on_key(&mut self, key: KeyEvent, store: &mut dyn ProfileStore) {
        self.status = None;
        match self.mode.clone() {
            Mode::Browse => self.on_browse_key(key, store),
            Mode::EditField { field, buffer } => self.on_edit_field_key(key, field, buffer),
            Mode::TopicTitlePrompt { buffer } => self.on_title_prompt_key(key, buffer),
            Mode::ComposeTopic { focus } => self.on_compose_key(key, focus),
            Mode::AddLink { title, url, focus } => self.on_add_link_key(key, title, url, focus),
            Mode::ConfirmDeleteTopic { index } => self.on_confirm_delete_topic(key, index),
            Mode::ConfirmQuit => self.on_confirm_quit(key),
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent, store: &mut dyn ProfileStore) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.dirty {
                    self.mode = Mode::ConfirmQuit;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Fields => Pane::Topics,
                    Pane::Topics => Pane::Links,
                    Pane::Links => Pane::Fields,
                };
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter | KeyCode::Char('e') => self.open_selected(),
            KeyCode::Char('n') => {
                self.mode = Mode::TopicTitlePrompt {
                    buffer: String::new(),
                };
            }
            KeyCode::Char('a') => {
                self.mode = Mode::AddLink {
                    title: String::new(),
                    url: String::new(),
                    focus: LinkFocus::Title,
                };
            }
            KeyCode::Char('d') => match self.pane {
                Pane::Topics if self.topic_count() > 0 => {
                    self.mode = Mode::ConfirmDeleteTopic {
                        index: self.topic_cursor,
                    };
                }
                Pane::Links if self.link_count() > 0 => self.remove_selected_link(),
                _ => {}
            },
            KeyCode::Char('s') => self.save(store),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: i64) {
        let (cursor, len) = match self.pane {
            Pane::Fields => (&mut self.field_cursor, FIELDS.len()),
            Pane::Topics => (&mut self.topic_cursor, self.session.draft().profile.topicos.len()),
            Pane::Links => (&mut self.link_cursor, self.session.draft().profile.links.len()),
        };
        if len == 0 {
            return;
        }
        let next = (*cursor as i64 + delta).clamp(0, len as i64 - 1);
        *cursor = next as usize;
    }

    fn open_selected(&mut self) {
        match self.pane {
            Pane::Fields => {
                let field = FIELDS[self.field_cursor];
                let buffer = field.get(&self.session.draft().profile).to_string();
                self.mode = Mode::EditField { field, buffer };
            }
            Pane::Topics => {
                if self.topic_count() == 0 {
                    return;
                }
                match self.session.compose_existing(self.topic_cursor) {
                    Ok(()) => self.mode = Mode::ComposeTopic {
                        focus: ComposeFocus::Contenido,
                    },
                    Err(e) => self.error(e.to_string()),
                }
            }
            Pane::Links => {}
        }
    }

    fn remove_selected_link(&mut self) {
        match self.session.remove_link(self.link_cursor) {
            Ok(removed) => {
                self.dirty = true;
                self.clamp_cursors();
                self.info(format!("removed link '{}'", removed.title));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn save(&mut self, store: &mut dyn ProfileStore) {
        if self.session.is_composing() {
            self.error("finish or cancel the open topic before saving");
            return;
        }
        let payload = self.session.save_payload();
        match store.save(self.session.chamber(), self.session.id(), &payload) {
            Ok(()) => {
                self.dirty = false;
                self.info("saved");
            }
            Err(e) => self.error(format!("save failed: {}", e)),
        }
    }

    fn on_edit_field_key(&mut self, key: KeyEvent, field: Field, mut buffer: String) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                field.set(self.session.profile_mut(), buffer);
                self.dirty = true;
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::EditField { field, buffer };
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.mode = Mode::EditField { field, buffer };
            }
            _ => self.mode = Mode::EditField { field, buffer },
        }
    }

    fn on_title_prompt_key(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => match self.session.compose_new(&buffer) {
                Ok(()) => {
                    self.mode = Mode::ComposeTopic {
                        focus: ComposeFocus::Contenido,
                    };
                }
                Err(e) => {
                    self.error(e.to_string());
                    self.mode = Mode::TopicTitlePrompt { buffer };
                }
            },
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::TopicTitlePrompt { buffer };
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.mode = Mode::TopicTitlePrompt { buffer };
            }
            _ => self.mode = Mode::TopicTitlePrompt { buffer },
        }
    }

    fn on_compose_key(&mut self, key: KeyEvent, focus: ComposeFocus) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            match self.session.commit_topic() {
                Ok(()) => {
                    self.dirty = true;
                    self.mode = Mode::Browse;
                    self.clamp_cursors();
                    self.info("topic committed");
                }
                Err(e) => self.error(e.to_string()),
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.session.cancel_topic();
                self.mode = Mode::Browse;
            }
            KeyCode::Tab => {
                self.mode = Mode::ComposeTopic {
                    focus: match focus {
                        ComposeFocus::Titulo => ComposeFocus::Contenido,
                        ComposeFocus::Contenido => ComposeFocus::Titulo,
                    },
                };
            }
            KeyCode::Enter => {
                if focus == ComposeFocus::Contenido {
                    if let Some((_, contenido)) = self.session.composition_mut() {
                        contenido.push('\n');
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some((titulo, contenido)) = self.session.composition_mut() {
                    match focus {
                        ComposeFocus::Titulo => {
                            titulo.pop();
                        }
                        ComposeFocus::Contenido => {
                            contenido.pop();
                        }
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some((titulo, contenido)) = self.session.composition_mut() {
                    match focus {
                        ComposeFocus::Titulo => titulo.push(c),
                        ComposeFocus::Contenido => contenido.push(c),
                    }
                }
            }
            _ => {}
        }
    }

    fn on_add_link_key(
        &mut self,
        key: KeyEvent,
        mut title: String,
        mut url: String,
        focus: LinkFocus,
    ) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Tab => {
                self.mode = Mode::AddLink {
                    title,
                    url,
                    focus: match focus {
                        LinkFocus::Title => LinkFocus::Url,
                        LinkFocus::Url => LinkFocus::Title,
                    },
                };
            }
            KeyCode::Enter => match self.session.add_link(&title, &url) {
                Ok(()) => {
                    self.dirty = true;
                    self.mode = Mode::Browse;
                    self.info("link added");
                }
                Err(e) => {
                    self.error(e.to_string());
                    self.mode = Mode::AddLink { title, url, focus };
                }
            },
            KeyCode::Backspace => {
                match focus {
                    LinkFocus::Title => {
                        title.pop();
                    }
                    LinkFocus::Url => {
                        url.pop();
                    }
                }
                self.mode = Mode::AddLink { title, url, focus };
            }
            KeyCode::Char(c) => {
                match focus {
                    LinkFocus::Title => title.push(c),
                    LinkFocus::Url => url.push(c),
                }
                self.mode = Mode::AddLink { title, url, focus };
            }
            _ => self.mode = Mode::AddLink { title, url, focus },
        }
    }

    fn on_confirm_delete_topic(&mut self, key: KeyEvent, index: usize) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.session.delete_topic(index) {
                    Ok(removed) => {
                        self.dirty = true;
                        self.clamp_cursors();
                        self.info(format!("deleted topic '{}'", removed.titulo));
                    }
                    Err(e) => self.error(e.to_string()),
                }
                self.mode = Mode::Browse;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn on_confirm_quit(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }
}
