use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use legiscope_editor::Composer;

use super::app::{ComposeFocus, EditorApp, Field, LinkFocus, Mode, Pane, Status, FIELDS};

pub(crate) fn draw(f: &mut Frame, app: &EditorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_body(f, chunks[1], app);
    render_status(f, chunks[2], app);

    match &app.mode {
        Mode::Browse => {}
        Mode::EditField { field, buffer } => {
            render_prompt(f, &format!(" Edit: {} ", field.label()), buffer);
        }
        Mode::TopicTitlePrompt { buffer } => {
            render_prompt(f, " New topic title ", buffer);
        }
        Mode::ComposeTopic { focus } => render_compose(f, app, *focus),
        Mode::AddLink { title, url, focus } => render_add_link(f, title, url, *focus),
        Mode::ConfirmDeleteTopic { index } => {
            let titulo = app
                .session
                .draft()
                .profile
                .topicos
                .get(*index)
                .map(|t| t.titulo.as_str())
                .unwrap_or("?");
            render_confirm(f, &format!("Delete topic '{}'? (y/n)", titulo));
        }
        Mode::ConfirmQuit => {
            render_confirm(f, "Discard unsaved changes and quit? (y/n)");
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &EditorApp) {
    let draft = app.session.draft();
    let mut title = format!(
        "KOM {}/{}",
        app.session.chamber(),
        app.session.id()
    );
    if !draft.display_name.is_empty() {
        title.push_str(&format!("  {}", draft.display_name));
    }
    if !draft.display_role.is_empty() {
        title.push_str(&format!(" ({})", draft.display_role));
    }
    if app.dirty {
        title.push_str("  [modified]");
    }

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &EditorApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_fields(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    render_topics(f, right[0], app);
    render_links(f, right[1], app);
}

fn pane_block(title: &str, active: bool) -> Block<'_> {
    let style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn render_fields(f: &mut Frame, area: Rect, app: &EditorApp) {
    let profile = &app.session.draft().profile;
    let items: Vec<ListItem> = FIELDS
        .iter()
        .map(|field: &Field| {
            let value = field.get(profile);
            let shown = if value.is_empty() { "--" } else { value };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", field.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(shown.replace('\n', " ")),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if app.pane == Pane::Fields {
        state.select(Some(app.field_cursor));
    }

    let list = List::new(items)
        .block(pane_block(" Fields ", app.pane == Pane::Fields))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_topics(f: &mut Frame, area: Rect, app: &EditorApp) {
    let topicos = &app.session.draft().profile.topicos;
    let items: Vec<ListItem> = if topicos.is_empty() {
        vec![ListItem::new("(no topics registered)")]
    } else {
        topicos
            .iter()
            .map(|t| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        t.titulo.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(t.contenido.replace('\n', " ")),
                ]))
            })
            .collect()
    };

    let mut state = ListState::default();
    if app.pane == Pane::Topics && !topicos.is_empty() {
        state.select(Some(app.topic_cursor));
    }

    let list = List::new(items)
        .block(pane_block(" Topics ", app.pane == Pane::Topics))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_links(f: &mut Frame, area: Rect, app: &EditorApp) {
    let links = &app.session.draft().profile.links;
    let items: Vec<ListItem> = if links.is_empty() {
        vec![ListItem::new("(no links)")]
    } else {
        links
            .iter()
            .map(|l| ListItem::new(format!("{} <{}>", l.title, l.url)))
            .collect()
    };

    let mut state = ListState::default();
    if app.pane == Pane::Links && !links.is_empty() {
        state.select(Some(app.link_cursor));
    }

    let list = List::new(items)
        .block(pane_block(" Links ", app.pane == Pane::Links))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status(f: &mut Frame, area: Rect, app: &EditorApp) {
    let line = match &app.status {
        Some(Status::Error(msg)) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
        }
        Some(Status::Info(msg)) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Green)))
        }
        None => Line::from(
            "Tab panes | j/k move | Enter edit | n topic | a link | d delete | s save | q quit",
        ),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(area);
    let v_margin = area.height.saturating_sub(height) / 2;
    Rect {
        x: horizontal[1].x,
        y: area.y + v_margin,
        width: horizontal[1].width,
        height: height.min(area.height),
    }
}

fn render_prompt(f: &mut Frame, title: &str, buffer: &str) {
    let area = centered_rect(60, 3, f.area());
    f.render_widget(Clear, area);
    let input = Paragraph::new(format!("{}_", buffer))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(input, area);
}

fn render_compose(f: &mut Frame, app: &EditorApp, focus: ComposeFocus) {
    let (titulo, contenido) = match app.session.composer() {
        Composer::Composing {
            titulo, contenido, ..
        } => (titulo.as_str(), contenido.as_str()),
        Composer::Idle => return,
    };

    let area = centered_rect(70, 12, f.area());
    f.render_widget(Clear, area);

    let outer = Block::default()
        .title(" Topic (Ctrl+S commit, Esc cancel, Tab focus) ")
        .borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let title_widget = Paragraph::new(titulo).block(pane_block(
        " Title ",
        focus == ComposeFocus::Titulo,
    ));
    f.render_widget(title_widget, rows[0]);

    let content_widget = Paragraph::new(Text::from(contenido))
        .wrap(Wrap { trim: false })
        .block(pane_block(" Content ", focus == ComposeFocus::Contenido));
    f.render_widget(content_widget, rows[1]);
}

fn render_add_link(f: &mut Frame, title: &str, url: &str, focus: LinkFocus) {
    let area = centered_rect(60, 8, f.area());
    f.render_widget(Clear, area);

    let outer = Block::default()
        .title(" Add link (Enter add, Esc cancel, Tab focus) ")
        .borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    let title_widget =
        Paragraph::new(title).block(pane_block(" Title ", focus == LinkFocus::Title));
    f.render_widget(title_widget, rows[0]);

    let url_widget = Paragraph::new(url).block(pane_block(" URL ", focus == LinkFocus::Url));
    f.render_widget(url_widget, rows[1]);
}

fn render_confirm(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 3, f.area());
    f.render_widget(Clear, area);
    let widget = Paragraph::new(message)
        .block(Block::default().title(" Confirm ").borders(Borders::ALL));
    f.render_widget(widget, area);
}
