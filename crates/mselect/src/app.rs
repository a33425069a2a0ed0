//! The full-screen application: a header, the search-select control and a
//! key hint footer.

use crate::catalog::CatalogSource;
use crate::search_select::{self, SearchSelect, Selected};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mselect_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;

const MAX_WIDTH: u16 = 72;

/// Startup data for [`App`].
pub struct AppFlags {
    pub source: Arc<dyn CatalogSource>,
    pub list_height: u16,
}

#[derive(Debug)]
pub enum Msg {
    Resized(u16, u16),
    Key(KeyEvent),
    Paste(String),
    Select(search_select::Message),
}

pub struct App {
    select: SearchSelect,
}

impl App {
    /// The characters picked so far, in pick order.
    pub fn selection(&self) -> Vec<Selected> {
        self.select.selection().to_vec()
    }

    pub fn search(&self) -> &SearchSelect {
        &self.select
    }
}

/// Header, body and footer rows, with the body centered and capped in width.
fn screen(area: Rect) -> [Rect; 3] {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [_, body, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(area.width.min(MAX_WIDTH)),
        Constraint::Fill(1),
    ])
    .areas(body);
    [header, body, footer]
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

impl Model for App {
    type Message = Msg;
    type Flags = AppFlags;

    fn init(flags: AppFlags) -> (Self, Command<Msg>) {
        log::info!("starting, list height {}", flags.list_height);
        let (select, fetch) = SearchSelect::new(flags.source, flags.list_height);
        (
            App { select },
            Command::batch([
                fetch.map(Msg::Select),
                Command::window_size(Msg::Resized),
                Command::set_title("mselect"),
            ]),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Resized(width, height) => {
                let [_, body, _] = screen(Rect::new(0, 0, width, height));
                self.select
                    .update(search_select::Message::Resize(body))
                    .map(Msg::Select)
            }
            Msg::Key(key) if is_quit(&key) => {
                log::info!("quit with {} selected", self.select.selection().len());
                Command::quit()
            }
            Msg::Key(key) => self
                .select
                .update(search_select::Message::Key(key))
                .map(Msg::Select),
            Msg::Paste(text) => self
                .select
                .update(search_select::Message::Paste(text))
                .map(Msg::Select),
            Msg::Select(msg) => self.select.update(msg).map(Msg::Select),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [header, body, footer] = screen(frame.area());

        let title = Line::from(vec![
            Span::styled(
                "mselect",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Rick and Morty characters",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), header);

        self.select.view(frame, body);

        let hint = Style::default().fg(Color::DarkGray);
        let footer_line = Line::from(vec![
            Span::styled(
                format!("{} selected", self.select.selection().len()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                "  ·  enter/click toggle  ·  backspace remove  ·  ctrl+c done",
                hint,
            ),
        ]);
        frame.render_widget(
            Paragraph::new(footer_line).alignment(Alignment::Center),
            footer,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events("keys", |event| match event {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Msg::Key(key)),
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            TerminalEvent::Resize(width, height) => Some(Msg::Resized(width, height)),
            _ => None,
        })];
        subs.extend(
            self.select
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Select)),
        );
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FetchError, FilterQuery, Page, ResultItem};
    use crossterm::event::KeyEventState;
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use mselect_core::testing::TestProgram;

    struct Fixed;

    impl CatalogSource for Fixed {
        fn fetch_page(&self, query: &FilterQuery) -> BoxFuture<'static, Result<Page, FetchError>> {
            let items = ["Rick Sanchez", "Morty Smith", "Summer Smith"]
                .iter()
                .enumerate()
                .map(|(i, name)| ResultItem {
                    id: (i + 1).to_string(),
                    name: name.to_string(),
                    image: String::new(),
                    episode_count: 51 - i,
                })
                .filter(|item| item.name.to_lowercase().contains(&query.name.to_lowercase()))
                .collect();
            futures::future::ready(Ok(Page {
                items,
                total_pages: 1,
            }))
            .boxed()
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Msg::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    async fn app() -> TestProgram<App> {
        let mut prog = TestProgram::<App>::new(AppFlags {
            source: Arc::new(Fixed),
            list_height: 8,
        });
        prog.resolve_all().await;
        // The startup size query reads the real terminal; pin it.
        prog.send(Msg::Resized(80, 24));
        prog
    }

    #[tokio::test]
    async fn quits_on_ctrl_c_and_ctrl_q() {
        for c in ['c', 'q'] {
            let mut prog = app().await;
            prog.send(key(KeyCode::Char(c), KeyModifiers::CONTROL));
            assert!(prog.has_quit());
        }
    }

    #[tokio::test]
    async fn plain_q_is_typed_not_quit() {
        let mut prog = app().await;
        prog.send(key(KeyCode::Char('q'), KeyModifiers::NONE));
        prog.drain_messages();
        assert!(!prog.has_quit());
        assert!(prog.model().search().is_open());
    }

    #[tokio::test]
    async fn body_is_centered_below_header() {
        let prog = app().await;
        let control = prog.model().search().regions().control;
        assert_eq!(control.x, 4);
        assert_eq!(control.y, 2);
        assert_eq!(control.width, MAX_WIDTH);
    }

    #[tokio::test]
    async fn search_pick_and_report() {
        let mut prog = app().await;
        for c in "smith".chars() {
            prog.send(key(KeyCode::Char(c), KeyModifiers::NONE));
        }
        prog.resolve_all().await;
        assert_eq!(prog.model().search().results().len(), 2);

        prog.send(key(KeyCode::Down, KeyModifiers::NONE));
        prog.send(key(KeyCode::Enter, KeyModifiers::NONE));
        prog.drain_messages();

        let screen = prog.render_string(80, 24);
        assert!(screen.contains("mselect"));
        assert!(screen.contains("Summer Smith ✕"));
        assert!(screen.contains("1 selected"));
        assert!(screen.contains("49 Episodes"));

        let picked = prog.model().selection();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "3");
        assert_eq!(picked[0].name, "Summer Smith");
    }

    #[tokio::test]
    async fn keyboard_listener_is_permanent() {
        let mut prog = app().await;
        let closed = prog.subscription_ids();
        assert_eq!(closed.len(), 2);

        prog.send(key(KeyCode::Char('x'), KeyModifiers::NONE));
        prog.drain_messages();
        let open = prog.subscription_ids();
        assert_eq!(open.len(), 4);
        assert!(closed.iter().all(|id| open.contains(id)));
    }
}
