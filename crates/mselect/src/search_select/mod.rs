//! Incremental, paginated search-and-select over a [`CatalogSource`].
//!
//! [`SearchSelect`] owns the controller state (active filter, pagination,
//! accumulated results, selection, dropdown visibility) together with the
//! widgets that present it. User input arrives as [`Message`]s; fetches
//! leave as [`Command::perform`] and come back as [`Message::Loaded`]
//! carrying the [`Ticket`] they were issued with.
//!
//! The state rules live in the submodules and hold no widget state:
//!
//! | Module | Rule |
//! |--------|------|
//! | [`filter`] | which input values reset the filter |
//! | [`pagination`] | tickets, page advance and the accumulated list |
//! | [`scroll`] | bottom-edge detection |
//! | [`selection`] | the ordered selection set |
//! | [`visibility`] | open/closed transitions |

pub mod filter;
pub mod pagination;
pub mod scroll;
pub mod selection;
pub mod visibility;

pub use pagination::Ticket;
pub use selection::{Selected, SelectionSet};

use crate::catalog::{CatalogSource, FetchError, FilterQuery, Page, ResultItem};
use crate::layout::{self, Regions};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use filter::FilterChange;
use mselect_core::{terminal_events, Command, Component, Subscription, TerminalEvent};
use mselect_widgets::checklist::{self, CheckRow, Checklist};
use mselect_widgets::chips::{self, Chip, ChipBar};
use mselect_widgets::chrome::focus_block;
use mselect_widgets::highlight::highlight_line;
use mselect_widgets::info_board::InfoBoard;
use mselect_widgets::selection::ScrollMetrics;
use mselect_widgets::spinner::{self, Spinner};
use mselect_widgets::text_input::{self, TextInput};
use pagination::{Accumulated, Pagination};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use scroll::BottomEdge;
use std::sync::Arc;
use visibility::Visibility;

const ERROR_TITLE: &str = "Error";
const ERROR_DESCRIPTION: &str = "Please try again later!";
const EMPTY_TITLE: &str = "No matching characters found for this name";
const EMPTY_DESCRIPTION: &str =
    "The character may never have existed or Rick and Morty may have erased them from time.";

#[derive(Debug)]
pub enum Message {
    /// The area the control is drawn in.
    Resize(Rect),
    Key(KeyEvent),
    Paste(String),
    /// Left-button press anywhere on screen.
    Click { column: u16, row: u16 },
    /// Any button press while the dropdown is open.
    Pointer { column: u16, row: u16 },
    /// Wheel notch while the dropdown is open.
    Wheel { up: bool, column: u16, row: u16 },
    /// A fetch finished.
    Loaded {
        ticket: Ticket,
        result: Result<Page, FetchError>,
    },
    Input(text_input::Message),
    Chips(chips::Message),
    List(checklist::Message),
    Spinner(spinner::Message),
}

pub struct SearchSelect {
    source: Arc<dyn CatalogSource>,
    filter: String,
    pagination: Pagination,
    results: Accumulated,
    selection: SelectionSet,
    visibility: Visibility,
    last_error: Option<FetchError>,
    edge: BottomEdge,
    list_height: u16,
    area: Rect,
    regions: Regions,
    input: TextInput,
    chips: ChipBar,
    list: Checklist,
    spinner: Spinner,
    error_board: InfoBoard,
    empty_board: InfoBoard,
}

impl SearchSelect {
    /// Build the control and the command fetching the unfiltered first page.
    pub fn new(source: Arc<dyn CatalogSource>, list_height: u16) -> (Self, Command<Message>) {
        let mut input = TextInput::new("Search character").with_prompt("› ");
        input.focus();

        let mut select = Self {
            source,
            filter: String::new(),
            pagination: Pagination::new(),
            results: Accumulated::new(),
            selection: SelectionSet::new(),
            visibility: Visibility::default(),
            last_error: None,
            edge: BottomEdge::new(),
            list_height,
            area: Rect::default(),
            regions: Regions::default(),
            input,
            chips: ChipBar::new(),
            list: Checklist::new(list_height as usize),
            spinner: Spinner::new("dropdown-spinner").with_title("Loading"),
            error_board: InfoBoard::new(ERROR_TITLE, ERROR_DESCRIPTION),
            empty_board: InfoBoard::new(EMPTY_TITLE, EMPTY_DESCRIPTION),
        };
        let ticket = select.pagination.start();
        select.spinner.start();
        let cmd = select.fetch(ticket);
        (select, cmd)
    }

    /// The active name filter; empty for the default listing.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn results(&self) -> &[ResultItem] {
        self.results.items()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn regions(&self) -> Regions {
        self.regions
    }

    /// Apply a new input value to the filter.
    pub fn text_changed(&mut self, value: &str) -> Command<Message> {
        let filter = match filter::classify(&self.filter, value) {
            FilterChange::Keep => return Command::none(),
            FilterChange::Reset(filter) => filter,
        };
        log::debug!("filter reset: {:?} -> {:?}", self.filter, filter);

        self.filter = filter;
        self.results.clear();
        self.last_error = None;
        self.list.clear();
        self.edge.settle(self.list.metrics());
        let ticket = self.pagination.reset();
        self.spinner.start();
        self.fetch(ticket)
    }

    /// Select `id` if it is not selected, otherwise deselect it.
    pub fn toggle(&mut self, id: &str, name: &str) {
        self.selection.toggle(id, name);
        self.selection_changed();
    }

    /// Deselect `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.selection.remove(id);
        self.selection_changed();
    }

    /// A pointer press landed outside the control.
    pub fn outside_pointer(&mut self) {
        if self.visibility.is_open() {
            log::debug!("dropdown closed");
        }
        self.visibility.on_outside_pointer();
        self.list.blur();
        self.relayout();
    }

    /// Feed a list scroll position; fetches the next page when the bottom
    /// was just reached.
    pub fn scrolled(&mut self, metrics: ScrollMetrics) -> Command<Message> {
        if !self.edge.observe(metrics) {
            return Command::none();
        }
        match self.pagination.advance() {
            Some(ticket) => {
                self.spinner.start();
                self.fetch(ticket)
            }
            None => Command::none(),
        }
    }

    fn open(&mut self) {
        if !self.visibility.is_open() {
            log::debug!("dropdown opened");
        }
        self.visibility.on_input();
        self.list.focus();
        self.relayout();
    }

    fn fetch(&self, ticket: Ticket) -> Command<Message> {
        let query = FilterQuery::new(ticket.page, self.filter.as_str());
        log::debug!(
            "fetching page {} of {:?} (session {})",
            query.page,
            query.name,
            ticket.session
        );
        let request = self.source.fetch_page(&query);
        Command::perform(request, move |result| Message::Loaded { ticket, result })
    }

    fn loaded(&mut self, ticket: Ticket, result: Result<Page, FetchError>) -> Command<Message> {
        if !self.pagination.settle(ticket) {
            log::debug!(
                "dropping stale page {} of session {}",
                ticket.page,
                ticket.session
            );
            return Command::none();
        }
        self.spinner.stop();

        match result {
            Ok(page) => {
                self.pagination.record_total(page.total_pages);
                let added = self.results.extend(page.items);
                log::debug!(
                    "merged page {}/{}: {added} new, {} total",
                    ticket.page,
                    page.total_pages,
                    self.results.len()
                );
                self.last_error = None;
                self.refresh_rows();
                self.edge.settle(self.list.metrics());
            }
            Err(err) => {
                log::warn!("fetching page {} failed: {err}", ticket.page);
                self.pagination.rewind(ticket);
                self.last_error = Some(err);
            }
        }
        Command::none()
    }

    fn selection_changed(&mut self) {
        self.refresh_rows();
        self.chips.set_chips(
            self.selection
                .iter()
                .map(|s| Chip::new(&s.id, &s.name))
                .collect(),
        );
        self.relayout();
    }

    fn refresh_rows(&mut self) {
        let matched = Style::default().add_modifier(Modifier::BOLD);
        let rows = self
            .results
            .items()
            .iter()
            .map(|item| CheckRow {
                key: item.id.clone(),
                title: highlight_line(&item.name, &self.filter, Style::default(), matched),
                detail: format!("{} Episodes", item.episode_count),
                checked: self.selection.is_selected(&item.id),
            })
            .collect();
        self.list.set_rows(rows);
    }

    fn relayout(&mut self) {
        let open = self.visibility.is_open();
        let chips_height = self.chips.height_for(layout::chips_width(self.area));
        self.regions = layout::regions(self.area, chips_height, self.list_height, open);
        if open {
            self.list.set_viewport(self.regions.list.height as usize);
            self.edge.settle(self.list.metrics());
        }
    }

    fn shows_list(&self) -> bool {
        self.last_error.is_none() && !self.results.is_empty()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let was_open = self.visibility.is_open();
        self.open();

        let list_key = matches!(
            key.code,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Home
                | KeyCode::End
                | KeyCode::Enter
        );
        if list_key {
            if was_open && self.shows_list() {
                return self
                    .list
                    .update(checklist::Message::KeyPress(key))
                    .map(Message::List);
            }
            return Command::none();
        }
        if key.code == KeyCode::Backspace && self.input.is_empty() {
            return self
                .chips
                .update(chips::Message::RemoveLast)
                .map(Message::Chips);
        }
        self.input
            .update(text_input::Message::KeyPress(key))
            .map(Message::Input)
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Command<Message> {
        if self.regions.in_control(column, row) {
            self.open();
            return self
                .chips
                .update(chips::Message::Click { column, row })
                .map(Message::Chips);
        }
        if self.visibility.is_open() && self.shows_list() && self.regions.in_dropdown(column, row) {
            return self
                .list
                .update(checklist::Message::Click { column, row })
                .map(Message::List);
        }
        Command::none()
    }

    fn view_dropdown(&self, frame: &mut Frame, regions: Regions) {
        let title = match self.pagination.total_pages() {
            Some(total) if total > 0 => format!(
                " {} characters · page {}/{} ",
                self.results.len(),
                self.pagination.current_page(),
                total
            ),
            _ => String::new(),
        };
        frame.render_widget(focus_block(&title, true), regions.dropdown);

        let list = regions.list;
        if self.last_error.is_some() {
            self.error_board.view(frame, list);
            return;
        }
        if self.results.is_empty() {
            if self.pagination.is_loading() {
                let [_, middle, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(list);
                self.spinner.view(frame, middle);
            } else {
                self.empty_board.view(frame, list);
            }
            return;
        }

        self.list.view(frame, list);
        if self.pagination.is_loading() && regions.dropdown.height > 0 {
            // Drawn over the bottom border so the list keeps its height.
            let strip = Rect {
                x: regions.dropdown.x + 1,
                y: regions.dropdown.bottom() - 1,
                width: regions.dropdown.width.saturating_sub(2),
                height: 1,
            };
            self.spinner.view(frame, strip);
        }
    }
}

impl Component for SearchSelect {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Resize(area) => {
                self.area = area;
                self.relayout();
                Command::none()
            }
            Message::Key(key) => self.handle_key(key),
            Message::Paste(text) => {
                self.open();
                self.input
                    .update(text_input::Message::Paste(text))
                    .map(Message::Input)
            }
            Message::Click { column, row } => self.handle_click(column, row),
            Message::Pointer { column, row } => {
                if self.visibility.is_open() && !self.regions.contains(column, row) {
                    self.outside_pointer();
                }
                Command::none()
            }
            Message::Wheel { up, column, row } => {
                if self.visibility.is_open()
                    && self.shows_list()
                    && self.regions.in_dropdown(column, row)
                {
                    self.list
                        .update(checklist::Message::Wheel { up })
                        .map(Message::List)
                } else {
                    Command::none()
                }
            }
            Message::Loaded { ticket, result } => self.loaded(ticket, result),
            Message::Input(text_input::Message::Changed(value)) => self.text_changed(&value),
            Message::Input(msg) => self.input.update(msg).map(Message::Input),
            Message::Chips(chips::Message::Removed(id)) => {
                self.remove(&id);
                Command::none()
            }
            Message::Chips(msg) => self.chips.update(msg).map(Message::Chips),
            Message::List(checklist::Message::Toggled(index)) => {
                if let Some(item) = self.results.get(index).cloned() {
                    self.toggle(&item.id, &item.name);
                }
                Command::none()
            }
            Message::List(checklist::Message::Scrolled(metrics)) => self.scrolled(metrics),
            Message::List(msg) => self.list.update(msg).map(Message::List),
            Message::Spinner(msg) => self.spinner.update(msg).map(Message::Spinner),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let open = self.visibility.is_open();
        let chips_height = self.chips.height_for(layout::chips_width(area));
        let regions = layout::regions(area, chips_height, self.list_height, open);

        frame.render_widget(focus_block(" Characters ", open), regions.control);
        self.chips.view(frame, regions.chips);
        let [input, caret] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(2)]).areas(regions.input);
        self.input.view(frame, input);
        let caret_symbol = if open { "▴" } else { "▾" };
        frame.render_widget(
            Paragraph::new(caret_symbol).alignment(Alignment::Right),
            caret,
        );

        if open {
            self.view_dropdown(frame, regions);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        let mut subs = vec![terminal_events("clicks", |event| match event {
            TerminalEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Message::Click { column, row }),
            _ => None,
        })];

        if self.visibility.is_open() {
            subs.push(terminal_events("outside-pointer", |event| match event {
                TerminalEvent::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    column,
                    row,
                    ..
                }) => Some(Message::Pointer { column, row }),
                _ => None,
            }));
            subs.push(terminal_events("list-scroll", |event| match event {
                TerminalEvent::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => match kind {
                    MouseEventKind::ScrollUp => Some(Message::Wheel { up: true, column, row }),
                    MouseEventKind::ScrollDown => Some(Message::Wheel { up: false, column, row }),
                    _ => None,
                },
                _ => None,
            }));
        }

        subs.extend(
            self.spinner
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Message::Spinner)),
        );
        subs
    }

    fn focused(&self) -> bool {
        true
    }
}
