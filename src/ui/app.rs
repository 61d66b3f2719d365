use std::cmp::min;
use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::{Book, BookId};
use crate::store::BookStore;

use super::forms::{BookField, BookForm, BookInput, ConfirmBookDelete};
use super::helpers::{centered_rect, rect_contains, surface_error};
use super::shelves::{toggle_label, Shelf, ShelfContent, ShelfScreen, Shelves, EMPTY_SHELF_MESSAGE};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per book card: four text lines plus the border.
const BOOK_CARD_HEIGHT: u16 = 6;
/// Size of the create/edit popup as a percentage of the screen.
const FORM_POPUP_PERCENT: (u16, u16) = (70, 50);

/// The user actions the application reacts to. Each one carries exactly the
/// input it needs; key and mouse handling only translate into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a book from the create form.
    Create(BookInput),
    /// Filter the shelves by title. A blank query shows everything.
    Search(String),
    /// Show the edit modal for a book.
    EditOpen(BookId),
    /// Save the edit modal's working copy.
    EditSubmit { id: BookId, input: BookInput },
    /// Hide the edit modal, discarding its working copy.
    EditClose,
    /// Remove a book. Only dispatched once the user confirmed.
    Delete(BookId),
    /// Flip a book between the two shelves.
    Toggle(BookId),
}

/// Fine-grained modes layered over the shelf view. `EditingBook` is the
/// visible state of the edit modal; every other mode has it hidden.
enum Mode {
    Normal,
    AddingBook(BookForm),
    EditingBook { id: BookId, form: BookForm },
    ConfirmDelete(ConfirmBookDelete),
    Searching(SearchState),
}

/// State for an active inline search.
struct SearchState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    store: BookStore,
    screen: ShelfScreen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: BookStore, books: Vec<Book>) -> Self {
        Self {
            store,
            screen: ShelfScreen::new(&books),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// The shelves as currently rendered (possibly filtered).
    pub fn shelves(&self) -> &Shelves {
        &self.screen.shelves
    }

    /// Whether the edit modal is visible.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::EditingBook { .. })
    }

    /// Run an action outside of key handling. The mode only changes when the
    /// action succeeds; failures are also shown in the footer.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match self.apply(action) {
            Ok(Some(mode)) => {
                self.mode = mode;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                Err(err)
            }
        }
    }

    /// Perform the effect of `action`. Returns the mode to switch to, or
    /// `None` to stay in the current one.
    fn apply(&mut self, action: Action) -> Result<Option<Mode>> {
        match action {
            Action::Create(input) => {
                let books = self
                    .store
                    .create(&input.title, &input.author, input.year, input.is_complete)
                    .context("failed to add book")?;
                self.show_all(&books);
                if let Some(added) = books.last() {
                    self.screen.focus_book(added);
                    self.set_status(
                        format!("Added '{}' to {}.", added.title, Shelf::for_book(added).title()),
                        StatusKind::Info,
                    );
                }
                Ok(Some(Mode::Normal))
            }
            Action::Search(query) => {
                let books = self.store.search(&query).context("failed to search books")?;
                let filter = if query.trim().is_empty() {
                    None
                } else {
                    Some(query)
                };
                self.screen.set_books(&books, filter);
                Ok(None)
            }
            Action::EditOpen(id) => {
                let book = self.store.get(id).context("failed to open book")?;
                log::debug!("editing book {id}");
                Ok(Some(Mode::EditingBook {
                    id,
                    form: BookForm::from_book(&book),
                }))
            }
            Action::EditSubmit { id, input } => {
                self.store
                    .update(id, &input.title, &input.author, input.year, input.is_complete)
                    .context("failed to update book")?;
                self.reload(Some(id))?;
                self.set_status(format!("Updated '{}'.", input.title), StatusKind::Info);
                Ok(Some(Mode::Normal))
            }
            Action::EditClose => Ok(Some(Mode::Normal)),
            Action::Delete(id) => {
                let removed = self.store.delete(id).context("failed to delete book")?;
                self.reload(None)?;
                let message = if removed == 1 {
                    "Book deleted.".to_string()
                } else {
                    format!("Deleted {removed} books.")
                };
                self.set_status(message, StatusKind::Info);
                Ok(Some(Mode::Normal))
            }
            Action::Toggle(id) => {
                self.store
                    .toggle_completion(id)
                    .context("failed to update reading status")?;
                if let Some(book) = self.reload(Some(id))? {
                    self.set_status(
                        format!("Moved '{}' to {}.", book.title, Shelf::for_book(&book).title()),
                        StatusKind::Info,
                    );
                }
                Ok(None)
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingBook(form) => self.handle_add_book(code, form)?,
            Mode::EditingBook { id, form } => self.handle_edit_book(code, id, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    /// Mouse clicks only matter while the edit modal is up: a click outside
    /// of it closes the modal without saving.
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) {
        if !self.is_editing() {
            return;
        }
        if rect_contains(form_popup_area(area), column, row) {
            return;
        }
        if self.dispatch(Action::EditClose).is_ok() {
            self.set_status("Edit cancelled.", StatusKind::Info);
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc => {
                if self.screen.filter.is_some() {
                    self.clear_status();
                    self.run(Action::Search(String::new()));
                }
            }
            KeyCode::Left => self.screen.focus_shelf(Shelf::Unread),
            KeyCode::Right => self.screen.focus_shelf(Shelf::Finished),
            KeyCode::Tab | KeyCode::BackTab => self.screen.switch_shelf(),
            KeyCode::Up => self.screen.move_selection(-1),
            KeyCode::Down => self.screen.move_selection(1),
            KeyCode::PageUp => self.screen.move_selection(-5),
            KeyCode::PageDown => self.screen.move_selection(5),
            KeyCode::Home => self.screen.select_first(),
            KeyCode::End => self.screen.select_last(),
            KeyCode::Char('f') | KeyCode::Char('/') => {
                self.clear_status();
                return Ok(Mode::Searching(SearchState {
                    query: self.screen.filter.clone().unwrap_or_default(),
                }));
            }
            KeyCode::Char('+') | KeyCode::Char('a') => {
                self.clear_status();
                return Ok(Mode::AddingBook(BookForm::default()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                match self.screen.current_book().map(|book| book.id) {
                    Some(id) => {
                        self.clear_status();
                        if let Some(mode) = self.run(Action::EditOpen(id)) {
                            return Ok(mode);
                        }
                    }
                    None => self.set_status("No book selected to edit.", StatusKind::Error),
                }
            }
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(book) = self.screen.current_book() {
                    let confirm = ConfirmBookDelete::from(book);
                    self.clear_status();
                    return Ok(Mode::ConfirmDelete(confirm));
                }
                self.set_status("No book selected to delete.", StatusKind::Error);
            }
            KeyCode::Char(' ') | KeyCode::Char('t') => {
                match self.screen.current_book().map(|book| book.id) {
                    Some(id) => {
                        self.run(Action::Toggle(id));
                    }
                    None => self.set_status("No book selected.", StatusKind::Error),
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_add_book(&mut self, code: KeyCode, mut form: BookForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Add book cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok(input) => match self.apply(Action::Create(input)) {
                    Ok(next) => return Ok(next.unwrap_or(Mode::Normal)),
                    Err(err) => self.show_form_error(&mut form, surface_error(&err)),
                },
                Err(err) => self.show_form_error(&mut form, err.to_string()),
            },
            other => edit_form(&mut form, other),
        }
        Ok(Mode::AddingBook(form))
    }

    fn handle_edit_book(&mut self, code: KeyCode, id: BookId, mut form: BookForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                if let Ok(Some(next)) = self.apply(Action::EditClose) {
                    self.set_status("Edit cancelled.", StatusKind::Info);
                    return Ok(next);
                }
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok(input) => match self.apply(Action::EditSubmit { id, input }) {
                    Ok(next) => return Ok(next.unwrap_or(Mode::Normal)),
                    Err(err) => self.show_form_error(&mut form, surface_error(&err)),
                },
                Err(err) => self.show_form_error(&mut form, err.to_string()),
            },
            other => edit_form(&mut form, other),
        }
        Ok(Mode::EditingBook { id, form })
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmBookDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.apply(Action::Delete(confirm.id)) {
                    Ok(next) => Ok(next.unwrap_or(Mode::Normal)),
                    Err(err) => {
                        self.set_status(surface_error(&err), StatusKind::Error);
                        Ok(Mode::Normal)
                    }
                }
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.run(Action::Search(String::new()));
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                let count = self.screen.shelves.unread.len() + self.screen.shelves.finished.len();
                if self.screen.filter.is_some() {
                    self.set_status(format!("{count} matching book(s)."), StatusKind::Info);
                }
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                self.screen.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                self.screen.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.screen.switch_shelf();
                return Ok(Mode::Searching(state));
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                state.query.push(ch);
            }
            _ => return Ok(Mode::Searching(state)),
        }

        self.run(Action::Search(state.query.clone()));
        Ok(Mode::Searching(state))
    }

    /// Apply an action from a key handler, turning failures into a footer
    /// message.
    fn run(&mut self, action: Action) -> Option<Mode> {
        match self.apply(action) {
            Ok(next) => next,
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                None
            }
        }
    }

    fn show_form_error(&mut self, form: &mut BookForm, message: String) {
        form.error = Some(message.clone());
        self.set_status(message, StatusKind::Error);
    }

    /// Re-read the shelf, drop any search filter, and optionally put the
    /// cursor on `focus`. Returns the focused book if it still exists.
    fn reload(&mut self, focus: Option<BookId>) -> Result<Option<Book>> {
        let books = self.store.list().context("failed to reload books")?;
        self.show_all(&books);
        let focused = focus.and_then(|id| books.iter().find(|book| book.id == id).cloned());
        if let Some(book) = &focused {
            self.screen.focus_book(book);
        }
        Ok(focused)
    }

    fn show_all(&mut self, books: &[Book]) {
        self.screen.set_books(books, None);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.draw_shelves(frame, content_area);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingBook(form) => self.draw_book_form(frame, area, "Add Book", form),
            Mode::EditingBook { form, .. } => self.draw_book_form(frame, area, "Edit Book", form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::Normal => {}
        }
    }

    fn draw_shelves(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (shelf, column) in [Shelf::Unread, Shelf::Finished].into_iter().zip(columns.iter()) {
            self.draw_shelf(frame, *column, shelf);
        }
    }

    fn draw_shelf(&self, frame: &mut Frame, area: Rect, shelf: Shelf) {
        let content = self.screen.shelves.get(shelf);
        let mut title = format!("{} ({})", shelf.title(), content.len());
        if let Some(filter) = &self.screen.filter {
            title.push_str(&format!(" • title contains '{filter}'"));
        }

        let mut block = Block::default().borders(Borders::ALL).title(title);
        let focused = self.screen.focus == shelf;
        if focused {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match content {
            ShelfContent::Placeholder => {
                let message = Paragraph::new(EMPTY_SHELF_MESSAGE)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(message, inner);
            }
            ShelfContent::Books(books) => {
                let selected = focused.then(|| self.screen.selected(shelf));
                self.render_book_cards(frame, inner, books, selected);
            }
        }
    }

    fn render_book_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        books: &[Book],
        selected: Option<usize>,
    ) {
        if books.is_empty() || area.height == 0 {
            return;
        }

        let card_height = BOOK_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = books.len();
        let cursor = selected.unwrap_or(0);
        let mut start = if cursor >= capacity {
            cursor + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(BOOK_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let book_index = start + idx;
            let Some(book) = books.get(book_index) else {
                break;
            };
            let is_selected = selected == Some(book_index);

            let mut block = Block::default().borders(Borders::ALL);
            if is_selected {
                block = block.border_style(Style::default().fg(Color::Yellow));
            }

            let title = if is_selected {
                format!("▶ {}", book.title)
            } else {
                book.title.clone()
            };
            let hint_style = Style::default().fg(Color::DarkGray);
            let lines = vec![
                Line::from(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Author: {}", book.author),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("Year: {}", book.year),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(vec![
                    Span::styled(format!("[t] {}", toggle_label(book)), hint_style),
                    Span::styled("  [d] Delete  [e] Edit", hint_style),
                ]),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left);

            frame.render_widget(paragraph, *chunk);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::Searching(_) => Line::from(vec![
                Span::styled("[type]", key_style),
                Span::raw(" Filter by title   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep Results   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            Mode::AddingBook(_) | Mode::EditingBook { .. } => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Tick Finished   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Close"),
            ]),
            Mode::ConfirmDelete(_) => Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[n]", key_style),
                Span::raw(" Keep"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[←↑↓→]", key_style),
                Span::raw(" Move   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[t]", key_style),
                Span::raw(" Toggle   "),
                Span::styled("[d]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("Title: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Title: ".len() as u16 + state.query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &BookForm) {
        let popup_area = form_popup_area(area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let fields = [
            ("Title", BookField::Title),
            ("Author", BookField::Author),
            ("Year", BookField::Year),
            ("Status", BookField::Complete),
        ];
        let mut lines: Vec<Line> = fields
            .iter()
            .map(|(name, field)| form.build_line(name, *field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!(
                    "Enter to save on {} • Tab to switch • Esc to cancel",
                    form.destination()
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        if let Some(row) = fields.iter().position(|(_, field)| *field == form.active) {
            let (name, field) = fields[row];
            let prefix = format!("{name}: ").len() as u16;
            let offset = if field == BookField::Complete {
                1
            } else {
                form.value_len(field) as u16
            };
            frame.set_cursor_position((inner.x + prefix + offset, inner.y + row as u16));
        }
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmBookDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Book").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete '{}' from the shelf?", confirm.title)),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

/// Shared key handling for the create and edit forms.
fn edit_form(form: &mut BookForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(ch) => {
            if form.push_char(ch) {
                form.error = None;
            }
        }
        _ => {}
    }
}

/// Screen region covered by the create/edit popup.
fn form_popup_area(area: Rect) -> Rect {
    centered_rect(FORM_POPUP_PERCENT.0, FORM_POPUP_PERCENT.1, area)
}
