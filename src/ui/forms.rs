use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Book, BookId};

/// Problems found while reading form fields back into typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required.")]
    MissingTitle,
    #[error("Author is required.")]
    MissingAuthor,
    #[error("Year is required.")]
    MissingYear,
    #[error("Year must be a whole number, got '{0}'.")]
    InvalidYear(String),
}

/// Parse the year field. Blank and non-numeric input are distinct errors so
/// nothing invalid ever reaches the store.
pub fn parse_year(raw: &str) -> Result<i32, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingYear);
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| FormError::InvalidYear(trimmed.to_string()))
}

/// Typed values read back from a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_complete: bool,
}

/// Working copy of the create/edit form fields.
#[derive(Default, Clone, Debug)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) is_complete: bool,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields available within the book form, in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum BookField {
    #[default]
    Title,
    Author,
    Year,
    Complete,
}

impl BookForm {
    /// Populate the form from an existing book when editing.
    pub(crate) fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            is_complete: book.is_complete,
            active: BookField::Title,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Year,
            BookField::Year => BookField::Complete,
            BookField::Complete => BookField::Title,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Complete,
            BookField::Author => BookField::Title,
            BookField::Year => BookField::Author,
            BookField::Complete => BookField::Year,
        };
    }

    /// Append a character to the active field. The year only takes digits
    /// and a leading minus; on the checkbox, space flips the flag.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            BookField::Title => self.title.push(ch),
            BookField::Author => self.author.push(ch),
            BookField::Year => {
                if ch.is_ascii_digit() || (ch == '-' && self.year.is_empty()) {
                    self.year.push(ch);
                } else {
                    return false;
                }
            }
            BookField::Complete => {
                if ch == ' ' || ch == 'x' || ch == 'X' {
                    self.toggle_complete();
                } else {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            BookField::Title => {
                self.title.pop();
            }
            BookField::Author => {
                self.author.pop();
            }
            BookField::Year => {
                self.year.pop();
            }
            BookField::Complete => {}
        }
    }

    pub(crate) fn toggle_complete(&mut self) {
        self.is_complete = !self.is_complete;
    }

    /// Validate the inputs and return typed values ready for persistence.
    pub(crate) fn parse_inputs(&self) -> Result<BookInput, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(FormError::MissingAuthor);
        }
        let year = parse_year(&self.year)?;
        Ok(BookInput {
            title: title.to_string(),
            author: author.to_string(),
            year,
            is_complete: self.is_complete,
        })
    }

    /// Name of the shelf a submit would place the book on.
    pub(crate) fn destination(&self) -> &'static str {
        if self.is_complete {
            "Finished"
        } else {
            "Unread"
        }
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: BookField) -> Line<'static> {
        let is_active = self.active == field;
        let value = match field {
            BookField::Title => self.title.clone(),
            BookField::Author => self.author.clone(),
            BookField::Year => self.year.clone(),
            BookField::Complete => {
                let mark = if self.is_complete { "[x]" } else { "[ ]" };
                format!("{mark} finished reading")
            }
        };

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character count of the requested field, used to place the cursor.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        match field {
            BookField::Title => self.title.chars().count(),
            BookField::Author => self.author.chars().count(),
            BookField::Year => self.year.chars().count(),
            BookField::Complete => 1,
        }
    }
}

/// State behind the "really delete?" dialog.
#[derive(Clone, Debug)]
pub(crate) struct ConfirmBookDelete {
    pub(crate) id: BookId,
    pub(crate) title: String,
}

impl ConfirmBookDelete {
    pub(crate) fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}
