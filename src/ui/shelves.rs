use crate::models::Book;

/// Text shown on both shelves when there is nothing to render at all.
pub const EMPTY_SHELF_MESSAGE: &str = "No books yet.";

/// What a single shelf panel should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfContent {
    /// The whole input was empty.
    Placeholder,
    /// Books for this shelf. May be empty, in which case nothing is drawn.
    Books(Vec<Book>),
}

impl ShelfContent {
    pub fn books(&self) -> &[Book] {
        match self {
            ShelfContent::Placeholder => &[],
            ShelfContent::Books(books) => books,
        }
    }

    pub fn len(&self) -> usize {
        self.books().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}

/// Books split by completion flag. Only a completely empty input produces
/// placeholders; a single empty side is left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelves {
    pub unread: ShelfContent,
    pub finished: ShelfContent,
}

impl Shelves {
    pub fn project(books: &[Book]) -> Self {
        if books.is_empty() {
            return Self {
                unread: ShelfContent::Placeholder,
                finished: ShelfContent::Placeholder,
            };
        }

        let (finished, unread): (Vec<Book>, Vec<Book>) =
            books.iter().cloned().partition(|book| book.is_complete);
        Self {
            unread: ShelfContent::Books(unread),
            finished: ShelfContent::Books(finished),
        }
    }

    pub fn get(&self, shelf: Shelf) -> &ShelfContent {
        match shelf {
            Shelf::Unread => &self.unread,
            Shelf::Finished => &self.finished,
        }
    }
}

/// The two display partitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shelf {
    Unread,
    Finished,
}

impl Shelf {
    pub fn title(self) -> &'static str {
        match self {
            Shelf::Unread => "Unread",
            Shelf::Finished => "Finished",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Shelf::Unread => Shelf::Finished,
            Shelf::Finished => Shelf::Unread,
        }
    }

    pub fn for_book(book: &Book) -> Self {
        if book.is_complete {
            Shelf::Finished
        } else {
            Shelf::Unread
        }
    }
}

/// Label of the toggle action for a book, phrased as the move it performs.
pub fn toggle_label(book: &Book) -> &'static str {
    if book.is_complete {
        "Mark unread"
    } else {
        "Mark finished"
    }
}

/// Rendered view of the shelf plus the cursor on each side.
pub(crate) struct ShelfScreen {
    pub(crate) shelves: Shelves,
    pub(crate) filter: Option<String>,
    pub(crate) focus: Shelf,
    pub(crate) selected_unread: usize,
    pub(crate) selected_finished: usize,
}

impl ShelfScreen {
    pub(crate) fn new(books: &[Book]) -> Self {
        let mut screen = Self {
            shelves: Shelves::project(books),
            filter: None,
            focus: Shelf::Unread,
            selected_unread: 0,
            selected_finished: 0,
        };
        screen.ensure_in_bounds();
        screen
    }

    /// Replace the rendered books. `filter` records the query that produced
    /// them, if any.
    pub(crate) fn set_books(&mut self, books: &[Book], filter: Option<String>) {
        self.shelves = Shelves::project(books);
        self.filter = filter;
        self.ensure_in_bounds();
    }

    pub(crate) fn selected(&self, shelf: Shelf) -> usize {
        match shelf {
            Shelf::Unread => self.selected_unread,
            Shelf::Finished => self.selected_finished,
        }
    }

    fn selected_mut(&mut self, shelf: Shelf) -> &mut usize {
        match shelf {
            Shelf::Unread => &mut self.selected_unread,
            Shelf::Finished => &mut self.selected_finished,
        }
    }

    pub(crate) fn current_book(&self) -> Option<&Book> {
        self.shelves
            .get(self.focus)
            .books()
            .get(self.selected(self.focus))
    }

    pub(crate) fn switch_shelf(&mut self) {
        self.focus = self.focus.other();
    }

    pub(crate) fn focus_shelf(&mut self, shelf: Shelf) {
        self.focus = shelf;
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        let len = self.shelves.get(self.focus).len();
        if len == 0 {
            return;
        }
        let focus = self.focus;
        let selected = self.selected_mut(focus);
        let new = (*selected as isize + offset).clamp(0, len as isize - 1);
        *selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        let focus = self.focus;
        *self.selected_mut(focus) = 0;
    }

    pub(crate) fn select_last(&mut self) {
        let focus = self.focus;
        let len = self.shelves.get(focus).len();
        *self.selected_mut(focus) = len.saturating_sub(1);
    }

    /// Move the cursor onto `book` on whichever shelf it now lives.
    pub(crate) fn focus_book(&mut self, book: &Book) {
        let shelf = Shelf::for_book(book);
        if let Some(idx) = self
            .shelves
            .get(shelf)
            .books()
            .iter()
            .position(|candidate| candidate.id == book.id)
        {
            self.focus = shelf;
            *self.selected_mut(shelf) = idx;
        }
    }

    fn ensure_in_bounds(&mut self) {
        for shelf in [Shelf::Unread, Shelf::Finished] {
            let len = self.shelves.get(shelf).len();
            let selected = self.selected_mut(shelf);
            if len == 0 {
                *selected = 0;
            } else if *selected >= len {
                *selected = len - 1;
            }
        }
    }
}
