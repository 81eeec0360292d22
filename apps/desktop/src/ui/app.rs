//! # Form State
//!
//! Everything the form shows, and the mapping from keys to operations.
//!
//! ## Focus Order
//! ```text
//! ┌─ Search Product ─────────────────────────────┐
//! │  [1] value            [2] field ◀ ▶          │   Enter → Search
//! ├─ Stock Change ───────────────────────────────┤
//! │  [3] change (+/-)     [4] updated by         │   Enter → Update Stock
//! ├─ Add New Product ────────────────────────────┤
//! │  [5] identifier [6] description              │
//! │  [7] quantity   [8] added by                 │   Enter → Add Product
//! └──────────────────────────────────────────────┘
//!   Tab / Shift-Tab cycles 1 → 8 → 1
//! ```
//!
//! `handle_key` is synchronous and never touches the Store; it returns an
//! [`Action`] which the event loop hands to [`App::perform`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::input::TextInput;
use crate::commands::{
    add_product, adjust_stock, search_product, show_logs, AddProductRequest, AdjustStockRequest,
    ProductDto, SearchRequest, ShowLogsRequest,
};
use crate::error::{ApiError, ErrorCode};
use crate::state::DbState;
use stockroom_core::SearchField;

/// Shown in the logs panel when a product has no history.
pub const NO_LOGS_MESSAGE: &str = "No logs found for this identifier.";

/// Shown in the result panel when a search has no match.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

// =============================================================================
// Focus
// =============================================================================

/// Focusable form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchValue,
    SearchField,
    Delta,
    Person,
    AddIdentifier,
    AddDescription,
    AddQuantity,
    AddPerson,
}

/// Form section a focus belongs to; decides what Enter does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Search,
    Stock,
    Add,
}

impl Focus {
    const ORDER: [Focus; 8] = [
        Focus::SearchValue,
        Focus::SearchField,
        Focus::Delta,
        Focus::Person,
        Focus::AddIdentifier,
        Focus::AddDescription,
        Focus::AddQuantity,
        Focus::AddPerson,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn section(self) -> Section {
        match self {
            Focus::SearchValue | Focus::SearchField => Section::Search,
            Focus::Delta | Focus::Person => Section::Stock,
            Focus::AddIdentifier | Focus::AddDescription | Focus::AddQuantity | Focus::AddPerson => {
                Section::Add
            }
        }
    }
}

// =============================================================================
// Actions and Notices
// =============================================================================

/// Work requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    UpdateStock,
    ShowLogs,
    AddProduct,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Modal message; any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Validation problems are warnings; everything else is an error.
    pub fn from_error(title: impl Into<String>, err: &ApiError) -> Self {
        let kind = match err.code {
            ErrorCode::ValidationError => NoticeKind::Warning,
            _ => NoticeKind::Error,
        };
        Notice {
            kind,
            title: title.into(),
            message: err.message.clone(),
        }
    }
}

/// Contents of the result panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultView {
    #[default]
    Empty,
    Product(ProductDto),
    Message(String),
}

// =============================================================================
// App
// =============================================================================

#[derive(Debug, Default)]
pub struct App {
    pub search_value: TextInput,
    pub search_field: SearchField,
    pub delta: TextInput,
    pub person: TextInput,
    pub add_identifier: TextInput,
    pub add_description: TextInput,
    pub add_quantity: TextInput,
    pub add_person: TextInput,
    pub focus: Focus,
    pub result: ResultView,
    pub logs: Vec<String>,
    /// Identifier whose history `logs` holds.
    pub logs_for: Option<String>,
    pub notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text input behind a focus; `None` for the field selector.
    pub fn input(&self, focus: Focus) -> Option<&TextInput> {
        match focus {
            Focus::SearchValue => Some(&self.search_value),
            Focus::SearchField => None,
            Focus::Delta => Some(&self.delta),
            Focus::Person => Some(&self.person),
            Focus::AddIdentifier => Some(&self.add_identifier),
            Focus::AddDescription => Some(&self.add_description),
            Focus::AddQuantity => Some(&self.add_quantity),
            Focus::AddPerson => Some(&self.add_person),
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::SearchValue => Some(&mut self.search_value),
            Focus::SearchField => None,
            Focus::Delta => Some(&mut self.delta),
            Focus::Person => Some(&mut self.person),
            Focus::AddIdentifier => Some(&mut self.add_identifier),
            Focus::AddDescription => Some(&mut self.add_description),
            Focus::AddQuantity => Some(&mut self.add_quantity),
            Focus::AddPerson => Some(&mut self.add_person),
        }
    }

    /// Maps a key press to a form edit or an [`Action`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if self.notice.take().is_some() {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::F(1) => return Some(Action::Search),
            KeyCode::F(2) => return Some(Action::UpdateStock),
            KeyCode::F(3) => return Some(Action::ShowLogs),
            KeyCode::F(4) => return Some(Action::AddProduct),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            KeyCode::Enter => {
                return Some(match self.focus.section() {
                    Section::Search => Action::Search,
                    Section::Stock => Action::UpdateStock,
                    Section::Add => Action::AddProduct,
                });
            }
            _ => {}
        }

        if self.focus == Focus::SearchField {
            match key.code {
                KeyCode::Left => self.search_field = self.search_field.prev(),
                KeyCode::Right | KeyCode::Char(' ') => self.search_field = self.search_field.next(),
                _ => {}
            }
        } else if let Some(input) = self.focused_input_mut() {
            input.handle_key(key);
        }

        None
    }

    /// Runs an action against the Store and updates what the form shows.
    pub async fn perform(&mut self, action: Action, db: &DbState) {
        debug!(?action, "Form action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Search => self.search(db).await,
            Action::UpdateStock => self.update_stock(db).await,
            Action::ShowLogs => self.show_logs(db).await,
            Action::AddProduct => self.add_product(db).await,
        }
    }

    async fn search(&mut self, db: &DbState) {
        self.result = ResultView::Empty;

        let request = SearchRequest {
            value: self.search_value.value().to_string(),
            field: self.search_field.column().to_string(),
        };

        match search_product(db, request).await {
            Ok(product) => self.result = ResultView::Product(product),
            Err(err) if err.code == ErrorCode::NotFound => {
                self.result = ResultView::Message(NOT_FOUND_MESSAGE.to_string());
            }
            Err(err) => self.notice = Some(Notice::from_error("Search", &err)),
        }
    }

    async fn update_stock(&mut self, db: &DbState) {
        let request = AdjustStockRequest {
            identifier: self.search_value.value().to_string(),
            delta: self.delta.value().to_string(),
            person: self.person.value().to_string(),
        };

        match adjust_stock(db, request).await {
            Ok(product) => {
                let message = format!("Stock updated for {}", product.identifier);
                self.result = ResultView::Product(product);
                self.notice = Some(Notice::info("Success", message));
            }
            Err(err) => self.notice = Some(Notice::from_error("Update failed", &err)),
        }
    }

    async fn show_logs(&mut self, db: &DbState) {
        let request = ShowLogsRequest {
            identifier: self.search_value.value().to_string(),
        };

        match show_logs(db, request).await {
            Ok(entries) => {
                self.logs = if entries.is_empty() {
                    vec![NO_LOGS_MESSAGE.to_string()]
                } else {
                    entries.iter().map(|e| e.line()).collect()
                };
                self.logs_for = Some(self.search_value.value().trim().to_string());
            }
            Err(err) => {
                self.logs.clear();
                self.logs_for = None;
                self.notice = Some(Notice::from_error("Logs", &err));
            }
        }
    }

    async fn add_product(&mut self, db: &DbState) {
        let request = AddProductRequest {
            identifier: self.add_identifier.value().to_string(),
            description: self.add_description.value().to_string(),
            quantity: self.add_quantity.value().to_string(),
            person: self.add_person.value().to_string(),
        };

        match add_product(db, request).await {
            Ok(_) => {
                self.add_identifier.clear();
                self.add_description.clear();
                self.add_quantity.clear();
                self.add_person.clear();
                self.notice = Some(Notice::info("Success", "Product added successfully"));
            }
            Err(err) => self.notice = Some(Notice::from_error("Error", &err)),
        }
    }
}
