//! Core type definitions for the application

use std::time::Instant;

use super::catalog::Category;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    ChatPrompt,
    Library,
    Categories,
    MainContent,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::ChatPrompt => ActiveSection::Library,
            ActiveSection::Library => ActiveSection::Categories,
            ActiveSection::Categories => ActiveSection::MainContent,
            ActiveSection::MainContent => ActiveSection::ChatPrompt,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::ChatPrompt => ActiveSection::MainContent,
            ActiveSection::Library => ActiveSection::ChatPrompt,
            ActiveSection::Categories => ActiveSection::Library,
            ActiveSection::MainContent => ActiveSection::Categories,
        }
    }
}

/// An item in the Library section
#[derive(Clone, Debug)]
pub struct LibraryItem {
    pub name: String,
}

/// Whether the auth panel is on the login or the signup form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Focused field inside the auth panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
    Confirm,
}

impl AuthField {
    pub fn next(self, mode: AuthMode) -> Self {
        match (self, mode) {
            (AuthField::Email, _) => AuthField::Password,
            (AuthField::Password, AuthMode::Signup) => AuthField::Confirm,
            (AuthField::Password, AuthMode::Login) => AuthField::Email,
            (AuthField::Confirm, _) => AuthField::Email,
        }
    }

    pub fn prev(self, mode: AuthMode) -> Self {
        match (self, mode) {
            (AuthField::Email, AuthMode::Signup) => AuthField::Confirm,
            (AuthField::Email, AuthMode::Login) => AuthField::Password,
            (AuthField::Password, _) => AuthField::Email,
            (AuthField::Confirm, _) => AuthField::Password,
        }
    }
}

/// In-progress login/signup input
#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub field: AuthField,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.field = AuthField::Email;
        self.confirm.clear();
    }

    pub fn active_input_mut(&mut self) -> &mut String {
        match self.field {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Confirm => &mut self.confirm,
        }
    }
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub chat_input: String,
    pub library_items: Vec<LibraryItem>,
    pub library_selected: usize,
    pub categories: Vec<Category>,
    pub category_selected: usize,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
    pub show_auth_panel: bool,
    pub auth_form: AuthForm,
    /// Present when signed in; shown in the top bar.
    pub user_email: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Library,
            chat_input: String::new(),
            library_items: vec![
                LibraryItem { name: "Home".to_string() },
                LibraryItem { name: "Trending".to_string() },
                LibraryItem { name: "Quiz Challenge".to_string() },
                LibraryItem { name: "Nova Chat".to_string() },
            ],
            library_selected: 0,
            categories: vec![], // Filled from the catalog by AppModel::new
            category_selected: 0,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
            show_auth_panel: false,
            auth_form: AuthForm::default(),
            user_email: None,
        }
    }
}
