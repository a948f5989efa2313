//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `catalog`: The static book catalog, categories, quiz questions
//! - `content`: Content view state (shelves, book details, reader, quiz, chat)
//! - `quiz`: Quiz session state machine and persisted progress
//! - `recommend`: Nova's rule-based recommendation matcher
//! - `reader`: Reading-mode pagination state
//! - `chat`: Chat transcript state
//! - `app_model`: Main application model with state management methods

pub mod catalog;
mod types;
mod content;
pub mod quiz;
pub mod recommend;
pub mod reader;
mod chat;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, AuthField, AuthMode, UiState};

pub use catalog::{Book, Catalog, Category, CategoryId};

pub use content::{BookDetail, ContentState, ContentView};

pub use quiz::{QuizSession, QuizState, UserProgress};

pub use reader::{PageTurn, ReaderPosition};

pub use chat::{ChatMessage, ChatState, Speaker};

pub use app_model::AppModel;
