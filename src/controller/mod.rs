//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and view. It is organized into
//! submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Sidebar and content view navigation
//! - `quiz`: Quiz session operations
//! - `chat`: Nova chat operations
//! - `session`: Auth panel and session operations

mod input;
mod navigation;
mod quiz;
mod chat;
mod session;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::auth::AuthError;
use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        // Auth failures already carry user-facing text
        if let Some(auth_error) = error.downcast_ref::<AuthError>() {
            return auth_error.to_string();
        }

        format!("Error: {}", error)
    }
}
