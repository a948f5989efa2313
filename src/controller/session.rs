//! Auth panel and session controller methods

use crate::auth::{validate_confirmation, validate_email, validate_password};
use crate::model::AuthMode;
use super::AppController;

impl AppController {
    /// Restore a cached session at startup, if one is still valid.
    pub async fn bootstrap_session(&self) {
        let model = self.model.lock().await;
        match model.auth.current_session() {
            Ok(Some(session)) => {
                tracing::info!(email = %session.email, "Restored cached session");
                model.set_user_email(Some(session.email)).await;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Session restore failed");
            }
        }
    }

    /// Validate and submit the auth panel's form. Validation failures never
    /// reach the service; they surface directly as notifications.
    pub async fn submit_auth_form(&self) {
        let model = self.model.lock().await;
        let form = model.get_ui_state().await.auth_form;

        if let Err(msg) = validate_email(&form.email) {
            model.set_error(msg.to_string()).await;
            return;
        }
        if let Err(msg) = validate_password(&form.password) {
            model.set_error(msg.to_string()).await;
            return;
        }
        if form.mode == AuthMode::Signup {
            if let Err(msg) = validate_confirmation(&form.password, &form.confirm) {
                model.set_error(msg.to_string()).await;
                return;
            }
        }

        let result = match form.mode {
            AuthMode::Login => model.auth.sign_in(&form.email, &form.password),
            AuthMode::Signup => model.auth.sign_up(&form.email, &form.password, "/"),
        };

        match result {
            Ok(session) => {
                model.set_user_email(Some(session.email)).await;
                model.hide_auth_panel().await;
            }
            Err(e) => {
                let error_msg = Self::format_error(&anyhow::Error::new(e));
                model.set_error(error_msg).await;
            }
        }
    }

    pub async fn sign_out(&self) {
        let model = self.model.lock().await;
        if let Err(e) = model.auth.sign_out() {
            let error_msg = Self::format_error(&anyhow::Error::new(e));
            model.set_error(error_msg).await;
            return;
        }
        tracing::info!("Signed out");
        model.set_user_email(None).await;
    }
}
