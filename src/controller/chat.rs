//! Nova chat controller methods

use std::time::Duration;

use crate::model::recommend;
use super::AppController;

/// Simulated thinking time before a reply lands.
const REPLY_DELAY: Duration = Duration::from_millis(800);

impl AppController {
    /// Push the user's message and schedule Nova's reply. While a reply is
    /// pending further sends are dropped, so replies land in order.
    pub async fn send_chat_message(&self, text: String) {
        let model = self.model.lock().await;

        let accepted = model.chat.lock().await.push_user_message(&text);
        if !accepted {
            return;
        }

        let catalog = model.catalog.clone();
        let chat = model.chat.clone();
        drop(model);

        tokio::spawn(async move {
            tokio::time::sleep(REPLY_DELAY).await;
            let reply = recommend::respond(&catalog, &text);
            tracing::debug!(books = reply.books.len(), "Nova reply ready");
            chat.lock().await.push_reply(reply);
        });
    }
}
