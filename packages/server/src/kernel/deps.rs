// ServerDeps - the immutable dependency bundle
//
// Constructed once at process start from Config and shared by reference;
// core logic never reads ambient global state.

use std::sync::Arc;

use super::traits::{BaseChatModel, BaseMailer};

#[derive(Clone)]
pub struct ServerDeps {
    pub mailer: Arc<dyn BaseMailer>,
    pub chat_model: Arc<dyn BaseChatModel>,
}

impl ServerDeps {
    pub fn new(mailer: Arc<dyn BaseMailer>, chat_model: Arc<dyn BaseChatModel>) -> Self {
        Self { mailer, chat_model }
    }
}
