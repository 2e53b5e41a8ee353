// HTTP routes
pub mod chat;
pub mod health;
pub mod letters;

pub use chat::*;
pub use health::*;
pub use letters::*;
