// Infrastructure seams and their production adapters
//
// Traits here are INFRASTRUCTURE only - no business logic. Domain
// functions take these traits and decide what to send or ask.

pub mod adapters;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use adapters::{GeminiChat, SendGridMailer};
pub use deps::ServerDeps;
pub use traits::{BaseChatModel, BaseMailer};
