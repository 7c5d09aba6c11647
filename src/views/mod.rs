pub mod chat;
pub mod composer;
pub mod welcome;

pub use chat::MessageList;
pub use composer::Composer;
pub use welcome::WelcomeScreen;
