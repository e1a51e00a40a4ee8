//! Conversation session state
//!
//! A session owns the ordered message history, the tool selection and the
//! lifecycle flag. Everything here is synchronous except `SessionState::ask`,
//! which awaits the agent gateway for exactly one round trip.

mod message;
mod state;
mod store;
mod tools;

#[cfg(test)]
mod proptests;

#[allow(unused_imports)] // Public API re-exports
pub use message::{Message, Role};
#[allow(unused_imports)] // Public API re-exports
pub use state::{Lifecycle, SessionError, SessionState, END_OF_CONVERSATION};
pub use store::ConversationStore;
pub use tools::{Tool, ToolConfig};
