//! Notification module
//!
//! Transient user-facing messages, currently used for the generic network
//! failure notice. Dismissed with Esc or replaced by the next message.

mod render;
mod state;

pub use render::render_notification;
pub use state::NotificationState;
