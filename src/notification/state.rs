/// Current transient message shown to the user, if any
pub struct NotificationState {
    message: Option<String>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Show a message, replacing any currently visible one
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}
