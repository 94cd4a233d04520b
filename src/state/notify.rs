#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

/// A single transient notice shown in the toast stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// Transient user-facing notices. Every gateway failure and successful
/// mutation lands here; the toast stack renders and auto-dismisses them.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub notices: Vec<Notice>,
}

impl NotifyState {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.notices.push(Notice {
            id: id.clone(),
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.notices.retain(|n| n.id != id);
    }
}
