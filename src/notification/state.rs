use ratatui::style::Color;

/// Severity of a notification, controls the popup accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Cyan,
        }
    }
}

/// A transient, dismissible notice
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<(NotificationKind, String)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some((NotificationKind::Error, message.into()));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.current = Some((NotificationKind::Info, message.into()));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<(&NotificationKind, &str)> {
        self.current.as_ref().map(|(kind, msg)| (kind, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_then_dismiss() {
        let mut notification = NotificationState::new();
        assert!(!notification.is_visible());

        notification.error("生成報告時發生錯誤，請稍後再試。");
        assert!(notification.is_visible());
        let (kind, message) = notification.current().unwrap();
        assert_eq!(*kind, NotificationKind::Error);
        assert!(message.contains("生成報告時發生錯誤"));

        notification.dismiss();
        assert!(!notification.is_visible());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut notification = NotificationState::new();
        notification.info("first");
        notification.error("second");

        let (kind, message) = notification.current().unwrap();
        assert_eq!(*kind, NotificationKind::Error);
        assert_eq!(message, "second");
    }
}
