//! Toast notices shown on top of the page

use super::error::FlowError;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
}

/// A toast to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(5000),
        }
    }

    /// Generic notice for an error caught at a drawer boundary.
    ///
    /// The error text itself goes to the console; visitors only see that
    /// something went wrong and that their input was kept.
    pub fn from_flow_error(error: &FlowError) -> Self {
        match error {
            FlowError::Navigation(_) => Self::error(
                "Couldn't open Navigator",
                "Please refresh the page and try again.",
            ),
            _ => Self::warning(
                "Something went wrong",
                "Your details are still here. Please try again.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notices_stay_until_dismissed() {
        assert_eq!(Notice::error("a", "b").auto_dismiss_ms, None);
        assert_eq!(Notice::warning("a", "b").auto_dismiss_ms, Some(5000));
    }

    #[test]
    fn test_flow_error_notice_is_generic() {
        let notice = Notice::from_flow_error(&FlowError::UnknownChannel("Airbnb".to_string()));
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(!notice.message.contains("Airbnb"));
        assert!(notice.auto_dismiss_ms.is_some());

        let notice = Notice::from_flow_error(&FlowError::Navigation("blocked".to_string()));
        assert_eq!(notice.kind, NoticeKind::Error);
    }
}
