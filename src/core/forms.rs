//! Form records collected by the drawers

use serde::Serialize;

use super::hotel_directory::{HotelCategory, Region};

/// Lead details collected by the free-trial drawer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub hotel_brand: String,
    pub category: Option<HotelCategory>,
    pub region: Option<Region>,
    pub email: String,
    pub phone: String,
}

/// Demo request collected by the book-a-demo drawer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoRequest {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl DemoRequest {
    /// First whitespace-separated token of the trimmed name, used in the
    /// thank-you note
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("")
    }
}

/// Credentials typed into the login drawer. Any non-empty pair is accepted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let mut request = DemoRequest {
            full_name: "  Jane   Doe ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.first_name(), "Jane");

        request.full_name = "Prince".to_string();
        assert_eq!(request.first_name(), "Prince");

        request.full_name = "   ".to_string();
        assert_eq!(request.first_name(), "");
    }

    #[test]
    fn test_login_debug_hides_password() {
        let form = LoginForm {
            email: "gm@hotel.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug_str = format!("{:?}", form);
        assert!(debug_str.contains("gm@hotel.com"));
        assert!(!debug_str.contains("hunter2"));
    }
}
