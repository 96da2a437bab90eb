//! Validation for the lead-capture forms
//!
//! Every rule is applied independently per field and the result maps each
//! failing field to its error. An empty result means the form is valid.
//! Nothing here touches the UI, so the rules can be exercised directly.

use std::collections::BTreeMap;

use super::forms::{DemoRequest, LeadForm, LoginForm};

/// Minimum number of digits an optional phone number must carry
pub const MIN_PHONE_DIGITS: usize = 7;

/// Validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty
    Required,
    /// Field is present but fails its format check
    InvalidFormat,
}

impl FieldError {
    /// Human-readable message for a field with the given label
    pub fn message(&self, label: &str) -> String {
        match self {
            FieldError::Required => format!("{} is required", label),
            FieldError::InvalidFormat => format!("Enter a valid {}", label.to_lowercase()),
        }
    }
}

/// A named form field that errors can be keyed by
pub trait FormField: Copy + Ord + std::fmt::Debug {
    fn label(&self) -> &'static str;
}

/// How the phone field is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhonePolicy {
    /// Phone must be non-empty after trimming; no format check
    #[default]
    Required,
    /// Phone may be empty, but if present must contain at least this many digits
    OptionalMinDigits(usize),
}

/// Validation result mapping each failing field to its error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult<F: Ord> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: FormField> ValidationResult<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Rendered message for a field, if it failed
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(|error| error.message(field.label()))
    }

    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop a single field's error. Returns whether one was present.
    pub fn clear_field(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    fn check(&mut self, field: F, outcome: Option<FieldError>) {
        if let Some(error) = outcome {
            self.insert(field, error);
        }
    }
}

impl<F: FormField> Default for ValidationResult<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields of the free-trial form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    HotelBrand,
    Category,
    Region,
    Email,
    Phone,
}

impl FormField for LeadField {
    fn label(&self) -> &'static str {
        match self {
            LeadField::Name => "Full name",
            LeadField::HotelBrand => "Hotel brand",
            LeadField::Category => "Hotel category",
            LeadField::Region => "Region",
            LeadField::Email => "Email",
            LeadField::Phone => "Phone number",
        }
    }
}

/// Fields of the book-a-demo form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DemoField {
    FullName,
    Company,
    Email,
    Phone,
    Notes,
}

impl FormField for DemoField {
    fn label(&self) -> &'static str {
        match self {
            DemoField::FullName => "Full name",
            DemoField::Company => "Company/Hotel",
            DemoField::Email => "Work email",
            DemoField::Phone => "Phone",
            DemoField::Notes => "Notes",
        }
    }
}

/// Fields of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl FormField for LoginField {
    fn label(&self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }
}

/// Validates the free-trial form
pub fn validate_lead(form: &LeadForm, phone_policy: PhonePolicy) -> ValidationResult<LeadField> {
    let mut result = ValidationResult::new();

    result.check(LeadField::Name, check_required(&form.name));
    result.check(LeadField::HotelBrand, check_required(&form.hotel_brand));
    result.check(
        LeadField::Category,
        form.category.is_none().then_some(FieldError::Required),
    );
    result.check(
        LeadField::Region,
        form.region.is_none().then_some(FieldError::Required),
    );
    result.check(LeadField::Email, check_email(&form.email));
    result.check(LeadField::Phone, check_phone(&form.phone, phone_policy));

    result
}

/// Validates the book-a-demo form. Phone is optional but sanity-checked.
pub fn validate_demo(request: &DemoRequest) -> ValidationResult<DemoField> {
    let mut result = ValidationResult::new();

    result.check(DemoField::FullName, check_required(&request.full_name));
    result.check(DemoField::Company, check_required(&request.company));
    result.check(DemoField::Email, check_demo_email(&request.email));
    result.check(
        DemoField::Phone,
        check_phone(&request.phone, PhonePolicy::OptionalMinDigits(MIN_PHONE_DIGITS)),
    );

    result
}

/// Validates the login form. Any non-empty credentials pass.
pub fn validate_login(form: &LoginForm) -> ValidationResult<LoginField> {
    let mut result = ValidationResult::new();

    result.check(LoginField::Email, check_required(&form.email));
    result.check(LoginField::Password, check_required(&form.password));

    result
}

fn check_required(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if !is_plausible_email(value) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

/// The demo form treats any typed value, even blanks, as an attempted address
fn check_demo_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required)
    } else if !is_plausible_email(value) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

fn check_phone(value: &str, policy: PhonePolicy) -> Option<FieldError> {
    match policy {
        PhonePolicy::Required => check_required(value),
        PhonePolicy::OptionalMinDigits(_) if value.is_empty() => None,
        PhonePolicy::OptionalMinDigits(min) => {
            (digit_count(value) < min).then_some(FieldError::InvalidFormat)
        }
    }
}

/// Number of ASCII digits in the value
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Coarse email check: somewhere in the value there is a non-whitespace run,
/// an `@`, a non-whitespace run, a `.`, and one more non-whitespace character.
///
/// Deliberately permissive; it only catches obvious typos.
pub fn is_plausible_email(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();

    chars.iter().enumerate().any(|(at, &c)| {
        c == '@' && at > 0 && !chars[at - 1].is_whitespace() && has_dotted_tail(&chars[at + 1..])
    })
}

fn has_dotted_tail(tail: &[char]) -> bool {
    let run = tail.iter().take_while(|c| !c.is_whitespace()).count();
    // the dot needs at least one char before it and one after, inside the run
    (1..run.saturating_sub(1)).any(|dot| tail[dot] == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hotel_directory::{HotelCategory, Region};

    fn complete_lead() -> LeadForm {
        LeadForm {
            name: "Jane Doe".to_string(),
            hotel_brand: "Four Seasons Hotels".to_string(),
            category: Some(HotelCategory::LuxuryResort),
            region: Some(Region::NorthAmerica),
            email: "jane@acme.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_complete_lead_is_valid() {
        let result = validate_lead(&complete_lead(), PhonePolicy::Required);
        assert!(result.is_valid());
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_lead_flags_every_field() {
        let result = validate_lead(&LeadForm::default(), PhonePolicy::Required);
        assert_eq!(result.len(), 6);
        for field in [
            LeadField::Name,
            LeadField::HotelBrand,
            LeadField::Category,
            LeadField::Region,
            LeadField::Email,
            LeadField::Phone,
        ] {
            assert_eq!(result.get(field), Some(FieldError::Required), "{field:?}");
        }
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let mut form = complete_lead();
        form.name = "   \t".to_string();
        let result = validate_lead(&form, PhonePolicy::Required);
        assert_eq!(result.get(LeadField::Name), Some(FieldError::Required));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_name_reported_regardless_of_other_fields() {
        let mut form = LeadForm::default();
        form.email = "not-an-email".to_string();
        let result = validate_lead(&form, PhonePolicy::Required);
        assert_eq!(result.get(LeadField::Name), Some(FieldError::Required));
        assert_eq!(result.get(LeadField::Email), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_invalid_email_format() {
        let mut form = complete_lead();
        form.email = "jane@acme".to_string();
        let result = validate_lead(&form, PhonePolicy::Required);
        assert_eq!(result.get(LeadField::Email), Some(FieldError::InvalidFormat));
        assert_eq!(
            result.message(LeadField::Email),
            Some("Enter a valid email".to_string())
        );
    }

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("jane@acme.com"));
        assert!(is_plausible_email("a@b.c"));
        assert!(is_plausible_email("first.last+tag@sub.domain.co.uk"));
        assert!(is_plausible_email("a@..c"));
        // unanchored, so surrounding text is tolerated
        assert!(is_plausible_email("mail me: jane@acme.com please"));
    }

    #[test]
    fn test_implausible_emails() {
        assert!(!is_plausible_email("jane"));
        assert!(!is_plausible_email("@acme.com"));
        assert!(!is_plausible_email("jane@acme"));
        assert!(!is_plausible_email("jane@.com"));
        assert!(!is_plausible_email("jane@acme."));
        assert!(!is_plausible_email("jane @acme.com"));
        assert!(!is_plausible_email("jane@ acme.com"));
        assert!(!is_plausible_email("jane@acme. com"));
    }

    #[test]
    fn test_required_phone_policy() {
        let mut form = complete_lead();
        form.phone = "  ".to_string();
        let result = validate_lead(&form, PhonePolicy::Required);
        assert_eq!(result.get(LeadField::Phone), Some(FieldError::Required));

        // no format check under the required policy
        form.phone = "call me".to_string();
        assert!(validate_lead(&form, PhonePolicy::Required).is_valid());
    }

    #[test]
    fn test_optional_phone_policy() {
        let policy = PhonePolicy::OptionalMinDigits(MIN_PHONE_DIGITS);
        let mut form = complete_lead();

        form.phone = String::new();
        assert!(validate_lead(&form, policy).is_valid());

        form.phone = "+1 (555) 12".to_string();
        assert_eq!(
            validate_lead(&form, policy).get(LeadField::Phone),
            Some(FieldError::InvalidFormat)
        );

        form.phone = "+1 (555) 123-4567".to_string();
        assert!(validate_lead(&form, policy).is_valid());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("+1 (555) 123-4567"), 11);
        assert_eq!(digit_count("no digits"), 0);
    }

    #[test]
    fn test_validate_demo() {
        let mut request = DemoRequest {
            full_name: "Jane Doe".to_string(),
            company: "Acme Resorts".to_string(),
            email: "jane@acme.com".to_string(),
            ..Default::default()
        };
        assert!(validate_demo(&request).is_valid());

        request.phone = "123".to_string();
        request.email = "jane".to_string();
        let result = validate_demo(&request);
        assert_eq!(result.get(DemoField::Phone), Some(FieldError::InvalidFormat));
        assert_eq!(result.get(DemoField::Email), Some(FieldError::InvalidFormat));
        assert_eq!(result.message(DemoField::Phone), Some("Enter a valid phone".to_string()));
        assert!(!result.contains(DemoField::Notes));
    }

    #[test]
    fn test_blank_demo_email_is_a_format_error() {
        let mut request = DemoRequest::default();
        assert_eq!(validate_demo(&request).get(DemoField::Email), Some(FieldError::Required));

        request.email = "   ".to_string();
        let result = validate_demo(&request);
        assert_eq!(result.get(DemoField::Email), Some(FieldError::InvalidFormat));
        assert_eq!(result.message(DemoField::Email), Some("Enter a valid work email".to_string()));

        let mut lead = complete_lead();
        lead.email = "   ".to_string();
        let result = validate_lead(&lead, PhonePolicy::Required);
        assert_eq!(result.get(LeadField::Email), Some(FieldError::Required));
    }

    #[test]
    fn test_validate_login() {
        let result = validate_login(&LoginForm::default());
        assert_eq!(result.message(LoginField::Email), Some("Email is required".to_string()));
        assert_eq!(
            result.message(LoginField::Password),
            Some("Password is required".to_string())
        );

        let form = LoginForm {
            email: "anything".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_login(&form).is_valid());
    }

    #[test]
    fn test_clear_field() {
        let mut result = validate_lead(&LeadForm::default(), PhonePolicy::Required);
        assert!(result.clear_field(LeadField::Name));
        assert!(!result.clear_field(LeadField::Name));
        assert!(!result.contains(LeadField::Name));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required.message("Full name"), "Full name is required");
        assert_eq!(
            FieldError::InvalidFormat.message("Phone number"),
            "Enter a valid phone number"
        );
    }
}
