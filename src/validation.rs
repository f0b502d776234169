//! Contact-form validation.
//!
//! Turns an arbitrary parsed JSON value into a normalized [`LeadSubmission`]
//! or a list of field-level failures. Pure: no I/O, no logging of values.

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;

use crate::models::{LeadSubmission, Sector, SupportTopic};

pub const MIN_FULL_NAME_CHARS: usize = 3;
pub const MIN_COMPANY_NAME_CHARS: usize = 2;
pub const MIN_PHONE_CHARS: usize = 10;

// RFC 5322 simplified: local@domain.tld, at least one dot in the domain
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email regex is valid")
});

// Optional leading '+', then digits, spaces, parentheses or dashes
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s()\-]{10,}$").expect("phone regex is valid"));

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every constraint that failed for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Checks email syntax on an already-trimmed value.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 || !EMAIL_REGEX.is_match(email) {
        return false;
    }

    let Some((local, _domain)) = email.split_once('@') else {
        return false;
    };

    !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

/// Relaxed phone check: at least ten characters of digits and common separators.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() >= MIN_PHONE_CHARS && PHONE_REGEX.is_match(phone)
}

/// Trims surrounding whitespace, including the byte order mark some clients prepend.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Reads a required string field, trims it and enforces a minimum length.
fn required_text(
    body: &Map<String, Value>,
    field: &'static str,
    label: &str,
    min_chars: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let Some(raw) = body.get(field).and_then(Value::as_str) else {
        errors.push(field, format!("{} zorunludur", label));
        return None;
    };

    let trimmed = trim_input(raw);
    if trimmed.is_empty() {
        errors.push(field, format!("{} zorunludur", label));
        return None;
    }
    if trimmed.chars().count() < min_chars {
        errors.push(
            field,
            format!("{} en az {} karakter olmalıdır", label, min_chars),
        );
        return None;
    }

    Some(trimmed.to_string())
}

fn support_topics(
    body: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<Vec<SupportTopic>> {
    const FIELD: &str = "supportTopics";

    let Some(items) = body.get(FIELD).and_then(Value::as_array) else {
        errors.push(FIELD, "En az bir destek konusu seçiniz");
        return None;
    };
    if items.is_empty() {
        errors.push(FIELD, "En az bir destek konusu seçiniz");
        return None;
    }

    let topics: Option<Vec<SupportTopic>> = items
        .iter()
        .map(|item| item.as_str().and_then(|s| SupportTopic::from_label(trim_input(s))))
        .collect();

    if topics.is_none() {
        errors.push(FIELD, "Geçerli destek konuları seçiniz");
    }
    topics
}

/// Validates a parsed request body.
///
/// Unknown fields are ignored. All failing fields are reported together.
pub fn validate_lead(input: &Value) -> Result<LeadSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(body) = input.as_object() else {
        errors.push("body", "Form verisi bir nesne olmalıdır");
        return Err(errors);
    };

    let full_name = required_text(body, "fullName", "Ad Soyad", MIN_FULL_NAME_CHARS, &mut errors);
    let company_name = required_text(
        body,
        "companyName",
        "Şirket / İşletme Adı",
        MIN_COMPANY_NAME_CHARS,
        &mut errors,
    );

    let email = required_text(body, "email", "E-posta", 1, &mut errors).and_then(|email| {
        if is_valid_email(&email) {
            Some(email)
        } else {
            errors.push("email", "Geçerli bir e-posta giriniz");
            None
        }
    });

    let phone = required_text(body, "phone", "Telefon", 1, &mut errors).and_then(|phone| {
        if is_valid_phone(&phone) {
            Some(phone)
        } else {
            errors.push("phone", "Geçerli bir telefon numarası giriniz");
            None
        }
    });

    let sector = required_text(body, "sector", "Sektör seçimi", 1, &mut errors).and_then(|label| {
        let sector = Sector::from_label(&label);
        if sector.is_none() {
            errors.push("sector", "Geçerli bir sektör seçiniz");
        }
        sector
    });

    let support_topics = support_topics(body, &mut errors);

    match (full_name, company_name, email, phone, sector, support_topics) {
        (
            Some(full_name),
            Some(company_name),
            Some(email),
            Some(phone),
            Some(sector),
            Some(support_topics),
        ) if errors.is_empty() => Ok(LeadSubmission {
            full_name,
            company_name,
            email,
            phone,
            sector,
            support_topics,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "fullName": "Ahmet Yılmaz",
            "companyName": "X A.Ş.",
            "email": "a@x.com",
            "phone": "+905551112233",
            "sector": "Perakende",
            "supportTopics": ["Süreç yönetimi"]
        })
    }

    #[test]
    fn test_valid_submission() {
        let lead = validate_lead(&valid_body()).unwrap();
        assert_eq!(lead.full_name, "Ahmet Yılmaz");
        assert_eq!(lead.sector, Sector::Retail);
        assert_eq!(lead.support_topics, vec![SupportTopic::ProcessManagement]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut body = valid_body();
        body["fullName"] = json!("   Ahmet Yılmaz  ");
        body["email"] = json!(" a@x.com\n");
        body["sector"] = json!(" Perakende ");
        body["supportTopics"] = json!(["  Süreç yönetimi "]);

        let lead = validate_lead(&body).unwrap();
        assert_eq!(lead.full_name, "Ahmet Yılmaz");
        assert_eq!(lead.email, "a@x.com");
        assert_eq!(lead.sector, Sector::Retail);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let mut body = valid_body();
        body["fullName"] = json!("\u{FEFF}ab");
        assert_eq!(validate_lead(&body).unwrap_err().fields(), vec!["fullName"]);

        let mut body = valid_body();
        body["companyName"] = json!("\u{FEFF}X A.Ş.\u{FEFF}");
        body["sector"] = json!("\u{FEFF}Perakende");
        body["supportTopics"] = json!(["Süreç yönetimi\u{FEFF}"]);
        let lead = validate_lead(&body).unwrap();
        assert_eq!(lead.company_name, "X A.Ş.");
        assert_eq!(lead.sector, Sector::Retail);
    }

    #[test]
    fn test_length_checked_after_trim() {
        let mut body = valid_body();
        body["fullName"] = json!("  ab   ");
        let errors = validate_lead(&body).unwrap_err();
        assert_eq!(errors.fields(), vec!["fullName"]);
    }

    #[test]
    fn test_empty_topics_rejected() {
        let mut body = valid_body();
        body["supportTopics"] = json!([]);
        let errors = validate_lead(&body).unwrap_err();
        assert!(errors.has_field("supportTopics"));
    }

    #[test]
    fn test_unknown_topic_rejected() {
        let mut body = valid_body();
        body["supportTopics"] = json!(["Süreç yönetimi", "Muhasebe"]);
        assert!(validate_lead(&body).unwrap_err().has_field("supportTopics"));
    }

    #[test]
    fn test_unknown_sector_rejected() {
        let mut body = valid_body();
        body["sector"] = json!("Bankacılık");
        assert!(validate_lead(&body).unwrap_err().has_field("sector"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut body = valid_body();
        body["utmSource"] = json!("newsletter");
        assert!(validate_lead(&body).is_ok());
    }

    #[test]
    fn test_collects_every_failing_field() {
        let errors = validate_lead(&json!({ "sector": 5 })).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["fullName", "companyName", "email", "phone", "sector", "supportTopics"]
        );
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(validate_lead(&json!(["a"])).is_err());
        assert!(validate_lead(&Value::Null).is_err());
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("+905551112233"));
        assert!(is_valid_phone("(0555) 111-22-33"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("+90 555 abc 2233"));
        assert!(!is_valid_phone("++905551112233"));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.com.tr"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a x@x.com"));
        assert!(!is_valid_email(".a@x.com"));
        assert!(!is_valid_email("a..b@x.com"));
        assert!(!is_valid_email("@x.com"));
    }
}
