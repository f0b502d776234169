/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use proptest::prelude::*;
use serde_json::json;

use contact_intake_api::formatter::{render_html, render_text};
use contact_intake_api::models::{Sector, SupportTopic};
use contact_intake_api::sanitizer::escape_html;
use contact_intake_api::validation::validate_lead;

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Removes tags and decodes entities so HTML can be compared with plain text.
fn html_to_text(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    unescape(&out)
}

fn sector_strategy() -> impl Strategy<Value = Sector> {
    prop::sample::select(Sector::ALL.to_vec())
}

fn topics_strategy() -> impl Strategy<Value = Vec<SupportTopic>> {
    prop::collection::vec(prop::sample::select(SupportTopic::ALL.to_vec()), 1..5)
}

// Property: Sanitizer never leaves raw reserved characters
proptest! {
    #[test]
    fn escaped_output_has_no_raw_markup(input in "\\PC*") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        prop_assert_eq!(unescape(&escaped), input);
    }

    #[test]
    fn entity_counts_match_reserved_characters(input in "[a-z&<>\"' ]{0,40}") {
        let escaped = escape_html(&input);
        prop_assert_eq!(escaped.matches("&amp;").count(), input.matches('&').count());
        prop_assert_eq!(escaped.matches("&lt;").count(), input.matches('<').count());
        prop_assert_eq!(escaped.matches("&gt;").count(), input.matches('>').count());
        prop_assert_eq!(escaped.matches("&quot;").count(), input.matches('"').count());
        prop_assert_eq!(escaped.matches("&#39;").count(), input.matches('\'').count());
    }

    #[test]
    fn safe_strings_are_unchanged(input in "[^&<>\"']*") {
        prop_assert_eq!(escape_html(&input), input);
    }
}

// Property: Validator normalizes whitespace and keeps topic order
proptest! {
    #[test]
    fn valid_leads_are_trimmed(
        name in "[A-Za-zÇĞİÖŞÜçğıöşü]{3,20}( [A-Za-z]{2,10})?",
        company in "[A-Za-z0-9.& ]{1,20}[A-Za-z0-9]",
        local in "[a-z][a-z0-9._]{0,10}[a-z0-9]",
        domain in "[a-z]{2,10}",
        digits in "[0-9]{10,13}",
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t\n]{0,3}",
        sector in sector_strategy(),
        topics in topics_strategy(),
    ) {
        let email = format!("{}@{}.com", local, domain);
        prop_assume!(!local.contains(".."));
        prop_assume!(company.trim().chars().count() >= 2);

        let body = json!({
            "fullName": format!("{}{}{}", pad_left, name, pad_right),
            "companyName": format!("{}{}{}", pad_left, company, pad_right),
            "email": format!("{}{}{}", pad_left, email, pad_right),
            "phone": format!("{}+{}{}", pad_left, digits, pad_right),
            "sector": sector.label(),
            "supportTopics": topics.iter().map(|t| t.label()).collect::<Vec<_>>(),
        });

        let lead = validate_lead(&body).unwrap();
        prop_assert_eq!(&lead.full_name, name.trim());
        prop_assert_eq!(&lead.company_name, company.trim());
        prop_assert_eq!(&lead.email, &email);
        prop_assert_eq!(lead.phone, format!("+{}", digits));
        prop_assert_eq!(lead.sector, sector);
        prop_assert_eq!(lead.support_topics, topics);
    }

    #[test]
    fn short_names_always_rejected(name in "[A-Za-z]{0,2}", pad in " {0,5}") {
        let body = json!({
            "fullName": format!("{}{}{}", pad, name, pad),
            "companyName": "X A.Ş.",
            "email": "a@x.com",
            "phone": "+905551112233",
            "sector": "Perakende",
            "supportTopics": ["Süreç yönetimi"]
        });
        let errors = validate_lead(&body).unwrap_err();
        prop_assert!(errors.has_field("fullName"));
    }

    #[test]
    fn validation_never_panics(raw in "\\PC*") {
        let _ = validate_lead(&json!({ "fullName": raw, "supportTopics": [raw] }));
    }
}

// Property: Text and HTML renderings carry the same information
proptest! {
    #[test]
    fn renderings_match_after_stripping_markup(
        name in "[^\\n]{3,30}",
        company in "[^\\n]{2,30}",
        sector in sector_strategy(),
        topics in topics_strategy(),
    ) {
        prop_assume!(name.trim().chars().count() >= 3);
        prop_assume!(company.trim().chars().count() >= 2);

        let lead = validate_lead(&json!({
            "fullName": name,
            "companyName": company,
            "email": "a@x.com",
            "phone": "+905551112233",
            "sector": sector.label(),
            "supportTopics": topics.iter().map(|t| t.label()).collect::<Vec<_>>(),
        }))
        .unwrap();

        let text_lines: Vec<String> = render_text(&lead)
            .lines()
            .skip(2)
            .map(str::to_string)
            .collect();
        let html_lines: Vec<String> = render_html(&lead)
            .lines()
            .filter(|line| line.contains("<li>"))
            .map(|line| html_to_text(line).trim().to_string())
            .collect();

        prop_assert_eq!(text_lines.len(), 6);
        prop_assert_eq!(html_lines, text_lines.iter().map(|l| l.trim().to_string()).collect::<Vec<_>>());
    }
}
