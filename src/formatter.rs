use crate::models::LeadSubmission;
use crate::sanitizer::escape_html;

pub const TEXT_HEADING: &str = "Yeni iletisim formu talebi alindi.";
pub const HTML_HEADING: &str = "Yeni iletisim formu talebi alindi";

/// Rendered notification for one lead, ready to hand to the mail capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadMessage {
    pub subject: String,
    pub reply_to: String,
    pub text: String,
    pub html: String,
}

/// Field labels paired with their values, in rendering order.
/// Labels are static and trusted; values are user input.
fn labeled_fields(lead: &LeadSubmission) -> [(&'static str, String); 6] {
    [
        ("Ad Soyad", lead.full_name.clone()),
        ("Sirket/Isletme", lead.company_name.clone()),
        ("E-posta", lead.email.clone()),
        ("Telefon", lead.phone.clone()),
        ("Sektor", lead.sector.label().to_string()),
        ("Destek konulari", lead.topics_line()),
    ]
}

/// Plain-text body for clients that cannot render HTML.
pub fn render_text(lead: &LeadSubmission) -> String {
    let mut lines = vec![TEXT_HEADING.to_string(), String::new()];
    lines.extend(
        labeled_fields(lead)
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value)),
    );
    lines.join("\n")
}

/// HTML body; every value goes through [`escape_html`] exactly once.
pub fn render_html(lead: &LeadSubmission) -> String {
    let items: String = labeled_fields(lead)
        .into_iter()
        .map(|(label, value)| {
            format!(
                "      <li><strong>{}:</strong> {}</li>\n",
                label,
                escape_html(&value)
            )
        })
        .collect();

    format!(
        "\n    <h2>{}</h2>\n    <ul>\n{}    </ul>\n  ",
        HTML_HEADING, items
    )
}

pub fn subject(lead: &LeadSubmission) -> String {
    format!("Yeni Talep - {}", lead.full_name)
}

/// Builds the full message; replies go to the submitter.
pub fn compose(lead: &LeadSubmission) -> LeadMessage {
    LeadMessage {
        subject: subject(lead),
        reply_to: lead.email.clone(),
        text: render_text(lead),
        html: render_html(lead),
    }
}
