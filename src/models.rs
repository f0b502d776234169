use serde::{Deserialize, Serialize};
use std::fmt;

/// Business sectors a prospective client can pick on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Konaklama")]
    Hospitality,
    #[serde(rename = "Sağlık")]
    Healthcare,
    #[serde(rename = "Perakende")]
    Retail,
    #[serde(rename = "Üretim")]
    Manufacturing,
    #[serde(rename = "E-ticaret")]
    ECommerce,
    #[serde(rename = "Profesyonel Hizmetler")]
    ProfessionalServices,
    #[serde(rename = "Diğer")]
    Other,
}

impl Sector {
    pub const ALL: [Sector; 7] = [
        Sector::Hospitality,
        Sector::Healthcare,
        Sector::Retail,
        Sector::Manufacturing,
        Sector::ECommerce,
        Sector::ProfessionalServices,
        Sector::Other,
    ];

    /// Label shown on the form and used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Sector::Hospitality => "Konaklama",
            Sector::Healthcare => "Sağlık",
            Sector::Retail => "Perakende",
            Sector::Manufacturing => "Üretim",
            Sector::ECommerce => "E-ticaret",
            Sector::ProfessionalServices => "Profesyonel Hizmetler",
            Sector::Other => "Diğer",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sector| sector.label() == label)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Topics the client wants support with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportTopic {
    #[serde(rename = "Mevcut durum analizi")]
    CurrentStateAnalysis,
    #[serde(rename = "Stratejik yol haritası")]
    StrategicRoadmap,
    #[serde(rename = "Süreç yönetimi")]
    ProcessManagement,
    #[serde(rename = "Performans değerlendirme")]
    PerformanceReview,
    #[serde(rename = "Birlikte değerlendirmek istiyorum")]
    EvaluateTogether,
}

impl SupportTopic {
    pub const ALL: [SupportTopic; 5] = [
        SupportTopic::CurrentStateAnalysis,
        SupportTopic::StrategicRoadmap,
        SupportTopic::ProcessManagement,
        SupportTopic::PerformanceReview,
        SupportTopic::EvaluateTogether,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SupportTopic::CurrentStateAnalysis => "Mevcut durum analizi",
            SupportTopic::StrategicRoadmap => "Stratejik yol haritası",
            SupportTopic::ProcessManagement => "Süreç yönetimi",
            SupportTopic::PerformanceReview => "Performans değerlendirme",
            SupportTopic::EvaluateTogether => "Birlikte değerlendirmek istiyorum",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.label() == label)
    }
}

impl fmt::Display for SupportTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated, normalized contact-form entry. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub sector: Sector,
    /// Kept in submission order.
    pub support_topics: Vec<SupportTopic>,
}

impl LeadSubmission {
    /// Topic labels joined the way both email bodies print them.
    pub fn topics_line(&self) -> String {
        self.support_topics
            .iter()
            .map(|topic| topic.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Acknowledgment returned for a delivered submission.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSuccess {
    pub success: bool,
}

impl ContactSuccess {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
