//! Read-only site content: services, FAQ items, the "about us" global and
//! service page settings.
//!
//! Optional fields resolve to named defaults during deserialization, so
//! handlers never apply per-field fallbacks.

use serde::{Deserialize, Serialize};

/// Maximum number of FAQ items served.
pub const FAQ_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub order: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub intro: String,
    #[serde(default)]
    pub focus_points: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub process_flow: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i64,
}

/// Public shape of an FAQ entry; ordering is an internal concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutHero {
    pub badge: String,
    pub title: String,
    pub title_highlight: Option<String>,
    pub description: String,
}

impl Default for AboutHero {
    fn default() -> Self {
        Self {
            badge: "Hakkımızda".to_string(),
            title: "Dijital Dönüşümde Güvenilir Ortağınız".to_string(),
            title_highlight: Some("Güvenilir Ortağınız".to_string()),
            description: "İşletmenizi geleceğe taşıyacak yenilikçi çözümler sunuyor, dijital dünyadaki potansiyelinizi en üst düzeye çıkarıyoruz.".to_string(),
        }
    }
}

/// Titled paragraph used for the mission and vision blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhoWeAre {
    pub badge: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub mission: Statement,
    pub vision: Statement,
}

impl Default for WhoWeAre {
    fn default() -> Self {
        Self {
            badge: "Biz Kimiz?".to_string(),
            title: "Deneyim ve Teknolojinin Buluşma Noktası".to_string(),
            paragraphs: Vec::new(),
            mission: Statement {
                title: "Misyonumuz".to_string(),
                description: "İşletmeleri dijital çağın gereksinimlerine hazırlamak.".to_string(),
            },
            vision: Statement {
                title: "Vizyonumuz".to_string(),
                description: "Sektörde öncü ve yenilikçi bir teknoloji şirketi olmak.".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutUs {
    pub hero: AboutHero,
    pub who_we_are: WhoWeAre,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListHero {
    pub badge: String,
    pub title: String,
    pub description: String,
}

impl Default for ListHero {
    fn default() -> Self {
        Self {
            badge: "Hizmetlerimiz".to_string(),
            title: "Planli, Olculebilir ve Sonuca Odakli Hizmetler".to_string(),
            description: "Dijital sureclerinizi sadece uygulamaya degil, isletme hedeflerine baglayan 4 temel hizmet adimi.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCta {
    pub title: String,
    pub description: String,
    pub button_label: String,
    pub button_href: String,
}

impl Default for ListCta {
    fn default() -> Self {
        Self {
            title: "Siradaki adim icin iletisime gecelim".to_string(),
            description: "Hizmet kapsamini isletmeniz icin birlikte netlestirelim.".to_string(),
            button_label: "Iletisim Formuna Git".to_string(),
            button_href: "/iletisim".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailSectionTitles {
    pub focus_points_title: String,
    pub deliverables_title: String,
    pub process_flow_title: String,
}

impl Default for DetailSectionTitles {
    fn default() -> Self {
        Self {
            focus_points_title: "Bu Hizmette Odaklandığımız Alanlar".to_string(),
            deliverables_title: "Teslimatlar".to_string(),
            process_flow_title: "Çalışma Akışı".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotFoundCopy {
    pub title: String,
    pub description: String,
    pub button_label: String,
}

impl Default for NotFoundCopy {
    fn default() -> Self {
        Self {
            title: "Hizmet bulunamadı".to_string(),
            description: "Aradığınız hizmet sayfası mevcut değil.".to_string(),
            button_label: "Hizmetlere Dön".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicePageSettings {
    pub list_hero: ListHero,
    pub list_cta: ListCta,
    pub detail_section_titles: DetailSectionTitles,
    pub not_found: NotFoundCopy,
}

/// The whole content document behind the public read endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub services: Vec<Service>,
    pub faq_items: Vec<FaqItem>,
    pub about_us: AboutUs,
    pub service_page_settings: ServicePageSettings,
}

impl SiteContent {
    /// Services in ascending `order`; ties keep document order.
    pub fn sorted_services(&self) -> Vec<Service> {
        let mut services = self.services.clone();
        services.sort_by_key(|service| service.order);
        services
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.slug == slug)
    }

    /// FAQ entries in ascending `order`, capped at [`FAQ_LIMIT`].
    pub fn faq_entries(&self) -> Vec<FaqEntry> {
        let mut items: Vec<&FaqItem> = self.faq_items.iter().collect();
        items.sort_by_key(|item| item.order);
        items
            .into_iter()
            .take(FAQ_LIMIT)
            .map(|item| FaqEntry {
                question: item.question.clone(),
                answer: item.answer.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_settings_resolve_to_defaults() {
        let settings: ServicePageSettings = serde_json::from_value(json!({
            "listHero": { "title": "Özel Başlık" }
        }))
        .unwrap();
        assert_eq!(settings.list_hero.title, "Özel Başlık");
        assert_eq!(settings.list_hero.badge, "Hizmetlerimiz");
        assert_eq!(settings.not_found, NotFoundCopy::default());
    }

    #[test]
    fn test_empty_document_is_valid() {
        let site: SiteContent = serde_json::from_value(json!({})).unwrap();
        assert!(site.services.is_empty());
        assert_eq!(site.about_us.who_we_are.mission.title, "Misyonumuz");
    }

    #[test]
    fn test_faq_sorted_and_capped() {
        let faq_items = (0..120)
            .rev()
            .map(|i| FaqItem {
                question: format!("q{}", i),
                answer: format!("a{}", i),
                order: i,
            })
            .collect();
        let site = SiteContent {
            faq_items,
            ..Default::default()
        };

        let entries = site.faq_entries();
        assert_eq!(entries.len(), FAQ_LIMIT);
        assert_eq!(entries[0].question, "q0");
        assert_eq!(entries[99].question, "q99");
    }
}
