//! Document head metadata and the schema.org block, written once at startup.

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::{self, FAVICON, LOGO_LIGHT};
use crate::content::{CONTACT, SOCIAL_PROFILES};

const TITLE: &str = "Luxury Villas in Goa | Premium Homes & Real Estate - Viyaa Estates";
const DESCRIPTION: &str = "Buy luxury villas in Goa with Viyaa Estates. Premium 4BHK villas with modern architecture, Vaastu-compliant design. Explore Viyaa Shantam - your dream villa in Goa.";
const SITE_NAME: &str = "Viyaa Estates";

const KEYWORDS: &[&str] = &[
    "villas in Goa",
    "luxury villas Goa",
    "buy villa in Goa",
    "Goa real estate",
    "premium villas Goa",
    "4BHK villas Goa",
    "Viyaa Estates",
    "Viyaa Shantam",
    "Goa property",
    "villas for sale Goa",
    "luxury homes Goa",
    "Goa villas",
    "real estate Goa",
    "villa projects Goa",
    "luxury boutique villas",
    "curated living",
    "limited edition residences",
    "bespoke homes",
    "private estate living",
    "design-led development",
    "ultra-premium villas",
    "signature residences",
    "tropical modern architecture",
    "coastal contemporary",
    "lush green living",
    "forest-view villas",
    "Japanese architecture inspired",
    "sustainable coastal living",
    "harmony with nature",
    "architectural masterpiece",
    "spatial luxury",
    "open-plan living",
    "double-height volumes",
    "natural light optimised",
    "courtyard homes",
    "infinity pool villas",
    "seamless indoor-outdoor living",
    "handcrafted detailing",
    "high rental yield villas",
    "holiday home investment",
    "second-home destination",
    "scarcity-driven appreciation",
    "low-density development",
    "capital growth asset",
    "lifestyle investment",
    "sanctuary living",
    "tranquil retreat",
    "mindful luxury",
    "private oasis",
    "slow living",
    "wellness-oriented spaces",
    "elevated coastal lifestyle",
    "timeless elegance",
    "understated luxury",
    "crafted with integrity",
    "refined minimalism",
    "discreet opulence",
    "artisanal excellence",
    "thoughtfully curated",
    "luxury property developer India",
    "architectural real estate solutions",
    "bespoke villa design",
    "architectural excellence in Goa",
    "featured Goa real estate",
    "Goa villa portfolio",
    "luxury home portfolio",
    "real estate consultancy Goa",
    "property search luxury Goa",
    "architectural design Goa",
    "interior design Goa",
    "PMC services Goa",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub canonical: String,
    pub locale: &'static str,
    pub og_image: String,
    pub og_image_width: u32,
    pub og_image_height: u32,
    pub og_image_alt: &'static str,
    pub twitter_card: &'static str,
    pub robots: &'static str,
    pub googlebot: &'static str,
    pub favicon: &'static str,
}

impl PageMetadata {
    pub fn site() -> Self {
        Self {
            title: TITLE,
            description: DESCRIPTION,
            keywords: KEYWORDS,
            author: SITE_NAME,
            canonical: format!("{}/", config::get_site_url()),
            locale: "en_IN",
            og_image: config::absolute_url(LOGO_LIGHT),
            og_image_width: 1200,
            og_image_height: 630,
            og_image_alt: "Viyaa Estates - Luxury Villas in Goa",
            twitter_card: "summary_large_image",
            robots: "index, follow",
            googlebot: "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
            favicon: FAVICON,
        }
    }

    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// `<meta name=…>` pairs.
    pub fn named_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("description", self.description.to_string()),
            ("keywords", self.keywords_content()),
            ("author", self.author.to_string()),
            ("robots", self.robots.to_string()),
            ("googlebot", self.googlebot.to_string()),
            ("twitter:card", self.twitter_card.to_string()),
            ("twitter:title", self.title.to_string()),
            ("twitter:description", self.description.to_string()),
            ("twitter:image", self.og_image.clone()),
        ]
    }

    /// `<meta property=…>` pairs for Open Graph.
    pub fn property_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("og:type", "website".to_string()),
            ("og:locale", self.locale.to_string()),
            ("og:url", self.canonical.clone()),
            ("og:title", self.title.to_string()),
            ("og:description", self.description.to_string()),
            ("og:site_name", SITE_NAME.to_string()),
            ("og:image", self.og_image.clone()),
            ("og:image:width", self.og_image_width.to_string()),
            ("og:image:height", self.og_image_height.to_string()),
            ("og:image:alt", self.og_image_alt.to_string()),
        ]
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: &'static str,
    #[serde(rename = "addressLocality")]
    pub address_locality: &'static str,
    #[serde(rename = "postalCode")]
    pub postal_code: &'static str,
    #[serde(rename = "addressCountry")]
    pub address_country: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AreaServed {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: String,
    pub logo: String,
    pub image: String,
    pub telephone: &'static str,
    pub email: &'static str,
    pub address: PostalAddress,
    pub area_served: AreaServed,
    pub price_range: &'static str,
    pub opening_hours: &'static str,
    pub same_as: Vec<&'static str>,
}

impl StructuredData {
    pub fn site() -> Self {
        Self {
            context: "https://schema.org",
            kind: "RealEstateAgent",
            name: SITE_NAME,
            description: "Luxury villas in Goa - Premium real estate development with architectural design and interior design services",
            url: config::get_site_url().to_string(),
            logo: config::absolute_url(LOGO_LIGHT),
            image: config::absolute_url(LOGO_LIGHT),
            telephone: CONTACT.schema_phone,
            email: CONTACT.email,
            address: PostalAddress {
                kind: "PostalAddress",
                street_address: CONTACT.street,
                address_locality: CONTACT.locality,
                postal_code: CONTACT.postal_code,
                address_country: CONTACT.country_code,
            },
            area_served: AreaServed { kind: "State", name: "Goa" },
            price_range: "Premium",
            opening_hours: CONTACT.schema_hours,
            same_as: SOCIAL_PROFILES
                .iter()
                .filter(|profile| profile.public_profile)
                .map(|profile| profile.url)
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn upsert_head_element(
    document: &Document,
    tag: &str,
    key_attr: &str,
    key: &str,
    value_attr: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let selector = format!("{}[{}=\"{}\"]", tag, key_attr, key);
    let element = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element(tag)?;
            created.set_attribute(key_attr, key)?;
            let head = document.head().ok_or_else(|| JsValue::from_str("document has no <head>"))?;
            head.append_child(&created)?;
            created
        }
    };
    element.set_attribute(value_attr, value)?;
    Ok(element)
}

fn append_structured_data(document: &Document, data: &StructuredData) -> Result<(), JsValue> {
    const MARKER: &str = "site-structured-data";
    if document.get_element_by_id(MARKER).is_some() {
        return Ok(());
    }
    let json = data
        .to_json()
        .map_err(|e| JsValue::from_str(&format!("structured data: {}", e)))?;
    let script = document.create_element("script")?;
    script.set_id(MARKER);
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&json));
    let head = document.head().ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&script)?;
    Ok(())
}

fn write_head(document: &Document, meta: &PageMetadata, data: &StructuredData) -> Result<(), JsValue> {
    document.set_title(meta.title);
    for (name, content) in meta.named_tags() {
        upsert_head_element(document, "meta", "name", name, "content", &content)?;
    }
    for (property, content) in meta.property_tags() {
        upsert_head_element(document, "meta", "property", property, "content", &content)?;
    }
    upsert_head_element(document, "link", "rel", "canonical", "href", &meta.canonical)?;
    upsert_head_element(document, "link", "rel", "icon", "href", meta.favicon)?;
    append_structured_data(document, data)
}

/// Writes the page metadata into the live document. Failures are logged only.
pub fn apply_to_document() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document available, skipping page metadata");
        return;
    };
    match write_head(&document, &PageMetadata::site(), &StructuredData::site()) {
        Ok(()) => debug!("Page metadata applied"),
        Err(e) => warn!("Failed to apply page metadata: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn structured_data_uses_schema_keys() {
        let json = StructuredData::site().to_json().expect("serializes");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "RealEstateAgent");
        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["postalCode"], "110020");
        assert_eq!(value["areaServed"]["name"], "Goa");
        assert_eq!(value["openingHours"], "Mo-Sa 10:00-18:00");
        assert!(value.get("same_as").is_none());
    }

    #[test]
    fn same_as_lists_public_profiles() {
        let data = StructuredData::site();
        assert_eq!(data.same_as.len(), 4);
        assert!(data.same_as.iter().all(|url| !url.contains("wa.me")));
    }

    #[test]
    fn keywords_are_comma_separated() {
        let meta = PageMetadata::site();
        let content = meta.keywords_content();
        assert!(content.starts_with("villas in Goa, luxury villas Goa"));
        assert!(content.ends_with("PMC services Goa"));
        assert_eq!(content.split(", ").count(), KEYWORDS.len());
    }

    #[test]
    fn social_cards_share_title_and_image() {
        let meta = PageMetadata::site();
        let named = meta.named_tags();
        let property = meta.property_tags();
        fn lookup(tags: &[(&'static str, String)], key: &str) -> Option<String> {
            tags.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
        }
        assert_eq!(lookup(&named, "twitter:title"), lookup(&property, "og:title"));
        assert_eq!(lookup(&named, "twitter:image"), lookup(&property, "og:image"));
        assert_eq!(lookup(&property, "og:image:width").as_deref(), Some("1200"));
    }

    #[test]
    fn canonical_ends_with_slash() {
        assert!(PageMetadata::site().canonical.ends_with('/'));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    fn count(document: &Document, selector: &str) -> u32 {
        document.query_selector_all(selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn applying_twice_keeps_one_of_each_head_entry() {
        let document = web_sys::window().unwrap().document().unwrap();

        apply_to_document();
        apply_to_document();

        assert_eq!(count(&document, "#site-structured-data"), 1);
        assert_eq!(count(&document, "meta[name=\"description\"]"), 1);
        assert_eq!(count(&document, "meta[property=\"og:title\"]"), 1);
        assert_eq!(count(&document, "link[rel=\"canonical\"]"), 1);
        assert_eq!(document.title(), PageMetadata::site().title);
    }

    #[wasm_bindgen_test]
    fn structured_data_block_is_valid_json_ld() {
        let document = web_sys::window().unwrap().document().unwrap();
        apply_to_document();

        let script = document.get_element_by_id("site-structured-data").unwrap();
        assert_eq!(script.get_attribute("type").as_deref(), Some("application/ld+json"));
        let text = script.text_content().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["@type"], "RealEstateAgent");
    }
}
