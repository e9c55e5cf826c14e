//! schema.org description of the site owner (JSON-LD)

use serde::Serialize;

pub const SITE_URL: &str = "https://liveskogesal.com";

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    #[serde(rename = "jobTitle")]
    pub job_title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub image: String,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<&'static str>,
    pub address: PostalAddress,
    #[serde(rename = "alumniOf")]
    pub alumni_of: Organization,
    #[serde(rename = "knowsAbout")]
    pub knows_about: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "addressLocality")]
    pub locality: &'static str,
    #[serde(rename = "addressCountry")]
    pub country: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

pub fn person() -> Person {
    Person {
        context: "https://schema.org",
        kind: "Person",
        name: "Live Skaar Skogesal",
        job_title: "Billedvever og Kunstner",
        description: "Nyutdannet kunstner fra kunsthøgskolen i Bergen som arbeider med billedvev og kunsthåndverk",
        url: SITE_URL,
        image: format!("{}{}", SITE_URL, crate::catalog::PORTRAIT_IMAGE),
        same_as: vec!["https://instagram.com/liveskogesal"],
        address: PostalAddress {
            kind: "PostalAddress",
            locality: "Bergen",
            country: "NO",
        },
        alumni_of: Organization {
            kind: "EducationalOrganization",
            name: "Universitetet i Bergen",
        },
        knows_about: vec!["Billedvev", "Kunsthåndverk", "Plantefarging", "Tekstilkunst", "Håndvev"],
    }
}

/// The block as a JSON string
pub fn person_json_ld() -> Result<String, serde_json::Error> {
    serde_json::to_string(&person())
}
