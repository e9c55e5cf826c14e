//! Catalog module - the published works and the page's text layout

use crate::error::CatalogError;
use crate::models::{Artwork, Gallery};

/// The five tapestries shown on the page, in display order
pub fn artworks() -> Vec<Artwork> {
    vec![
        Artwork::new(
            1,
            "Likesom hjorten stunder etter bekker med rennende vann, slik stunder også min sjel etter deg",
            "2024",
            "/images/slik-hjorten.jpeg",
        )
        .with_dimensions("140x170 cm")
        .with_materials("Plantefarget og håndfarget garn, nylon og lin")
        .with_photographer("Vegard Kleven")
        .with_detail_image("/images/detalj-slik-hjorten.png")
        .with_aspect_ratio("4/5"),
        Artwork::new(2, "Eg drøymer meg burt", "2024", "/images/eg-droymer-meg-bort.png")
            .with_dimensions("112 x 101 cm")
            .with_materials("Plantefarget garn, håndfarget garn, lin og nylon")
            .with_photographer("Vegard Kleven")
            .with_detail_image("/images/detalj-eg-droymer-meg-bort.jpeg")
            .with_aspect_ratio("1/1"),
        Artwork::new(4, "Vinternatt i rondane", "2024", "/images/vinternatt-rondane.jpeg")
            .with_dimensions("45x45 cm")
            .with_materials("Plantefarget og håndfarget garn, nylon og lin")
            .with_photographer("Vegard Kleven")
            .with_description("Billedveven er en studie av Harald Sohlbergs \"Vinternatt i Rondane\"")
            .with_detail_image("/images/detalj-vinternatt.png")
            .with_aspect_ratio("1/1"),
        Artwork::new(5, "Vannliljer", "2024", "/images/vannliljer.png")
            .with_dimensions("45x45 cm")
            .with_materials("Plantefarget garn, håndfarget garn, nylon og lin")
            .with_photographer("Vegard Kleven")
            .with_description("Billedveven er inspirert av Theodor Kittelsen og hans nøkkel")
            .with_detail_image("/images/detalj-vannlilje.png")
            .with_aspect_ratio("1/1"),
        Artwork::new(6, "Kyss meg", "2024", "/images/kyss-meg.jpeg")
            .with_dimensions("58x56 cm")
            .with_materials("Plantefarget garn, håndfarget garn, nylon og lin")
            .with_photographer("Øystein Thorvaldsen")
            .with_detail_image("/images/detalj-kyss-meg.png")
            .with_aspect_ratio("1/1"),
    ]
}

pub fn gallery() -> Result<Gallery, CatalogError> {
    Gallery::new(artworks())
}

/// Portrait used in the about section
pub const PORTRAIT_IMAGE: &str = "/images/portrett-live.jpeg";

/// Anchored sections reachable from the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    About,
    Cv,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Projects, Section::About, Section::Cv];

    pub fn nav_key(&self) -> &'static str {
        match self {
            Section::Projects => "nav.projects",
            Section::About => "nav.about",
            Section::Cv => "nav.cv",
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Projects => "prosjekter",
            Section::About => "om-meg",
            Section::Cv => "cv",
        }
    }
}

pub const HEADER_TITLE_KEY: &str = "header.title";
pub const MENU_KEY: &str = "nav.menu";

pub fn about_keys() -> [&'static str; 3] {
    ["about.title", "about.intro", "about.description"]
}

/// Title followed by the four paragraphs
pub fn process_keys() -> [&'static str; 5] {
    [
        "process.title",
        "process.paragraph1",
        "process.paragraph2",
        "process.paragraph3",
        "process.paragraph4",
    ]
}

pub fn footer_keys() -> [&'static str; 3] {
    ["footer.instagram", "footer.email", "footer.copyright"]
}

pub const LIGHTBOX_KEYS: &[&str] = &[
    "lightbox.photo",
    "lightbox.detail",
    "lightbox.showDetail",
    "lightbox.showMain",
    "lightbox.hideDetails",
    "lightbox.showDetails",
    "lightbox.previous",
    "lightbox.next",
    "lightbox.close",
    "lightbox.viewArtwork",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvEntry {
    pub title_key: &'static str,
    pub detail_key: Option<&'static str>,
}

impl CvEntry {
    const fn new(title_key: &'static str, detail_key: &'static str) -> Self {
        Self { title_key, detail_key: Some(detail_key) }
    }

    const fn titled(title_key: &'static str) -> Self {
        Self { title_key, detail_key: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvSection {
    pub title_key: &'static str,
    pub entries: &'static [CvEntry],
}

const EDUCATION: &[CvEntry] = &[
    CvEntry::new("cv.education.bachelor", "cv.education.bachelor.school"),
    CvEntry::new("cv.education.literature", "cv.education.literature.school"),
    CvEntry::new("cv.education.visual", "cv.education.visual.school"),
];

const AWARDS: &[CvEntry] = &[
    CvEntry::new("cv.awards.best", "cv.awards.best.source"),
    CvEntry::titled("cv.awards.dream"),
    CvEntry::new("cv.awards.production", "cv.awards.production.source"),
    CvEntry::new("cv.awards.debut", "cv.awards.debut.source"),
];

const UPCOMING: &[CvEntry] = &[
    CvEntry::new("cv.upcoming.usf", "cv.upcoming.usf.date"),
    CvEntry::new("cv.upcoming.skog", "cv.upcoming.skog.date"),
    CvEntry::new("cv.upcoming.jessheim", "cv.upcoming.jessheim.date"),
    CvEntry::new("cv.upcoming.soft", "cv.upcoming.soft.date"),
];

const SELECTED: &[CvEntry] = &[
    CvEntry::new("cv.selected.autumn", "cv.selected.autumn.venue"),
    CvEntry::new("cv.selected.ostland", "cv.selected.ostland.venue"),
    CvEntry::new("cv.selected.secondskin", "cv.selected.secondskin.venue"),
    CvEntry::new("cv.selected.tapestry", "cv.selected.tapestry.venue"),
];

pub const CV_TITLE_KEY: &str = "cv.title";

/// Left column (education, awards) then right column (upcoming, selected)
pub fn cv_sections() -> [CvSection; 4] {
    [
        CvSection { title_key: "cv.education", entries: EDUCATION },
        CvSection { title_key: "cv.awards", entries: AWARDS },
        CvSection { title_key: "cv.upcoming", entries: UPCOMING },
        CvSection { title_key: "cv.selected", entries: SELECTED },
    ]
}

/// Every key the page renders
pub fn ui_keys() -> Vec<&'static str> {
    let mut keys = vec![HEADER_TITLE_KEY, MENU_KEY, CV_TITLE_KEY];
    keys.extend(Section::ALL.iter().map(Section::nav_key));
    keys.extend(about_keys());
    keys.extend(process_keys());
    keys.extend(footer_keys());
    keys.extend_from_slice(LIGHTBOX_KEYS);
    for section in cv_sections() {
        keys.push(section.title_key);
        for entry in section.entries {
            keys.push(entry.title_key);
            keys.extend(entry.detail_key);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_builtin_gallery_is_valid() {
        let gallery = gallery().unwrap();
        assert_eq!(gallery.len(), 5);
        let ids: Vec<u32> = gallery.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
        assert!(gallery.iter().all(Artwork::has_detail_image));
        assert!(gallery.iter().all(|a| a.aspect().is_some()));
    }

    #[test]
    fn test_every_ui_key_is_translated() {
        for lang in Language::ALL {
            for key in ui_keys() {
                assert!(
                    lang.lookup(key).is_some(),
                    "missing {:?} translation for {}",
                    lang,
                    key
                );
            }
        }
    }

    #[test]
    fn test_nav_keys_differ_by_language() {
        let projects = Section::Projects.nav_key();
        assert_ne!(Language::No.lookup(projects), Language::En.lookup(projects));
    }

    #[test]
    fn test_cv_layout() {
        let sections = cv_sections();
        assert_eq!(sections[1].entries[1].detail_key, None);
        let total: usize = sections.iter().map(|s| s.entries.len()).sum();
        assert_eq!(total, 15);
    }
}
