//! i18n module - Norwegian/English text and the language store
//!
//! Text is looked up by semantic key (`"nav.projects"`). A key with no entry
//! for the active language comes back unchanged, so a gap shows up on screen
//! as the raw key instead of failing.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::storage::{PreferenceStore, LANGUAGE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Norsk
    No,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::No, Language::En];

    /// Value written to preference storage
    pub fn code(&self) -> &'static str {
        match self {
            Language::No => "no",
            Language::En => "en",
        }
    }

    /// Only the two storage literals are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "no" => Some(Language::No),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::No => Language::En,
            Language::En => Language::No,
        }
    }

    /// Label on the footer toggle: the language it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::No => "EN",
            Language::En => "NO",
        }
    }

    pub fn switch_hint(&self) -> &'static str {
        match self {
            Language::No => "Switch to English",
            Language::En => "Switch to Norwegian",
        }
    }

    fn table(&self) -> &'static HashMap<&'static str, &'static str> {
        static NO_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
        static EN_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
        match self {
            Language::No => NO_TABLE.get_or_init(|| NB_NO.iter().copied().collect()),
            Language::En => EN_TABLE.get_or_init(|| EN_US.iter().copied().collect()),
        }
    }

    /// Direct lookup without the key fallback
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table().get(key).copied()
    }
}

/// Owns the active language. The app holds one and lends it to every
/// text-rendering call; `set_language` is the only writer.
pub struct LanguageStore<S: PreferenceStore> {
    language: Language,
    storage: S,
}

impl<S: PreferenceStore> LanguageStore<S> {
    /// Reads the saved preference once. Absent or unrecognised values keep
    /// the default language.
    pub fn load(storage: S) -> Self {
        let saved = storage.load(LANGUAGE_KEY);
        let language = match saved.as_deref().map(|s| (s, Language::parse(s))) {
            Some((_, Some(lang))) => lang,
            Some((raw, None)) => {
                tracing::warn!(value = raw, "ignoring unknown saved language");
                Language::default()
            }
            None => Language::default(),
        };
        tracing::info!(language = language.code(), "language store ready");
        Self { language, storage }
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Updates the language and saves it. A failed save is logged; the new
    /// language still applies for this session.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = self.storage.save(LANGUAGE_KEY, language.code()) {
            tracing::warn!("failed to save language preference: {}", e);
        }
    }

    pub fn toggle(&mut self) {
        self.set_language(self.language.other());
    }

    /// Text for `key` in the active language, or `key` itself.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str {
        match self.language.lookup(key) {
            Some(text) => text,
            None => {
                tracing::trace!(key, language = self.language.code(), "missing translation");
                key
            }
        }
    }

    /// Short alias used by the renderers
    #[inline]
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.translate(key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

pub const NB_NO: &[(&str, &str)] = &[
    // Navigation
    ("nav.projects", "Prosjekter"),
    ("nav.about", "Om meg"),
    ("nav.cv", "CV"),
    ("nav.menu", "Meny"),

    // Header
    ("header.title", "LIVE SKAAR SKOGESAL"),

    // About
    ("about.title", "Live Skogesal"),
    ("about.intro", "Jeg er en nyutdannet kunstner fra kunsthøgskolen i Bergen som bor og arbeider på Nordnes i Bergen. I min kunstneriske praksis jobber jeg med kunsthåndverk med hovedfokus på billedvev."),
    ("about.description", "Mine arbeider handler om hvordan historiske hendelser og fortellinger preger måten vi i dag ser på verden. Arbeidene tar for seg personlige erfaringer som gjennom et historisk blikk gjøres universelle og mer tilgjengelige."),

    // Work process
    ("process.title", "Arbeidsprosess"),
    ("process.paragraph1", "Min arbeidsprosess starter med å male og planlegge motiv. Neste steg er å farge garn, både ved hjelp av historiske plantefargingsteknikker og moderne syrefarging. Deretter vever jeg bilder for hånd på oppstadvev."),
    ("process.paragraph2", "Dette er en tidkrevende prosess som gir tid til refleksjon. I mitt arbeid viderefører jeg kunnskap som har vært nedarvet gjennom titalls generasjoner. Dette er kunnskap som holder på å gå tapt."),
    ("process.paragraph3", "Når jeg vever melerer jeg garnet for å oppnå spill og kontraster i uttrykket. For å skape struktur i overflaten blander jeg inn andre materialer som glittergarn og blank viskose."),
    ("process.paragraph4", "Arbeidene tar for seg personlige erfaringer som gjennom et historisk blikk gjøres universelle og mer tilgjengelige."),

    // CV
    ("cv.title", "CV"),
    ("cv.education", "Utdannelse"),
    ("cv.education.bachelor", "Bachelor i Kunst"),
    ("cv.education.bachelor.school", "Universitetet i Bergen, 2020-2023"),
    ("cv.education.literature", "Årsstudium i litteraturvitenskap"),
    ("cv.education.literature.school", "Universitetet i Bergen, 2019-2020"),
    ("cv.education.visual", "Visuelle kunstfag"),
    ("cv.education.visual.school", "Kunstskolen i Bergen, 2017-2019"),

    ("cv.awards", "Utmerkelser og stipend"),
    ("cv.awards.best", "\"Årets beste kunstopplevelser 2024\""),
    ("cv.awards.best.source", "kunstavisen.no"),
    ("cv.awards.dream", "Drømmestipendet 2024"),
    ("cv.awards.production", "Produksjonsstipend 2024"),
    ("cv.awards.production.source", "Buskerud kunstsenter"),
    ("cv.awards.debut", "Årets Debutant"),
    ("cv.awards.debut.source", "Novemberutstillingen 2023"),

    ("cv.upcoming", "Kommende utstillinger"),
    ("cv.upcoming.usf", "Visningsrommet USF (separatutstilling)"),
    ("cv.upcoming.usf.date", "Februar 2026"),
    ("cv.upcoming.skog", "Skog Art Space (separatutstilling)"),
    ("cv.upcoming.skog.date", "Mars 2026"),
    ("cv.upcoming.jessheim", "Galleri Jessheim"),
    ("cv.upcoming.jessheim.date", "Mai 2026"),
    ("cv.upcoming.soft", "SOFT galleri (separatutstilling)"),
    ("cv.upcoming.soft.date", "Januar 2027"),

    ("cv.selected", "Utvalgte utstillinger"),
    ("cv.selected.autumn", "Høstutstillingen"),
    ("cv.selected.autumn.venue", "Kunstnernes hus, September 2025"),
    ("cv.selected.ostland", "Østlandsutstillingen"),
    ("cv.selected.ostland.venue", "Kunstbanken senter for samtidskunst, 2024"),
    ("cv.selected.secondskin", "Second Skin; Encounters"),
    ("cv.selected.secondskin.venue", "Kode, 2023"),
    ("cv.selected.tapestry", "Kate Derum and Irene Davies International Tapestry Awards 2024"),
    ("cv.selected.tapestry.venue", "Australian Tapestry workshop, South Melbourne"),

    // Footer
    ("footer.instagram", "Instagram liveskogesal"),
    ("footer.email", "Email live9820@hotmail.com"),
    ("footer.copyright", "2025 © Live Skogesal"),

    // Lightbox
    ("lightbox.photo", "Foto:"),
    ("lightbox.detail", "Detalj"),
    ("lightbox.showDetail", "Vis detalj"),
    ("lightbox.showMain", "Vis hovedbilde"),
    ("lightbox.hideDetails", "Skjul detaljer"),
    ("lightbox.showDetails", "Vis detaljer"),
    ("lightbox.previous", "Forrige bilde"),
    ("lightbox.next", "Neste bilde"),
    ("lightbox.close", "Lukk"),
    ("lightbox.viewArtwork", "Se verket"),
];

pub const EN_US: &[(&str, &str)] = &[
    // Navigation
    ("nav.projects", "Projects"),
    ("nav.about", "About me"),
    ("nav.cv", "CV"),
    ("nav.menu", "Menu"),

    // Header
    ("header.title", "LIVE SKAAR SKOGESAL"),

    // About
    ("about.title", "Live Skogesal"),
    ("about.intro", "I am a newly graduated artist from the Art Academy in Bergen who lives and works in Nordnes, Bergen. In my artistic practice, I work with crafts with a main focus on tapestry weaving."),
    ("about.description", "My works deal with how historical events and stories influence the way we see the world today. The works address personal experiences that through a historical perspective are made universal and more accessible."),

    // Work process
    ("process.title", "Work Process"),
    ("process.paragraph1", "My work process starts with painting and planning motifs. The next step is to dye yarn, both using historical plant dyeing techniques and modern acid dyeing. Then I weave images by hand on an upright loom."),
    ("process.paragraph2", "This is a time-consuming process that allows time for reflection. In my work, I pass on knowledge that has been inherited through dozens of generations. This is knowledge that is about to be lost."),
    ("process.paragraph3", "When I weave, I blend the yarn to achieve play and contrasts in the expression. To create structure in the surface, I mix in other materials such as glitter yarn and shiny viscose."),
    ("process.paragraph4", "The works address personal experiences that through a historical perspective are made universal and more accessible."),

    // CV
    ("cv.title", "CV"),
    ("cv.education", "Education"),
    ("cv.education.bachelor", "Bachelor in Art"),
    ("cv.education.bachelor.school", "University of Bergen, 2020-2023"),
    ("cv.education.literature", "Year of Literary Studies"),
    ("cv.education.literature.school", "University of Bergen, 2019-2020"),
    ("cv.education.visual", "Visual Arts"),
    ("cv.education.visual.school", "Art School in Bergen, 2017-2019"),

    ("cv.awards", "Awards and Grants"),
    ("cv.awards.best", "\"Best Art Experiences of 2024\""),
    ("cv.awards.best.source", "kunstavisen.no"),
    ("cv.awards.dream", "Dream Grant 2024"),
    ("cv.awards.production", "Production Grant 2024"),
    ("cv.awards.production.source", "Buskerud Art Center"),
    ("cv.awards.debut", "Debut of the Year"),
    ("cv.awards.debut.source", "November Exhibition 2023"),

    ("cv.upcoming", "Upcoming Exhibitions"),
    ("cv.upcoming.usf", "Visningsrommet USF (solo exhibition)"),
    ("cv.upcoming.usf.date", "February 2026"),
    ("cv.upcoming.skog", "Skog Art Space (solo exhibition)"),
    ("cv.upcoming.skog.date", "March 2026"),
    ("cv.upcoming.jessheim", "Gallery Jessheim"),
    ("cv.upcoming.jessheim.date", "May 2026"),
    ("cv.upcoming.soft", "SOFT Gallery (solo exhibition)"),
    ("cv.upcoming.soft.date", "January 2027"),

    ("cv.selected", "Selected Exhibitions"),
    ("cv.selected.autumn", "Autumn Exhibition"),
    ("cv.selected.autumn.venue", "Artists' House, September 2025"),
    ("cv.selected.ostland", "Eastern Norway Exhibition"),
    ("cv.selected.ostland.venue", "Kunstbanken Center for Contemporary Art, 2024"),
    ("cv.selected.secondskin", "Second Skin; Encounters"),
    ("cv.selected.secondskin.venue", "Kode, 2023"),
    ("cv.selected.tapestry", "Kate Derum and Irene Davies International Tapestry Awards 2024"),
    ("cv.selected.tapestry.venue", "Australian Tapestry workshop, South Melbourne"),

    // Footer
    ("footer.instagram", "Instagram liveskogesal"),
    ("footer.email", "Email live9820@hotmail.com"),
    ("footer.copyright", "2025 © Live Skogesal"),

    // Lightbox
    ("lightbox.photo", "Photo:"),
    ("lightbox.detail", "Detail"),
    ("lightbox.showDetail", "Show detail"),
    ("lightbox.showMain", "Show main image"),
    ("lightbox.hideDetails", "Hide details"),
    ("lightbox.showDetails", "Show details"),
    ("lightbox.previous", "Previous image"),
    ("lightbox.next", "Next image"),
    ("lightbox.close", "Close"),
    ("lightbox.viewArtwork", "View artwork"),
];
