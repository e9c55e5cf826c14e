use portfolio::{JsonFileStore, Language, LanguageStore, MemoryStore, PreferenceStore, LANGUAGE_KEY};
use pretty_assertions::assert_eq;

#[test]
fn alternate_language_survives_reload() {
    let mut store = LanguageStore::load(MemoryStore::new());
    assert_eq!(store.language(), Language::En);
    store.set_language(Language::No);

    let reloaded = LanguageStore::load(store.into_storage());
    assert_eq!(reloaded.language(), Language::No);
    assert_eq!(reloaded.translate("nav.projects"), "Prosjekter");
}

#[test]
fn cleared_storage_falls_back_to_default() {
    let mut store = LanguageStore::load(MemoryStore::new());
    store.set_language(Language::No);

    let mut storage = store.into_storage();
    storage.clear();
    let reloaded = LanguageStore::load(storage);
    assert_eq!(reloaded.language(), Language::En);
    assert_eq!(reloaded.translate("nav.projects"), "Projects");
}

#[test]
fn file_backed_preference_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skogesal-portfolio").join("settings.json");

    let mut store = LanguageStore::load(JsonFileStore::new(&path));
    assert_eq!(store.language(), Language::En);
    store.toggle();
    drop(store);

    let reloaded = LanguageStore::load(JsonFileStore::new(&path));
    assert_eq!(reloaded.language(), Language::No);

    std::fs::remove_file(&path).unwrap();
    let fresh = LanguageStore::load(JsonFileStore::new(&path));
    assert_eq!(fresh.language(), Language::En);
}

#[test]
fn corrupt_preference_is_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "\u{0}garbage").unwrap();

    let store = LanguageStore::load(JsonFileStore::new(&path));
    assert_eq!(store.language(), Language::En);

    let mut file = JsonFileStore::new(&path);
    file.save(LANGUAGE_KEY, "nb").unwrap();
    assert_eq!(LanguageStore::load(file).language(), Language::En);
}

#[test]
fn missing_key_falls_back_in_both_languages() {
    let mut store = LanguageStore::load(MemoryStore::new());
    for lang in Language::ALL {
        store.set_language(lang);
        assert_eq!(store.translate("nonexistent.key"), "nonexistent.key");
    }
    store.set_language(Language::En);
    let en = store.translate("nav.projects").to_string();
    store.set_language(Language::No);
    assert_ne!(store.translate("nav.projects"), en);
}

#[test]
fn failed_save_keeps_new_language_for_session() {
    let dir = tempfile::tempdir().unwrap();
    // parent of the settings file is a regular file, so every save fails
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("settings.json");

    let mut store = LanguageStore::load(JsonFileStore::new(&path));
    store.set_language(Language::No);
    assert_eq!(store.language(), Language::No);
    assert_eq!(store.translate("nav.about"), "Om meg");
    assert!(!path.exists());

    store.toggle();
    assert_eq!(store.language(), Language::En);
    assert_eq!(store.translate("nav.about"), "About me");
}
