use vitrine::{CatalogConfig, GalleryCatalog, TextureHandle, TextureLibrary};

fn fixture() -> CatalogConfig {
    let s = include_str!("data/catalog.json");
    serde_json::from_str(s).unwrap()
}

fn library_for(config: &CatalogConfig) -> TextureLibrary {
    let mut lib = TextureLibrary::new();
    for e in &config.entries {
        lib.insert(e.display.clone(), TextureHandle::new(e.display.as_str()));
        lib.insert(
            e.description.clone(),
            TextureHandle::new(e.description.as_str()),
        );
    }
    lib
}

#[test]
fn json_fixture_builds_a_catalog() {
    let config = fixture();
    let catalog = GalleryCatalog::from_config(&config, &library_for(&config)).unwrap();
    assert_eq!(catalog.len(), 5);
    // Boot entry is declared pre-seen.
    assert!(catalog.is_seen(0));
    assert!(!catalog.all_seen());
}

#[test]
fn optional_links_default_to_none() {
    let config = fixture();
    assert!(config.entries[2].source_code.is_none());
    assert!(config.entries[3].live_demo.is_none());
    assert!(config.entries[4].live_demo.is_none());
    assert!(config.entries[4].source_code.is_none());
}

#[test]
fn fixture_round_trips_through_json() {
    let config = fixture();
    let s = serde_json::to_string(&config).unwrap();
    let de: CatalogConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(de.entries.len(), config.entries.len());
    assert_eq!(de.entries[0].id, "portfolio");
}

#[test]
fn missing_library_key_fails_construction() {
    let config = fixture();
    // Library missing one declared description texture.
    let mut lib = TextureLibrary::new();
    for e in &config.entries {
        lib.insert(e.display.clone(), TextureHandle::new(e.display.as_str()));
        if e.id != "qomp" {
            lib.insert(
                e.description.clone(),
                TextureHandle::new(e.description.as_str()),
            );
        }
    }
    let err = GalleryCatalog::from_config(&config, &lib).unwrap_err();
    assert!(err.to_string().contains("qompDescription"));
}
