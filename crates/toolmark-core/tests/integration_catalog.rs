//! Integration test: edit a catalog through the public API and persist it.
//!
//! Mirrors a typical session: start from the seed list, add and rename tools,
//! change a status, then reload from disk and check what survived.

use toolmark_core::catalog::{Catalog, CatalogError, CatalogStore, Status, StatusFilter};
use toolmark_core::config::ToolmarkConfig;
use tempfile::tempdir;

#[test]
fn session_edits_survive_reload() {
    let dir = tempdir().unwrap();
    let cfg = ToolmarkConfig {
        data_file: Some(dir.path().join("tools.json")),
        ..ToolmarkConfig::default()
    };
    let store = CatalogStore::from_config(&cfg).unwrap();
    assert_eq!(store.path(), dir.path().join("tools.json"));

    let mut catalog = store.load(cfg.seed_on_first_run).unwrap();
    assert_eq!(catalog.len(), 8);

    let id = catalog.add("Perplexity AI", cfg.default_status).unwrap().id;
    catalog.rename(id, "Supabase IO").unwrap();
    assert!(catalog.set_status(id, Status::Used).unwrap());
    catalog.remove(3).unwrap();
    store.save(&catalog).unwrap();

    let reloaded = store.load(cfg.seed_on_first_run).unwrap();
    assert_eq!(reloaded, catalog);
    let tool = reloaded.get(id).unwrap();
    assert_eq!(tool.name, "Supabase IO");
    assert_eq!(tool.url, "https://supabase.io");
    assert_eq!(tool.status, Status::Used);
    assert!(reloaded.get(3).is_none());
    assert_eq!(reloaded.iter().next().map(|t| t.id), Some(id));
}

#[test]
fn duplicate_of_seed_tool_is_rejected() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::at(dir.path().join("tools.json"));
    let mut catalog = store.load(true).unwrap();
    assert!(matches!(
        catalog.add("vs code", Status::Heard),
        Err(CatalogError::Duplicate { .. })
    ));
}

#[test]
fn empty_catalog_without_seed() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::at(dir.path().join("tools.json"));
    let mut catalog: Catalog = store.load(false).unwrap();
    assert!(catalog.is_empty());

    let tool = catalog.add("My Cool Tool", Status::Heard).unwrap();
    assert_eq!(tool.id, 1);
    assert_eq!(tool.url, "https://mycooltool.com");
    assert_eq!(catalog.filtered("cool", StatusFilter::All).len(), 1);
}

#[test]
fn infer_examples_through_public_api() {
    let cases = [
        ("", ""),
        ("   ", ""),
        ("ChatGPT", "https://chatgpt.com"),
        ("GitHub Copilot", "https://github.com/features/copilot"),
        ("GitHub Foo Bar", "https://github.com/foobar"),
        ("Google Vertex", "https://cloud.google.com/vertex-ai"),
        ("Google Maps", "https://maps.google.com"),
        ("Supabase IO", "https://supabase.io"),
        ("JasperAI", "https://jasper.ai"),
        ("My Cool Tool", "https://mycooltool.com"),
        ("figma.com", "https://figma.com"),
        ("Figma", "https://figma.com"),
        ("123", "https://123.com"),
    ];
    for (name, expected) in cases {
        assert_eq!(toolmark_core::infer(name), expected, "infer({name:?})");
    }
}
