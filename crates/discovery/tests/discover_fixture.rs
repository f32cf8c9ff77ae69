use std::path::PathBuf;

use scenecast_discovery::discover_scenes;

fn fixture_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("demo_scenes.py")
}

#[test]
fn demo_script_scenes_discovered_in_declaration_order() {
    let discovery = discover_scenes(&fixture_script());

    assert!(discovery.diagnostic.is_none());
    assert_eq!(
        discovery.scenes,
        vec!["TimeSeriesIntro", "PanelDataTour", "ForecastZoom"]
    );
}

#[test]
fn helper_and_indirect_subclasses_are_not_offered() {
    let discovery = discover_scenes(&fixture_script());

    assert!(!discovery.scenes.iter().any(|name| name == "SeriesStyle"));
    // AnnotatedForecast extends ForecastZoom, not a scene base directly.
    assert!(!discovery
        .scenes
        .iter()
        .any(|name| name == "AnnotatedForecast"));
}
