//! End-to-end tests: search, persist, replay and render.

use image::Rgb;
use tempfile::tempdir;

use quadratic_attractors::{
    compute::{SearchOutcome, search},
    render::{render, render_points},
    schema::{
        Attractor, AttractorMetadata, DensityConfig, RenderConfig, SearchConfig, SeedSource,
        SeedToken,
    },
};

fn test_config() -> SearchConfig {
    SearchConfig {
        count: 1,
        max_iterations: 4000,
        min_lyapunov: 10.0,
        burn_in: 100,
        max_attempts: 5000,
    }
}

fn find(phrase: &str, config: SearchConfig) -> SearchOutcome {
    search(config, SeedSource::Phrase(phrase.to_string())).expect("search exhausted")
}

#[test]
fn test_accepted_attractor_shape() {
    let outcome = find("pipeline", test_config());

    assert_eq!(outcome.seed, SeedToken::from_phrase("pipeline"));
    assert_eq!(outcome.attractors.len(), 1);
    assert_eq!(outcome.stats.accepted, 1);
    assert!(outcome.stats.attempts <= 5000);
    assert_eq!(
        outcome.stats.attempts,
        outcome.stats.accepted
            + outcome.stats.escaped
            + outcome.stats.stagnated
            + outcome.stats.below_threshold
    );

    let attractor = &outcome.attractors[0];
    assert_eq!(attractor.len(), 4000 - 100);
    assert_eq!(attractor.parameters, outcome.parameters);
    assert!(
        attractor
            .points
            .iter()
            .all(|p| p.x.abs() <= 1e10 && p.y.abs() <= 1e10)
    );
}

#[test]
fn test_multiple_attractors() {
    let config = SearchConfig {
        count: 2,
        ..test_config()
    };
    let outcome = search(config, SeedSource::Phrase("two".to_string())).expect("search exhausted");
    assert_eq!(outcome.attractors.len(), 2);
    assert_eq!(outcome.parameters, outcome.attractors[1].parameters);
}

#[test]
fn test_replay_matches_search() {
    let outcome = find("replay", test_config());
    let attractor = &outcome.attractors[0];

    let replayed = Attractor::replay(outcome.parameters, 100, attractor.len()).unwrap();
    assert_eq!(&replayed, attractor);
}

#[test]
fn test_metadata_roundtrip_reproduces_search() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("attractor_metadata.json");

    let outcome = find("metadata", test_config());
    let metadata = AttractorMetadata::new(
        outcome.seed.clone(),
        &outcome.parameters,
        outcome.attractors[0].len(),
    );
    metadata.save(&path).unwrap();

    let loaded = AttractorMetadata::load(&path).unwrap();
    assert_eq!(loaded, metadata);
    assert_eq!(loaded.parameters().unwrap(), outcome.parameters);

    let again = search(test_config(), SeedSource::Token(loaded.seed)).unwrap();
    assert_eq!(again, outcome);
}

#[test]
fn test_metadata_missing_file() {
    let dir = tempdir().unwrap();
    let result = AttractorMetadata::load(dir.path().join("absent.json"));
    assert!(result.is_err());
}

#[test]
fn test_render_to_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("attractor.png");

    let outcome = find("render", test_config());
    let config = RenderConfig {
        width: 320,
        height: 200,
        density: Some(DensityConfig::default()),
        ..Default::default()
    };
    let img = render(&outcome.attractors[0], &config);
    assert_eq!(img.dimensions(), (320, 200));
    assert!(img.pixels().any(|p| *p != Rgb([0, 0, 0])));

    img.save(&path).unwrap();
    let reopened = image::open(&path).unwrap().to_rgb8();
    assert_eq!(reopened, img);
}

#[test]
fn test_render_points_scenario() {
    let config = RenderConfig {
        width: 100,
        height: 100,
        margin: 10,
        ..Default::default()
    };
    let img = render_points(&[-1.0, 1.0], &[-1.0, 1.0], &config);
    assert_eq!(*img.get_pixel(10, 10), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(90, 90), Rgb([255, 255, 255]));
    assert_eq!(img.pixels().filter(|p| **p != Rgb([0, 0, 0])).count(), 2);
}
