//! Config file loading and its effect on the page.

use std::time::Duration;

use marquee_engine::{ConfigError, LandingPage, MarqueeConfig, default_content, load_content};
use tempfile::tempdir;

#[test]
fn config_file_drives_page_settings() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[app]\nascii_only = true\nreduced_motion = true\n\n[carousel]\nautoplay_interval_ms = 2000\n\n[counter]\nduration_secs = 0.5\n",
    )
    .expect("write");

    let config = MarqueeConfig::load_from(&path)
        .expect("readable")
        .expect("present");
    let mut page = LandingPage::mount(
        default_content(),
        config.carousel_config(),
        config.counter_config(),
        config.ui_options(),
    );

    assert!(page.ui_options().ascii_only);
    let change = page.tick(Duration::from_millis(2000)).expect("autoplay");
    assert_eq!(change.index, 1);
    let carousel = page.carousel().expect("mounted");
    assert!(carousel.transition().is_none(), "reduced motion swaps in place");
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[counter]\nduration_secs = \"slow\"\n").expect("write");

    let err = MarqueeConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn content_file_rejects_bad_ratings() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("page.toml");
    std::fs::write(
        &path,
        r#"
        company_name = "Acme"

        [hero]
        headline = "H"
        subheading = "S"
        primary_cta = "P"
        secondary_cta = "Q"

        [cta]
        headline = "H"
        subheading = "S"
        primary_cta = "P"
        secondary_cta = "Q"

        [[testimonials]]
        quote = "Too good"
        name = "Zed"
        title = "CEO"
        rating = 6
        "#,
    )
    .expect("write");

    let err = load_content(&path).unwrap_err();
    assert!(err.to_string().contains("page.toml"));
}
