use folio_site_core::{ResumeAsset, SiteConfig, Theme, ViewerMode};
use folio_test_fixtures::configs;

#[test]
fn site_fixture_matches_built_in_defaults() {
    let json = configs::json("site").unwrap();
    let parsed = SiteConfig::from_json(&json).unwrap();
    assert_eq!(parsed, SiteConfig::default());
    assert_eq!(parsed.default_theme, Theme::System);
}

#[test]
fn partial_config_fills_missing_fields() {
    let parsed = SiteConfig::from_json(r#"{ "default_theme": "dark" }"#).unwrap();
    assert_eq!(parsed.default_theme, Theme::Dark);
    assert_eq!(parsed.resume, ResumeAsset::default());
    assert_eq!(parsed.contact.success_title, "Message sent!");
}

#[test]
fn resume_links_are_url_encoded() {
    let parsed: SiteConfig = configs::load("site").unwrap();
    let links = parsed.resume.links();
    assert_eq!(links.viewer_src, "/Yaswanth%20Kuramdasu.pdf");
    assert_eq!(links.new_tab_href, links.download_href);
    assert_eq!(links.download_name, "Yaswanth Kuramdasu.pdf");
    assert_eq!(ResumeAsset::viewer_mode(767), ViewerMode::Fallback);
    assert_eq!(ResumeAsset::viewer_mode(768), ViewerMode::Inline);
}
