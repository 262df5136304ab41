use super::*;

#[test]
fn builtin_content_validates() {
    let content = PortfolioContent::builtin();
    content.validate().expect("builtin content is valid");
    assert_eq!(content.testimonials.len(), 3);
    assert_eq!(content.projects.len(), 6);
    assert_eq!(
        content.profile.headline(),
        "Blockchain Developer • React Enthusiast • Python Coder"
    );
}

#[test]
fn absent_and_empty_optional_fields_render_empty() {
    let content = PortfolioContent::builtin();
    let first = &content.testimonials[0];
    assert_eq!(first.name_or_empty(), "Meta1Zero");
    assert_eq!(first.role_or_empty(), "");

    let last = &content.testimonials[2];
    assert_eq!(last.name_or_empty(), "");
    assert_eq!(last.role_or_empty(), "");
}

#[test]
fn toml_round_trip_preserves_content() {
    let content = PortfolioContent::builtin();
    let raw = toml::to_string_pretty(&content).expect("serialize");
    let parsed = PortfolioContent::from_toml_str(&raw).expect("parse");
    assert_eq!(parsed, content);
}

#[test]
fn empty_testimonials_are_rejected() {
    let mut content = PortfolioContent::builtin();
    content.testimonials.clear();
    assert!(matches!(content.validate(), Err(ContentError::EmptyCarousel)));
}

#[test]
fn email_must_be_mailto_link() {
    let mut content = PortfolioContent::builtin();
    content.contact.email = "https://example.com".into();
    match content.validate() {
        Err(ContentError::InvalidLink { field, .. }) => assert_eq!(field, "contact.email"),
        other => panic!("expected invalid link, got {other:?}"),
    }
}

#[test]
fn relative_links_are_rejected() {
    let mut content = PortfolioContent::builtin();
    content.contact.github = "github.com/someone".into();
    assert!(matches!(
        content.validate(),
        Err(ContentError::InvalidLink { field: "contact.github", .. })
    ));
}

#[test]
fn blank_name_is_missing_field() {
    let mut content = PortfolioContent::builtin();
    content.profile.name = "  ".into();
    assert!(matches!(
        content.validate(),
        Err(ContentError::MissingField("profile.name"))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        PortfolioContent::from_toml_str("title = ["),
        Err(ContentError::Parse(_))
    ));
}

#[test]
fn load_reports_missing_file_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    match PortfolioContent::load(&path) {
        Err(ContentError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn modal_detail_body_falls_back_to_empty() {
    let content = PortfolioContent::builtin();
    let experience = ModalDetail::Experience(content.experience[0].clone());
    assert_eq!(experience.title(), "Blockchain Developer at Freelancer");
    assert!(experience.body().starts_with("Smart contract deployments"));

    let with_note = ModalDetail::Education(content.education[1].clone());
    assert_eq!(with_note.body(), "Graduated with a CGPA of 9.63");

    let without_note = ModalDetail::Education(content.education[2].clone());
    assert_eq!(without_note.body(), "");
    assert_eq!(without_note.title(), "Diploma in Computer Engineering");
}
