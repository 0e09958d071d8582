use ghdiff::config::{ClassNames, Config};
use ghdiff::render::Renderer;
use ghdiff::stylesheet::{DEFAULT_STYLESHEET, render_stylesheet};

#[test]
fn default_stylesheet_uses_role_names() {
    let css = render_stylesheet(DEFAULT_STYLESHEET, &ClassNames::default(), "diff").unwrap();
    assert!(css.starts_with(r#"<style type="text/css">"#));
    assert!(css.trim_end().ends_with("</style>"));
    assert!(css.contains(".diff .control {"));
    assert!(css.contains(".diff .insert .highlight {"));
    assert!(css.contains(".diff .delete .highlight {"));
    assert!(css.contains(".diff div:hover {"));
    assert!(!css.contains("{{"));
}

#[test]
fn insert_and_delete_highlights_differ() {
    let css = render_stylesheet(DEFAULT_STYLESHEET, &ClassNames::default(), "diff").unwrap();
    let rule = |selector: &str| {
        let start = css.find(selector).unwrap();
        let end = start + css[start..].find('}').unwrap();
        css[start..end].to_string()
    };
    assert_ne!(rule(".diff .insert .highlight"), rule(".diff .delete .highlight"));
    assert_ne!(rule(".diff .insert {"), rule(".diff .insert .highlight"));
}

#[test]
fn custom_template_receives_class_variables() {
    let classes = ClassNames {
        insert: "ins".to_string(),
        ..ClassNames::default()
    };
    let css = render_stylesheet(
        "<style>.{{ container_class }} .{{ insert_class }} .{{ highlight_class }} { color: green; }</style>",
        &classes,
        "gh",
    )
    .unwrap();
    assert_eq!(css, "<style>.gh .ins .highlight { color: green; }</style>");
}

#[test]
fn malformed_template_errors() {
    let result = render_stylesheet("{% if %}", &ClassNames::default(), "diff");
    assert!(result.is_err());
}

#[test]
fn unknown_variable_errors() {
    let result = render_stylesheet("{{ nonexistent }}", &ClassNames::default(), "diff");
    assert!(result.is_err());
}

#[test]
fn renderer_uses_custom_template() {
    let config = Config {
        stylesheet_template: Some("<style>/* {{ delete_class }} */</style>\n".to_string()),
        ..Config::default()
    };
    let renderer = Renderer::new(config).unwrap();
    let html = renderer.colorize(&["@@ -1 +1 @@", "-a", "+b"], true);
    assert!(html.starts_with("<style>/* delete */</style>\n<div class=\"diff\">"));
}

#[test]
fn renderer_rejects_broken_template() {
    let config = Config {
        stylesheet_template: Some("{{ unclosed".to_string()),
        ..Config::default()
    };
    assert!(Renderer::new(config).is_err());
}
