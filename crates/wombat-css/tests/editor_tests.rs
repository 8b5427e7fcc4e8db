//! Integration tests for the editing-surface interface.

use wombat_css::{
    Background, BackgroundField, BackgroundRepeat, EditorError, FieldValue, GradientVariant,
    PreviewSurface, Rgb, SAMPLE_IMAGES, field_text, parse_keyword, refresh_preview, set_field,
};

/// A preview pane that records every block pushed at it.
struct RecordingSurface {
    blocks: Vec<String>,
}

impl PreviewSurface for RecordingSurface {
    fn refresh(&mut self, css: &str) {
        self.blocks.push(css.to_string());
    }
}

#[test]
fn test_set_field_by_name() {
    let mut background = Background::default();
    set_field(
        &mut background,
        "repeat",
        FieldValue::Keyword("no-repeat".to_string()),
    )
    .unwrap();
    assert_eq!(background.repeat, Some(BackgroundRepeat::NoRepeat));

    set_field(
        &mut background,
        "color",
        FieldValue::Keyword("gray".to_string()),
    )
    .unwrap();
    assert_eq!(background.color, Some(Rgb::parse("gray")));

    set_field(
        &mut background,
        "image-url",
        FieldValue::Text("wrmult.gif".to_string()),
    )
    .unwrap();
    assert_eq!(background.image_url.as_deref(), Some("wrmult.gif"));
}

#[test]
fn test_unknown_field_is_an_error() {
    let mut background = Background::default();
    let result = set_field(&mut background, "bogus", FieldValue::Clear);
    assert_eq!(result, Err(EditorError::UnknownField("bogus".to_string())));
}

#[test]
fn test_unknown_keyword_is_an_error() {
    let mut background = Background::default();
    let result = set_field(
        &mut background,
        "repeat",
        FieldValue::Keyword("sideways".to_string()),
    );
    assert_eq!(
        result,
        Err(EditorError::UnknownKeyword {
            field: BackgroundField::Repeat,
            keyword: "sideways".to_string(),
        })
    );
    // The failed assignment left the field untouched.
    assert_eq!(background.repeat, None);
}

#[test]
fn test_type_mismatch_is_an_error() {
    let mut background = Background::default();
    let result = set_field(
        &mut background,
        "color",
        FieldValue::Text("not a color value".to_string()),
    );
    assert_eq!(result, Err(EditorError::TypeMismatch(BackgroundField::Color)));
}

#[test]
fn test_clear_field() {
    let mut background = Background {
        color: Some(Rgb::parse("navy")),
        ..Background::default()
    };
    set_field(&mut background, "color", FieldValue::Clear).unwrap();
    assert_eq!(background.color, None);
}

#[test]
fn test_field_text_round_trip() {
    let mut background = Background::default();
    set_field(
        &mut background,
        "color",
        FieldValue::Color(Rgb::parse("#74c2e1")),
    )
    .unwrap();
    assert_eq!(
        field_text(&background, "color").unwrap().as_deref(),
        Some("#74C2E1")
    );
    assert_eq!(field_text(&background, "repeat").unwrap(), None);
    assert!(field_text(&background, "bogus").is_err());
}

#[test]
fn test_preview_refresh_observes_rendered_block() {
    let background = Background {
        color: Some(Rgb::parse("gray")),
        ..Background::default()
    };
    let mut surface = RecordingSurface { blocks: Vec::new() };
    let css = refresh_preview(&background, &mut surface);
    assert_eq!(css, "background-color:#808080;");
    assert_eq!(surface.blocks, vec!["background-color:#808080;".to_string()]);
}

#[test]
fn test_gradient_variant_enumeration() {
    assert_eq!(GradientVariant::ALL.len(), 3);
    let (variant, ok) = parse_keyword::<GradientVariant>("radial");
    assert_eq!((variant, ok), (GradientVariant::Radial, true));
}

#[test]
fn test_sample_image_list_is_closed() {
    assert_eq!(
        SAMPLE_IMAGES,
        ["wrmult.gif", "Application.png", "Chart.png", "mnm_black250.png"]
    );
}
