//! Integration tests for the background aggregate and border declarations.

use wombat_css::{
    AngularGradient, Background, BackgroundAttachment, BackgroundClip, BackgroundImage,
    BackgroundOrigin, BackgroundPosition, BackgroundRepeat, BackgroundSize, BackgroundSizeKeyword,
    BkgOption, Border, BorderStyle, BorderWidthKeyword, Direction, Gradient, PositionUnit, Rgb,
    Unit, WidthUnit,
};

#[test]
fn test_color_only_renders_exactly_one_line() {
    let background = Background {
        color: Some(Rgb::parse("gray")),
        ..Background::default()
    };
    assert_eq!(background.render(), "background-color:#808080;");
    assert_eq!(background.to_string(), background.render());
}

#[test]
fn test_empty_background_renders_empty() {
    // A degenerate block is legal; validity is the caller's concern.
    assert_eq!(Background::default().render(), "");
}

#[test]
fn test_color_and_angular_gradient_end_to_end() {
    let background = Background {
        color: Some(Rgb::parse("gray")),
        gradient: Some(Gradient::Angular(AngularGradient::new(
            -90,
            vec![Rgb::parse("#74c2e1"), Rgb::parse("#0191c8")],
        ))),
        ..Background::default()
    };
    let rendered = background.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "background-color:#808080;");
    assert!(lines[1].contains("-webkit-"));
    assert!(lines[2].contains("-o-"));
    assert!(lines[3].contains("-moz-"));
    assert!(lines[4].starts_with("background:linear-gradient("));
    for line in &lines[1..] {
        assert!(line.contains("-90deg,"), "in {line}");
        assert!(line.contains("#74C2E1,#0191C8"), "in {line}");
    }
}

#[test]
fn test_field_emission_order() {
    let background = Background {
        value: Some(BkgOption::NoRepeat),
        color: Some(Rgb::parse("navy")),
        size: Some(BackgroundSize::Keyword(BackgroundSizeKeyword::Cover)),
        position: Some(BackgroundPosition::keyword(Direction::Left)),
        attachment: Some(BackgroundAttachment::Fixed),
        clip: Some(BackgroundClip::PaddingBox),
        origin: Some(BackgroundOrigin::ContentBox),
        repeat: Some(BackgroundRepeat::RepeatX),
        image_option: Some(BackgroundImage::None),
        image_url: Some("Chart.png".to_string()),
        ..Background::default()
    };
    assert_eq!(
        background.render(),
        "background:no-repeat;\n\
         background-color:#000080;\n\
         background-size:cover;\n\
         background-position:left left;\n\
         background-attachment:fixed;\n\
         background-clip:padding-box;\n\
         background-origin:content-box;\n\
         background-repeat:repeat-x;\n\
         background-image:none;\n\
         background-image:url('Chart.png');"
    );
}

#[test]
fn test_background_size_pair_defaults_second_slot() {
    let size = BackgroundSize::pair(Unit::px(4), None);
    assert_eq!(size.render(), "background-size:4px 4px;");

    // The second slot is an independent copy of the first.
    let mut size = size;
    if let BackgroundSize::Pair(first, second) = &mut size {
        second.magnitude = Some(8);
        assert_eq!(first.magnitude, Some(4));
    }
    assert_eq!(size.render(), "background-size:4px 8px;");
}

#[test]
fn test_background_position_pair() {
    let position = BackgroundPosition::pair(PositionUnit::px(10), None);
    assert_eq!(position.render(), "background-position:10px 10px;");
    assert_eq!(position.position1, position.position2);

    let keyword = BackgroundPosition::keyword(Direction::Left);
    assert_eq!(keyword.render(), "background-position:left left;");
}

#[test]
fn test_empty_image_url_is_skipped() {
    let background = Background {
        image_url: Some(String::new()),
        ..Background::default()
    };
    assert_eq!(background.render(), "");
}

#[test]
fn test_border_shorthand() {
    let border = Border {
        width: Some(WidthUnit::semantic(BorderWidthKeyword::Thin)),
        style: Some(BorderStyle::Solid),
        color: Some(Rgb::parse("black")),
        ..Border::default()
    };
    assert_eq!(border.render(), "border:thin solid #000000;");
    assert_eq!(border.to_string(), border.render());
}

#[test]
fn test_border_side_property() {
    let border = Border {
        side: Some(Direction::Left),
        width: Some(WidthUnit::px(4)),
        style: Some(BorderStyle::Dashed),
        color: Some(Rgb::parse("gray")),
    };
    assert_eq!(border.render(), "border-left:4px dashed #808080;");

    // `center` is not a border side and leaves the plain property.
    let border = Border {
        side: Some(Direction::Center),
        style: Some(BorderStyle::Solid),
        ..Border::default()
    };
    assert_eq!(border.render(), "border:solid;");
}
