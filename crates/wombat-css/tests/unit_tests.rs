//! Integration tests for measurement units and keyword parsing.

use wombat_css::{
    BorderWidthKeyword, Direction, ExtentUnit, PositionUnit, Unit, UnitKind, Vendor, WidthUnit,
    css_token, declaration_line, parse_keyword, parse_keyword_index,
};

#[test]
fn test_magnitude_rendering() {
    let percent: Unit = Unit::new(50, UnitKind::Percent);
    assert_eq!(percent.render(Vendor::Standard), "50%");

    let inches: Unit = Unit::new(2, UnitKind::In);
    assert_eq!(inches.render(Vendor::Standard), "2in");

    let pixels: Unit = Unit::px(10);
    assert_eq!(pixels.render(Vendor::Standard), "10px");

    let rems: Unit = Unit::new(3, UnitKind::Rem);
    assert_eq!(rems.render(Vendor::Standard), "3rem");
}

#[test]
fn test_initial_and_inherit_win_over_magnitude() {
    // The bare keyword renders regardless of any magnitude present.
    let unit: Unit = Unit {
        magnitude: Some(42),
        kind: UnitKind::Initial,
        keyword: None,
    };
    assert_eq!(unit.render(Vendor::Standard), "initial");

    let unit: Unit = Unit::bare(UnitKind::Inherit);
    assert_eq!(unit.render(Vendor::Webkit), "inherit");
}

#[test]
fn test_position_keyword_fallback() {
    let left = PositionUnit::semantic(Direction::Left);
    assert_eq!(left.render(Vendor::Standard), "left");

    // The webkit context renders the directional inverse.
    assert_eq!(left.render(Vendor::Webkit), "right");

    // The -o- and -moz- contexts do not invert.
    assert_eq!(left.render(Vendor::O), "left");
    assert_eq!(left.render(Vendor::Moz), "left");

    // Center maps to itself under inversion.
    let center = PositionUnit::semantic(Direction::Center);
    assert_eq!(center.render(Vendor::Webkit), "center");

    // An unset keyword falls back to the set's default.
    assert_eq!(PositionUnit::default().render(Vendor::Standard), "center");

    // Display renders the standard context.
    assert_eq!(left.to_string(), "left");
}

#[test]
fn test_magnitude_beats_semantic_keyword() {
    let unit = PositionUnit {
        magnitude: Some(25),
        kind: UnitKind::Percent,
        keyword: Some(Direction::Left),
    };
    assert_eq!(unit.render(Vendor::Standard), "25%");
    assert_eq!(unit.render(Vendor::Webkit), "25%");
}

#[test]
fn test_direction_inversion() {
    assert_eq!(Direction::Left.invert(), Direction::Right);
    assert_eq!(Direction::Right.invert(), Direction::Left);
    assert_eq!(Direction::Top.invert(), Direction::Bottom);
    assert_eq!(Direction::Bottom.invert(), Direction::Top);
    assert_eq!(Direction::Center.invert(), Direction::Center);
}

#[test]
fn test_specialization_defaults() {
    assert_eq!(ExtentUnit::default().render(Vendor::Standard), "closest-corner");
    assert_eq!(WidthUnit::default().render(Vendor::Standard), "initial");
    assert_eq!(
        WidthUnit::semantic(BorderWidthKeyword::Thin).render(Vendor::Standard),
        "thin"
    );
}

#[test]
fn test_clone_is_independent() {
    let original: Unit = Unit::px(10);
    let mut copy = original.clone();
    copy.magnitude = Some(20);
    assert_eq!(original.magnitude, Some(10));
    assert_eq!(copy.magnitude, Some(20));
}

#[test]
fn test_parse_keyword() {
    let (value, ok) = parse_keyword::<Direction>("left");
    assert_eq!((value, ok), (Direction::Left, true));

    // Case-insensitive, whitespace-tolerant.
    let (value, ok) = parse_keyword::<Direction>("  TOP ");
    assert_eq!((value, ok), (Direction::Top, true));

    // Failure surfaces the flag instead of panicking or silently
    // substituting the default.
    let (value, ok) = parse_keyword::<Direction>("bogus");
    assert_eq!((value, ok), (Direction::Center, false));
}

#[test]
fn test_parse_keyword_index() {
    let (value, ok) = parse_keyword_index::<Direction>(-1);
    assert_eq!((value, ok), (Direction::Right, true));

    let (value, ok) = parse_keyword_index::<Direction>(7);
    assert_eq!((value, ok), (Direction::Center, false));
}

#[test]
fn test_token_codec() {
    assert_eq!(css_token("no_repeat"), "no-repeat");
    assert_eq!(css_token("center"), "center");
    assert_eq!(
        declaration_line("background-clip", "border-box"),
        "background-clip:border-box;"
    );
}
