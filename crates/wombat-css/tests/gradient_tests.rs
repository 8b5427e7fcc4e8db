//! Integration tests for gradient declaration rendering.

use wombat_css::{
    AngularGradient, Direction, Gradient, GradientKind, KeywordSet, LinearGradient, PositionUnit,
    Radial, RadialExtent, RadialGradient, RadialSize, Rgb, Unit, UnitKind, Vendor,
};

fn demo_stops() -> Vec<Rgb> {
    vec![Rgb::parse("#74c2e1"), Rgb::parse("#0191c8")]
}

#[test]
fn test_angular_block() {
    let gradient = AngularGradient::new(-90, demo_stops());
    let block = gradient.render();
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(
        lines,
        vec![
            "background:-webkit-linear-gradient(-90deg,#74C2E1,#0191C8);",
            "background:-o-linear-gradient(-90deg,#74C2E1,#0191C8);",
            "background:-moz-linear-gradient(-90deg,#74C2E1,#0191C8);",
            "background:linear-gradient(-90deg,#74C2E1,#0191C8);",
        ]
    );
}

#[test]
fn test_angular_default_angle() {
    let gradient = AngularGradient {
        stops: demo_stops(),
        ..AngularGradient::default()
    };
    for line in gradient.render().lines() {
        assert!(line.contains("(90deg,"), "missing default angle in {line}");
    }
}

#[test]
fn test_every_variant_emits_four_lines() {
    let variants = [
        Gradient::Angular(AngularGradient::new(45, demo_stops())),
        Gradient::Linear(LinearGradient::toward(Direction::Top, demo_stops())),
        Gradient::Radial(RadialGradient::new(Radial::default(), demo_stops())),
    ];
    for gradient in variants {
        let block = gradient.render();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 4, "expected 4 lines in {block}");
        assert!(lines[0].contains("-webkit-"));
        assert!(lines[1].contains("-o-"));
        assert!(lines[2].contains("-moz-"));
        assert!(!lines[3].contains("-webkit-"));
        assert!(!block.ends_with('\n'));
    }
}

#[test]
fn test_repeating_family() {
    let mut gradient = Gradient::Angular(AngularGradient::new(90, demo_stops()));
    gradient.set_repeat(true);
    for line in gradient.render().lines() {
        assert!(line.contains("repeating-linear-gradient("), "in {line}");
    }
}

#[test]
fn test_as_image_property() {
    let gradient = AngularGradient {
        as_image: true,
        stops: demo_stops(),
        ..AngularGradient::default()
    };
    for line in gradient.render().lines() {
        assert!(line.starts_with("background-image:"), "in {line}");
    }
}

#[test]
fn test_image_url_fallback() {
    let mut gradient = Gradient::Angular(AngularGradient::new(90, demo_stops()));
    gradient.set_image_url(Some("wrmult.gif".to_string()));
    let block = gradient.render();
    let first = block.lines().next().unwrap();
    assert_eq!(
        first,
        "background:url('wrmult.gif'),-webkit-linear-gradient(90deg,#74C2E1,#0191C8);"
    );
}

#[test]
fn test_linear_endpoint_contexts() {
    let gradient = LinearGradient::toward(Direction::Top, demo_stops());
    let block = gradient.render();
    let lines: Vec<&str> = block.lines().collect();
    // The webkit context inverts the endpoint and omits the "to " head.
    assert_eq!(
        lines[0],
        "background:-webkit-linear-gradient(bottom,#74C2E1,#0191C8);"
    );
    // The other legacy contexts keep the endpoint without the head.
    assert_eq!(lines[1], "background:-o-linear-gradient(top,#74C2E1,#0191C8);");
    assert_eq!(lines[2], "background:-moz-linear-gradient(top,#74C2E1,#0191C8);");
    // The standard context prefixes "to ".
    assert_eq!(lines[3], "background:linear-gradient(to top,#74C2E1,#0191C8);");
}

#[test]
fn test_linear_corner_endpoints() {
    let gradient = LinearGradient {
        position1: Some(PositionUnit::semantic(Direction::Left)),
        position2: Some(PositionUnit::semantic(Direction::Top)),
        stops: demo_stops(),
        ..LinearGradient::default()
    };
    let block = gradient.render();
    let lines: Vec<&str> = block.lines().collect();
    assert!(lines[0].contains("(right bottom,"));
    assert!(lines[3].contains("(to left top,"));
}

#[test]
fn test_linear_without_endpoints_has_no_direction_clause() {
    let gradient = LinearGradient {
        stops: demo_stops(),
        ..LinearGradient::default()
    };
    let block = gradient.render();
    let lines: Vec<&str> = block.lines().collect();
    // The stops open the argument list directly; no bare "to " appears.
    assert_eq!(lines[3], "background:linear-gradient(#74C2E1,#0191C8);");
    assert!(!gradient.render().contains("to "));
}

#[test]
fn test_radial_grammar_split() {
    let gradient = RadialGradient::new(
        Radial::new(
            None,
            Some(RadialSize::Keyword(RadialExtent::ClosestCorner)),
            Some(PositionUnit::semantic(Direction::Center)),
            None,
        ),
        demo_stops(),
    );
    let block = gradient.render();
    let lines: Vec<&str> = block.lines().collect();
    // Legacy contexts lead with the position pair.
    assert_eq!(
        lines[0],
        "background:-webkit-radial-gradient(center center,circle closest-corner,#74C2E1,#0191C8);"
    );
    assert_eq!(
        lines[2],
        "background:-moz-radial-gradient(center center,circle closest-corner,#74C2E1,#0191C8);"
    );
    // The standard context infixes "at".
    assert_eq!(
        lines[3],
        "background:radial-gradient(circle closest-corner at center center,#74C2E1,#0191C8);"
    );
}

#[test]
fn test_radial_explicit_radius_pair() {
    let size = RadialSize::pair(Unit::new(100, UnitKind::Px), Some(Unit::px(50)));
    let radial = Radial::new(None, Some(size), None, None);
    let gradient = RadialGradient::new(radial, demo_stops());
    let block = gradient.render();
    let lines: Vec<&str> = block.lines().collect();
    assert!(lines[3].contains("circle 100px 50px at center center"));
}

#[test]
fn test_radial_position_copy_is_independent() {
    let mut radial = Radial::new(
        None,
        None,
        Some(PositionUnit::semantic(Direction::Left)),
        None,
    );
    // The second slot was value-copied from the first at construction.
    assert_eq!(radial.position2, radial.position1);

    // Mutating the copy leaves the original untouched.
    if let Some(position2) = radial.position2.as_mut() {
        position2.magnitude = Some(10);
    }
    assert_eq!(radial.position1, Some(PositionUnit::semantic(Direction::Left)));
    assert!(radial.render(Vendor::Standard).contains("at left 10px"));
}

#[test]
fn test_gradient_kind_tokens() {
    let angular = Gradient::Angular(AngularGradient::new(0, demo_stops()));
    assert_eq!(angular.kind(), GradientKind::LinearGradient);
    assert_eq!(angular.kind().css_token(), "linear-gradient");

    let radial = Gradient::Radial(RadialGradient::new(Radial::default(), demo_stops()));
    assert_eq!(radial.kind().css_token(), "radial-gradient");
    assert_eq!(radial.stops().len(), 2);
}
