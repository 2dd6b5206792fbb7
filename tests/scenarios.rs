//! End-to-end tooltip scenarios through the public API.

use regex_lite::Regex;
use tipshape::render::FillRule;
use tipshape::{ArrowEdge, Background, Color, ConfigError, Invalidation, ShapeConfig, Size, TipView, render_svg};

fn clip_d(svg: &str) -> String {
    let re = Regex::new(r#"<path d="([^"]+)" clip-rule="nonzero"/>"#).unwrap();
    re.captures(svg)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| panic!("no clip path in:\n{}", svg))
}

fn coordinates(d: &str) -> Vec<(f64, f64)> {
    let re = Regex::new(r"(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)").unwrap();
    re.captures_iter(d)
        .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap()))
        .collect()
}

fn tooltip(edge: ArrowEdge) -> TipView {
    let config = ShapeConfig::new()
        .with_radius(10.0)
        .with_arrow_edge(edge)
        .with_arrow_side_length(20.0)
        .with_arrow_corner_radius(2.0);
    let mut view = TipView::new(config, Background::default());
    view.on_size_changed(200.0, 100.0);
    view
}

#[test]
fn sharp_tip_svg() {
    let svg = render_svg("arrow-side-length = 20", 200.0, 100.0).unwrap();
    insta::assert_snapshot!(svg.trim_end(), @r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
      <defs>
        <clipPath id="tip-clip-0">
          <path d="M0,14.142 L200,14.142 L200,100 L0,100 L0,14.142 Z M100,-4.142 L114.142,10 L100,24.142 L85.858,10 L100,-4.142 Z" clip-rule="nonzero"/>
        </clipPath>
      </defs>
      <g clip-path="url(#tip-clip-0)">
        <rect x="0" y="0" width="200" height="100" fill="rgb(0,0,0)" fill-opacity="0.502"/>
      </g>
    </svg>
    "#);
}

#[test]
fn top_arrow_is_centered_and_overlaps_the_body() {
    let mut view = tooltip(ArrowEdge::Top);
    let outline = view.outline();
    assert!((outline.arrow_height - 12.142).abs() < 1e-3);
    assert!((outline.body_rect.top() - 12.142).abs() < 1e-3);
    assert_eq!(outline.body_rect.bottom(), 100.0);
    assert!((outline.arrow_center.x - 100.0).abs() < 1e-9);
    assert!(outline.contains(outline.arrow_center, FillRule::NonZero));
}

#[test]
fn right_arrow_follows_start_offset() {
    let mut view = tooltip(ArrowEdge::Right);
    view.set_arrow_start_offset(30.0);
    let outline = view.outline();
    assert!((outline.body_rect.right() - 187.858).abs() < 1e-3);
    assert_eq!(outline.body_rect.left(), 0.0);
    assert!((outline.arrow_center.y - 30.0).abs() < 1e-9);
}

#[test]
fn every_edge_clips_with_two_subpaths() {
    for edge in ArrowEdge::ALL {
        let svg = tooltip(edge).to_svg();
        let d = clip_d(&svg);
        assert_eq!(d.matches('M').count(), 2, "{}: {}", edge, d);
        assert_eq!(d.matches('Z').count(), 2, "{}: {}", edge, d);
        // the background covers the whole view, not just the body
        assert!(svg.contains(r#"<rect x="0" y="0" width="200" height="100""#), "{}", svg);
    }
}

#[test]
fn arrow_points_leave_the_body_on_its_edge_only() {
    let cases: [(ArrowEdge, fn((f64, f64)) -> bool); 4] = [
        (ArrowEdge::Top, |(_, y)| y < 12.142),
        (ArrowEdge::Bottom, |(_, y)| y > 87.858),
        (ArrowEdge::Left, |(x, _)| x < 12.142),
        (ArrowEdge::Right, |(x, _)| x > 187.858),
    ];
    for (edge, beyond_edge) in cases {
        let mut view = tooltip(edge);
        let outline = view.outline();
        let body = outline.body_rect;
        let arrow = coordinates(&outline.arrow.to_string());
        assert!(arrow.iter().copied().any(beyond_edge), "{}: {:?}", edge, arrow);
        // printed coordinates are rounded to three decimals
        let inside = |x: f64, y: f64| {
            x >= body.left() - 1e-3 && x <= body.right() + 1e-3 && y >= body.top() - 1e-3 && y <= body.bottom() + 1e-3
        };
        for (x, y) in coordinates(&outline.body.to_string()) {
            assert!(inside(x, y), "{}: ({}, {}) outside {:?}", edge, x, y, body);
        }
    }
}

#[test]
fn host_round_trip() {
    let mut view = TipView::from_attrs(
        "fill = #ff2196f3; radius = 6; arrow-side-length = 14; arrow-edge = bottom",
        Default::default(),
    )
    .unwrap();

    let measured = view.on_measure(Size::new(160.0, 40.0));
    assert_eq!(measured.alignment, ArrowEdge::Top);
    view.on_size_changed(measured.size.w, measured.size.h);
    assert!(view.take_invalidation().redraw);

    let svg = view.to_svg();
    assert!(svg.contains(r#"fill="rgb(33,150,243)""#), "{}", svg);
    assert!(!svg.contains("fill-opacity"), "{}", svg);

    view.set_arrow_edge(ArrowEdge::Left);
    assert_eq!(
        view.take_invalidation(),
        Invalidation {
            redraw: true,
            relayout: true
        }
    );
    assert_eq!(view.set_arrow_edge_raw(9), Err(ConfigError::InvalidEdgeConfiguration { value: 9 }));
}

#[test]
fn transparent_fill_still_clips() {
    let mut view = TipView::new(ShapeConfig::new(), Background::color(Color::TRANSPARENT));
    view.on_size_changed(10.0, 10.0);
    let svg = view.to_svg();
    assert!(svg.contains("<clipPath"));
    assert!(!svg.contains("<rect"));
}
