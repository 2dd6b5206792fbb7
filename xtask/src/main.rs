use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;
use std::process::Command;
use tipshape::{ArrowEdge, Background, Color, CornerRadii, ShapeConfig, TipView};

const WIDTH: f64 = 200.0;
const HEIGHT: f64 = 80.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [OUT_DIR]    Render every edge and rounding combination to SVG");
        eprintln!("  test-features        Run the library tests with and without `tracing`");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let out_dir = match args.get(2) {
                Some(dir) => Utf8PathBuf::from(dir),
                None => Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../target/gallery"),
            };
            gallery(&out_dir);
        }
        "test-features" => test_features(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// One gallery tile.
struct Variant {
    name: String,
    config: ShapeConfig,
    background: Background,
}

fn variants() -> Vec<Variant> {
    let roundings = [
        ("sharp", ShapeConfig::new()),
        ("uniform", ShapeConfig::new().with_radius(12.0)),
        (
            "per-corner",
            ShapeConfig::new().with_corners(CornerRadii::new(20.0, 4.0, 20.0, 4.0)),
        ),
        ("fully-round", ShapeConfig::new().with_fully_round(true)),
    ];
    let offsets = [("centered", 0.0), ("offset", 36.0)];

    let mut variants = Vec::new();
    for edge in ArrowEdge::ALL {
        for (rounding, base) in &roundings {
            for (placement, offset) in offsets {
                let config = base
                    .with_arrow_edge(edge)
                    .with_arrow_side_length(18.0)
                    .with_arrow_corner_radius(2.0)
                    .with_arrow_start_offset(offset);
                variants.push(Variant {
                    name: format!("{}-{}-{}", edge, rounding, placement),
                    config,
                    background: Background::color(Color::argb(0xcc, 0x21, 0x96, 0xf3)),
                });
            }
        }
    }
    variants.push(Variant {
        name: "top-default-fill".to_string(),
        config: ShapeConfig::new().with_radius(8.0).with_arrow_side_length(18.0),
        background: Background::default(),
    });
    variants
}

fn gallery(out_dir: &Utf8Path) {
    fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let mut rendered: Vec<(String, String)> = variants()
        .into_par_iter()
        .map(|variant| {
            let mut view = TipView::new(variant.config, variant.background);
            view.on_size_changed(WIDTH, HEIGHT);
            let svg = view.to_svg();
            let path = out_dir.join(format!("{}.svg", variant.name));
            fs::write(&path, &svg).unwrap_or_else(|e| panic!("Failed to write {}: {}", path, e));
            tracing::info!(name = %variant.name, "rendered");
            (variant.name, svg)
        })
        .collect();
    rendered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Tooltip gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #eee; color: #333; margin: 24px; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
        .tile { background: #fff; border-radius: 6px; padding: 12px; }
        .tile svg { overflow: visible; margin: 12px; }
        .name { font-size: 12px; font-family: monospace; }
    </style>
</head>
<body>
<div class="grid">
"#,
    );
    for (name, svg) in &rendered {
        html.push_str(&format!(
            "<div class=\"tile\">\n<div class=\"name\">{}</div>\n{}</div>\n",
            html_escape(name),
            svg
        ));
    }
    html.push_str("</div>\n</body></html>\n");

    let index = out_dir.join("index.html");
    fs::write(&index, html).expect("Failed to write HTML");
    println!("Rendered {} tooltips to {}", rendered.len(), index);
}

/// The logging macros compile to nothing without `tracing`, so both feature
/// sets need a build of their own.
fn test_features() {
    let root = Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    for features in [None, Some("tracing")] {
        let mut cmd = Command::new(&cargo);
        cmd.current_dir(&root).args(["test", "--package", "tipshape"]);
        if let Some(features) = features {
            cmd.args(["--features", features]);
        }
        tracing::info!(features = features.unwrap_or("default"), "running tests");
        let status = cmd.status().expect("Failed to run cargo");
        if !status.success() {
            eprintln!("tests failed with features: {}", features.unwrap_or("default"));
            std::process::exit(status.code().unwrap_or(1));
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
