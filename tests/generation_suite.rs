#![cfg(feature = "png")]

use std::path::PathBuf;

use hero_image_gen::{HeroImageGenerator, Rgb, raster};

fn test_output_dir(case: &str) -> PathBuf {
    std::env::temp_dir().join("hero-image-gen-tests").join(case)
}

fn generator_for(case: &str) -> HeroImageGenerator {
    let mut generator = HeroImageGenerator::new();
    generator.output_dir = test_output_dir(case);
    generator
}

struct Scenario {
    case: &'static str,
    title: &'static str,
    tags: &'static [&'static str],
    year: i32,
    theme: &'static str,
    accent: Rgb,
    subtitle: &'static str,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        case: "ai-ml",
        title: "AI Agent Orchestration: Multi-Agent Workflows",
        tags: &["ai", "agent", "platform"],
        year: 2025,
        theme: "ai_ml",
        accent: Rgb(139, 92, 246),
        subtitle: "AI Intelligence Guide 2025",
    },
    Scenario {
        case: "seo",
        title: "SEO Optimization Best Practices",
        tags: &["seo", "optimization"],
        year: 2024,
        theme: "seo_analytics",
        accent: Rgb(34, 197, 94),
        subtitle: "SEO Best Practices 2024",
    },
    Scenario {
        case: "automation",
        title: "API Automation Framework",
        tags: &["automation"],
        year: 2022,
        theme: "automation",
        accent: Rgb(249, 115, 22),
        subtitle: "Automation Handbook",
    },
    Scenario {
        case: "default",
        title: "Technical Deep Dive",
        tags: &["unknown-tag"],
        year: 2025,
        theme: "default",
        accent: Rgb(139, 92, 246),
        subtitle: "Technical Guide 2025",
    },
];

#[test]
fn end_to_end_scenarios_produce_expected_images() {
    for scenario in SCENARIOS {
        let generator = generator_for(scenario.case);

        let theme = generator.theme_detector().get_theme(scenario.tags);
        assert_eq!(theme.name, scenario.theme, "{}", scenario.case);
        assert_eq!(theme.accent_color, scenario.accent, "{}", scenario.case);

        let svg = generator
            .compose(scenario.title, scenario.tags, scenario.year)
            .into_svg();
        assert!(
            svg.contains(scenario.subtitle),
            "{}: subtitle {:?} missing",
            scenario.case,
            scenario.subtitle
        );

        let filename = format!("{}-hero.png", scenario.case);
        let path = generator
            .generate(scenario.title, scenario.tags, scenario.year, &filename)
            .expect("generation failed");
        assert!(path.exists(), "{}: no file at {}", scenario.case, path.display());

        let pixmap = raster::load_png(&path).expect("decode failed");
        assert_eq!(pixmap.width(), 1200, "{}", scenario.case);
        assert_eq!(pixmap.height(), 630, "{}", scenario.case);
    }
}

#[test]
fn gradient_boundary_rows_match_theme_colors() {
    let generator = generator_for("gradient");
    let theme = generator.theme_detector().get_theme(&["seo"]);
    let svg = generator.gradient_background(Some(&theme)).into_svg();
    let pixmap = raster::rasterize(&svg).unwrap();

    // Top row is exactly the base gradient start.
    let top = pixmap.pixel(600, 0).unwrap();
    assert_eq!((top.red(), top.green(), top.blue()), (30, 58, 138));

    // Bottom row is the accent, within one truncation step per channel.
    let bottom = pixmap.pixel(600, 629).unwrap();
    let accent = theme.accent_color;
    for (got, want) in [
        (bottom.red(), accent.0),
        (bottom.green(), accent.1),
        (bottom.blue(), accent.2),
    ] {
        assert!(want.abs_diff(got) <= 1, "channel {got} vs {want}");
    }
}

#[test]
fn composite_bottom_left_still_shows_gradient_end() {
    // Grid lines stop at y=600 and motifs stay to the right, so the
    // bottom-left corner of a full composite is pure gradient.
    let generator = generator_for("composite-corner");
    let path = generator
        .generate("Corner Check", &["automation"], 2025, "corner.png")
        .unwrap();
    let pixmap = raster::load_png(&path).unwrap();
    let pixel = pixmap.pixel(10, 629).unwrap();
    // automation accent (249, 115, 22)
    for (got, want) in [(pixel.red(), 249u8), (pixel.green(), 115u8), (pixel.blue(), 22u8)] {
        assert!(want.abs_diff(got) <= 1, "channel {got} vs {want}");
    }
}

#[test]
fn output_directory_is_created_recursively() {
    let nested = test_output_dir("nested").join("a").join("b");
    let _ = std::fs::remove_dir_all(&nested);
    let mut generator = HeroImageGenerator::new();
    generator.output_dir = nested.clone();

    let path = generator
        .generate("Nested Output", &["ai"], 2025, "nested.png")
        .unwrap();
    assert_eq!(path, nested.join("nested.png"));
    assert!(path.exists());
}

#[test]
fn custom_canvas_size_carries_through_to_the_png() {
    let mut config = hero_image_gen::Config::default();
    config.render.width = 800;
    config.render.height = 418;
    let mut generator = HeroImageGenerator::from_config(&config);
    generator.output_dir = test_output_dir("custom-size");

    let path = generator
        .generate("Small Banner", &["seo"], 2025, "small.png")
        .unwrap();
    let pixmap = raster::load_png(&path).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (800, 418));
}

#[test]
fn svg_output_path_works_without_rasterizing() {
    let generator = generator_for("svg-out");
    let path = generator
        .generate_svg("Vector Only", &["strategy"], 2025, "vector.svg")
        .unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Vector Only"));
    assert!(svg.contains("Strategic Framework 2025"));
}
