use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::config::load_config;
use crate::generator::HeroImageGenerator;

#[derive(Parser, Debug)]
#[command(
    name = "heroimg",
    version,
    about = "Generate hero images with theme-based visual systems"
)]
pub struct Args {
    /// Image title text
    #[arg(long)]
    pub title: Option<String>,

    /// Comma-separated tags for theme detection (e.g. ai,ml,platform)
    #[arg(long)]
    pub tags: Option<String>,

    /// Year for the badge and subtitle
    #[arg(long, default_value_t = 2025)]
    pub year: i32,

    /// Output filename (e.g. my-hero.png)
    #[arg(long)]
    pub output: Option<String>,

    /// Generate from a JSON metadata file (array of posts)
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Only generate metadata entries for this year
    #[arg(long)]
    pub filter_year: Option<i32>,

    /// Show what would be generated without creating files
    #[arg(long)]
    pub dry_run: bool,

    /// Generate one preview sample per theme
    #[arg(long)]
    pub preview: bool,

    /// Output directory (default: public/images)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Brand config file (JSON5)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "format", value_enum, default_value = "png")]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Png,
    Svg,
}

#[derive(Debug, Deserialize)]
struct MetadataItem {
    title: String,
    tags: Vec<String>,
    year: Option<i32>,
    filename: Option<String>,
    slug: Option<String>,
}

impl MetadataItem {
    fn output_filename(&self, ext: &str) -> String {
        match &self.filename {
            Some(filename) => filename.clone(),
            None => format!("{}-hero.{ext}", self.slug.as_deref().unwrap_or("image")),
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let mut generator = HeroImageGenerator::from_config(&config);
    if let Some(dir) = &args.output_dir {
        generator.output_dir = dir.clone();
    }

    if args.preview {
        return generate_preview_samples(&generator, args.format);
    }

    if let (Some(title), Some(tags), Some(output)) = (&args.title, &args.tags, &args.output) {
        let tags = split_tags(tags);
        let path = generate_one(&generator, title, &tags, args.year, output, args.format)?;
        println!("Generated: {}", path.display());
        return Ok(());
    }

    if let Some(metadata) = &args.metadata {
        return generate_from_metadata(
            &generator,
            metadata,
            args.filter_year,
            args.dry_run,
            args.format,
        );
    }

    Err(anyhow::anyhow!(
        "Nothing to do: pass --title/--tags/--output, --metadata or --preview (see --help)"
    ))
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn generate_one<S: AsRef<str>>(
    generator: &HeroImageGenerator,
    title: &str,
    tags: &[S],
    year: i32,
    output_filename: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    match format {
        OutputFormat::Svg => generator.generate_svg(title, tags, year, output_filename),
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                generator.generate(title, tags, year, output_filename)
            }
            #[cfg(not(feature = "png"))]
            {
                Err(anyhow::anyhow!(
                    "PNG output requires the `png` feature; rerun with --format svg"
                ))
            }
        }
    }
}

fn generate_from_metadata(
    generator: &HeroImageGenerator,
    metadata_path: &std::path::Path,
    filter_year: Option<i32>,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let contents = std::fs::read_to_string(metadata_path)?;
    let items: Vec<MetadataItem> = serde_json::from_str(&contents)?;

    let ext = format_ext(format);
    let selected: Vec<&MetadataItem> = items
        .iter()
        .filter(|item| filter_year.is_none_or(|year| item.year == Some(year)))
        .collect();

    println!(
        "Processing {} items from {}...",
        selected.len(),
        metadata_path.display()
    );

    let mut generated = 0usize;
    let mut skipped = 0usize;
    for item in &selected {
        let filename = item.output_filename(ext);
        let year = item.year.unwrap_or(2025);
        if dry_run {
            println!("  Would generate: {filename}");
            println!("    Title: {}", item.title);
            println!("    Tags: {}", item.tags.join(", "));
            println!("    Year: {year}");
            continue;
        }
        match generate_one(generator, &item.title, &item.tags, year, &filename, format) {
            Ok(_) => {
                println!("Generated: {filename}");
                generated += 1;
            }
            Err(err) => {
                eprintln!("Failed to generate {filename}: {err}");
                skipped += 1;
            }
        }
    }

    if dry_run {
        println!("\nDry run complete: would generate {}", selected.len());
    } else {
        println!("\nGeneration complete: {generated}");
        if skipped > 0 {
            println!("  Skipped: {skipped}");
        }
    }
    Ok(())
}

fn generate_preview_samples(generator: &HeroImageGenerator, format: OutputFormat) -> Result<()> {
    let ext = format_ext(format);
    let samples: [(&str, &[&str], &str); 5] = [
        ("AI Agent Orchestration Platform", &["ai", "agent", "platform"], "preview-ai-ml"),
        ("SEO Optimization Best Practices", &["seo", "optimization"], "preview-seo"),
        ("API Automation Framework", &["automation", "api"], "preview-automation"),
        ("Enterprise Strategy Guide", &["strategy", "enterprise"], "preview-strategy"),
        ("Technical Deep Dive", &["unknown-tag"], "preview-default"),
    ];

    println!("Generating preview samples for each theme...\n");
    for (title, tags, stem) in samples {
        let filename = format!("{stem}.{ext}");
        match generate_one(generator, title, tags, 2025, &filename, format) {
            Ok(_) => println!("Generated: {filename} (tags: {})", tags.join(", ")),
            Err(err) => eprintln!("Failed: {filename}: {err}"),
        }
    }
    println!("\nPreview images saved to: {}/", generator.output_dir.display());
    Ok(())
}

fn format_ext(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Png => "png",
        OutputFormat::Svg => "svg",
    }
}
