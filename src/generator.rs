use std::path::PathBuf;

use anyhow::Result;

use crate::canvas::{Canvas, FontWeight, Rgb};
use crate::config::Config;
use crate::motifs::VisualRenderer;
use crate::subtitle::SubtitleGenerator;
use crate::text_metrics;
use crate::theme::{Theme, ThemeDetector};

const TITLE_FONT_SIZE: f32 = 60.0;
const SUBTITLE_FONT_SIZE: f32 = 32.0;
const YEAR_FONT_SIZE: f32 = 36.0;

// Cap height of the year digits; the badge is sized around it.
const YEAR_TEXT_HEIGHT: f32 = 26.0;
const BADGE_PADDING: f32 = 20.0;
const BADGE_RADIUS: f32 = 10.0;
const BADGE_TOP: f32 = 60.0;

// Title stays in the left column so it clears the right-side motifs.
const MAX_TITLE_WIDTH: f32 = 700.0;
const LEFT_MARGIN: f32 = 100.0;
const TITLE_TOP: f32 = 200.0;
const LINE_SPACING: f32 = 20.0;
const SHADOW_OFFSET: f32 = 3.0;

// Baseline offsets from the top of each text row.
const TITLE_ASCENT: f32 = 48.0;
const SUBTITLE_ASCENT: f32 = 26.0;

const GRID_SPACING: u32 = 100;

/// Pipeline orchestrator. Each call builds its own canvas, so batch
/// callers can run sequentially or fan out without shared state.
#[derive(Debug, Clone)]
pub struct HeroImageGenerator {
    pub width: u32,
    pub height: u32,
    /// Collaborators may point this elsewhere before calling `generate`.
    pub output_dir: PathBuf,
    gradient_start: Rgb,
    gradient_end: Rgb,
    text_color: Rgb,
    font_family: String,
    theme_detector: ThemeDetector,
    subtitle_generator: SubtitleGenerator,
    visual_renderer: VisualRenderer,
}

impl Default for HeroImageGenerator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl HeroImageGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let theme_detector = if config.theme_rules.is_empty() {
            ThemeDetector::new()
        } else {
            ThemeDetector::with_extra_rules(config.theme_rules.iter().cloned())
        };
        Self {
            width: config.render.width,
            height: config.render.height,
            output_dir: config
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("public/images")),
            gradient_start: config.brand.gradient_start,
            gradient_end: config.brand.gradient_end,
            text_color: config.brand.text_color,
            font_family: config.brand.font_family.clone(),
            theme_detector,
            subtitle_generator: SubtitleGenerator::new(),
            visual_renderer: VisualRenderer::new(),
        }
    }

    pub fn theme_detector(&self) -> &ThemeDetector {
        &self.theme_detector
    }

    /// Full composition pipeline, no filesystem involved.
    pub fn compose<S: AsRef<str>>(&self, title: &str, tags: &[S], year: i32) -> Canvas {
        let theme = self.theme_detector.get_theme(tags);
        let canvas = self.gradient_background(Some(&theme));
        let canvas = self.add_grid(canvas);
        let mut canvas = self.visual_renderer.render(canvas, &theme);

        let subtitle = self.subtitle_generator.generate(tags, year);
        self.draw_year_badge(&mut canvas, &theme, year);
        let title_lines = self.wrap_title(title);
        self.draw_title(&mut canvas, &title_lines);
        self.draw_subtitle(&mut canvas, &subtitle, title_lines.len());
        canvas
    }

    /// Compose and save as PNG, returning the full output path.
    #[cfg(feature = "png")]
    pub fn generate<S: AsRef<str>>(
        &self,
        title: &str,
        tags: &[S],
        year: i32,
        output_filename: &str,
    ) -> Result<PathBuf> {
        let canvas = self.compose(title, tags, year);
        std::fs::create_dir_all(&self.output_dir)?;
        let output_path = self.output_dir.join(output_filename);
        crate::raster::write_png(&canvas.into_svg(), &output_path)?;
        Ok(output_path)
    }

    pub fn generate_svg<S: AsRef<str>>(
        &self,
        title: &str,
        tags: &[S],
        year: i32,
        output_filename: &str,
    ) -> Result<PathBuf> {
        let canvas = self.compose(title, tags, year);
        std::fs::create_dir_all(&self.output_dir)?;
        let output_path = self.output_dir.join(output_filename);
        std::fs::write(&output_path, canvas.into_svg())?;
        Ok(output_path)
    }

    /// Theme gradient start blending into the accent, or the brand
    /// colors when no theme applies.
    pub fn gradient_background(&self, theme: Option<&Theme>) -> Canvas {
        let (start, end) = match theme {
            Some(theme) => (theme.base_gradient_start, theme.accent_color),
            None => (self.gradient_start, self.gradient_end),
        };
        let mut canvas = Canvas::new(self.width, self.height);
        for (y, rows, color) in gradient_runs(start, end, self.height) {
            canvas.fill_rect(0.0, y as f32, self.width as f32, rows as f32, color, 1.0);
        }
        canvas
    }

    fn add_grid(&self, mut canvas: Canvas) -> Canvas {
        let width = self.width as f32;
        let height = self.height as f32;
        for x in (0..self.width).step_by(GRID_SPACING as usize) {
            canvas.line(x as f32, 0.0, x as f32, height, Rgb::WHITE, 0.1, 1.0);
        }
        for y in (0..self.height).step_by(GRID_SPACING as usize) {
            canvas.line(0.0, y as f32, width, y as f32, Rgb::WHITE, 0.1, 1.0);
        }
        canvas
    }

    // A word wider than the limit still gets a line of its own; words
    // are never split.
    pub fn wrap_title(&self, title: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in title.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            let width = text_metrics::text_width(
                &candidate,
                TITLE_FONT_SIZE,
                &self.font_family,
                FontWeight::Bold,
            );
            if width <= MAX_TITLE_WIDTH {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn draw_year_badge(&self, canvas: &mut Canvas, theme: &Theme, year: i32) {
        let year_text = year.to_string();
        let year_width = text_metrics::text_width(
            &year_text,
            YEAR_FONT_SIZE,
            &self.font_family,
            FontWeight::Regular,
        );

        let badge_x = self.width as f32 - year_width - BADGE_PADDING * 3.0;
        let badge_y = BADGE_TOP;
        canvas.rounded_rect(
            badge_x - BADGE_PADDING,
            badge_y - BADGE_PADDING,
            year_width + BADGE_PADDING * 2.0,
            YEAR_TEXT_HEIGHT + BADGE_PADDING * 2.0,
            BADGE_RADIUS,
            theme.accent_color,
        );
        canvas.text(
            badge_x,
            badge_y + YEAR_TEXT_HEIGHT,
            &year_text,
            &self.font_family,
            YEAR_FONT_SIZE,
            FontWeight::Regular,
            self.text_color,
            1.0,
        );
    }

    fn draw_title(&self, canvas: &mut Canvas, lines: &[String]) {
        for (idx, line) in lines.iter().enumerate() {
            let top = TITLE_TOP + idx as f32 * (TITLE_FONT_SIZE + LINE_SPACING);
            let baseline = top + TITLE_ASCENT;
            // Shadow first, offset down-and-right, then the line itself.
            canvas.text(
                LEFT_MARGIN + SHADOW_OFFSET,
                baseline + SHADOW_OFFSET,
                line,
                &self.font_family,
                TITLE_FONT_SIZE,
                FontWeight::Bold,
                Rgb::BLACK,
                1.0,
            );
            canvas.text(
                LEFT_MARGIN,
                baseline,
                line,
                &self.font_family,
                TITLE_FONT_SIZE,
                FontWeight::Bold,
                self.text_color,
                1.0,
            );
        }
    }

    fn draw_subtitle(&self, canvas: &mut Canvas, subtitle: &str, title_lines: usize) {
        let title_height = title_lines as f32 * (TITLE_FONT_SIZE + LINE_SPACING);
        let top = TITLE_TOP + title_height + 10.0;
        canvas.text(
            LEFT_MARGIN,
            top + SUBTITLE_ASCENT,
            subtitle,
            &self.font_family,
            SUBTITLE_FONT_SIZE,
            FontWeight::Regular,
            self.text_color,
            0.7,
        );
    }
}

// Per-row interpolation, truncated per channel, with consecutive equal
// rows merged into runs of (y, row_count, color).
pub fn gradient_runs(start: Rgb, end: Rgb, height: u32) -> Vec<(u32, u32, Rgb)> {
    let mut runs: Vec<(u32, u32, Rgb)> = Vec::new();
    for y in 0..height {
        let ratio = y as f32 / height as f32;
        let color = Rgb(
            lerp_channel(start.0, end.0, ratio),
            lerp_channel(start.1, end.1, ratio),
            lerp_channel(start.2, end.2, ratio),
        );
        match runs.last_mut() {
            Some((_, rows, last)) if *last == color => *rows += 1,
            _ => runs.push((y, 1, color)),
        }
    }
    runs
}

fn lerp_channel(start: u8, end: u8, ratio: f32) -> u8 {
    // Truncation, not rounding: row 0 must carry the start color
    // bit-exactly.
    (start as f32 + (end as f32 - start as f32) * ratio) as u8
}
