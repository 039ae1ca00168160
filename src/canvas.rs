use std::fmt::Write as _;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(thiserror::Error, Debug)]
pub enum ColorParseError {
    #[error("color must be #rrggbb, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in {0:?}")]
    Hex(String),
}

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::Format(input.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorParseError::Format(input.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Hex(input.to_string()))
        };
        Ok(Rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Accumulates vector elements in paint order; pipeline stages take
/// the canvas by value and hand it back.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    body: String,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgb, opacity: f32) {
        let _ = write!(
            self.body,
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{}\"{}/>",
            fill.to_hex(),
            fill_opacity_attr(opacity),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn outlined_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Rgb,
        fill_opacity: f32,
        stroke: Rgb,
        stroke_opacity: f32,
        stroke_width: f32,
    ) {
        let _ = write!(
            self.body,
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{}\"{} stroke=\"{}\"{} stroke-width=\"{stroke_width:.1}\"/>",
            fill.to_hex(),
            fill_opacity_attr(fill_opacity),
            stroke.to_hex(),
            stroke_opacity_attr(stroke_opacity),
        );
    }

    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, fill: Rgb) {
        let _ = write!(
            self.body,
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{radius:.1}\" ry=\"{radius:.1}\" fill=\"{}\"/>",
            fill.to_hex(),
        );
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: Rgb, opacity: f32) {
        let _ = write!(
            self.body,
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{}\"{}/>",
            fill.to_hex(),
            fill_opacity_attr(opacity),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn outlined_circle(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgb,
        fill_opacity: f32,
        stroke: Rgb,
        stroke_opacity: f32,
        stroke_width: f32,
    ) {
        let _ = write!(
            self.body,
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{}\"{} stroke=\"{}\"{} stroke-width=\"{stroke_width:.1}\"/>",
            fill.to_hex(),
            fill_opacity_attr(fill_opacity),
            stroke.to_hex(),
            stroke_opacity_attr(stroke_opacity),
        );
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgb, opacity: f32, width: f32) {
        let _ = write!(
            self.body,
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\"{} stroke-width=\"{width:.1}\"/>",
            stroke.to_hex(),
            stroke_opacity_attr(opacity),
        );
    }

    pub fn polygon(&mut self, points: &[(f32, f32)], fill: Rgb, opacity: f32) {
        let mut coords = String::new();
        for (idx, (x, y)) in points.iter().enumerate() {
            if idx > 0 {
                coords.push(' ');
            }
            let _ = write!(coords, "{x:.2},{y:.2}");
        }
        let _ = write!(
            self.body,
            "<polygon points=\"{coords}\" fill=\"{}\"{}/>",
            fill.to_hex(),
            fill_opacity_attr(opacity),
        );
    }

    /// Single line of text. `y` is the baseline position.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        font_family: &str,
        font_size: f32,
        weight: FontWeight,
        fill: Rgb,
        opacity: f32,
    ) {
        let weight_attr = match weight {
            FontWeight::Regular => "",
            FontWeight::Bold => " font-weight=\"bold\"",
        };
        let _ = write!(
            self.body,
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{}\" font-size=\"{font_size:.1}\"{weight_attr} fill=\"{}\"{}>{}</text>",
            escape_xml(font_family),
            fill.to_hex(),
            fill_opacity_attr(opacity),
            escape_xml(content),
        );
    }

    pub fn into_svg(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{}</svg>",
            self.body,
            w = self.width,
            h = self.height,
        )
    }

    #[cfg(test)]
    pub(crate) fn body(&self) -> &str {
        &self.body
    }
}

fn fill_opacity_attr(opacity: f32) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(" fill-opacity=\"{opacity}\"")
    }
}

fn stroke_opacity_attr(opacity: f32) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(" stroke-opacity=\"{opacity}\"")
    }
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Rgb(139, 92, 246);
        assert_eq!(color.to_hex(), "#8b5cf6");
        assert_eq!(Rgb::from_hex("#8b5cf6").unwrap(), color);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Rgb::from_hex("8b5cf6").is_err());
        assert!(Rgb::from_hex("#8b5c").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn canvas_wraps_elements_in_svg_document() {
        let mut canvas = Canvas::new(1200, 630);
        canvas.circle(100.0, 100.0, 50.0, Rgb::WHITE, 0.5);
        let svg = canvas.into_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 1200 630\""));
        assert!(svg.contains("fill-opacity=\"0.5\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn full_opacity_omits_attribute() {
        let mut canvas = Canvas::new(100, 100);
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, Rgb::BLACK, 1.0);
        assert!(!canvas.body().contains("fill-opacity"));
    }

    #[test]
    fn text_escapes_content() {
        let mut canvas = Canvas::new(100, 100);
        canvas.text(
            0.0,
            10.0,
            "a < b & c",
            "sans-serif",
            16.0,
            FontWeight::Regular,
            Rgb::WHITE,
            1.0,
        );
        assert!(canvas.body().contains("a &lt; b &amp; c"));
    }

    #[test]
    fn polygon_joins_points() {
        let mut canvas = Canvas::new(100, 100);
        canvas.polygon(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)], Rgb::BLACK, 0.7);
        assert!(canvas.body().contains("points=\"0.00,0.00 10.00,0.00 5.00,8.00\""));
    }
}
