use std::collections::HashMap;
use std::sync::Mutex;

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use ttf_parser::Face;

use crate::canvas::FontWeight;

static TEXT_MEASURER: Lazy<Mutex<TextMeasurer>> = Lazy::new(|| Mutex::new(TextMeasurer::new()));

/// Measured advance width, or `None` when no face can be loaded.
pub fn measure_text_width(
    text: &str,
    font_size: f32,
    font_family: &str,
    weight: FontWeight,
) -> Option<f32> {
    if text.is_empty() || font_size <= 0.0 {
        return Some(0.0);
    }
    let mut guard = TEXT_MEASURER.lock().ok()?;
    guard.measure(text, font_size, font_family, weight)
}

/// Width with degradation: approximate advances when no usable font
/// face exists, so layout never fails.
pub fn text_width(text: &str, font_size: f32, font_family: &str, weight: FontWeight) -> f32 {
    measure_text_width(text, font_size, font_family, weight)
        .unwrap_or_else(|| approximate_width(text, font_size, weight))
}

fn approximate_width(text: &str, font_size: f32, weight: FontWeight) -> f32 {
    let factor = match weight {
        FontWeight::Regular => 0.56,
        FontWeight::Bold => 0.60,
    };
    text.chars().filter(|ch| *ch != '\n').count() as f32 * font_size * factor
}

struct TextMeasurer {
    db: Database,
    loaded_system_fonts: bool,
    faces: HashMap<(String, FontWeight), Option<LoadedFace>>,
}

impl TextMeasurer {
    fn new() -> Self {
        Self {
            db: Database::new(),
            loaded_system_fonts: false,
            faces: HashMap::new(),
        }
    }

    fn measure(
        &mut self,
        text: &str,
        font_size: f32,
        font_family: &str,
        weight: FontWeight,
    ) -> Option<f32> {
        let key = (font_family.trim().to_string(), weight);
        if !self.faces.contains_key(&key) {
            let loaded = self.load_face(font_family, weight);
            self.faces.insert(key.clone(), loaded);
        }
        let face = self.faces.get_mut(&key).and_then(|face| face.as_mut())?;
        face.measure_width(text, font_size)
    }

    fn load_face(&mut self, font_family: &str, weight: FontWeight) -> Option<LoadedFace> {
        if !self.loaded_system_fonts {
            self.db.load_system_fonts();
            self.loaded_system_fonts = true;
        }

        let names: Vec<String> = font_family
            .split(',')
            .map(|part| part.trim().trim_matches('"').trim_matches('\'').to_string())
            .filter(|part| !part.is_empty())
            .collect();
        let mut families: Vec<Family<'_>> = names
            .iter()
            .map(|name| match name.to_ascii_lowercase().as_str() {
                "serif" => Family::Serif,
                "sans-serif" | "system-ui" => Family::SansSerif,
                "monospace" => Family::Monospace,
                _ => Family::Name(name.as_str()),
            })
            .collect();
        if families.is_empty() {
            families.push(Family::SansSerif);
        }

        let query = Query {
            families: &families,
            weight: match weight {
                FontWeight::Regular => Weight::NORMAL,
                FontWeight::Bold => Weight::BOLD,
            },
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;

        let mut loaded = None;
        self.db.with_face_data(id, |data, index| {
            loaded = LoadedFace::parse(data, index);
        });
        loaded
    }
}

struct LoadedFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: u16,
    ascii_advances: [u16; 128],
    other_advances: HashMap<char, Option<u16>>,
}

impl LoadedFace {
    fn parse(data: &[u8], index: u32) -> Option<Self> {
        let face = Face::parse(data, index).ok()?;
        let units_per_em = face.units_per_em().max(1);
        let mut ascii_advances = [0u16; 128];
        for byte in 0u8..=127 {
            if let Some(glyph) = face.glyph_index(byte as char) {
                ascii_advances[byte as usize] = face.glyph_hor_advance(glyph).unwrap_or(0);
            }
        }
        Some(Self {
            data: data.to_vec(),
            index,
            units_per_em,
            ascii_advances,
            other_advances: HashMap::new(),
        })
    }

    fn measure_width(&mut self, text: &str, font_size: f32) -> Option<f32> {
        let scale = font_size / self.units_per_em as f32;
        let missing = font_size * 0.56;
        let mut width = 0.0f32;

        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            let advance = if ch.is_ascii() {
                self.ascii_advances[ch as usize]
            } else {
                self.non_ascii_advance(ch).unwrap_or(0)
            };
            if advance == 0 {
                width += missing;
            } else {
                width += advance as f32 * scale;
            }
        }

        Some(width.max(0.0))
    }

    fn non_ascii_advance(&mut self, ch: char) -> Option<u16> {
        if let Some(cached) = self.other_advances.get(&ch) {
            return *cached;
        }
        let advance = Face::parse(&self.data, self.index).ok().and_then(|face| {
            face.glyph_index(ch)
                .and_then(|glyph| face.glyph_hor_advance(glyph))
        });
        self.other_advances.insert(ch, advance);
        advance
    }
}
