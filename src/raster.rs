use std::path::Path;

use anyhow::Result;

// When a font family is missing, resvg degrades the text rendering
// instead of failing.
pub fn rasterize(svg: &str) -> Result<resvg::tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Helvetica".to_string();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    Ok(pixmap)
}

pub fn write_png(svg: &str, output: &Path) -> Result<()> {
    let pixmap = rasterize(svg)?;
    pixmap.save_png(output)?;
    Ok(())
}

pub fn load_png(path: &Path) -> Result<resvg::tiny_skia::Pixmap> {
    Ok(resvg::tiny_skia::Pixmap::load_png(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterize_preserves_document_size() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1200\" height=\"630\" viewBox=\"0 0 1200 630\"><rect x=\"0\" y=\"0\" width=\"1200\" height=\"630\" fill=\"#1e3a8a\"/></svg>";
        let pixmap = rasterize(svg).unwrap();
        assert_eq!(pixmap.width(), 1200);
        assert_eq!(pixmap.height(), 630);
    }

    #[test]
    fn rasterize_rejects_malformed_svg() {
        assert!(rasterize("<svg").is_err());
    }

    #[test]
    fn solid_rect_fills_pixels_exactly() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\" viewBox=\"0 0 10 10\"><rect x=\"0\" y=\"0\" width=\"10\" height=\"10\" fill=\"#8b5cf6\"/></svg>";
        let pixmap = rasterize(svg).unwrap();
        let pixel = pixmap.pixel(5, 5).unwrap();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (139, 92, 246));
    }
}
