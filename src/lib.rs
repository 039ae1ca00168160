pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod generator;
pub mod motifs;
#[cfg(feature = "png")]
pub mod raster;
pub mod subtitle;
pub mod text_metrics;
pub mod theme;

pub use canvas::{Canvas, FontWeight, Rgb};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use generator::HeroImageGenerator;
pub use motifs::VisualRenderer;
pub use subtitle::SubtitleGenerator;
pub use theme::{Theme, ThemeDetector, ThemeRule};
