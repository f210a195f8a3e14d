//! Measurement surface backed by cosmic-text.
//!
//! Text is shaped into an off-screen buffer and glyph placements are
//! rasterized through the swash cache, so the reported glyph height is the
//! real ink box rather than an approximation.

use std::sync::{Arc, RwLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight, fontdb};
use marquee_core::profiling::profile_function;

use crate::error::{TextError, TextResult};
use crate::font::{DEFAULT_ROOT_PX, FontDescriptor};
use crate::metrics::{TextMeasurement, TextMeasurer};

/// Glyphs used to measure the font box: tallest capital, accent and deepest descenders.
pub const FONT_HEIGHT_REFERENCE: &str = "ÉMgjpqy|";

const LINE_HEIGHT: f32 = 1.2;

/// A font database that manages available fonts.
pub struct FontDatabase {
    inner: fontdb::Database,
}

impl FontDatabase {
    /// Create a new font database with system fonts loaded.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self { inner: db }
    }

    /// Create an empty font database.
    pub fn empty() -> Self {
        Self {
            inner: fontdb::Database::new(),
        }
    }

    /// Get the number of fonts loaded.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// [`TextMeasurer`] that shapes and rasterizes with cosmic-text.
pub struct CosmicMeasurer {
    font_system: Arc<RwLock<FontSystem>>,
    swash_cache: Arc<RwLock<SwashCache>>,
    root_px: f32,
}

impl CosmicMeasurer {
    /// Create a measurer over the given fonts.
    ///
    /// Fails with [`TextError::MeasurementUnavailable`] when the database has
    /// no faces, since nothing could ever be shaped.
    pub fn new(db: FontDatabase) -> TextResult<Self> {
        if db.is_empty() {
            return Err(TextError::MeasurementUnavailable(
                "font database contains no faces".to_string(),
            ));
        }

        let font_system = FontSystem::new_with_locale_and_db(
            sys_locale::get_locale().unwrap_or_else(|| String::from("en-US")),
            db.inner,
        );
        tracing::debug!(faces = font_system.db().len(), "Created cosmic-text measurer");

        Ok(Self {
            font_system: Arc::new(RwLock::new(font_system)),
            swash_cache: Arc::new(RwLock::new(SwashCache::new())),
            root_px: DEFAULT_ROOT_PX,
        })
    }

    /// Create a measurer over the system fonts.
    pub fn with_system_fonts() -> TextResult<Self> {
        Self::new(FontDatabase::new())
    }

    /// Pixel size `rem`/`em` resolve against.
    pub fn root_px(mut self, root_px: f32) -> Self {
        self.root_px = root_px;
        self
    }
}

fn attrs_for(font: &FontDescriptor) -> Attrs<'_> {
    let family = match font.primary_family() {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        name => Family::Name(name),
    };
    Attrs::new()
        .family(family)
        .weight(Weight(font.numeric_weight()))
}

/// Shape `text` and return `(advance width, ink height)`.
fn layout_extent(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    text: &str,
    font_px: f32,
    attrs: Attrs<'_>,
) -> (f32, f32) {
    let metrics = Metrics::new(font_px, font_px * LINE_HEIGHT);
    let mut buffer = Buffer::new(font_system, metrics);
    buffer.set_text(font_system, text, attrs, Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    let mut width = 0.0_f32;
    let mut top = f32::INFINITY;
    let mut bottom = f32::NEG_INFINITY;

    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        for glyph in run.glyphs.iter() {
            let physical = glyph.physical((0., run.line_y), 1.0);
            if let Some(image) = swash_cache.get_image(font_system, physical.cache_key) {
                if image.placement.height == 0 {
                    continue;
                }
                let glyph_top = physical.y as f32 - image.placement.top as f32;
                top = top.min(glyph_top);
                bottom = bottom.max(glyph_top + image.placement.height as f32);
            }
        }
    }

    let height = if bottom > top { bottom - top } else { 0.0 };
    (width, height)
}

impl TextMeasurer for CosmicMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement> {
        profile_function!();

        let font_px = font.size.to_px(self.root_px);
        // cosmic-text cannot lay out a zero line height.
        if !font_px.is_finite() || font_px <= 0.0 {
            return Err(TextError::InvalidFontDescriptor(format!(
                "font size {} resolves to {}px",
                font.size, font_px
            )));
        }

        let mut font_system = self.font_system.write()?;
        let mut swash_cache = self.swash_cache.write()?;

        let (width, actual_height) = layout_extent(
            &mut font_system,
            &mut swash_cache,
            text,
            font_px,
            attrs_for(font),
        );
        let (_, font_height) = layout_extent(
            &mut font_system,
            &mut swash_cache,
            FONT_HEIGHT_REFERENCE,
            font_px,
            attrs_for(font),
        );

        Ok(TextMeasurement {
            width,
            actual_height,
            font_height,
        })
    }
}
