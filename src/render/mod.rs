//! Word cloud rendering
//!
//! Turns a word frequency table into a PNG where each word is drawn at a size
//! proportional to its count, then returns it base64-encoded. Rendering
//! problems never propagate: [`WordCloudRenderer::render`] logs them and
//! returns `None`.

mod font;

use crate::analysis::WordCount;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use font::{glyph, is_set, GLYPH_HEIGHT, GLYPH_WIDTH};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use thiserror::Error;

const MARGIN: u32 = 10;
const LINE_GAP: u32 = 6;
const MIN_SCALE: u32 = 2;
const MAX_SCALE: u32 = 10;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const PALETTE: &[Rgb<u8>] = &[
    Rgb([31, 119, 180]),
    Rgb([214, 39, 40]),
    Rgb([44, 160, 44]),
    Rgb([148, 103, 189]),
    Rgb([255, 127, 14]),
    Rgb([23, 190, 207]),
    Rgb([140, 86, 75]),
];

/// Why a word cloud could not be produced
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no words with a positive count to render")]
    Empty,

    #[error("canvas {width}x{height} leaves no drawable area")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("no word fits on the canvas")]
    NothingFits,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders frequency tables as base64 PNG word clouds
#[derive(Debug, Clone, Copy)]
pub struct WordCloudRenderer {
    width: u32,
    height: u32,
}

impl Default for WordCloudRenderer {
    fn default() -> Self {
        Self::new(800, 400)
    }
}

/// Next free position while packing words row by row
struct Shelf {
    x: u32,
    y: u32,
    row_height: u32,
}

impl WordCloudRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Renders `words`, or returns `None` if no image could be produced
    pub fn render(&self, words: &[WordCount]) -> Option<String> {
        match self.try_render(words) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                tracing::error!("Error generating word cloud: {}", e);
                None
            }
        }
    }

    /// Renders `words` as a base64-encoded PNG
    ///
    /// Words are drawn largest first and packed left to right in rows. A word
    /// wider than the canvas is shrunk down to the minimum scale; words that
    /// still do not fit are skipped.
    pub fn try_render(&self, words: &[WordCount]) -> Result<String, RenderError> {
        let mut entries: Vec<&WordCount> = words
            .iter()
            .filter(|w| w.count > 0 && !w.word.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(RenderError::Empty);
        }
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let usable_width = self.width.saturating_sub(2 * MARGIN);
        let usable_height = self.height.saturating_sub(2 * MARGIN);
        if usable_width == 0 || usable_height == 0 {
            return Err(RenderError::CanvasTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        let max_count = entries[0].count;
        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let mut shelf = Shelf {
            x: MARGIN,
            y: MARGIN,
            row_height: 0,
        };
        let mut placed = 0;

        for (index, entry) in entries.iter().enumerate() {
            let chars = entry.word.chars().count() as u32;
            let mut scale = scale_for(entry.count, max_count);
            while scale > MIN_SCALE && word_width(chars, scale) > usable_width {
                scale -= 1;
            }

            let width = word_width(chars, scale);
            let height = GLYPH_HEIGHT * scale;
            if width > usable_width || height > usable_height {
                continue;
            }

            if shelf.x + width > MARGIN + usable_width {
                shelf.x = MARGIN;
                shelf.y += shelf.row_height + LINE_GAP;
                shelf.row_height = 0;
            }
            if shelf.y + height > MARGIN + usable_height {
                continue;
            }

            let color = PALETTE[index % PALETTE.len()];
            draw_word(&mut canvas, &entry.word, shelf.x, shelf.y, scale, color);

            shelf.x += width + GLYPH_WIDTH * scale;
            shelf.row_height = shelf.row_height.max(height);
            placed += 1;
        }

        if placed == 0 {
            return Err(RenderError::NothingFits);
        }
        tracing::debug!("Rendered word cloud with {} of {} words", placed, entries.len());

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(STANDARD.encode(png))
    }
}

/// Pixel scale for a word, linear in its share of the top count
fn scale_for(count: usize, max_count: usize) -> u32 {
    let share = count as f64 / max_count.max(1) as f64;
    MIN_SCALE + ((MAX_SCALE - MIN_SCALE) as f64 * share).round() as u32
}

/// Rendered width of `chars` glyphs with one scaled pixel between them
fn word_width(chars: u32, scale: u32) -> u32 {
    if chars == 0 {
        return 0;
    }
    chars * GLYPH_WIDTH * scale + (chars - 1) * scale
}

fn draw_word(canvas: &mut RgbImage, word: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    let mut origin_x = x;
    for c in word.chars() {
        let bitmap = glyph(c);
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if !is_set(&bitmap, col, row) {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = origin_x + col * scale + dx;
                        let py = y + row * scale + dy;
                        if px < canvas.width() && py < canvas.height() {
                            canvas.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
        origin_x += (GLYPH_WIDTH + 1) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(pairs: &[(&str, usize)]) -> Vec<WordCount> {
        pairs
            .iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count: *count,
            })
            .collect()
    }

    fn decode(encoded: &str) -> RgbImage {
        let bytes = STANDARD.decode(encoded).unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
        image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .to_rgb8()
    }

    #[test]
    fn test_renders_png_of_requested_size() {
        let renderer = WordCloudRenderer::default();
        let encoded = renderer
            .render(&words(&[("positive", 10), ("wonderful", 5), ("test", 3)]))
            .unwrap();

        let image = decode(&encoded);
        assert_eq!(image.dimensions(), (800, 400));
    }

    #[test]
    fn test_draws_something() {
        let renderer = WordCloudRenderer::new(200, 100);
        let image = decode(&renderer.render(&words(&[("hello", 1)])).unwrap());
        assert!(image.pixels().any(|p| *p != BACKGROUND));
    }

    #[test]
    fn test_empty_map_returns_none() {
        assert!(WordCloudRenderer::default().render(&[]).is_none());
        assert!(matches!(
            WordCloudRenderer::default().try_render(&[]),
            Err(RenderError::Empty)
        ));
    }

    #[test]
    fn test_zero_counts_are_ignored() {
        let result = WordCloudRenderer::default().try_render(&words(&[("ghost", 0)]));
        assert!(matches!(result, Err(RenderError::Empty)));
    }

    #[test]
    fn test_tiny_canvas_returns_none() {
        let renderer = WordCloudRenderer::new(15, 15);
        assert!(renderer.render(&words(&[("a", 1)])).is_none());
    }

    #[test]
    fn test_oversized_word_returns_none() {
        let renderer = WordCloudRenderer::new(100, 100);
        let long_word = "x".repeat(200);
        let result = renderer.try_render(&words(&[(long_word.as_str(), 1)]));
        assert!(matches!(result, Err(RenderError::NothingFits)));
    }

    #[test]
    fn test_overflowing_words_are_skipped_not_fatal() {
        let renderer = WordCloudRenderer::new(200, 100);
        let many: Vec<(String, usize)> = (0..50).map(|i| (format!("word{}", i), 50 - i)).collect();
        let table: Vec<WordCount> = many
            .iter()
            .map(|(w, c)| WordCount {
                word: w.clone(),
                count: *c,
            })
            .collect();
        assert!(renderer.render(&table).is_some());
    }

    #[test]
    fn test_scale_is_proportional() {
        assert_eq!(scale_for(10, 10), MAX_SCALE);
        assert_eq!(scale_for(0, 10), MIN_SCALE);
        assert!(scale_for(5, 10) > MIN_SCALE && scale_for(5, 10) < MAX_SCALE);
    }

    #[test]
    fn test_word_width() {
        assert_eq!(word_width(0, 3), 0);
        assert_eq!(word_width(1, 2), 10);
        assert_eq!(word_width(3, 1), 17);
    }
}
