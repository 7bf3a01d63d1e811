//! Text overlay: nav row (brand + links) and the centered title.
//!
//! Rendered with glyphon directly onto the surface after the composite
//! pass. Element opacities come from the entrance timeline and are applied
//! through the glyph color alpha.

use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Color as GlyphonColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport as GlyphonViewport,
};
use verdant_common::Color;
use verdant_config::OverlayConfig;

/// Horizontal inset of the nav row, logical pixels.
const NAV_INSET_X: f32 = 28.0;
/// Vertical inset of the nav row, logical pixels.
const NAV_INSET_Y: f32 = 22.0;
/// Gap between nav links.
const LINK_GAP: f32 = 32.0;
/// Title midline as a fraction of the window height.
const TITLE_ANCHOR: f32 = 0.38;

/// GPU text renderer for the 2D overlay.
pub struct OverlayRenderer {
    pub font_system: FontSystem,
    pub swash_cache: SwashCache,
    pub cache: Cache,
    pub atlas: TextAtlas,
    pub viewport: GlyphonViewport,
    pub renderer: GlyphonRenderer,
    enabled: bool,
    brand: String,
    links: Vec<String>,
    title: String,
    nav_font_size: f32,
    title_font_size: f32,
    color: Color,
}

impl OverlayRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        config: &OverlayConfig,
    ) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = GlyphonViewport::new(device, &cache);
        let renderer =
            GlyphonRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        let color = Color::from_hex(&config.color).unwrap_or_else(|| {
            tracing::warn!("invalid overlay color {:?}, using white", config.color);
            Color::from_rgb(255, 255, 255)
        });

        Self {
            font_system,
            swash_cache,
            cache,
            atlas,
            viewport,
            renderer,
            enabled: config.enabled,
            brand: config.brand.clone(),
            links: config.links.clone(),
            title: config.title.clone(),
            nav_font_size: config.nav_font_size,
            title_font_size: config.title_font_size,
            color,
        }
    }

    /// Shape and upload this frame's overlay text.
    ///
    /// `width`/`height` are the surface size in physical pixels. Fully
    /// transparent elements are dropped before shaping.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        nav_opacity: f32,
        title_opacity: f32,
        width: u32,
        height: u32,
        scale_factor: f64,
    ) {
        self.viewport.update(queue, Resolution { width, height });
        self.atlas.trim();

        let scale = scale_factor as f32;
        let logical_w = width as f32 / scale;
        let logical_h = height as f32 / scale;

        // (buffer, logical left, logical top)
        let mut placed: Vec<(TextBuffer, f32, f32)> = Vec::new();

        if self.enabled {
            let nav_alpha = opacity_to_alpha(nav_opacity);
            if nav_alpha > 0 {
                let nav_color = self.glyph_color(nav_alpha);

                if !self.brand.is_empty() {
                    let buffer = shape_line_with(
                        &mut self.font_system,
                        &self.brand,
                        self.nav_font_size,
                        nav_color,
                    );
                    placed.push((buffer, NAV_INSET_X, NAV_INSET_Y));
                }

                // Links stack right-to-left from the far edge
                let mut right_edge = logical_w - NAV_INSET_X;
                for link in self.links.iter().rev() {
                    if link.is_empty() {
                        continue;
                    }
                    let buffer = shape_line_with(
                        &mut self.font_system,
                        link,
                        self.nav_font_size,
                        nav_color,
                    );
                    let text_width = measure_width(&buffer);
                    right_edge -= text_width;
                    placed.push((buffer, right_edge, NAV_INSET_Y));
                    right_edge -= LINK_GAP;
                }
            }

            let title_alpha = opacity_to_alpha(title_opacity);
            if title_alpha > 0 && !self.title.is_empty() {
                let title_color = self.glyph_color(title_alpha);
                let buffer = shape_line_with(
                    &mut self.font_system,
                    &self.title,
                    self.title_font_size,
                    title_color,
                );
                let text_width = measure_width(&buffer);
                let left = (logical_w - text_width) * 0.5;
                let top = logical_h * TITLE_ANCHOR - self.title_font_size * 0.5;
                placed.push((buffer, left, top));
            }
        }

        let text_areas: Vec<TextArea> = placed
            .iter()
            .map(|(buffer, left, top)| TextArea {
                buffer,
                left: left * scale,
                top: top * scale,
                scale,
                bounds: TextBounds {
                    left: 0,
                    top: 0,
                    right: width as i32,
                    bottom: height as i32,
                },
                default_color: GlyphonColor::rgba(255, 255, 255, 255),
                custom_glyphs: &[],
            })
            .collect();

        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                text_areas,
                &mut self.swash_cache,
            )
            .unwrap_or_else(|e| {
                tracing::warn!("glyphon prepare error: {:?}", e);
            });
    }

    /// Draw the prepared overlay into the given pass.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        self.renderer
            .render(&self.atlas, &self.viewport, pass)
            .unwrap_or_else(|e| {
                tracing::warn!("glyphon render error: {:?}", e);
            });
    }

    fn glyph_color(&self, alpha: u8) -> GlyphonColor {
        GlyphonColor::rgba(self.color.r, self.color.g, self.color.b, alpha)
    }
}

/// Shape a single unwrapped line of text.
fn shape_line_with(
    font_system: &mut FontSystem,
    text: &str,
    font_size: f32,
    color: GlyphonColor,
) -> TextBuffer {
    let metrics = Metrics::new(font_size, font_size * 1.3);
    let attrs = Attrs::new().family(Family::SansSerif).color(color);
    let mut buffer = TextBuffer::new(font_system, metrics);
    // Unconstrained so the line never wraps and its width is measurable
    buffer.set_size(font_system, None, None);
    buffer.set_text(font_system, text, attrs, Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Widest layout run of a shaped buffer, logical pixels.
fn measure_width(buffer: &TextBuffer) -> f32 {
    buffer
        .layout_runs()
        .map(|run| run.line_w)
        .fold(0.0, f32::max)
}

/// Convert a 0..1 opacity to a glyph alpha byte.
fn opacity_to_alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

// =============================================================================
// Tests
// =============================================================================
