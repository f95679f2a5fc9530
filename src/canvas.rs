use folio_core::{FxError, FxResult, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` over a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    font_px: f32,
}

impl CanvasSurface {
    /// Fails when the canvas has no 2D context (already claimed by WebGL, or
    /// unsupported).
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> FxResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FxError::surface(format!("{:?}", e)))?
            .ok_or_else(|| FxError::surface("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| FxError::surface("context is not 2d"))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            font_px: 0.0,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn glyph(&mut self, glyph: char, at: Vec2, font_px: f32, color: Rgba) {
        if self.font_px != font_px {
            self.ctx.set_font(&format!("{}px monospace", font_px));
            self.font_px = font_px;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        let mut buf = [0u8; 4];
        _ = self
            .ctx
            .fill_text(glyph.encode_utf8(&mut buf), at.x as f64, at.y as f64);
    }
}

/// Acquires the 2D context on first use and retries on later calls while it
/// is unavailable.
pub struct LazySurface {
    canvas: web::HtmlCanvasElement,
    surface: Option<CanvasSurface>,
    warned: bool,
}

impl LazySurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let mut lazy = Self {
            canvas,
            surface: None,
            warned: false,
        };
        _ = lazy.get();
        lazy
    }

    pub fn get(&mut self) -> Option<&mut CanvasSurface> {
        if self.surface.is_none() {
            match CanvasSurface::acquire(&self.canvas) {
                Ok(s) => self.surface = Some(s),
                Err(e) if !self.warned => {
                    log::warn!("{}", e);
                    self.warned = true;
                }
                Err(_) => {}
            }
        }
        self.surface.as_mut()
    }
}
