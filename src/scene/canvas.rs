use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::scene::PIXEL_RATIO;
use crate::config::theme::WIREFRAME;
use crate::scene::camera::{Camera, CameraPose};
use crate::scene::geometry::SceneGeometry;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("background canvas is not mounted")]
    CanvasMissing,
    #[error("2d rendering context is unavailable")]
    ContextUnavailable,
    #[error("failed to draw frame: {0}")]
    Draw(String),
}

/// Size of the drawing buffer for a canvas shown at `css_width` × `css_height`.
pub fn drawing_buffer_size(css_width: f64, css_height: f64) -> (u32, u32) {
    let scaled = |css: f64| (css * PIXEL_RATIO).round().max(1.0) as u32;
    (scaled(css_width), scaled(css_height))
}

/// Draws wireframe frames onto the background canvas.
pub struct FrameRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl FrameRenderer {
    pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, SceneError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SceneError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::ContextUnavailable)?;
        Ok(FrameRenderer { canvas, context })
    }

    pub fn draw(&self, geometry: &SceneGeometry, pose: &CameraPose) -> Result<(), SceneError> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        if width == 0.0 || height == 0.0 {
            return Ok(());
        }

        self.context.clear_rect(0.0, 0.0, width, height);

        let backend = CanvasBackend::with_canvas_object(self.canvas.clone())
            .ok_or(SceneError::ContextUnavailable)?;
        let root = backend.into_drawing_area();

        let camera = Camera::new(pose, width / height);
        let (r, g, b) = WIREFRAME;
        let style = RGBColor(r, g, b).stroke_width(1);

        for segment in &geometry.segments {
            let Some([start, end]) = camera.project_segment(segment, width, height) else {
                continue;
            };
            root.draw(&PathElement::new(vec![to_pixel(start), to_pixel(end)], style))
                .map_err(|err| SceneError::Draw(err.to_string()))?;
        }

        root.present().map_err(|err| SceneError::Draw(err.to_string()))
    }
}

fn to_pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Applies the reduced pixel ratio to a canvas laid out at the given CSS size.
pub fn resize_drawing_buffer(canvas: &HtmlCanvasElement, css_width: f64, css_height: f64) {
    let (width, height) = drawing_buffer_size(css_width, css_height);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_scaled_down() {
        assert_eq!(drawing_buffer_size(1000.0, 500.0), (300, 150));
        assert_eq!(drawing_buffer_size(1920.0, 1080.0), (576, 324));
    }

    #[test]
    fn buffer_never_collapses() {
        assert_eq!(drawing_buffer_size(0.0, 1.0), (1, 1));
    }

    #[test]
    fn pixels_round_to_nearest() {
        assert_eq!(to_pixel((1.4, 2.6)), (1, 3));
        assert_eq!(to_pixel((-0.6, 1e12)), (-1, i32::MAX));
    }
}
