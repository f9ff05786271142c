// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasterizer — renders a composed scene to an RGBA bitmap at a requested
// scale factor, using the `image` and `imageproc` crates. Text renders from
// embedded 8x8 glyph bitmaps; signature curves are flattened and stamped;
// barcode bars are filled rectangles.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use mockid_core::error::{MockidError, Result};
use mockid_core::types::{
    CARD_HEIGHT, CARD_WIDTH, PathCommand, Photo, SIGNATURE_VIEW_HEIGHT, SIGNATURE_VIEW_WIDTH,
    SignaturePath,
};
use tracing::{debug, instrument};

use crate::scene::{RenderedScene, SceneNode};
use crate::template::{Align, Color, INK, LABEL_GRAY, PLACEHOLDER_GRAY, TextStyle};

/// Segments sampled per quadratic curve when flattening a signature.
const CURVE_STEPS: u32 = 24;

fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

/// Rasterize a scene at the given scale factor (output pixels per logical
/// unit). The result is a pure function of the scene and scale; repeated
/// calls yield identical bitmaps.
#[instrument(skip(scene), fields(code = %scene.code, nodes = scene.nodes.len(), scale))]
pub fn rasterize(scene: &RenderedScene, scale: f32) -> Result<RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MockidError::Raster(format!(
            "scale factor must be positive and finite, got {scale}"
        )));
    }

    let width = (CARD_WIDTH * scale).round().max(1.0) as u32;
    let height = (CARD_HEIGHT * scale).round().max(1.0) as u32;
    let mut canvas = RgbaImage::from_pixel(width, height, rgba(scene.background));

    for node in &scene.nodes {
        match node {
            SceneNode::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                fill_rect(&mut canvas, *x, *y, *width, *height, rgba(*color), scale);
            }
            SceneNode::Text { x, y, style, content } => {
                draw_text(&mut canvas, *x, *y, style, content, scale);
            }
            SceneNode::Photo {
                x,
                y,
                width,
                height,
                photo,
            } => {
                draw_photo(&mut canvas, *x, *y, *width, *height, photo, scale)?;
            }
            SceneNode::Placeholder {
                x,
                y,
                width,
                height,
                label,
            } => {
                fill_rect(&mut canvas, *x, *y, *width, *height, rgba(PLACEHOLDER_GRAY), scale);
                let style = TextStyle {
                    size: 8.0,
                    color: LABEL_GRAY,
                    align: Align::Center,
                };
                draw_text(
                    &mut canvas,
                    x + width / 2.0,
                    y + height / 2.0 - 4.0,
                    &style,
                    label,
                    scale,
                );
            }
            SceneNode::Signature {
                x,
                y,
                width,
                height,
                path,
            } => {
                draw_signature(&mut canvas, *x, *y, *width, *height, path, scale);
            }
            SceneNode::Barcode {
                x,
                y,
                module_width,
                height,
                symbol,
            } => {
                let mut cursor = *x;
                for bar in &symbol.bars {
                    let bar_width = bar.modules as f32 * module_width;
                    if bar.ink {
                        fill_rect(&mut canvas, cursor, *y, bar_width, *height, rgba(INK), scale);
                    }
                    cursor += bar_width;
                }
            }
        }
    }

    debug!(width, height, "scene rasterized");
    Ok(canvas)
}

/// Encode a rasterized bitmap as PNG bytes.
pub fn to_png_bytes(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    DynamicImage::ImageRgba8(image.clone())
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| MockidError::ImageEncode(format!("PNG encoding failed: {err}")))?;
    Ok(buffer)
}

fn fill_rect(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Rgba<u8>,
    scale: f32,
) {
    let w = (width * scale).round().max(1.0) as u32;
    let h = (height * scale).round().max(1.0) as u32;
    let rect = Rect::at((x * scale).round() as i32, (y * scale).round() as i32).of_size(w, h);
    draw_filled_rect_mut(canvas, rect, color);
}

/// Stamp a text run from the embedded 8x8 bitmap font. The glyph advance
/// equals the style size; characters outside basic ASCII fall back to `?`.
fn draw_text(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    style: &TextStyle,
    content: &str,
    scale: f32,
) {
    let advance = style.size;
    let total_width = content.chars().count() as f32 * advance;
    let x0 = match style.align {
        Align::Left => x,
        Align::Center => x - total_width / 2.0,
    };

    let dot = style.size * scale / 8.0;
    let dot_px = dot.ceil().max(1.0) as u32;
    let color = rgba(style.color);

    for (index, ch) in content.chars().enumerate() {
        let glyph = glyph_for(ch);
        let glyph_x = (x0 + index as f32 * advance) * scale;
        let glyph_y = y * scale;
        for (row, bits) in glyph.iter().enumerate() {
            for bit in 0..8u32 {
                if bits & (1 << bit) != 0 {
                    let rect = Rect::at(
                        (glyph_x + bit as f32 * dot).round() as i32,
                        (glyph_y + row as f32 * dot).round() as i32,
                    )
                    .of_size(dot_px, dot_px);
                    draw_filled_rect_mut(canvas, rect, color);
                }
            }
        }
    }
}

fn glyph_for(ch: char) -> [u8; 8] {
    let index = ch as usize;
    if index < 128 {
        font8x8::legacy::BASIC_LEGACY[index]
    } else {
        font8x8::legacy::BASIC_LEGACY[b'?' as usize]
    }
}

/// Resample the photo into its placement box (exact fit, Lanczos3) and
/// composite it onto the canvas.
fn draw_photo(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    photo: &Photo,
    scale: f32,
) -> Result<()> {
    let source = RgbaImage::from_raw(photo.width, photo.height, photo.pixels.clone())
        .ok_or_else(|| {
            MockidError::Raster(format!(
                "photo buffer does not match {}x{} RGBA dimensions",
                photo.width, photo.height
            ))
        })?;

    let target_w = (width * scale).round().max(1.0) as u32;
    let target_h = (height * scale).round().max(1.0) as u32;
    let resized = DynamicImage::ImageRgba8(source).resize_exact(
        target_w,
        target_h,
        image::imageops::FilterType::Lanczos3,
    );

    image::imageops::overlay(
        canvas,
        &resized.to_rgba8(),
        (x * scale).round() as i64,
        (y * scale).round() as i64,
    );
    Ok(())
}

/// Flatten the signature path and stamp it into its placement box. Opacity
/// maps to gray level over the white card rather than alpha compositing.
fn draw_signature(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    path: &SignaturePath,
    scale: f32,
) {
    let points = flatten(path);
    if points.len() < 2 {
        return;
    }

    let sx = width / SIGNATURE_VIEW_WIDTH * scale;
    let sy = height / SIGNATURE_VIEW_HEIGHT * scale;
    let gray = (255.0 * (1.0 - path.opacity)).clamp(0.0, 255.0) as u8;
    let color = Rgba([gray, gray, gray, 255]);
    let radius = ((path.stroke_width * sx / 2.0).round() as i32).max(1);

    for pair in points.windows(2) {
        let (x1, y1) = (x * scale + pair[0].0 * sx, y * scale + pair[0].1 * sy);
        let (x2, y2) = (x * scale + pair[1].0 * sx, y * scale + pair[1].1 * sy);
        let steps = ((x2 - x1).abs().max((y2 - y1).abs()).ceil() as u32).max(1);
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let cx = (x1 + (x2 - x1) * t).round() as i32;
            let cy = (y1 + (y2 - y1) * t).round() as i32;
            draw_filled_circle_mut(canvas, (cx, cy), radius, color);
        }
    }
}

/// Flatten path commands to a polyline in signature-viewbox coordinates.
fn flatten(path: &SignaturePath) -> Vec<(f32, f32)> {
    let mut points = Vec::new();
    let mut current = (0.0f32, 0.0f32);
    let mut last_ctrl: Option<(f32, f32)> = None;

    for command in &path.commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                current = (x, y);
                points.push(current);
                last_ctrl = None;
            }
            PathCommand::LineTo { x, y } => {
                current = (x, y);
                points.push(current);
                last_ctrl = None;
            }
            PathCommand::QuadTo { cx, cy, x, y } => {
                sample_quad(&mut points, current, (cx, cy), (x, y));
                last_ctrl = Some((cx, cy));
                current = (x, y);
            }
            PathCommand::SmoothQuadTo { x, y } => {
                // SVG `T`: reflect the previous control point, or use the
                // current point when the previous segment was not quadratic.
                let ctrl = match last_ctrl {
                    Some((cx, cy)) => (2.0 * current.0 - cx, 2.0 * current.1 - cy),
                    None => current,
                };
                sample_quad(&mut points, current, ctrl, (x, y));
                last_ctrl = Some(ctrl);
                current = (x, y);
            }
        }
    }
    points
}

fn sample_quad(
    points: &mut Vec<(f32, f32)>,
    from: (f32, f32),
    ctrl: (f32, f32),
    to: (f32, f32),
) {
    for step in 1..=CURVE_STEPS {
        let t = step as f32 / CURVE_STEPS as f32;
        let u = 1.0 - t;
        let x = u * u * from.0 + 2.0 * u * t * ctrl.0 + t * t * to.0;
        let y = u * u * from.1 + 2.0 * u * t * ctrl.1 + t * t * to.1;
        points.push((x, y));
    }
}
