//! Aspect-ratio-preserving canvas resizing.

use super::bitmap::Canvas;

/// Default maximum width for resized canvases.
pub const DEFAULT_MAX_WIDTH: u32 = 640;

/// Default maximum height for resized canvases.
pub const DEFAULT_MAX_HEIGHT: u32 = 480;

/// Compute dimensions that fit within `max_width` x `max_height` while
/// preserving the source aspect ratio.
///
/// The clamp runs in two ordered passes, not a single combined ratio:
/// first the width is clamped to `max_width` (scaling the height along),
/// then the resulting height is clamped to `max_height` (scaling the
/// already-clamped width along). An image that fits on one axis is only
/// rescaled by the pass for the axis that overflows. The pass order is
/// part of the contract; callers rely on the exact pixel dimensions it
/// produces.
///
/// # Example
/// ```
/// use face_console::canvas::fit_dimensions;
///
/// assert_eq!(fit_dimensions(800, 400, 640, 480), (640, 320));
/// assert_eq!(fit_dimensions(500, 1000, 640, 480), (240, 480));
/// ```
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    let mut new_width = width as f64;
    let mut new_height = height as f64;

    if width > max_width {
        new_width = max_width as f64;
        new_height = height as f64 * max_width as f64 / width as f64;
    }

    if new_height > max_height as f64 {
        new_width = new_width * max_height as f64 / new_height;
        new_height = max_height as f64;
    }

    (
        (new_width.round() as u32).max(1),
        (new_height.round() as u32).max(1),
    )
}

/// Produce a new canvas scaled to fit within the given bounds.
///
/// The result is an independently owned bitmap of exactly the size
/// computed by [`fit_dimensions`]; the source canvas is left unmodified.
/// A source that already fits is copied at its original size. Each output
/// pixel averages the source pixels its cell covers, which is adequate for
/// the shrink-only scaling that the two-pass clamp guarantees.
pub fn resize_canvas(canvas: &Canvas, max_width: u32, max_height: u32) -> Canvas {
    let (new_width, new_height) =
        fit_dimensions(canvas.width, canvas.height, max_width, max_height);

    if new_width == canvas.width && new_height == canvas.height {
        return canvas.clone();
    }
    if new_width == 0 || new_height == 0 {
        return Canvas::new(0, 0);
    }

    let cell_w = canvas.width as f64 / new_width as f64;
    let cell_h = canvas.height as f64 / new_height as f64;

    let mut resized = Canvas::new(new_width, new_height);

    for out_y in 0..new_height {
        for out_x in 0..new_width {
            let start_x = (out_x as f64 * cell_w) as u32;
            let end_x = (((out_x + 1) as f64 * cell_w) as u32).min(canvas.width);
            let start_y = (out_y as f64 * cell_h) as u32;
            let end_y = (((out_y + 1) as f64 * cell_h) as u32).min(canvas.height);

            let mut sum = [0u64; 3];
            let mut count = 0u64;

            for src_y in start_y..end_y {
                for src_x in start_x..end_x {
                    let [r, g, b] = canvas.pixel(src_x, src_y);
                    sum[0] += r as u64;
                    sum[1] += g as u64;
                    sum[2] += b as u64;
                    count += 1;
                }
            }

            let idx = (out_y as usize * new_width as usize + out_x as usize)
                * Canvas::BYTES_PER_PIXEL;
            if count > 0 {
                resized.data[idx] = (sum[0] / count) as u8;
                resized.data[idx + 1] = (sum[1] / count) as u8;
                resized.data[idx + 2] = (sum[2] / count) as u8;
            }
        }
    }

    resized
}
