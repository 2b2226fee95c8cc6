//! Owned RGB bitmap type.

/// Errors that can occur when constructing a canvas.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("pixel buffer length {actual} does not match {width}x{height} RGB ({expected} bytes)")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// An owned bitmap in RGB format (3 bytes per pixel, row-major order).
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Canvas {
    /// Bytes per pixel for RGB data.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Create a black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * Self::BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    /// Wrap an existing RGB pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::BufferSizeMismatch` when `data` is not exactly
    /// `width * height * 3` bytes.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CanvasError> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(CanvasError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Read the RGB value of a single pixel.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = Canvas::new(4, 2);
        assert_eq!(canvas.width, 4);
        assert_eq!(canvas.height, 2);
        assert_eq!(canvas.data.len(), 4 * 2 * 3);
        assert!(canvas.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_rgb_accepts_matching_buffer() {
        let canvas = Canvas::from_rgb(2, 2, vec![255; 12]).unwrap();
        assert_eq!(canvas.pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_from_rgb_rejects_wrong_length() {
        let result = Canvas::from_rgb(2, 2, vec![0; 5]);
        assert!(matches!(
            result,
            Err(CanvasError::BufferSizeMismatch {
                expected: 12,
                actual: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let mut data = vec![0; 2 * 2 * 3];
        // pixel (1, 0) is the second pixel of the first row
        data[3] = 10;
        data[4] = 20;
        data[5] = 30;
        let canvas = Canvas::from_rgb(2, 2, data).unwrap();
        assert_eq!(canvas.pixel(1, 0), [10, 20, 30]);
    }
}
