/// Row-major RGBA8 raster, the immutable input to extraction.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wraps a row-major RGBA8 buffer. The buffer length must be
    /// exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(format!(
                "RGBA buffer length {} does not match {}x{} ({} bytes expected)",
                pixels.len(),
                width,
                height,
                expected
            ));
        }
        Ok(RasterImage {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// R,G,B,A channels of the pixel at (x, y). Callers must stay in
    /// range; the extractor's scan bounds guarantee that.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_length_is_validated() {
        assert!(RasterImage::from_rgba8(2, 2, vec![0; 16]).is_ok());
        assert!(RasterImage::from_rgba8(2, 2, vec![0; 15]).is_err());
        assert!(RasterImage::from_rgba8(2, 2, vec![0; 17]).is_err());
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        pixels[4..8].copy_from_slice(&[1, 2, 3, 4]); // (1, 0)
        pixels[8..12].copy_from_slice(&[5, 6, 7, 8]); // (0, 1)
        let image = RasterImage::from_rgba8(2, 2, pixels).unwrap();
        assert_eq!(image.pixel(1, 0), [1, 2, 3, 4]);
        assert_eq!(image.pixel(0, 1), [5, 6, 7, 8]);
    }
}
