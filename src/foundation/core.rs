use crate::foundation::error::{StackBlurError, StackBlurResult};

/// Straight (non-premultiplied) RGBA8 pixel.
///
/// Channels are blurred independently; alpha is never folded into the color channels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(px: Rgba8) -> Self {
        px.to_array()
    }
}

/// Row-major `width x height` grid of [`Rgba8`] pixels.
///
/// A grid always has a non-zero area; the constructors reject anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

fn pixel_count(width: u32, height: u32) -> StackBlurResult<usize> {
    if width == 0 || height == 0 {
        return Err(StackBlurError::validation(format!(
            "grid must have a non-zero area, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| StackBlurError::validation("grid size overflow"))
}

impl Grid {
    /// Grid where every pixel is `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba8) -> StackBlurResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> StackBlurResult<Self> {
        let len = pixel_count(width, height)?;
        if pixels.len() != len {
            return Err(StackBlurError::validation(format!(
                "expected {len} pixels for a {width}x{height} grid, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy a row-major straight RGBA8 byte buffer (`width * height * 4` bytes).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> StackBlurResult<Self> {
        let expected_len = pixel_count(width, height)?
            .checked_mul(4)
            .ok_or_else(|| StackBlurError::validation("grid byte size overflow"))?;
        if bytes.len() != expected_len {
            return Err(StackBlurError::validation(format!(
                "expected {expected_len} bytes for a {width}x{height} RGBA8 grid, got {}",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy a decoded straight-alpha RGBA8 image.
    pub fn from_image(img: &image::RgbaImage) -> StackBlurResult<Self> {
        Self::from_rgba8(img.width(), img.height(), img.as_raw())
    }

    /// Convert any decoded image to straight RGBA8 and copy it.
    pub fn from_dynamic(img: &image::DynamicImage) -> StackBlurResult<Self> {
        Self::from_image(&img.to_rgba8())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Pixel at `(x, y)` with both coordinates clamped to the nearest edge.
    pub fn get_clamped(&self, x: i64, y: i64) -> Rgba8 {
        let x = x.clamp(0, i64::from(self.width) - 1) as u32;
        let y = y.clamp(0, i64::from(self.height) - 1) as u32;
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, px: Rgba8) -> StackBlurResult<()> {
        if x >= self.width || y >= self.height {
            return Err(StackBlurError::validation(format!(
                "pixel ({x}, {y}) is outside the {}x{} grid",
                self.width, self.height
            )));
        }
        let idx = self.index(x, y);
        self.pixels[idx] = px;
        Ok(())
    }

    /// Row-major straight RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_array()).collect()
    }

    /// Consume the grid into row-major straight RGBA8 bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.pixels.into_iter().flat_map(Rgba8::to_array).collect()
    }

    /// Convert into an `image` buffer of the same dimensions.
    pub fn into_image(self) -> StackBlurResult<image::RgbaImage> {
        let (width, height) = (self.width, self.height);
        image::RgbaImage::from_raw(width, height, self.into_rgba8()).ok_or_else(|| {
            StackBlurError::validation(format!("pixel data does not fit a {width}x{height} image"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
