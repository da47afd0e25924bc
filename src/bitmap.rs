use crate::color::Pixel;
use log::{debug, error};

// ============================================================================
// Bitmap
// ============================================================================

/// Mutable 2D pixel buffer that the rasterizer draws into.
///
/// Holds exactly `width * height` pixels once allocated. Reads and writes
/// outside the buffer are clipped, never reported.
#[derive(Debug, Clone, Default)]
pub struct Bitmap {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Create a bitmap with no backing buffer yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bitmap with an allocated (black) buffer
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut bitmap = Self::new();
        bitmap.resize(width, height);
        bitmap
    }

    /// Release the current buffer and allocate a new one.
    ///
    /// Contents are not preserved: every resize is followed by a full clear
    /// and redraw in the owning loop. Allocation failure aborts the process.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;

        let count = width as usize * height as usize;
        if let Err(e) = self.pixels.try_reserve_exact(count) {
            error!("Bitmap: failed to allocate {}x{} pixel buffer: {}", width, height, e);
            std::process::abort();
        }
        self.pixels.resize(count, Pixel::default());
        self.width = width;
        self.height = height;
        debug!("Bitmap: allocated {}x{}", width, height);
    }

    /// True until a buffer has been allocated
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row in `as_bytes()`
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * std::mem::size_of::<Pixel>()
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate pixel offset for (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read a pixel (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Overwrite a pixel (bounds checked, out-of-range writes are dropped)
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, pixel: Pixel) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = pixel;
        }
    }

    /// Overwrite every pixel
    pub fn clear(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Raw buffer in native B, G, R, X byte order (row-major, `pitch()` bytes per row)
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.pixels.len() * std::mem::size_of::<Pixel>();
        // Safety: Pixel is repr(C) with four u8 fields, so it has size 4,
        // alignment 1 and no padding bytes beyond its explicit `pad` field.
        unsafe { std::slice::from_raw_parts(self.pixels.as_ptr().cast::<u8>(), len) }
    }
}
