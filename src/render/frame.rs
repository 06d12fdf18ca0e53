/// Row-major ARGB framebuffer owned by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0xFF00_0000; width * height],
            width,
            height,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Reallocates for new dimensions; contents are reset to opaque black.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    pub fn context(&mut self) -> FrameContext<'_> {
        FrameContext::new(&mut self.pixels, self.width, self.width, self.height)
    }
}

/// Mutable view of a pixel buffer with an explicit row stride (in pixels).
///
/// A view whose slice is too short for its dimensions is treated as absent: every painter
/// checks [`FrameContext::is_paintable`] and does nothing when it is false.
#[derive(Debug)]
pub struct FrameContext<'a> {
    pixels: &'a mut [u32],
    row_stride: usize,
    width: usize,
    height: usize,
}

impl<'a> FrameContext<'a> {
    pub fn new(pixels: &'a mut [u32], row_stride: usize, width: usize, height: usize) -> Self {
        Self {
            pixels,
            row_stride,
            width,
            height,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_paintable(&self) -> bool {
        if self.width == 0 || self.height == 0 || self.row_stride < self.width {
            return false;
        }
        let needed = (self.height - 1)
            .checked_mul(self.row_stride)
            .and_then(|n| n.checked_add(self.width));
        needed.is_some_and(|n| self.pixels.len() >= n)
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.row_stride + x).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        if let Some(px) = self.pixels.get_mut(y * self.row_stride + x) {
            *px = color;
        }
    }

    /// The visible `width` pixels of row `y`.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u32]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.row_stride;
        self.pixels.get_mut(start..start + self.width)
    }

    /// Paints column `x` from row `top` down to the last row.
    pub fn fill_column(&mut self, x: usize, top: usize, color: u32) {
        for y in top..self.height {
            self.set(x, y, color);
        }
    }
}
