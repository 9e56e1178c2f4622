//! Neighbourhood averaging: block pixelation and box blur.
//!
//! Both filters replace each channel with the integer-truncated mean of a
//! set of in-bounds pixels. Samples outside the image are never invented:
//! edge blocks and edge kernels simply average fewer pixels.

use crate::pixels::{Pixel, PixelGrid};

/// Running channel sums for one averaging window.
#[derive(Debug, Clone, Copy, Default)]
struct ChannelSums {
    red: u64,
    green: u64,
    blue: u64,
}

impl ChannelSums {
    #[inline]
    fn add(&mut self, p: Pixel) {
        self.red += p.red as u64;
        self.green += p.green as u64;
        self.blue += p.blue as u64;
    }

    #[inline]
    fn mean(&self, count: u64) -> Pixel {
        Pixel::new(
            (self.red / count) as u8,
            (self.green / count) as u8,
            (self.blue / count) as u8,
        )
    }
}

/// Replace every `block_size x block_size` block, aligned to the top-left
/// corner, with its mean colour.
pub fn pixelate(grid: PixelGrid, block_size: u32) -> PixelGrid {
    let block = block_size.max(1);
    let (w, h) = (grid.width, grid.height);
    let mut pixels = grid.pixels;

    for by in (0..h).step_by(block as usize) {
        let y_end = (by + block).min(h);
        for bx in (0..w).step_by(block as usize) {
            let x_end = (bx + block).min(w);

            let mut sums = ChannelSums::default();
            for y in by..y_end {
                let row = y as usize * w as usize;
                for p in &pixels[row + bx as usize..row + x_end as usize] {
                    sums.add(*p);
                }
            }
            let count = (y_end - by) as u64 * (x_end - bx) as u64;
            let mean = sums.mean(count);

            for y in by..y_end {
                let row = y as usize * w as usize;
                pixels[row + bx as usize..row + x_end as usize].fill(mean);
            }
        }
    }

    PixelGrid::new(w, h, pixels)
}

/// Summed-area table with one extra leading row and column of zeros.
struct IntegralImage {
    stride: usize,
    sums: Vec<ChannelSums>,
}

impl IntegralImage {
    fn new(grid: &PixelGrid) -> Self {
        let (w, h) = (grid.width as usize, grid.height as usize);
        let stride = w + 1;
        let mut sums = vec![ChannelSums::default(); stride * (h + 1)];

        for y in 0..h {
            let mut row = ChannelSums::default();
            for x in 0..w {
                row.add(grid.pixels[y * w + x]);
                let above = sums[y * stride + x + 1];
                sums[(y + 1) * stride + x + 1] = ChannelSums {
                    red: above.red + row.red,
                    green: above.green + row.green,
                    blue: above.blue + row.blue,
                };
            }
        }

        Self { stride, sums }
    }

    /// Channel sums over the half-open rectangle `[x0, x1) x [y0, y1)`.
    fn rect(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> ChannelSums {
        let at = |x: usize, y: usize| self.sums[y * self.stride + x];
        let (a, b, c, d) = (at(x1, y1), at(x0, y1), at(x1, y0), at(x0, y0));
        ChannelSums {
            red: a.red + d.red - b.red - c.red,
            green: a.green + d.green - b.green - c.green,
            blue: a.blue + d.blue - b.blue - c.blue,
        }
    }
}

/// Box blur with a square kernel of `kernel_size` pixels (radius
/// `kernel_size / 2`).
///
/// Each output pixel is the mean over the in-bounds part of the kernel
/// centred on it. Results are identical to summing the window directly.
pub fn box_blur(grid: PixelGrid, kernel_size: u32) -> PixelGrid {
    let radius = (kernel_size / 2) as usize;
    let (w, h) = (grid.width as usize, grid.height as usize);
    let table = IntegralImage::new(&grid);

    let mut blurred = Vec::with_capacity(w * h);
    for y in 0..h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius + 1).min(h);
        for x in 0..w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius + 1).min(w);
            let count = ((x1 - x0) * (y1 - y0)) as u64;
            blurred.push(table.rect(x0, y0, x1, y1).mean(count));
        }
    }

    PixelGrid::new(grid.width, grid.height, blurred)
}
