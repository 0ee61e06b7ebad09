use std::ops::{AddAssign, SubAssign};

use crate::{
    blur::{opts::Narrowing, ring::RingBuffer},
    foundation::core::{Grid, Rgba8},
};

/// Per-channel running sum.
///
/// `u64` keeps `255 * (radius + 1)^2` exact for every accepted radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Accum {
    r: u64,
    g: u64,
    b: u64,
    a: u64,
}

impl Accum {
    fn scaled(px: Rgba8, k: u64) -> Self {
        Self {
            r: u64::from(px.r) * k,
            g: u64::from(px.g) * k,
            b: u64::from(px.b) * k,
            a: u64::from(px.a) * k,
        }
    }

    fn emit(self, divsum: u64, narrowing: Narrowing) -> Rgba8 {
        Rgba8::new(
            narrowing.narrow(self.r / divsum),
            narrowing.narrow(self.g / divsum),
            narrowing.narrow(self.b / divsum),
            narrowing.narrow(self.a / divsum),
        )
    }
}

impl AddAssign for Accum {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}

impl SubAssign for Accum {
    fn sub_assign(&mut self, rhs: Self) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
        self.a -= rhs.a;
    }
}

impl AddAssign<Rgba8> for Accum {
    fn add_assign(&mut self, px: Rgba8) {
        *self += Self::scaled(px, 1);
    }
}

impl SubAssign<Rgba8> for Accum {
    fn sub_assign(&mut self, px: Rgba8) {
        *self -= Self::scaled(px, 1);
    }
}

/// Constants shared by every row and column scan of one blur call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Kernel {
    radius: usize,
    sum_factor: u64,
    divsum: u64,
    narrowing: Narrowing,
}

impl Kernel {
    pub(crate) fn new(radius: u32, narrowing: Narrowing) -> Self {
        let radius_plus1 = u64::from(radius) + 1;
        Self {
            radius: radius as usize,
            sum_factor: radius_plus1 * (radius_plus1 + 1) / 2,
            divsum: radius_plus1 * radius_plus1,
            narrowing,
        }
    }

    pub(crate) fn radius(&self) -> usize {
        self.radius
    }
}

/// One row or column of the pixel array: `len` pixels `stride` apart.
#[derive(Clone, Copy, Debug)]
struct Line {
    start: usize,
    stride: usize,
    len: usize,
}

impl Line {
    fn at(self, i: usize) -> usize {
        self.start + i * self.stride
    }

    /// Index of position `i`, clamped to the last pixel of the line.
    fn at_clamped(self, i: usize) -> usize {
        self.at(i.min(self.len - 1))
    }
}

pub(crate) fn horizontal_pass(grid: &mut Grid, ring: &mut RingBuffer, kernel: &Kernel) {
    let w = grid.width() as usize;
    let h = grid.height() as usize;
    let pixels = grid.pixels_mut();
    for y in 0..h {
        let line = Line {
            start: y * w,
            stride: 1,
            len: w,
        };
        scan_line(pixels, line, ring, kernel);
    }
}

pub(crate) fn vertical_pass(grid: &mut Grid, ring: &mut RingBuffer, kernel: &Kernel) {
    let w = grid.width() as usize;
    let h = grid.height() as usize;
    let pixels = grid.pixels_mut();
    for x in 0..w {
        let line = Line {
            start: x,
            stride: w,
            len: h,
        };
        scan_line(pixels, line, ring, kernel);
    }
}

/// Blur one line in place.
///
/// Position `x` is written only after every read at or below `x` has
/// happened; look-ahead reads land on `x + radius + 1` (clamped), so the
/// window always sees source values. The one exception is the clamped read
/// after the final emit, whose result is never emitted.
fn scan_line(pixels: &mut [Rgba8], line: Line, ring: &mut RingBuffer, k: &Kernel) {
    debug_assert_eq!(ring.div(), 2 * k.radius + 1);
    let radius_plus1 = k.radius + 1;

    // Trailing half: the first pixel replicated radius+1 times, weights 1..=radius+1.
    let first = pixels[line.at(0)];
    let mut out_sum = Accum::scaled(first, radius_plus1 as u64);
    let mut sum = Accum::scaled(first, k.sum_factor);
    let mut in_sum = Accum::default();
    ring.fill(first);

    // Ahead half: weights radius..=1.
    for i in 1..radius_plus1 {
        let px = pixels[line.at_clamped(i)];
        ring.load(k.radius + i, px);
        sum += Accum::scaled(px, (radius_plus1 - i) as u64);
        in_sum += px;
    }
    ring.rewind();

    for x in 0..line.len {
        pixels[line.at(x)] = sum.emit(k.divsum, k.narrowing);

        sum -= out_sum;
        out_sum -= ring.in_slot();

        let entering = pixels[line.at_clamped(x + radius_plus1)];
        ring.set_in(entering);
        in_sum += entering;
        sum += in_sum;

        let centered = ring.out_slot();
        out_sum += centered;
        in_sum -= centered;
        ring.advance();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blur/passes.rs"]
mod tests;
