use std::sync::mpsc;

use crate::{
    blur::{
        opts::BlurOpts,
        passes::{Kernel, horizontal_pass, vertical_pass},
        ring::RingBuffer,
    },
    foundation::{core::Grid, error::StackBlurResult},
};

/// Blur `src` with the given radius and default options.
///
/// Shorthand for [`stack_blur_with`] with [`BlurOpts::new`].
pub fn stack_blur(src: &Grid, radius: u32) -> StackBlurResult<Grid> {
    stack_blur_with(src, &BlurOpts::new(radius))
}

/// Blur `src` into a new grid of the same dimensions.
///
/// Runs a horizontal pass over every row, then a vertical pass over every
/// column of the horizontally blurred result. Each pass costs O(1) per pixel
/// regardless of `opts.radius`. The source grid is never mutated; the call
/// owns its working copy and window for its whole duration, so independent
/// calls may run concurrently.
///
/// Options are validated before any pixel work starts.
#[tracing::instrument(
    skip(src, opts),
    fields(width = src.width(), height = src.height(), radius = opts.radius)
)]
pub fn stack_blur_with(src: &Grid, opts: &BlurOpts) -> StackBlurResult<Grid> {
    opts.validate()?;

    let mut img = src.clone();
    if opts.radius == 0 {
        return Ok(img);
    }

    let kernel = Kernel::new(opts.radius, opts.narrowing);
    let mut ring = RingBuffer::new(kernel.radius());

    horizontal_pass(&mut img, &mut ring, &kernel);
    tracing::debug!(rows = img.height(), "horizontal pass done");
    vertical_pass(&mut img, &mut ring, &kernel);
    tracing::debug!(columns = img.width(), "vertical pass done");

    Ok(img)
}

/// Like [`stack_blur_with`], then signal `done` exactly once.
///
/// The signal is sent after the output grid is fully populated, so a caller
/// running this on a worker thread may wait on the matching receiver. If
/// validation fails nothing is sent and `done` is dropped, which the
/// receiver observes as a disconnect. A receiver that has already gone away
/// is not an error.
#[tracing::instrument(skip(src, opts, done), fields(radius = opts.radius))]
pub fn stack_blur_notify(
    src: &Grid,
    opts: &BlurOpts,
    done: mpsc::Sender<()>,
) -> StackBlurResult<Grid> {
    let out = stack_blur_with(src, opts)?;
    if done.send(()).is_err() {
        tracing::debug!("completion receiver dropped before blur finished");
    }
    Ok(out)
}

/// Blur a row-major straight RGBA8 byte buffer (`width * height * 4` bytes).
#[tracing::instrument(skip(src, opts), fields(radius = opts.radius))]
pub fn blur_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    opts: &BlurOpts,
) -> StackBlurResult<Vec<u8>> {
    let grid = Grid::from_rgba8(width, height, src)?;
    Ok(stack_blur_with(&grid, opts)?.into_rgba8())
}

/// Blur any decoded image; the result is straight RGBA8.
pub fn stack_blur_image(
    src: &image::DynamicImage,
    opts: &BlurOpts,
) -> StackBlurResult<image::RgbaImage> {
    let grid = Grid::from_dynamic(src)?;
    stack_blur_with(&grid, opts)?.into_image()
}

#[cfg(test)]
#[path = "../../tests/unit/blur/driver.rs"]
mod tests;
