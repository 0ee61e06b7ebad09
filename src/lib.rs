//! StackBlur: a radius-independent approximation of a Gaussian blur.
//!
//! The filter runs a sliding window of `2 * radius + 1` pixels along every row
//! (horizontal pass) and then along every column of that result (vertical
//! pass). Within the window pixels are weighted triangularly, rising from 1
//! at the edges to `radius + 1` at the center, and the weighted sum is kept
//! up to date incrementally. Each output pixel therefore costs O(1) no matter
//! how large the radius is.
//!
//! # Conventions
//!
//! - **Straight RGBA8**: channels are blurred independently; alpha is not
//!   premultiplied into color.
//! - **Edge replication**: reads past an edge return the nearest edge pixel.
//! - **Truncating division**: each output channel is `sum / (radius + 1)^2`
//!   rounded toward zero. Narrowing to 8 bits wraps by default
//!   ([`Narrowing::Truncate`]) and can saturate instead ([`Narrowing::Clamp`]).
//! - **No shared state**: every call owns its working grid and window, so
//!   callers may blur independent images on as many threads as they like.
//!   [`stack_blur_notify`] adds a one-shot completion signal for that case.
//!
//! ```
//! use stackblur::{Grid, Rgba8, stack_blur};
//!
//! let red = Rgba8::new(255, 0, 0, 255);
//! let src = Grid::new(3, 3, red)?;
//! let out = stack_blur(&src, 1)?;
//! assert_eq!(out, src);
//! # Ok::<(), stackblur::StackBlurError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blur;
mod foundation;

pub use blur::driver::{
    blur_rgba8, stack_blur, stack_blur_image, stack_blur_notify, stack_blur_with,
};
pub use blur::opts::{BlurOpts, MAX_RADIUS, Narrowing};
pub use foundation::core::{Grid, Rgba8};
pub use foundation::error::{StackBlurError, StackBlurResult};
