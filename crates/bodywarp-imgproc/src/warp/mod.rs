//! Zone based displacement warping.
//!
//! A warp is described by a list of [`WarpZone`] values: elliptical regions in
//! normalized image coordinates, each carrying a displacement in pixels. The
//! displacement field at a pixel is the sum of every zone's displacement scaled
//! by the smooth falloff `(1 - d²)²`, where `d²` is the normalized squared
//! ellipse distance. Overlapping zones add up; they are not blended.
//!
//! The rasterizer pulls: the destination pixel at `(x, y)` reads the source at
//! `(x + dx, y + dy)`, clamped to the image, with bilinear interpolation.
//! Pixels with no displacement are copied verbatim.
//!
//! # Examples
//!
//! ```
//! use bodywarp_image::{Image, ImageSize};
//! use bodywarp_imgproc::parallel::ExecutionStrategy;
//! use bodywarp_imgproc::warp::{warp_zones, WarpZone};
//!
//! let size = ImageSize { width: 8, height: 8 };
//! let src = Image::<u8, 4>::from_size_val(size, 128).unwrap();
//! let mut dst = Image::<u8, 4>::from_size_val(size, 0).unwrap();
//!
//! let zones = [WarpZone::new(0.5, 0.5, 0.25, 0.25, 2.0, 0.0)];
//! warp_zones(&src, &mut dst, &zones, ExecutionStrategy::Serial).unwrap();
//!
//! assert_eq!(dst.as_slice(), src.as_slice());
//! ```

mod field;
mod rasterize;
mod zone;

pub use field::{displacement_at, sample_coordinate};
pub use rasterize::{warp_zones, WarpError};
pub use zone::{falloff, WarpZone};
