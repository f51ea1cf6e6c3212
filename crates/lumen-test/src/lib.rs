//! lumen-test - Regression test framework for lumen
//!
//! Provides [`RegParams`], which numbers each check, records failures and
//! reports them at the end of a test, plus deterministic synthetic images
//! standing in for photographs.
//!
//! # Usage
//!
//! ```ignore
//! use lumen_test::{RegParams, synthetic_image};
//!
//! let mut rp = RegParams::new("convolve");
//! let grid = synthetic_image("ramp256").unwrap();
//! rp.compare_values(252.0, out.rows() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use lumen_core::PixelGrid;

/// Names accepted by [`synthetic_image`].
pub const SYNTHETIC_IMAGES: &[&str] = &["ramp256", "portrait64", "checker32", "lowcontrast48"];

/// Build a deterministic test image by name.
///
/// - `ramp256`: 256x256 RGB, red follows the column, green the row,
///   blue their mix
/// - `portrait64`: 64x80 RGB with smooth shading and a bright disc
/// - `checker32`: 32x32 replicated gray, 4-pixel checker of 40 and 210
/// - `lowcontrast48`: 48x48 replicated gray confined to [90, 140]
pub fn synthetic_image(name: &str) -> TestResult<PixelGrid> {
    let built = match name {
        "ramp256" => build_rgb(256, 256, |r, c| {
            let red = c as u8;
            let green = r as u8;
            let blue = ((r + c) / 2) as u8;
            (red, green, blue)
        }),
        "portrait64" => build_rgb(64, 80, |r, c| {
            let dr = r as i32 - 30;
            let dc = c as i32 - 42;
            if dr * dr + dc * dc < 144 {
                (240, 220, 200)
            } else {
                let shade = (r * 2 + c) as u8;
                (shade / 2 + 20, shade / 3 + 10, 255 - shade / 2)
            }
        }),
        "checker32" => build_gray(32, 32, |r, c| {
            if (r / 4 + c / 4) % 2 == 0 { 40 } else { 210 }
        }),
        "lowcontrast48" => build_gray(48, 48, |r, c| 90 + ((r * 7 + c * 3) % 51) as u8),
        _ => {
            return Err(TestError::UnknownImage {
                name: name.to_string(),
            });
        }
    };
    built.map_err(|e| TestError::ImageBuild {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn build_rgb(
    rows: u32,
    columns: u32,
    f: impl Fn(u32, u32) -> (u8, u8, u8),
) -> lumen_core::Result<PixelGrid> {
    let samples: Vec<_> = (0..rows)
        .flat_map(|r| (0..columns).map(move |c| (r, c)))
        .map(|(r, c)| f(r, c))
        .collect();
    PixelGrid::from_rgb(rows, columns, &samples)
}

fn build_gray(rows: u32, columns: u32, f: impl Fn(u32, u32) -> u8) -> lumen_core::Result<PixelGrid> {
    let values: Vec<_> = (0..rows)
        .flat_map(|r| (0..columns).map(move |c| (r, c)))
        .map(|(r, c)| f(r, c))
        .collect();
    PixelGrid::from_gray(rows, columns, &values)
}
