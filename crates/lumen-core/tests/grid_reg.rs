//! Pixel grid regression test
//!
//! Construction, access, histograms and the immutable/mutable ownership
//! round trip on synthetic images.

use lumen_core::{Channel, PixelGrid, color};
use lumen_test::{RegParams, synthetic_image};

#[test]
fn grid_reg() {
    let mut rp = RegParams::new("grid");

    // --- Test 1: dimensions of the synthetic images ---
    let ramp = synthetic_image("ramp256").expect("ramp256");
    rp.compare_values(256.0, ramp.rows() as f64, 0.0);
    rp.compare_values(256.0, ramp.columns() as f64, 0.0);
    let portrait = synthetic_image("portrait64").expect("portrait64");
    rp.compare_values(64.0, portrait.rows() as f64, 0.0);
    rp.compare_values(80.0, portrait.columns() as f64, 0.0);

    // --- Test 2: row-major addressing ---
    // red follows the column, green the row
    let (r, g, _) = ramp.get_rgb(3, 200).expect("in bounds");
    rp.compare_values(200.0, r as f64, 0.0);
    rp.compare_values(3.0, g as f64, 0.0);
    rp.compare_values(1.0, if ramp.get_rgb(256, 0).is_none() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: histograms sum to the pixel count ---
    for channel in Channel::ALL {
        let hist = portrait.channel_histogram(channel);
        rp.compare_values(64.0 * 80.0, hist.total() as f64, 0.0);
    }
    let checker = synthetic_image("checker32").expect("checker32");
    let hist = checker.gray_histogram();
    rp.compare_values(2.0, hist.distinct_values() as f64, 0.0);
    rp.compare_values(512.0, hist.count(40) as f64, 0.0);
    rp.compare_values(512.0, hist.count(210) as f64, 0.0);

    // --- Test 4: mutable copy leaves the original intact ---
    let mut copy = checker.to_mut();
    copy.set_gray(0, 0, 99).expect("set");
    let copy: PixelGrid = copy.into();
    rp.compare_values(40.0, checker.get_gray(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(99.0, copy.get_gray(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(1.0, if copy.is_replicated() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: exclusive owner converts without copying ---
    let data_ptr = checker.data().as_ptr();
    let owned = checker.try_into_mut().expect("single owner");
    rp.compare_values(1.0, if owned.data().as_ptr() == data_ptr { 1.0 } else { 0.0 }, 0.0);
    let back: PixelGrid = owned.into();
    rp.compare_grids(&back, &synthetic_image("checker32").unwrap());

    // --- Test 6: extrema of the low-contrast image ---
    let low = synthetic_image("lowcontrast48").expect("lowcontrast48");
    let (lo, hi) = low.channel_extrema(Channel::Red);
    rp.compare_values(90.0, lo as f64, 0.0);
    rp.compare_values(140.0, hi as f64, 0.0);
    rp.compare_values(
        color::compose_gray(90) as f64,
        low.get_pixel(0, 0).unwrap() as f64,
        0.0,
    );
    rp.show_grid("lowcontrast48", &low);

    assert!(rp.cleanup(), "grid regression test failed");
}
