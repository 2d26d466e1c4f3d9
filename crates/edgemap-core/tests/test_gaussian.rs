use approx::assert_abs_diff_eq;
use ndarray::Array2;

use edgemap_core::buffer::Channel;
use edgemap_core::error::EdgeMapError;
use edgemap_core::filters::gaussian::{smooth, GaussianKernel};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_channel(h: usize, w: usize, fill: f32) -> Channel {
    Channel::new(Array2::from_elem((h, w), fill))
}

fn make_impulse(h: usize, w: usize) -> Channel {
    let mut data = Array2::<f32>::zeros((h, w));
    data[[h / 2, w / 2]] = 255.0;
    Channel::new(data)
}

// ---------------------------------------------------------------------------
// Kernel generation
// ---------------------------------------------------------------------------

#[test]
fn test_kernel_weights_sum_to_one() {
    for &(sigma, size) in &[(0.5f32, 3usize), (1.0, 3), (1.0, 5), (2.0, 9), (4.0, 13)] {
        let kernel = GaussianKernel::new(sigma, size).unwrap();
        let sum: f32 = kernel.weights.iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_kernel_center_is_maximum() {
    let kernel = GaussianKernel::new(1.0, 5).unwrap();
    let center = kernel.weights[[2, 2]];
    for &w in kernel.weights.iter() {
        assert!(w <= center);
    }
}

#[test]
fn test_kernel_size_one_is_identity_weight() {
    let kernel = GaussianKernel::new(1.0, 1).unwrap();
    assert_eq!(kernel.size, 1);
    assert!((kernel.weights[[0, 0]] - 1.0).abs() < 1e-6);
}

#[test]
fn test_kernel_rejects_bad_sigma() {
    for sigma in [0.0f32, -1.0, f32::NAN, f32::INFINITY] {
        let result = GaussianKernel::new(sigma, 3);
        assert!(matches!(result, Err(EdgeMapError::InvalidKernel(_))));
    }
}

#[test]
fn test_kernel_rejects_even_or_zero_size() {
    for size in [0usize, 2, 4, 10] {
        let result = GaussianKernel::new(1.0, size);
        assert!(matches!(result, Err(EdgeMapError::InvalidKernel(_))));
    }
}

// ---------------------------------------------------------------------------
// Convolution
// ---------------------------------------------------------------------------

#[test]
fn test_flat_field_is_unchanged() {
    let channel = make_channel(8, 8, 128.0);
    let smoothed = smooth(&channel, 1.0, 3).unwrap();
    for &v in smoothed.data.iter() {
        assert!((v - 128.0).abs() < 1e-3, "flat field drifted to {v}");
    }
}

#[test]
fn test_border_band_is_untouched() {
    let channel = make_impulse(9, 9);
    let smoothed = smooth(&channel, 1.0, 5).unwrap();
    let offset = 2;
    for row in 0..9 {
        for col in 0..9 {
            if row < offset || row >= 9 - offset || col < offset || col >= 9 - offset {
                assert_eq!(
                    smoothed.data[[row, col]],
                    channel.data[[row, col]],
                    "border pixel ({row}, {col}) changed"
                );
            }
        }
    }
}

#[test]
fn test_interior_changes_on_impulse() {
    let channel = make_impulse(9, 9);
    let smoothed = smooth(&channel, 1.0, 3).unwrap();
    // Mass spreads from the center into its neighborhood.
    assert!(smoothed.data[[4, 4]] < 255.0);
    assert!(smoothed.data[[4, 3]] > 0.0);
    assert!(smoothed.data[[3, 4]] > 0.0);
}

#[test]
fn test_smoothing_preserves_total_mass_in_interior() {
    // Impulse far from the border: the kernel sums to 1, so the spread
    // values must sum back to the impulse height.
    let channel = make_impulse(11, 11);
    let smoothed = smooth(&channel, 1.0, 3).unwrap();
    let total: f32 = smoothed.data.iter().sum();
    assert_abs_diff_eq!(total, 255.0, epsilon = 1e-2);
}

#[test]
fn test_image_smaller_than_kernel_is_returned_unchanged() {
    let channel = make_impulse(2, 2);
    let smoothed = smooth(&channel, 1.0, 5).unwrap();
    assert_eq!(smoothed.data, channel.data);
}

#[test]
fn test_size_one_kernel_is_identity() {
    let channel = make_impulse(5, 5);
    let smoothed = smooth(&channel, 1.0, 1).unwrap();
    for (out, inp) in smoothed.data.iter().zip(channel.data.iter()) {
        assert!((out - inp).abs() < 1e-5);
    }
}
