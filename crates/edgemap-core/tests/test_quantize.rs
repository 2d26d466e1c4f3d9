use ndarray::Array2;

use edgemap_core::buffer::Channel;
use edgemap_core::consts::{ARGB_BLACK, ARGB_WHITE};
use edgemap_core::quantize::{quantize, QuantizeOptions};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn single(value: f32) -> Channel {
    Channel::new(Array2::from_elem((1, 1), value))
}

fn quantize_one(value: f32, opts: &QuantizeOptions) -> u32 {
    quantize(&single(value), opts)[0]
}

fn edge_opts(invert: bool) -> QuantizeOptions {
    QuantizeOptions {
        edge_mode: true,
        invert,
        ..QuantizeOptions::default()
    }
}

// ---------------------------------------------------------------------------
// Grayscale packing
// ---------------------------------------------------------------------------

#[test]
fn test_grayscale_word_layout() {
    let opts = QuantizeOptions::default();
    assert_eq!(quantize_one(128.0, &opts), 0xff808080);
    assert_eq!(quantize_one(0.0, &opts), ARGB_BLACK);
    assert_eq!(quantize_one(255.0, &opts), ARGB_WHITE);
}

#[test]
fn test_values_are_clipped_to_byte_range() {
    let opts = QuantizeOptions::default();
    assert_eq!(quantize_one(300.0, &opts), ARGB_WHITE);
    assert_eq!(quantize_one(1020.0, &opts), ARGB_WHITE);
    assert_eq!(quantize_one(-5.0, &opts), ARGB_BLACK);
}

#[test]
fn test_scale_factor_applied_before_clipping() {
    let opts = QuantizeOptions {
        scale: 2.0,
        ..QuantizeOptions::default()
    };
    assert_eq!(quantize_one(100.0, &opts), 0xffc8c8c8);
    assert_eq!(quantize_one(200.0, &opts), ARGB_WHITE);
}

#[test]
fn test_rounding_half_up() {
    let opts = QuantizeOptions::default();
    assert_eq!(quantize_one(99.5, &opts), 0xff646464);
    assert_eq!(quantize_one(99.4, &opts), 0xff636363);
}

#[test]
fn test_invert_grayscale() {
    let opts = QuantizeOptions {
        invert: true,
        ..QuantizeOptions::default()
    };
    assert_eq!(quantize_one(0.0, &opts), ARGB_WHITE);
    assert_eq!(quantize_one(255.0, &opts), ARGB_BLACK);
    assert_eq!(quantize_one(100.0, &opts), 0xff9b9b9b);
}

// ---------------------------------------------------------------------------
// Edge mode thresholding
// ---------------------------------------------------------------------------

#[test]
fn test_edge_mode_threshold_fixture() {
    // Default threshold 50, non-inverted: 200 is foreground, 10 background.
    let opts = edge_opts(false);
    assert_eq!(quantize_one(200.0, &opts), ARGB_WHITE);
    assert_eq!(quantize_one(10.0, &opts), ARGB_BLACK);
}

#[test]
fn test_edge_mode_threshold_is_strict() {
    let opts = edge_opts(false);
    assert_eq!(quantize_one(50.0, &opts), ARGB_BLACK);
    assert_eq!(quantize_one(51.0, &opts), ARGB_WHITE);
}

#[test]
fn test_edge_mode_inverted() {
    // Inverted: strong magnitudes become dark lines, weak ones white
    // background. Cutoff moves to 255 - threshold.
    let opts = edge_opts(true);
    assert_eq!(quantize_one(200.0, &opts), ARGB_BLACK);
    assert_eq!(quantize_one(10.0, &opts), ARGB_WHITE);
}

#[test]
fn test_edge_mode_output_is_binary() {
    let data = Array2::from_shape_fn((4, 4), |(row, col)| (row * 60 + col * 13) as f32);
    let words = quantize(&Channel::new(data), &edge_opts(false));
    for w in words {
        assert!(w == ARGB_BLACK || w == ARGB_WHITE);
    }
}

// ---------------------------------------------------------------------------
// Buffer layout
// ---------------------------------------------------------------------------

#[test]
fn test_output_is_row_major() {
    let data = Array2::from_shape_fn((2, 2), |(row, col)| (row * 2 + col) as f32);
    let words = quantize(&Channel::new(data), &QuantizeOptions::default());
    assert_eq!(words.len(), 4);
    assert_eq!(words[0] & 0xff, 0);
    assert_eq!(words[1] & 0xff, 1);
    assert_eq!(words[2] & 0xff, 2);
    assert_eq!(words[3] & 0xff, 3);
}
