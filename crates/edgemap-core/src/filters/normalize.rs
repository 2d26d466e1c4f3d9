use crate::buffer::GrayMap;
use crate::consts::GRAY_LEVELS;

/// Build the cumulative-histogram remap table for a buffer.
///
/// The table is non-decreasing in its input index: level `v` maps to the
/// highest intensity `i` whose cumulative pixel share reaches `v`.
pub fn build_remap(gray: &GrayMap) -> [u8; GRAY_LEVELS] {
    let mut histogram = [0usize; GRAY_LEVELS];
    for &v in gray.data.iter() {
        histogram[v as usize] += 1;
    }

    let total = gray.data.len();
    let mut remap = [0u8; GRAY_LEVELS];
    let mut sum = 0usize;
    let mut prev_target = 0usize;
    for (i, &count) in histogram.iter().enumerate() {
        sum += count;
        let target = sum * (GRAY_LEVELS - 1) / total;
        for level in &mut remap[prev_target + 1..=target] {
            *level = i as u8;
        }
        prev_target = target;
    }

    remap
}

/// Flatten the intensity distribution by applying the cumulative-histogram
/// remap to every sample, returning a new buffer.
pub fn normalize_contrast(gray: &GrayMap) -> GrayMap {
    let remap = build_remap(gray);
    GrayMap::new(gray.data.mapv(|v| remap[v as usize]))
}
