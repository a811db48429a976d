//! Recursive midpoint displacement.

use rand::Rng;

use super::displacement;

/// Fills the interior of `heights` by fractal subdivision of `[0, len - 1]`.
///
/// The set of indices touched is fully determined by the length (classic
/// binary subdivision); only the displacement amplitudes are random. Roughness
/// decays geometrically by `smoothing_factor` per depth level, which is what
/// produces the self-similar jaggedness.
pub fn rocky_mountains(
    heights: &mut [f32],
    roughness: f32,
    smoothing_factor: f32,
    rng: &mut impl Rng,
) {
    if heights.len() < 2 {
        return;
    }
    subdivide(heights, 0, heights.len() - 1, roughness, smoothing_factor, rng);
}

fn subdivide(
    heights: &mut [f32],
    start: usize,
    end: usize,
    roughness: f32,
    smoothing_factor: f32,
    rng: &mut impl Rng,
) {
    let mid = (start + end) / 2;
    if mid == start {
        return;
    }

    let mid_height = (heights[start] + heights[end]) / 2.0;
    heights[mid] = mid_height + displacement(rng, roughness);

    // Left before right, so a fixed seed replays the same profile.
    let next_roughness = roughness / smoothing_factor;
    subdivide(heights, start, mid, next_roughness, smoothing_factor, rng);
    subdivide(heights, mid, end, next_roughness, smoothing_factor, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Mirrors the subdivision termination rule to enumerate touched indices.
    fn collect_midpoints(start: usize, end: usize, out: &mut Vec<usize>) {
        let mid = (start + end) / 2;
        if mid == start {
            return;
        }
        out.push(mid);
        collect_midpoints(start, mid, out);
        collect_midpoints(mid, end, out);
    }

    #[test]
    fn every_interior_index_is_touched_exactly_once() {
        for len in 2..=256 {
            let mut touched = Vec::new();
            collect_midpoints(0, len - 1, &mut touched);
            touched.sort_unstable();
            let expected: Vec<usize> = (1..len - 1).collect();
            assert_eq!(touched, expected, "length {len}");
        }
    }

    #[test]
    fn interior_samples_are_all_written() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut heights = vec![f32::NAN; 65];
        heights[0] = 10.0;
        heights[64] = 30.0;

        rocky_mountains(&mut heights, 12.0, 2.0, &mut rng);

        assert!(heights.iter().all(|h| h.is_finite()));
    }

    #[test]
    fn zero_roughness_collapses_to_linear_midpoints() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut heights = vec![0.0; 5];
        heights[0] = 0.0;
        heights[4] = 8.0;

        rocky_mountains(&mut heights, 0.0, 2.0, &mut rng);

        // Pure averaging: 0, 2, 4, 6, 8.
        assert_eq!(heights, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn displacement_stays_within_first_level_bound() {
        // With smoothing 2, total displacement at any index is bounded by
        // roughness * (1 + 1/2 + 1/4 + ...) < 2 * roughness around the
        // endpoint envelope.
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut heights = vec![0.0; 129];
        heights[0] = 0.0;
        heights[128] = 0.0;

        rocky_mountains(&mut heights, 10.0, 2.0, &mut rng);

        for &h in &heights {
            assert!(h.abs() < 20.0, "sample {h} escaped the decay envelope");
        }
    }

    #[test]
    fn same_seed_replays_the_same_profile() {
        let build = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut heights = vec![0.0; 33];
            heights[0] = 5.0;
            heights[32] = 15.0;
            rocky_mountains(&mut heights, 8.0, 2.0, &mut rng);
            heights
        };
        assert_eq!(build(42), build(42));
        assert_ne!(build(42), build(43));
    }

    #[test]
    fn two_sample_map_is_left_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut heights = vec![3.0, 9.0];
        rocky_mountains(&mut heights, 50.0, 2.0, &mut rng);
        assert_eq!(heights, vec![3.0, 9.0]);
    }
}
