//! Feature-point placement with cosine easing.

use rand::Rng;

use super::{cosine_interpolate, displacement};

/// Fills the interior of `heights` by placing `feature_count` control points
/// and blending between consecutive controls with cosine easing.
///
/// Control points sit at cumulative multiples of
/// `ceil((len - 1) / (feature_count + 1))`, each displaced around the average
/// of the two endpoint values. The endpoints themselves are the outermost
/// controls and are never modified. Placement stops early once a control would
/// land on or past the right endpoint, so an oversized `feature_count`
/// degrades to fewer hills instead of corrupting the boundary.
pub fn rolling_hills(heights: &mut [f32], roughness: f32, feature_count: u32, rng: &mut impl Rng) {
    let len = heights.len();
    if len < 2 {
        return;
    }

    let mid_height = (heights[0] + heights[len - 1]) / 2.0;
    let distance = (len - 1).div_ceil(feature_count as usize + 1);

    let mut anchors = Vec::with_capacity(feature_count as usize + 2);
    anchors.push(0);

    let mut location = 0;
    for _ in 0..feature_count {
        location += distance;
        if location >= len - 1 {
            break;
        }
        heights[location] = mid_height + displacement(rng, roughness);
        anchors.push(location);
    }
    anchors.push(len - 1);

    // Left-to-right scan; the next-anchor pointer only ever advances.
    let mut next = 1;
    for i in 1..len - 1 {
        if i >= anchors[next] {
            next += 1;
        }
        let left = anchors[next - 1];
        let right = anchors[next];
        let t = (i - left) as f32 / (right - left) as f32;
        heights[i] = cosine_interpolate(heights[left], heights[right], t);
    }
}
