/// Color picking: encode an object index as a flat 24-bit color and back.
///
/// Draw each pickable object with `color_from_index(i)`, read back the
/// pixel under the cursor, and decode it with `index_from_color`.

use glam::Vec4;

/// Encode the low 24 bits of `index` as an opaque RGBA color in [0, 1].
///
/// Red holds bits 16..24, green bits 8..16 and blue bits 0..8.
pub fn color_from_index(index: u32) -> Vec4 {
    let r = (index >> 16) & 0xFF;
    let g = (index >> 8) & 0xFF;
    let b = index & 0xFF;

    Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

/// Decode a color produced by [`color_from_index`]. Alpha is ignored.
pub fn index_from_color(color: Vec4) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;

    (channel(color.x) << 16) | (channel(color.y) << 8) | channel(color.z)
}

#[cfg(test)]
#[path = "color_index_tests.rs"]
mod tests;
