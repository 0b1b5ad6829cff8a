//! Library-space to host-space transforms.

use glam::{Affine2, Vec2, Vec4};

use crate::sink::ClipRect;

/// Builds the transform used to paint a snapshot.
///
/// Only the translation of the paint target's accumulated transform is used,
/// offset by the snapshot's display origin.
pub fn paint_transform(accumulated: &Affine2, display_pos: Vec2) -> Affine2 {
    Affine2::from_translation(accumulated.translation - display_pos)
}

/// Transforms a library clip rectangle `(min_x, min_y, max_x, max_y)` into host space.
///
/// Both corners are transformed and the result is re-normalized so that
/// `min <= max` on each axis.
pub fn transform_clip_rect(transform: &Affine2, rect: Vec4) -> ClipRect {
    let a = transform.transform_point2(Vec2::new(rect.x, rect.y));
    let b = transform.transform_point2(Vec2::new(rect.z, rect.w));
    ClipRect::new(a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_paint_transform_uses_translation_only() {
        let accumulated = Affine2::from_scale_angle_translation(
            Vec2::new(2.0, 2.0),
            0.0,
            Vec2::new(50.0, 60.0),
        );
        let transform = paint_transform(&accumulated, Vec2::new(10.0, 20.0));
        let p = transform.transform_point2(Vec2::new(1.0, 1.0));
        assert!((p - Vec2::new(41.0, 41.0)).length() < 1e-5);
    }

    #[test]
    fn test_transform_clip_rect_translates() {
        let transform = Affine2::from_translation(Vec2::new(10.0, 5.0));
        let clip = transform_clip_rect(&transform, Vec4::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(clip.min, Vec2::new(10.0, 5.0));
        assert_eq!(clip.max, Vec2::new(110.0, 55.0));
    }

    #[test]
    fn test_transform_clip_rect_normalizes_mirrored() {
        let transform = Affine2::from_scale(Vec2::new(-1.0, 1.0));
        let clip = transform_clip_rect(&transform, Vec4::new(10.0, 0.0, 20.0, 5.0));
        assert_eq!(clip.min, Vec2::new(-20.0, 0.0));
        assert_eq!(clip.max, Vec2::new(-10.0, 5.0));
    }

    #[test]
    fn test_degenerate_clip_rect_stays_empty() {
        let transform = Affine2::from_translation(Vec2::new(3.0, 3.0));
        let clip = transform_clip_rect(&transform, Vec4::new(5.0, 5.0, 5.0, 9.0));
        assert!(clip.is_empty());
    }

    proptest! {
        #[test]
        fn prop_transform_roundtrip(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
            tx in -1.0e3f32..1.0e3,
            ty in -1.0e3f32..1.0e3,
            ox in -1.0e3f32..1.0e3,
            oy in -1.0e3f32..1.0e3,
        ) {
            let accumulated = Affine2::from_translation(Vec2::new(tx, ty));
            let transform = paint_transform(&accumulated, Vec2::new(ox, oy));
            let point = Vec2::new(x, y);
            let back = transform.inverse().transform_point2(transform.transform_point2(point));
            prop_assert!((back - point).abs().max_element() < 1e-2);
        }

        #[test]
        fn prop_general_affine_roundtrip(
            x in -1.0e3f32..1.0e3,
            y in -1.0e3f32..1.0e3,
            scale in 0.25f32..4.0,
            angle in -3.0f32..3.0,
        ) {
            let transform = Affine2::from_scale_angle_translation(
                Vec2::splat(scale),
                angle,
                Vec2::new(12.0, -7.0),
            );
            let point = Vec2::new(x, y);
            let back = transform.inverse().transform_point2(transform.transform_point2(point));
            prop_assert!((back - point).length() < 1e-2);
        }
    }
}
