// Host-side tests for surface sizing and cover-fit geometry.

use folio_core::{effective_dpr, pointer_to_surface, CoverFit, SurfaceSize, QUAD_VERTICES};
use glam::Vec2;

#[test]
fn backing_store_scales_css_size() {
    let size = SurfaceSize::from_css(400.0, 300.0, effective_dpr(2.0));
    assert_eq!(size, SurfaceSize::new(800, 600));
}

#[test]
fn low_pixel_ratios_are_clamped_up() {
    assert_eq!(effective_dpr(1.0), 2.0);
    assert_eq!(effective_dpr(0.0), 2.0);
    assert_eq!(effective_dpr(f64::NAN), 2.0);
    assert_eq!(effective_dpr(3.0), 3.0);

    let size = SurfaceSize::from_css(400.0, 300.0, effective_dpr(1.0));
    assert_eq!(size, SurfaceSize::new(800, 600));
}

#[test]
fn fractional_ratios_truncate_to_whole_pixels() {
    let size = SurfaceSize::from_css(101.0, 33.0, 2.625);
    assert_eq!(size, SurfaceSize::new(265, 86));
}

#[test]
fn recomputing_unchanged_css_size_is_stable() {
    let a = SurfaceSize::from_css(640.0, 480.0, effective_dpr(2.0));
    let b = SurfaceSize::from_css(640.0, 480.0, effective_dpr(2.0));
    assert_eq!(a, b);
}

#[test]
fn wide_surface_crops_image_vertically() {
    // 2:1 surface, 1:1 image
    let fit = CoverFit::compute(1.0, 2.0);
    assert_eq!(fit.scale, Vec2::new(1.0, 0.5));
    assert_eq!(fit.offset, Vec2::new(0.0, 0.25));
}

#[test]
fn tall_surface_crops_image_horizontally() {
    // 1:2 surface, 1:1 image
    let fit = CoverFit::compute(1.0, 0.5);
    assert_eq!(fit.scale, Vec2::new(0.5, 1.0));
    assert_eq!(fit.offset, Vec2::new(0.25, 0.0));
}

#[test]
fn cover_fit_stays_inside_texture_and_centered() {
    for &(img, surf) in &[(1.0, 2.0), (0.5, 3.0), (4.0, 1.0), (1.777, 1.333)] {
        let fit = CoverFit::compute(img, surf);
        let [tl, _, br, _] = fit.tex_coords();
        assert!(tl[0] >= 0.0 && tl[1] >= 0.0);
        assert!(br[0] <= 1.0 + 1e-6 && br[1] <= 1.0 + 1e-6);
        // symmetric crop
        assert!((tl[0] - (1.0 - br[0])).abs() < 1e-6);
        assert!((tl[1] - (1.0 - br[1])).abs() < 1e-6);
        // cropped window keeps the surface aspect in image pixels
        let window_aspect = fit.scale.x * img / fit.scale.y;
        assert!((window_aspect - surf).abs() < 1e-3, "img={} surf={}", img, surf);
    }
}

#[test]
fn tex_coords_follow_quad_corner_order() {
    let fit = CoverFit::compute(1.0, 2.0);
    let uv = fit.tex_coords();
    // top-left vertex samples the top of the crop window
    assert_eq!(QUAD_VERTICES[0], [-1.0, 1.0]);
    assert_eq!(uv[0], [0.0, 0.25]);
    // bottom-left
    assert_eq!(QUAD_VERTICES[1], [-1.0, -1.0]);
    assert_eq!(uv[1], [0.0, 0.75]);
    // bottom-right, top-right
    assert_eq!(uv[2], [1.0, 0.75]);
    assert_eq!(uv[3], [1.0, 0.25]);
}

#[test]
fn pointer_is_scaled_into_device_pixels() {
    let p = pointer_to_surface(Vec2::new(150.0, 80.0), Vec2::new(100.0, 55.0), 2.0);
    assert_eq!(p, Vec2::new(100.0, 50.0));
}
