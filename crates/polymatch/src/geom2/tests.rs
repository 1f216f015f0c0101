use super::transform::{displace, rotate_about_centroid, scale_about_centroid, translate};
use super::*;
use crate::error::ShapeError;
use nalgebra::vector;
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn square() -> Vec<Vertex> {
    vec![
        Vertex::new(-1.0, -1.0),
        Vertex::new(-1.0, 1.0),
        Vertex::new(1.0, -1.0),
        Vertex::new(1.0, 1.0),
    ]
}

#[test]
fn distance_is_euclidean_and_symmetric() {
    let a = Vertex::new(1.0, 2.0);
    let b = Vertex::new(4.0, 6.0);
    assert!((a.distance(b) - 5.0).abs() < 1e-12);
    assert!((b.distance(a) - 5.0).abs() < 1e-12);
    assert_eq!(a.distance(a), 0.0);
}

#[test]
fn angle_between_basic_directions() {
    let x = vector![1.0, 0.0];
    assert!((angle_between(x, vector![0.0, 3.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!((angle_between(x, vector![-2.0, 0.0]) - PI).abs() < 1e-12);
    assert!(angle_between(x, vector![5.0, 0.0]).abs() < 1e-12);
    // unsigned: clockwise and counter-clockwise agree
    let up = angle_between(x, vector![1.0, 1.0]);
    let down = angle_between(x, vector![1.0, -1.0]);
    assert!((up - down).abs() < 1e-12);
}

#[test]
fn angle_between_clamps_rounding_noise() {
    // Nearly parallel vectors whose cosine rounds above 1.
    let u = vector![0.1 + 0.2, 0.3];
    let v = vector![0.3, 0.1 + 0.2];
    let a = angle_between(u * 1e8, v);
    assert!(a.is_finite());
    assert!(a >= 0.0);
    let opposite = angle_between(u, -u * 3.0);
    assert!((opposite - PI).abs() < 1e-7);
}

#[test]
fn centroid_is_mean() {
    let c = centroid(&square()).unwrap();
    assert!(c.norm() < 1e-12);
    let tri = [Vertex::new(0.0, 0.0), Vertex::new(3.0, 0.0), Vertex::new(0.0, 3.0)];
    let c = centroid(&tri).unwrap();
    assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
    assert!(centroid(&[]).is_none());
}

#[test]
fn flat_constructor_pairs_coordinates() {
    let pts = vertices_from_flat(&[0.0, 0.0, 10.0, 10.0, 10.0, 20.0]).unwrap();
    assert_eq!(
        pts,
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 20.0)
        ]
    );
}

#[test]
fn flat_constructor_rejects_bad_input() {
    assert!(matches!(
        vertices_from_flat(&[]),
        Err(ShapeError::InvalidInput { .. })
    ));
    assert!(matches!(
        vertices_from_flat(&[1.0]),
        Err(ShapeError::InvalidInput { .. })
    ));
    assert!(matches!(
        vertices_from_flat(&[1.0, 2.0, 3.0]),
        Err(ShapeError::InvalidInput { .. })
    ));
    assert!(matches!(
        vertices_from_flat(&[1.0, f64::NAN]),
        Err(ShapeError::InvalidInput { .. })
    ));
}

#[test]
fn rotation_preserves_centroid_and_radii() {
    let pts = vertices_from_flat(&[10.0, 20.0, 5.0, 1.0, 32.0, 55.0, 102.0, 5.0]).unwrap();
    let c0 = centroid(&pts).unwrap();
    let rotated = rotate_about_centroid(&pts, 1.234);
    let c1 = centroid(&rotated).unwrap();
    assert!((c0 - c1).norm() < 1e-9);
    for (p, q) in pts.iter().zip(&rotated) {
        let r0 = (p.to_vec2() - c0).norm();
        let r1 = (q.to_vec2() - c1).norm();
        assert!((r0 - r1).abs() < 1e-9);
    }
}

#[test]
fn quarter_turn_maps_square_onto_itself() {
    let rotated = rotate_about_centroid(&square(), FRAC_PI_2);
    for q in &rotated {
        assert!(square().iter().any(|p| p.distance(*q) < 1e-12));
    }
}

#[test]
fn translate_and_scale() {
    let moved = translate(&square(), 3.0, -2.0);
    let c = centroid(&moved).unwrap();
    assert!((c - vector![3.0, -2.0]).norm() < 1e-12);
    let big = scale_about_centroid(&moved, 2.5);
    assert!((centroid(&big).unwrap() - c).norm() < 1e-12);
    assert!((big[0].distance(big[3]) - 2.5 * moved[0].distance(moved[3])).abs() < 1e-12);
}

#[test]
fn displacement_is_bounded_and_replayable() {
    let pts = square();
    let tok = ReplayToken::new(42, 7);
    let a = displace(&pts, 0.2, &mut tok.to_std_rng());
    let b = displace(&pts, 0.2, &mut tok.to_std_rng());
    assert_eq!(a, b);
    for (p, q) in pts.iter().zip(&a) {
        assert!((p.x - q.x).abs() <= 0.2 + 1e-12);
        assert!((p.y - q.y).abs() <= 0.2 + 1e-12);
    }
    let other = displace(&pts, 0.2, &mut ReplayToken::new(42, 8).to_std_rng());
    assert_ne!(a, other);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(displace(&pts, 0.0, &mut rng), pts);
}
