//! Fingerprint a few polygons and print their pairwise distances.
//!
//! Usage:
//!   cargo run -p polymatch --example match_shapes -- [seed]
//!
//! Each shape is compared with a rotated, jittered copy of itself and with the
//! other shapes of the same vertex count.

use polymatch::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let shapes: [(&str, &[f64]); 4] = [
        ("thin triangle", &[0.0, 0.0, 10.0, 10.0, 10.0, 20.0]),
        ("wide triangle", &[40.0, 2.0, 2.0, 1.0, 32.0, 11.0]),
        ("square", &[-1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0]),
        ("kite", &[10.0, 20.0, 5.0, 1.0, 32.0, 55.0, 102.0, 5.0]),
    ];
    for (k, (name, coords)) in shapes.iter().enumerate() {
        let pts = vertices_from_flat(coords).unwrap();
        let mut rng = ReplayToken::new(seed, k as u64).to_std_rng();
        let copy = rotate_about_centroid(&displace(&pts, 0.1, &mut rng), 2.0);
        let fa = fingerprint(&pts).unwrap();
        let fb = fingerprint(&copy).unwrap();
        println!("{name}: self vs perturbed copy = {:.4}", distance(&fa, &fb).unwrap());
        for (other, other_coords) in shapes.iter().skip(k + 1) {
            let fo = fingerprint(&vertices_from_flat(other_coords).unwrap()).unwrap();
            match distance(&fa, &fo) {
                Ok(d) => println!("  vs {other}: {d:.4}"),
                Err(err) => println!("  vs {other}: {err}"),
            }
        }
    }
}
