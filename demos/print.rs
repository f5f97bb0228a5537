//! Prints a few vectors to standard output.

use std::io;
use vec3f::{Vec3f, Writer};

fn main() {
    let mut writer = Writer::new(io::stdout().lock());
    writer
        .write_vectors(&[
            Vec3f::new(1., 2., 3.),
            Vec3f::new(-1.5, 2.25, 100.),
            Vec3f::new(f32::NAN, f32::INFINITY, 0.),
        ])
        .expect("Unable to write vector");
}
