use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vec3f::{Reader, Vec3f, Writer};

fn roundtrip(nvectors: usize) {
    let mut writer = Writer::default();
    for n in 0..nvectors {
        writer
            .write(Vec3f::new(n as f32, n as f32 + 0.5, -(n as f32)))
            .unwrap();
    }
    let mut cursor = writer.into_inner();
    cursor.set_position(0);
    let mut reader = Reader::new(cursor);
    for vector in reader.vectors() {
        let _ = black_box(vector.unwrap());
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    for nvectors in [1, 100, 10_000] {
        c.bench_function(&format!("roundtrip {}", nvectors), |b| {
            b.iter(|| roundtrip(black_box(nvectors)))
        });
    }
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
