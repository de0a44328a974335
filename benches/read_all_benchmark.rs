use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fs_readall::read_all;
use rand::prelude::*;
use std::fs;
use tempdir::TempDir;

fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

fn read_all_benchmark(c: &mut Criterion) {
    let dir = TempDir::new("read_all_benchmark").unwrap();
    let inputs = [
        ("read_all_small", 1024),
        ("read_all_medium", 65536),
        ("read_all_large", 16 * 1048576),
    ];

    for (name, size) in inputs.iter() {
        let path = dir.path().join(name);
        fs::write(&path, generate_random_data(*size)).unwrap();

        let mut group = c.benchmark_group(name.to_string());
        group.measurement_time(std::time::Duration::from_secs(5));

        group.bench_function("read_all", |b| {
            b.iter(|| {
                read_all(black_box(&path)).expect("read_all returned an error")
            });
        });
        // std::fs::read sizes its buffer from metadata first
        group.bench_function("std_fs_read", |b| {
            b.iter(|| fs::read(black_box(&path)).unwrap());
        });

        group.finish();
    }
}

criterion_group!(benches, read_all_benchmark);
criterion_main!(benches);
