use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strided_bytes::{OwnerHandle, SliceSpec, StridedArrayView};

fn filled(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for size in [64usize, 256, 1024] {
        let elements = size * size;
        group.throughput(Throughput::Bytes(elements as u64));

        let data = filled(elements);
        let view = StridedArrayView::new(
            &data,
            [size, size],
            [size as isize, 1],
            OwnerHandle::DETACHED,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("contiguous", size), &size, |b, _| {
            b.iter(|| view.to_bytes());
        });

        let transposed = view.transposed(0, 1).unwrap();
        group.bench_with_input(BenchmarkId::new("transposed", size), &size, |b, _| {
            b.iter(|| transposed.to_bytes());
        });
    }
    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");
    let data = filled(1024 * 1024);
    let view = StridedArrayView::new(
        &data,
        [1024, 1024],
        [1024, 1],
        OwnerHandle::DETACHED,
    )
    .unwrap();

    group.bench_function("all_axes", |b| {
        b.iter(|| {
            view.slice([
                SliceSpec::from(128..896).step_by(2),
                SliceSpec::FULL.step_by(-3),
            ])
            .unwrap()
        });
    });

    group.bench_function("index_chain", |b| {
        b.iter(|| view.at(512).unwrap().at(512).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_flatten, bench_slice);
criterion_main!(benches);
