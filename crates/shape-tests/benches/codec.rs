use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shape_decoder::{decode, decode7, decode_samples};
use shape_encoder::{encode, encode7, encode_samples};
use shape_tests::seeded_route;
use shape_types::LonLat;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for len in [100usize, 1_000, 10_000] {
        let route = seeded_route(42, len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("classic", len), &route, |b, route| {
            b.iter(|| encode(route, 1e6).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("varint", len), &route, |b, route| {
            b.iter(|| encode7(route, 1e6).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for len in [100usize, 1_000, 10_000] {
        let route = seeded_route(42, len);
        let classic = encode(&route, 1e6).unwrap();
        let varint = encode7(&route, 1e6).unwrap();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("classic", len), &classic, |b, buf| {
            b.iter(|| decode::<Vec<LonLat>>(buf, 1e-6).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("varint", len), &varint, |b, buf| {
            b.iter(|| decode7::<Vec<LonLat>>(buf, 1e-6).unwrap());
        });
    }
    group.finish();
}

fn bench_samples(c: &mut Criterion) {
    let profile: Vec<f64> = (0..10_000)
        .map(|i| 500.0 + f64::from(i % 200) * 0.5)
        .collect();
    let encoded = encode_samples(&profile, 1e2).unwrap();

    let mut group = c.benchmark_group("samples");
    group.throughput(Throughput::Elements(profile.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| encode_samples(&profile, 1e2).unwrap());
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode_samples(&encoded, 1e-2).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_samples);
criterion_main!(benches);
