use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use uuid::Uuid;
use uuid_compact::UuidCompactor;

// Number of UUIDs processed per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn uuids() -> Vec<Uuid> {
    (0..TOTAL_IDS).map(|_| Uuid::new_v4()).collect()
}

fn bench_compact(c: &mut Criterion) {
    let compactor = UuidCompactor::new();
    let uuids = uuids();

    let mut group = c.benchmark_group("compact");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("base64/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for uuid in &uuids {
                black_box(compactor.compact64_uuid(black_box(uuid)));
            }
        });
    });
    group.bench_function(format!("base32/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for uuid in &uuids {
                black_box(compactor.compact32_uuid(black_box(uuid)));
            }
        });
    });

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let compactor = UuidCompactor::new();
    let uuids = uuids();
    let short: Vec<String> = uuids.iter().map(|u| compactor.compact64_uuid(u)).collect();
    let upper: Vec<String> = uuids.iter().map(|u| compactor.compact32_uuid(u)).collect();

    let mut group = c.benchmark_group("expand");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    for (name, inputs) in [("base64", &short), ("base32", &upper)] {
        group.bench_function(format!("{name}/elems/{TOTAL_IDS}"), |b| {
            b.iter(|| {
                for s in inputs {
                    black_box(compactor.expand(black_box(s)).ok());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compact, bench_expand);
criterion_main!(benches);
