//! Criterion benchmarks for slot allocation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use parker_core::pool::SlotIdPool;
use parker_core::{LotOptions, ParkingLot};

fn bench_pool(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![16, 256, 4_096, 65_536];

    let mut group = c.benchmark_group("SlotIdPool/drain_refill");
    for &n in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut pool = SlotIdPool::new(n);
            b.iter(|| {
                while pool.extract_min().is_ok() {}
                for id in (1..=n).rev() {
                    pool.insert(id).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_lot(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![16, 256, 1_024];

    let mut group = c.benchmark_group("ParkingLot/park_leave");
    for &n in &sizes {
        let regs: Vec<String> = (0..n).map(|i| format!("KA-01-HH-{i:04}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut lot = ParkingLot::create(n, LotOptions::default().permissive()).unwrap();
                for reg in &regs {
                    lot.park(reg).unwrap();
                }
                for reg in regs.iter().step_by(2) {
                    lot.leave(reg, 3).unwrap();
                }
                lot.status()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pool, bench_lot);
criterion_main!(benches);
