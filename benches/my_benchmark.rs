use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::{Duration, NaiveDateTime};
use detquantlib::dates::{calc_months_diff, count_delivery_periods, ndt, Timestamp};
use detquantlib::forecasting::forecast_knife_strategy;

fn quarter_hours(n: i64) -> Vec<NaiveDateTime> {
    let start = ndt(2024, 1, 1);
    (0..n).map(|i| start + Duration::minutes(15 * i)).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    // one year of quarter-hourly observations
    let dates = quarter_hours(35_136);
    let values: Vec<f64> = (0..dates.len()).map(|i| (i % 96) as f64).collect();
    c.bench_function("knife strategy 1y 15min", |z| {
        z.iter(|| forecast_knife_strategy(black_box(&dates), black_box(&values)))
    });

    let start = Timestamp::from(ndt(2025, 1, 1) + Duration::minutes(10));
    let end = Timestamp::from(ndt(2030, 1, 1));
    c.bench_function("count periods naive", |z| {
        z.iter(|| count_delivery_periods(black_box(&start), black_box(&end), "15min", false, None))
    });
    c.bench_function("count periods localised", |z| {
        z.iter(|| {
            count_delivery_periods(
                black_box(&start),
                black_box(&end),
                "15min",
                false,
                Some("Europe/Amsterdam"),
            )
        })
    });

    let a = ndt(2025, 4, 20);
    let b = ndt(2026, 9, 10);
    c.bench_function("months diff full months", |z| {
        z.iter(|| calc_months_diff(black_box(&a), black_box(&b), "full_months_only"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
