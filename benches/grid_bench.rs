// Benchmark for month grid construction
// Measures cell status resolution against booking ledgers of growing size

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tour_calendar::models::booking::{BookedEntry, Period};
use tour_calendar::services::availability::AvailabilityLedger;
use tour_calendar::ui_egui::availability_calendar::CalendarState;

/// Bookings spread over a year starting January 2025
fn sample_entries(count: usize) -> Vec<BookedEntry> {
    (0..count)
        .map(|i| {
            let period = if i % 2 == 0 {
                Period::Morning
            } else {
                Period::Afternoon
            };
            BookedEntry::new((i % 28) as u32 + 1, ((i / 28) % 12) as u32, 2025, period)
        })
        .collect()
}

fn bench_month_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_grid");
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for count in [0, 100, 1000].iter() {
        let state = CalendarState::new(AvailabilityLedger::new(sample_entries(*count)), today);
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            b.iter(|| black_box(state).month_grid());
        });
    }

    group.finish();
}

fn bench_ledger_build(c: &mut Criterion) {
    let entries = sample_entries(1000);

    c.bench_function("ledger_build_1000", |b| {
        b.iter(|| AvailabilityLedger::new(black_box(entries.clone())));
    });
}

criterion_group!(benches, bench_month_grid, bench_ledger_build);
criterion_main!(benches);
