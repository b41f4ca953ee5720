// Benchmark for grid generation and slot queries
// Measures month grid building and a full week-view sweep of slot lookups

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_calendar_core::models::calendar::TimeSlot;
use rust_calendar_core::models::event::Event;
use rust_calendar_core::utils::date::week_days;
use rust_calendar_core::{build_day_slots, build_month_grid, EventStore};

fn seeded_store(count: usize) -> EventStore {
    let mut store = EventStore::new();
    let origin = NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    for i in 0..count {
        let start = origin + Duration::minutes(37 * i as i64);
        let draft = Event::builder()
            .title(format!("Event {i}"))
            .start(start)
            .end(start + Duration::minutes(45))
            .build();
        store.add(draft).expect("seed events are valid");
    }
    store
}

fn bench_month_grid(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    c.bench_function("build_month_grid", |b| {
        b.iter(|| build_month_grid(black_box(reference)))
    });
}

fn bench_week_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_slot_sweep");
    let week = week_days(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
        .expect("week inside the date range");
    let slots: Vec<TimeSlot> = build_day_slots();

    for count in [10, 100, 1000].iter() {
        let store = seeded_store(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let mut hits = 0;
                for date in week.iter() {
                    for slot in slots.iter() {
                        hits += store.events_in_slot(black_box(*date), *slot).len();
                    }
                }
                hits
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_month_grid, bench_week_sweep);
criterion_main!(benches);
