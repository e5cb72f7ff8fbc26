// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for presentation navigation.
//!
//! Measures the performance of:
//! - Raw cursor stepping across pages and through the gallery
//! - Session navigation, including the auto-advance lease bookkeeping
//! - Elapsed time computation used by the counters page

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use story_deck::domain::navigation::PresentationCursor;
use story_deck::presentation::{Elapsed, Session};
use story_deck::story::Story;

/// Benchmark cursor stepping.
///
/// A full pass walks to the gallery and around it once.
fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_navigation");

    group.bench_function("advance_full_pass", |b| {
        b.iter(|| {
            let mut cursor = PresentationCursor::new(4, 3, 8).unwrap();
            for _ in 0..11 {
                black_box(cursor.advance());
            }
            black_box(cursor.selected_image());
        });
    });

    group.bench_function("retreat_wraps", |b| {
        let mut cursor = PresentationCursor::new(4, 3, 8).unwrap();
        cursor.go_to_page(3);
        b.iter(|| {
            black_box(cursor.retreat());
        });
    });

    group.finish();
}

/// Benchmark session navigation with timer renewal.
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_navigation");
    let story = Story::default();

    group.bench_function("session_open", |b| {
        b.iter(|| black_box(Session::new(black_box(&story)).unwrap()));
    });

    group.bench_function("session_auto_advance", |b| {
        let mut session = Session::new(&story).unwrap();
        session.go_to_page(3);
        b.iter(|| {
            let epoch = session.auto_advance_epoch().unwrap();
            black_box(session.auto_advance(epoch));
        });
    });

    group.finish();
}

/// Benchmark the counters' elapsed time computation.
fn bench_elapsed(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_navigation");
    let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 4, 1, 12, 30, 15).unwrap();

    group.bench_function("elapsed_since", |b| {
        b.iter(|| black_box(Elapsed::since(black_box(start), black_box(now))));
    });

    group.finish();
}

criterion_group!(benches, bench_cursor, bench_session, bench_elapsed);
criterion_main!(benches);
