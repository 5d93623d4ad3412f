//! Locator construction and dispatch benchmarks.
//!
//! Run with: cargo bench --bench locators
//! Results saved to: target/criterion/

use std::hint::black_box;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::Value;
use tokio::runtime::Runtime;

use ng_locators::{By, ElementId, LocatorDriver, NgBy, Result, ScriptSource};

// ============================================================================
// Null Driver
// ============================================================================

/// Returns a fixed number of freshly generated elements.
struct NullDriver {
    matches: usize,
}

#[async_trait]
impl LocatorDriver for NullDriver {
    async fn find_elements_by_script(
        &self,
        _script: &ScriptSource,
        _args: &[Value],
        _scope: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        Ok((0..self.matches).map(|_| ElementId::generate()).collect())
    }

    async fn find_elements(&self, _by: &By, _scope: Option<&ElementId>) -> Result<Vec<ElementId>> {
        Ok(Vec::new())
    }
}

// ============================================================================
// Benchmark: Construction
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let by = NgBy::new();
    let mut group = c.benchmark_group("construction");

    group.bench_function("registry_new", |b| b.iter(NgBy::new));

    group.bench_function("binding", |b| {
        b.iter(|| black_box(by.binding(black_box("{{status}}"))))
    });

    group.bench_function("repeater_cell", |b| {
        b.iter(|| {
            by.repeater(black_box("cat in pets"))
                .row(black_box(3))
                .and_then(|row| row.column(black_box("{{cat.name}}")))
        })
    });

    group.bench_function("label", |b| {
        let cell = by
            .repeater("cat in pets")
            .column("{{cat.name}}")
            .and_then(|column| column.row(3))
            .expect("valid chain");
        b.iter(|| black_box(cell.label()))
    });

    group.finish();
}

// ============================================================================
// Benchmark: Dispatch
// ============================================================================

const MATCH_COUNTS: &[usize] = &[1, 100];

fn bench_dispatch(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let by = NgBy::new();
    let locator = by.model("user.name");

    let mut group = c.benchmark_group("dispatch");
    for &matches in MATCH_COUNTS {
        let driver = NullDriver { matches };
        group.bench_with_input(BenchmarkId::new("find_elements", matches), &matches, |b, _| {
            b.to_async(&rt)
                .iter(|| async { locator.find_elements(&driver, None).await })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_dispatch);
criterion_main!(benches);
