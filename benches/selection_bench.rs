use criterion::{Criterion, criterion_group, criterion_main};
use filter_chart::api::{FilterChart, FilterChartConfig, SelectionController};
use filter_chart::core::{DatasetStore, Item};
use filter_chart::render::NullRenderer;
use std::hint::black_box;

fn generated_store(count: usize) -> DatasetStore {
    let items = (0..count)
        .map(|i| {
            Item::new(format!("d{i}"), (i % 97) as f64, format!("region-{}", i % 50))
                .expect("valid generated item")
        })
        .collect();
    DatasetStore::load(items).expect("valid generated store")
}

fn bench_visible_items_10k(c: &mut Criterion) {
    let mut controller = SelectionController::new(generated_store(10_000));
    for i in (0..10_000).step_by(3) {
        controller.toggle(&format!("d{i}"));
    }

    c.bench_function("visible_items_10k", |b| {
        b.iter(|| {
            let _ = black_box(controller.visible_items());
        })
    });
}

fn bench_toggle_redraw_1k(c: &mut Criterion) {
    let config = FilterChartConfig::new(1600, 900);
    let mut chart =
        FilterChart::new(NullRenderer::default(), config, generated_store(1_000)).expect("chart");

    c.bench_function("toggle_redraw_1k", |b| {
        b.iter(|| {
            chart.toggle(black_box("d500"));
        })
    });
}

criterion_group!(benches, bench_visible_items_10k, bench_toggle_redraw_1k);
criterion_main!(benches);
