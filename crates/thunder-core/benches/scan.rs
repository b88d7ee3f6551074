use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thunder_core::{advance, compute_layout, render, LoadingStyle, RecordingCanvas, RevealWindow, SizeClass};
use thunder_graphics::{Density, EdgeInsets, Size};

fn bench_compute_layout(c: &mut Criterion) {
    c.bench_function("compute_layout/large", |b| {
        b.iter(|| {
            compute_layout(
                black_box(SizeClass::Large),
                Density::default(),
                Size::new(100.0, 100.0),
                EdgeInsets::uniform(4.0),
            )
        })
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    c.bench_function("advance/full_cycle", |b| {
        b.iter(|| {
            let mut window = RevealWindow::initial();
            for _ in 0..24 {
                let (next, _) = advance(window, black_box(5.0), 60.0);
                window = next;
            }
            window
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let layout = compute_layout(
        SizeClass::Large,
        Density::default(),
        Size::new(100.0, 100.0),
        EdgeInsets::ZERO,
    )
    .unwrap();
    let style = LoadingStyle::default();
    let window = RevealWindow {
        top: 10.0,
        bottom: 40.0,
        growing: true,
    };
    c.bench_function("render/recorded_frame", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            render(black_box(&layout), window, &style, &mut canvas);
            canvas.into_operations()
        })
    });
}

criterion_group!(benches, bench_compute_layout, bench_full_cycle, bench_render_frame);
criterion_main!(benches);
