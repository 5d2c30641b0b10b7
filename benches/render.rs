//! Render benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use videotex_term::app::Config;
use videotex_term::core::{Cell, Color};

fn bench_render_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let config = Config::default();

    // Alternate text and mosaic rows, with a masked zone on every row
    let mut page = config.page();
    for row in 1..config.grid.rows {
        for col in 0..config.grid.cols {
            let code = 0x20 + ((row * config.grid.cols + col) % 0x5f) as u8;
            let cell = if row % 2 == 0 {
                Cell::mosaic(code).with_colors(Color::Yellow, Color::Blue)
            } else {
                Cell::text(code)
            };
            page.set_cell(col, row, cell);
        }
        page.set_cell(30, row, Cell::delimiter().with_mask(true));
    }

    let renderer = config.renderer();
    let font = config.font();
    let mut surface = config.surface();

    group.bench_function("full_page", |b| {
        b.iter(|| {
            renderer.render(&mut page, &mut surface, &font);
            black_box(surface.data().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render_page);
criterion_main!(benches);
