//! Benchmarks for exhibit extraction.
//!
//! Run with: cargo bench
//!
//! Synthetic pages carry a fixed mix of body text, markers and footnotes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use footnote_exhibits::{extract_pages, sample, ExtractOptions, Page, Span};

/// Builds pages with `notes` cited sentences and matching footnotes each.
fn synthetic_pages(page_count: u32, notes: u32) -> Vec<Page> {
    (1..=page_count)
        .map(|number| {
            let mut page = Page::letter(number);
            for i in 0..notes {
                let label = (number * 100 + i).to_string();
                let y = 80.0 + i as f32 * 14.0;
                page.push(Span::new(
                    format!("Filler words precede claim {} on this line", i),
                    12.0,
                    y,
                ));
                page.push(Span::superscript(label.clone(), 7.0, y));
                page.push(Span::new(". More body text.", 12.0, y));
            }
            for i in 0..notes {
                let label = (number * 100 + i).to_string();
                let y = 600.0 + i as f32 * 11.0;
                page.push(Span::superscript(label, 6.0, y));
                page.push(Span::new(format!(" Exhibit {} of the record.", i), 10.0, y));
            }
            page
        })
        .collect()
}

/// Benchmark page scanning and association at various sizes.
fn bench_extract_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_pages");

    for page_count in [1, 10, 100].iter() {
        let pages = synthetic_pages(*page_count, 8);

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            let options = ExtractOptions::new();
            b.iter(|| extract_pages(black_box(&pages), "bench.pdf", &options));
        });

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            let options = ExtractOptions::new().sequential();
            b.iter(|| extract_pages(black_box(&pages), "bench.pdf", &options));
        });
    }

    group.finish();
}

/// Benchmark the full path from PDF bytes.
fn bench_sample_document(c: &mut Criterion) {
    let data = sample::sample_bytes().unwrap();

    c.bench_function("sample_pdf", |b| {
        b.iter(|| {
            footnote_exhibits::extract_bytes(
                black_box(&data),
                "sample.pdf",
                &ExtractOptions::default(),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_extract_pages, bench_sample_document);
criterion_main!(benches);
