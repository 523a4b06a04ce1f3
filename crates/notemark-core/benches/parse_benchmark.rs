//! Benchmarks comparing notemark parsing vs pulldown-cmark (Markdown)
//!
//! Run with: cargo bench -p notemark-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notemark_core::{parse_inlines, restore, tokenize, Parser, Profile};
use pulldown_cmark::{Options, Parser as MdParser};

/// A typical note body. Both parsers accept it unchanged.
const NOTE_SAMPLE: &str = r#"# Weekly review

This is a paragraph with *emphasis*, **strong text**, and `inline code`.
It links to [the tracker](https://example.com/issues) and ~~nothing else~~.

## Done

1. Shipped the importer
2. Fixed the **flaky** sync test
3. Wrote the migration notes

## Next

- Profile the renderer
- Review _open_ pull requests
* Plan the offsite

> Remember the retro action items.
> > Especially the one about on-call handoffs.

---

```rust
fn fibonacci(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}
```

![diagram](diagram.png)

***

End of note.
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.throughput(Throughput::Bytes(NOTE_SAMPLE.len() as u64));

    group.bench_function("tokenize", |b| {
        b.iter(|| black_box(tokenize(black_box(NOTE_SAMPLE)).len()))
    });

    let parser = Parser::new(Profile::Full);
    group.bench_function("notemark", |b| {
        b.iter(|| {
            let blocks = parser.parse(black_box(NOTE_SAMPLE)).unwrap();
            black_box(blocks.len())
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(NOTE_SAMPLE), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let parser = Parser::new(Profile::Full);
    let blocks = parser.parse(NOTE_SAMPLE).unwrap();

    c.bench_function("restore", |b| b.iter(|| black_box(restore(black_box(&blocks)))));
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let parser = Parser::new(Profile::Full);

    for size in [1, 5, 10, 20].iter() {
        let content: String = NOTE_SAMPLE.repeat(*size);

        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("notemark", size), &content, |b, content| {
            b.iter(|| {
                let blocks = parser.parse(black_box(content)).unwrap();
                black_box(blocks.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("markdown", size), &content, |b, content| {
            b.iter(|| {
                let parser = MdParser::new_ext(black_box(content), Options::all());
                let events: Vec<_> = parser.collect();
                black_box(events.len())
            })
        });
    }

    group.finish();
}

fn bench_inline_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let inline =
        "This has *emphasis*, **strong**, `code`, [link](https://example.com), and ~~strike~~.";
    let tokens = tokenize(inline);

    group.bench_function("notemark_inline", |b| {
        b.iter(|| black_box(parse_inlines(black_box(&tokens)).len()))
    });

    group.bench_function("markdown_inline", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(inline), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

/// Nested quotes are the one construct whose cost grows with depth.
fn bench_nested_quotes(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_quotes");
    let parser = Parser::new(Profile::Full);

    for depth in [4usize, 16, 64] {
        let line = format!("{}deep", "> ".repeat(depth));
        let content = vec![line; 32].join("\n");

        group.bench_with_input(BenchmarkId::from_parameter(depth), &content, |b, content| {
            b.iter(|| black_box(parser.parse(black_box(content)).unwrap().len()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_round_trip,
    bench_scaling,
    bench_inline_parsing,
    bench_nested_quotes
);
criterion_main!(benches);
