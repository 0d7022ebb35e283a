//! Tagged-string micro-benchmarks
//!
//! Measures the editing and run-building operations an editor performs on
//! every keystroke, over rules text of increasing length.

use cardtext::tagged::{
    Movement, cursor_to_index, index_to_cursor, simplify_tagged, tagged_substr_replace, untag,
    verify_tagged,
};
use cardtext::{ComputedTextStyle, Context, FontSpec, TextElements};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const PARAGRAPH: &str = "<sym>2W</sym>, <sym>T</sym>: Target creature gets \
<param>+2/+2</param> until end of turn. <i>(It gets <b>bigger</b>.)</i>\n\
<kw-a><atom-kwpph>Flying</atom-kwpph><sep-soft>, </sep-soft></kw-a>";

fn rules_text(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn bench_untag(c: &mut Criterion) {
    let mut group = c.benchmark_group("untag");
    for n in [1, 10, 100] {
        let text = rules_text(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| untag(black_box(text)))
        });
    }
    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagged_substr_replace");
    for n in [1, 10, 100] {
        let text = rules_text(n);
        let middle = untag(&text).chars().count() / 2;
        group.bench_with_input(BenchmarkId::new("insert", n), &text, |b, text| {
            b.iter(|| tagged_substr_replace(black_box(text), middle, middle, "x"))
        });
        group.bench_with_input(BenchmarkId::new("delete", n), &text, |b, text| {
            b.iter(|| tagged_substr_replace(black_box(text), middle - 5, middle + 5, ""))
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let text = rules_text(10);
    c.bench_function("verify_tagged", |b| b.iter(|| verify_tagged(black_box(&text))));
    c.bench_function("simplify_tagged", |b| {
        b.iter(|| simplify_tagged(black_box(&text)))
    });
}

fn bench_cursor(c: &mut Criterion) {
    let text = rules_text(10);
    let end = untag(&text).chars().count();
    c.bench_function("cursor_round_trip", |b| {
        b.iter(|| {
            for cursor in (0..end).step_by(7) {
                let index = cursor_to_index(&text, cursor, Movement::Mid);
                black_box(index_to_cursor(&text, index, Movement::Mid));
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let style = ComputedTextStyle::new(FontSpec::new("MPlantin", 9.0));
    let ctx = Context::new();
    let mut group = c.benchmark_group("build_elements");
    for n in [1, 10, 100] {
        let text = rules_text(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| TextElements::from_tagged(black_box(text), &style, &ctx))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_untag,
    bench_replace,
    bench_normalize,
    bench_cursor,
    bench_build
);
criterion_main!(benches);
