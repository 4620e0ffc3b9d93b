use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup::{CleanupConfig, normalize};

const SMALL_BLOCKS: usize = 16;
const LARGE_BLOCKS: usize = 2_000;

fn make_editor_output(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 96);
    for i in 0..blocks {
        match i % 4 {
            0 => out.push_str("<P>Some <B>bold</B> text<BR></P>"),
            1 => out.push_str("<div><span class=\"Apple-style-span\">engine</span> words</div>"),
            2 => out.push_str("<ul><li>one</li><li><I>two</I></li></ul>"),
            _ => out.push_str("<p><IMG SRC=pic.png></p><p>&nbsp;</p>"),
        }
    }
    out
}

fn bench_normalize_small(c: &mut Criterion) {
    let input = make_editor_output(SMALL_BLOCKS);
    let config = CleanupConfig::default();
    c.bench_function("bench_normalize_small", |b| {
        b.iter(|| black_box(normalize(black_box(&input), &config)));
    });
}

fn bench_normalize_large(c: &mut Criterion) {
    let input = make_editor_output(LARGE_BLOCKS);
    let config = CleanupConfig::default();
    c.bench_function("bench_normalize_large", |b| {
        b.iter(|| black_box(normalize(black_box(&input), &config)));
    });
}

fn bench_normalize_canonical(c: &mut Criterion) {
    let config = CleanupConfig::default();
    let input = normalize(&make_editor_output(LARGE_BLOCKS), &config);
    c.bench_function("bench_normalize_canonical", |b| {
        b.iter(|| black_box(normalize(black_box(&input), &config)));
    });
}

criterion_group!(
    benches,
    bench_normalize_small,
    bench_normalize_large,
    bench_normalize_canonical
);
criterion_main!(benches);
