#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: urlkit vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Rust url crate
use url::Url as UrlCrate;

use urlkit::{UrlBuilder, UrlQuery, UrlTokenizer};

const INPUTS: [&str; 6] = [
    "http://example.com/",
    "https://www.example.com:8080/path/to/resource?query=value&key=data",
    "http://192.168.1.1:3000/api",
    "https://account.blob.core.windows.net/container/blob.txt?sv=2020-08-04&sig=abc",
    "https://github.com/rust-lang/rust.git",
    "http://127.0.0.1:10000/devstoreaccount1/container?restype=container",
];

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "http://example.com/";

    group.bench_function("urlkit", |b| {
        b.iter(|| UrlBuilder::parse(black_box(input)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");
    let input = "https://secure.example.com:8080/path/to/resource?query=value&key=data";

    group.bench_function("urlkit", |b| {
        b.iter(|| UrlBuilder::parse(black_box(input)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_round_trip_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    group.bench_function("urlkit", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(UrlBuilder::parse(black_box(input)).to_string());
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(UrlCrate::parse(black_box(input)).unwrap().to_string());
            }
        });
    });

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(UrlTokenizer::new(black_box(input)).count());
            }
        });
    });
}

fn bench_setters_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("setters");
    let input = "https://www.example.com:8080/path?query=value";

    group.bench_function("urlkit", |b| {
        b.iter(|| {
            let mut url = UrlBuilder::parse(input);
            url.set_host(black_box("other.example.com"))
                .set_port(black_box(9090u16))
                .append_path(black_box("child"))
                .set_query_parameter("key", black_box("data"));
            black_box(url.to_string())
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(input).unwrap();
            url.set_host(Some(black_box("other.example.com"))).unwrap();
            url.set_port(Some(black_box(9090))).unwrap();
            url.path_segments_mut().unwrap().push(black_box("child"));
            url.query_pairs_mut().append_pair("key", black_box("data"));
            black_box(url.to_string())
        });
    });

    group.finish();
}

fn bench_query_parse(c: &mut Criterion) {
    let input = "a=1&b=2&c=&d==&e=5&f=6&g=7&h=8";
    c.bench_function("query_parse", |b| {
        b.iter(|| black_box(UrlQuery::parse(black_box(input)).to_string()));
    });
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_round_trip_all,
    bench_tokenize,
    bench_setters_all,
    bench_query_parse,
);
criterion_main!(benches);
