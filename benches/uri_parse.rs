//! Benchmark for endpoint URI parsing and scheme filtering.
//!
//! Parsing runs on every keystroke inside a URI, so it must stay cheap even
//! for long paths and query strings.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use camel_uri_ls::catalog::{ComponentModel, StaticCatalog};
use camel_uri_ls::completion::{apply_filter, filter_for, generate};
use camel_uri_ls::uri::UriRoot;
use std::hint::black_box;

/// Generate a URI with N path segments and N query parameters.
fn generate_uri(num_segments: usize) -> String {
    let mut uri = String::from("file");
    for i in 0..num_segments {
        uri.push_str(&format!(":segment{}", i));
    }
    uri.push('?');
    for i in 0..num_segments {
        if i > 0 {
            uri.push_str("&amp;");
        }
        uri.push_str(&format!("option{}=value{}", i, i));
    }
    uri
}

/// A catalog roughly the size of the Camel component set.
fn generate_catalog(num_components: usize) -> StaticCatalog {
    StaticCatalog::new((0..num_components).map(|i| {
        ComponentModel::new(format!("component{}", i), format!("Component number {}", i))
    }))
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("uri_parse");

    for num_segments in [1, 10, 100].iter() {
        let uri = generate_uri(*num_segments);
        group.bench_with_input(BenchmarkId::new("parse", num_segments), &uri, |b, uri| {
            b.iter(|| UriRoot::parse(black_box(uri)))
        });
    }

    group.finish();
}

fn benchmark_filtering(c: &mut Criterion) {
    let catalog = generate_catalog(350);
    let root = UriRoot::parse("component12:foo");
    let component = root.component_and_path().component();

    let mut group = c.benchmark_group("scheme_filtering");

    group.bench_function("generate_and_filter", |b| {
        b.iter(|| {
            let candidates = generate(&catalog, component).unwrap_or_default();
            let filter = filter_for(component, black_box(9));
            apply_filter(candidates, filter.as_deref())
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_filtering);
criterion_main!(benches);
