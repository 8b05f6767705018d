#![allow(clippy::unwrap_used, reason = "benchmark")]

use criterion::{Criterion, criterion_group, criterion_main};
use css_cascade::PropertyParsers;
use css_values_units::ResourceCache;
use std::hint::black_box;
use style_engine::{Element, StyleTree};

/// A document-like tree: a body with sections of styled paragraphs.
fn build_document(sections: usize, paragraphs: usize) -> Element {
    let mut body = Element::with_style(
        "body",
        "font: 16px/1.4 serif; margin: 8px; color: #333; background: white",
    );
    for _ in 0..sections {
        let mut section = Element::with_style(
            "section",
            "padding: 1em 2em; border: 1px solid #ccc; border-radius: 4px",
        );
        for index in 0..paragraphs {
            let style = if index % 2 == 0 {
                "font-size: 110%; text-indent: 2em; line-height: 1.5"
            } else {
                "float: left; width: 50%; outline: thin dotted; list-style: square inside"
            };
            section.push_child(Element::with_style("p", style).with_child("Lorem ipsum"));
        }
        body.push_child(section);
    }
    body
}

fn bench_compute_tree(criterion: &mut Criterion) {
    let registry = PropertyParsers::build();
    let resources = ResourceCache::default();
    criterion.bench_function("style_engine_compute_small_document", |bencher| {
        bencher.iter(|| {
            let mut tree = StyleTree::new(build_document(10, 20), &registry);
            let count = tree.compute(&resources).unwrap();
            black_box(count);
        });
    });
}

criterion_group!(style_benches, bench_compute_tree);
criterion_main!(style_benches);
