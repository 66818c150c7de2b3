use criterion::{Criterion, criterion_group, criterion_main};
use markdown_toc_engine::{NumberingOptions, renumber};

fn generate_document(sections: usize) -> String {
    let mut content = String::from("# Title\n\n<!-- toc -->\n<!-- tocstop -->\n\n");
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\nParagraph text.\n\n"));
        content.push_str("### Details\n\n```rust\n## not a heading\n```\n\n");
        content.push_str("#### Deeper\n\n- Bullet point\n\n");
    }
    content
}

fn bench_renumber(c: &mut Criterion) {
    let mut group = c.benchmark_group("renumber");
    group.sample_size(10);

    let options = NumberingOptions::default();
    for sections in [10, 1000] {
        let content = generate_document(sections);
        group.bench_function(format!("sections_{sections}"), |b| {
            b.iter(|| {
                let output = renumber(std::hint::black_box(&content), &options);
                std::hint::black_box(output);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_renumber);
criterion_main!(benches);
