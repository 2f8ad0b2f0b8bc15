use criterion::{Criterion, criterion_group, criterion_main};
use iniloom_engine::Document;

fn generate_ini_content(sections: usize) -> String {
    let mut content = String::from("; generated fixture\n\n");
    for section in 0..sections {
        content.push_str(&format!("[section{section}]\n"));
        content.push_str("; comment line\n");
        content.push_str("name=value\n");
        content.push_str("list=a,b,c,d\n");
        content.push_str("url=http://example.com/?q=1&r=2\n");
        content.push('\n');
    }
    content
}

fn bench_parse_and_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_ini_content(1000);
    group.bench_function("parse", |b| {
        b.iter(|| Document::parse_str(std::hint::black_box(&content)));
    });

    let doc = Document::parse_str(&content);
    group.bench_function("serialize", |b| {
        b.iter(|| std::hint::black_box(&doc).to_text());
    });

    group.bench_function("has_value", |b| {
        b.iter(|| std::hint::black_box(&doc).has_value("section999", "list", "d"));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_and_serialize);
criterion_main!(benches);
