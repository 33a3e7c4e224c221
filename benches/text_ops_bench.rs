use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use textprep::{count_entities, find_marker_span, redact_usernames, sentence_accuracy};

const TEST_SIZES: &[(usize, &str)] = &[
    (1_000, "small"),
    (10_000, "medium"),
    (100_000, "large"),
];

fn generate_test_text(char_count: usize) -> String {
    let base_sentences = [
        "Hello world.",
        "Dr. Watson met @holmes_221b in London.",
        "The U.S.A. and Mexico share a border.",
        "How are you doing today, @reader?",
        "Project Gutenberg texts are in the public domain.",
    ];

    let mut text = String::from("The Project Gutenberg eBook\n");
    let mut sentence_idx = 0;

    while text.len() < char_count / 2 {
        text.push_str(base_sentences[sentence_idx % base_sentences.len()]);
        text.push(' ');
        sentence_idx += 1;
    }
    text.push_str("\n*** START OF THE PROJECT GUTENBERG EBOOK BENCHMARK ***\n");
    while text.len() < char_count {
        text.push_str(base_sentences[sentence_idx % base_sentences.len()]);
        text.push(' ');
        sentence_idx += 1;
    }

    text
}

fn bench_text_operations(c: &mut Criterion) {
    for &(size, size_name) in TEST_SIZES {
        let test_text = generate_test_text(size);

        let mut group = c.benchmark_group(format!("text_ops_{size_name}"));
        group.throughput(Throughput::Bytes(test_text.len() as u64));

        group.bench_function("find_marker_span", |b| {
            b.iter(|| find_marker_span(black_box(&test_text)).unwrap())
        });

        group.bench_function("count_entities", |b| {
            b.iter(|| count_entities(black_box(&test_text)))
        });

        group.bench_function("redact_usernames", |b| {
            b.iter(|| redact_usernames(black_box(&test_text)))
        });

        group.finish();
    }
}

fn bench_sentence_accuracy(c: &mut Criterion) {
    let reference: Vec<String> = (0..10_000).map(|i| format!("Sentence number {}.", i % 2_500)).collect();
    let mut hypothesis = reference.clone();
    hypothesis.reverse();
    hypothesis.truncate(9_000);

    c.bench_function("sentence_accuracy_10k", |b| {
        b.iter(|| sentence_accuracy(black_box(reference.as_slice()), black_box(hypothesis.as_slice())).unwrap())
    });
}

criterion_group!(benches, bench_text_operations, bench_sentence_accuracy);
criterion_main!(benches);
