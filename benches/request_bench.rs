use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use contentstack_management::{model_from_str, Auth, ClientBuilder, EntriesResponse, RequestOptions};
use serde_json::json;

fn bench_request_building(c: &mut Criterion) {
    let client = ClientBuilder::new()
        .auth(Auth::authtoken("bench-token"))
        .build()
        .unwrap();
    let stack = client.stack("blt-bench").with_branch("main");

    c.bench_function("entry_find", |b| {
        let entries = stack.content_type(Some("blog")).entry(None);
        b.iter(|| black_box(entries.find().unwrap().into_request()))
    });

    let mut group = c.benchmark_group("query_params");
    for count in [1usize, 10, 50] {
        let mut entries = stack.content_type(Some("blog")).entry(None);
        for i in 0..count {
            let _ = entries.add_param(&format!("param_{}", i), "value with spaces").unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| black_box(entries.find().unwrap().into_request().query_string()))
        });
    }
    group.finish();
}

fn bench_model_decoding(c: &mut Criterion) {
    let entries: Vec<_> = (0..100)
        .map(|i| {
            json!({
                "uid": format!("blt{}", i),
                "title": format!("Entry {}", i),
                "locale": "en-us",
                "_version": 1,
                "tags": ["bench"],
                "body": "<p>lorem ipsum</p>",
                "created_at": "2024-01-01T00:00:00.000Z"
            })
        })
        .collect();
    let text = json!({"entries": entries, "count": 100}).to_string();

    c.bench_function("decode_100_entries", |b| {
        b.iter(|| {
            let decoded: EntriesResponse = model_from_str(black_box(&text)).unwrap();
            black_box(decoded)
        })
    });
}

criterion_group!(benches, bench_request_building, bench_model_decoding);
criterion_main!(benches);
