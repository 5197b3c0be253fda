use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roster::{Draft, UserStore};
use serde_json::json;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Duration;

fn bench_path(name: &str, size: usize) -> PathBuf {
    std::env::temp_dir().join(format!("roster_bench_{}_{}.json", name, size))
}

fn numbered(id: u64) -> Draft {
    serde_json::from_value(json!({
        "id": id, "name": format!("User {id}"), "age": 20 + id % 60,
        "email": format!("u{id}@example.com"), "phone": format!("+99890000{id:04}"),
        "city": "Tashkent", "jobTitle": "Engineer",
    }))
    .unwrap()
}

fn bench_insert_get_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_get_remove");
    group.sample_size(20);
    for size in [10, 100] {
        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            let path = bench_path("igr", size);
            let _ = std::fs::remove_file(&path);
            let store = UserStore::open(&path);
            b.iter(|| {
                for i in 0..size {
                    let _ = store.insert(numbered(i as u64 + 1)).unwrap();
                }
                for i in 0..size {
                    black_box(store.get(i as u64 + 1));
                }
                for i in 0..size {
                    let _ = store.remove(i as u64 + 1);
                }
            });
            let _ = std::fs::remove_file(&path);
        });
    }
}

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(8));
    for size in [100, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            let path = bench_path("flush", size);
            let _ = std::fs::remove_file(&path);
            let store = UserStore::open(&path);
            for i in 0..size {
                store.insert(numbered(i as u64 + 1)).unwrap();
            }
            b.iter(|| store.flush().unwrap());
            let _ = std::fs::remove_file(&path);
        });
    }
}

fn bench_update_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_field");
    group.sample_size(20);
    for size in [10, 100] {
        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            let path = bench_path("update", size);
            let _ = std::fs::remove_file(&path);
            let store = UserStore::open(&path);
            for i in 0..size {
                store.insert(numbered(i as u64 + 1)).unwrap();
            }
            let city = json!("Samarkand");
            b.iter(|| {
                for i in 0..size {
                    store.update_field(i as u64 + 1, "city", &city).unwrap();
                }
            });
            let _ = std::fs::remove_file(&path);
        });
    }
}

criterion_group!(benches, bench_insert_get_remove, bench_flush, bench_update_field);
criterion_main!(benches);
