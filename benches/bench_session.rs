use criterion::{Criterion, criterion_group, criterion_main};

use cliput_lib::ClipboardSession;
use cliput_lib::backend::MemoryBackend;

fn bench_set_get(c: &mut Criterion) {
    c.bench_function("session_set_get_64", |b| {
        let mut session = ClipboardSession::with_backend(MemoryBackend::new());
        let text = "x".repeat(64);
        b.iter(|| {
            session.set_text(&text).unwrap();
            let _ = session.get_text().unwrap();
        })
    });
}

fn bench_open_close(c: &mut Criterion) {
    c.bench_function("session_open_close", |b| {
        let mut session = ClipboardSession::with_backend(MemoryBackend::new());
        b.iter(|| {
            session.open().unwrap();
            session.close().unwrap();
        })
    });
}

criterion_group!(benches, bench_set_get, bench_open_close);
criterion_main!(benches);
