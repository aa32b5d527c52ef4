use criterion::{Criterion, criterion_group, criterion_main};
use logbridge::category::{is_accepted, resolve_alias};
use logbridge::scope::{ScopeProvider, ThreadScopeProvider, render};
use logbridge::{LogLevel, LoggerAdapter, MemoryEngine, Settings};
use std::hint::black_box;
use std::sync::Arc;

fn bench_category_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("category");

    let patterns = ["Infra.*", "*Controller", "App.*", "Exact.Name"];
    group.bench_function("is_accepted", |b| {
        b.iter(|| is_accepted(black_box("App.Orders.Checkout"), black_box(&patterns)));
    });

    let aliases = [("infra.*", "Infra"), ("APP.*", "OrdersService")];
    group.bench_function("resolve_alias", |b| {
        b.iter(|| resolve_alias(black_box("App.Orders.Checkout"), black_box(&aliases)));
    });

    group.finish();
}

fn bench_scope_render(c: &mut Criterion) {
    let provider = ThreadScopeProvider::new();
    let _request = provider.push(Box::new("req-1"));
    let _user = provider.push(Box::new("user-42"));
    let mut buf = String::with_capacity(128);

    c.bench_function("scope::render", |b| {
        b.iter(|| {
            buf.clear();
            render(black_box(&provider), &mut buf)
        });
    });
}

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("LoggerAdapter::log");

    let engine = Arc::new(MemoryEngine::new());
    let logger = LoggerAdapter::new(
        "App.Orders",
        Arc::new(
            Settings::new()
                .min_level(LogLevel::Information)
                .include_scopes(true),
        ),
        Arc::new(ThreadScopeProvider::new()),
        engine.clone(),
    );

    group.bench_function("filtered", |b| {
        b.iter(|| logger.debug(black_box("not written")));
    });

    let _scope = logger.begin_scope("req-1");
    group.bench_function("scoped", |b| {
        b.iter(|| {
            let result = logger.info(black_box("order placed"));
            engine.clear();
            result
        });
    });

    group.finish();
}

criterion_group!(benches, bench_category_matching, bench_scope_render, bench_log);
criterion_main!(benches);
