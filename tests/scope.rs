//! Tests for scope stacks and scope rendering.

use logbridge::scope::{ScopeGuard, ScopeProvider, ThreadScopeProvider, render};
use logbridge::{LoggerAdapter, MemoryEngine, Settings};
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;
use std::thread;

fn rendered(provider: &dyn ScopeProvider) -> String {
    let mut buf = String::new();
    render(provider, &mut buf);
    buf
}

#[test]
fn no_scopes_renders_nothing() {
    let provider = ThreadScopeProvider::new();
    let mut buf = String::from("kept");
    assert_eq!(render(&provider, &mut buf), 0);
    assert_eq!(buf, "kept");
}

#[test]
fn single_scope() {
    let provider = ThreadScopeProvider::new();
    let _guard = provider.push(Box::new("req-1"));
    assert_eq!(rendered(&provider), "=> req-1 |");
}

#[test]
fn nested_scopes_render_outermost_first() {
    let provider = ThreadScopeProvider::new();
    let _outer = provider.push(Box::new("req-1"));
    let _inner = provider.push(Box::new("user-42"));
    assert_eq!(rendered(&provider), "=> req-1 => user-42 |");
}

#[test]
fn render_appends_after_existing_content() {
    let provider = ThreadScopeProvider::new();
    let _guard = provider.push(Box::new(7));
    let mut buf = String::from("prefix:");
    let added = render(&provider, &mut buf);
    assert_eq!(buf, "prefix:=> 7 |");
    assert_eq!(added, "=> 7 |".len());
}

struct RequestScope {
    id: u32,
    path: &'static str,
}

impl fmt::Display for RequestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId:{} RequestPath:{}", self.id, self.path)
    }
}

#[test]
fn structured_scope_uses_display_as_a_whole() {
    let provider = ThreadScopeProvider::new();
    let _guard = provider.push(Box::new(RequestScope {
        id: 9,
        path: "/orders",
    }));
    assert_eq!(rendered(&provider), "=> RequestId:9 RequestPath:/orders |");
}

#[test]
fn empty_first_scope_still_counts() {
    let provider = ThreadScopeProvider::new();
    let _a = provider.push(Box::new(""));
    let _b = provider.push(Box::new("b"));
    assert_eq!(rendered(&provider), "=>  => b |");
}

#[test]
fn dropping_guards_pops_scopes() {
    let provider = ThreadScopeProvider::new();
    let outer = provider.push(Box::new("outer"));
    {
        let _inner = provider.push(Box::new("inner"));
        assert_eq!(provider.depth(), 2);
    }
    assert_eq!(rendered(&provider), "=> outer |");
    drop(outer);
    assert_eq!(provider.depth(), 0);
    assert_eq!(rendered(&provider), "");
}

#[test]
fn releasing_all_scopes_leaves_stack_empty() {
    let provider = ThreadScopeProvider::new();
    let guards: Vec<_> = (0..10).map(|i| provider.push(Box::new(i))).collect();
    assert_eq!(provider.depth(), 10);
    drop(guards);
    assert_eq!(provider.depth(), 0);
    assert_eq!(rendered(&provider), "");
}

#[test]
fn out_of_order_release_removes_only_its_own_scope() {
    let provider = ThreadScopeProvider::new();
    let a = provider.push(Box::new("a"));
    let _b = provider.push(Box::new("b"));
    drop(a);
    assert_eq!(rendered(&provider), "=> b |");
}

#[test]
fn scope_released_on_panic() {
    let provider = ThreadScopeProvider::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = provider.push(Box::new("doomed"));
        panic!("boom");
    }));
    assert!(result.is_err());
    assert_eq!(provider.depth(), 0);
}

#[test]
fn providers_do_not_share_stacks() {
    let first = ThreadScopeProvider::new();
    let second = ThreadScopeProvider::new();
    let _guard = first.push(Box::new("mine"));
    assert_eq!(rendered(&second), "");
    assert_eq!(rendered(&first), "=> mine |");
}

#[test]
fn threads_do_not_share_stacks() {
    let provider = ThreadScopeProvider::new();
    let _guard = provider.push(Box::new("main"));

    thread::scope(|s| {
        s.spawn(|| {
            assert_eq!(rendered(&provider), "");
            let _worker = provider.push(Box::new("worker"));
            assert_eq!(rendered(&provider), "=> worker |");
        });
    });

    assert_eq!(rendered(&provider), "=> main |");
}

struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("half")?;
        Err(fmt::Error)
    }
}

#[test]
fn failing_display_keeps_prefix_and_later_scopes() {
    let provider = ThreadScopeProvider::new();
    let _a = provider.push(Box::new(Broken));
    let _b = provider.push(Box::new("b"));
    assert_eq!(rendered(&provider), "=> half => b |");
}

/// Logs when it leaves scope, like a request timer.
struct Timed(Arc<LoggerAdapter>);

impl fmt::Display for Timed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed")
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        self.0.info("request finished").unwrap();
    }
}

#[test]
fn scope_value_that_logs_on_drop() {
    let engine = Arc::new(MemoryEngine::new());
    let logger = Arc::new(LoggerAdapter::new(
        "App.Orders",
        Arc::new(Settings::new().include_scopes(true)),
        Arc::new(ThreadScopeProvider::new()),
        engine.clone(),
    ));

    let _request = logger.begin_scope("req-1");
    {
        let _timer = logger.begin_scope(Timed(logger.clone()));
        logger.info("working").unwrap();
    }

    assert_eq!(
        engine.messages(),
        vec!["=> req-1 => timed |working", "=> req-1 |request finished"]
    );
}

/// Pushes a scope of its own every time it is rendered.
struct Nesting {
    provider: Arc<ThreadScopeProvider>,
    pushed: RefCell<Vec<ScopeGuard>>,
}

impl fmt::Display for Nesting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pushed
            .borrow_mut()
            .push(self.provider.push(Box::new("inner")));
        f.write_str("outer")
    }
}

#[test]
fn display_that_pushes_a_scope() {
    let provider = Arc::new(ThreadScopeProvider::new());
    let guard = provider.push(Box::new(Nesting {
        provider: provider.clone(),
        pushed: RefCell::new(Vec::new()),
    }));

    assert_eq!(rendered(provider.as_ref()), "=> outer |");
    assert_eq!(provider.depth(), 2);
    assert_eq!(rendered(provider.as_ref()), "=> outer => inner |");
    assert_eq!(provider.depth(), 3);

    drop(guard);
    assert_eq!(provider.depth(), 0);
}
