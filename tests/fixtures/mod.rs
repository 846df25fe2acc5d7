//! Shared setup for facade tests
#![allow(dead_code)]

use std::sync::Arc;

use lightning_logger::internal::backend::mock::MockBackend;
use lightning_logger::internal::console::mock::RecordingConsole;
use lightning_logger::internal::facade::Registry;
use lightning_logger::internal::page::Page;

pub const DEFAULT_PAGE: &str = "https://acme.example.com/lightning/n/Orders?c__tab=open";

/// A registry wired to mocks, with handles kept for assertions
pub struct Harness {
    pub registry: Registry,
    pub backend: MockBackend,
    pub console: RecordingConsole,
    pub page: Arc<Page>,
}

pub fn harness(backend: MockBackend) -> Harness {
    harness_at(backend, DEFAULT_PAGE)
}

pub fn harness_at(backend: MockBackend, url: &str) -> Harness {
    let console = RecordingConsole::new();
    let page = Arc::new(Page::parse(url).expect("valid page url"));
    let registry = Registry::new(
        Arc::new(backend.clone()),
        Arc::new(console.clone()),
        page.clone(),
    );

    Harness {
        registry,
        backend,
        console,
        page,
    }
}
