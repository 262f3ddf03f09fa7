//! Shared fixtures for pagination rendering tests.

use std::fs;
use std::path::Path;

use minijinja::{Environment, Error, Value};
use simple_pagination::{PaginationExtension, PaginationSnapshot, PaginationView, bundled_loader};
use tempfile::TempDir;

/// Stand-in for a host URL generator: `/route?key=value&...` with sorted keys.
#[allow(dead_code)]
pub fn path(route: String, parameters: Value) -> Result<Value, Error> {
    let mut query = Vec::new();
    for key in parameters.try_iter()? {
        let value = parameters.get_item(&key)?;
        query.push(format!("{}={}", key, value));
    }
    let url = if query.is_empty() {
        format!("/{}", route)
    } else {
        format!("/{}?{}", route, query.join("&"))
    };
    Ok(Value::from_safe_string(url))
}

/// Fixed page position for driving the bundled template.
#[allow(dead_code)]
pub struct Page {
    pub current: u64,
    pub pages: u64,
}

impl PaginationView for Page {
    fn current_page_number(&self) -> u64 {
        self.current
    }

    fn total_number_of_pages(&self) -> u64 {
        self.pages
    }

    fn total_number_of_items(&self) -> u64 {
        self.pages * 10
    }

    fn items_per_page(&self) -> u64 {
        10
    }

    fn pages_in_range(&self) -> Vec<u64> {
        (1..=self.pages).collect()
    }

    fn first_page_number(&self) -> u64 {
        1
    }

    fn last_page_number(&self) -> u64 {
        self.pages
    }

    fn previous_page_number(&self) -> Option<u64> {
        (self.current > 1).then(|| self.current - 1)
    }

    fn next_page_number(&self) -> Option<u64> {
        (self.current < self.pages).then(|| self.current + 1)
    }
}

#[allow(dead_code)]
pub fn snapshot(current: u64, pages: u64) -> PaginationSnapshot {
    PaginationSnapshot::of(&Page { current, pages })
}

/// Temporary template directory plus an environment wired to it.
#[allow(dead_code)]
pub struct TemplateFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl TemplateFixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("Failed to create temp template directory") }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a template below the fixture root, creating parent directories.
    pub fn write(&self, name: &str, source: &str) -> &Self {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create template directory");
        }
        fs::write(path, source).expect("Failed to write template");
        self
    }

    /// Environment loading from the fixture root and the bundled namespace,
    /// with the pagination helper and the test `path` function registered.
    pub fn environment(&self, extension: &PaginationExtension) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_loader(bundled_loader(Some(self.root().to_path_buf())));
        env.add_function("path", path);
        extension.register(&mut env);
        env
    }
}
