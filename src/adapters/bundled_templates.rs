use std::path::{Path, PathBuf};

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::Error;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Name prefix under which the embedded templates are addressable.
pub const BUNDLED_NAMESPACE: &str = "@SimplePagination/";

/// Bundled template used when no default is configured.
pub const DEFAULT_TEMPLATE: &str = "@SimplePagination/default.html";

/// Source of an embedded template, looked up by its namespaced name.
pub fn bundled_template(name: &str) -> Option<&'static str> {
    let path = name.strip_prefix(BUNDLED_NAMESPACE)?;
    TEMPLATES_DIR.get_file(path)?.contents_utf8()
}

/// Namespaced names of every embedded template, sorted.
pub fn bundled_template_names() -> Vec<String> {
    let mut names = Vec::new();
    collect_names(&TEMPLATES_DIR, TEMPLATES_DIR.path(), &mut names);
    names.sort();
    names
}

fn collect_names(dir: &Dir, base_path: &Path, names: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Ok(relative_path) = file.path().strip_prefix(base_path) {
                    names.push(format!("{}{}", BUNDLED_NAMESPACE, relative_path.to_string_lossy()));
                }
            }
            DirEntry::Dir(subdir) => {
                collect_names(subdir, base_path, names);
            }
        }
    }
}

/// Template loader serving the bundled namespace from the binary and every
/// other name from `fallback_dir`, when one is given.
///
/// A name under the bundled namespace that is not embedded resolves to
/// `Ok(None)`, so minijinja reports it as template-not-found.
pub fn bundled_loader(
    fallback_dir: Option<PathBuf>,
) -> impl Fn(&str) -> Result<Option<String>, Error> + Send + Sync + 'static {
    let fallback = fallback_dir.map(minijinja::path_loader);
    move |name: &str| {
        if name.starts_with(BUNDLED_NAMESPACE) {
            log::trace!("loading bundled pagination template '{}'", name);
            return Ok(bundled_template(name).map(str::to_string));
        }
        match &fallback {
            Some(load) => load(name),
            None => Ok(None),
        }
    }
}
