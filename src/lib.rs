//! simple-pagination: a `simple_pagination_render` helper for minijinja.
//!
//! The helper renders a pagination template with a fixed variable bag
//! (`pagination`, `routeName`, `pageParameterName`, `queryParameters`).
//! Page arithmetic belongs to the caller's pagination library and URL
//! generation to the host's `path` function; this crate only selects the
//! template and dispatches the render.
//!
//! ```
//! use minijinja::{Environment, context};
//! use simple_pagination::PaginationExtension;
//!
//! let mut env = Environment::new();
//! env.add_template("pager.html", "{{ routeName }}?{{ pageParameterName }}={{ pagination.current }}")
//!     .unwrap();
//! PaginationExtension::new("pager.html").register(&mut env);
//!
//! let out = env
//!     .render_str(
//!         "{{ simple_pagination_render(pagination, 'article_list') }}",
//!         context! { pagination => context! { current => 2 } },
//!     )
//!     .unwrap();
//! assert_eq!(out, "article_list?page=2");
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{
    BUNDLED_NAMESPACE, DEFAULT_TEMPLATE, SIMPLE_PAGINATION_RENDER, build_template_environment,
    bundled_loader, bundled_template, bundled_template_names,
};
pub use app::{PaginationExtension, PaginationRenderer, load_config, load_config_or_default};
pub use domain::{
    AppError, ConfigError, DEFAULT_PAGE_PARAMETER_NAME, PaginationConfig, PaginationSnapshot,
    PaginationView, RenderParameters, RenderRequest, parse_config_content,
};
pub use ports::TemplateEngine;
