pub mod bundled_templates;
pub(crate) mod helper;
pub mod minijinja_engine;

pub use bundled_templates::{
    BUNDLED_NAMESPACE, DEFAULT_TEMPLATE, bundled_loader, bundled_template, bundled_template_names,
};
pub use helper::SIMPLE_PAGINATION_RENDER;
pub use minijinja_engine::build_template_environment;
