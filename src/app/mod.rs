pub mod load_config;
pub mod renderer;

pub use load_config::{load_config, load_config_or_default};
pub use renderer::{PaginationExtension, PaginationRenderer};
