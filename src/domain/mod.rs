pub mod config;
pub mod error;
pub mod pagination;
pub mod render_request;

pub use config::{PaginationConfig, parse_config_content};
pub use error::{AppError, ConfigError};
pub use pagination::{PaginationSnapshot, PaginationView};
pub use render_request::{DEFAULT_PAGE_PARAMETER_NAME, RenderParameters, RenderRequest};
