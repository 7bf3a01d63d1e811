pub mod errors;
pub mod types;

pub use errors::{ConfigError, VerdantError};
pub use types::{srgb_to_linear, Color, Viewport};

pub type Result<T> = std::result::Result<T, VerdantError>;
