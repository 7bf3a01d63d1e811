use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VerdantError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("scene.sphere_radius out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: scene.sphere_radius out of range"
        );
    }

    #[test]
    fn verdant_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: VerdantError = config_err.into();
        assert!(matches!(err, VerdantError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn verdant_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VerdantError = io_err.into();
        assert!(matches!(err, VerdantError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn verdant_error_other_variants() {
        let err = VerdantError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = VerdantError::Window("creation failed".into());
        assert_eq!(err.to_string(), "window error: creation failed");

        let err = VerdantError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
