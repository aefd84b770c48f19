//! Errors surfaced to callers

use thiserror::Error;

/// Errors that can occur while writing render output
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The public `pixels`, `width` and `height` of an `ImageBuffer` were edited out of step
    #[error("Image buffer is {got} pixels, expected {expected}")]
    SizeMismatch { expected: usize, got: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while loading a scene configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::NotFound("scene.yaml".to_string());
        assert!(err.to_string().contains("scene.yaml"));

        let err = ConfigError::Validation("radius must be positive".to_string());
        assert!(err.to_string().contains("radius"));

        let err = RenderError::SizeMismatch {
            expected: 4,
            got: 3,
        };
        assert_eq!(err.to_string(), "Image buffer is 3 pixels, expected 4");
    }
}
