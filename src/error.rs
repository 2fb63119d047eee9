//! Error types for the region_colors library

use thiserror::Error;

/// Result type alias for region_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for regional color analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image dimensions are zero or otherwise unusable
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height * 4
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Invalid configuration or function parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// A color string could not be parsed
    #[error("Color parse error: {message}")]
    ColorParseError { message: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a condition the caller can recover from
    /// by switching to the synthetic fallback results
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidDimensions { .. }
                | AnalysisError::BufferSizeMismatch { .. }
                | AnalysisError::ImageLoadError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidDimensions { .. } => {
                "The image has no usable dimensions. Sample data can be shown instead."
                    .to_string()
            }
            AnalysisError::BufferSizeMismatch { .. } => {
                "The decoded pixel data is incomplete. Please re-decode the image and try again."
                    .to_string()
            }
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::ColorParseError { .. } => {
                "A color value could not be understood. Expected hex like #3366CC.".to_string()
            }
            AnalysisError::ConfigError { .. } => {
                "The configuration file could not be read. Default settings still work.".to_string()
            }
            AnalysisError::InvalidParameter { .. } => {
                "An analysis setting is out of range. Please check the configuration.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        let dims = AnalysisError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert!(dims.is_recoverable());

        let param = AnalysisError::invalid_parameter("threshold", -1.0);
        assert!(!param.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::BufferSizeMismatch {
            expected: 400,
            actual: 399,
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("399"));
    }

    #[test]
    fn test_user_messages_nonempty() {
        let errors = vec![
            AnalysisError::InvalidDimensions {
                width: 0,
                height: 0,
            },
            AnalysisError::ColorParseError {
                message: "bad".into(),
            },
            AnalysisError::invalid_parameter("grid_steps", 0),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
