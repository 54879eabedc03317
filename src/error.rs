use thiserror::Error;

pub type SparklineResult<T> = Result<T, SparklineError>;

#[derive(Debug, Error)]
pub enum SparklineError {
    #[error("sample sequence must not be empty")]
    EmptyData,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid option `{option}`: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("option `{option}` is required for {chart_type} charts")]
    MissingOption {
        option: &'static str,
        chart_type: &'static str,
    },

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("render backend error: {0}")]
    Backend(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SparklineError {
    pub(crate) fn invalid_option(option: &str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.to_owned(),
            reason: reason.into(),
        }
    }
}
