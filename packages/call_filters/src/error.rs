use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid duration range: [{min}, {max}]")]
    InvalidDurationRange { min: f64, max: f64 },

    #[error("unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load configuration: {0}")]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for FilterError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
