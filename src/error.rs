use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("field `{key}` missing on record `{framework}`")]
    MissingField { key: String, framework: String },

    #[error("field `{key}` mixes text and numeric values")]
    IncomparableValues { key: String },

    #[error("field `{key}` on record `{framework}` is not a finite number")]
    NonFiniteValue { key: String, framework: String },

    #[error("field `{key}` on record `{framework}` is not numeric")]
    NonNumericField { key: String, framework: String },

    #[error("maximum value is zero, cannot scale bars")]
    DivisionByZero,

    #[error("CSV header has no `{0}` column")]
    MissingColumn(String),

    #[error("no records to render")]
    EmptyInput,

    #[error("check level {0} is outside 0..=2")]
    InvalidCheckLevel(i64),

    #[error("no mount point with id `{0}`")]
    MountPointNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("chart error: {0}")]
    Chart(String),
}

impl StatsError {
    pub(crate) fn missing(key: &str, framework: &str) -> Self {
        StatsError::MissingField {
            key: key.to_string(),
            framework: framework.to_string(),
        }
    }
}
