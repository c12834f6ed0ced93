use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("date range of {days} days exceeds the limit of {max} days")]
    RangeTooLarge { days: u32, max: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
