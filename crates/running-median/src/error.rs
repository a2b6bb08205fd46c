use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedianError {
    #[error("The median of an empty tracker is undefined")]
    EmptyTracker,
    #[error("Unable to load the tracker configuration `{0}`")]
    Config(#[from] envy::Error),
    #[error("Unable to reserve the initial tracker capacity `{0}`")]
    Capacity(#[from] TryReserveError),
}
