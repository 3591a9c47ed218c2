#![deny(warnings)]

pub mod activation;
pub mod boundary;
pub mod classifier;
pub mod demo;
pub mod error;
pub mod history;
pub mod init;
pub mod plot;
pub mod sampling;

pub use classifier::{EpochErrors, Hyperparameters, LinearClassifier};
pub use error::{PerceptronError, Result};
