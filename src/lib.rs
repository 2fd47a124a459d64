//! SENSES (HSSTT) quality scoring.
//!
//! Five sensory dimension scores (Hear, See, Smell, Touch, Taste) and a
//! composite are computed from batches of evaluation ratings by
//! [`pipeline::compute_senses`].

pub mod error;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod telemetry;

pub use error::{ErrorKind, SensesError};
pub use model::config::{OutlierRule, RangePolicy, SensesConfig, SmellNormalization};
pub use model::ratings::RatingsInput;
pub use model::scores::{Dimension, DimensionScores};
pub use pipeline::{SensesOutcome, compute_senses};
