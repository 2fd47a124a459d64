use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;

use crate::error::SensesError;
use crate::model::ratings::RatingsInput;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, SensesError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads one ratings document (plain or `.gz` JSON) and converts it to a typed record.
pub fn load_ratings(path: &Path) -> Result<RatingsInput, SensesError> {
    let reader = open_maybe_gz(path)?;
    let value: Value = serde_json::from_reader(reader)?;
    let ratings = RatingsInput::from_json(&value)?;
    tracing::debug!(
        path = %path.display(),
        coherence = ratings.coherence_ratings.len(),
        structural = ratings.structural_feedback.len(),
        novelty = ratings.novelty_indicators.len(),
        successes = ratings.application_successes.len(),
        likability = ratings.likability_scores.len(),
        "loaded ratings"
    );
    Ok(ratings)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
