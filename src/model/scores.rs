use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Hear,
    See,
    Smell,
    Touch,
    Taste,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Hear,
        Dimension::See,
        Dimension::Smell,
        Dimension::Touch,
        Dimension::Taste,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Hear => "hear",
            Dimension::See => "see",
            Dimension::Smell => "smell",
            Dimension::Touch => "touch",
            Dimension::Taste => "taste",
        }
    }

    /// Input field the dimension is scored from.
    pub fn source_field(self) -> &'static str {
        match self {
            Dimension::Hear => "coherence_ratings",
            Dimension::See => "structural_feedback",
            Dimension::Smell => "novelty_indicators",
            Dimension::Touch => "application_successes",
            Dimension::Taste => "likability_scores",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Hear => "Hear (coherence)",
            Dimension::See => "See (structural clarity)",
            Dimension::Smell => "Smell (novelty)",
            Dimension::Touch => "Touch (application success)",
            Dimension::Taste => "Taste (likability)",
        }
    }
}

/// Per-dimension scores. Field order is the serialized key order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DimensionScores {
    pub hear: f64,
    pub see: f64,
    pub smell: f64,
    pub touch: f64,
    pub taste: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Hear => self.hear,
            Dimension::See => self.see,
            Dimension::Smell => self.smell,
            Dimension::Touch => self.touch,
            Dimension::Taste => self.taste,
        }
    }

    pub fn values(&self) -> [f64; 5] {
        [self.hear, self.see, self.smell, self.touch, self.taste]
    }

    pub fn rounded(&self, precision: u32) -> DimensionScores {
        DimensionScores {
            hear: round_to(self.hear, precision),
            see: round_to(self.see, precision),
            smell: round_to(self.smell, precision),
            touch: round_to(self.touch, precision),
            taste: round_to(self.taste, precision),
        }
    }
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Half-away-from-zero rounding to `precision` decimal places.
pub fn round_to(x: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (x * scale).round() / scale;
    if rounded.is_finite() { rounded } else { x }
}
