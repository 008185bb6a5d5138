#[cfg(feature = "config")]
use serde::{Serialize, Deserialize};

pub mod query;
pub mod similarity;
pub mod vocabulary;
pub mod words;

/// Similarity a keyword has to exceed before a token is corrected towards it
pub static MINIMAL_DISTANCE: f64 = 0.5;

fn get_default_lexical_penalty_percentage() -> f64 {
    10.0
}

fn get_default_eps() -> f64 {
    1e-9
}

#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionConfig {
    /// Confidence percentage points deducted over a whole query whose words are all corrected
    #[cfg_attr(feature = "config", serde(default = "get_default_lexical_penalty_percentage"))]
    pub lexical_penalty_percentage: f64,

    #[cfg_attr(feature = "config", serde(default = "get_default_eps"))]
    pub eps: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            lexical_penalty_percentage: get_default_lexical_penalty_percentage(),
            eps: get_default_eps(),
        }
    }
}
