//! Sub-models combined by the ensemble.
//!
//! Each model starts from a base score, applies additive adjustments and
//! clamps the result to [0.0, 1.0].

mod factual;
mod linguistic;
mod semantic;

pub use factual::FactualModel;
pub use linguistic::LinguisticModel;
pub use semantic::SemanticModel;

fn clamp_unit(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}
