//! Binary classification over encoded image tensors.

mod predict;

pub use predict::{Classifier, Label, Prediction};
