//! # dermascan
//!
//! On-device binary image classification for skin lesion screening.
//!
//! Loads a pre-trained ONNX classification graph, encodes a user-supplied
//! image into the fixed 224x224 RGB input tensor the model was trained
//! against, runs a single inference, and reports a `Positive`/`Negative`
//! label with a confidence score.
//!
//! ## Example
//!
//! ```no_run
//! use dermascan::{Classifier, ModelHandle};
//!
//! # fn main() -> dermascan::Result<()> {
//! let model = ModelHandle::load("cancer_classification.onnx")?;
//! let mut classifier = Classifier::new(model);
//!
//! let img = dermascan::image::load_image("lesion.jpg")?;
//! let prediction = classifier.classify(&img)?;
//! println!("{}: {}", prediction.label, prediction.confidence);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod error;
pub mod image;
pub mod model;

pub use classifier::{Classifier, Label, Prediction};
pub use error::{Error, Result};
pub use model::ModelHandle;
