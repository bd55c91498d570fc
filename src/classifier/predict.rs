//! Single-shot inference and threshold classification.

use std::fmt;

use image::DynamicImage;
use ort::session::Session;
use ort::value::Tensor;

use crate::error::{Error, Result};
use crate::image::{image_to_tensor, InputTensor};
use crate::model::ModelHandle;

/// Decision threshold on the model's confidence output.
const POSITIVE_THRESHOLD: f32 = 0.5;

/// Binary classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Threshold a confidence score into a label.
    ///
    /// Strictly greater than 0.5 is `Positive`; exactly 0.5 is `Negative`.
    #[must_use]
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > POSITIVE_THRESHOLD {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

/// Result of one classification pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// The thresholded label.
    pub label: Label,
    /// Model confidence in the `Positive` class, in [0, 1].
    pub confidence: f32,
}

/// Runs the loaded model against encoded images.
pub struct Classifier {
    session: Session,
}

impl Classifier {
    /// Create a classifier from a loaded model handle.
    #[must_use]
    pub fn new(model: ModelHandle) -> Self {
        Self {
            session: model.into_session(),
        }
    }

    /// Classify a decoded image.
    ///
    /// Encodes the image into the model's input tensor, runs one inference,
    /// and thresholds the single confidence output. Deterministic for
    /// identical image bytes and model weights; no retries, no partial
    /// results.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails or the model output does not
    /// contain exactly one confidence value.
    pub fn classify(&mut self, img: &DynamicImage) -> Result<Prediction> {
        let input = image_to_tensor(img);

        let confidence = self.run_inference(input)?;
        let label = Label::from_confidence(confidence);

        tracing::debug!("Classified as {label} with confidence {confidence}");

        Ok(Prediction { label, confidence })
    }

    /// Run the session once and read back the scalar confidence.
    fn run_inference(&mut self, input: InputTensor) -> Result<f32> {
        let input_value =
            Tensor::from_array(input).map_err(|source| Error::Inference { source })?;

        let outputs = self
            .session
            .run(ort::inputs![input_value])
            .map_err(|source| Error::Inference { source })?;

        let output = outputs
            .values()
            .next()
            .ok_or_else(|| Error::ShapeMismatch {
                expected: "single confidence output".to_string(),
                actual: "no output".to_string(),
            })?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|source| Error::Inference { source })?;

        data.first().copied().ok_or_else(|| Error::ShapeMismatch {
            expected: "at least 1 element".to_string(),
            actual: "empty tensor".to_string(),
        })
    }
}
