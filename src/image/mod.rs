//! Image loading and input tensor encoding.

mod load;

pub use load::{image_to_tensor, load_image};

use ndarray::Array4;

/// Input tensor in (batch, x, y, channel) layout, exactly as the classifier
/// consumes it: columns outer, rows inner, interleaved RGB, values in [0, 1].
pub type InputTensor = Array4<f32>;

/// Side length of the square model input.
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;
