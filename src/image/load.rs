//! Image loading utilities.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

use crate::error::{Error, Result};

use super::{InputTensor, MODEL_INPUT_SIZE, RGB_CHANNELS};

/// Load an image from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a `DynamicImage` to the classifier's normalized input tensor.
///
/// The image is:
/// 1. Resized to exactly 224x224, ignoring aspect ratio (the training
///    pipeline did the same)
/// 2. Converted to RGB if necessary
/// 3. Normalized from [0, 255] to [0.0, 1.0]
/// 4. Returned as a (1, 224, 224, 3) tensor
///
/// The pixel walk is columns outer, rows inner. Row-major storage then puts
/// pixel (x, y) channel c at flat offset (x * 224 + y) * 3 + c, the layout
/// the model weights expect.
#[allow(clippy::cast_possible_truncation)]
pub fn image_to_tensor(img: &DynamicImage) -> InputTensor {
    // Bilinear smoothing resize, non-aspect-preserving
    let resized = img.resize_exact(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let size = MODEL_INPUT_SIZE as usize;

    let mut tensor = Array4::<f32>::zeros((1, size, size, RGB_CHANNELS));

    for x in 0..size {
        for y in 0..size {
            // Safe: x and y are bounded by MODEL_INPUT_SIZE (224) which fits in u32
            let pixel = rgb.get_pixel(x as u32, y as u32);
            tensor[[0, x, y, 0]] = f32::from(pixel[0]) / 255.0;
            tensor[[0, x, y, 1]] = f32::from(pixel[1]) / 255.0;
            tensor[[0, x, y, 2]] = f32::from(pixel[2]) / 255.0;
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_tensor_shape() {
        let img = DynamicImage::new_rgb8(100, 100);
        let tensor = image_to_tensor(&img);

        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        assert_eq!(tensor.len(), 224 * 224 * 3);
    }

    #[test]
    fn test_tensor_shape_from_tiny_image() {
        let img = DynamicImage::new_rgb8(1, 1);
        let tensor = image_to_tensor(&img);

        assert_eq!(tensor.len(), 224 * 224 * 3);
    }

    #[test]
    fn test_black_image_is_all_zero() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([0, 0, 0])));
        let tensor = image_to_tensor(&img);

        assert!(tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_white_image_is_all_one() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(500, 500, Rgb([255, 255, 255])));
        let tensor = image_to_tensor(&img);

        assert!(tensor.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_values_in_unit_range() {
        // Gradient image exercises the full channel range
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(300, 200, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }));
        let tensor = image_to_tensor(&img);

        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_column_outer_ordering() {
        // One red pixel at (5, 0); already 224x224 so the resize is identity
        let mut raw = RgbImage::from_pixel(224, 224, Rgb([0, 0, 0]));
        raw.put_pixel(5, 0, Rgb([255, 0, 0]));
        let tensor = image_to_tensor(&DynamicImage::ImageRgb8(raw));

        assert_eq!(tensor[[0, 5, 0, 0]], 1.0);
        assert_eq!(tensor[[0, 5, 0, 1]], 0.0);

        let (flat, _) = tensor.into_raw_vec_and_offset();
        assert_eq!(flat[(5 * 224) * 3], 1.0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(37, 91, |x, y| {
            Rgb([(x * 3 % 256) as u8, (y * 7 % 256) as u8, 128])
        }));

        assert_eq!(image_to_tensor(&img), image_to_tensor(&img));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_image("definitely/not/a/real/file.png");

        assert!(matches!(result, Err(Error::ImageLoad { .. })));
    }

    #[test]
    fn test_load_undecodable_file_fails() {
        // A manifest is a readable file but not a decodable image
        let result = load_image("Cargo.toml");

        assert!(matches!(result, Err(Error::ImageLoad { .. })));
    }
}
