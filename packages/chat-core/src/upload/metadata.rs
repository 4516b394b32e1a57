//! Image dimension probing with a downscale-to-fit display policy.

use std::io::Cursor;
use std::sync::Arc;

use image::ImageReader;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest size an image is displayed at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayBounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for DisplayBounds {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 600,
        }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Scale `dimensions` down to fit `bounds`, keeping the aspect ratio.
///
/// Images already inside the bounds are returned unchanged; both sides are
/// floored after scaling.
pub fn fit_within(dimensions: ImageDimensions, bounds: DisplayBounds) -> ImageDimensions {
    let ImageDimensions { width, height } = dimensions;
    if width <= bounds.max_width && height <= bounds.max_height {
        return dimensions;
    }

    let ratio = f64::min(
        bounds.max_width as f64 / width as f64,
        bounds.max_height as f64 / height as f64,
    );

    ImageDimensions {
        width: (width as f64 * ratio).floor() as u32,
        height: (height as f64 * ratio).floor() as u32,
    }
}

/// Encoded image bytes handed to the resolver.
///
/// Resolving consumes the source, so it is released once decoding finishes
/// or fails.
#[derive(Debug)]
pub struct ImageSource {
    bytes: Arc<[u8]>,
}

impl ImageSource {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Read the header only; pixel data is never decoded.
    fn decode_dimensions(self) -> Result<ImageDimensions> {
        let reader = ImageReader::new(Cursor::new(self.bytes)).with_guessed_format()?;
        let (width, height) = reader.into_dimensions()?;
        Ok(ImageDimensions { width, height })
    }
}

/// Resolves display dimensions for image uploads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageMetadataResolver {
    bounds: DisplayBounds,
}

impl ImageMetadataResolver {
    pub fn new(bounds: DisplayBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Decode on the blocking pool and fit the result to the display bounds.
    pub async fn resolve(&self, source: ImageSource) -> Result<ImageDimensions> {
        let natural = tokio::task::spawn_blocking(move || source.decode_dimensions())
            .await
            .map_err(|e| Error::Task(e.to_string()))??;

        let fitted = fit_within(natural, self.bounds);
        tracing::debug!(
            natural_width = natural.width,
            natural_height = natural.height,
            width = fitted.width,
            height = fitted.height,
            "Resolved image dimensions"
        );
        Ok(fitted)
    }
}
