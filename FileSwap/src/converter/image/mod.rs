//! Image transcoding
//!
//! Re-encodes JPEG, PNG, WebP and SVG sources as JPEG, PNG, WebP, or as a
//! fixed-size ICO icon.
//!
//! SPDX-FileCopyrightText: 2025 `FileSwap` contributors
//!
//! SPDX-License-Identifier: MIT

mod svg;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::codecs::ico::IcoEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;

use crate::converter::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::{Error, Result};
use crate::formats::{FormatTag, extension_of, source_label};
use crate::utils::output_path;

pub use svg::{rasterize, rasterize_bytes};

/// JPEG quality used for jpg/jpeg output
pub const JPEG_QUALITY: u8 = 90;

/// ICO size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcoSize {
    /// 16x16
    Small,
    /// 32x32
    Medium,
    /// 48x48
    Large,
}

impl IcoSize {
    /// Width and height in pixels
    #[must_use]
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Small => 16,
            Self::Medium => 32,
            Self::Large => 48,
        }
    }

    /// Parse a command-line flag: `-s`, `-m` or `-l`.
    ///
    /// # Errors
    /// Returns [`Error::MissingOrInvalidIcoSize`] for anything else.
    pub fn from_flag(flag: &str) -> Result<Self> {
        match flag {
            "-s" => Ok(Self::Small),
            "-m" => Ok(Self::Medium),
            "-l" => Ok(Self::Large),
            _ => Err(Error::MissingOrInvalidIcoSize(Some(flag.to_string()))),
        }
    }
}

/// Convert an image file to `target`, writing next to the source.
///
/// `ico_size` is required when `target` is [`FormatTag::Ico`].
///
/// # Errors
/// Returns [`Error::MissingOrInvalidIcoSize`] before touching any file if an
/// ICO size is missing, or [`Error::ImageConversionFailed`] if decoding or
/// encoding fails.
pub fn transcode<P: AsRef<Path>>(
    source: P,
    target: FormatTag,
    ico_size: Option<IcoSize>,
) -> Result<PathBuf> {
    transcode_with_progress(source, target, ico_size, &|_| {})
}

/// Convert an image file to `target` with progress callback
///
/// # Errors
/// Returns an error if the formats are not image formats, the ICO size is
/// missing, or decoding, encoding or writing fails.
pub fn transcode_with_progress<P: AsRef<Path>>(
    source: P,
    target: FormatTag,
    ico_size: Option<IcoSize>,
    progress: ConvertProgressCallback,
) -> Result<PathBuf> {
    let source = source.as_ref();
    let source_ext = extension_of(source);
    let source_format = FormatTag::from_extension(&source_ext)
        .filter(|tag| tag.is_image() && *tag != FormatTag::Ico)
        .ok_or_else(|| Error::UnsupportedSourceFormat(source_label(source)))?;
    if !matches!(
        target,
        FormatTag::Jpg | FormatTag::Jpeg | FormatTag::Png | FormatTag::Webp | FormatTag::Ico
    ) {
        return Err(Error::UnsupportedTargetFormat(target.to_string()));
    }
    if target == FormatTag::Ico && ico_size.is_none() {
        return Err(Error::MissingOrInvalidIcoSize(None));
    }

    let dest = output_path(source, target);
    tracing::info!("Converting {source_format}→{target}: {source:?} → {dest:?}");

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        1,
        3,
        format!("Decoding {source_format}..."),
    ));
    let img = if source_format == FormatTag::Svg {
        rasterize(source)?
    } else {
        image::open(source)?
    };
    tracing::debug!("Decoded {}x{} image", img.width(), img.height());

    progress(&ConvertProgress::with_file(
        ConvertPhase::Converting,
        2,
        3,
        format!("Encoding {target}..."),
    ));
    let bytes = encode(&img, target, ico_size)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        3,
        3,
        format!("Writing {}...", dest.display()),
    ));
    let mut output = BufWriter::new(File::create(&dest)?);
    output.write_all(&bytes)?;
    output.flush()?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(dest)
}

/// Encode an image as `target`.
///
/// # Errors
/// Returns an error if `target` is not a raster output format, the ICO size
/// is missing, or the encoder fails.
pub fn encode(img: &DynamicImage, target: FormatTag, ico_size: Option<IcoSize>) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();

    match target {
        FormatTag::Jpg | FormatTag::Jpeg => {
            // JPEG has no alpha channel
            let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            img.to_rgb8().write_with_encoder(encoder)?;
        }
        FormatTag::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, PngFilter::Adaptive);
            img.write_with_encoder(encoder)?;
        }
        FormatTag::Webp => {
            let encoder = WebPEncoder::new_lossless(&mut bytes);
            img.to_rgba8().write_with_encoder(encoder)?;
        }
        FormatTag::Ico => {
            let size = ico_size.ok_or(Error::MissingOrInvalidIcoSize(None))?.pixels();
            let icon = img.resize_to_fill(size, size, FilterType::Lanczos3);
            let encoder = IcoEncoder::new(&mut bytes);
            icon.to_rgba8().write_with_encoder(encoder)?;
        }
        other => return Err(Error::UnsupportedTargetFormat(other.to_string())),
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn checker(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        }))
    }

    #[test]
    fn test_ico_sizes() {
        assert_eq!(IcoSize::Small.pixels(), 16);
        assert_eq!(IcoSize::Medium.pixels(), 32);
        assert_eq!(IcoSize::Large.pixels(), 48);
        assert_eq!(IcoSize::from_flag("-s").unwrap(), IcoSize::Small);
        assert_eq!(IcoSize::from_flag("-l").unwrap(), IcoSize::Large);
        assert!(matches!(
            IcoSize::from_flag("-x"),
            Err(Error::MissingOrInvalidIcoSize(Some(flag))) if flag == "-x"
        ));
    }

    #[test]
    fn test_encode_ico_resizes() {
        let bytes = encode(&checker(64, 40), FormatTag::Ico, Some(IcoSize::Medium)).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Ico).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));
    }

    #[test]
    fn test_encode_ico_without_size_fails() {
        assert!(matches!(
            encode(&checker(4, 4), FormatTag::Ico, None),
            Err(Error::MissingOrInvalidIcoSize(None))
        ));
    }

    #[test]
    fn test_encode_raster_targets_keep_dimensions() {
        let img = checker(8, 6);
        for (target, format) in [
            (FormatTag::Png, image::ImageFormat::Png),
            (FormatTag::Jpeg, image::ImageFormat::Jpeg),
            (FormatTag::Webp, image::ImageFormat::WebP),
        ] {
            let bytes = encode(&img, target, None).unwrap();
            let decoded = image::load_from_memory_with_format(&bytes, format).unwrap();
            assert_eq!(decoded.dimensions(), (8, 6), "{target}");
        }
    }

    #[test]
    fn test_encode_rejects_non_raster_target() {
        assert!(matches!(
            encode(&checker(2, 2), FormatTag::Svg, None),
            Err(Error::UnsupportedTargetFormat(ext)) if ext == "svg"
        ));
    }
}
