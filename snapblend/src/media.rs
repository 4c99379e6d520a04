//! Upload preparation: bound dimensions, re-encode, preview.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use snapblend_types::media::EncodedImage;

use crate::error::{Error, Result};

/// 最长边上限（像素）。与质量因子一起约束组合请求体积在服务上限（约 4MB）内。
pub const MAX_DIMENSION: u32 = 1024;

/// JPEG 重编码质量（1-100）。
pub const JPEG_QUALITY: u8 = 85;

/// 上传准备结果。
#[derive(Debug, Clone)]
pub struct PreparedUpload {
    /// 传输用编码图像。
    pub image: EncodedImage,
    /// `data:` URI 预览，与传输负载同一份编码字节。
    pub preview: String,
}

/// 准备上传图像。声明类型非 `image/*` 时返回 `Ok(None)`，不产生错误。
///
/// 解码后按 [`MAX_DIMENSION`] 收缩最长边（保持宽高比，只缩不放），再以
/// [`JPEG_QUALITY`] 重编码为 JPEG。原始字节不被保留或修改。
///
/// # Errors
/// 解码或重编码失败时返回 `Processing`，不产生部分结果。
pub fn prepare_image(bytes: &[u8], declared_mime: &str) -> Result<Option<PreparedUpload>> {
    if !declared_mime.starts_with("image/") {
        return Ok(None);
    }

    let decoded = image::load_from_memory(bytes).map_err(|err| Error::Processing {
        message: format!("decode failed: {err}"),
    })?;

    let (width, height) = bounded_dimensions(decoded.width(), decoded.height());
    let resized = if (width, height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Lanczos3)
    };

    let data = encode_jpeg(&resized)?;
    let image = EncodedImage::new("image/jpeg", data, width, height);
    let preview = image.to_data_uri();
    Ok(Some(PreparedUpload { image, preview }))
}

/// 从文件路径准备，媒体类型按扩展名推断。
///
/// # Errors
/// 读取失败时返回 IO 错误；解码或重编码失败时返回 `Processing`。
pub async fn prepare_image_from_path(path: impl AsRef<Path>) -> Result<Option<PreparedUpload>> {
    let path = path.as_ref();
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    let bytes = tokio::fs::read(path).await?;
    prepare_image(&bytes, &mime_type)
}

/// 计算收缩后的尺寸：最长边超限时等比缩小至上限，否则原样返回。
#[must_use]
pub fn bounded_dimensions(width: u32, height: u32) -> (u32, u32) {
    let longer = width.max(height);
    if longer <= MAX_DIMENSION {
        return (width, height);
    }
    let scale = f64::from(MAX_DIMENSION) / f64::from(longer);
    let scaled_w = ((f64::from(width) * scale).round() as u32).max(1);
    let scaled_h = ((f64::from(height) * scale).round() as u32).max(1);
    (scaled_w, scaled_h)
}

fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    image
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|err| Error::Processing {
            message: format!("JPEG encode failed: {err}"),
        })?;
    Ok(buf.into_inner())
}
