use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::inline_bytes;

/// 已编码图像：传输负载 + 媒体类型 + 像素尺寸。
///
/// 由上传准备流程一次性产出，产出后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    pub mime_type: String,
    #[serde(with = "inline_bytes")]
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    /// 创建编码图像。
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
            width,
            height,
        }
    }

    /// 负载字节数。
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 负载是否为空。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 生成自包含的 `data:` URI 预览，与传输负载同源。
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }
}
