//! 内联二进制负载的线上编码。
//!
//! 生成接口以 base64 字符串承载图像字节；本模块支撑 `Blob` 与
//! `EncodedImage` 上的 `#[serde(with = "inline_bytes")]` 字段。

use std::borrow::Cow;

use base64::display::Base64Display;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// 字节序列化为 base64 字符串，不经过中间分配。
pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&Base64Display::new(data, &STANDARD))
}

/// base64 字符串反序列化为字节。
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded: Cow<'_, str> = Deserialize::deserialize(deserializer)?;
    STANDARD.decode(encoded.as_bytes()).map_err(D::Error::custom)
}
