use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::content::Content;

/// `generateContent` 请求体。每次调用重新构建，不做持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// 有序内容（指令文本在前，图像随后，顺序影响模型条件化）。
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// 调用侧生成配置。
#[derive(Debug, Clone, Default)]
pub struct GenerateContentConfig {
    /// 系统指令。
    pub system_instruction: Option<Content>,
    /// 生成参数。
    pub generation_config: Option<GenerationConfig>,
}
