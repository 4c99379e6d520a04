//! Composite generation surface.

use std::sync::Arc;
use std::time::Duration;

use snapblend_types::config::ImageConfig;
use snapblend_types::content::{Content, Part, Role};
use snapblend_types::enums::Modality;
use snapblend_types::generate::{GenerateContentConfig, GenerateContentRequest};
use snapblend_types::media::EncodedImage;
use snapblend_types::response::GenerateContentResponse;

use crate::classify::{classify, is_transient};
use crate::client::ClientInner;
use crate::error::{Error, Result};
use crate::prompt::compose_prompt;

/// 每次调用最多两次尝试（首发 + 一次重试）。
const MAX_ATTEMPTS: u32 = 2;

/// 正方形输出约束。
const SQUARE_ASPECT_RATIO: &str = "1:1";

#[derive(Clone)]
pub struct Generations {
    pub(crate) inner: Arc<ClientInner>,
}

impl Generations {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 生成合成图（默认配置）。
    ///
    /// # Errors
    /// 输入缺失、请求失败或响应中无图像时返回分类后的错误。
    pub async fn generate(
        &self,
        person: &EncodedImage,
        product: &EncodedImage,
        scene: &str,
    ) -> Result<Vec<u8>> {
        self.generate_with_config(person, product, scene, GenerateContentConfig::default())
            .await
    }

    /// 生成合成图（自定义配置）。
    ///
    /// 流程：校验输入 → 组装指令与有序 parts → 发送 → 提取首个内联图像。
    /// 瞬时失败（限速/5xx）等待固定延迟后重发一次；其余失败立即返回。
    ///
    /// # Errors
    /// 输入缺失、请求失败或响应中无图像时返回分类后的错误。
    pub async fn generate_with_config(
        &self,
        person: &EncodedImage,
        product: &EncodedImage,
        scene: &str,
        config: GenerateContentConfig,
    ) -> Result<Vec<u8>> {
        validate_inputs(person, product, scene)?;

        let request = build_request(person, product, scene, config);
        let url = build_generate_url(&self.inner);
        let delay = Duration::from_millis(self.inner.config.http_options.retry_delay_ms);

        let mut attempt = 0u32;
        loop {
            match self.send_once(&url, &request).await {
                Ok(bytes) => return Ok(bytes),
                Err(err) if attempt + 1 < MAX_ATTEMPTS && is_transient(&err) => {
                    attempt += 1;
                    #[cfg(feature = "tracing")]
                    tracing::warn!(attempt, error = %err, "transient failure, retrying after delay");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(classify(err)),
            }
        }
    }

    async fn send_once(&self, url: &str, request: &GenerateContentRequest) -> Result<Vec<u8>> {
        let response = self.inner.send(self.inner.http.post(url).json(request)).await?;
        if !response.status().is_success() {
            return Err(Error::ApiError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let response = response.json::<GenerateContentResponse>().await?;
        extract_image(&response)
    }
}

fn validate_inputs(person: &EncodedImage, product: &EncodedImage, scene: &str) -> Result<()> {
    if person.is_empty() {
        return Err(Error::MissingInput {
            message: "person image is required".into(),
        });
    }
    if product.is_empty() {
        return Err(Error::MissingInput {
            message: "product image is required".into(),
        });
    }
    if scene.trim().is_empty() {
        return Err(Error::MissingInput {
            message: "scene description is required".into(),
        });
    }
    Ok(())
}

/// 请求体组装。part 顺序固定（指令文本、人像、产品图），顺序参与模型条件化。
fn build_request(
    person: &EncodedImage,
    product: &EncodedImage,
    scene: &str,
    config: GenerateContentConfig,
) -> GenerateContentRequest {
    let parts = vec![
        Part::text(compose_prompt(scene)),
        Part::inline_data(person.data.clone(), person.mime_type.clone()),
        Part::inline_data(product.data.clone(), product.mime_type.clone()),
    ];

    let mut generation_config = config.generation_config.unwrap_or_default();
    if generation_config.response_modalities.is_none() {
        generation_config.response_modalities = Some(vec![Modality::Text, Modality::Image]);
    }
    let image_config = generation_config.image_config.get_or_insert_with(ImageConfig::default);
    if image_config.aspect_ratio.is_none() {
        image_config.aspect_ratio = Some(SQUARE_ASPECT_RATIO.to_string());
    }

    GenerateContentRequest {
        contents: vec![Content::from_parts(parts, Role::User)],
        system_instruction: config.system_instruction,
        generation_config: Some(generation_config),
    }
}

/// 响应提取：按原始顺序扫描，首个内联图像直接返回。
///
/// 无任何 part 视为空响应；只有文本视为内容策略拒绝（文本保留在错误信息里）；
/// 两者皆无时按未返回图像处理。图像优先于文本是本 crate 文档化的约定。
fn extract_image(response: &GenerateContentResponse) -> Result<Vec<u8>> {
    if response.is_empty() {
        return Err(Error::EmptyResponse);
    }
    if let Some(blob) = response.first_inline_image() {
        return Ok(blob.data.clone());
    }
    if let Some(text) = response.text() {
        return Err(Error::SafetyBlock {
            message: text.to_string(),
        });
    }
    Err(Error::NoImageReturned {
        message: "response contained neither image nor text".into(),
    })
}

fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_generate_url(inner: &ClientInner) -> String {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    let model = transform_model_name(&inner.config.model);
    format!("{base}{version}/{model}:generateContent")
}
