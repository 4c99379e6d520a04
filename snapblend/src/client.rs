//! Client configuration and transport layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Proxy};

use crate::error::{Error, Result};

/// 默认生成模型。
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// 重试前的默认等待（毫秒）。
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1500;

/// Snapblend 客户端。
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub http: HttpClient,
    pub config: ClientConfig,
    pub api_client: ApiClient,
}

/// 客户端配置。
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 认证信息。
    pub credentials: Credentials,
    /// 生成模型。
    pub model: String,
    /// HTTP 配置。
    pub http_options: HttpOptions,
}

/// 认证方式。凭据在每次请求时解析，不做跨调用缓存。
#[derive(Debug, Clone)]
pub enum Credentials {
    /// 固定 API Key。
    ApiKey(String),
    /// 每次调用时从环境变量重新读取（容忍密钥轮换）。
    EnvVar(String),
}

impl Credentials {
    /// 解析当前凭据值。
    ///
    /// # Errors
    /// 环境变量缺失时返回 `ConfigMissing`。
    pub(crate) fn resolve(&self) -> Result<String> {
        match self {
            Self::ApiKey(key) => Ok(key.clone()),
            Self::EnvVar(name) => std::env::var(name).map_err(|_| Error::ConfigMissing {
                message: format!("environment variable {name} is not set"),
            }),
        }
    }
}

/// HTTP 配置。
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Option<u64>,
    pub proxy: Option<String>,
    pub headers: HashMap<String, String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    /// 重试前的固定等待（毫秒）。
    pub retry_delay_ms: u64,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            proxy: None,
            headers: HashMap::new(),
            base_url: None,
            api_version: None,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

impl Client {
    /// 创建新客户端（固定 API Key）。
    ///
    /// # Errors
    /// 当配置无效或构建客户端失败时返回错误。
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// 从环境变量创建客户端。凭据保持按调用解析，变量轮换后下次调用即生效。
    ///
    /// # Errors
    /// 当环境变量缺失或构建客户端失败时返回错误。
    pub fn from_env() -> Result<Self> {
        let var = ["SNAPBLEND_API_KEY", "GEMINI_API_KEY"]
            .into_iter()
            .find(|name| std::env::var(name).is_ok_and(|value| !value.trim().is_empty()))
            .ok_or_else(|| Error::ConfigMissing {
                message: "SNAPBLEND_API_KEY or GEMINI_API_KEY not found".into(),
            })?;
        let mut builder = Self::builder().env_key(var);
        if let Ok(base_url) = std::env::var("SNAPBLEND_BASE_URL") {
            if !base_url.trim().is_empty() {
                builder = builder.base_url(base_url);
            }
        }
        if let Ok(model) = std::env::var("SNAPBLEND_MODEL") {
            if !model.trim().is_empty() {
                builder = builder.model(model);
            }
        }
        builder.build()
    }

    /// 创建 Builder。
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// 访问生成接口。
    #[must_use]
    pub fn generations(&self) -> crate::generations::Generations {
        crate::generations::Generations::new(self.inner.clone())
    }
}

/// 客户端 Builder。
#[derive(Default)]
pub struct ClientBuilder {
    credentials: Option<Credentials>,
    model: Option<String>,
    http_options: HttpOptions,
}

impl ClientBuilder {
    /// 设置固定 API Key。
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(key.into()));
        self
    }

    /// 设置环境变量凭据（每次调用重新读取）。
    #[must_use]
    pub fn env_key(mut self, var: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::EnvVar(var.into()));
        self
    }

    /// 设置生成模型。
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// 设置请求超时（秒）。
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.http_options.timeout = Some(secs);
        self
    }

    /// 设置代理。
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.http_options.proxy = Some(url.into());
        self
    }

    /// 增加默认 HTTP 头。
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_options.headers.insert(key.into(), value.into());
        self
    }

    /// 设置自定义基础 URL。
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http_options.base_url = Some(base_url.into());
        self
    }

    /// 设置 API 版本。
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.http_options.api_version = Some(api_version.into());
        self
    }

    /// 设置重试等待（毫秒）。
    #[must_use]
    pub const fn retry_delay(mut self, millis: u64) -> Self {
        self.http_options.retry_delay_ms = millis;
        self
    }

    /// 构建客户端。
    ///
    /// # Errors
    /// 当凭据缺失、参数无效或构建 HTTP 客户端失败时返回错误。
    pub fn build(self) -> Result<Client> {
        let Self {
            credentials,
            model,
            http_options,
        } = self;

        let credentials = credentials.ok_or_else(|| Error::ConfigMissing {
            message: "an API key or credential environment variable is required".into(),
        })?;
        if let Credentials::ApiKey(key) = &credentials {
            // Reject values that can never form a valid header.
            HeaderValue::from_str(key).map_err(|_| Error::InvalidConfig {
                message: "Invalid API key value".into(),
            })?;
        }

        let headers = Self::build_headers(&http_options)?;
        let http = Self::build_http_client(&http_options, headers)?;
        let config = ClientConfig {
            credentials,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            http_options,
        };
        let api_client = ApiClient::new(&config);

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                config,
                api_client,
            }),
        })
    }

    fn build_headers(http_options: &HttpOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in &http_options.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| Error::InvalidConfig {
                    message: format!("Invalid header name: {key}"),
                })?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidConfig {
                message: format!("Invalid header value for {key}"),
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    fn build_http_client(http_options: &HttpOptions, headers: HeaderMap) -> Result<HttpClient> {
        let mut http_builder = HttpClient::builder();
        if let Some(timeout) = http_options.timeout {
            http_builder = http_builder.timeout(Duration::from_secs(timeout));
        }

        if let Some(proxy_url) = &http_options.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| Error::InvalidConfig {
                message: format!("Invalid proxy: {e}"),
            })?;
            http_builder = http_builder.proxy(proxy);
        }

        if !headers.is_empty() {
            http_builder = http_builder.default_headers(headers);
        }

        Ok(http_builder.build()?)
    }
}

impl ClientInner {
    /// 发送请求并注入当次解析的凭据头。
    ///
    /// 调用方已通过默认头显式设置 `x-goog-api-key` 时保留该值，不再解析凭据。
    /// 默认头在 `execute` 阶段才合并进请求，因此这里查配置而非请求头。
    ///
    /// # Errors
    /// 当凭据解析、请求构建或网络请求失败时返回错误。
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let mut request = request.build()?;
        let name = HeaderName::from_static("x-goog-api-key");
        if !request.headers().contains_key(&name) && !self.has_configured_api_key() {
            let key = self.config.credentials.resolve()?;
            let mut value = HeaderValue::from_str(&key).map_err(|_| Error::InvalidConfig {
                message: "Invalid API key value".into(),
            })?;
            value.set_sensitive(true);
            request.headers_mut().insert(name, value);
        }
        Ok(self.http.execute(request).await?)
    }

    fn has_configured_api_key(&self) -> bool {
        self.config
            .http_options
            .headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case("x-goog-api-key"))
    }
}

pub(crate) struct ApiClient {
    pub base_url: String,
    pub api_version: String,
}

impl ApiClient {
    /// 创建 API 客户端配置。
    pub fn new(config: &ClientConfig) -> Self {
        let base_url = config.http_options.base_url.as_deref().map_or_else(
            || "https://generativelanguage.googleapis.com/".to_string(),
            normalize_base_url,
        );
        let api_version = config
            .http_options
            .api_version
            .clone()
            .unwrap_or_else(|| "v1beta".to_string());

        Self {
            base_url,
            api_version,
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let mut value = base_url.trim().to_string();
    if !value.ends_with('/') {
        value.push('/');
    }
    value
}
