//! Gemini Client - 调用外部 Gemini generateContent API
//!
//! 实现 OraclePort trait，通过 HTTPS 调用托管模型
//!
//! 外部 API:
//! POST {base_url}/v1beta/models/{model}:generateContent
//! Header: x-goog-api-key
//! Request/Response: JSON（见 wire.rs）
//!
//! 每个操作都是单次往返：不重试、不缓存，超时只有客户端构建时的一处配置

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::prompts;
use super::wire::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, LatLng, RetrievalConfig,
    SpeechConfig, Tool, ToolConfig,
};
use crate::application::ports::{
    GeoHint, GroundedAnswer, GroundingCitation, OracleError, OraclePort,
};
use crate::config::GeminiConfig;

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API 凭证
    pub api_key: String,
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 文本生成模型
    pub text_model: String,
    /// 语音合成模型
    pub tts_model: String,
    /// 地理接地模型
    pub grounded_model: String,
    /// 预置朗读音色
    pub voice: String,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 120,
            text_model: "gemini-3-flash-preview".to_string(),
            tts_model: "gemini-2.5-flash-preview-tts".to_string(),
            grounded_model: "gemini-2.5-flash".to_string(),
            voice: "Charon".to_string(),
        }
    }
}

impl From<&GeminiConfig> for GeminiClientConfig {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            text_model: config.text_model.clone(),
            tts_model: config.tts_model.clone(),
            grounded_model: config.grounded_model.clone(),
            voice: config.voice.clone(),
        }
    }
}

/// Gemini 客户端
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(config: GeminiClientConfig) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OracleError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取模型调用 URL
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        )
    }

    /// 单次 generateContent 往返
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, OracleError> {
        if self.config.api_key.is_empty() {
            return Err(OracleError::MissingApiKey);
        }

        let url = self.generate_url(model);
        tracing::debug!(url = %url, model = %model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout
                } else if e.is_connect() {
                    OracleError::NetworkError(format!("Cannot connect to Gemini service: {}", e))
                } else {
                    OracleError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OracleError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| OracleError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    /// 文本生成往返，返回拼接后的正文
    async fn generate_text(
        &self,
        prompt: String,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, OracleError> {
        let mut request = GenerateContentRequest::from_text(prompt);
        request.generation_config = Some(GenerationConfig {
            temperature: Some(temperature),
            max_output_tokens: Some(max_output_tokens),
            ..Default::default()
        });

        let response = self.generate(&self.config.text_model, &request).await?;
        response
            .first_text()
            .ok_or_else(|| OracleError::InvalidResponse("Response contained no text".to_string()))
    }
}

#[async_trait]
impl OraclePort for GeminiClient {
    async fn deep_insight(&self, topic: &str) -> Result<String, OracleError> {
        let text = self
            .generate_text(prompts::deep_insight(topic), 0.7, 1000)
            .await?;
        tracing::info!(topic = %topic, chars = text.len(), "Deep insight generated");
        Ok(text)
    }

    async fn daily_devotional(&self) -> Result<String, OracleError> {
        let text = self
            .generate_text(prompts::daily_devotional().to_string(), 0.8, 800)
            .await?;
        tracing::info!(chars = text.len(), "Daily devotional generated");
        Ok(text)
    }

    async fn verse_commentary(&self, verse_text: &str) -> Result<String, OracleError> {
        let text = self
            .generate_text(prompts::verse_commentary(verse_text), 0.4, 1000)
            .await?;
        tracing::info!(chars = text.len(), "Verse commentary generated");
        Ok(text)
    }

    async fn synthesize_speech(&self, text: &str) -> Result<Option<String>, OracleError> {
        let mut request = GenerateContentRequest::from_text(prompts::narration(text));
        request.generation_config = Some(GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(SpeechConfig::prebuilt(self.config.voice.clone())),
            ..Default::default()
        });

        let response = self.generate(&self.config.tts_model, &request).await?;
        let payload = response.first_inline_audio();

        tracing::info!(
            text_len = text.len(),
            has_audio = payload.is_some(),
            "Speech synthesis completed"
        );
        Ok(payload)
    }

    async fn locate(
        &self,
        place: &str,
        hint: Option<GeoHint>,
    ) -> Result<GroundedAnswer, OracleError> {
        let mut request = GenerateContentRequest::from_text(prompts::locate(place));
        request.tools = Some(vec![Tool::google_maps()]);
        request.tool_config = hint.map(|hint| ToolConfig {
            retrieval_config: Some(RetrievalConfig {
                lat_lng: LatLng {
                    latitude: hint.latitude,
                    longitude: hint.longitude,
                },
            }),
        });

        let response = self.generate(&self.config.grounded_model, &request).await?;

        let text = response
            .first_text()
            .ok_or_else(|| OracleError::InvalidResponse("Response contained no text".to_string()))?;

        // 引文缺失是合法空态
        let citations: Vec<GroundingCitation> = response
            .grounding_chunks()
            .iter()
            .filter_map(|chunk| chunk.web.as_ref().or(chunk.maps.as_ref()))
            .map(|source| GroundingCitation {
                title: source.title.clone(),
                uri: source.uri.clone(),
            })
            .collect();

        tracing::info!(
            place = %place,
            citations = citations.len(),
            "Grounded location answer generated"
        );
        Ok(GroundedAnswer { text, citations })
    }
}
