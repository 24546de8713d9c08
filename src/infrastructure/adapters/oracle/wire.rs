//! Gemini Wire Types - generateContent 请求/响应结构
//!
//! 响应侧的每个可选字段都是显式 Option；
//! 链条上任何一环缺失都折叠为 None，不会 panic。

use serde::{Deserialize, Serialize};

// ============================================================================
// 请求
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

impl GenerateContentRequest {
    /// 单段用户文本请求
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: Some(vec![Part {
                    text: Some(text.into()),
                    inline_data: None,
                }]),
            }],
            generation_config: None,
            tools: None,
            tool_config: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

impl SpeechConfig {
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMapsTool>,
}

/// 地理接地工具开关（空对象即启用）
#[derive(Debug, Serialize)]
pub struct GoogleMapsTool {}

impl Tool {
    pub fn google_maps() -> Self {
        Self {
            google_maps: Some(GoogleMapsTool {}),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_config: Option<RetrievalConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// 响应
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,

    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<CitationSource>,

    #[serde(default)]
    pub maps: Option<CitationSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationSource {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.as_ref()?.first()
    }

    /// 第一候选的全部文本片段拼接；没有文本则为 None
    pub fn first_text(&self) -> Option<String> {
        let parts = self.first_candidate()?.content.as_ref()?.parts.as_ref()?;
        let text: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// 第一候选的内联音频载荷（base64）；链条任一环缺失则为 None
    pub fn first_inline_audio(&self) -> Option<String> {
        self.first_candidate()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .and_then(|d| d.data.clone())
    }

    /// 第一候选的接地引文块；缺失则为空列表
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.first_candidate()
            .and_then(|c| c.grounding_metadata.as_ref())
            .and_then(|m| m.grounding_chunks.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let mut request = GenerateContentRequest::from_text("hello");
        request.generation_config = Some(GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(1000),
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(SpeechConfig::prebuilt("Charon")),
        });
        request.tools = Some(vec![Tool::google_maps()]);
        request.tool_config = Some(ToolConfig {
            retrieval_config: Some(RetrievalConfig {
                lat_lng: LatLng {
                    latitude: 31.77,
                    longitude: 35.21,
                },
            }),
        });

        let value = serde_json::to_value(&request).unwrap();
        let config = &value["generationConfig"];
        assert_eq!(config["maxOutputTokens"], 1000);
        assert_eq!(config["responseModalities"][0], "AUDIO");
        assert_eq!(
            config["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"],
            "Charon"
        );
        assert!(value["tools"][0]["googleMaps"].is_object());
        assert_eq!(
            value["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            31.77
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"In the "},{"text":"beginning"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("In the beginning"));
        assert!(response.first_inline_audio().is_none());
    }

    #[test]
    fn test_response_inline_audio_extraction() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"audio/pcm","data":"AAA="}}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_inline_audio().as_deref(), Some("AAA="));
    }

    #[test]
    fn test_missing_links_fold_to_none() {
        // 响应链条上每个环节的缺失都是合法空态
        for raw in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
            assert!(response.first_text().is_none(), "raw: {}", raw);
            assert!(response.first_inline_audio().is_none(), "raw: {}", raw);
            assert!(response.grounding_chunks().is_empty(), "raw: {}", raw);
        }
    }

    #[test]
    fn test_grounding_chunks_extraction() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Jericho"}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"uri":"https://example.org/jericho","title":"Jericho"}},
                    {"maps":{"title":"Tell es-Sultan"}}
                ]}}]}"#,
        )
        .unwrap();
        let chunks = response.grounding_chunks();
        assert_eq!(chunks.len(), 2);
        assert_eq!(
            chunks[0].web.as_ref().unwrap().uri.as_deref(),
            Some("https://example.org/jericho")
        );
        assert_eq!(
            chunks[1].maps.as_ref().unwrap().title.as_deref(),
            Some("Tell es-Sultan")
        );
    }
}
