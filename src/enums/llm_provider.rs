use crate::common::*;

#[doc = "dispatch 가 어느 provider 에도 매칭되지 않을 때 사용하는 고정 Claude 모델"]
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-3-haiku-20240307";

#[doc = r#"
    LLM provider 식별자.

    모델명 문자열의 substring 매칭으로 결정되며, 매칭되지 않으면 Claude 기본
    모델로 내려간다. provider 추가는 variant + 분기 추가를 의미한다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Claude,
    Gemini,
    DeepSeek,
    Groq,
}

impl LlmProvider {
    #[doc = r#"
        모델명으로 provider 와 실제 사용할 모델명을 결정해주는 함수.

        substring 매칭은 대소문자를 구분한다. 공식 모델명은 전부 소문자이므로
        "Claude-3" 같은 변형은 미매칭으로 보고 기본 모델로 내려보낸다.

        # Arguments
        * `model_name` - 호출자가 지정한 모델명

        # Returns
        * `(LlmProvider, String)` - 매칭된 provider 와 모델명. 미매칭 시
          `(Claude, DEFAULT_CLAUDE_MODEL)`
    "#]
    pub fn resolve(model_name: &str) -> (Self, String) {
        if model_name.contains("claude") {
            (LlmProvider::Claude, model_name.to_string())
        } else if model_name.contains("gemini") {
            (LlmProvider::Gemini, model_name.to_string())
        } else if model_name.contains("deepseek") {
            (LlmProvider::DeepSeek, model_name.to_string())
        } else if model_name.contains("grok") {
            (LlmProvider::Groq, model_name.to_string())
        } else {
            (LlmProvider::Claude, DEFAULT_CLAUDE_MODEL.to_string())
        }
    }

    #[doc = "provider 별 API key 환경변수명"]
    pub fn api_key_env(&self) -> &'static str {
        match self {
            LlmProvider::Claude => "ANTHROPIC_API_KEY",
            LlmProvider::Gemini => "GEMINI_API_KEY",
            LlmProvider::DeepSeek => "DEEP_SEEK_API_KEY",
            LlmProvider::Groq => "GROK_API_KEY",
        }
    }
}
