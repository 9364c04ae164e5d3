use crate::common::*;

use crate::enums::llm_provider::*;

use crate::traits::repository_traits::llm_repository::*;

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEEPSEEK_CHAT_URL: &str = "https://api.deepseek.com/chat/completions";
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const MAX_OUTPUT_TOKENS: u32 = 1024;

#[doc = r#"
    모델명 substring dispatch 로 선택된 provider 하나에 대한 LLM 클라이언트.

    모든 호출은 temperature 0 의 단발 user 메시지이며,
    응답 본문에서 텍스트 컨텐츠만 추출해서 돌려준다.
"#]
#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct LlmRepositoryImpl {
    provider: LlmProvider,
    model: String,
    client: Client,
}

impl LlmRepositoryImpl {
    pub fn new(model_name: &str) -> Result<Self, anyhow::Error> {
        let (provider, model) = LlmProvider::resolve(model_name);

        let client: Client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| {
                anyhow!(
                    "[LlmRepositoryImpl->new] Failed to build the HTTP client: {:?}",
                    e
                )
            })?;

        Ok(LlmRepositoryImpl {
            provider,
            model,
            client,
        })
    }

    #[doc = "선택된 provider 의 API key 를 환경변수에서 조회"]
    fn api_key(&self) -> Result<String, anyhow::Error> {
        let key_name: &str = self.provider.api_key_env();

        env::var(key_name)
            .map_err(|_| anyhow!("[LlmRepositoryImpl->api_key] '{}' must be set", key_name))
    }

    async fn invoke_claude(&self, prompt: &str) -> Result<String, anyhow::Error> {
        let body: Value = json!({
            "model": self.model,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "temperature": 0,
            "messages": [{ "role": "user", "content": prompt }]
        });

        let response = self
            .client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", self.api_key()?)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let response_body: Value = Self::check_response(response, "invoke_claude").await?;

        response_body
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|first| first.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!("[LlmRepositoryImpl->invoke_claude] Missing 'content[0].text' in the response")
            })
    }

    async fn invoke_gemini(&self, prompt: &str) -> Result<String, anyhow::Error> {
        let url: String = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL,
            self.model,
            self.api_key()?
        );

        let body: Value = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0 }
        });

        let response = self.client.post(&url).json(&body).send().await?;

        let response_body: Value = Self::check_response(response, "invoke_gemini").await?;

        response_body
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|first| first.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!(
                    "[LlmRepositoryImpl->invoke_gemini] Missing 'candidates[0].content.parts[0].text' in the response"
                )
            })
    }

    #[doc = "DeepSeek / Groq 공용의 OpenAI 호환 chat completion 호출"]
    async fn invoke_openai_compatible(
        &self,
        endpoint: &str,
        prompt: &str,
    ) -> Result<String, anyhow::Error> {
        let body: Value = json!({
            "model": self.model,
            "temperature": 0,
            "messages": [{ "role": "user", "content": prompt }]
        });

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(self.api_key()?)
            .json(&body)
            .send()
            .await?;

        let response_body: Value =
            Self::check_response(response, "invoke_openai_compatible").await?;

        response_body
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|first| first.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!(
                    "[LlmRepositoryImpl->invoke_openai_compatible] Missing 'choices[0].message.content' in the response"
                )
            })
    }

    #[doc = "응답 status 검증 후 JSON 본문으로 역직렬화"]
    async fn check_response(
        response: reqwest::Response,
        caller: &str,
    ) -> Result<Value, anyhow::Error> {
        if response.status().is_success() {
            let response_body: Value = response.json::<Value>().await?;
            Ok(response_body)
        } else {
            let error_body: String = response.text().await?;
            Err(anyhow!(
                "[LlmRepositoryImpl->{}] response status is failed: {:?}",
                caller,
                error_body
            ))
        }
    }
}

#[async_trait]
impl LlmRepository for LlmRepositoryImpl {
    async fn invoke(&self, prompt: &str) -> Result<String, anyhow::Error> {
        match self.provider {
            LlmProvider::Claude => self.invoke_claude(prompt).await,
            LlmProvider::Gemini => self.invoke_gemini(prompt).await,
            LlmProvider::DeepSeek => self.invoke_openai_compatible(DEEPSEEK_CHAT_URL, prompt).await,
            LlmProvider::Groq => self.invoke_openai_compatible(GROQ_CHAT_URL, prompt).await,
        }
    }
}
