use crate::common::*;

#[async_trait]
pub trait LlmRepository: Send + Sync {
    #[doc = "프롬프트를 LLM 에 전달하고 응답 본문의 텍스트를 반환"]
    async fn invoke(&self, prompt: &str) -> Result<String, anyhow::Error>;
}
