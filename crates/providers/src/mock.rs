//! Mock backend — no network, canned replies.
//!
//! The startup default: lets the full pipeline run before any credential is
//! configured. Picks one of a small pool of templates echoing the payload
//! verbatim, after an artificial 1–2 s delay that emulates network latency.
//! The choice is pseudo-random (payload hash mixed with the clock), so it is
//! not a source of test flakiness when asserting on the echoed text.

use async_trait::async_trait;
use tracing::debug;

use cityguide_core::error::ProviderError;
use cityguide_core::{ChatBackend, Message};

/// Simulated backend with canned replies.
pub struct MockBackend;

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self
    }

    fn render_reply(payload: &str, pick: usize) -> String {
        match pick % 4 {
            0 => format!(
                "我收到你的訊息了：「{payload}」。這是一個模擬回應，設定好真實的 AI API 後，我就能真正理解並回應你的問題！"
            ),
            1 => format!(
                "關於「{payload}」，這個問題很有趣！目前我在模擬模式下運行，要獲得真正的 AI 回應，請設定 API Key。"
            ),
            2 => format!(
                "你說的「{payload}」我明白了。提示：目前是測試模式，可以設定 OpenAI、Anthropic 或 Gemini 的 API。"
            ),
            _ => format!(
                "收到訊息：{payload}。想要更智能的回應嗎？試試設定真實的 AI 服務吧！"
            ),
        }
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn chat(
        &self,
        payload: &str,
        _history: &[Message],
    ) -> std::result::Result<String, ProviderError> {
        let seed = pseudo_random(payload);

        // 1000–2000 ms, like a real round trip.
        let delay_ms = 1000 + (seed % 1000) as u64;
        debug!(backend = "mock", delay_ms, "Simulating network latency");
        tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;

        Ok(Self::render_reply(payload, (seed / 1000) as usize))
    }
}

/// Cheap pseudo-randomness: payload hash mixed with the clock.
fn pseudo_random(payload: &str) -> u32 {
    let hash: u32 = payload
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);

    hash.wrapping_add(nanos)
}
