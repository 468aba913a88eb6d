//! Payload assembly — preamble, retrieved data, verbatim question.
//!
//! Deterministic string concatenation in a fixed order. No truncation or
//! summarization: an oversized retrieved-data block is passed through
//! unchanged and payload size limits are the backend caller's problem.

/// The fixed instruction preamble sent with every request.
pub const SYSTEM_PROMPT: &str = "\
你是「台中旅遊小幫手」，專門回答台中市旅遊相關問題的 AI 助理。

規則：
1. 只回答與台中市相關的旅遊問題（景點、美食、交通、住宿、YouBike 等）
2. 回答要親切、簡潔，使用繁體中文
3. 若提供了即時資料，請以資料為準回答
4. 不確定的資訊請說明是建議性質，避免捏造";

/// The fixed reply for out-of-scope messages. A terminal outcome, not an
/// error.
pub const OUT_OF_SCOPE_MESSAGE: &str = "\
抱歉，我只能回答與台中旅遊相關的問題喔！\
歡迎問我台中的景點、美食、交通或 YouBike 站點資訊。";

/// Inline notice embedded when the station lookup fails.
pub const LOOKUP_FAILED_NOTICE: &str =
    "\n\n【資料庫查詢失敗】\n抱歉，目前無法查詢 YouBike 資料，請稍後再試。\n";

/// Header wrapped around successfully retrieved station data.
pub const RETRIEVED_DATA_HEADER: &str = "\n\n【資料庫查詢結果 - 即時 YouBike 資料】\n";

/// Trailer after retrieved station data.
pub const RETRIEVED_DATA_TRAILER: &str = "\n請根據以上即時資料回答使用者的問題。\n";

/// Delimiter before the verbatim user question.
pub const USER_QUESTION_HEADER: &str = "\n【使用者問題】\n";

/// Assemble the outbound payload: preamble, then the station context block
/// (possibly empty, passed through as-is), then the verbatim user message.
pub fn build_payload(message: &str, station_context: &str) -> String {
    let mut payload = String::with_capacity(
        SYSTEM_PROMPT.len() + station_context.len() + USER_QUESTION_HEADER.len() + message.len() + 2,
    );

    payload.push_str(SYSTEM_PROMPT);
    payload.push_str("\n\n");

    if !station_context.is_empty() {
        payload.push_str(station_context);
    }

    payload.push_str(USER_QUESTION_HEADER);
    payload.push_str(message);

    payload
}

/// Wrap formatted station records in the retrieved-data delimiters.
pub fn wrap_station_data(formatted: &str) -> String {
    format!("{RETRIEVED_DATA_HEADER}{formatted}{RETRIEVED_DATA_TRAILER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_omits_retrieved_data_section() {
        let payload = build_payload("逢甲夜市有什麼好吃的？", "");
        assert!(payload.starts_with(SYSTEM_PROMPT));
        assert!(payload.contains("【使用者問題】\n逢甲夜市有什麼好吃的？"));
        assert!(!payload.contains("資料庫查詢結果"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let context = wrap_station_data("找到 1 個 YouBike 站點：…");
        let payload = build_payload("火車站附近有車嗎？", &context);

        let preamble = payload.find(SYSTEM_PROMPT).unwrap();
        let data = payload.find("【資料庫查詢結果").unwrap();
        let question = payload.find("【使用者問題】").unwrap();
        assert!(preamble < data);
        assert!(data < question);
    }

    #[test]
    fn user_message_is_verbatim() {
        let message = "高美濕地  的夕陽，幾點最好看？？";
        let payload = build_payload(message, "");
        assert!(payload.contains(message));
    }

    #[test]
    fn large_context_passes_through_unchanged() {
        let context = wrap_station_data(&"很長的資料".repeat(10_000));
        let payload = build_payload("msg", &context);
        assert!(payload.contains(&context));
    }
}
