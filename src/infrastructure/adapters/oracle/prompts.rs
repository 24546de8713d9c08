//! Gemini Prompts - 提示词构造
//!
//! 网关的"逻辑"全部在提示词里；集中一处便于核对与调整

/// 书卷/主题深度洞见
pub fn deep_insight(topic: &str) -> String {
    format!(
        "Provide a deep, historical, and spiritual insight about the biblical topic or book: \
         \"{}\". Include historical context, cultural background, and why it's significant today. \
         Also mention if there are any related \"hidden stories\" or excluded texts that shed \
         more light on this.",
        topic
    )
}

/// 每日灵修短文
pub fn daily_devotional() -> &'static str {
    "Write a short, inspiring daily devotional for today. Include a focus verse, a brief \
     reflection, and a short prayer. Make it encouraging and spiritually profound."
}

/// 单节经文注释
pub fn verse_commentary(verse_text: &str) -> String {
    format!(
        "Explain the deep theological meaning and historical context of the verse: \"{}\". \
         Break down the original Greek/Hebrew meanings where relevant.",
        verse_text
    )
}

/// 朗读合成（语气指示 + 正文）
pub fn narration(text: &str) -> String {
    format!(
        "Read this biblical passage with a solemn, wise, and comforting tone: {}",
        text
    )
}

/// 圣经地名接地查询
pub fn locate(place: &str) -> String {
    format!(
        "Tell me about the biblical significance of {}. Show me its importance in the Bible \
         and its modern-day location.",
        place
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_subject() {
        assert!(deep_insight("Genesis").contains("\"Genesis\""));
        assert!(verse_commentary("Let there be light").contains("Let there be light"));
        assert!(narration("Psalm text").ends_with("Psalm text"));
        assert!(locate("Jericho").contains("Jericho"));
    }
}
