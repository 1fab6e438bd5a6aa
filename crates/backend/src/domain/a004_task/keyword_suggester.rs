use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::llm::{self, ChatMessage, LlmError, LlmProvider};

/// Upper bound on suggestions returned per title
const MAX_SUGGESTIONS: usize = 5;

/// Words too generic to suggest as keywords
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "into", "that", "this", "then", "than", "onto", "about",
    "para", "com", "uma", "dos", "das", "los", "las", "del", "por",
];

#[async_trait]
pub trait KeywordSuggester: Send + Sync {
    /// Suggestions for `title`; `known` holds the stored keyword names
    async fn suggest(&self, title: &str, known: &[String]) -> Vec<String>;
}

/// Local suggestions: stored keywords found in the title, then the
/// title's significant words
pub struct HeuristicSuggester;

fn title_words(title: &str) -> Vec<String> {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// True when the keyword's words appear consecutively in the title
fn mentions(words: &[String], keyword: &str) -> bool {
    let phrase = title_words(keyword);
    !phrase.is_empty() && words.windows(phrase.len()).any(|w| w == phrase.as_slice())
}

#[async_trait]
impl KeywordSuggester for HeuristicSuggester {
    async fn suggest(&self, title: &str, known: &[String]) -> Vec<String> {
        let words = title_words(title);
        let mut out: Vec<String> = Vec::new();

        for name in known {
            let lowered = name.to_lowercase();
            if mentions(&words, &lowered) && !out.contains(&lowered) {
                out.push(lowered);
            }
        }
        for word in words {
            if out.len() >= MAX_SUGGESTIONS {
                break;
            }
            if word.chars().count() < 4 || STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            if word.chars().all(|c| c.is_ascii_digit()) || out.contains(&word) {
                continue;
            }
            out.push(word);
        }
        out.truncate(MAX_SUGGESTIONS);
        out
    }
}

/// Suggestions from the configured chat model; falls back to the heuristic
/// whenever the call or the parsing fails
pub struct LlmSuggester {
    provider: Arc<dyn LlmProvider>,
}

impl LlmSuggester {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    async fn ask(&self, title: &str, known: &[String]) -> Result<Vec<String>, LlmError> {
        let messages = vec![
            ChatMessage::system(
                "You suggest short keywords for to-do tasks. Answer only with a JSON array \
                 of at most 5 lowercase strings.",
            ),
            ChatMessage::user(format!(
                "Existing keywords: {}\n\nSuggest relevant keywords for the following task title:\n\nTask Title: {}\n\nKeywords:",
                known.join(", "),
                title
            )),
        ];
        let response = self.provider.chat_completion(messages).await?;
        tracing::debug!(
            "Keyword suggestion answered by {} (tokens: {:?})",
            response.model,
            response.tokens_used
        );
        parse_keyword_list(&response.content)
    }
}

#[async_trait]
impl KeywordSuggester for LlmSuggester {
    async fn suggest(&self, title: &str, known: &[String]) -> Vec<String> {
        match self.ask(title, known).await {
            Ok(mut keywords) => {
                keywords.truncate(MAX_SUGGESTIONS);
                keywords
            }
            Err(e) => {
                tracing::warn!("AI keyword suggestion failed, using heuristic: {}", e);
                HeuristicSuggester.suggest(title, known).await
            }
        }
    }
}

/// Parse a model answer: a JSON array, a `{"keywords": [...]}` object, or a
/// comma/newline separated list (bullets and numbering stripped)
pub fn parse_keyword_list(content: &str) -> Result<Vec<String>, LlmError> {
    let trimmed = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    if let Ok(list) = serde_json::from_str::<Vec<String>>(trimmed) {
        return Ok(list);
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(items) = value.get("keywords").and_then(|v| v.as_array()) {
            return Ok(items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect());
        }
    }

    let items: Vec<String> = trimmed
        .split([',', '\n'])
        .map(|s| {
            s.trim()
                .trim_start_matches(|c: char| c == '-' || c == '*' || c == '.' || c.is_ascii_digit())
                .trim()
                .trim_matches('"')
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        return Err(LlmError::InvalidResponse(content.to_string()));
    }
    Ok(items)
}

/// LLM-backed suggester when a provider is configured, heuristic otherwise
pub fn default_suggester() -> Box<dyn KeywordSuggester> {
    match llm::provider() {
        Some(provider) => Box::new(LlmSuggester::new(provider)),
        None => Box::new(HeuristicSuggester),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::LlmResponse;

    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn chat_completion(&self, _: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
            Err(LlmError::RateLimitExceeded)
        }

        fn provider_name(&self) -> &str {
            "failing"
        }
    }

    struct FixedProvider(&'static str);

    #[async_trait]
    impl LlmProvider for FixedProvider {
        async fn chat_completion(&self, _: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse {
                content: self.0.to_string(),
                tokens_used: Some(12),
                model: "fixed".into(),
            })
        }

        fn provider_name(&self) -> &str {
            "fixed"
        }
    }

    fn known() -> Vec<String> {
        ["development", "design", "planning", "AI", "frontend"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_parse_json_array() {
        let parsed = parse_keyword_list(r#"["ui", "layout"]"#).unwrap();
        assert_eq!(parsed, vec!["ui", "layout"]);
    }

    #[test]
    fn test_parse_fenced_object() {
        let parsed = parse_keyword_list("```json\n{\"keywords\": [\"api\"]}\n```").unwrap();
        assert_eq!(parsed, vec!["api"]);
    }

    #[test]
    fn test_parse_bulleted_list() {
        let parsed = parse_keyword_list("1. testing\n- backend\n* api, rust").unwrap();
        assert_eq!(parsed, vec!["testing", "backend", "api", "rust"]);
    }

    #[test]
    fn test_parse_empty_answer_is_error() {
        assert!(parse_keyword_list("  \n ").is_err());
    }

    #[tokio::test]
    async fn test_heuristic_prefers_known_keywords() {
        let out = HeuristicSuggester
            .suggest("Integrate AI keyword suggestions", &known())
            .await;
        assert_eq!(out[0], "ai");
        assert!(out.contains(&"integrate".to_string()));
        assert!(out.contains(&"keyword".to_string()));
        assert!(out.len() <= MAX_SUGGESTIONS);
    }

    #[tokio::test]
    async fn test_heuristic_matches_multi_word_keywords() {
        let known = vec!["status toggle".to_string(), "toggle switch".to_string()];
        let out = HeuristicSuggester
            .suggest("Develop status toggle functionality", &known)
            .await;
        assert_eq!(out[0], "status toggle");
        assert!(!out.contains(&"toggle switch".to_string()));

        let out = HeuristicSuggester.suggest("Fix the status page", &known).await;
        assert!(!out.contains(&"status toggle".to_string()));
    }

    #[test]
    fn test_mentions_respects_word_boundaries() {
        let words = title_words("Refactor statusbar toggle");
        assert!(!mentions(&words, "status toggle"));
        assert!(mentions(&words, "Statusbar Toggle"));
        assert!(!mentions(&words, "  "));
    }

    #[tokio::test]
    async fn test_heuristic_skips_stop_words() {
        let out = HeuristicSuggester.suggest("Design the UI layout", &known()).await;
        assert_eq!(out, vec!["design", "layout"]);
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_to_heuristic() {
        let suggester = LlmSuggester::new(Arc::new(FailingProvider));
        let out = suggester.suggest("Design the UI layout", &known()).await;
        assert_eq!(out, vec!["design", "layout"]);
    }

    #[tokio::test]
    async fn test_llm_answer_is_used() {
        let suggester = LlmSuggester::new(Arc::new(FixedProvider(r#"["ux", "mockups"]"#)));
        let out = suggester.suggest("Design the UI layout", &known()).await;
        assert_eq!(out, vec!["ux", "mockups"]);
    }
}
