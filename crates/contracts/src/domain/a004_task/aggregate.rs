use serde::{Deserialize, Serialize};

/// Minimum title length before keyword suggestions are attempted
pub const SUGGESTION_MIN_TITLE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i32,
    pub name: String,
}

/// To-do item with its attached keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub is_done: bool,
    pub keywords: Vec<Keyword>,
}

/// DTO for `POST /api/tasks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDto {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TaskDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestKeywordsRequest {
    pub task_title: String,
    /// Keywords the user already picked; never suggested again
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestKeywordsResponse {
    pub keywords: Vec<String>,
}

/// Trim, lowercase and dedupe keyword names, keeping first-seen order.
pub fn normalize_keyword_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let normalized = name.as_ref().trim().to_lowercase();
        if normalized.is_empty() || out.contains(&normalized) {
            continue;
        }
        out.push(normalized);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_is_rejected() {
        let dto = TaskDto {
            title: "   ".into(),
            keywords: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_normalize_keyword_names() {
        let names = normalize_keyword_names(&["  Design", "design", "", "AI", "ai ", "frontend"]);
        assert_eq!(names, vec!["design", "ai", "frontend"]);
    }
}
