//! Learning context - where a piece of text came from

use std::collections::BTreeMap;

/// Kind of content being learned from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Reference documentation
    Documentation,
    /// Source code
    Code,
    /// Articles and blog posts
    Article,
    /// Q&A threads and forum discussions
    Discussion,
    /// Anything else
    Other(String),
}

impl ContentType {
    /// Get the content type as a string
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Documentation => "documentation",
            ContentType::Code => "code",
            ContentType::Article => "article",
            ContentType::Discussion => "discussion",
            ContentType::Other(s) => s,
        }
    }

    /// Parse a content type; unknown names become [`ContentType::Other`]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "documentation" | "docs" => ContentType::Documentation,
            "code" => ContentType::Code,
            "article" => ContentType::Article,
            "discussion" => ContentType::Discussion,
            other => ContentType::Other(other.to_string()),
        }
    }
}

/// Platform a piece of content was published on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    /// github.com
    GitHub,
    /// stackoverflow.com
    StackOverflow,
    /// Generic web
    Web,
    /// Local files
    Local,
    /// Anything else
    Other(String),
}

impl Platform {
    /// Get the platform as a string
    pub fn as_str(&self) -> &str {
        match self {
            Platform::GitHub => "github",
            Platform::StackOverflow => "stackoverflow",
            Platform::Web => "web",
            Platform::Local => "local",
            Platform::Other(s) => s,
        }
    }

    /// Parse a platform; unknown names become [`Platform::Other`]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "github" => Platform::GitHub,
            "stackoverflow" => Platform::StackOverflow,
            "web" => Platform::Web,
            "local" => Platform::Local,
            other => Platform::Other(other.to_string()),
        }
    }
}

/// Context accompanying text handed to the taxonomy for learning
#[derive(Debug, Clone, PartialEq)]
pub struct LearningContext {
    /// Identifier of the content source (URL, path, document id)
    pub source_id: String,

    /// Kind of content
    pub content_type: ContentType,

    /// Publishing platform
    pub platform: Platform,

    /// Optional free-text feedback from the user
    pub user_feedback: Option<String>,

    /// Optional natural or programming language of the content
    pub language: Option<String>,

    /// Free-form metadata
    pub metadata: BTreeMap<String, String>,
}

impl LearningContext {
    /// Create a context with no feedback, language, or metadata
    pub fn new(
        source_id: impl Into<String>,
        content_type: ContentType,
        platform: Platform,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            content_type,
            platform,
            user_feedback: None,
            language: None,
            metadata: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse() {
        assert_eq!(ContentType::parse("Docs"), ContentType::Documentation);
        assert_eq!(ContentType::parse("code"), ContentType::Code);
        assert_eq!(ContentType::parse("podcast").as_str(), "podcast");
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!(Platform::parse("GitHub"), Platform::GitHub);
        assert_eq!(Platform::parse("gitlab"), Platform::Other("gitlab".to_string()));
    }
}
