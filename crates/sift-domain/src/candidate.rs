//! Content candidates - the unit of relevance scoring

use std::collections::BTreeMap;

/// Where a candidate was discovered
///
/// The tag drives the source-reliability prior; it carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentSource {
    /// Official project or API documentation
    Documentation,
    /// Papers and academic publications
    Academic,
    /// Repositories, issues, READMEs
    GitHub,
    /// Stack Overflow questions and answers
    StackOverflow,
    /// Personal or company blogs
    Blog,
    /// Step-by-step tutorials
    Tutorial,
    /// Video platforms
    Video,
    /// Discussion forums
    Forum,
    /// Anything else found on the open web
    Web,
    /// Files on the local machine
    Local,
}

impl ContentSource {
    /// All source tags, in declaration order
    pub const ALL: [ContentSource; 10] = [
        ContentSource::Documentation,
        ContentSource::Academic,
        ContentSource::GitHub,
        ContentSource::StackOverflow,
        ContentSource::Blog,
        ContentSource::Tutorial,
        ContentSource::Video,
        ContentSource::Forum,
        ContentSource::Web,
        ContentSource::Local,
    ];

    /// Get the source tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::Documentation => "documentation",
            ContentSource::Academic => "academic",
            ContentSource::GitHub => "github",
            ContentSource::StackOverflow => "stackoverflow",
            ContentSource::Blog => "blog",
            ContentSource::Tutorial => "tutorial",
            ContentSource::Video => "video",
            ContentSource::Forum => "forum",
            ContentSource::Web => "web",
            ContentSource::Local => "local",
        }
    }

    /// Parse a source tag, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "documentation" | "docs" => Some(ContentSource::Documentation),
            "academic" => Some(ContentSource::Academic),
            "github" => Some(ContentSource::GitHub),
            "stackoverflow" => Some(ContentSource::StackOverflow),
            "blog" => Some(ContentSource::Blog),
            "tutorial" => Some(ContentSource::Tutorial),
            "video" | "youtube" => Some(ContentSource::Video),
            "forum" | "reddit" => Some(ContentSource::Forum),
            "web" => Some(ContentSource::Web),
            "local" => Some(ContentSource::Local),
            _ => None,
        }
    }

    /// Parse a source tag, falling back to [`ContentSource::Web`] for unknown tags
    pub fn parse_or_web(s: &str) -> Self {
        Self::parse(s).unwrap_or(ContentSource::Web)
    }
}

impl std::str::FromStr for ContentSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid content source: {}", s))
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form metadata attached by the discovery collaborator
///
/// Every field is optional. Numeric fields are `f64` because discovery
/// hands them over untyped; they may be negative or non-finite and the
/// scorer must cope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateMetadata {
    /// Publish date as text (RFC 3339, `YYYY-MM-DD`, or unix seconds)
    pub published_at: Option<String>,

    /// View count
    pub view_count: Option<f64>,

    /// Platform score (votes, stars, points)
    pub score: Option<f64>,

    /// Number of comments
    pub comment_count: Option<f64>,

    /// Tags assigned at the source
    pub tags: Vec<String>,

    /// Canonical URL
    pub url: Option<String>,

    /// Anything else discovery wants to pass along
    pub extra: BTreeMap<String, String>,
}

/// A discovered content item awaiting scoring
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCandidate {
    /// Title as shown at the source
    pub title: String,

    /// Full body text
    pub body: String,

    /// Source tag
    pub source: ContentSource,

    /// Discovery metadata
    pub metadata: CandidateMetadata,
}

impl ContentCandidate {
    /// Create a candidate with empty metadata
    pub fn new(title: impl Into<String>, body: impl Into<String>, source: ContentSource) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            source,
            metadata: CandidateMetadata::default(),
        }
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: CandidateMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
