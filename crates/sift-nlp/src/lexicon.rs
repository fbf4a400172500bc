//! Immutable word lists shared by every heuristic
//!
//! A [`LexiconConfig`] is plain serializable data (loadable from TOML); a
//! [`Lexicon`] is the compiled, hash-set backed form. Build one lexicon per
//! deployment and hand the same `Arc<Lexicon>` to the scorer and the
//! taxonomy.

use crate::NlpError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Technical category a term can fall into
///
/// Declaration order is the precedence used by [`Lexicon::categorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermCategory {
    /// Programming languages
    Language,
    /// Frameworks and libraries
    Framework,
    /// Developer tools
    Tool,
    /// APIs and SDKs
    Api,
    /// Computer science concepts
    Concept,
    /// Data storage and formats
    Data,
    /// System architecture
    Architecture,
}

impl TermCategory {
    /// All categories in precedence order
    pub const ALL: [TermCategory; 7] = [
        TermCategory::Language,
        TermCategory::Framework,
        TermCategory::Tool,
        TermCategory::Api,
        TermCategory::Concept,
        TermCategory::Data,
        TermCategory::Architecture,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TermCategory::Language => "language",
            TermCategory::Framework => "framework",
            TermCategory::Tool => "tool",
            TermCategory::Api => "api",
            TermCategory::Concept => "concept",
            TermCategory::Data => "data",
            TermCategory::Architecture => "architecture",
        }
    }
}

/// Word and affix patterns identifying one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryPatterns {
    /// Exact words
    pub words: Vec<String>,
    /// Suffixes (the term must be longer than the suffix)
    pub suffixes: Vec<String>,
    /// Substrings
    pub contains: Vec<String>,
}

impl CategoryPatterns {
    fn new(words: &[&str], suffixes: &[&str], contains: &[&str]) -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            words: owned(words),
            suffixes: owned(suffixes),
            contains: owned(contains),
        }
    }
}

/// Serializable lexicon configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Function words ignored by every heuristic
    pub stop_words: Vec<String>,

    /// Suffixes that mark a word as a noun-like concept
    pub noun_suffixes: Vec<String>,

    /// Sentiment word scores (positive and negative integers)
    pub sentiment: BTreeMap<String, i32>,

    /// Programming language patterns
    pub languages: CategoryPatterns,

    /// Framework and library patterns
    pub frameworks: CategoryPatterns,

    /// Developer tool patterns
    pub tools: CategoryPatterns,

    /// API and SDK patterns
    pub apis: CategoryPatterns,

    /// Computer science concept patterns
    pub concepts: CategoryPatterns,

    /// Data storage and format patterns
    pub data: CategoryPatterns,

    /// Architecture patterns
    pub architecture: CategoryPatterns,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let stop_words = [
            "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
            "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
            "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
            "during", "each", "few", "for", "from", "further", "had", "has", "have", "having",
            "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
            "its", "itself", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of",
            "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
            "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
            "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to",
            "too", "under", "until", "up", "use", "using", "very", "was", "we", "were", "what",
            "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
            "you", "your", "yours",
        ];

        let sentiment = [
            ("amazing", 4),
            ("awesome", 4),
            ("best", 3),
            ("excellent", 3),
            ("great", 3),
            ("love", 3),
            ("clean", 2),
            ("clear", 2),
            ("easy", 2),
            ("efficient", 2),
            ("elegant", 2),
            ("fast", 2),
            ("good", 2),
            ("helpful", 2),
            ("powerful", 2),
            ("recommended", 2),
            ("reliable", 2),
            ("robust", 2),
            ("useful", 2),
            ("simple", 1),
            ("stable", 1),
            ("deprecated", -1),
            ("confusing", -2),
            ("fail", -2),
            ("failed", -2),
            ("poor", -2),
            ("slow", -2),
            ("useless", -2),
            ("wrong", -2),
            ("awful", -3),
            ("bad", -3),
            ("hate", -3),
            ("horrible", -3),
            ("terrible", -3),
            ("worst", -3),
        ];

        Self {
            stop_words: stop_words.iter().map(|s| s.to_string()).collect(),
            sentiment: sentiment.iter().map(|(w, s)| (w.to_string(), *s)).collect(),
            noun_suffixes: [
                "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ism", "ure", "ware",
                "work", "base", "ory", "ics",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            languages: CategoryPatterns::new(
                &[
                    "javascript", "typescript", "python", "rust", "java", "kotlin", "swift",
                    "ruby", "php", "scala", "haskell", "elixir", "erlang", "clojure", "golang",
                    "c++", "csharp", "dart", "lua", "perl", "julia", "zig", "ocaml", "fortran",
                    "cobol",
                ],
                &["script", "lang"],
                &[],
            ),
            frameworks: CategoryPatterns::new(
                &[
                    "react", "angular", "vue", "svelte", "django", "flask", "rails", "spring",
                    "express", "laravel", "tokio", "actix", "axum", "fastapi", "nextjs", "nuxt",
                    "tensorflow", "pytorch", "pandas", "numpy",
                ],
                &["js", "kit"],
                &["framework"],
            ),
            tools: CategoryPatterns::new(
                &[
                    "docker", "kubernetes", "git", "webpack", "vite", "babel", "eslint", "cargo",
                    "npm", "yarn", "terraform", "ansible", "jenkins", "make", "cmake", "vim",
                ],
                &["cli", "ctl", "pack"],
                &[],
            ),
            apis: CategoryPatterns::new(
                &[
                    "api", "sdk", "rest", "graphql", "grpc", "websocket", "oauth", "openapi",
                    "webhook",
                ],
                &["api", "sdk"],
                &["api-", "-api", "sdk-", "-sdk"],
            ),
            concepts: CategoryPatterns::new(
                &[
                    "algorithm", "recursion", "closure", "polymorphism", "inheritance",
                    "concurrency", "parallelism", "memoization", "idempotency", "immutability",
                    "encapsulation", "abstraction", "generics", "async", "coroutine",
                ],
                &["ization", "ism"],
                &[],
            ),
            data: CategoryPatterns::new(
                &[
                    "database", "schema", "query", "index", "dataset", "json", "yaml", "csv",
                    "sql", "nosql", "postgres", "mysql", "sqlite", "redis", "mongodb",
                ],
                &["db", "sql", "ql"],
                &["data"],
            ),
            architecture: CategoryPatterns::new(
                &[
                    "microservice", "microservices", "monolith", "serverless", "middleware",
                    "pub-sub", "cqrs", "mvc", "mvvm",
                ],
                &["-driven", "-oriented"],
                &["microservice", "architecture"],
            ),
        }
    }
}

impl LexiconConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), NlpError> {
        if self.stop_words.iter().any(|w| w.trim().is_empty()) {
            return Err(NlpError::Config("stop_words must not contain empty entries".to_string()));
        }
        if self.sentiment.keys().any(|w| w.trim().is_empty()) {
            return Err(NlpError::Config("sentiment words must not be empty".to_string()));
        }
        for (category, patterns) in self.categories() {
            let empty_affix = patterns
                .suffixes
                .iter()
                .chain(&patterns.contains)
                .any(|p| p.is_empty());
            if empty_affix {
                return Err(NlpError::Config(format!(
                    "{} patterns must not contain empty affixes",
                    category.as_str()
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, NlpError> {
        toml::from_str(toml_str)
            .map_err(|e| NlpError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, NlpError> {
        toml::to_string_pretty(self)
            .map_err(|e| NlpError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    fn categories(&self) -> [(TermCategory, &CategoryPatterns); 7] {
        [
            (TermCategory::Language, &self.languages),
            (TermCategory::Framework, &self.frameworks),
            (TermCategory::Tool, &self.tools),
            (TermCategory::Api, &self.apis),
            (TermCategory::Concept, &self.concepts),
            (TermCategory::Data, &self.data),
            (TermCategory::Architecture, &self.architecture),
        ]
    }
}

#[derive(Debug, Clone, Default)]
struct CompiledPatterns {
    words: HashSet<String>,
    suffixes: Vec<String>,
    contains: Vec<String>,
}

impl CompiledPatterns {
    fn compile(patterns: &CategoryPatterns) -> Self {
        let lower = |list: &[String]| list.iter().map(|s| s.to_lowercase()).collect();
        Self {
            words: patterns.words.iter().map(|w| w.to_lowercase()).collect(),
            suffixes: lower(&patterns.suffixes),
            contains: lower(&patterns.contains),
        }
    }

    fn matches(&self, term: &str) -> bool {
        self.words.contains(term)
            || self
                .suffixes
                .iter()
                .any(|s| term.len() > s.len() && term.ends_with(s.as_str()))
            || self.contains.iter().any(|c| term.contains(c.as_str()))
    }
}

/// Compiled, immutable lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    sentiment: HashMap<String, i32>,
    noun_suffixes: Vec<String>,
    categories: HashMap<TermCategory, CompiledPatterns>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::compile(&LexiconConfig::default())
    }
}

impl Lexicon {
    /// Build a lexicon from a validated configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, NlpError> {
        config.validate()?;
        Ok(Self::compile(config))
    }

    fn compile(config: &LexiconConfig) -> Self {
        let categories: HashMap<_, _> = config
            .categories()
            .into_iter()
            .map(|(category, patterns)| (category, CompiledPatterns::compile(patterns)))
            .collect();

        let lexicon = Self {
            stop_words: config.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            sentiment: config
                .sentiment
                .iter()
                .map(|(w, s)| (w.to_lowercase(), *s))
                .collect(),
            noun_suffixes: config.noun_suffixes.iter().map(|s| s.to_lowercase()).collect(),
            categories,
        };

        debug!(
            "Compiled lexicon: {} stop-words, {} sentiment words",
            lexicon.stop_words.len(),
            lexicon.sentiment.len()
        );

        lexicon
    }

    /// Whether the (lower-case) word is a stop-word
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Sentiment score of a (lower-case) word, 0 when unknown
    pub fn sentiment_of(&self, word: &str) -> i32 {
        self.sentiment.get(word).copied().unwrap_or(0)
    }

    /// Whether the (lower-case) word ends in a noun-forming suffix
    pub fn has_noun_suffix(&self, word: &str) -> bool {
        self.noun_suffixes
            .iter()
            .any(|s| word.len() > s.len() + 1 && word.ends_with(s.as_str()))
    }

    /// Whether the term matches the patterns of one specific category
    pub fn is_category(&self, term: &str, category: TermCategory) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|p| p.matches(&term.to_lowercase()))
    }

    /// First category (in precedence order) the term matches
    pub fn categorize(&self, term: &str) -> Option<TermCategory> {
        let term = term.to_lowercase();
        TermCategory::ALL.into_iter().find(|c| {
            self.categories
                .get(c)
                .is_some_and(|p| p.matches(&term))
        })
    }

    /// Whether the term matches any technical category
    pub fn is_technical(&self, term: &str) -> bool {
        self.categorize(term).is_some()
    }
}
