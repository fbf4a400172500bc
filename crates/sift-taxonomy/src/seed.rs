//! Static vocabulary and default domain registry

use crate::DomainConfig;
use sift_domain::TaxonomyTerm;
use sift_nlp::TermCategory;

/// Domain used for terms the lexicon cannot place
pub const GENERAL_DOMAIN: &str = "general";

/// Static seed table: (domain, category, terms)
const SEED_TABLE: &[(&str, &str, &[&str])] = &[
    (
        "programming",
        "language",
        &[
            "javascript", "typescript", "python", "rust", "java", "golang", "kotlin",
            "swift", "ruby", "csharp", "cpp", "scala", "elixir", "haskell",
        ],
    ),
    (
        "programming",
        "concept",
        &[
            "algorithm", "recursion", "closure", "concurrency", "polymorphism",
            "inheritance", "async", "generics", "immutability",
        ],
    ),
    (
        "web",
        "framework",
        &[
            "react", "vue", "angular", "svelte", "nextjs", "express", "django", "flask",
            "rails", "spring",
        ],
    ),
    (
        "web",
        "api",
        &["rest", "graphql", "websocket", "oauth", "grpc", "webhook"],
    ),
    (
        "devops",
        "tool",
        &[
            "docker", "kubernetes", "terraform", "ansible", "jenkins", "git", "webpack",
            "nginx",
        ],
    ),
    (
        "data",
        "database",
        &[
            "postgresql", "mysql", "mongodb", "redis", "sqlite", "elasticsearch",
            "cassandra", "kafka",
        ],
    ),
    (
        "architecture",
        "pattern",
        &[
            "microservices", "serverless", "monolith", "mvc", "event-driven", "cqrs",
            "hexagonal",
        ],
    ),
    (
        "machine-learning",
        "library",
        &["tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "keras"],
    ),
];

/// Every seeded term, as static terms with confidence 1.0
pub fn static_terms() -> impl Iterator<Item = TaxonomyTerm> {
    SEED_TABLE.iter().flat_map(|(domain, category, terms)| {
        terms
            .iter()
            .map(move |term| TaxonomyTerm::seeded(*term, *domain, *category))
    })
}

/// Domain and category a learned term is filed under
pub fn placement(category: Option<TermCategory>) -> (&'static str, &'static str) {
    match category {
        Some(TermCategory::Language) => ("programming", "language"),
        Some(TermCategory::Concept) => ("programming", "concept"),
        Some(TermCategory::Framework) => ("web", "framework"),
        Some(TermCategory::Api) => ("web", "api"),
        Some(TermCategory::Tool) => ("devops", "tool"),
        Some(TermCategory::Data) => ("data", "database"),
        Some(TermCategory::Architecture) => ("architecture", "pattern"),
        None => (GENERAL_DOMAIN, GENERAL_DOMAIN),
    }
}

fn domain(
    name: &str,
    description: &str,
    categories: &[&str],
    keywords: &[&str],
) -> DomainConfig {
    DomainConfig {
        name: name.to_string(),
        description: description.to_string(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        confidence_threshold: 0.5,
        parent: None,
    }
}

/// The default domain registry
pub fn default_domains() -> Vec<DomainConfig> {
    let mut ml = domain(
        "machine-learning",
        "Machine learning libraries and techniques",
        &["library", "model"],
        &["learn", "neural", "tensor", "torch", "model"],
    );
    ml.parent = Some("programming".to_string());

    vec![
        domain(
            "programming",
            "Programming languages and core concepts",
            &["language", "concept"],
            &["lang", "script", "code", "compile", "algorithm"],
        ),
        domain(
            "web",
            "Web frameworks and APIs",
            &["framework", "api"],
            &["web", "http", "api", "js", "css", "html"],
        ),
        domain(
            "devops",
            "Build, deployment and operations tooling",
            &["tool"],
            &["ops", "deploy", "ci", "container", "cli"],
        ),
        domain(
            "data",
            "Databases and data infrastructure",
            &["database"],
            &["db", "sql", "data", "query", "stream"],
        ),
        domain(
            "architecture",
            "System design patterns",
            &["pattern"],
            &["service", "driven", "pattern", "architecture"],
        ),
        ml,
        domain(
            GENERAL_DOMAIN,
            "Terms not yet placed in a specific domain",
            &[GENERAL_DOMAIN],
            &[],
        ),
    ]
}
