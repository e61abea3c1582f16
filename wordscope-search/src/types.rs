//! Core types for search modes, outbound parameters and normalised results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// The query modes the word-association service can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchType {
    /// Words with a meaning similar to the input (`ml`).
    SimilarMeaning,
    /// Similar-meaning words starting with a given letter.
    StartsWithLetter,
    /// Similar-meaning words ending with a given letter.
    EndsWithLetter,
    /// Words that sound like the input (`sl`).
    SoundsLike,
    /// Words matching `<first>` + N wildcard letters + `<last>`.
    LetterPattern,
    /// Words spelled like the input, wildcards allowed (`sp`).
    SpelledLike,
    /// Adjectives commonly used to describe a noun (`rel_jjb`).
    AdjectivesFor,
    /// Adjectives for a noun, qualified by a topic.
    AdjectivesByTopic,
    /// Nouns commonly described by an adjective (`rel_jja`).
    NounsForAdjective,
    /// Words that follow a word in context and start with a letter.
    FollowsInContext,
    /// Words statistically triggered by the input (`rel_trg`).
    TriggeredBy,
    /// Autocomplete suggestions from the suggestion endpoint.
    Suggestion,
}

impl SearchType {
    /// Returns the wire/tag name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimilarMeaning => "similar-meaning",
            Self::StartsWithLetter => "starts-with-letter",
            Self::EndsWithLetter => "ends-with-letter",
            Self::SoundsLike => "sounds-like",
            Self::LetterPattern => "letter-pattern",
            Self::SpelledLike => "spelled-like",
            Self::AdjectivesFor => "adjectives-for",
            Self::AdjectivesByTopic => "adjectives-by-topic",
            Self::NounsForAdjective => "nouns-for-adjective",
            Self::FollowsInContext => "follows-in-context",
            Self::TriggeredBy => "triggered-by",
            Self::Suggestion => "suggestion",
        }
    }

    /// Short human description, shown in listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SimilarMeaning => "words with a similar meaning",
            Self::StartsWithLetter => "similar-meaning words starting with a letter",
            Self::EndsWithLetter => "similar-meaning words ending with a letter",
            Self::SoundsLike => "words that sound like the input",
            Self::LetterPattern => "words matching first letter, N middle letters, last letter",
            Self::SpelledLike => "words spelled like the input",
            Self::AdjectivesFor => "adjectives used to describe a noun",
            Self::AdjectivesByTopic => "adjectives for a noun within a topic",
            Self::NounsForAdjective => "nouns described by an adjective",
            Self::FollowsInContext => "words following a word, starting with a letter",
            Self::TriggeredBy => "words associated with the input",
            Self::Suggestion => "autocomplete suggestions for a prefix",
        }
    }

    /// An example input that satisfies this mode's grammar.
    pub fn example(&self) -> &'static str {
        match self {
            Self::SimilarMeaning => "ringing in the ears",
            Self::StartsWithLetter => "duck b",
            Self::EndsWithLetter => "spoon a",
            Self::SoundsLike => "jirraf",
            Self::LetterPattern => "t k 2",
            Self::SpelledLike => "hipopatamus",
            Self::AdjectivesFor => "ocean",
            Self::AdjectivesByTopic => "sea temperature",
            Self::NounsForAdjective => "yellow",
            Self::FollowsInContext => "drink c",
            Self::TriggeredBy => "cow",
            Self::Suggestion => "rawand",
        }
    }

    /// Returns all available modes in display order.
    pub fn all() -> &'static [SearchType] {
        &[
            Self::SimilarMeaning,
            Self::StartsWithLetter,
            Self::EndsWithLetter,
            Self::SoundsLike,
            Self::LetterPattern,
            Self::SpelledLike,
            Self::AdjectivesFor,
            Self::AdjectivesByTopic,
            Self::NounsForAdjective,
            Self::FollowsInContext,
            Self::TriggeredBy,
            Self::Suggestion,
        ]
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search mode as named by a caller-supplied tag.
///
/// Recognised tags resolve to a [`SearchType`]. Anything else is kept
/// verbatim and searched as similar-meaning, but still counts as its own
/// mode: it keeps its name in history labels and gets the fallback call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchTag {
    /// One of the twelve known modes.
    Known(SearchType),
    /// An unrecognised tag, trimmed.
    Unknown(String),
}

impl SearchTag {
    /// Resolve `tag` permissively; never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse() {
            Ok(search_type) => Self::Known(search_type),
            Err(_) => {
                tracing::debug!(tag, "unknown search type, searching similar-meaning");
                Self::Unknown(tag.trim().to_owned())
            }
        }
    }

    /// Mode whose grammar and parameters are used for the lookup.
    pub fn search_type(&self) -> SearchType {
        match self {
            Self::Known(search_type) => *search_type,
            Self::Unknown(_) => SearchType::SimilarMeaning,
        }
    }

    /// Whether a failed lookup gets one similar-meaning fallback call.
    pub fn allows_fallback(&self) -> bool {
        !matches!(
            self,
            Self::Known(SearchType::SimilarMeaning | SearchType::Suggestion)
        )
    }
}

impl From<SearchType> for SearchTag {
    fn from(search_type: SearchType) -> Self {
        Self::Known(search_type)
    }
}

impl fmt::Display for SearchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(search_type) => f.write_str(search_type.name()),
            Self::Unknown(tag) => f.write_str(tag),
        }
    }
}

impl FromStr for SearchType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| SearchError::Validation(format!("unknown search type `{s}`")))
    }
}

/// Which remote endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The word-association lookup endpoint (`/words`).
    Lookup,
    /// The autocomplete endpoint (`/sug`).
    Suggestion,
}

impl Endpoint {
    /// URL path of the endpoint relative to the configured base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Lookup => "words",
            Self::Suggestion => "sug",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Ordered outbound query parameters.
///
/// Order is insertion order so that the same `(type, input)` always yields
/// the same query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an earlier value for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name.to_owned(), value)),
        }
        self
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A single normalised word returned by the service.
///
/// Every field is always present; see [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The word or phrase. Never empty.
    pub word: String,
    /// Relevance score reported by the service, 0 when absent.
    pub score: f64,
    /// Service tags (parts of speech, pronunciation, ...), plus
    /// `fallback_search` when produced by the fallback path.
    pub tags: Vec<String>,
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)?;
        if !self.tags.is_empty() {
            write!(f, " [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Outcome of a single search execution. Never an error: every failure is
/// folded into [`SearchOutcome::Failure`] with a user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The search completed; the list may be empty.
    Success(Vec<ResultRecord>),
    /// The search failed; the message is suitable for display.
    Failure(String),
}

impl SearchOutcome {
    /// Whether this is a [`SearchOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
