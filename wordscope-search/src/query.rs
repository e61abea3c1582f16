//! Query parameter construction.
//!
//! Maps a [`SearchType`] and raw user text to the outbound parameters of the
//! lookup endpoint, validating compound inputs before anything is sent.

use crate::error::{Result, SearchError};
use crate::types::{QueryParams, SearchTag, SearchType};

/// Result-count cap attached to every lookup.
pub const MAX_RESULTS: usize = 100;

/// Largest accepted wildcard run for [`SearchType::LetterPattern`].
pub const MAX_PATTERN_GAP: usize = 64;

/// Build the lookup parameters for `search_type` from raw `input`.
///
/// The input is trimmed first. Compound modes are validated against their
/// grammar and rejected with [`SearchError::Validation`]; every other mode
/// forwards the whole trimmed input under its relation parameter. Every
/// successful build carries `max=100`.
///
/// [`SearchType::Suggestion`] is delegated to [`suggestion_params`] and
/// carries no `max`.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] for empty input or input that does not
/// match the grammar of a compound mode.
pub fn build(search_type: SearchType, input: &str) -> Result<QueryParams> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SearchError::Validation("empty input".into()));
    }

    let mut params = QueryParams::new();
    match search_type {
        SearchType::Suggestion => return suggestion_params(input),
        SearchType::SimilarMeaning => {
            params.set("ml", input);
        }
        SearchType::StartsWithLetter => {
            let (word, letter) = word_and_letter(search_type, input)?;
            params.set("ml", word).set("sp", format!("{letter}*"));
        }
        SearchType::EndsWithLetter => {
            let (word, letter) = word_and_letter(search_type, input)?;
            params.set("ml", word).set("sp", format!("*{letter}"));
        }
        SearchType::FollowsInContext => {
            let (word, letter) = word_and_letter(search_type, input)?;
            params.set("lc", word).set("sp", format!("{letter}*"));
        }
        SearchType::LetterPattern => {
            params.set("sp", letter_pattern(input)?);
        }
        SearchType::AdjectivesByTopic => {
            let tokens: Vec<&str> = input.split_whitespace().collect();
            if tokens.len() < 2 {
                return Err(grammar_error(search_type, "a noun followed by a topic"));
            }
            // The topic is accepted but not sent; only the noun drives the relation.
            params.set("rel_jjb", tokens[0]);
        }
        SearchType::SoundsLike => {
            params.set("sl", input);
        }
        SearchType::SpelledLike => {
            params.set("sp", input);
        }
        SearchType::AdjectivesFor => {
            params.set("rel_jjb", input);
        }
        SearchType::NounsForAdjective => {
            params.set("rel_jja", input);
        }
        SearchType::TriggeredBy => {
            params.set("rel_trg", input);
        }
    }
    params.set("max", MAX_RESULTS.to_string());
    Ok(params)
}

/// Build the lookup parameters for a tag given as a string.
///
/// Unknown tags build similar-meaning parameters; see [`SearchTag`].
///
/// # Errors
///
/// Same as [`build`].
pub fn build_for_tag(tag: &str, input: &str) -> Result<QueryParams> {
    build(SearchTag::from_tag(tag).search_type(), input)
}

/// Parameters for the suggestion endpoint: the trimmed prefix as `s`.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] for empty input.
pub fn suggestion_params(input: &str) -> Result<QueryParams> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SearchError::Validation("empty input".into()));
    }
    let mut params = QueryParams::new();
    params.set("s", input);
    Ok(params)
}

/// Parameters used by the degraded fallback call: the raw trimmed input as
/// a similar-meaning query, without grammar validation.
pub fn fallback_params(input: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .set("ml", input.trim())
        .set("max", MAX_RESULTS.to_string());
    params
}

/// Split `"<word> <letter>"`, requiring exactly two tokens and a one-character
/// second token.
fn word_and_letter(search_type: SearchType, input: &str) -> Result<(&str, &str)> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [word, letter] if letter.chars().count() == 1 => Ok((*word, *letter)),
        _ => Err(grammar_error(search_type, "a word followed by a single letter")),
    }
}

/// Expand `"<first> <last> <n>"` into `<first>` + `?`×n + `<last>`, where
/// `n` is an integer from 0 to [`MAX_PATTERN_GAP`].
fn letter_pattern(input: &str) -> Result<String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [first, last, gap] = tokens.as_slice() else {
        return Err(grammar_error(
            SearchType::LetterPattern,
            "first letter, last letter and number of middle letters",
        ));
    };
    let gap = gap
        .parse::<usize>()
        .ok()
        .filter(|n| *n <= MAX_PATTERN_GAP)
        .ok_or_else(|| {
            SearchError::Validation(format!(
                "number of middle letters must be an integer from 0 to {MAX_PATTERN_GAP}, \
                 got `{gap}` (e.g. \"{}\")",
                SearchType::LetterPattern.example()
            ))
        })?;
    Ok(format!("{first}{}{last}", "?".repeat(gap)))
}

fn grammar_error(search_type: SearchType, shape: &str) -> SearchError {
    SearchError::Validation(format!(
        "{search_type} expects {shape}, e.g. \"{}\"",
        search_type.example()
    ))
}
