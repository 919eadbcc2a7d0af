use crate::catalog::Template;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Decides whether a template satisfies a free-text query.
///
/// Implementations must be total, deterministic and side-effect-free.
/// `Some(score)` marks a match; higher scores rank earlier in search
/// results.
pub trait TemplateMatcher {
    fn score(&self, template: &Template, query: &str) -> Option<i64>;

    fn matches(&self, template: &Template, query: &str) -> bool {
        self.score(template, query).is_some()
    }
}

fn candidate_fields(template: &Template) -> impl Iterator<Item = &str> {
    std::iter::once(template.id.as_str())
        .chain(std::iter::once(template.name.as_str()))
        .chain(template.aliases.iter().map(String::as_str))
}

/// Case-insensitive substring matching over id, name and aliases.
/// Earlier hits in shorter fields rank higher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TemplateMatcher for SubstringMatcher {
    fn score(&self, template: &Template, query: &str) -> Option<i64> {
        let needle = query.to_lowercase();
        candidate_fields(template)
            .filter_map(|field| {
                let haystack = field.to_lowercase();
                haystack
                    .find(&needle)
                    .map(|position| -((position * 100 + haystack.len()) as i64))
            })
            .max()
    }
}

/// Fuzzy matching backed by `SkimMatcherV2`, for partial and out-of-order
/// tokens. The best score across id, name and aliases wins.
#[derive(Default)]
pub struct SkimTemplateMatcher {
    matcher: SkimMatcherV2,
}

impl TemplateMatcher for SkimTemplateMatcher {
    fn score(&self, template: &Template, query: &str) -> Option<i64> {
        candidate_fields(template)
            .filter_map(|field| self.matcher.fuzzy_match(field, query))
            .max()
    }
}
