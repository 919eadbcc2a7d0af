use crate::catalog::{Catalog, Template};
use crate::matcher::TemplateMatcher;
use crate::variant::AnimationIntent;

/// Applies the catalog filters in order and returns the surviving
/// templates: validity and custom-exclusion first, then query matching in
/// the matcher's own ranking order (or lexicographic (name, id) ordering
/// when no query was given), then the animation style filter.
///
/// Pure function of the snapshot and its parameters; an empty catalog or
/// a query with no matches yields an empty result, not an error.
pub fn select<'a>(
    catalog: &'a Catalog,
    query: &str,
    animated: AnimationIntent,
    matcher: &dyn TemplateMatcher,
) -> Vec<&'a Template> {
    let listed = catalog.iter().filter(|template| is_listed(template));

    let mut results: Vec<&Template> = if query.is_empty() {
        let mut all: Vec<&Template> = listed.collect();
        all.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        all
    } else {
        let mut scored: Vec<(i64, &Template)> = listed
            .filter_map(|template| {
                matcher
                    .score(template, query)
                    .map(|score| (score, template))
            })
            .collect();
        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| a.sort_key().cmp(&b.sort_key()))
        });
        scored.into_iter().map(|(_, template)| template).collect()
    };

    results.retain(|template| style_allows(template, animated));
    tracing::debug!(
        "Selected {} templates for query {:?} with {:?} filter",
        results.len(),
        query,
        animated
    );
    results
}

// Custom templates never appear in default listings.
fn is_listed(template: &Template) -> bool {
    template.valid && !template.custom
}

fn style_allows(template: &Template, animated: AnimationIntent) -> bool {
    match animated {
        AnimationIntent::Unspecified => true,
        AnimationIntent::Animated => template.is_animated(),
        AnimationIntent::Static => !template.is_animated(),
    }
}
