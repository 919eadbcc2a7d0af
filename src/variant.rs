use crate::catalog::Template;
use crate::config::Settings;
use serde::{Deserialize, Serialize};

/// Caller intent for the rendered variant of a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationIntent {
    #[default]
    Unspecified,
    Animated,
    Static,
}

impl AnimationIntent {
    /// Maps an optional boolean query flag from the request layer.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Unspecified,
            Some(true) => Self::Animated,
            Some(false) => Self::Static,
        }
    }
}

/// Picks the output image extension for a template.
///
/// An explicitly animated request always wins, even for templates without
/// an animated style recorded; whether the asset actually exists is the
/// renderer's concern. Otherwise a template's native animated form is
/// preferred unless the caller asked for static, and the configured
/// default extension covers the rest.
///
/// `exact` marks resolutions that follow an explicit animation filter in
/// selection, where the surviving templates already agree with the
/// requested variant.
pub fn resolve_extension<'a>(
    settings: &'a Settings,
    template: &Template,
    requested: AnimationIntent,
    exact: bool,
) -> &'a str {
    if exact {
        debug_assert!(
            match requested {
                AnimationIntent::Animated => template.is_animated(),
                AnimationIntent::Static => !template.is_animated(),
                AnimationIntent::Unspecified => true,
            },
            "exact resolution for template `{}` disagrees with its styles",
            template.id
        );
    }
    match requested {
        AnimationIntent::Animated => &settings.animated_extension,
        AnimationIntent::Static => &settings.default_extension,
        AnimationIntent::Unspecified if template.is_animated() => &settings.animated_extension,
        AnimationIntent::Unspecified => &settings.default_extension,
    }
}
