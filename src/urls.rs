use crate::catalog::Template;
use crate::config::{Settings, TestFixture};
use crate::text::{self, EncodeError};
use url::Url;

/// `(example_url, self_url)`: a rendered sample image plus the canonical
/// template resource.
pub type ExamplePair = (Url, Url);

pub fn build_self_url(settings: &Settings, template: &Template) -> Url {
    let mut url = settings.base_url.clone();
    url.set_path(&format!("templates/{}", template.id));
    url
}

/// Builds the sample rendering URL for a template, falling back to the
/// configured placeholder text when the template carries no example
/// caption of its own.
pub fn build_example_url(
    settings: &Settings,
    template: &Template,
    extension: &str,
) -> Result<Url, EncodeError> {
    let lines: &[String] = if template.example.is_empty() {
        &settings.placeholder_text
    } else {
        &template.example
    };
    image_url(settings, &template.id, lines, extension)
}

pub fn build_example_pair(
    settings: &Settings,
    template: &Template,
    extension: &str,
) -> Result<ExamplePair, EncodeError> {
    Ok((
        build_example_url(settings, template, extension)?,
        build_self_url(settings, template),
    ))
}

/// One test image URL per fixture, in fixture order.
pub fn build_test_urls(
    settings: &Settings,
    fixtures: &[TestFixture],
) -> Result<Vec<Url>, EncodeError> {
    fixtures
        .iter()
        .map(|fixture| image_url(settings, &fixture.template_id, &fixture.lines, &fixture.extension))
        .collect()
}

fn image_url<S: AsRef<str>>(
    settings: &Settings,
    template_id: &str,
    lines: &[S],
    extension: &str,
) -> Result<Url, EncodeError> {
    let text_path = text::encode(lines)?;
    let mut url = settings.base_url.clone();
    url.set_path(&format!("images/{template_id}/{text_path}.{extension}"));
    tracing::trace!("Built image URL {}", url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Template;

    fn settings() -> Settings {
        Settings::default()
    }

    fn drake() -> Template {
        Template::new("drake", "Drake Hotline Bling")
            .with_example(["no new memes", "reuse old memes"])
    }

    #[test]
    fn test_self_url() {
        let url = build_self_url(&settings(), &drake());
        assert_eq!(url.as_str(), "http://localhost:5000/templates/drake");
    }

    #[test]
    fn test_example_url_uses_template_text() {
        let url = build_example_url(&settings(), &drake(), "png").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/images/drake/no_new_memes/reuse_old_memes.png"
        );
    }

    #[test]
    fn test_example_url_placeholder_fallback() {
        let bare = Template::new("blank", "Blank Canvas");
        let url = build_example_url(&settings(), &bare, "png").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/images/blank/your_text/goes_here.png"
        );
    }

    #[test]
    fn test_example_pair_is_idempotent() {
        let settings = settings();
        let first = build_example_pair(&settings, &drake(), "gif").unwrap();
        let second = build_example_pair(&settings, &drake(), "gif").unwrap();
        assert_eq!(first, second);
        assert!(first.0.path().ends_with(".gif"));
    }

    #[test]
    fn test_test_urls_follow_fixture_order() {
        let settings = settings();
        let fixtures = vec![
            TestFixture {
                template_id: "drake".to_string(),
                lines: vec!["top text".to_string(), "bottom text".to_string()],
                extension: "png".to_string(),
            },
            TestFixture {
                template_id: "ds".to_string(),
                lines: vec!["left".to_string(), "right".to_string()],
                extension: "gif".to_string(),
            },
        ];

        let urls = build_test_urls(&settings, &fixtures).unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls[0].as_str(),
            "http://localhost:5000/images/drake/top_text/bottom_text.png"
        );
        assert_eq!(
            urls[1].as_str(),
            "http://localhost:5000/images/ds/left/right.gif"
        );
    }

    #[test]
    fn test_fixture_url_decodes_back() {
        let settings = settings();
        let fixtures = vec![TestFixture {
            template_id: "drake".to_string(),
            lines: vec!["top text".to_string(), "bottom text".to_string()],
            extension: "png".to_string(),
        }];

        let url = build_test_urls(&settings, &fixtures).unwrap().remove(0);
        let path = url.path();
        let encoded = path
            .strip_prefix("/images/drake/")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        assert_eq!(
            crate::text::decode(encoded).unwrap(),
            vec!["top text", "bottom text"]
        );
    }

    #[test]
    fn test_custom_base_url() {
        let mut settings = settings();
        settings.base_url = Url::parse("https://memes.example.com").unwrap();
        let url = build_self_url(&settings, &drake());
        assert_eq!(url.as_str(), "https://memes.example.com/templates/drake");
    }
}
