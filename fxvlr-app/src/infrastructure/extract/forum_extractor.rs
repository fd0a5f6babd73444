use super::region::RegionResolver;
use super::star_rating::StarRatingMethod;
use crate::domain::{ExtractOutcome, ForumPostRecord};
use crate::infrastructure::dom::{element_text, mod_value, select_within, DomView};

const AUTHOR: &str = "a.post-header-author";
const TITLE: &str = "h1";
const POST_BODY: &str = ".post-body";
const POST: &str = ".post";
const FRAG_COUNT: &str = "#thread-frag-count";
const STARS: &str = ".post-header-stars";
const FLAG: &str = "i.post-header-flag.flag";

pub struct ForumExtractor {
    star_rating: StarRatingMethod,
}

impl ForumExtractor {
    pub fn new(star_rating: StarRatingMethod) -> Self {
        Self { star_rating }
    }

    pub fn extract(&self, dom: &DomView, source_path: &str) -> ExtractOutcome<ForumPostRecord> {
        let author = dom.nth_text(AUTHOR, 0);
        let body = Self::post_body(dom);

        if author.is_empty() || body.is_empty() {
            tracing::debug!("{} has no author or post body", source_path);
            return ExtractOutcome::NotApplicable;
        }

        let title = Some(dom.nth_text(TITLE, 0)).filter(|t| !t.is_empty());
        let star_rating = dom
            .first(STARS)
            .map(|stars| self.star_rating.rate(&stars))
            .unwrap_or_default();

        let mut record = ForumPostRecord::new(author, body, source_path.to_string())
            .with_title(title)
            .with_star_rating(star_rating)
            .with_comment_count(dom.count(POST))
            .with_frag_count(dom.nth_text(FRAG_COUNT, 0));

        match Self::region_code(dom).and_then(|code| RegionResolver::resolve(&code)) {
            Some(region) => {
                record = record.with_region(region.code, region.display_name, region.emoji);
            }
            None => tracing::debug!("{} has no usable region flag", source_path),
        }

        ExtractOutcome::Matched(record)
    }

    /// Paragraphs of the first post body, one per line. Falls back to the
    /// body's whole text when it has no paragraphs.
    fn post_body(dom: &DomView) -> String {
        let Some(body) = dom.first(POST_BODY) else {
            return String::new();
        };

        let paragraphs: Vec<String> = select_within(&body, "p")
            .iter()
            .map(|p| element_text(p).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if paragraphs.is_empty() {
            element_text(&body).trim().to_string()
        } else {
            paragraphs.join("\n")
        }
    }

    fn region_code(dom: &DomView) -> Option<String> {
        dom.select(FLAG)
            .iter()
            .find_map(|flag| mod_value(flag).map(str::to_string))
    }
}

impl Default for ForumExtractor {
    fn default() -> Self {
        Self::new(StarRatingMethod::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "https://vlr.gg/123456/great-series";

    fn forum_page(flag_class: &str, stars: &str, body: &str) -> String {
        format!(
            r#"<html><body>
            <div class="wf-card">
              <h1 class="wf-title"> Grand final thoughts </h1>
              <div id="thread-frag-count"> 42 </div>
            </div>
            <div class="post">
              <div class="post-header">
                <i class="post-header-flag flag {flag_class}"></i>
                <a class="post-header-author" href="/user/nitro">nitro</a>
                <div class="post-header-stars">{stars}</div>
              </div>
              <div class="post-body">{body}</div>
            </div>
            <div class="post"><div class="post-body"><p>reply one</p></div></div>
            <div class="post"><div class="post-body"><p>reply two</p></div></div>
            </body></html>"#
        )
    }

    const THREE_STARS: &str = r#"<i class="star mod-3"></i><i class="star mod-3"></i><i class="star mod-3"></i>"#;

    #[test]
    fn test_forum_post_with_region() {
        let html = forum_page("mod-br", THREE_STARS, "<p>Great series</p>");
        let record = ForumExtractor::default()
            .extract(&DomView::parse(&html), SOURCE)
            .into_option()
            .unwrap();

        assert_eq!(record.author, "nitro");
        assert_eq!(record.post_body_text, "Great series");
        assert_eq!(record.post_title.as_deref(), Some("Grand final thoughts"));
        assert_eq!(record.star_rating, 3.0);
        assert_eq!(record.comment_count, 3);
        assert_eq!(record.frag_count, "42");
        assert_eq!(record.region_code.as_deref(), Some("br"));
        assert_eq!(record.region_display_name.as_deref(), Some("Brazil"));
        assert_eq!(record.region_emoji.as_deref(), Some("🇧🇷"));
        assert_eq!(record.source_path, SOURCE);
    }

    #[test]
    fn test_malformed_region_leaves_fields_empty() {
        let html = forum_page("mod-usa", THREE_STARS, "<p>Great series</p>");
        let record = ForumExtractor::default()
            .extract(&DomView::parse(&html), SOURCE)
            .into_option()
            .unwrap();

        assert!(record.region_code.is_none());
        assert!(record.region_display_name.is_none());
        assert!(record.region_emoji.is_none());
    }

    #[test]
    fn test_flag_without_mod_class() {
        let html = forum_page("", THREE_STARS, "<p>Great series</p>");
        let record = ForumExtractor::default()
            .extract(&DomView::parse(&html), SOURCE)
            .into_option()
            .unwrap();
        assert!(record.region_code.is_none());
    }

    #[test]
    fn test_multiple_paragraphs_join_per_line() {
        let html = forum_page("mod-us", "", "<p>first</p><p> </p><p>second</p>");
        let record = ForumExtractor::default()
            .extract(&DomView::parse(&html), SOURCE)
            .into_option()
            .unwrap();
        assert_eq!(record.post_body_text, "first\nsecond");
        assert_eq!(record.star_rating, 0.0);
    }

    #[test]
    fn test_body_without_paragraphs_uses_whole_text() {
        let html = forum_page("mod-us", "", "  plain body text  ");
        let record = ForumExtractor::default()
            .extract(&DomView::parse(&html), SOURCE)
            .into_option()
            .unwrap();
        assert_eq!(record.post_body_text, "plain body text");
    }

    #[test]
    fn test_empty_body_is_not_a_forum_post() {
        let html = forum_page("mod-us", THREE_STARS, "");
        let outcome = ForumExtractor::default().extract(&DomView::parse(&html), SOURCE);
        assert_eq!(outcome, ExtractOutcome::NotApplicable);
    }

    #[test]
    fn test_missing_author_is_not_a_forum_post() {
        let html = r#"<div class="post-body"><p>orphan</p></div>"#;
        let outcome = ForumExtractor::default().extract(&DomView::parse(html), SOURCE);
        assert!(!outcome.is_matched());
    }
}
