use super::forum_extractor::ForumExtractor;
use super::match_extractor::MatchExtractor;
use crate::domain::{ExtractOutcome, Preview};
use crate::infrastructure::dom::DomView;

/// Decides what a page is. Match pages are tried first: a thread can look
/// like a match page's comment section, but never carries the score header.
pub struct PageClassifier {
    forum: ForumExtractor,
}

impl PageClassifier {
    pub fn new(forum: ForumExtractor) -> Self {
        Self { forum }
    }

    pub fn classify(&self, dom: &DomView, source_path: &str) -> Preview {
        if let ExtractOutcome::Matched(record) = MatchExtractor::extract(dom, source_path) {
            return Preview::Match(record);
        }
        if let ExtractOutcome::Matched(record) = self.forum.extract(dom, source_path) {
            return Preview::Forum(record);
        }
        Preview::Unclassified
    }

    pub fn classify_html(&self, html: &str, source_path: &str) -> Preview {
        self.classify(&DomView::parse(html), source_path)
    }
}

impl Default for PageClassifier {
    fn default() -> Self {
        Self::new(ForumExtractor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCH_WITH_COMMENTS: &str = r#"
        <div class="match-header-date">
          <div class="moment-tz-convert">Saturday, May 3rd</div>
          <div class="moment-tz-convert">2:00 PM PDT</div>
        </div>
        <a class="match-header-link mod-1"><img src="//owcdn.net/a.png">
          <div class="match-header-link-name mod-1"><div class="wf-title-med">Alpha</div></div></a>
        <div class="match-header-vs-score"><div class="js-spoiler">
          <span>2</span><span>:</span><span>0</span></div></div>
        <a class="match-header-link mod-2"><img src="//owcdn.net/b.png">
          <div class="match-header-link-name mod-2"><div class="wf-title-med">Beta</div></div></a>
        <div class="post">
          <a class="post-header-author">someone</a>
          <div class="post-body"><p>gg</p></div>
        </div>
    "#;

    const FORUM: &str = r#"
        <div class="post">
          <i class="post-header-flag flag mod-kr"></i>
          <a class="post-header-author">nitro</a>
          <div class="post-body"><p>Great series</p></div>
        </div>
    "#;

    #[test]
    fn test_match_takes_precedence_over_forum() {
        let preview = PageClassifier::default().classify_html(MATCH_WITH_COMMENTS, "/1");
        match preview {
            Preview::Match(record) => assert_eq!(record.score_text, "2:0"),
            other => panic!("expected match, got {}", other.kind()),
        }
    }

    #[test]
    fn test_forum_page() {
        let preview = PageClassifier::default().classify_html(FORUM, "/2");
        match preview {
            Preview::Forum(record) => {
                assert_eq!(record.author, "nitro");
                assert_eq!(record.region_display_name.as_deref(), Some("South Korea"));
            }
            other => panic!("expected forum, got {}", other.kind()),
        }
    }

    #[test]
    fn test_unclassified_page() {
        let preview = PageClassifier::default().classify_html("<html><body><h1>404</h1></body></html>", "/3");
        assert_eq!(preview, Preview::Unclassified);
    }
}
