use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPostRecord {
    pub author: String,
    pub post_title: Option<String>,
    pub post_body_text: String,
    pub region_code: Option<String>,
    pub region_display_name: Option<String>,
    pub region_emoji: Option<String>,
    pub star_rating: f64,
    pub comment_count: usize,
    pub frag_count: String,
    pub source_path: String,
}

impl ForumPostRecord {
    pub fn new(author: String, post_body_text: String, source_path: String) -> Self {
        Self {
            author,
            post_title: None,
            post_body_text,
            region_code: None,
            region_display_name: None,
            region_emoji: None,
            star_rating: 0.0,
            comment_count: 0,
            frag_count: String::new(),
            source_path,
        }
    }

    pub fn with_title(mut self, post_title: Option<String>) -> Self {
        self.post_title = post_title;
        self
    }

    pub fn with_region(mut self, code: String, display_name: String, emoji: String) -> Self {
        self.region_code = Some(code);
        self.region_display_name = Some(display_name);
        self.region_emoji = Some(emoji);
        self
    }

    pub fn with_star_rating(mut self, star_rating: f64) -> Self {
        self.star_rating = star_rating;
        self
    }

    pub fn with_comment_count(mut self, comment_count: usize) -> Self {
        self.comment_count = comment_count;
        self
    }

    pub fn with_frag_count(mut self, frag_count: String) -> Self {
        self.frag_count = frag_count;
        self
    }
}
