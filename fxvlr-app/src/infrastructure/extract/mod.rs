mod classifier;
mod forum_extractor;
mod match_extractor;
mod region;
mod score_formatter;
mod star_rating;
mod text;

pub use classifier::PageClassifier;
pub use forum_extractor::ForumExtractor;
pub use match_extractor::{MatchExtractor, LIVE_PLACEHOLDER_LINE, LIVE_SCORE_TEXT};
pub use region::{Region, RegionResolver};
pub use score_formatter::ScoreFormatter;
pub use star_rating::{rate_from_mod_classes, rate_from_style_width, round_to_half, StarRatingMethod};
pub use text::{collapse_line_breaks, normalize_img_url, parse_leading_int};
