mod forum_post;
mod match_record;
mod preview;
mod score;

pub use forum_post::ForumPostRecord;
pub use match_record::{MatchRecord, MatchStatus};
pub use preview::{ExtractOutcome, Preview};
pub use score::{MapScore, ScorePair};
