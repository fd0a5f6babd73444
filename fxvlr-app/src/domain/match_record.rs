use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Upcoming,
    Finished,
}

/// Header data of one match page, already resolved for display.
///
/// `score_text` and `game_result_lines` always agree with `status`:
/// upcoming matches carry the countdown, live ones the `LIVE` marker and
/// finished ones an `N:M` score with one line per played map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1: String,
    pub team2: String,
    pub status: MatchStatus,
    pub score_text: String,
    pub game_result_lines: Vec<String>,
    pub winner_image_url: String,
    pub match_date_text: String,
    pub match_time_text: String,
    pub source_path: String,
}

impl MatchRecord {
    pub fn title(&self) -> String {
        format!("{} {} {}", self.team1, self.score_text, self.team2)
    }
}
