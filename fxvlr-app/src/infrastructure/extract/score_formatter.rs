use crate::domain::{MapScore, ScorePair};

const WIN_MARKER: &str = "🟢";
const LOSS_MARKER: &str = "🔴";
const NEUTRAL_MARKER: &str = "⚫";

pub struct ScoreFormatter;

impl ScoreFormatter {
    /// One line per consecutive pair of map scores. A trailing unpaired score
    /// produces no line.
    pub fn format(team1: &str, team2: &str, scores: &[MapScore]) -> Vec<String> {
        ScorePair::pair_up(scores)
            .iter()
            .map(|pair| Self::format_pair(team1, team2, pair))
            .collect()
    }

    pub fn format_pair(team1: &str, team2: &str, pair: &ScorePair) -> String {
        let body = format!("{} {} - {} {}", team1, pair.team1, pair.team2, team2);
        if !pair.has_winner() {
            return format!("{NEUTRAL_MARKER} {body} {NEUTRAL_MARKER}");
        }
        format!(
            "{} {} {}",
            Self::marker(pair.team1.is_win),
            body,
            Self::marker(pair.team2.is_win)
        )
    }

    fn marker(is_win: bool) -> &'static str {
        if is_win {
            WIN_MARKER
        } else {
            LOSS_MARKER
        }
    }
}
