use serde::{Deserialize, Serialize};
use std::fmt;

/// One team's score on one map, as read from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapScore {
    pub score: Option<u32>,
    pub is_win: bool,
}

impl MapScore {
    pub fn new(score: Option<u32>, is_win: bool) -> Self {
        Self { score, is_win }
    }
}

impl fmt::Display for MapScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.score {
            Some(score) => write!(f, "{score}"),
            None => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub team1: MapScore,
    pub team2: MapScore,
}

impl ScorePair {
    /// Pairs scores strictly two at a time in document order. A trailing
    /// unpaired score is dropped.
    pub fn pair_up(scores: &[MapScore]) -> Vec<ScorePair> {
        scores
            .chunks_exact(2)
            .map(|pair| ScorePair {
                team1: pair[0],
                team2: pair[1],
            })
            .collect()
    }

    pub fn has_winner(&self) -> bool {
        self.team1.is_win || self.team2.is_win
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_up_drops_trailing_score() {
        let scores = [
            MapScore::new(Some(13), true),
            MapScore::new(Some(5), false),
            MapScore::new(Some(9), false),
        ];
        let pairs = ScorePair::pair_up(&scores);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].team1.score, Some(13));
        assert_eq!(pairs[0].team2.score, Some(5));
    }

    #[test]
    fn test_missing_score_displays_dash() {
        assert_eq!(MapScore::new(None, false).to_string(), "-");
        assert_eq!(MapScore::new(Some(7), false).to_string(), "7");
    }
}
