use super::score_formatter::ScoreFormatter;
use super::text::{collapse_line_breaks, normalize_img_url, parse_leading_int};
use crate::domain::{ExtractOutcome, MapScore, MatchRecord, MatchStatus};
use crate::infrastructure::dom::{element_text, has_class, DomView};

const TEAM1_NAME: &str = ".match-header-link-name.mod-1 > .wf-title-med";
const TEAM2_NAME: &str = ".match-header-link-name.mod-2 > .wf-title-med";
const SPOILER_SCORE: &str = ".match-header-vs-score .js-spoiler > span";
const UPCOMING_NOTE: &str = ".match-header-vs-note.mod-upcoming";
const MAP_SCORE: &str = ".score";
const TEAM1_LOGO: &str = "a.match-header-link.mod-1 img";
const TEAM2_LOGO: &str = "a.match-header-link.mod-2 img";
const MATCH_DATE: &str = ".match-header-date .moment-tz-convert";

pub const LIVE_SCORE_TEXT: &str = "LIVE";
pub const LIVE_PLACEHOLDER_LINE: &str = "Match is live or starting soon.";
const WAITING_GLYPH: &str = "⏳";

#[derive(Debug, PartialEq)]
struct ResolvedScore {
    status: MatchStatus,
    score_text: String,
    lines: Vec<String>,
}

pub struct MatchExtractor;

impl MatchExtractor {
    pub fn extract(dom: &DomView, source_path: &str) -> ExtractOutcome<MatchRecord> {
        let team1 = collapse_line_breaks(&dom.text(TEAM1_NAME));
        let team2 = collapse_line_breaks(&dom.text(TEAM2_NAME));

        // Index 1 is the ":" separator between the two spoiler scores.
        let left = parse_leading_int(&dom.nth_text(SPOILER_SCORE, 0));
        let right = parse_leading_int(&dom.nth_text(SPOILER_SCORE, 2));
        let upcoming_note = dom.text(UPCOMING_NOTE).trim().to_string();
        let map_scores = Self::map_scores(dom);

        let resolved = resolve_score(&team1, &team2, left, right, &upcoming_note, &map_scores);

        let team1_image = normalize_img_url(dom.first_attr(TEAM1_LOGO, "src").as_deref());
        let team2_image = normalize_img_url(dom.first_attr(TEAM2_LOGO, "src").as_deref());
        let winner_image_url = pick_winner_image(resolved.status, left, right, team1_image, team2_image);

        let match_date_text = dom.nth_text(MATCH_DATE, 0);
        let match_time_text = dom.nth_text(MATCH_DATE, 1);

        if team1.is_empty()
            || team2.is_empty()
            || resolved.score_text.is_empty()
            || match_date_text.is_empty()
            || match_time_text.is_empty()
        {
            tracing::debug!("{} lacks match header fields", source_path);
            return ExtractOutcome::NotApplicable;
        }

        ExtractOutcome::Matched(MatchRecord {
            team1,
            team2,
            status: resolved.status,
            score_text: resolved.score_text,
            game_result_lines: resolved.lines,
            winner_image_url,
            match_date_text,
            match_time_text,
            source_path: source_path.to_string(),
        })
    }

    fn map_scores(dom: &DomView) -> Vec<MapScore> {
        dom.select(MAP_SCORE)
            .iter()
            .map(|el| {
                MapScore::new(
                    parse_leading_int(&element_text(el)),
                    has_class(el, "mod-win"),
                )
            })
            .collect()
    }
}

fn resolve_score(
    team1: &str,
    team2: &str,
    left: Option<u32>,
    right: Option<u32>,
    upcoming_note: &str,
    map_scores: &[MapScore],
) -> ResolvedScore {
    if let (Some(left), Some(right)) = (left, right) {
        let mut lines = ScoreFormatter::format(team1, team2, map_scores);
        if lines.is_empty() {
            lines.push(LIVE_PLACEHOLDER_LINE.to_string());
        }
        return ResolvedScore {
            status: MatchStatus::Finished,
            score_text: format!("{left}:{right}"),
            lines,
        };
    }

    if !upcoming_note.is_empty() {
        return ResolvedScore {
            status: MatchStatus::Upcoming,
            score_text: format!("{WAITING_GLYPH} {upcoming_note}"),
            lines: vec![format!("Match starts in {upcoming_note}")],
        };
    }

    ResolvedScore {
        status: MatchStatus::Live,
        score_text: LIVE_SCORE_TEXT.to_string(),
        lines: vec![LIVE_PLACEHOLDER_LINE.to_string()],
    }
}

fn pick_winner_image(
    status: MatchStatus,
    left: Option<u32>,
    right: Option<u32>,
    team1_image: String,
    team2_image: String,
) -> String {
    match (status, left, right) {
        (MatchStatus::Live, _, _) => team1_image,
        (_, Some(left), Some(right)) if right > left => team2_image,
        _ => team1_image,
    }
}
