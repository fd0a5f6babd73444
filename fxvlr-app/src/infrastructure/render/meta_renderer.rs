use crate::domain::{ForumPostRecord, MatchRecord, Preview};
use super::escape::{escape_html, truncate_chars};
use fxvlr_errors::AppError;

const MAX_BODY_CHARS: usize = 500;
const FORUM_SITE_NAME: &str = "vlr.gg";
const SITE_ICON: &str = "https://www.vlr.gg/img/vlr/logo_header.png";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub site_name: String,
    pub theme_color: String,
    /// Send human visitors on to the source page.
    pub redirect: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: "fxvlr".to_string(),
            theme_color: "#ff5462".to_string(),
            redirect: false,
        }
    }
}

/// Renders preview records into meta-only HTML documents. Every extracted
/// value is escaped before it is embedded.
pub struct MetaRenderer {
    options: RenderOptions,
}

impl MetaRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, preview: &Preview) -> Result<String, AppError> {
        match preview {
            Preview::Match(record) => Ok(self.render_match(record)),
            Preview::Forum(record) => Ok(self.render_forum(record)),
            Preview::Unclassified => Err(AppError::Unclassified),
        }
    }

    pub fn render_match(&self, record: &MatchRecord) -> String {
        let title = escape_html(&record.title());
        let description = escape_html(&format!(
            "{}\n\n{} · {}",
            record.game_result_lines.join("\n"),
            record.match_date_text,
            record.match_time_text
        ));

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta property="og:title" content="{title}">
  <meta property="twitter:title" content="{title}">
  <meta property="og:description" content="{description}">
  <meta property="og:image" content="{image}">
  <meta property="og:url" content="{url}">
  <meta property="og:site_name" content="{site_name}">
  <meta name="theme-color" content="{theme_color}">
  <meta name="twitter:card" content="summary">
{redirect}</head>
<body></body>
</html>
"#,
            title = title,
            description = description,
            image = escape_html(&record.winner_image_url),
            url = escape_html(&record.source_path),
            site_name = escape_html(&self.options.site_name),
            theme_color = escape_html(&self.options.theme_color),
            redirect = self.redirect_tag(&record.source_path),
        )
    }

    pub fn render_forum(&self, record: &ForumPostRecord) -> String {
        let handle = format!("@{}", record.author);
        let title = match (&record.region_emoji, &record.region_display_name) {
            (Some(emoji), Some(name)) => format!("{handle} · {emoji} {name}"),
            _ => handle.clone(),
        };

        let mut description = String::new();
        if let Some(post_title) = &record.post_title {
            description.push_str(post_title);
            description.push_str("\n\n");
        }
        description.push_str(&truncate_chars(&record.post_body_text, MAX_BODY_CHARS));
        description.push_str(&format!(
            "\n\n⭐ {} 💬 {} 🗳️ {}",
            record.star_rating, record.comment_count, record.frag_count
        ));

        let url = escape_html(&record.source_path);
        let title = escape_html(&title);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <link rel="canonical" href="{url}">
  <meta property="og:url" content="{url}">
  <meta property="twitter:creator" content="{handle}">
  <meta name="theme-color" content="{theme_color}">
  <meta property="twitter:title" content="{title}">
  <meta name="twitter:card" content="summary">
  <meta property="og:title" content="{title}">
  <meta property="og:description" content="{description}">
  <meta property="og:site_name" content="{site_name}">
  <link href="{icon}" rel="icon" sizes="36x36" type="image/png">
{redirect}</head>
<body></body>
</html>
"#,
            url = url,
            handle = escape_html(&handle),
            theme_color = escape_html(&self.options.theme_color),
            title = title,
            description = escape_html(&description),
            site_name = FORUM_SITE_NAME,
            icon = SITE_ICON,
            redirect = self.redirect_tag(&record.source_path),
        )
    }

    fn redirect_tag(&self, source_path: &str) -> String {
        if self.options.redirect {
            format!(
                "  <meta http-equiv=\"refresh\" content=\"0;url={}\">\n",
                escape_html(source_path)
            )
        } else {
            String::new()
        }
    }
}

impl Default for MetaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchStatus;

    fn match_record() -> MatchRecord {
        MatchRecord {
            team1: "Alpha".to_string(),
            team2: "<Beta>".to_string(),
            status: MatchStatus::Finished,
            score_text: "2:1".to_string(),
            game_result_lines: vec!["🟢 Alpha 13 - 5 <Beta> 🔴".to_string()],
            winner_image_url: "https://owcdn.net/a.png".to_string(),
            match_date_text: "Sunday, March 2nd".to_string(),
            match_time_text: "6:00 PM CET".to_string(),
            source_path: "https://vlr.gg/1234".to_string(),
        }
    }

    fn forum_record() -> ForumPostRecord {
        ForumPostRecord::new(
            "nitro".to_string(),
            "Great \"series\"".to_string(),
            "https://vlr.gg/55".to_string(),
        )
        .with_region("br".to_string(), "Brazil".to_string(), "🇧🇷".to_string())
        .with_star_rating(3.0)
        .with_comment_count(12)
        .with_frag_count("7".to_string())
    }

    #[test]
    fn test_match_document_is_escaped() {
        let html = MetaRenderer::default().render_match(&match_record());
        assert!(html.contains(r#"<meta property="og:title" content="Alpha 2:1 &lt;Beta&gt;">"#));
        assert!(html.contains("🟢 Alpha 13 - 5 &lt;Beta&gt; 🔴\n\nSunday, March 2nd · 6:00 PM CET"));
        assert!(html.contains(r#"<meta property="og:image" content="https://owcdn.net/a.png">"#));
        assert!(html.contains(r#"<meta property="og:site_name" content="fxvlr">"#));
        assert!(!html.contains("<Beta>"));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn test_forum_document() {
        let html = MetaRenderer::default().render_forum(&forum_record());
        assert!(html.contains(r#"<meta property="og:title" content="@nitro · 🇧🇷 Brazil">"#));
        assert!(html.contains("Great &quot;series&quot;\n\n⭐ 3 💬 12 "));
        assert!(html.contains(" 7\">"));
        assert!(html.contains(r#"<link rel="canonical" href="https://vlr.gg/55">"#));
    }

    #[test]
    fn test_forum_title_line_and_half_star() {
        let record = forum_record()
            .with_title(Some("Finals".to_string()))
            .with_star_rating(2.5);
        let html = MetaRenderer::default().render_forum(&record);
        assert!(html.contains("content=\"Finals\n\nGreat &quot;series&quot;\n\n⭐ 2.5 "));
    }

    #[test]
    fn test_redirect_tag_when_enabled() {
        let renderer = MetaRenderer::new(RenderOptions {
            redirect: true,
            ..RenderOptions::default()
        });
        let html = renderer.render_match(&match_record());
        assert!(html.contains(r#"<meta http-equiv="refresh" content="0;url=https://vlr.gg/1234">"#));
    }

    #[test]
    fn test_unclassified_is_an_error() {
        assert_eq!(
            MetaRenderer::default().render(&Preview::Unclassified),
            Err(AppError::Unclassified)
        );
    }
}
