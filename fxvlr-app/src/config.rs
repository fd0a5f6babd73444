use crate::infrastructure::extract::StarRatingMethod;
use crate::infrastructure::render::RenderOptions;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

const DEFAULT_ORIGIN: &str = "https://vlr.gg";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub origin: Url,
    pub bind_addr: SocketAddr,
    pub fetch_timeout: Duration,
    pub render: RenderOptions,
    pub star_rating: StarRatingMethod,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            render: RenderOptions::default(),
            star_rating: StarRatingMethod::default(),
        }
    }
}

impl PreviewConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads every `FXVLR_*` setting through `lookup`. Invalid values keep
    /// the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(origin) = parse_var(&lookup, "FXVLR_ORIGIN", |v| Url::parse(v).ok()) {
            if origin.host_str().is_some() {
                config.origin = origin;
            } else {
                tracing::warn!("FXVLR_ORIGIN has no host, keeping {}", config.origin);
            }
        }
        if let Some(addr) = parse_var(&lookup, "FXVLR_ADDR", |v| SocketAddr::from_str(v).ok()) {
            config.bind_addr = addr;
        }
        if let Some(secs) = parse_var(&lookup, "FXVLR_FETCH_TIMEOUT_SECS", |v| {
            v.parse::<u64>().ok().filter(|secs| *secs > 0)
        }) {
            config.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(site_name) = lookup("FXVLR_SITE_NAME").filter(|v| !v.trim().is_empty()) {
            config.render.site_name = site_name.trim().to_string();
        }
        if let Some(color) = lookup("FXVLR_THEME_COLOR").filter(|v| !v.trim().is_empty()) {
            config.render.theme_color = color.trim().to_string();
        }
        if let Some(redirect) = parse_var(&lookup, "FXVLR_REDIRECT", parse_flag) {
            config.render.redirect = redirect;
        }
        if let Some(method) = parse_var(&lookup, "FXVLR_STAR_RATING", |v| {
            v.parse::<StarRatingMethod>().ok()
        }) {
            config.star_rating = method;
        }

        config
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        tracing::warn!("Ignoring invalid {}={:?}", key, raw);
    }
    parsed
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> PreviewConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PreviewConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.origin.as_str(), "https://vlr.gg/");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.render.site_name, "fxvlr");
        assert!(!config.render.redirect);
        assert_eq!(config.star_rating, StarRatingMethod::ModClassSum);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FXVLR_ORIGIN", "https://www.vlr.gg"),
            ("FXVLR_ADDR", "127.0.0.1:8080"),
            ("FXVLR_FETCH_TIMEOUT_SECS", "5"),
            ("FXVLR_SITE_NAME", "vlrx"),
            ("FXVLR_REDIRECT", "true"),
            ("FXVLR_STAR_RATING", "style-width"),
        ]);
        assert_eq!(config.origin.host_str(), Some("www.vlr.gg"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.render.site_name, "vlrx");
        assert!(config.render.redirect);
        assert_eq!(config.star_rating, StarRatingMethod::StyleWidth);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("FXVLR_ORIGIN", "not a url"),
            ("FXVLR_FETCH_TIMEOUT_SECS", "0"),
            ("FXVLR_REDIRECT", "maybe"),
            ("FXVLR_STAR_RATING", "emoji"),
        ]);
        assert_eq!(config.origin.as_str(), "https://vlr.gg/");
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert!(!config.render.redirect);
        assert_eq!(config.star_rating, StarRatingMethod::ModClassSum);
    }
}
