use crate::infrastructure::dom::{mod_value, select_within};
use scraper::ElementRef;
use std::str::FromStr;

const MAX_RATING: f64 = 5.0;

/// How the thread rating is read from the stars widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarRatingMethod {
    /// Each `.star` carries `mod-N`; the rating is the sum of `N / 3`.
    #[default]
    ModClassSum,
    /// The widget carries `style="width: P%"`; the rating is `P / 20`.
    StyleWidth,
}

impl FromStr for StarRatingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mod-class" | "mod_class" | "modclass" => Ok(Self::ModClassSum),
            "style-width" | "style_width" | "style" => Ok(Self::StyleWidth),
            other => Err(format!("unknown star rating method: {other}")),
        }
    }
}

impl StarRatingMethod {
    pub fn rate(&self, container: &ElementRef<'_>) -> f64 {
        match self {
            Self::ModClassSum => rate_from_mod_classes(&select_within(container, ".star")),
            Self::StyleWidth => rate_from_style_width(container),
        }
    }
}

pub fn rate_from_mod_classes(stars: &[ElementRef<'_>]) -> f64 {
    let total: f64 = stars
        .iter()
        .filter_map(mod_value)
        .filter_map(|value| value.parse::<u32>().ok())
        .map(|value| f64::from(value) / 3.0)
        .sum();
    round_to_half(total)
}

/// Reads the first `width: P%` found on the container or its descendants.
pub fn rate_from_style_width(container: &ElementRef<'_>) -> f64 {
    let Ok(re) = regex_lite::Regex::new(r"width\s*:\s*([0-9]+(?:\.[0-9]+)?)\s*%") else {
        return 0.0;
    };

    let styled = std::iter::once(*container).chain(select_within(container, "[style]"));
    for element in styled {
        let Some(style) = element.value().attr("style") else {
            continue;
        };
        if let Some(percent) = re
            .captures(style)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
        {
            return round_to_half(percent / 20.0);
        }
    }
    0.0
}

pub fn round_to_half(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value * 2.0).round() / 2.0).clamp(0.0, MAX_RATING)
}
