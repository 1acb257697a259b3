//! Locale handling: the supported language set, negotiation from request
//! headers, and the per-locale message bundles.

pub mod messages;
pub mod middleware;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of the cookie remembering an explicit language choice.
pub const LOCALE_COOKIE: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// The other supported locale, for the language switcher.
    pub fn alternate(&self) -> Locale {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale '{}'", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Picks the locale for an unprefixed request.
///
/// Order: explicit cookie choice, then the best `Accept-Language` match by
/// q-value (primary subtag only, so `de-AT` selects `de`), then the default.
pub fn negotiate_locale(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie.and_then(|c| c.trim().parse::<Locale>().ok()) {
        return locale;
    }

    let Some(header) = accept_language else {
        return Locale::DEFAULT;
    };

    let mut best: Option<(Locale, f32)> = None;
    for part in header.split(',') {
        let mut pieces = part.trim().split(';');
        let tag = pieces.next().unwrap_or("").trim();
        let q = pieces
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        let primary = tag.split('-').next().unwrap_or("").to_ascii_lowercase();
        let Ok(locale) = primary.parse::<Locale>() else {
            continue;
        };
        if q <= 0.0 {
            continue;
        }
        // Ties keep the earlier entry, matching header order.
        if best.map_or(true, |(_, best_q)| q > best_q) {
            best = Some((locale, q));
        }
    }

    best.map(|(locale, _)| locale).unwrap_or(Locale::DEFAULT)
}

/// Rewrites the locale prefix of `path` to `target`.
/// Paths without a locale prefix get one prepended.
pub fn alternate_path(path: &str, target: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    if first.parse::<Locale>().is_ok() {
        match rest {
            Some(rest) if !rest.is_empty() => format!("/{}/{}", target, rest),
            _ => format!("/{}", target),
        }
    } else if trimmed.is_empty() {
        format!("/{}", target)
    } else {
        format!("/{}/{}", target, trimmed)
    }
}
