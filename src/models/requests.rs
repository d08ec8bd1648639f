//! Request DTOs for the news API
//!
//! Query strings are taken as raw key/value pairs so that repeated keys and
//! malformed numbers fall back to defaults instead of rejecting the request.

/// Items returned when `max` is absent, zero or not a number
pub const DEFAULT_MAX_ITEMS: u32 = 10;
/// Upper bound for `max`
pub const MAX_ITEMS_LIMIT: u32 = 20;
/// Page used when `page` is absent, zero or not a number
pub const DEFAULT_PAGE: u32 = 1;

/// Query string of `GET /api/news/:category`
#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub max: Option<String>,
    pub page: Option<String>,
    pub nocache: Option<String>,
}

impl NewsQuery {
    /// Builds the query from decoded pairs. The first value of a repeated
    /// key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = NewsQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "max" => &mut query.max,
                "page" => &mut query.page,
                "nocache" => &mut query.nocache,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Requested item count, clamped to `1..=20`, defaulting to 10.
    pub fn max_items(&self) -> u32 {
        match parse_positive(self.max.as_deref()) {
            Some(max) => max.min(MAX_ITEMS_LIMIT as i64) as u32,
            None => DEFAULT_MAX_ITEMS,
        }
    }

    /// Requested page, at least 1.
    pub fn page(&self) -> u32 {
        match parse_positive(self.page.as_deref()) {
            Some(page) => page.min(u32::MAX as i64) as u32,
            None => DEFAULT_PAGE,
        }
    }

    /// Only the literal `"true"` bypasses the cache read.
    pub fn bypass_cache(&self) -> bool {
        self.nocache.as_deref() == Some("true")
    }
}

/// Query string of `GET /api/extract`
#[derive(Debug, Clone, Default)]
pub struct ExtractQuery {
    pub url: Option<String>,
}

impl ExtractQuery {
    /// Builds the query from decoded pairs, keeping the first `url`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        ExtractQuery {
            url: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "url").then_some(value)),
        }
    }

    /// Validates the request, returning the URL to extract.
    pub fn validate(&self) -> Result<&str, String> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err("URL parameter is required".to_string()),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(leading_integer).filter(|v| *v >= 1)
}

/// Reads the integer prefix of `raw`: leading whitespace, an optional sign,
/// then digits up to the first non-digit. Saturates instead of overflowing.
/// Returns `None` when no digit follows the sign.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let magnitude = digits.fold(0i64, |acc, d| {
        seen = true;
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });

    seen.then_some(if negative { -magnitude } else { magnitude })
}
