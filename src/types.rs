use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// How a metric delta is emphasized on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Up,
    Down,
    Off,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Case-insensitive. Anything that is not POSITIVE or NEGATIVE is Neutral.
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim();
        if label.eq_ignore_ascii_case("POSITIVE") {
            Sentiment::Positive
        } else if label.eq_ignore_ascii_case("NEGATIVE") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }

    /// Chart colour for score points.
    pub fn color(self) -> &'static str {
        match self {
            Sentiment::Positive => "green",
            Sentiment::Negative => "red",
            Sentiment::Neutral => "gray",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Sentiment::Positive => "🟢",
            Sentiment::Negative => "🔴",
            Sentiment::Neutral => "⚪",
        }
    }

    pub fn emphasis(self) -> Emphasis {
        match self {
            Sentiment::Positive => Emphasis::Up,
            Sentiment::Negative => Emphasis::Down,
            Sentiment::Neutral => Emphasis::Off,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Emphasis {
    pub fn css_class(self) -> &'static str {
        match self {
            Emphasis::Up => "delta-up",
            Emphasis::Down => "delta-down",
            Emphasis::Off => "delta-off",
        }
    }
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// Asset price after read-time normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Known(f64),
    Unknown,
}

impl Price {
    /// Absent, unparseable and non-finite values are all `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map_or(Price::Unknown, Price::Known)
    }

    /// Only strictly positive prices are shown; everything else renders as a placeholder.
    pub fn displayable(self) -> Option<f64> {
        match self {
            Price::Known(v) if v > 0.0 => Some(v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    pub headline: String,
    pub sentiment: Sentiment,
    /// Label as stored, shown verbatim; `sentiment` drives colours and icons.
    pub label: String,
    pub score: f64,
    pub reason: String,
    pub price: Price,
    pub created_at: NaiveDateTime,
}

/// Visible, non-fatal problem encountered during a render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ConnectionFailed(String),
    QueryFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::ConnectionFailed(e) => format!("Error connecting to DB: {e}"),
            Notice::QueryFailed(e) => format!("Error reading sentiment data: {e}"),
        }
    }
}
