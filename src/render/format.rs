//! Display formatting and color classification of stats and grades

/// Color class of a value relative to its neutral band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heat {
    Cold,
    Neutral,
    Hot,
}

/// Inclusive neutral band. Below it is cold and above it hot, unless
/// `reverse` is set (lower is better, e.g. strikeout rate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRule {
    pub low: f64,
    pub high: f64,
    pub reverse: bool,
}

impl ColorRule {
    pub const fn new(low: f64, high: f64, reverse: bool) -> Self {
        Self { low, high, reverse }
    }

    pub fn classify(&self, value: f64) -> Heat {
        if !value.is_finite() {
            return Heat::Neutral;
        }
        let heat = if value < self.low {
            Heat::Cold
        } else if value > self.high {
            Heat::Hot
        } else {
            return Heat::Neutral;
        };
        if self.reverse {
            match heat {
                Heat::Cold => Heat::Hot,
                _ => Heat::Cold,
            }
        } else {
            heat
        }
    }
}

/// Stat rows of the projections panel, top to bottom
pub const PROJECTION_LABELS: [&str; 8] = ["HR", "SB", "K%", "BB%", "OBP", "AVG", "SLG", "wRC+"];

/// Neutral band shared by every scouting grade
pub const GRADE_RULE: ColorRule = ColorRule::new(45.0, 55.0, false);

/// Band for a projected stat, if it is color coded
pub fn stat_rule(label: &str) -> Option<ColorRule> {
    let rule = match label {
        "BB%" => ColorRule::new(0.066, 0.10, false),
        "K%" => ColorRule::new(0.184, 0.241, true),
        "AVG" => ColorRule::new(0.236, 0.273, false),
        "OBP" => ColorRule::new(0.311, 0.353, false),
        "SLG" => ColorRule::new(0.382, 0.455, false),
        "wRC+" => ColorRule::new(105.0, 118.0, false),
        "HR" => ColorRule::new(15.0, 23.0, false),
        "SB" => ColorRule::new(9.0, 15.0, false),
        _ => return None,
    };
    Some(rule)
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Display string for a stat value
pub fn format_stat(label: &str, raw: &str) -> String {
    let trimmed = raw.trim();
    match label {
        "K%" | "BB%" => match parse_number(trimmed) {
            Some(v) => format!("{:.1}%", v * 100.0),
            None => raw.to_string(),
        },
        "AVG" | "OBP" | "SLG" => match (parse_number(trimmed), trimmed.rsplit_once('.')) {
            (Some(_), Some((_, decimals))) => format!(".{}", decimals),
            _ => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}

/// Heat of a stat value; unknown metrics and non-numeric values are neutral
pub fn classify_stat(label: &str, raw: &str) -> Heat {
    match (stat_rule(label), parse_number(raw)) {
        (Some(rule), Some(value)) => rule.classify(value),
        _ => Heat::Neutral,
    }
}

/// Heat of a scouting grade. Only plain non-negative numbers are classified.
pub fn classify_grade(raw: &str) -> Heat {
    let raw = raw.trim();
    if !is_plain_number(raw) {
        return Heat::Neutral;
    }
    parse_number(raw)
        .map(|v| GRADE_RULE.classify(v))
        .unwrap_or(Heat::Neutral)
}

/// Digits with at most one decimal point, e.g. `55` or `47.5`
fn is_plain_number(raw: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
