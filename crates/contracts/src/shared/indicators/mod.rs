use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key when matching values to cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn usd() -> Self {
        ValueFormat::Money {
            currency: "$".to_string(),
        }
    }

    /// `$124,500`, `2.8%`, `12,500`
    pub fn format(&self, val: f64) -> String {
        match self {
            ValueFormat::Money { currency } => {
                let cents = (val.abs() * 100.0).round() as i64;
                let sign = if val < 0.0 { "-" } else { "" };
                let whole = format_thousands(cents / 100);
                if cents % 100 == 0 {
                    format!("{}{}{}", sign, currency, whole)
                } else {
                    format!("{}{}{}.{:02}", sign, currency, whole, cents % 100)
                }
            }
            ValueFormat::Number { decimals } => {
                format!("{:.prec$}", val, prec = *decimals as usize)
            }
            ValueFormat::Percent { decimals } => {
                format!("{:.prec$}%", val, prec = *decimals as usize)
            }
            ValueFormat::Integer => {
                let n = val.round() as i64;
                let s = format_thousands(n.abs());
                if n < 0 {
                    format!("-{}", s)
                } else {
                    s
                }
            }
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    #[default]
    Neutral,
    Warning,
}

/// Static metadata describing one indicator (label, format, icon, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Indicator sets
// ---------------------------------------------------------------------------

/// Metadata for a group of indicators rendered together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSetMeta {
    pub id: String,
    pub label: String,
    pub indicators: Vec<IndicatorId>,
    /// Number of columns in the card grid (2, 3, 4).
    pub columns: u8,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    /// Primary numeric value (`None` when data is unavailable).
    pub value: Option<f64>,
    /// Change relative to previous period, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

/// Set metadata plus everything needed to render its cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub meta: IndicatorSetMeta,
    pub indicators: Vec<IndicatorMeta>,
    pub values: Vec<IndicatorValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format() {
        assert_eq!(ValueFormat::usd().format(124500.0), "$124,500");
        assert_eq!(ValueFormat::usd().format(1450000.0), "$1,450,000");
        assert_eq!(ValueFormat::usd().format(85.5), "$85.50");
        assert_eq!(ValueFormat::usd().format(-12.0), "-$12");
    }

    #[test]
    fn test_other_formats() {
        assert_eq!(ValueFormat::Percent { decimals: 1 }.format(2.8), "2.8%");
        assert_eq!(ValueFormat::Integer.format(12500.0), "12,500");
        assert_eq!(ValueFormat::Number { decimals: 2 }.format(3.14159), "3.14");
    }
}
