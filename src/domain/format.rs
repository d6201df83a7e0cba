// Value formatters shared by axis ticks and tooltips
use serde::Serialize;

const ONE_TRILLION: f64 = 1_0000_0000_0000.0;
const HUNDRED_MILLION: f64 = 1_0000_0000.0;

pub const MISSING: &str = "N/A";
pub const ZERO_INTEREST: &str = "N/A (이자 0)";

/// One step of an axis tick rule. A tick value picks the first unit whose
/// `from` its magnitude reaches, divides by `divisor` and appends `suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickUnit {
    pub from: f64,
    pub divisor: f64,
    /// Fixed decimals; `None` prints the shortest representation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    pub suffix: &'static str,
}

impl TickUnit {
    const fn plain(decimals: Option<u8>, suffix: &'static str) -> Self {
        Self {
            from: 0.0,
            divisor: 1.0,
            decimals,
            suffix,
        }
    }

    fn render(&self, value: f64) -> String {
        let scaled = value / self.divisor;
        match self.decimals {
            Some(digits) => format!("{}{}", to_fixed(scaled, digits as usize), self.suffix),
            None => format!("{}{}", scaled, self.suffix),
        }
    }
}

const CURRENCY_UNITS: &[TickUnit] = &[
    TickUnit {
        from: ONE_TRILLION,
        divisor: ONE_TRILLION,
        decimals: Some(1),
        suffix: "조",
    },
    TickUnit {
        from: HUNDRED_MILLION,
        divisor: HUNDRED_MILLION,
        decimals: Some(0),
        suffix: "억",
    },
    // below one 억 the unit stays 억 with one decimal
    TickUnit {
        from: 0.0,
        divisor: HUNDRED_MILLION,
        decimals: Some(1),
        suffix: "억",
    },
];
const PERCENT_UNITS: &[TickUnit] = &[TickUnit::plain(Some(1), "%")];
const SHARE_UNITS: &[TickUnit] = &[TickUnit::plain(None, "%")];
const COVERAGE_UNITS: &[TickUnit] = &[TickUnit::plain(None, "배")];
const WON_UNITS: &[TickUnit] = &[TickUnit::plain(Some(0), "원")];

/// Formatter attached to an axis. Serialized as a lowercase tag next to its
/// tick units so the render engine can label ticks without its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Raw won amounts scaled to 조/억
    Currency,
    /// Growth and stability ratios
    Percent,
    /// Components of a 100% stacked chart
    Share,
    /// Interest coverage multiple
    Coverage,
    /// Per-share amounts in won
    Won,
}

impl ValueFormat {
    pub fn tick_units(&self) -> &'static [TickUnit] {
        match self {
            ValueFormat::Currency => CURRENCY_UNITS,
            ValueFormat::Percent => PERCENT_UNITS,
            ValueFormat::Share => SHARE_UNITS,
            ValueFormat::Coverage => COVERAGE_UNITS,
            ValueFormat::Won => WON_UNITS,
        }
    }

    pub fn tick(&self, value: f64) -> String {
        let units = self.tick_units();
        units
            .iter()
            .find(|unit| value.abs() >= unit.from)
            .or(units.last())
            .map(|unit| unit.render(value))
            .unwrap_or_else(|| value.to_string())
    }

    pub fn tooltip(&self, value: Option<f64>) -> String {
        match self {
            ValueFormat::Currency => format_currency(value),
            ValueFormat::Percent | ValueFormat::Share => format_percent(value),
            ValueFormat::Coverage => format_coverage(value),
            ValueFormat::Won => match value {
                Some(v) => ValueFormat::Won.tick(v),
                None => MISSING.to_string(),
            },
        }
    }
}

/// Scale a won amount to 조 (>= 10^12) or 억 units.
///
/// Amounts below one 억 stay in 억 with one decimal, so `50_000_000`
/// becomes `0.5억` rather than switching to a smaller unit.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => ValueFormat::Currency.tick(v),
        None => MISSING.to_string(),
    }
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", to_fixed(v, 2)),
        None => MISSING.to_string(),
    }
}

/// Interest coverage. A zero interest expense yields a non-finite ratio.
pub fn format_coverage(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_finite() => ZERO_INTEREST.to_string(),
        Some(v) => format!("{}배", to_fixed(v, 2)),
        None => MISSING.to_string(),
    }
}

/// Fixed-point rendering of the exact binary value. Only exact ties round
/// away from zero; a negative value that rounds to zero keeps its sign.
fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let body = if is_exact_tie(magnitude, digits) {
        let factor = 10f64.powi(digits as i32);
        format!("{:.*}", digits, (magnitude * factor).ceil() / factor)
    } else {
        format!("{:.*}", digits, magnitude)
    };
    format!("{}{}", sign, body)
}

/// True when `value * 10^digits` is exactly `k + 0.5`, i.e. twice it is an
/// odd integer. With `value = m * 2^e` that holds iff the power of two left
/// after cancelling `m`'s trailing zeros against `2^(e + 1 + digits)` is 2^0.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    mantissa.trailing_zeros() as i64 + exponent + 1 + digits as i64 == 0
}
