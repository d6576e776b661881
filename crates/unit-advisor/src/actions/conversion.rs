//! Conversion Application
//!
//! Applies a recalled rate to a value and formats the result.

use agent_core::Action;

/// Reverse lookup from rate literal to unit names, for output formatting
const RATE_UNITS: &[(&str, &str, &str)] = &[
    ("3.28084", "meters", "feet"),
    ("0.621371", "kilometers", "miles"),
    ("2.20462", "kilograms", "pounds"),
];

/// Action for applying a conversion rate to a value
///
/// The argument is comma-separated: `rate,value` for plain rates, or
/// `multiplier,offset,value` for affine conversions, where the multiplier
/// may be a fraction like `9/5`. Results carry two decimal places, rounded
/// half-to-even by the formatter. Malformed input never fails the turn;
/// it comes back as a descriptive observation string.
pub struct ApplyConversionAction;

impl Action for ApplyConversionAction {
    fn name(&self) -> &str {
        "apply_conversion"
    }

    fn description(&self) -> &str {
        "Apply a conversion to a value. Argument is 'rate,value' for plain rates \
         (e.g. '3.28084,5'), or 'multiplier,offset,value' for affine conversions \
         (e.g. '9/5,32,20'); the multiplier may be a fraction like 9/5."
    }

    fn run(&self, argument: &str) -> String {
        let fields: Vec<&str> = argument.split(',').map(str::trim).collect();

        match fields.as_slice() {
            [rate, value] => convert_linear(argument, rate, value),
            [multiplier, offset, value] => convert_affine(argument, multiplier, offset, value),
            _ => format!(
                "Invalid conversion input '{argument}': expected 'rate,value' or \
                 'multiplier,offset,value'"
            ),
        }
    }
}

fn convert_linear(argument: &str, rate_literal: &str, value_literal: &str) -> String {
    let Ok(rate) = rate_literal.parse::<f64>() else {
        return bad_number(argument, rate_literal);
    };
    let Ok(value) = value_literal.parse::<f64>() else {
        return bad_number(argument, value_literal);
    };

    let (source, target) = RATE_UNITS
        .iter()
        .find(|(literal, _, _)| *literal == rate_literal)
        .map_or(("units", "units"), |(_, source, target)| (*source, *target));

    format!("{value:?} {source} = {:.2} {target}", value * rate)
}

fn convert_affine(
    argument: &str,
    multiplier_literal: &str,
    offset_literal: &str,
    value_literal: &str,
) -> String {
    let Some(multiplier) = parse_ratio(multiplier_literal) else {
        return bad_number(argument, multiplier_literal);
    };
    let Ok(offset) = offset_literal.parse::<f64>() else {
        return bad_number(argument, offset_literal);
    };
    let Ok(value) = value_literal.parse::<f64>() else {
        return bad_number(argument, value_literal);
    };

    format!("{value:?}°C = {:.2}°F", value * multiplier + offset)
}

fn bad_number(argument: &str, field: &str) -> String {
    format!("Invalid number '{field}' in conversion input '{argument}'")
}

/// Parse a multiplier that is either a plain float or exactly `<int>/<int>`
///
/// A narrow divider on purpose: never a general expression evaluator.
fn parse_ratio(text: &str) -> Option<f64> {
    if let Some((numerator, denominator)) = text.split_once('/') {
        let numerator: i64 = numerator.trim().parse().ok()?;
        let denominator: i64 = denominator.trim().parse().ok()?;
        if denominator == 0 {
            return None;
        }
        Some(numerator as f64 / denominator as f64)
    } else {
        text.parse::<f64>().ok()
    }
}
