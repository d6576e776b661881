//! Conversion Rate Memory
//!
//! Fixed table of named conversion rates the model can recall.

use agent_core::Action;

/// Named conversion rates known to the agent
///
/// Plain multiplicative rates are a single literal; affine conversions
/// carry `multiplier,offset`.
const CONVERSION_RATES: &[(&str, &str)] = &[
    ("meters to feet", "3.28084"),
    ("kilometers to miles", "0.621371"),
    ("kilograms to pounds", "2.20462"),
    ("celsius to fahrenheit", "9/5,32"),
];

/// Action for recalling a conversion rate by name
///
/// Lookup failures are observations, not errors: an unknown unit pair
/// comes back as a not-found string so the loop can keep reasoning.
pub struct ModelMemoryAction;

impl Action for ModelMemoryAction {
    fn name(&self) -> &str {
        "model_memory"
    }

    fn description(&self) -> &str {
        "Recall a conversion rate by name, e.g. 'meters to feet'. Returns the rate \
         literal, or 'multiplier,offset' for affine conversions such as 'celsius to fahrenheit'."
    }

    fn run(&self, argument: &str) -> String {
        let wanted = argument.trim();

        for (key, rate) in CONVERSION_RATES {
            if key.eq_ignore_ascii_case(wanted) {
                return (*rate).to_string();
            }
        }

        let known: Vec<&str> = CONVERSION_RATES.iter().map(|(key, _)| *key).collect();
        format!(
            "No conversion rate found for '{argument}'. Known conversions: {}",
            known.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rates_are_exact_literals() {
        let action = ModelMemoryAction;
        assert_eq!(action.run("meters to feet"), "3.28084");
        assert_eq!(action.run("kilometers to miles"), "0.621371");
        assert_eq!(action.run("kilograms to pounds"), "2.20462");
        assert_eq!(action.run("celsius to fahrenheit"), "9/5,32");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let action = ModelMemoryAction;
        assert_eq!(action.run("Meters To Feet"), "3.28084");
        assert_eq!(action.run("CELSIUS TO FAHRENHEIT"), "9/5,32");
    }

    #[test]
    fn test_unknown_unit_echoes_original_input() {
        let action = ModelMemoryAction;
        let result = action.run("Furlongs to Fathoms");
        assert!(result.contains("Furlongs to Fathoms"));
        assert!(result.contains("meters to feet"));
    }
}
