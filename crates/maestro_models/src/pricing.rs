//! Static per-model pricing used for cost estimation.

use maestro_core::TokenUsage;

/// USD rates per million input/output tokens, keyed by model id.
const RATES: &[(&str, f64, f64)] = &[
    ("gemini-2.5-flash", 0.30, 2.50),
    ("gemini-2.5-pro", 1.25, 10.00),
    ("claude-sonnet-4-20250514", 3.00, 15.00),
    ("claude-opus-4-20250514", 15.00, 75.00),
];

/// Estimates the USD cost of a call from its token usage.
///
/// Unknown model ids price at zero rather than failing; cost estimation is
/// advisory and must never abort a generation.
///
/// # Examples
///
/// ```
/// use maestro_core::TokenUsage;
/// use maestro_models::pricing::cost_usd;
///
/// let usage = TokenUsage::new(1_000_000, 0);
/// assert_eq!(cost_usd("gemini-2.5-flash", &usage), 0.30);
/// assert_eq!(cost_usd("unknown-model", &usage), 0.0);
/// ```
pub fn cost_usd(model_id: &str, usage: &TokenUsage) -> f64 {
    let Some((_, input_rate, output_rate)) = RATES.iter().find(|(id, _, _)| *id == model_id)
    else {
        return 0.0;
    };

    let input = *usage.input_tokens() as f64 / 1_000_000.0 * input_rate;
    let output = *usage.output_tokens() as f64 / 1_000_000.0 * output_rate;
    input + output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_both_directions() {
        let usage = TokenUsage::new(500_000, 100_000);
        let cost = cost_usd("claude-sonnet-4-20250514", &usage);
        // 0.5M * $3 + 0.1M * $15
        assert!((cost - 3.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_model_is_free() {
        let usage = TokenUsage::new(1_000, 1_000);
        assert_eq!(cost_usd("gpt-17", &usage), 0.0);
    }
}
