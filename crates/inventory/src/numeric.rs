/// Round to `decimals` places, ties to even on the scaled value.
///
/// Matches the half-to-even behaviour of the tabular tooling the stock sheets
/// were produced with, so `2.25` rounds to `2.2` rather than `2.3`.
pub(crate) fn round_half_even(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_half_even(5.0, 1), 5.0);
        assert_eq!(round_half_even(10.0 / 3.0, 1), 3.3);
        assert_eq!(round_half_even(2.0 / 3.0, 2), 0.67);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round_half_even(0.5, 0), 0.0);
        assert_eq!(round_half_even(1.5, 0), 2.0);
        assert_eq!(round_half_even(2.5, 0), 2.0);
    }
}
