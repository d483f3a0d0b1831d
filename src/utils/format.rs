use thousands::Separable;

/// Decimal places needed to print ticks spaced `step` apart
pub fn tick_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Format a tick value with `precision` decimals and comma grouped thousands
/// Examples: (2000.0, 0) -> "2,000", (0.5, 1) -> "0.5", (-12500.0, 0) -> "-12,500"
pub fn format_tick(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    // "-0" and "-0.0" print as zero
    let negative_zero = formatted
        .strip_prefix('-')
        .map_or(false, |rest| rest.chars().all(|c| c == '0' || c == '.'));
    if negative_zero {
        let unsigned: &str = &formatted[1..];
        unsigned.separate_with_commas()
    } else {
        formatted.separate_with_commas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0, 0), "0");
        assert_eq!(format_tick(2000.0, 0), "2,000");
        assert_eq!(format_tick(18000.0, 0), "18,000");
        assert_eq!(format_tick(1234567.0, 0), "1,234,567");
        assert_eq!(format_tick(0.30000000000000004, 1), "0.3");
        assert_eq!(format_tick(-12500.0, 0), "-12,500");
        assert_eq!(format_tick(-0.0, 0), "0");
    }

    #[test]
    fn test_format_tick_groups_integer_part_only() {
        assert_eq!(format_tick(12500.5, 1), "12,500.5");
        assert_eq!(format_tick(-1500.25, 2), "-1,500.25");
        assert_eq!(format_tick(999.0, 0), "999");
    }

    #[test]
    fn test_tick_precision() {
        assert_eq!(tick_precision(2000.0), 0);
        assert_eq!(tick_precision(1.0), 0);
        assert_eq!(tick_precision(0.2), 1);
        assert_eq!(tick_precision(0.05), 2);
    }
}
