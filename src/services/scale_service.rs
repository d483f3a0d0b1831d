use chrono::{Datelike, NaiveDate};

use crate::utils::format::{format_tick, tick_precision};

/// Linear map from a domain interval onto a range interval.
///
/// A zero width domain maps every input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || span.is_nan() {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced round values inside the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        let step = tick_step(lo, hi, count);
        if step <= 0.0 || !step.is_finite() {
            return vec![lo];
        }
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }

    /// Ticks with their labels and pixel offsets
    pub fn labelled_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let (lo, hi) = ordered(self.domain);
        let precision = tick_precision(tick_step(lo, hi, count));
        self.ticks(count)
            .into_iter()
            .map(|v| (self.apply(v), format_tick(v, precision)))
            .collect()
    }
}

/// Linear map from calendar dates onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let linear = LinearScale::new((day_number(domain.0), day_number(domain.1)), range);
        Self { domain, linear }
    }

    pub fn apply(&self, date: NaiveDate) -> f64 {
        self.linear.apply(day_number(date))
    }

    /// Calendar aligned ticks: whole years on a round step, or months for spans under two years
    pub fn ticks(&self, count: usize) -> Vec<(NaiveDate, String)> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };

        let years = (hi.year() - lo.year()) as f64;
        if years >= 2.0 {
            let step = tick_step(lo.year() as f64, hi.year() as f64, count).max(1.0) as i32;
            let first = lo.year() + (step - lo.year().rem_euclid(step)) % step;
            return (first..=hi.year())
                .step_by(step as usize)
                .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                .filter(|d| *d >= lo && *d <= hi)
                .map(|d| (d, d.format("%Y").to_string()))
                .collect();
        }

        let months = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
        let span = (months(hi) - months(lo)).max(1);
        let step = if span as usize > count * 2 { 3 } else { 1 };
        (months(lo)..=months(hi))
            .filter(|m| m % step == 0)
            .filter_map(|m| NaiveDate::from_ymd_opt(m.div_euclid(12), m.rem_euclid(12) as u32 + 1, 1))
            .filter(|d| *d >= lo && *d <= hi)
            .map(|d| {
                let label = if d.month() == 1 {
                    d.format("%Y").to_string()
                } else {
                    d.format("%B").to_string()
                };
                (d, label)
            })
            .collect()
    }

    pub fn labelled_ticks(&self, count: usize) -> Vec<(f64, String)> {
        self.ticks(count)
            .into_iter()
            .map(|(d, label)| (self.apply(d), label))
            .collect()
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Step of 1, 2 or 5 times a power of ten giving about `count` ticks over `[lo, hi]`
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let raw = (hi - lo).abs() / count;
    if raw == 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_linear_endpoints() {
        let scale = LinearScale::new((0.0, 18064.7), (0.0, 420.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert!((scale.apply(18064.7) - 420.0).abs() < 1e-9);
        assert!((scale.apply(9032.35) - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new((0.0, 100.0), (460.0, 40.0));
        assert_eq!(scale.apply(0.0), 460.0);
        assert_eq!(scale.apply(100.0), 40.0);
        assert_eq!(scale.apply(50.0), 250.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((0.0, 0.0), (40.0, 760.0));
        assert_eq!(scale.apply(0.0), 400.0);
        assert_eq!(scale.apply(3.0), 400.0);
    }

    #[test]
    fn test_nice_ticks() {
        let scale = LinearScale::new((0.0, 18064.7), (460.0, 40.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&18000.0));
        assert_eq!(ticks.len(), 10);

        let labels: Vec<String> = scale.labelled_ticks(10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels[1], "2,000");
        assert_eq!(labels[9], "18,000");
    }

    #[test]
    fn test_fractional_ticks() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let labels: Vec<String> = scale.labelled_ticks(10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[1], "0.1");
        assert_eq!(labels[10], "1.0");
    }

    #[test]
    fn test_time_scale_endpoints() {
        let scale = TimeScale::new((ymd(1947, 1, 1), ymd(2015, 7, 1)), (40.0, 760.0));
        assert_eq!(scale.apply(ymd(1947, 1, 1)), 40.0);
        assert_eq!(scale.apply(ymd(2015, 7, 1)), 760.0);
        assert!(scale.apply(ymd(1980, 1, 1)) > 40.0);
    }

    #[test]
    fn test_year_ticks() {
        let scale = TimeScale::new((ymd(1947, 1, 1), ymd(2015, 7, 1)), (40.0, 760.0));
        let labels: Vec<String> = scale.ticks(10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels.first().map(String::as_str), Some("1950"));
        assert_eq!(labels.last().map(String::as_str), Some("2015"));
        assert_eq!(labels.len(), 14);
    }

    #[test]
    fn test_month_ticks_for_short_spans() {
        let scale = TimeScale::new((ymd(1947, 1, 1), ymd(1947, 4, 1)), (40.0, 760.0));
        let labels: Vec<String> = scale.ticks(10).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["1947", "February", "March", "April"]);
    }
}
