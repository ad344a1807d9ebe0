//! Levenspiel plot drawn in the terminal as horizontal bars.
//!
//! ```text
//!   X    1/(-rA)
//! 0.00 |##########                               188.68
//! 0.85 |######################################## 1000.00
//! ```
use crate::ReactorDesign::levenspiel::LevenspielPoint;

/// Renders one bar per point, the longest bar is `width` characters.
pub fn levenspiel_bar_chart(points: &[LevenspielPoint], width: usize) -> String {
    let max = points
        .iter()
        .map(|p| p.inverse_rate)
        .fold(0.0_f64, f64::max);
    let mut chart = String::from("  X    1/(-rA), L*min/mol\n");
    for p in points {
        let bar = if max > 0.0 {
            ((p.inverse_rate / max) * width as f64).round() as usize
        } else {
            0
        };
        chart.push_str(&format!(
            "{:.2} |{}{} {:.2}\n",
            p.x,
            "#".repeat(bar),
            " ".repeat(width - bar.min(width)),
            p.inverse_rate
        ));
    }
    chart
}

/// Marks the CSTR and PFR conversion ranges under the chart.
pub fn stage_legend(x_int: f64, x_final: f64) -> String {
    format!(
        "CSTR: X 0.00 -> {:.2} (rectangle X_int/(-rA(X_int)))\nPFR:  X {:.2} -> {:.2} (area under the curve)\n",
        x_int, x_int, x_final
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_scale_with_inverse_rate() {
        let points = vec![
            LevenspielPoint {
                x: 0.0,
                inverse_rate: 100.0,
            },
            LevenspielPoint {
                x: 0.5,
                inverse_rate: 200.0,
            },
            LevenspielPoint {
                x: 1.0,
                inverse_rate: 400.0,
            },
        ];
        let chart = levenspiel_bar_chart(&points, 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].matches('#').count(), 5);
        assert_eq!(lines[2].matches('#').count(), 10);
        assert_eq!(lines[3].matches('#').count(), 20);
        assert!(lines[3].starts_with("1.00 |"));
        assert!(lines[3].ends_with("400.00"));
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(levenspiel_bar_chart(&[], 10).lines().count(), 1);
    }
}
