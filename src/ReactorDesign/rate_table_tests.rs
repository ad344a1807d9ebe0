#[cfg(test)]
mod tests {
    use crate::ReactorDesign::rate_table::{
        RateSample, RateTable, interpolate_rate, parse_rate_data, parse_row,
    };
    use crate::ReactorDesign::reactor_error::ReactorDesignError;
    use approx::assert_relative_eq;

    const DEFAULT_DATA: &str = "0.0,0.1,0.2,0.3,0.4,0.5,0.6,0.7,0.8,0.85\n0.0053,0.0052,0.005,0.0045,0.004,0.0033,0.0025,0.0018,0.00125,0.001";

    fn textbook_table() -> RateTable {
        RateTable::new(vec![0.0, 0.5, 1.0], vec![0.01, 0.005, 0.0025]).unwrap()
    }

    #[test]
    fn test_interpolation_returns_tabulated_rate_at_sample_points() {
        let table = parse_rate_data(DEFAULT_DATA).unwrap();
        for sample in table.samples() {
            let rate = table.interpolate_rate(sample.x).unwrap();
            assert_eq!(rate, sample.rate);
        }
    }

    #[test]
    fn test_two_point_midpoint() {
        let table = RateTable::new(vec![0.0, 1.0], vec![0.3, 0.7]).unwrap();
        assert_relative_eq!(
            table.interpolate_rate(0.5).unwrap(),
            0.5,
            epsilon = 1e-15
        );
        let table = RateTable::new(vec![0.0, 1.0], vec![2.0e-3, 8.0e-3]).unwrap();
        assert_relative_eq!(
            table.interpolate_rate(0.5).unwrap(),
            (2.0e-3 + 8.0e-3) / 2.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_interpolation_between_points() {
        let table = textbook_table();
        assert_relative_eq!(table.interpolate_rate(0.25).unwrap(), 0.0075, epsilon = 1e-15);
        assert_relative_eq!(table.interpolate_rate(0.75).unwrap(), 0.00375, epsilon = 1e-15);
        let table = parse_rate_data(DEFAULT_DATA).unwrap();
        // between 0.8 and 0.85
        assert_relative_eq!(table.interpolate_rate(0.825).unwrap(), 0.001125, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolation_clamps_outside_table() {
        let table = RateTable::new(vec![0.1, 0.4, 0.6], vec![0.5, 0.4, 0.2]).unwrap();
        assert_eq!(table.interpolate_rate(0.0).unwrap(), 0.5);
        assert_eq!(table.interpolate_rate(-3.0).unwrap(), 0.5);
        assert_eq!(table.interpolate_rate(0.9).unwrap(), 0.2);
        assert_eq!(table.interpolate_rate(100.0).unwrap(), 0.2);
    }

    #[test]
    fn test_interpolation_rejects_nan() {
        let table = textbook_table();
        let result = table.interpolate_rate(f64::NAN);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
    }

    #[test]
    fn test_free_interpolation_needs_two_samples() {
        let samples = vec![RateSample::new(0.0, 0.001)];
        let result = interpolate_rate(&samples, 0.0);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
        let result = interpolate_rate(&[], 0.3);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
    }

    #[test]
    fn test_free_interpolation_needs_increasing_x() {
        let samples = vec![
            RateSample::new(0.5, 0.001),
            RateSample::new(0.2, 0.002),
        ];
        let result = interpolate_rate(&samples, 0.3);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
        let samples = vec![
            RateSample::new(0.2, 0.001),
            RateSample::new(0.6, 0.002),
        ];
        assert_relative_eq!(interpolate_rate(&samples, 0.4).unwrap(), 0.0015, epsilon = 1e-15);
    }

    #[test]
    fn test_table_sorts_unsorted_input() {
        let table = RateTable::new(vec![1.0, 0.0, 0.5], vec![0.0025, 0.01, 0.005]).unwrap();
        assert_eq!(table.x_values(), &[0.0, 0.5, 1.0]);
        assert_eq!(table.rates(), &[0.01, 0.005, 0.0025]);
        assert_eq!(table, textbook_table());
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let result = RateTable::new(vec![0.0, 0.5, 0.5], vec![0.01, 0.005, 0.004]);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
    }

    #[test]
    fn test_table_rejects_bad_shapes() {
        let result = RateTable::new(vec![0.0, 0.5], vec![0.01]);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
        let result = RateTable::new(vec![0.0], vec![0.01]);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
        let result = RateTable::new(vec![0.0, f64::INFINITY], vec![0.01, 0.02]);
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
    }

    #[test]
    fn test_from_samples_and_range_selection() {
        let samples = vec![
            RateSample::new(0.0, 0.01),
            RateSample::new(0.5, 0.005),
            RateSample::new(1.0, 0.0025),
        ];
        let table = RateTable::from_samples(&samples).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.min_x(), 0.0);
        assert_eq!(table.max_x(), 1.0);
        assert_eq!(table.samples_in_range(0.5, 1.0), samples[1..].to_vec());
        assert!(table.samples_in_range(0.6, 0.9).is_empty());
    }

    #[test]
    fn test_parse_default_rate_data() {
        let table = parse_rate_data(DEFAULT_DATA).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table.max_x(), 0.85);
        assert_eq!(table.rates()[0], 0.0053);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        let text = "\n  0.0 , 0.5, 1.0  \n\n 0.01,0.005 , 0.0025\n";
        let table = parse_rate_data(text).unwrap();
        assert_eq!(table, textbook_table());
    }

    #[test]
    fn test_parse_reports_bad_token_position() {
        let text = "0.0,0.5,1.0\n0.01,abc,0.0025";
        match parse_rate_data(text) {
            Err(ReactorDesignError::ParseError {
                line,
                column,
                token,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        // trailing comma leaves an empty token
        let result = parse_row(1, "0.1,0.2,");
        assert!(matches!(
            result,
            Err(ReactorDesignError::ParseError { column: 3, .. })
        ));
    }

    #[test]
    fn test_parse_needs_two_rows_of_equal_length() {
        let result = parse_rate_data("0.0,0.5,1.0");
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
        let result = parse_rate_data("0.0,0.5,1.0\n0.01,0.005");
        assert!(matches!(result, Err(ReactorDesignError::DomainError(_))));
    }
}
