#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        app::report::{build_report, escape_html, format_currency, render_report},
        models::{ChangeWindow, PercentageChanges, Quote},
    };

    fn quote(fields: &[(&str, &str)]) -> Quote {
        Quote::new(
            String::from("XEQT.TO"),
            NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    fn changes() -> PercentageChanges {
        PercentageChanges::new(vec![
            (ChangeWindow::Daily, String::from("0.00%")),
            (ChangeWindow::Weekly, String::from("5.26%")),
            (ChangeWindow::Monthly, String::from("11.11%")),
            (ChangeWindow::Yearly, String::from("-3.40%")),
        ])
    }

    fn ohlcv() -> Quote {
        quote(&[
            ("1. open", "28.9000"),
            ("2. high", "29.1200"),
            ("3. low", "28.8500"),
            ("4. close", "29.0500"),
            ("5. volume", "152301"),
        ])
    }

    #[test]
    fn volume_never_rendered() {
        let report = build_report(&ohlcv(), "XEQT.TO", &changes());
        let html = render_report(&ohlcv(), "XEQT.TO", &changes());

        assert!(report.rows().iter().all(|row| row.label() != "Volume"));
        assert!(!html.contains("Volume"));
        assert!(!html.contains("152301"));
    }

    #[test]
    fn rows_are_quote_then_changes() {
        let report = build_report(&ohlcv(), "XEQT.TO", &changes());
        let rows: Vec<(&str, &str)> = report
            .rows()
            .iter()
            .map(|row| (row.label().as_str(), row.value().as_str()))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Open", "$28.90"),
                ("High", "$29.12"),
                ("Low", "$28.85"),
                ("Close", "$29.05"),
                ("Daily Change (%)", "0.00%"),
                ("Weekly Change (%)", "5.26%"),
                ("Monthly Change (%)", "11.11%"),
                ("Yearly Change (%)", "-3.40%"),
            ]
        );
    }

    #[test]
    fn only_first_four_quote_rows_get_currency() {
        let quote = quote(&[
            ("1. open", "10"),
            ("2. high", "11.5"),
            ("3. low", "9.999"),
            ("4. close", "10.25"),
            ("5. adjusted close", "10.2500"),
        ]);

        let report = build_report(&quote, "T", &changes());
        let values: Vec<&str> = report.rows()[..5]
            .iter()
            .map(|row| row.value().as_str())
            .collect();

        assert_eq!(values, vec!["$10.00", "$11.50", "$10.00", "$10.25", "10.2500"]);
    }

    #[test]
    fn currency_cutoff_counts_rows_after_volume_is_dropped() {
        let quote = quote(&[
            ("1. volume", "500"),
            ("2. open", "1"),
            ("3. high", "2"),
            ("4. low", "3"),
            ("5. close", "4"),
        ]);

        let report = build_report(&quote, "T", &changes());

        assert_eq!(report.rows()[3].value(), "$4.00");
    }

    #[test]
    fn non_numeric_values_pass_through() {
        assert_eq!(format_currency("n/a"), "n/a");
        assert_eq!(format_currency("7"), "$7.00");
        assert_eq!(format_currency("-0.5"), "$-0.50");
    }

    #[test]
    fn renders_styled_table_with_title() {
        let html = render_report(&ohlcv(), "XEQT.TO", &changes());

        assert!(html.starts_with("<h1>XEQT.TO</h1><br><table style=\"border-collapse: collapse; width: 100%;\">"));
        assert!(html.contains(
            "<th style=\"border: 1px solid #ddd; padding: 8px; text-align: center;\">Stat</th>"
        ));
        assert!(html.contains(
            "<tr style=\"border: 1px solid #ddd;\"><td style=\"border: 1px solid #ddd; padding: 8px; text-align: center;\">Open</td>"
        ));
        assert_eq!(html.matches("<tr ").count(), 9);
        assert!(html.ends_with("</tbody>\n</table>"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>A&B</b>"), "&lt;b&gt;A&amp;B&lt;/b&gt;");

        let html = render_report(&ohlcv(), "S&P <500>", &changes());
        assert!(html.starts_with("<h1>S&amp;P &lt;500&gt;</h1>"));
    }
}
