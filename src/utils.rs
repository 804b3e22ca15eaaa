//! Utility functions for common operations.

/// Format an ISO date string (YYYY-MM-DD) as "DD Mon YYYY" for display.
/// Strings that don't match the expected shape pass through unchanged.
pub fn format_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    if parts.len() != 3 {
        return iso.to_string();
    }
    let (year, month, day) = (parts[0], parts[1], parts[2]);
    let month_name = match month {
        "01" => "Jan",
        "02" => "Feb",
        "03" => "Mar",
        "04" => "Apr",
        "05" => "May",
        "06" => "Jun",
        "07" => "Jul",
        "08" => "Aug",
        "09" => "Sep",
        "10" => "Oct",
        "11" => "Nov",
        "12" => "Dec",
        _ => return iso.to_string(),
    };
    format!("{} {} {}", day, month_name, year)
}

/// Title-case a name for display: first letter of each word upper,
/// rest lower. Used for submitted trade names.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_valid() {
        assert_eq!(format_date("2024-03-14"), "14 Mar 2024");
        assert_eq!(format_date("2024-12-01"), "01 Dec 2024");
    }

    #[test]
    fn test_format_date_invalid_passthrough() {
        assert_eq!(format_date("not-a-date-at-all"), "not-a-date-at-all");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("marwah restaurant SOLE llc"), "Marwah Restaurant Sole Llc");
        assert_eq!(title_case("  marwah  "), "Marwah");
        assert_eq!(title_case(""), "");
    }
}
