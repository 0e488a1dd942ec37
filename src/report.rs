//! Report operations and their plain-text rendering.

use std::{collections::BTreeMap, fmt::Write as _, str::FromStr};

use crate::{aggregate, error::ReportError, record::UserRecord};

pub const OPERATION_NAMES: &[&str] = &["summary", "filter", "group", "avg", "top", "region"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Summary,
    Filter,
    Group,
    Avg,
    Top,
    Region,
}

impl FromStr for Operation {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "summary" => Ok(Operation::Summary),
            "filter" => Ok(Operation::Filter),
            "group" => Ok(Operation::Group),
            "avg" => Ok(Operation::Avg),
            "top" => Ok(Operation::Top),
            "region" => Ok(Operation::Region),
            other => Err(ReportError::UnknownOperation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub min_age: i32,
    pub top: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { min_age: 30, top: 3 }
    }
}

/// Renders `operation` over `users`. An empty collection renders nothing.
pub fn render(operation: Operation, users: &[UserRecord], options: &ReportOptions) -> String {
    let mut output = String::new();
    if users.is_empty() {
        return output;
    }
    match operation {
        Operation::Summary => write_summary(&mut output, users, options),
        Operation::Filter => write_filtered_count(&mut output, users, options),
        Operation::Group => write_country_counts(&mut output, users),
        Operation::Avg => write_average(&mut output, users),
        Operation::Top => write_oldest(&mut output, users, options.top, ""),
        Operation::Region => write_region_counts(&mut output, users),
    }
    output
}

fn write_summary(output: &mut String, users: &[UserRecord], options: &ReportOptions) {
    let _ = writeln!(output, "Total users: {}", users.len());
    write_filtered_count(output, users, options);
    write_country_counts(output, users);
    write_average(output, users);
    let _ = writeln!(output, "Top {} oldest users:", options.top);
    write_oldest(output, users, options.top, "  ");
    write_region_counts(output, users);
}

fn write_filtered_count(output: &mut String, users: &[UserRecord], options: &ReportOptions) {
    let filtered = aggregate::filter_by_minimum_age(users, options.min_age);
    let _ = writeln!(output, "Filtered count: {}", filtered.len());
}

fn write_country_counts(output: &mut String, users: &[UserRecord]) {
    let _ = writeln!(output, "Users per country:");
    write_counts(output, &aggregate::count_by_country(users));
}

fn write_region_counts(output: &mut String, users: &[UserRecord]) {
    let _ = writeln!(output, "Users per region:");
    write_counts(output, &aggregate::count_by_region(users));
}

fn write_average(output: &mut String, users: &[UserRecord]) {
    let _ = writeln!(output, "Average age: {:.1}", aggregate::average_age(users));
}

fn write_oldest(output: &mut String, users: &[UserRecord], n: usize, indent: &str) {
    for user in aggregate::top_n_oldest(users, n) {
        let _ = writeln!(output, "{indent}{} ({})", user.name, user.age);
    }
}

fn write_counts(output: &mut String, counts: &BTreeMap<&str, usize>) {
    for (key, count) in counts {
        let _ = writeln!(output, "  {key}: {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<UserRecord> {
        vec![
            UserRecord::new("Alice", "34", "Finland"),
            UserRecord::new("Bob", "29", "USA"),
            UserRecord::new("Carol", "41", "Brazil"),
        ]
    }

    fn lines(operation: Operation) -> Vec<String> {
        render(operation, &sample(), &ReportOptions::default())
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn operation_names_parse() {
        for name in OPERATION_NAMES {
            assert!(name.parse::<Operation>().is_ok(), "{name} should parse");
        }
        assert_eq!("avg".parse::<Operation>(), Ok(Operation::Avg));
    }

    #[test]
    fn unknown_operation_lists_valid_names() {
        let err = "Summary".parse::<Operation>().expect_err("case-sensitive");
        assert_eq!(
            err.to_string(),
            "Unknown operation 'Summary'. Use summary|filter|group|avg|top|region."
        );
    }

    #[test]
    fn single_reports_render() {
        assert_eq!(lines(Operation::Filter), vec!["Filtered count: 2"]);
        assert_eq!(lines(Operation::Avg), vec!["Average age: 34.7"]);
        assert_eq!(
            lines(Operation::Top),
            vec!["Carol (41)", "Alice (34)", "Bob (29)"]
        );
        assert_eq!(
            lines(Operation::Group),
            vec![
                "Users per country:",
                "  Brazil: 1",
                "  Finland: 1",
                "  USA: 1"
            ]
        );
        assert_eq!(
            lines(Operation::Region),
            vec![
                "Users per region:",
                "  Europe: 1",
                "  North America: 1",
                "  South America: 1",
            ]
        );
    }

    #[test]
    fn summary_combines_every_report() {
        let expected = "\
Total users: 3
Filtered count: 2
Users per country:
  Brazil: 1
  Finland: 1
  USA: 1
Average age: 34.7
Top 3 oldest users:
  Carol (41)
  Alice (34)
  Bob (29)
Users per region:
  Europe: 1
  North America: 1
  South America: 1
";
        assert_eq!(
            render(Operation::Summary, &sample(), &ReportOptions::default()),
            expected
        );
    }

    #[test]
    fn whole_averages_keep_one_decimal() {
        let users = vec![UserRecord::new("a", "30", "")];
        let rendered = render(Operation::Avg, &users, &ReportOptions::default());
        assert_eq!(rendered, "Average age: 30.0\n");
    }

    #[test]
    fn large_averages_stay_fixed_point() {
        let users = vec![UserRecord::new("a", "12345678", "")];
        let rendered = render(Operation::Avg, &users, &ReportOptions::default());
        assert_eq!(rendered, "Average age: 12345678.0\n");
    }

    #[test]
    fn empty_collection_renders_nothing() {
        assert!(render(Operation::Summary, &[], &ReportOptions::default()).is_empty());
    }

    #[test]
    fn options_drive_threshold_and_top_size() {
        let options = ReportOptions { min_age: 40, top: 1 };
        let rendered = render(Operation::Summary, &sample(), &options);
        assert!(rendered.contains("Filtered count: 1\n"));
        assert!(rendered.contains("Top 1 oldest users:\n  Carol (41)\nUsers per region:"));
    }
}
