//! Text and JSON rendering of reports and raw rows.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::pager::RawRow;
use crate::reports::{
    BirthYears, DurationReport, StationReport, Summary, TimeReport, UserReport, ValueCount,
};

const NO_TRIPS: &str = "No trips match the selected filters.";

/// Horizontal rule printed between sections.
pub fn write_rule<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "-".repeat(40))?;
    Ok(())
}

/// Footer closing a report section with how long it took.
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    write_rule(out)
}

fn most_common<W: Write>(out: &mut W, target: &str, answer: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "The most common {target} is: {answer}")?;
    Ok(())
}

pub fn write_time_report<W: Write>(out: &mut W, report: Option<&TimeReport>) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    match report {
        Some(r) => {
            most_common(out, "month", r.month)?;
            most_common(out, "weekday", r.weekday)?;
            most_common(out, "hour", r.start_hour)?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }
    Ok(())
}

pub fn write_station_report<W: Write>(out: &mut W, report: Option<&StationReport>) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    match report {
        Some(r) => {
            most_common(out, "Start Station", &r.start_station)?;
            most_common(out, "End Station", &r.end_station)?;
            most_common(out, "trip", &r.trip)?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }
    Ok(())
}

pub fn write_duration_report<W: Write>(out: &mut W, report: Option<&DurationReport>) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    match report {
        Some(r) => {
            writeln!(out, "The total travel time is {} minutes", r.total_minutes)?;
            writeln!(out, "The average travel time is {} minutes", r.mean_minutes)?;
        }
        None => writeln!(out, "No trip durations for the selected filters.")?,
    }
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, counts: &[ValueCount], suffix: &str) -> Result<()> {
    for c in counts {
        writeln!(out, "The amount of {}{suffix} is {}", c.value, c.count)?;
    }
    Ok(())
}

pub fn write_user_report<W: Write>(out: &mut W, report: &UserReport) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;

    if report.user_types.is_empty() {
        writeln!(out, "No user types for the selected filters.")?;
    }
    write_counts(out, &report.user_types, "s")?;

    if let Some(genders) = &report.genders {
        if genders.is_empty() {
            writeln!(out, "No gender data for the selected filters.")?;
        }
        write_counts(out, genders, " users")?;
    }

    match &report.birth_years {
        Some(BirthYears::Summary {
            earliest,
            most_recent,
            most_common,
        }) => {
            writeln!(out, "The earliest year of birth is {earliest}")?;
            writeln!(out, "The most recent year of birth is {most_recent}")?;
            writeln!(out, "The most common year of birth is {most_common}")?;
        }
        Some(BirthYears::NoData) => {
            writeln!(out, "No birth year data for the selected filters.")?;
        }
        None => {}
    }
    Ok(())
}

/// Prints one padded `column value` line per cell, rows separated by a blank line.
pub fn write_raw_rows<W: Write>(out: &mut W, rows: &[RawRow<'_>]) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
        return Ok(());
    }
    for row in rows {
        for &(column, value) in &row.fields {
            let column = if column.is_empty() { "#" } else { column };
            writeln!(out, "{column:<14} {value}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// All four reports one after the other, without timings.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(
        out,
        "{} trips in {} (month: {}, day: {})",
        summary.trips, summary.city, summary.month, summary.weekday
    )?;
    write_rule(out)?;
    write_time_report(out, summary.time.as_ref())?;
    write_rule(out)?;
    write_station_report(out, summary.stations.as_ref())?;
    write_rule(out)?;
    write_duration_report(out, summary.durations.as_ref())?;
    write_rule(out)?;
    write_user_report(out, &summary.users)?;
    write_rule(out)
}

/// Writes the summary as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    debug!(city = %summary.city, "Writing JSON summary");
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn users() -> UserReport {
        UserReport {
            user_types: vec![ValueCount {
                value: "Subscriber".to_string(),
                count: 2,
            }],
            genders: None,
            birth_years: Some(BirthYears::Summary {
                earliest: 1950,
                most_recent: 2001,
                most_common: 1989,
            }),
        }
    }

    #[test]
    fn test_time_report_lines() {
        let report = TimeReport {
            month: "June",
            weekday: "Friday",
            start_hour: 17,
        };
        let text = render(|out| write_time_report(out, Some(&report)));

        assert!(text.contains("The most common month is: June"));
        assert!(text.contains("The most common weekday is: Friday"));
        assert!(text.contains("The most common hour is: 17"));
    }

    #[test]
    fn test_empty_reports_say_so() {
        let text = render(|out| write_station_report(out, None));
        assert!(text.contains(NO_TRIPS));

        let text = render(|out| write_duration_report(out, None));
        assert!(text.contains("No trip durations"));
    }

    #[test]
    fn test_user_report_skips_absent_gender() {
        let text = render(|out| write_user_report(out, &users()));

        assert!(text.contains("The amount of Subscribers is 2"));
        assert!(!text.contains("users is"));
        assert!(text.contains("The earliest year of birth is 1950"));
        assert!(text.contains("The most common year of birth is 1989"));
    }

    #[test]
    fn test_raw_rows_render_unnamed_column() {
        let rows = vec![RawRow {
            fields: vec![("", "0"), ("Start Station", "Canal St")],
        }];
        let text = render(|out| write_raw_rows(out, &rows));

        assert!(text.contains("#"));
        assert!(text.contains("Start Station  Canal St"));
    }

    #[test]
    fn test_write_json_round_trips() {
        let summary = Summary {
            city: "chicago".to_string(),
            month: "All".to_string(),
            weekday: "All".to_string(),
            trips: 0,
            time: None,
            stations: None,
            durations: None,
            users: users(),
        };
        let text = render(|out| write_json(out, &summary));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["city"], "chicago");
        assert!(value["time"].is_null());
        assert_eq!(value["users"]["birth_years"]["status"], "summary");
    }
}
