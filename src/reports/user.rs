use crate::filter::FilteredView;
use crate::reports::types::{BirthYears, UserReport, ValueCount};
use crate::reports::utility::{mode, value_counts};

/// User type counts, plus gender counts and birth-year summary when the
/// dataset has those columns. Blank cells are not counted.
#[tracing::instrument(skip(view), fields(trips = view.len()))]
pub fn user_stats(view: &FilteredView<'_>) -> UserReport {
    let user_types = counts(view.iter().filter_map(|t| t.user_type.as_deref()));

    let genders = view
        .has_gender()
        .then(|| counts(view.iter().filter_map(|t| t.gender.as_deref())));

    let birth_years = view.has_birth_year().then(|| {
        let years: Vec<i32> = view
            .iter()
            .filter_map(|t| t.birth_year)
            .map(|y| y as i32)
            .collect();
        birth_summary(&years)
    });

    UserReport {
        user_types,
        genders,
        birth_years,
    }
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<ValueCount> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_summary(years: &[i32]) -> BirthYears {
    match (
        years.iter().min(),
        years.iter().max(),
        mode(years.iter().copied()),
    ) {
        (Some(&earliest), Some(&most_recent), Some(most_common)) => BirthYears::Summary {
            earliest,
            most_recent,
            most_common,
        },
        _ => BirthYears::NoData,
    }
}
