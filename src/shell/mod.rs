//! Interactive prompt loop.
//!
//! Asks for a city, month and day, prints the four reports, offers raw rows
//! five at a time, then offers a restart. Each pass loads the dataset afresh.

mod input;

pub use input::{LineInput, ScriptedInput, TerminalInput};

use anyhow::Result;
use chrono::{Month, Weekday};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::calendar::{month_name, title_case, weekday_name};
use crate::config::Catalog;
use crate::filter::{ALL, Selector, filter, parse_month, parse_weekday};
use crate::loader::load_city;
use crate::output::{
    write_duration_report, write_elapsed, write_raw_rows, write_rule, write_station_report,
    write_time_report, write_user_report,
};
use crate::pager::{PAGE_SIZE, raw_page};
use crate::reports::{duration_stats, station_stats, time_stats, user_stats};

const PROMPT: &str = "> ";

/// What to do after one pass through the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'c, I, W> {
    catalog: &'c Catalog,
    input: I,
    out: W,
}

impl<'c, I: LineInput, W: Write> Shell<'c, I, W> {
    pub fn new(catalog: &'c Catalog, input: I, out: W) -> Self {
        Self {
            catalog,
            input,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs passes until the user declines a restart or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut passes = 0;
        loop {
            passes += 1;
            if self.pass()? == Flow::Quit {
                break;
            }
            match self.ask("\nWould you like to restart? Enter yes or no.")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => {}
                _ => break,
            }
        }
        info!(passes, "Shell session ended");
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.out, "{question}")?;
        self.out.flush()?;
        self.input.read_line(PROMPT)
    }

    /// Lists `options` and asks until `parse` accepts the reply.
    fn choose<T>(
        &mut self,
        options: &[String],
        question: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        loop {
            writeln!(self.out)?;
            for option in options {
                writeln!(self.out, "{option}")?;
            }
            let Some(reply) = self.ask(question)? else {
                return Ok(None);
            };
            match parse(reply.as_str()) {
                Some(value) => return Ok(Some(value)),
                None => debug!(reply = %reply, "Rejected selector input"),
            }
        }
    }

    fn choose_city(&mut self) -> Result<Option<String>> {
        let catalog = self.catalog;
        let options: Vec<String> = catalog.cities().map(|(city, _)| title_case(city)).collect();
        self.choose(&options, "\nPlease enter one of the above cities.", |reply| {
            let city = reply.trim().to_lowercase();
            catalog.contains(&city).then_some(city)
        })
    }

    fn choose_month(&mut self) -> Result<Option<Selector<Month>>> {
        let catalog = self.catalog;
        let options: Vec<String> = catalog
            .months()
            .iter()
            .map(|m| month_name(*m).to_string())
            .chain([ALL.to_string()])
            .collect();
        self.choose(
            &options,
            "\nPlease enter one of the above options for which month to examine.",
            |reply| parse_month(reply, catalog).ok(),
        )
    }

    fn choose_weekday(&mut self) -> Result<Option<Selector<Weekday>>> {
        let catalog = self.catalog;
        let options: Vec<String> = catalog
            .weekdays()
            .iter()
            .map(|d| weekday_name(*d).to_string())
            .chain([ALL.to_string()])
            .collect();
        self.choose(
            &options,
            "\nPlease enter one of the above options for which day to examine.",
            |reply| parse_weekday(reply, catalog).ok(),
        )
    }

    fn pass(&mut self) -> Result<Flow> {
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;

        let Some(city) = self.choose_city()? else {
            return Ok(Flow::Quit);
        };
        let Some(month) = self.choose_month()? else {
            return Ok(Flow::Quit);
        };
        let Some(weekday) = self.choose_weekday()? else {
            return Ok(Flow::Quit);
        };
        write_rule(&mut self.out)?;
        info!(city = %city, %month, %weekday, "Selection made");

        let dataset = match load_city(self.catalog, &city) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(city = %city, error = %e, "Failed to load dataset");
                writeln!(self.out, "Could not load data for {}: {e}", title_case(&city))?;
                return Ok(Flow::Continue);
            }
        };
        let view = filter(&dataset, month, weekday);

        let started = Instant::now();
        let time = time_stats(&view);
        write_time_report(&mut self.out, time.as_ref())?;
        write_elapsed(&mut self.out, started.elapsed())?;

        let started = Instant::now();
        let stations = station_stats(&view);
        write_station_report(&mut self.out, stations.as_ref())?;
        write_elapsed(&mut self.out, started.elapsed())?;

        let started = Instant::now();
        let durations = duration_stats(&view);
        write_duration_report(&mut self.out, durations.as_ref())?;
        write_elapsed(&mut self.out, started.elapsed())?;

        let started = Instant::now();
        let users = user_stats(&view);
        write_user_report(&mut self.out, &users)?;
        write_elapsed(&mut self.out, started.elapsed())?;

        let mut offset = 0;
        loop {
            let Some(answer) =
                self.ask("\nWould you like to see 5 lines of raw data? Enter yes or no.")?
            else {
                return Ok(Flow::Quit);
            };
            match answer.trim().to_lowercase().as_str() {
                "yes" => {
                    write_raw_rows(&mut self.out, &raw_page(&view, offset))?;
                    offset = offset.saturating_add(PAGE_SIZE);
                }
                "no" => break,
                _ => writeln!(self.out, "Invalid command")?,
            }
        }

        Ok(Flow::Continue)
    }
}
