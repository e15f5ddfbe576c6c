//! Command-line interface components.

use crate::config::AnalysisConfig;
use crate::models::{City, DayFilter, FilterCriteria, MonthFilter};
use crate::report::{render_error, render_report, render_rows};
use crate::session::AnalysisSession;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use self::prompt::Prompter;

#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip data: busiest times, stations, durations and riders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// City to analyze; runs a single non-interactive cycle when given
    #[arg(long)]
    pub city: Option<String>,

    /// Month filter (January-June or "all"), used with --city
    #[arg(long, default_value = "all")]
    pub month: String,

    /// Day filter (Monday-Sunday or "all"), used with --city
    #[arg(long, default_value = "all")]
    pub day: String,

    /// Skip the raw data browser
    #[arg(long)]
    pub no_raw: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the session configuration from the command line
    pub fn to_config(&self) -> AnalysisConfig {
        AnalysisConfig::default().with_data_dir(&self.data_dir)
    }

    /// Filters given on the command line, if a city was supplied
    pub fn criteria(&self) -> Result<Option<FilterCriteria>> {
        let Some(city) = &self.city else {
            return Ok(None);
        };
        let city: City = city.parse().context("Invalid --city")?;
        let month: MonthFilter = self.month.parse().context("Invalid --month")?;
        let day: DayFilter = self.day.parse().context("Invalid --day")?;
        Ok(Some(FilterCriteria::new(city, month, day)))
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bikeshare_explorer={}", log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the explorer: one cycle for `--city`, otherwise the interactive loop
pub fn run(args: Args) -> Result<()> {
    let session = AnalysisSession::new(args.to_config());
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    match args.criteria()? {
        Some(criteria) => run_once(&session, &mut prompter, criteria, !args.no_raw),
        None => run_interactive(&session, &mut prompter, !args.no_raw),
    }
}

/// Single analysis cycle; loading failures are fatal here
pub fn run_once<R: BufRead, W: Write>(
    session: &AnalysisSession,
    prompter: &mut Prompter<R, W>,
    criteria: FilterCriteria,
    browse_raw: bool,
) -> Result<()> {
    let (table, report) = session
        .run(criteria)
        .with_context(|| format!("Analysis of {} failed", criteria))?;

    prompter.say(&render_report(&report, session.config().bar_width))?;
    if browse_raw {
        prompter.browse_raw_data(&table, session.config().page_size)?;
    }
    Ok(())
}

/// Prompt for filters, report, and repeat until the user declines a restart
pub fn run_interactive<R: BufRead, W: Write>(
    session: &AnalysisSession,
    prompter: &mut Prompter<R, W>,
    browse_raw: bool,
) -> Result<()> {
    prompter.say(&format!(
        "{}\n",
        "Hello! Let's explore some US bikeshare data!".bright_green().bold()
    ))?;

    loop {
        let criteria = prompter.get_filters()?;

        match session.run(criteria) {
            Ok((table, report)) => {
                prompter.say(&render_report(&report, session.config().bar_width))?;
                if browse_raw {
                    prompter.browse_raw_data(&table, session.config().page_size)?;
                }
            }
            // Loading failures end this cycle only; the user may pick again
            Err(error) => {
                warn!("Analysis of {} failed: {}", criteria, error);
                prompter.say(&render_error(&error))?;
            }
        }

        if !prompter.ask_continue("\nWould you like to restart? Enter yes or no: ")? {
            break;
        }
    }
    Ok(())
}

/// Interactive prompting over any reader/writer pair
pub mod prompt {
    use super::*;
    use crate::constants::SEPARATOR_WIDTH;
    use crate::models::TripTable;
    use std::fmt::Display;
    use std::str::FromStr;

    /// Strict yes/no answer
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum YesNo {
        Yes,
        No,
    }

    impl FromStr for YesNo {
        type Err = String;

        fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
            match s.trim().to_lowercase().as_str() {
                "yes" => Ok(YesNo::Yes),
                "no" => Ok(YesNo::No),
                other => Err(format!("expected yes or no, got '{}'", other)),
            }
        }
    }

    pub struct Prompter<R, W> {
        input: R,
        output: W,
    }

    impl<R: BufRead, W: Write> Prompter<R, W> {
        pub fn new(input: R, output: W) -> Self {
            Self { input, output }
        }

        /// Consume the prompter, returning the output sink
        pub fn into_output(self) -> W {
            self.output
        }

        /// Write text to the output
        pub fn say(&mut self, text: &str) -> Result<()> {
            self.output
                .write_all(text.as_bytes())
                .context("Failed to write output")?;
            self.output.flush().context("Failed to flush output")
        }

        /// Show a question and read one trimmed line; `None` at end of input
        fn ask(&mut self, question: &str) -> Result<Option<String>> {
            self.say(question)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read user input")?;
            if read == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim().to_string()))
        }

        /// Ask until the answer parses as `T`
        pub fn prompt_choice<T>(&mut self, question: &str, retry_message: &str) -> Result<T>
        where
            T: FromStr,
            T::Err: Display,
        {
            loop {
                let Some(answer) = self.ask(question)? else {
                    anyhow::bail!("Input closed before a valid answer was given");
                };
                match answer.parse::<T>() {
                    Ok(value) => return Ok(value),
                    Err(error) => {
                        debug!("Rejected input '{}': {}", answer, error);
                        self.say(&format!("{}\n", retry_message.bright_red()))?;
                    }
                }
            }
        }

        /// City, month and day, each re-prompted until valid
        pub fn get_filters(&mut self) -> Result<FilterCriteria> {
            const RETRY: &str = "Invalid input. Please try again.";

            let city: City = self.prompt_choice(
                "Please select a city to analyze (Chicago, New York City, Washington): ",
                RETRY,
            )?;
            let month: MonthFilter = self.prompt_choice(
                "Please enter the month to analyze\n\t(January, February, March, April, May, June) or 'all' for no filter: ",
                RETRY,
            )?;
            let day: DayFilter = self.prompt_choice(
                "Please enter the day to analyze\n\t(Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday) or 'all' for no filter: ",
                RETRY,
            )?;

            self.say(&format!("{}\n", "-".repeat(SEPARATOR_WIDTH)))?;
            Ok(FilterCriteria::new(city, month, day))
        }

        /// Strict yes/no, re-prompting on anything else
        pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
            let answer: YesNo =
                self.prompt_choice(question, "Invalid input. Please enter 'yes' or 'no'.")?;
            Ok(answer == YesNo::Yes)
        }

        /// Lenient confirmation: only "yes" continues, end of input declines
        pub fn ask_continue(&mut self, question: &str) -> Result<bool> {
            Ok(self
                .ask(question)?
                .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
        }

        /// Offer the raw trips, then page through them on request
        pub fn browse_raw_data(&mut self, table: &TripTable, page_size: usize) -> Result<()> {
            if !self.ask_yes_no("\nWould you like to see raw data? Enter yes or no: ")? {
                return Ok(());
            }

            let mut offset = 0;
            loop {
                let page = table.rows(offset, page_size);
                self.say(&render_rows(table, offset, page))?;
                offset += page_size;

                if offset >= table.len()
                    || !self.ask_continue(&format!(
                        "\nWould you like to see {} more rows of raw data? Enter yes or no: ",
                        page_size
                    ))?
                {
                    self.say("\nNo more raw data to display.\n")?;
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::prompt::{Prompter, YesNo};
    use super::*;
    use crate::models::SelectableMonth;
    use chrono::Weekday;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_get_filters_reprompts_on_invalid_input() {
        let mut prompter = prompter("boston\nchicago\njuly\nMarch\nfunday\nall\n");
        let criteria = prompter.get_filters().unwrap();

        assert_eq!(criteria.city, City::Chicago);
        assert_eq!(criteria.month, MonthFilter::Only(SelectableMonth::March));
        assert_eq!(criteria.day, DayFilter::All);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Invalid input. Please try again.").count(), 3);
    }

    #[test]
    fn test_get_filters_fails_when_input_ends() {
        let mut prompter = prompter("washington\n");
        assert!(prompter.get_filters().is_err());
    }

    #[test]
    fn test_yes_no_parsing() {
        assert_eq!(" YES ".parse::<YesNo>().unwrap(), YesNo::Yes);
        assert_eq!("no".parse::<YesNo>().unwrap(), YesNo::No);
        assert!("maybe".parse::<YesNo>().is_err());

        let mut prompter = prompter("maybe\nno\n");
        assert!(!prompter.ask_yes_no("Raw? ").unwrap());
    }

    #[test]
    fn test_ask_continue_is_lenient() {
        let mut prompter = prompter("yes\nsure\n");
        assert!(prompter.ask_continue("Restart? ").unwrap());
        assert!(!prompter.ask_continue("Restart? ").unwrap());
        // end of input declines
        assert!(!prompter.ask_continue("Restart? ").unwrap());
    }

    #[test]
    fn test_args_criteria() {
        let args = Args::parse_from([
            "bikeshare",
            "--city",
            "new york city",
            "--month",
            "june",
            "--day",
            "friday",
        ]);
        let criteria = args.criteria().unwrap().unwrap();
        assert_eq!(criteria.city, City::NewYorkCity);
        assert_eq!(criteria.month, MonthFilter::Only(SelectableMonth::June));
        assert_eq!(criteria.day, DayFilter::Only(Weekday::Fri));

        let interactive = Args::parse_from(["bikeshare"]);
        assert!(interactive.criteria().unwrap().is_none());

        let invalid = Args::parse_from(["bikeshare", "--city", "chicago", "--month", "august"]);
        assert!(invalid.criteria().is_err());
    }
}
