mod cli;
mod lib;
mod load;

use std::{fs::File, io::BufReader};

use clap::{App, Arg, ArgMatches};

use lib::{
    date::Date,
    error::{Error, Result},
    report::{Report, WINDOW},
};

fn main() {
    let matches = App::new("subscribe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Forecast who is subscribed on each of the next 90 days")
        .arg(
            Arg::with_name("FILE")
                .help("Read preferences from FILE instead of standard input")
                .index(1),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("YYYY-MM-DD")
                .takes_value(true)
                .help("Reference date, the report starts the day after (default: today)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log classification details to stderr"),
        )
        .get_matches();

    cli::logger::init(matches.is_present("verbose"));

    match run(&matches) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            eprintln!("  ? hint: {}", e.fix_hint());
            std::process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<Report> {
    let reference = reference_date(matches.value_of("from"))?;
    let customers = match matches.value_of("FILE") {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Io {
                input: path.to_string(),
                source,
            })?;
            load::read_from(path, BufReader::new(file))?
        }
        None => {
            eprintln!("Input: ");
            load::read_from(load::STDIN, std::io::stdin().lock())?
        }
    };
    Ok(Report::build(&customers, reference))
}

/// Parse `--from`, or fall back to today's date
///
/// The whole window after the reference must be within supported dates.
fn reference_date(arg: Option<&str>) -> Result<Date> {
    let naive = match arg {
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| Error::MalformedDate(s.to_string()))?,
        None => chrono::Local::now().date_naive(),
    };
    let reference = Date::try_from(naive)?;
    reference.window_end(WINDOW)?;
    Ok(reference)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lib::date::{DateError, Month};

    #[test]
    fn explicit_reference() {
        assert_eq!(
            reference_date(Some("2018-03-31")).unwrap(),
            Date::from(2018, Month::Mar, 31).unwrap()
        );
    }

    #[test]
    fn bad_reference() {
        assert!(matches!(
            reference_date(Some("31/03/2018")),
            Err(Error::MalformedDate(_))
        ));
        assert!(matches!(
            reference_date(Some("0999-01-01")),
            Err(Error::InvalidDate(DateError::UnsupportedYear(999)))
        ));
    }

    #[test]
    fn window_past_last_year() {
        assert!(reference_date(Some("9999-10-02")).is_ok());
        for late in ["9999-10-03", "9999-12-31"] {
            assert!(matches!(
                reference_date(Some(late)),
                Err(Error::InvalidDate(DateError::UnsupportedYear(10000)))
            ), "{} should be rejected", late);
        }
    }

    #[test]
    fn latest_report_keeps_four_digit_years() {
        let customers = crate::load::read_preferences(["Daily"]).unwrap();
        let reference = reference_date(Some("9999-10-02")).unwrap();
        let text = format!("{}", Report::build(&customers, reference));
        assert_eq!(text.lines().last(), Some("Fri 31-December-9999   A"));
        assert!(!text.contains("10000"));
    }

    #[test]
    fn sample_session_end_to_end() {
        let customers = crate::load::read_preferences(["05", "MON TUE", "Daily", "Never", ""]).unwrap();
        let reference = reference_date(Some("2018-03-31")).unwrap();
        let text = format!("{}", Report::build(&customers, reference));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), WINDOW);
        assert_eq!(lines[0], "Sun 01-April-2018   C");
        assert_eq!(lines[1], "Mon 02-April-2018   B, C");
        assert_eq!(lines[2], "Tue 03-April-2018   B, C");
        assert_eq!(lines[4], "Thu 05-April-2018   A, C");
    }
}
