pub mod parse;

use std::io::BufRead;

use crate::lib::{
    error::{Error, Result},
    preference::{Customer, Preference, Tag},
};

/// Name under which standard input is reported
pub const STDIN: &str = "standard input";

/// Assign tags `A`, `B`, ... to the recognized preferences, in order
///
/// `Unknown` preferences are skipped without consuming a tag.
/// Fails if more customers remain than there are letters.
pub fn register<I>(preferences: I) -> Result<Vec<Customer>>
where
    I: IntoIterator<Item = Preference>,
{
    let known = preferences
        .into_iter()
        .filter(Preference::is_known)
        .collect::<Vec<_>>();
    if known.len() > Tag::COUNT {
        return Err(Error::RegistryOverflow { count: known.len() });
    }
    let customers = (0..)
        .map_while(Tag::nth)
        .zip(known)
        .map(|(tag, preference)| Customer { tag, preference })
        .collect::<Vec<_>>();
    tracing::info!("registered {} customers", customers.len());
    Ok(customers)
}

/// Classify raw lines up to the first empty one, then register them
pub fn read_preferences<I, S>(lines: I) -> Result<Vec<Customer>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut preferences = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            break;
        }
        let preference = parse::classify(line);
        if preference.is_known() {
            tracing::debug!("'{}' read as {}", line, preference);
        } else {
            tracing::debug!("discarding unrecognized preference '{}'", line);
        }
        preferences.push(preference);
    }
    register(preferences)
}

/// Same as `read_preferences`, from a buffered reader named `input`
///
/// Line terminators are removed, other whitespace is significant.
/// Nothing is read past the terminating empty line.
pub fn read_from<R: BufRead>(input: &str, reader: R) -> Result<Vec<Customer>> {
    let mut failure = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(mut line) => {
            if line.ends_with('\r') {
                line.pop();
            }
            Some(line)
        }
        Err(source) => {
            failure = Some(source);
            None
        }
    });
    let customers = read_preferences(lines);
    match failure {
        Some(source) => Err(Error::Io { input: input.to_string(), source }),
        None => customers,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lib::preference::MonthDay;

    fn tags(customers: &[Customer]) -> String {
        customers.iter().map(|c| c.tag.letter()).collect()
    }

    #[test]
    fn sample_session() {
        let customers = read_preferences(["05", "MON TUE", "Daily", "Never", ""]).unwrap();
        assert_eq!(tags(&customers), "ABCD");
        assert_eq!(customers[0].preference, Preference::DayOfMonth(MonthDay::new(5).unwrap()));
        assert_eq!(customers[2].preference, Preference::Daily);
        assert_eq!(customers[3].preference, Preference::Never);
    }

    #[test]
    fn skips_unknown() {
        let customers = read_preferences(["banana", "Daily", "29", "Never", "5"]).unwrap();
        assert_eq!(tags(&customers), "AB");
        assert_eq!(customers[0].preference, Preference::Daily);
        assert_eq!(customers[1].preference, Preference::Never);
    }

    #[test]
    fn stops_at_empty_line() {
        let customers = read_preferences(["Daily", "", "Never"]).unwrap();
        assert_eq!(customers.len(), 1);
        assert!(read_preferences(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn alphabet_boundary() {
        let full = register(vec![Preference::Daily; 26]).unwrap();
        assert_eq!(full.last().map(|c| c.tag.letter()), Some('Z'));
        match register(vec![Preference::Daily; 27]) {
            Err(Error::RegistryOverflow { count }) => assert_eq!(count, 27),
            other => panic!("{:?} instead of an overflow", other),
        }
        // unknown entries do not count towards the limit
        let mut mixed = vec![Preference::Unknown; 10];
        mixed.extend(vec![Preference::Never; 26]);
        assert_eq!(register(mixed).unwrap().len(), 26);
    }

    #[test]
    fn from_reader() {
        let input = "05\r\nMON TUE\nbanana\nDaily\n\nNever\n";
        let customers = read_from("sample", input.as_bytes()).unwrap();
        assert_eq!(tags(&customers), "ABC");
        assert_eq!(customers[2].preference, Preference::Daily);
    }

    #[test]
    fn reader_stops_at_empty_line() {
        // invalid UTF-8 after the terminator is never decoded
        let input: &[u8] = b"Daily\n\n\xff\xfe\n";
        assert_eq!(tags(&read_from(STDIN, input).unwrap()), "A");
    }

    #[test]
    fn reader_failure() {
        let input: &[u8] = b"Daily\n\xff\xfe\nNever\n";
        match read_from(STDIN, input) {
            Err(Error::Io { input, source }) => {
                assert_eq!(input, STDIN);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("{:?} instead of a read failure", other),
        }
    }
}
