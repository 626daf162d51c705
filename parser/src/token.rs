//! Token classification for raw argument segments.
//!
//! Each whitespace-delimited segment is classified in a fixed order: the
//! Java-style `-D` prefix first, then the GNU `--` prefix, and everything
//! else as a POSIX short cluster. Classification never fails; names that
//! match nothing are dropped later by the matcher.

const PREFIX_JAVA_OPTION: &str = "-D";
const PREFIX_GNU_OPTION: &str = "--";
const PREFIX_POSIX_OPTION: char = '-';

/// One name candidate extracted from a segment, with its embedded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

impl Candidate {
    fn named(rest: &str) -> Self {
        // Only the first `=` separates name from value; the value may itself
        // contain `=`.
        match rest.split_once('=') {
            Some((name, value)) => Self {
                name: name.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                name: rest.to_string(),
                value: None,
            },
        }
    }

    fn short(c: char) -> Self {
        Self {
            name: c.to_string(),
            value: None,
        }
    }
}

/// Expands a segment into its name candidates.
///
/// `-D` and `--` segments yield exactly one candidate with an optional
/// `=`-separated value. Anything else is a POSIX cluster: one leading dash
/// is stripped and every remaining character becomes an independent
/// valueless candidate, so `-dv` expands to `d` and `v`.
///
/// A bare `-D` classifies as a Java-style token with an empty name; it is
/// never a short `D`.
pub(crate) fn candidates(segment: &str) -> Vec<Candidate> {
    if let Some(rest) = segment.strip_prefix(PREFIX_JAVA_OPTION) {
        return vec![Candidate::named(rest)];
    }

    if let Some(rest) = segment.strip_prefix(PREFIX_GNU_OPTION) {
        return vec![Candidate::named(rest)];
    }

    let cluster = segment.strip_prefix(PREFIX_POSIX_OPTION).unwrap_or(segment);
    cluster.chars().map(Candidate::short).collect()
}
