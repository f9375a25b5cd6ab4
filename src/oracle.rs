//! The prefix oracle: the only view of the dictionary the search needs.

use crate::errors::OracleError;

/// What the dictionary knows about a candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Neither an entry nor the prefix of one. The branch can be pruned.
    Absent,
    /// Not an entry itself, but some longer entry starts with it.
    PrefixOnly,
    /// An entry. It may also be the prefix of longer entries.
    Complete,
}

impl Verdict {
    /// Whether the candidate should be emitted.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self == Verdict::Complete
    }

    /// Whether extending the candidate could still lead to an entry.
    ///
    /// `Complete` counts: "cat" is an entry and still a prefix of "cats".
    #[must_use]
    pub fn can_extend(self) -> bool {
        self != Verdict::Absent
    }
}

/// Answers "is this string a word, a prefix of a word, or neither?".
///
/// Implementations must be deterministic for a fixed dictionary and accept
/// any candidate length from 1 up to the number of grid cells. Returning an
/// error abandons only the branch that asked.
pub trait PrefixOracle {
    /// Classify `candidate`.
    ///
    /// # Errors
    ///
    /// [`OracleError`] if the oracle cannot answer for this candidate.
    fn query(&self, candidate: &str) -> Result<Verdict, OracleError>;
}

impl<F> PrefixOracle for F
where
    F: Fn(&str) -> Result<Verdict, OracleError>,
{
    fn query(&self, candidate: &str) -> Result<Verdict, OracleError> {
        self(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_predicates() {
        assert!(!Verdict::Absent.can_extend());
        assert!(!Verdict::Absent.is_complete());
        assert!(Verdict::PrefixOnly.can_extend());
        assert!(!Verdict::PrefixOnly.is_complete());
        assert!(Verdict::Complete.can_extend());
        assert!(Verdict::Complete.is_complete());
    }

    #[test]
    fn test_closure_is_an_oracle() {
        let oracle = |candidate: &str| match candidate {
            "a" => Ok(Verdict::PrefixOnly),
            "ab" => Ok(Verdict::Complete),
            "x" => Err(OracleError::new(candidate, "unsupported")),
            _ => Ok(Verdict::Absent),
        };
        assert_eq!(oracle.query("a"), Ok(Verdict::PrefixOnly));
        assert_eq!(oracle.query("ab"), Ok(Verdict::Complete));
        assert_eq!(oracle.query("zz"), Ok(Verdict::Absent));
        assert!(oracle.query("x").is_err());
    }
}
