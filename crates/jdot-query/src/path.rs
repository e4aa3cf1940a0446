use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::Error;

/// A dotted name path such as `DailyForecasts.Temperature.Minimum.Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    raw: String,
    segments: SmallVec<[SmolStr; 4]>,
}

impl Path {
    pub const SEPARATOR: char = '.';

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn first(&self) -> &str {
        // A parsed path always has at least one segment.
        self.segments.first().map(SmolStr::as_str).unwrap_or_default()
    }

    pub fn last(&self) -> &str {
        self.segments.last().map(SmolStr::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split(Self::SEPARATOR)
            .map(|segment| {
                if segment.is_empty() {
                    Err(Error::InvalidPath(s.to_string()))
                } else {
                    Ok(SmolStr::new(segment))
                }
            })
            .collect::<Result<SmallVec<_>, _>>()?;

        Ok(Self {
            raw: s.to_string(),
            segments,
        })
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single("v", vec!["v"])]
    #[case::nested("a.b.c", vec!["a", "b", "c"])]
    #[case::repeated("a.a", vec!["a", "a"])]
    #[case::spaces(" a .b", vec![" a ", "b"])]
    fn test_parse(#[case] input: &str, #[case] expected: Vec<&str>) {
        let path = input.parse::<Path>().unwrap();
        assert_eq!(
            path.segments().iter().map(SmolStr::as_str).collect::<Vec<_>>(),
            expected
        );
        assert_eq!(path.first(), expected[0]);
        assert_eq!(path.last(), *expected.last().unwrap());
        assert_eq!(path.to_string(), input);
    }

    #[rstest]
    #[case::empty("")]
    #[case::leading_dot(".a")]
    #[case::trailing_dot("a.")]
    #[case::double_dot("a..b")]
    #[case::only_dot(".")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_eq!(
            Path::try_from(input),
            Err(Error::InvalidPath(input.to_string()))
        );
    }
}
