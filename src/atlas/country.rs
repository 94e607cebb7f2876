use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::atlas::Boundary;
use crate::error::MalformedGeometry;

/// ISO country code, unique across a dataset.
///
/// Stored interned and uppercase; `Ord` on the code text is what makes
/// ambiguous lookups resolve the same way on every run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(Arc<str>);

impl CountryCode {
    pub fn new(code: &str) -> Self {
        Self(Arc::from(code.trim().to_ascii_uppercase().as_str()))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self { Self::new(code) }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self { Self::new(&code) }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str { &self.0 }
}

/// A country: code, display name, and one or more boundary polygons
/// (archipelagos own several disjoint ones). Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Country {
    code: CountryCode,
    name: String,
    boundaries: Vec<Boundary>,
}

impl Country {
    pub fn new(
        code: impl Into<CountryCode>,
        name: impl Into<String>,
        boundaries: Vec<Boundary>,
    ) -> Result<Self, MalformedGeometry> {
        if boundaries.is_empty() {
            return Err(MalformedGeometry::NoBoundaries);
        }
        Ok(Self { code: code.into(), name: name.into(), boundaries })
    }

    #[inline] pub fn code(&self) -> &CountryCode { &self.code }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn boundaries(&self) -> &[Boundary] { &self.boundaries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Boundary {
        Boundary::from_rings(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[])
            .unwrap()
    }

    #[test]
    fn codes_are_normalized_and_ordered() {
        assert_eq!(CountryCode::new(" fr "), CountryCode::new("FR"));
        assert!(CountryCode::new("AA") < CountryCode::new("AB"));
        assert_eq!(CountryCode::new("de").as_str(), "DE");
    }

    #[test]
    fn country_requires_at_least_one_boundary() {
        assert_eq!(
            Country::new("AA", "Aland", vec![]).unwrap_err(),
            MalformedGeometry::NoBoundaries
        );
        let country = Country::new("aa", "Aland", vec![square()]).unwrap();
        assert_eq!(country.code().as_str(), "AA");
        assert_eq!(country.boundaries().len(), 1);
    }
}
