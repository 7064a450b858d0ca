//! Table-driven numeric field extraction.
//!
//! Each domain declares its numeric fields once as a `FieldSpec` table; the
//! table is compiled to regexes a single time and queried by field name.

use regex::Regex;

use super::patterns::{first_capture, number_pattern, suffix_pattern};
use crate::error::ExtractError;
use crate::records::Reading;

/// How a field locates its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Number shortly after one of the keyword aliases.
    Keyword,
    /// As `Keyword`, falling back to any number directly followed by the unit.
    KeywordOrUnitSuffix,
}

/// Declaration of one numeric field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub unit: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub const fn keyword(
        name: &'static str,
        aliases: &'static [&'static str],
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            aliases,
            unit,
            kind: FieldKind::Keyword,
        }
    }

    #[must_use]
    pub const fn with_unit_suffix(mut self) -> Self {
        self.kind = FieldKind::KeywordOrUnitSuffix;
        self
    }
}

#[derive(Debug)]
struct CompiledField {
    name: &'static str,
    keyword_patterns: Vec<Regex>,
    suffix_pattern: Option<Regex>,
}

impl CompiledField {
    fn compile(spec: &FieldSpec) -> Result<Self, ExtractError> {
        let pattern_error = |source| ExtractError::Pattern {
            field: spec.name,
            source,
        };

        let keyword_patterns = spec
            .aliases
            .iter()
            .map(|alias| Regex::new(&number_pattern(alias, spec.unit)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(pattern_error)?;

        let suffix_pattern = match spec.kind {
            FieldKind::Keyword => None,
            FieldKind::KeywordOrUnitSuffix => {
                Some(Regex::new(&suffix_pattern(spec.unit)).map_err(pattern_error)?)
            }
        };

        Ok(Self {
            name: spec.name,
            keyword_patterns,
            suffix_pattern,
        })
    }

    fn extract(&self, text: &str) -> Option<f64> {
        self.keyword_patterns
            .iter()
            .find_map(|re| first_capture(re, text))
            .or_else(|| {
                self.suffix_pattern
                    .as_ref()
                    .and_then(|re| first_capture(re, text))
            })
    }
}

/// A compiled set of numeric fields for one domain.
#[derive(Debug)]
pub struct FieldTable {
    fields: Vec<CompiledField>,
}

impl FieldTable {
    pub fn compile(specs: &[FieldSpec]) -> Result<Self, ExtractError> {
        let fields = specs
            .iter()
            .map(CompiledField::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    /// Extract the named field from `text`, `Reading::Unavailable` if absent.
    pub fn reading(&self, name: &'static str, text: &str) -> Result<Reading, ExtractError> {
        let field = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .ok_or(ExtractError::UnknownField(name))?;
        Ok(field.extract(text).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::keyword("temperature", &["temperature", "temp"], "°F").with_unit_suffix(),
        FieldSpec::keyword("humidity", &["humidity"], "%"),
    ];

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn keyword_match_wins_over_suffix() {
        let table = FieldTable::compile(FIELDS).expect("table compiles");
        let reading = table
            .reading("temperature", "Low of 70°F, temperature now 85°F")
            .expect("field exists");
        assert_eq!(reading, Reading::Value(85.0));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn suffix_fallback_only_when_declared() {
        let table = FieldTable::compile(FIELDS).expect("table compiles");
        assert_eq!(
            table.reading("temperature", "Expect 88 °F this afternoon").expect("field exists"),
            Reading::Value(88.0)
        );
        assert_eq!(
            table.reading("humidity", "Expect 40% chance").expect("field exists"),
            Reading::Unavailable
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn unknown_field_is_an_error() {
        let table = FieldTable::compile(FIELDS).expect("table compiles");
        assert!(matches!(
            table.reading("pressure", "pressure 1013"),
            Err(ExtractError::UnknownField("pressure"))
        ));
    }
}
