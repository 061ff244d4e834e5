//! Artifact coordinates and the fields patterns can constrain
//!
//! A coordinate is the five-field identity of a filterable entity:
//! `group:id:type[:classifier]:version`.
//!
//! # Examples
//!
//! ```
//! use artifact_filter::core::models::{Coordinate, Field};
//!
//! let c = Coordinate::parse("org.example:core:jar:sources:1.0").unwrap();
//! assert_eq!(c.get(Field::Classifier), Some("sources"));
//! assert_eq!(c.to_string(), "org.example:core:jar:sources:1.0");
//! ```

use crate::core::error::FilterError;

/// One positional field of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Group identifier
    Group,
    /// Artifact identifier
    Id,
    /// Packaging type (`jar`, `war`, ...)
    Type,
    /// Optional classifier (`sources`, `tests`, ...)
    Classifier,
    /// Base version (snapshot timestamps already folded back to `-SNAPSHOT`)
    BaseVersion,
}

impl Field {
    /// All fields in positional order
    pub const ALL: [Self; 5] = [Self::Group, Self::Id, Self::Type, Self::Classifier, Self::BaseVersion];

    const fn bit(self) -> u8 {
        match self {
            Self::Group => 1,
            Self::Id => 1 << 1,
            Self::Type => 1 << 2,
            Self::Classifier => 1 << 3,
            Self::BaseVersion => 1 << 4,
        }
    }

    /// Short name used in diagnostics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Id => "id",
            Self::Type => "type",
            Self::Classifier => "classifier",
            Self::BaseVersion => "version",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A set of fields a single token is bound to
///
/// Some raw tokens are ambiguous between adjacent fields, e.g. a lone third
/// token may mean type or classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a slice of fields
    #[must_use]
    pub const fn of(fields: &[Field]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < fields.len() {
            bits |= fields[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Return a copy of this set with `field` added
    #[must_use]
    pub const fn with(self, field: Field) -> Self {
        Self(self.0 | field.bit())
    }

    /// Check if the set contains a field
    #[must_use]
    pub const fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    /// Check if the set is exactly `{field}`
    #[must_use]
    pub const fn is_only(self, field: Field) -> bool {
        self.0 == field.bit()
    }

    /// Number of fields in the set
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the fields in positional order
    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl std::fmt::Display for FieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(Field::as_str).collect();
        write!(f, "{}", names.join("|"))
    }
}

/// The five-field identity a pattern is tested against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Group identifier
    pub group: Option<String>,
    /// Artifact identifier
    pub id: Option<String>,
    /// Packaging type
    pub kind: Option<String>,
    /// Classifier; absent is distinct from any present value
    pub classifier: Option<String>,
    /// Base version
    pub base_version: Option<String>,
}

impl Coordinate {
    /// Create a coordinate without a classifier
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        id: impl Into<String>,
        kind: impl Into<String>,
        base_version: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            id: Some(id.into()),
            kind: Some(kind.into()),
            classifier: None,
            base_version: Some(base_version.into()),
        }
    }

    /// Set the classifier; an empty string means no classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = (!classifier.is_empty()).then_some(classifier);
        self
    }

    /// Parse `group:id:type:version` or `group:id:type:classifier:version`
    ///
    /// This is the textual form of ancestry entries and of the display id.
    /// Anything other than four or five segments is rejected.
    pub fn parse(s: &str) -> Result<Self, FilterError> {
        let segments: Vec<&str> = s.split(':').collect();
        match segments.as_slice() {
            [group, id, kind, version] => Ok(Self::new(*group, *id, *kind, *version)),
            [group, id, kind, classifier, version] => {
                Ok(Self::new(*group, *id, *kind, *version).with_classifier(*classifier))
            },
            _ => Err(FilterError::InvalidCoordinate(s.to_string())),
        }
    }

    /// Get the value of a field, `None` when absent
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Group => self.group.as_deref(),
            Field::Id => self.id.as_deref(),
            Field::Type => self.kind.as_deref(),
            Field::Classifier => self.classifier.as_deref(),
            Field::BaseVersion => self.base_version.as_deref(),
        }
    }

    /// Check if a classifier is present
    #[must_use]
    pub const fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Display identifier used in reports: `group:id:type[:classifier]:version`
    #[must_use]
    pub fn display_id(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let part = |v: &Option<String>| v.clone().unwrap_or_default();
        write!(f, "{}:{}:{}", part(&self.group), part(&self.id), part(&self.kind))?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", part(&self.base_version))
    }
}

impl std::str::FromStr for Coordinate {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
