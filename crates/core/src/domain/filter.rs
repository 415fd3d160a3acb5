use crate::domain::customer::Customer;

/// The fixed set of customer attributes eligible for equality filtering.
///
/// Dispatch is a closed enumeration: unrecognized field names fail to parse
/// rather than degrading into an empty result set, so callers can tell
/// "no matches" apart from "invalid query".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Id,
    Name,
    City,
    State,
    Phone,
}

impl FilterField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "city" => Some(Self::City),
            "state" => Some(Self::State),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::Phone => "phone",
        }
    }

    /// Exact-equality predicate over the field this variant selects.
    pub fn matches(&self, record: &Customer, value: &str) -> bool {
        match self {
            Self::Id => record.id == value,
            Self::Name => record.name == value,
            Self::City => record.city == value,
            Self::State => record.state == value,
            Self::Phone => record.phone == value,
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
