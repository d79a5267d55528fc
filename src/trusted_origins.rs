use crate::constants::MAX_ORIGIN_LENGTH;
use indexmap::IndexSet;

/// Exact origins allowed to send cross-site mutating requests.
///
/// Entries keep their configured order and duplicates collapse to the first
/// occurrence. There is no way to add or remove entries after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct TrustedOrigins {
    origins: IndexSet<String>,
}

impl TrustedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, origin: &str) -> bool {
        if origin.is_empty() || origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }
        self.origins.contains(origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TrustedOrigins {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "trusted_origins_test.rs"]
mod trusted_origins_test;
