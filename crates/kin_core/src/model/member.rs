//! Household member identity.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// One identity from the fixed household roster.
///
/// Ordering follows roster position, not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Member {
    position: usize,
    name: &'static str,
}

impl Member {
    pub(crate) const fn new(position: usize, name: &'static str) -> Self {
        Self { position, name }
    }

    /// Display name as listed in the roster.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Zero-based position in the roster.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
