//! The formatted output of one citation request.

use super::SourceType;
use serde::{Deserialize, Serialize};

/// A reference entry paired with its in-text marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source type the citation was produced for
    pub source_type: SourceType,

    /// Full reference list entry, always ending in a single period
    pub reference: String,

    /// Parenthetical in-text form, `(n.d.)` when nothing is known
    pub intext: String,
}

impl Citation {
    /// Create a citation from its parts
    pub fn new(source_type: SourceType, reference: String, intext: String) -> Self {
        Self {
            source_type,
            reference,
            intext,
        }
    }
}
