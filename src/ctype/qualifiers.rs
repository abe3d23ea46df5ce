use std::fmt;

use serde::Serialize;

/// The closed set of type modifiers tracked per parsed type.
///
/// `short`, `long` and `long_long` are not mutually exclusive here: the
/// parser records whatever it consumed and alias synthesis picks by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Qualifiers {
    pub unsigned: bool,
    pub signed: bool,
    pub short: bool,
    pub long: bool,
    pub long_long: bool,
    #[serde(rename = "struct")]
    pub is_struct: bool,
}

impl Qualifiers {
    /// Names of the set flags, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.unsigned, "unsigned"),
            (self.signed, "signed"),
            (self.short, "short"),
            (self.long, "long"),
            (self.long_long, "long_long"),
            (self.is_struct, "struct"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Qualifiers::default()
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", self.names().join(", "))
    }
}
