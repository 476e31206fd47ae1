use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier as used by the territory map and ownership records.
///
/// `0` is gaia (unowned territory), `-1` means "no owner at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

impl PlayerId {
    pub const GAIA: PlayerId = PlayerId(0);
    pub const INVALID: PlayerId = PlayerId(-1);

    /// Index into per-player arrays, `None` for `INVALID` and other negative ids.
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    pub fn is_gaia(self) -> bool {
        self == Self::GAIA
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        PlayerId(index as i32)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INVALID => f.write_str("invalid"),
            Self::GAIA => f.write_str("gaia"),
            PlayerId(id) => write!(f, "player {id}"),
        }
    }
}
