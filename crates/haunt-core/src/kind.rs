//! Ghost kinds.
//!
//! Each kind maps to exactly one chase heuristic and one scatter corner.  The
//! mapping itself lives in `haunt-behavior`; this crate only names the kinds
//! so that every layer can refer to them.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The four ghost personalities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GhostKind {
    /// Heads straight for the pursued agent.
    Chaser,
    /// Aims a few tiles ahead of the pursued agent's facing.
    Ambusher,
    /// Reflects a peer ghost through a point ahead of the pursued agent.
    Flanker,
    /// Chases from afar, retreats to its corner when close.
    Shy,
}

impl GhostKind {
    pub const ALL: [GhostKind; 4] = [
        GhostKind::Chaser,
        GhostKind::Ambusher,
        GhostKind::Flanker,
        GhostKind::Shy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GhostKind::Chaser   => "chaser",
            GhostKind::Ambusher => "ambusher",
            GhostKind::Flanker  => "flanker",
            GhostKind::Shy      => "shy",
        }
    }
}

impl fmt::Display for GhostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GhostKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chaser"   => Ok(GhostKind::Chaser),
            "ambusher" => Ok(GhostKind::Ambusher),
            "flanker"  => Ok(GhostKind::Flanker),
            "shy"      => Ok(GhostKind::Shy),
            _          => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}
