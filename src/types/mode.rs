use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Data-source selector for the analytics client.
///
/// Exactly one value is active per controller instance. `Live` routes data
/// fetching to the real backend; `Simulated` routes it to deterministic
/// substitute datasets shown to demo and trial users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Call real network endpoints.
    Live,
    /// Use deterministic substitute data.
    Simulated,
}

impl Mode {
    /// The persisted literal for this mode (`"live"` or `"simulated"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Simulated => "simulated",
        }
    }

    /// Whether this is [`Mode::Simulated`].
    pub fn is_simulated(&self) -> bool {
        matches!(self, Self::Simulated)
    }

    /// Lenient parse used when reading durable storage: an unrecognized
    /// literal is treated as absent rather than an error, so a corrupt
    /// preference can never wedge startup.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "live" => Some(Self::Live),
            "simulated" => Some(Self::Simulated),
            _ => None,
        }
    }
}

impl Default for Mode {
    /// Defaults toward real behavior, never toward showing fabricated data
    /// to a real user.
    fn default() -> Self {
        Self::Live
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Unrecognized values fall back to Live
        Ok(Mode::from_stored(&s).unwrap_or(Mode::Live))
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_stored(s).ok_or_else(|| format!("Unknown data-source mode: '{}'", s))
    }
}
