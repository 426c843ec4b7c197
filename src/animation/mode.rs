use serde::{Deserialize, Serialize};

/// Which layout the ornaments are heading for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Assembled on the tree spiral
    Formed,
    /// Scattered over the surrounding shell
    #[default]
    Chaos,
}

impl Mode {
    pub fn from_formed(formed: bool) -> Self {
        if formed { Mode::Formed } else { Mode::Chaos }
    }

    pub fn is_formed(self) -> bool {
        self == Mode::Formed
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Formed => Mode::Chaos,
            Mode::Chaos => Mode::Formed,
        }
    }
}
