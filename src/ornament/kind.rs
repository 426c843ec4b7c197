use serde::{Deserialize, Serialize};

/// Visual type of an ornament; fixes its batch, appearance and motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrnamentKind {
    Ball,
    Gift,
    Light,
    Bell,
    Star,
    Candy,
    Snowflake,
    Wreath,
}

impl OrnamentKind {
    pub const COUNT: usize = 8;

    /// All kinds in batch order
    pub const ALL: [OrnamentKind; Self::COUNT] = [
        OrnamentKind::Ball,
        OrnamentKind::Gift,
        OrnamentKind::Light,
        OrnamentKind::Bell,
        OrnamentKind::Star,
        OrnamentKind::Candy,
        OrnamentKind::Snowflake,
        OrnamentKind::Wreath,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pick a kind from a uniform sample in [0, 1) using equal-width buckets
    pub fn from_unit(u: f32) -> Self {
        let bucket = (u * Self::COUNT as f32).floor();
        let bucket = (bucket.max(0.0) as usize).min(Self::COUNT - 1);
        Self::ALL[bucket]
    }

    pub fn name(self) -> &'static str {
        match self {
            OrnamentKind::Ball => "ball",
            OrnamentKind::Gift => "gift",
            OrnamentKind::Light => "light",
            OrnamentKind::Bell => "bell",
            OrnamentKind::Star => "star",
            OrnamentKind::Candy => "candy",
            OrnamentKind::Snowflake => "snowflake",
            OrnamentKind::Wreath => "wreath",
        }
    }
}

impl std::fmt::Display for OrnamentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
