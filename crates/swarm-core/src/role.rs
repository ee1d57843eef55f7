//! Role tag shared by every kinematic agent.
//!
//! All roles share the same integration and wrap logic; they differ only in
//! which steering forces apply and whether the UI may drag them.

/// The part an agent plays in its scenario.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// Wandering, draggable agent that followers chase.
    Leader,
    /// Separates from other followers and seeks the nearest leader.
    Follower,
    /// Wandering, draggable agent whose heading users align with.
    Influencer,
    /// Aligns with nearby influencers and peers.
    User,
}

impl Role {
    /// Number of variants; sizes per-role lookup tables.
    pub const COUNT: usize = 4;

    pub const ALL: [Role; Role::COUNT] = [Role::Leader, Role::Follower, Role::Influencer, Role::User];

    /// Dense index for per-role tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Role::Leader     => 0,
            Role::Follower   => 1,
            Role::Influencer => 2,
            Role::User       => 3,
        }
    }

    /// `true` for roles the external UI may pin with the mouse.
    #[inline]
    pub fn is_draggable(self) -> bool {
        matches!(self, Role::Leader | Role::Influencer)
    }

    /// Human-readable label, used for CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Leader     => "leader",
            Role::Follower   => "follower",
            Role::Influencer => "influencer",
            Role::User       => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
