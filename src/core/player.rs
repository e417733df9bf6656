//! Player identity and the roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Seat numbers are 1-based to match the
//! physical table: the first player is `PlayerId(1)`.
//!
//! ## Roster
//!
//! The ordered player list for one game. Insertion order equals id order,
//! players are never removed, and `alive` only ever flips true -> false, so
//! the roster doubles as the end-of-game reveal.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Player identifier: seat number 1..=N, stable for the game lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat number (1-based).
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0
    }

    /// Iterate over all player IDs for a game with `count` players.
    ///
    /// ```
    /// use werewolf_host::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(6).collect();
    /// assert_eq!(ids.first(), Some(&PlayerId::new(1)));
    /// assert_eq!(ids.last(), Some(&PlayerId::new(6)));
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        debug_assert!(count <= 255, "At most 255 players supported");
        (1..=count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat number.
    pub id: PlayerId,
    /// Assigned role. `None` until role assignment.
    role: Option<Role>,
    /// Liveness flag. One-way: never flips back to true.
    alive: bool,
}

impl Player {
    fn new(id: PlayerId) -> Self {
        Self {
            id,
            role: None,
            alive: true,
        }
    }

    /// The player's role, if assigned.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Is this player still alive?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Does this player hold `role` and still live?
    #[must_use]
    pub fn is_living(&self, role: Role) -> bool {
        self.alive && self.role == Some(role)
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        debug_assert!(self.role.is_none(), "role is assigned exactly once");
        self.role = Some(role);
    }

    /// Mark the player dead. Elimination is monotonic; a second call on the
    /// same player is an engine bug.
    pub(crate) fn eliminate(&mut self) {
        debug_assert!(self.alive, "cannot eliminate a dead player");
        self.alive = false;
    }
}

/// The ordered player list for one game.
///
/// `Default` is the empty roster of the setup screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster of `count` unassigned, living players with seat
    /// numbers 1..=count.
    #[must_use]
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 player");
        assert!(count <= 255, "At most 255 players supported");

        Self {
            players: PlayerId::all(count).map(Player::new).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when the roster holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        let seat = id.seat() as usize;
        if seat == 0 || seat > self.players.len() {
            return None;
        }
        Some(&self.players[seat - 1])
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let seat = id.seat() as usize;
        if seat == 0 || seat > self.players.len() {
            return None;
        }
        Some(&mut self.players[seat - 1])
    }

    /// Iterate over all players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over living players in seat order.
    pub fn living(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// Does any living player hold `role`?
    #[must_use]
    pub fn has_living(&self, role: Role) -> bool {
        self.players.iter().any(|p| p.is_living(role))
    }

    /// Count living players holding `role`.
    #[must_use]
    pub fn living_count(&self, role: Role) -> usize {
        self.players.iter().filter(|p| p.is_living(role)).count()
    }

    /// Have all players been assigned a role?
    #[must_use]
    pub fn fully_assigned(&self) -> bool {
        self.players.iter().all(|p| p.role().is_some())
    }
}
