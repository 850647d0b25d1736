use rand::Rng as _;
use serde::{Deserialize, Serialize};

/// Local player identity. Created on first launch and reused for every
/// later submission so the leaderboard can group scores by player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
}

impl Profile {
    /// Generates a fresh profile with a random identifier and a default
    /// display name derived from it.
    pub fn generate() -> Self {
        const ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
        const ID_LEN: usize = 20;

        let mut rng = rand::rng();
        let user_id: String = (0..ID_LEN)
            .map(|_| char::from(ID_CHARS[rng.random_range(0..ID_CHARS.len())]))
            .collect();
        let display_name = format!("Player {}", &user_id[..6]);
        Self {
            user_id,
            display_name,
        }
    }
}
