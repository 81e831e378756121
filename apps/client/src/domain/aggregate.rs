//! Grouping of flat ownership lists into per-player views.

use std::collections::HashMap;

use crate::domain::view::SecretView;
use crate::protocol::snapshot::{OwnedCard, OwnedSecret, PlayerId};

/// Per-player material derived from a snapshot's flat card and secret
/// lists. Rebuilt from scratch on every pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnershipIndex {
    card_counts: HashMap<PlayerId, u32>,
    secrets: HashMap<PlayerId, Vec<SecretView>>,
}

impl OwnershipIndex {
    /// Group `cards` and `secrets` by their owning player. Entries without
    /// an owner are table stock and are skipped.
    pub fn build(cards: &[OwnedCard], secrets: &[OwnedSecret]) -> Self {
        let mut card_counts: HashMap<PlayerId, u32> = HashMap::new();
        for card in cards {
            if let Some(owner) = card.owner {
                *card_counts.entry(owner).or_insert(0) += 1;
            }
        }

        let mut secret_views: HashMap<PlayerId, Vec<SecretView>> = HashMap::new();
        for secret in secrets {
            if let Some(owner) = secret.owner {
                secret_views.entry(owner).or_default().push(SecretView {
                    id: secret.id,
                    revealed: secret.revealed,
                    name: secret.name.clone(),
                });
            }
        }

        Self {
            card_counts,
            secrets: secret_views,
        }
    }

    pub fn card_count(&self, player: PlayerId) -> u32 {
        self.card_counts.get(&player).copied().unwrap_or(0)
    }

    /// A player's secret slots in snapshot order; empty for unknown ids.
    pub fn secrets(&self, player: PlayerId) -> &[SecretView] {
        self.secrets.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }
}
