// src/noyau/historique.rs
//
// Journal borné des calculs commis, le plus récent d'abord.
// Insertion en tête ; au-delà de la capacité, la plus ancienne entrée sort.

use std::collections::VecDeque;

/// Garde-fou : nombre maximal d'entrées conservées.
const CAPACITE: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<String>,
}

impl Historique {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /// Consigne une entrée en tête ; évince la plus ancienne si plein.
    pub fn consigner(&mut self, entree: String) {
        self.entrees.push_front(entree);
        while self.entrees.len() > CAPACITE {
            self.entrees.pop_back();
        }
    }

    /// Entrées du plus récent au plus ancien.
    pub fn entrees(&self) -> impl Iterator<Item = &str> {
        self.entrees.iter().map(String::as_str)
    }

    /// Entrée la plus récente, s'il y en a une.
    pub fn derniere(&self) -> Option<&str> {
        self.entrees.front().map(String::as_str)
    }

    pub fn longueur(&self) -> usize {
        self.entrees.len()
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }
}
