// src/app.rs
//
// Calculatrice décimale — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer le sous-module etat.rs (machine à états du pupitre)
// - Ré-exporter AppCalc + Touche (pour l'hôte: use calculatrice_decimale::app::AppCalc;)
//
// Important:
// - Aucune vue ici : le rendu (boutons, thème, animations) appartient au
//   crate hôte. Le pupitre ne connaît que des touches discrètes.

pub mod etat;

// Ré-export pratique : `use calculatrice_decimale::app::{AppCalc, Touche};`
pub use etat::{AppCalc, Touche};
