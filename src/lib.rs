// src/lib.rs
//
// Calculatrice décimale exacte — racine de crate
// ----------------------------------------------
// But:
// - Noyau exact (NombreDecimal) : addition / soustraction / multiplication
//   chiffre à chiffre, sans arrondi, signe et échelle suivis exactement
// - Lecture flottante (÷, ^, trig, ln/log, √, !) : frontière d'imprécision
//   NOMMÉE, isolée dans noyau::flottant
// - Pupitre (app::etat::AppCalc) : machine à états des touches + historique
//
// IMPORTANT (structure projet):
// - Aucune vue ici : la couche graphique vit dans le crate hôte et ne
//   consomme que `AppCalc` (touches en entrée, texte en sortie).
// - Les valeurs NombreDecimal sont immuables : sûres à partager entre fils,
//   le pupitre lui-même suppose un appelant unique et séquentiel.

pub mod app;
pub mod noyau;

pub use app::{AppCalc, Touche};
pub use noyau::erreurs::{ErreurAnalyse, ErreurCalc, ErreurDomaine};
pub use noyau::flottant::ModeAngle;
pub use noyau::historique::Historique;
pub use noyau::nombre::NombreDecimal;
pub use noyau::operation::Operation;
