//! Noyau décimal exact
//!
//! Organisation interne :
//! - nombre.rs     : NombreDecimal (chiffres + signe + échelle) : parse,
//!                   format, comparer, add/sub/mul exacts, pour-cent
//! - flottant.rs   : lecture flottante (÷ ^ trig ln/log √ !), la frontière
//!                   d'imprécision, nommée et cantonnée
//! - operation.rs  : opérateurs du pupitre + symboles d'affichage
//! - historique.rs : journal borné des calculs commis
//! - erreurs.rs    : erreurs typées (analyse / domaine / enveloppe)

pub mod erreurs;
pub mod flottant;
pub mod historique;
pub mod nombre;
pub mod operation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{ErreurAnalyse, ErreurCalc, ErreurDomaine};
pub use nombre::NombreDecimal;
