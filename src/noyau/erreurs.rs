// src/noyau/erreurs.rs
//
// Erreurs typées du noyau :
// - ErreurAnalyse  : texte numérique mal formé (parse)
// - ErreurDomaine  : opération hors domaine (÷0, factorielle, log, √, conversion)
// - ErreurCalc     : enveloppe unique pour le site de commit du pupitre
//
// Les opérations exactes (add/sub/mul) sont totales : elles n'ont pas d'erreur.

use thiserror::Error;

/// Texte numérique mal formé.
///
/// Le nettoyage (signe de tête optionnel + premier point décimal) est fait
/// en amont : tout caractère restant qui n'est pas un chiffre échoue ici.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurAnalyse {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),
}

/// Opération refusée par son domaine (ou par la frontière flottante).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurDomaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("factorielle : argument entier dans 0..=170 attendu")]
    FactorielleHorsDomaine,

    #[error("logarithme d'un argument non strictement positif")]
    LogarithmeNonPositif,

    #[error("racine carrée d'un argument négatif")]
    RacineNegative,

    /// Aller-retour f64 impossible (NaN, ±inf) : la lecture flottante refuse.
    #[error("conversion flottante impossible")]
    ConversionImpossible,
}

/// Enveloppe pour le site de commit : une seule voie d'échec côté pupitre.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error(transparent)]
    Analyse(#[from] ErreurAnalyse),

    #[error(transparent)]
    Domaine(#[from] ErreurDomaine),
}
