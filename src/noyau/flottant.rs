// src/noyau/flottant.rs
//
// Lecture flottante : la frontière d'imprécision NOMMÉE du noyau
// --------------------------------------------------------------
// Tout ce qui n'est pas exact passe ici : ÷ ^ sin cos tan ln log √ !.
// Contrat :
// - NombreDecimal -> f64 (ToPrimitive) puis f64 -> NombreDecimal
//   (FromPrimitive), l'aller-retour passant par le rendu canonique ;
// - toute conversion impossible (NaN, ±inf, dépassement) => ErreurDomaine,
//   jamais de panique ni de sentinelle dans le type numérique ;
// - le noyau exact (add/sub/mul/%) ne passe JAMAIS par ici.

use std::f64::consts::PI;

use num_traits::{FromPrimitive, ToPrimitive};

use super::erreurs::ErreurDomaine;
use super::nombre::NombreDecimal;

/// Mode d'interprétation des angles pour sin/cos/tan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    fn en_radians(self, valeur: f64) -> f64 {
        match self {
            ModeAngle::Degres => valeur * PI / 180.0,
            ModeAngle::Radians => valeur,
        }
    }
}

/* ------------------------ Aller-retour f64 ------------------------ */

fn vers_f64(n: &NombreDecimal) -> Result<f64, ErreurDomaine> {
    n.to_f64().ok_or(ErreurDomaine::ConversionImpossible)
}

fn depuis_f64(x: f64) -> Result<NombreDecimal, ErreurDomaine> {
    NombreDecimal::from_f64(x).ok_or(ErreurDomaine::ConversionImpossible)
}

/* ------------------------ Opérations inexactes ------------------------ */

/// Division flottante. Le zéro du diviseur est testé EXACTEMENT (sur le
/// nombre, pas sur sa lecture f64).
pub fn diviser(
    dividende: &NombreDecimal,
    diviseur: &NombreDecimal,
) -> Result<NombreDecimal, ErreurDomaine> {
    if diviseur.est_zero() {
        return Err(ErreurDomaine::DivisionParZero);
    }
    depuis_f64(vers_f64(dividende)? / vers_f64(diviseur)?)
}

pub fn puissance(
    base: &NombreDecimal,
    exposant: &NombreDecimal,
) -> Result<NombreDecimal, ErreurDomaine> {
    depuis_f64(vers_f64(base)?.powf(vers_f64(exposant)?))
}

pub fn sinus(n: &NombreDecimal, mode: ModeAngle) -> Result<NombreDecimal, ErreurDomaine> {
    depuis_f64(mode.en_radians(vers_f64(n)?).sin())
}

pub fn cosinus(n: &NombreDecimal, mode: ModeAngle) -> Result<NombreDecimal, ErreurDomaine> {
    depuis_f64(mode.en_radians(vers_f64(n)?).cos())
}

pub fn tangente(n: &NombreDecimal, mode: ModeAngle) -> Result<NombreDecimal, ErreurDomaine> {
    depuis_f64(mode.en_radians(vers_f64(n)?).tan())
}

/// Logarithme naturel ; exige un argument STRICTEMENT positif (test exact).
pub fn log_naturel(n: &NombreDecimal) -> Result<NombreDecimal, ErreurDomaine> {
    if n.est_zero() || n.est_negatif() {
        return Err(ErreurDomaine::LogarithmeNonPositif);
    }
    depuis_f64(vers_f64(n)?.ln())
}

/// Logarithme décimal ; exige un argument STRICTEMENT positif (test exact).
pub fn log_decimal(n: &NombreDecimal) -> Result<NombreDecimal, ErreurDomaine> {
    if n.est_zero() || n.est_negatif() {
        return Err(ErreurDomaine::LogarithmeNonPositif);
    }
    depuis_f64(vers_f64(n)?.log10())
}

/// Racine carrée ; un argument négatif est refusé (√0 = 0 reste permis).
pub fn racine(n: &NombreDecimal) -> Result<NombreDecimal, ErreurDomaine> {
    if n.est_negatif() {
        return Err(ErreurDomaine::RacineNegative);
    }
    depuis_f64(vers_f64(n)?.sqrt())
}

/// Factorielle ; argument ENTIER dans 0..=170 (170! est la dernière
/// factorielle représentable en f64 avant dépassement).
pub fn factorielle(n: &NombreDecimal) -> Result<NombreDecimal, ErreurDomaine> {
    let k = n.to_i64().ok_or(ErreurDomaine::FactorielleHorsDomaine)?;
    if !(0..=170).contains(&k) {
        return Err(ErreurDomaine::FactorielleHorsDomaine);
    }

    let mut produit = 1.0f64;
    for i in 2..=k {
        produit *= i as f64;
    }
    depuis_f64(produit)
}
