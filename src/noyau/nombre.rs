// src/noyau/nombre.rs
//
// NombreDecimal : décimal signé en précision arbitraire
// -----------------------------------------------------
// Représentation : chiffres base 10 POIDS FAIBLE D'ABORD (Vec<u8>),
// signe, échelle (= nombre de chiffres après la virgule).
// Valeur = (negatif ? -1 : 1) * (chiffres lus en base 10) * 10^(-echelle)
//
// Invariants :
// - `chiffres` jamais vide
// - pas de zéro de poids fort, sauf zéro canonique : chiffres == [0], negatif == false
// - sémantique de VALEUR : chaque opération rend une nouvelle instance
//
// Exact ici : parse, format, comparer, ajouter, soustraire, multiplier, pourcentage.
// Tout l'inexact (÷, ^, trig, logs, √, !) vit dans flottant.rs.
//
// NOTE: l'égalité `==` est structurelle (chiffres + signe + échelle) : `1.5`
// et `1.50` sont des représentations distinctes d'une même valeur. La
// comparaison en VALEUR est `comparer` (totale, échelle alignée).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use super::erreurs::ErreurAnalyse;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NombreDecimal {
    chiffres: Vec<u8>, // poids faible d'abord
    negatif: bool,
    echelle: usize, // chiffres après la virgule
}

impl NombreDecimal {
    /// Zéro canonique : un seul chiffre `0`, jamais négatif, échelle 0.
    pub fn zero() -> Self {
        NombreDecimal {
            chiffres: vec![0],
            negatif: false,
            echelle: 0,
        }
    }

    /// Nombre de chiffres après la virgule.
    pub fn echelle(&self) -> usize {
        self.echelle
    }

    pub fn est_zero(&self) -> bool {
        self.chiffres == [0]
    }

    pub fn est_negatif(&self) -> bool {
        self.negatif
    }

    /// Constructeur interne : rétablit les invariants.
    /// - retire les zéros de poids fort (jusqu'à un unique `0`)
    /// - un zéro n'est jamais négatif
    fn canonique(mut chiffres: Vec<u8>, negatif: bool, echelle: usize) -> Self {
        while chiffres.len() > 1 && chiffres.last() == Some(&0) {
            chiffres.pop();
        }
        if chiffres.is_empty() {
            chiffres.push(0);
        }
        let zero = chiffres == [0];
        NombreDecimal {
            chiffres,
            negatif: negatif && !zero,
            echelle,
        }
    }

    /// Même grandeur, signe opposé (un zéro reste non signé).
    pub fn negation(&self) -> Self {
        Self::canonique(self.chiffres.clone(), !self.negatif, self.echelle)
    }

    /// Bascule BRUTE du signe, sans canonisation : réservée aux réductions
    /// a+b == a-(-b) et a-b == a+(-b). Avec un zéro canonisé (jamais
    /// négatif), ces réductions boucleraient l'une sur l'autre.
    fn signe_oppose(&self) -> Self {
        NombreDecimal {
            chiffres: self.chiffres.clone(),
            negatif: !self.negatif,
            echelle: self.echelle,
        }
    }

    /* ------------------------ Arithmétique exacte ------------------------ */

    /// Addition exacte (totale).
    pub fn ajouter(&self, autre: &Self) -> Self {
        if self.negatif != autre.negatif {
            // a + b == a - (-b)
            return self.soustraire(&autre.signe_oppose());
        }

        let (ca, cb, echelle) = aligner(self, autre);
        let longueur = ca.len().max(cb.len());
        let mut somme = Vec::with_capacity(longueur + 1);
        let mut retenue = 0u8;

        for i in 0..longueur {
            let a = ca.get(i).copied().unwrap_or(0);
            let b = cb.get(i).copied().unwrap_or(0);
            let total = a + b + retenue;
            somme.push(total % 10);
            retenue = total / 10;
        }
        if retenue > 0 {
            somme.push(retenue);
        }

        Self::canonique(somme, self.negatif, echelle)
    }

    /// Soustraction exacte (totale).
    pub fn soustraire(&self, autre: &Self) -> Self {
        if self.negatif != autre.negatif {
            // a - b == a + (-b)
            return self.ajouter(&autre.signe_oppose());
        }

        let (mut ca, mut cb, echelle) = aligner(self, autre);

        // On soustrait toujours la plus petite grandeur de la plus grande :
        // échange au besoin, et le signe du résultat bascule.
        let mut negatif = self.negatif;
        if comparer_grandeurs(&ca, &cb) == Ordering::Less {
            std::mem::swap(&mut ca, &mut cb);
            negatif = !self.negatif;
        }

        let mut reste = Vec::with_capacity(ca.len());
        let mut emprunt = 0i8;
        for i in 0..ca.len() {
            let a = ca[i] as i8;
            let b = cb.get(i).copied().unwrap_or(0) as i8;
            let mut diff = a - b - emprunt;
            if diff < 0 {
                diff += 10;
                emprunt = 1;
            } else {
                emprunt = 0;
            }
            reste.push(diff as u8);
        }

        Self::canonique(reste, negatif, echelle)
    }

    /// Multiplication exacte (totale). Les échelles s'ADDITIONNENT
    /// (pas d'alignement ici), le signe est le XOR des signes.
    pub fn multiplier(&self, autre: &Self) -> Self {
        let mut produit = vec![0u32; self.chiffres.len() + autre.chiffres.len()];

        for (i, &a) in self.chiffres.iter().enumerate() {
            let mut retenue = 0u32;
            for (j, &b) in autre.chiffres.iter().enumerate() {
                let total = u32::from(a) * u32::from(b) + produit[i + j] + retenue;
                produit[i + j] = total % 10;
                retenue = total / 10;
            }
            if retenue > 0 {
                produit[i + autre.chiffres.len()] += retenue;
            }
        }

        let chiffres = produit.into_iter().map(|d| d as u8).collect();
        Self::canonique(
            chiffres,
            self.negatif != autre.negatif,
            self.echelle + autre.echelle,
        )
    }

    /// Pour-cent EXACT : ×0.01 par simple décalage d'échelle (+2).
    pub fn pourcentage(&self) -> Self {
        Self::canonique(self.chiffres.clone(), self.negatif, self.echelle + 2)
    }

    /// Comparaison TOTALE en valeur : signe d'abord, puis grandeurs à
    /// échelle alignée. `comparer(1.5, 1.50) == Equal` alors que `==` les
    /// distingue ; c'est pourquoi `Ord` n'est PAS implémenté.
    pub fn comparer(&self, autre: &Self) -> Ordering {
        if self.negatif != autre.negatif {
            return if self.negatif {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        let (ca, cb, _) = aligner(self, autre);
        let ordre = comparer_grandeurs(&ca, &cb);
        if self.negatif {
            ordre.reverse()
        } else {
            ordre
        }
    }
}

/* ------------------------ Alignement / grandeurs ------------------------ */

/// Aligne les échelles : complète l'opérande la moins précise par des zéros
/// de POIDS FAIBLE jusqu'à l'échelle commune max(a, b).
fn aligner(a: &NombreDecimal, b: &NombreDecimal) -> (Vec<u8>, Vec<u8>, usize) {
    let echelle = a.echelle.max(b.echelle);

    let mut ca = vec![0u8; echelle - a.echelle];
    ca.extend_from_slice(&a.chiffres);

    let mut cb = vec![0u8; echelle - b.echelle];
    cb.extend_from_slice(&b.chiffres);

    (ca, cb, echelle)
}

/// Compare deux grandeurs d'échelle commune : longueur utile d'abord
/// (zéros de poids fort ignorés), puis chiffre à chiffre depuis le poids fort.
fn comparer_grandeurs(a: &[u8], b: &[u8]) -> Ordering {
    let la = longueur_utile(a);
    let lb = longueur_utile(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for i in (0..la).rev() {
        let ordre = a[i].cmp(&b[i]);
        if ordre != Ordering::Equal {
            return ordre;
        }
    }
    Ordering::Equal
}

fn longueur_utile(chiffres: &[u8]) -> usize {
    let mut l = chiffres.len();
    while l > 1 && chiffres[l - 1] == 0 {
        l -= 1;
    }
    l
}

/* ------------------------ Parse / Format ------------------------ */

impl FromStr for NombreDecimal {
    type Err = ErreurAnalyse;

    /// Analyse un texte décimal : blancs tolérés autour, signe `-` de tête
    /// optionnel, au plus un point. Tout autre caractère échoue.
    ///
    /// Une suite de chiffres VIDE après nettoyage (`""`, `"-"`, `"."`) vaut
    /// zéro canonique : ce sont des états de saisie vivants du pupitre.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut texte = s.trim();

        let negatif = texte.starts_with('-');
        if negatif {
            texte = &texte[1..];
        }

        let (entier, fraction) = match texte.split_once('.') {
            Some((e, f)) => (e, f),
            None => (texte, ""),
        };
        let echelle = fraction.len();

        let mut chiffres = Vec::with_capacity(entier.len() + fraction.len());
        for c in entier.chars().chain(fraction.chars()) {
            match c.to_digit(10) {
                Some(d) => chiffres.push(d as u8),
                None => return Err(ErreurAnalyse::CaractereInattendu(c)),
            }
        }
        chiffres.reverse(); // stockage poids faible d'abord

        Ok(Self::canonique(chiffres, negatif, echelle))
    }
}

impl fmt::Display for NombreDecimal {
    /// Rendu canonique : poids fort d'abord, point inséré `echelle` positions
    /// avant la fin (complété à gauche par des zéros si besoin : `0.05`),
    /// zéros fractionnaires de queue retirés, signe seulement si non nul.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut texte: String = self
            .chiffres
            .iter()
            .rev()
            .map(|d| char::from(b'0' + d))
            .collect();

        if self.echelle > 0 {
            while texte.len() <= self.echelle {
                texte.insert(0, '0');
            }
            texte.insert(texte.len() - self.echelle, '.');

            while texte.ends_with('0') {
                texte.pop();
            }
            if texte.ends_with('.') {
                texte.pop();
            }
        }

        if self.negatif && !self.est_zero() {
            write!(f, "-{texte}")
        } else {
            write!(f, "{texte}")
        }
    }
}

/* ------------------------ Opérateurs ------------------------ */

impl<'a, 'b> Add<&'b NombreDecimal> for &'a NombreDecimal {
    type Output = NombreDecimal;
    fn add(self, autre: &'b NombreDecimal) -> NombreDecimal {
        self.ajouter(autre)
    }
}

impl<'a, 'b> Sub<&'b NombreDecimal> for &'a NombreDecimal {
    type Output = NombreDecimal;
    fn sub(self, autre: &'b NombreDecimal) -> NombreDecimal {
        self.soustraire(autre)
    }
}

impl<'a, 'b> Mul<&'b NombreDecimal> for &'a NombreDecimal {
    type Output = NombreDecimal;
    fn mul(self, autre: &'b NombreDecimal) -> NombreDecimal {
        self.multiplier(autre)
    }
}

impl<'a> Neg for &'a NombreDecimal {
    type Output = NombreDecimal;
    fn neg(self) -> NombreDecimal {
        self.negation()
    }
}

impl Add for NombreDecimal {
    type Output = NombreDecimal;
    fn add(self, autre: NombreDecimal) -> NombreDecimal {
        self.ajouter(&autre)
    }
}

impl Sub for NombreDecimal {
    type Output = NombreDecimal;
    fn sub(self, autre: NombreDecimal) -> NombreDecimal {
        self.soustraire(&autre)
    }
}

impl Mul for NombreDecimal {
    type Output = NombreDecimal;
    fn mul(self, autre: NombreDecimal) -> NombreDecimal {
        self.multiplier(&autre)
    }
}

impl Neg for NombreDecimal {
    type Output = NombreDecimal;
    fn neg(self) -> NombreDecimal {
        self.negation()
    }
}

/* ------------------------ num-traits ------------------------ */

impl Zero for NombreDecimal {
    fn zero() -> Self {
        NombreDecimal::zero()
    }
    fn is_zero(&self) -> bool {
        self.est_zero()
    }
}

impl One for NombreDecimal {
    fn one() -> Self {
        NombreDecimal {
            chiffres: vec![1],
            negatif: false,
            echelle: 0,
        }
    }
}

impl ToPrimitive for NombreDecimal {
    // Passage par le rendu canonique : une partie fractionnaire non nulle
    // ou un dépassement rend None.
    fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_string().parse().ok()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_string()
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
    }
}

impl FromPrimitive for NombreDecimal {
    fn from_i64(n: i64) -> Option<Self> {
        n.to_string().parse().ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        n.to_string().parse().ok()
    }

    // `Display` d'un f64 fini est toujours en notation décimale pleine
    // (jamais d'exposant), donc ré-analysable tel quel.
    fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        x.to_string().parse().ok()
    }
}
