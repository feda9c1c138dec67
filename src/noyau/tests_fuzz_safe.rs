//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau et le pupitre sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (chiffres, échelle, longueur des séquences de touches)
//! - budget temps global
//! - invariants clés : canonicité du zéro, lois d'échelle, antisymétrie de
//!   comparer, affichage jamais vide, historique plafonné

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::app::{AppCalc, Touche};
use crate::noyau::nombre::NombreDecimal;
use crate::noyau::operation::Operation;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Texte décimal valide : signe optionnel, 1..=12 chiffres entiers,
/// 0..=6 chiffres fractionnaires.
fn gen_decimal(rng: &mut Rng) -> String {
    let mut s = String::new();
    if rng.coin() {
        s.push('-');
    }

    let entiers = 1 + rng.pick(12) as usize;
    for _ in 0..entiers {
        s.push(char::from(b'0' + rng.pick(10) as u8));
    }

    let fractions = rng.pick(7) as usize;
    if fractions > 0 {
        s.push('.');
        for _ in 0..fractions {
            s.push(char::from(b'0' + rng.pick(10) as u8));
        }
    }
    s
}

fn gen_nombre(rng: &mut Rng) -> NombreDecimal {
    let s = gen_decimal(rng);
    s.parse()
        .unwrap_or_else(|e| panic!("texte généré invalide {s:?}: {e}"))
}

fn gen_touche(rng: &mut Rng) -> Touche {
    use Operation::*;
    const OPS: [Operation; 13] = [
        Addition,
        Soustraction,
        Multiplication,
        Division,
        Puissance,
        Racine,
        Pourcent,
        Sin,
        Cos,
        Tan,
        Ln,
        Log,
        Factorielle,
    ];

    match rng.pick(10) {
        0..=3 => Touche::Chiffre(rng.pick(10) as u8),
        4 => Touche::Point,
        5 | 6 => Touche::Operation(OPS[rng.pick(OPS.len() as u32) as usize]),
        7 => Touche::Egal,
        8 => match rng.pick(3) {
            0 => Touche::Retour,
            1 => Touche::Signe,
            _ => Touche::BasculeAngle,
        },
        _ => {
            if rng.pick(8) == 0 {
                Touche::Effacer
            } else {
                Touche::Egal
            }
        }
    }
}

/* ------------------------ Invariants noyau ------------------------ */

#[test]
fn fuzz_safe_invariants_du_noyau() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let a = gen_nombre(&mut rng);
        let b = gen_nombre(&mut rng);

        // commutativité structurelle (mêmes échelles de part et d'autre)
        assert_eq!(a.ajouter(&b), b.ajouter(&a));
        assert_eq!(a.multiplier(&b), b.multiplier(&a));

        // lois d'échelle
        assert_eq!(a.ajouter(&b).echelle(), a.echelle().max(b.echelle()));
        assert_eq!(a.multiplier(&b).echelle(), a.echelle() + b.echelle());

        // inverse additif + canonicité du zéro
        let reste = a.soustraire(&a);
        assert!(reste.est_zero());
        assert!(!reste.est_negatif());
        assert_eq!(reste.to_string(), "0");

        // antisymétrie de comparer + retour de valeur après aller-retour
        assert_eq!(a.comparer(&b), b.comparer(&a).reverse());
        assert_eq!(a.ajouter(&b).soustraire(&b).comparer(&a), Ordering::Equal);

        // signe du produit : XOR, sauf zéro (jamais signé)
        let produit = a.multiplier(&b);
        if produit.est_zero() {
            assert!(!produit.est_negatif());
        } else {
            assert_eq!(produit.est_negatif(), a.est_negatif() != b.est_negatif());
        }
    }
}

#[test]
fn fuzz_safe_rendu_point_fixe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let n = gen_nombre(&mut rng);
        let rendu = n.to_string();

        // re-analyser le rendu redonne la même VALEUR, et le rendu est un
        // point fixe (le premier passage a déjà tout canonisé)
        let relu: NombreDecimal = rendu
            .parse()
            .unwrap_or_else(|e| panic!("rendu non ré-analysable {rendu:?}: {e}"));
        assert_eq!(
            relu.comparer(&n),
            Ordering::Equal,
            "valeur changée: {rendu:?}"
        );
        assert_eq!(relu.to_string(), rendu, "rendu non stable: {rendu:?}");
    }
}

/* ------------------------ Invariants pupitre ------------------------ */

#[test]
fn fuzz_safe_pupitre_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(600);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..40 {
        budget(t0, max);

        let mut calc = AppCalc::nouveau();
        for _ in 0..120 {
            calc.toucher(gen_touche(&mut rng));

            // l'affichage est toujours un texte non vide
            assert!(!calc.affichage().is_empty());
            // l'historique reste plafonné
            assert!(calc.historique().longueur() <= 50);
        }
    }
}

#[test]
fn fuzz_safe_pupitre_deterministe() {
    // Même seed => même séquence de touches => même transcription.
    let transcrire = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let mut calc = AppCalc::nouveau();
        let mut sorties = Vec::new();
        for _ in 0..200 {
            calc.toucher(gen_touche(&mut rng));
            sorties.push(calc.affichage());
        }
        sorties
    };

    assert_eq!(transcrire(0xD15EA5E_u64), transcrire(0xD15EA5E_u64));
}
