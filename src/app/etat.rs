//! src/app/etat.rs
//!
//! État pupitre (sans vue ; le noyau n'est touché qu'au commit).
//!
//! Rôle : consommer les touches discrètes (chiffres, point, opérateurs, =,
//! C, ⌫, ±, bascule d'angle), maintenir l'expression en cours, la
//! sentinelle d'erreur et l'historique des calculs commis.
//!
//! Contrats (Loi de Clément, version pupitre) :
//! - Une touche = une transition déterministe, sans effet de bord caché.
//! - `operation` est présente SI ET SEULEMENT SI `operande_gauche` est non vide.
//! - Un calcul refusé laisse l'état récupérable (équivalent à un commit
//!   frais) : sentinelle affichée, jamais de panique, jamais d'état corrompu.

use log::{debug, warn};

use crate::noyau::erreurs::ErreurCalc;
use crate::noyau::flottant::{self, ModeAngle};
use crate::noyau::historique::Historique;
use crate::noyau::nombre::NombreDecimal;
use crate::noyau::operation::Operation;

/// Sentinelle affichée quand un calcul est refusé (÷0, domaine, conversion).
const AFFICHAGE_ERREUR: &str = "Erreur";

/// Une touche discrète du pupitre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Un chiffre 0..=9.
    Chiffre(u8),
    /// Le point décimal.
    Point,
    /// Un opérateur (binaire ou unaire immédiat).
    Operation(Operation),
    /// `=` : commet l'opération en attente.
    Egal,
    /// `C` : remise à zéro de la saisie (l'historique et le mode survivent).
    Effacer,
    /// `⌫` : efface le dernier caractère saisi.
    Retour,
    /// `±` : bascule le signe de l'opérande courant.
    Signe,
    /// Bascule degrés ↔ radians pour la trig.
    BasculeAngle,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- saisie en cours ---
    operande_courant: String,
    operande_gauche: String,
    operation: Option<Operation>,
    raz_prochaine_saisie: bool,

    // --- sorties ---
    erreur: Option<String>, // sentinelle affichée jusqu'à la touche suivante
    historique: Historique,

    // --- paramètres ---
    mode_angle: ModeAngle,
}

impl AppCalc {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /* ------------------------ Entrée événementielle ------------------------ */

    /// Consomme une touche. Chaque touche est traitée entièrement avant la
    /// suivante (appelant unique, séquentiel).
    pub fn toucher(&mut self, touche: Touche) {
        // La sentinelle ne survit pas à la touche suivante.
        self.erreur = None;

        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Point => self.saisir_point(),
            Touche::Operation(op) => self.appliquer_operation(op),
            Touche::Egal => self.commettre(),
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour(),
            Touche::Signe => self.basculer_signe(),
            Touche::BasculeAngle => self.mode_angle = self.mode_angle.bascule(),
        }
    }

    /* ------------------------ Lectures ------------------------ */

    /// Texte affiché : sentinelle, expression vivante
    /// (`gauche symbole courant`) ou opérande courant (`"0"` si vide).
    pub fn affichage(&self) -> String {
        if let Some(e) = &self.erreur {
            return e.clone();
        }
        if let Some(op) = self.operation {
            // invariant : operande_gauche non vide ici
            return format!(
                "{} {} {}",
                self.operande_gauche,
                op.symbole(),
                self.operande_courant
            );
        }
        if self.operande_courant.is_empty() {
            "0".to_string()
        } else {
            self.operande_courant.clone()
        }
    }

    /// Journal des calculs commis, le plus récent d'abord (≤ 50 entrées).
    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    /* ------------------------ Saisie ------------------------ */

    fn saisir_chiffre(&mut self, chiffre: u8) {
        if chiffre > 9 {
            return; // garde-fou : le pupitre n'émet que 0..=9
        }
        if self.raz_prochaine_saisie {
            self.operande_courant.clear();
            self.raz_prochaine_saisie = false;
        }
        // le zéro de tête est REMPLACÉ par le premier chiffre utile
        if self.operande_courant == "0" {
            self.operande_courant.clear();
        }
        self.operande_courant.push(char::from(b'0' + chiffre));
    }

    fn saisir_point(&mut self) {
        if self.raz_prochaine_saisie {
            self.operande_courant.clear();
            self.raz_prochaine_saisie = false;
        }
        // un seul point par opérande ; "0" + "." donne bien "0."
        if !self.operande_courant.contains('.') {
            self.operande_courant.push('.');
        }
    }

    /// `⌫` : sans effet juste après un commit ; un opérande réduit à rien
    /// (ou à un `-` nu) retombe sur `"0"`.
    fn retour(&mut self) {
        if self.raz_prochaine_saisie || self.operande_courant.is_empty() {
            return;
        }
        self.operande_courant.pop();
        if self.operande_courant.is_empty() || self.operande_courant == "-" {
            self.operande_courant = "0".to_string();
        }
    }

    /// `±` : depuis vide ou `"0"`, pose un `-` nu (pour taper un négatif de
    /// zéro) ; un `-` nu revient à `"0"` ; sinon bascule le `-` de tête.
    fn basculer_signe(&mut self) {
        if self.operande_courant.is_empty() || self.operande_courant == "0" {
            self.operande_courant = "-".to_string();
        } else if self.operande_courant == "-" {
            self.operande_courant = "0".to_string();
        } else if let Some(reste) = self.operande_courant.strip_prefix('-') {
            self.operande_courant = reste.to_string();
        } else {
            self.operande_courant.insert(0, '-');
        }
    }

    /// `C` : remise à zéro de la saisie et de la sentinelle.
    /// L'historique et le mode d'angle survivent.
    fn effacer(&mut self) {
        self.operande_courant.clear();
        self.operande_gauche.clear();
        self.operation = None;
        self.raz_prochaine_saisie = false;
        self.erreur = None;
    }

    /* ------------------------ Opérateurs & commit ------------------------ */

    /// Pose un opérateur. En cas de chaînage (`3 + 4 ×`), l'opération en
    /// attente est commise d'abord et son résultat devient l'opérande gauche.
    /// Sans aucun opérande disponible, la touche est ignorée : l'invariant
    /// « opération ⇔ opérande gauche » tient toujours.
    fn appliquer_operation(&mut self, op: Operation) {
        if !self.operande_courant.is_empty() {
            if self.operation.is_some() {
                self.commettre();
                if self.erreur.is_some() {
                    return;
                }
            }
            self.operande_gauche = std::mem::take(&mut self.operande_courant);
        }

        if self.operande_gauche.is_empty() {
            return;
        }

        self.operation = Some(op);
        self.raz_prochaine_saisie = false;

        // unaire immédiat : « poser l'opérateur puis commettre aussitôt »
        if op.est_unaire() {
            self.commettre();
        }
    }

    /// `=` : résout l'opération en attente (sans opérande gauche : aucun
    /// effet). L'opérande droit manquant vaut zéro canonique.
    fn commettre(&mut self) {
        if self.operande_gauche.is_empty() {
            return;
        }
        let Some(op) = self.operation else { return };

        match self.calculer(op) {
            Ok(resultat) => {
                let rendu = resultat.to_string();
                let entree = if op.est_unaire() {
                    format!("{} {} = {rendu}", self.operande_gauche, op.symbole())
                } else {
                    let droite = if self.operande_courant.is_empty() {
                        "0"
                    } else {
                        self.operande_courant.as_str()
                    };
                    format!(
                        "{} {} {droite} = {rendu}",
                        self.operande_gauche,
                        op.symbole()
                    )
                };
                debug!("commis: {entree}");
                self.historique.consigner(entree);

                self.operande_courant = rendu;
                self.operande_gauche.clear();
                self.operation = None;
                self.raz_prochaine_saisie = true;
            }
            Err(e) => {
                warn!(
                    "calcul refusé ({} {}): {e}",
                    self.operande_gauche,
                    op.symbole()
                );
                self.erreur = Some(AFFICHAGE_ERREUR.to_string());
                self.operande_courant.clear();
                self.operande_gauche.clear();
                self.operation = None;
                self.raz_prochaine_saisie = true;
            }
        }
    }

    /// LE site de dispatch : exact ou lecture flottante, au même endroit.
    fn calculer(&self, op: Operation) -> Result<NombreDecimal, ErreurCalc> {
        let gauche: NombreDecimal = self.operande_gauche.parse()?;
        let droite: NombreDecimal = if self.operande_courant.is_empty() {
            NombreDecimal::zero()
        } else {
            self.operande_courant.parse()?
        };

        use Operation::*;
        let resultat = match op {
            // noyau exact : total, jamais d'échec
            Addition => &gauche + &droite,
            Soustraction => &gauche - &droite,
            Multiplication => &gauche * &droite,
            Pourcent => gauche.pourcentage(),

            // lecture flottante : domaine vérifié, imprécision assumée
            Division => flottant::diviser(&gauche, &droite)?,
            Puissance => flottant::puissance(&gauche, &droite)?,
            Racine => flottant::racine(&gauche)?,
            Sin => flottant::sinus(&gauche, self.mode_angle)?,
            Cos => flottant::cosinus(&gauche, self.mode_angle)?,
            Tan => flottant::tangente(&gauche, self.mode_angle)?,
            Ln => flottant::log_naturel(&gauche)?,
            Log => flottant::log_decimal(&gauche)?,
            Factorielle => flottant::factorielle(&gauche)?,
        };
        Ok(resultat)
    }
}
