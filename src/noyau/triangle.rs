// src/noyau/triangle.rs
//
// Triangle rectangle : vérification + dérivations
// -----------------------------------------------
// - Pythagore : |oppose² + adjacent² − hypotenuse²| ≤ max(1e-9, hypotenuse²·1e-6)
//   Verdict consultatif : un écart est signalé, jamais bloquant (l'appelant
//   peut continuer à calculer les rapports avec les côtés fournis).
// - Dérivations : c = √(a²+b²) ; cathète = √(c²−b²) (pas de solution réelle si
//   c ≤ b) ; A = atan2(oppose, adjacent) en degrés, B = 90 − A.
// - Chaque dérivation rend sa “démarche” (étapes lisibles) et, quand le
//   radicande est quasi entier, une forme exacte k·√m.

use std::fmt;

use super::expr::Expr;
use super::format::{format_decimal, format_exact, DECIMALES_DEFAUT};
use super::radical::radical_depuis_f64;

/// Tolérance sur A + B = 90°.
pub const TOLERANCE_SOMME_ANGLES: f64 = 1e-6;

/* ------------------------ Vérification Pythagore ------------------------ */

/// Les deux membres comparés, et leur écart (pour l'affichage de la vérification).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparaisonPythagore {
    pub somme_carres: f64,
    pub carre_hypotenuse: f64,
    pub ecart: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VerdictTriangle {
    Valide {
        comparaison: ComparaisonPythagore,
    },
    /// Côté non fini ou ≤ 0 : rien à vérifier.
    EntreeInvalide {
        message: String,
    },
    /// Pythagore hors tolérance : consultatif, pas bloquant.
    EcartPythagore {
        comparaison: ComparaisonPythagore,
        message: String,
    },
}

impl VerdictTriangle {
    pub fn est_valide(&self) -> bool {
        matches!(self, VerdictTriangle::Valide { .. })
    }

    pub fn message(&self) -> String {
        match self {
            VerdictTriangle::Valide { .. } => "Triangle valide (Pythagore vérifié).".to_string(),
            VerdictTriangle::EntreeInvalide { message }
            | VerdictTriangle::EcartPythagore { message, .. } => message.clone(),
        }
    }
}

pub fn verifie_triangle(oppose: f64, adjacent: f64, hypotenuse: f64) -> VerdictTriangle {
    if !(oppose.is_finite() && adjacent.is_finite() && hypotenuse.is_finite()) {
        return VerdictTriangle::EntreeInvalide {
            message: "Les côtés doivent être des nombres finis.".to_string(),
        };
    }
    if !(oppose > 0.0 && adjacent > 0.0 && hypotenuse > 0.0) {
        return VerdictTriangle::EntreeInvalide {
            message: "Les côtés doivent être strictement positifs.".to_string(),
        };
    }

    let somme_carres = oppose * oppose + adjacent * adjacent;
    let carre_hypotenuse = hypotenuse * hypotenuse;
    let tolerance = (carre_hypotenuse * 1e-6).max(1e-9);
    let ecart = (somme_carres - carre_hypotenuse).abs();

    let comparaison = ComparaisonPythagore {
        somme_carres,
        carre_hypotenuse,
        ecart,
    };

    if ecart > tolerance {
        VerdictTriangle::EcartPythagore {
            comparaison,
            message: "Pythagore non vérifié : cathète² + cathète² ≠ hypoténuse².".to_string(),
        }
    } else {
        VerdictTriangle::Valide { comparaison }
    }
}

/* ------------------------ Dérivation de côtés ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub enum ErreurDerivation {
    EntreeInvalide(String),
    /// Radicande négatif (c ≤ cathète connue) : pas de côté réel à afficher.
    PasDeSolutionReelle(String),
}

impl fmt::Display for ErreurDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurDerivation::EntreeInvalide(m) => write!(f, "{m}"),
            ErreurDerivation::PasDeSolutionReelle(m) => write!(f, "{m}"),
        }
    }
}

/// Côté dérivé : valeur flottante, forme exacte éventuelle (k·√m), démarche.
#[derive(Clone, Debug, PartialEq)]
pub struct DeriveCote {
    pub valeur: f64,
    pub exacte: Option<Expr>,
    pub etapes: Vec<String>,
}

fn exact_ou_generique(radicande: f64) -> (Option<Expr>, String) {
    match radical_depuis_f64(radicande) {
        Some(rad) => {
            let e = Expr::depuis_radical(&rad);
            let texte = format_exact(&e);
            (Some(e), texte)
        }
        None => (
            None,
            format!("√({})", format_decimal(radicande, DECIMALES_DEFAUT)),
        ),
    }
}

fn dec(x: f64) -> String {
    format_decimal(x, DECIMALES_DEFAUT)
}

fn cotes_positifs(a: f64, b: f64) -> Result<(), ErreurDerivation> {
    if !(a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0) {
        return Err(ErreurDerivation::EntreeInvalide(
            "Les côtés connus doivent être des nombres strictement positifs.".to_string(),
        ));
    }
    Ok(())
}

/// c = √(a² + b²).
pub fn hypotenuse_depuis_cathetes(a: f64, b: f64) -> Result<DeriveCote, ErreurDerivation> {
    cotes_positifs(a, b)?;

    let radicande = a * a + b * b;
    let valeur = radicande.sqrt();
    let (exacte, texte_exact) = exact_ou_generique(radicande);

    let etapes = vec![
        "Formule de Pythagore : c² = a² + b²".to_string(),
        "On isole c : c = √(a² + b²)".to_string(),
        format!("Substitution : c = √({}² + {}²)", dec(a), dec(b)),
        format!("Carrés : c = √({} + {})", dec(a * a), dec(b * b)),
        format!("Somme : c = √({})", dec(radicande)),
        format!("Résultat exact : c = {texte_exact}"),
        format!("Approximation : c ≈ {}", dec(valeur)),
    ];

    Ok(DeriveCote {
        valeur,
        exacte,
        etapes,
    })
}

/// Cathète = √(c² − b²), avec c l'hypoténuse et b l'autre cathète.
pub fn cathete_depuis_hypotenuse(c: f64, b: f64) -> Result<DeriveCote, ErreurDerivation> {
    cotes_positifs(c, b)?;

    if c <= b {
        return Err(ErreurDerivation::PasDeSolutionReelle(
            "Il faut c > b : sinon c² − b² est négatif ou nul, pas de cathète réelle.".to_string(),
        ));
    }

    let radicande = c * c - b * b;
    let valeur = radicande.sqrt();
    let (exacte, texte_exact) = exact_ou_generique(radicande);

    let etapes = vec![
        "Formule de Pythagore : c² = a² + b²".to_string(),
        "On isole a² : a² = c² − b²".to_string(),
        "Donc : a = √(c² − b²)".to_string(),
        format!("Substitution : a = √({}² − {}²)", dec(c), dec(b)),
        format!("Carrés : a = √({} − {})", dec(c * c), dec(b * b)),
        format!("Différence : a = √({})", dec(radicande)),
        format!("Résultat exact : a = {texte_exact}"),
        format!("Approximation : a ≈ {}", dec(valeur)),
    ];

    Ok(DeriveCote {
        valeur,
        exacte,
        etapes,
    })
}

/* ------------------------ Angles aigus ------------------------ */

/// A = atan2(oppose, adjacent) en degrés, B = 90 − A.
pub fn angles_depuis_cotes(oppose: f64, adjacent: f64) -> (f64, f64) {
    let a = oppose.atan2(adjacent).to_degrees();
    (a, 90.0 - a)
}

/// Complément de l'angle aigu (B quand on connaît A).
pub fn complement(degres: f64) -> f64 {
    90.0 - degres
}

/// Vérification consultative du couple d'angles aigus.
#[derive(Clone, Debug, PartialEq)]
pub struct VerdictAngles {
    pub somme_ok: bool,
    pub plage_ok: bool,
    pub avertissements: Vec<String>,
}

fn dans_plage(x: f64, lo: f64, hi: f64) -> bool {
    x >= lo - 1e-9 && x <= hi + 1e-9
}

pub fn verifie_angles(a: f64, b: f64) -> VerdictAngles {
    let mut avertissements = Vec::new();

    let somme = a + b;
    let somme_ok = (somme - 90.0).abs() <= TOLERANCE_SOMME_ANGLES;
    if !somme_ok {
        avertissements.push(format!(
            "A + B = {}° : la somme devrait valoir 90° dans un triangle rectangle.",
            dec(somme)
        ));
    }

    let plage_ok = dans_plage(a, 0.0, 90.0) && dans_plage(b, 0.0, 90.0);
    if !plage_ok {
        avertissements.push("A et B devraient être entre 0° et 90° (inclus).".to_string());
    }

    VerdictAngles {
        somme_ok,
        plage_ok,
        avertissements,
    }
}

/* ------------------------ tests ------------------------ */
