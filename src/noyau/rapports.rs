// src/noyau/rapports.rs
//
// Les six rapports trigonométriques d'un angle aigu
// -------------------------------------------------
// Deux modes, mêmes sorties :
// - par angle : sin/cos flottants, puis tan = sin/cos, cot, sec, csc dérivés ;
//   dénominateur |d| < 1e-15 -> Indefini (ce rapport seulement)
// - par côtés (oppose, adjacent, hypotenuse) : les six quotients ;
//   dénominateur exactement nul -> Indefini (ce rapport seulement)
//
// “Indéfini” est une variante, jamais ±∞ ni NaN : l'aval peut matcher
// exhaustivement. Angle complémentaire B : cathètes échangées (sin B = cos A).

use super::trig::NomRapport;

/// Seuil sous lequel un dénominateur flottant est traité comme nul.
pub const SEUIL_DENOMINATEUR: f64 = 1e-15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rapport {
    Valeur(f64),
    Indefini,
}

impl Rapport {
    pub fn est_indefini(&self) -> bool {
        matches!(self, Rapport::Indefini)
    }

    pub fn valeur(&self) -> Option<f64> {
        match self {
            Rapport::Valeur(v) => Some(*v),
            Rapport::Indefini => None,
        }
    }
}

/// Les six rapports d'un même angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rapports {
    pub sin: Rapport,
    pub cos: Rapport,
    pub tan: Rapport,
    pub cot: Rapport,
    pub sec: Rapport,
    pub csc: Rapport,
}

impl Rapports {
    pub fn get(&self, nom: NomRapport) -> Rapport {
        use NomRapport::*;
        match nom {
            Sin => self.sin,
            Cos => self.cos,
            Tan => self.tan,
            Cot => self.cot,
            Sec => self.sec,
            Csc => self.csc,
        }
    }
}

fn quotient_flottant(num: f64, den: f64) -> Rapport {
    if den.abs() < SEUIL_DENOMINATEUR {
        Rapport::Indefini
    } else {
        Rapport::Valeur(num / den)
    }
}

/// Mode angle : θ en degrés.
pub fn rapports_depuis_angle(degres: f64) -> Rapports {
    let rad = degres.to_radians();
    let s = rad.sin();
    let c = rad.cos();

    Rapports {
        sin: Rapport::Valeur(s),
        cos: Rapport::Valeur(c),
        tan: quotient_flottant(s, c),
        cot: quotient_flottant(c, s),
        sec: quotient_flottant(1.0, c),
        csc: quotient_flottant(1.0, s),
    }
}

fn quotient_cotes(num: f64, den: f64) -> Rapport {
    // côtés fournis tels quels : seul un dénominateur exactement nul est indéfini
    if den == 0.0 {
        Rapport::Indefini
    } else {
        Rapport::Valeur(num / den)
    }
}

/// Mode côtés, pour l'angle A : sin = oppose/hypotenuse, etc.
pub fn rapports_depuis_cotes(oppose: f64, adjacent: f64, hypotenuse: f64) -> Rapports {
    Rapports {
        sin: quotient_cotes(oppose, hypotenuse),
        cos: quotient_cotes(adjacent, hypotenuse),
        tan: quotient_cotes(oppose, adjacent),
        cot: quotient_cotes(adjacent, oppose),
        sec: quotient_cotes(hypotenuse, adjacent),
        csc: quotient_cotes(hypotenuse, oppose),
    }
}

/// Angle complémentaire B : mêmes côtés, cathètes échangées.
pub fn rapports_complementaires(oppose: f64, adjacent: f64, hypotenuse: f64) -> Rapports {
    rapports_depuis_cotes(adjacent, oppose, hypotenuse)
}

/* ------------------------ tests ------------------------ */
