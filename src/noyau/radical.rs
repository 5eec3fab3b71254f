// src/noyau/radical.rs
//
// Simplification de radicaux : n = exterieur² · interieur
// --------------------------------------------------------
// - interieur “sans facteur carré” (aucun carré parfait > 1 ne le divise)
// - exterieur ≥ 0 ; cas particulier n = 0 -> (0, 1)
// - essais par p = 2 puis impairs, tant que p² ≤ interieur (coût ≤ ⌈√n⌉ divisions)
//
// L'affichage (0, exterieur seul, √interieur, exterieur√interieur) vit dans format.rs.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Radical {
    pub exterieur: BigInt,
    pub interieur: BigInt,
}

impl Radical {
    /// Valeur approchée exterieur·√interieur (lecture décimale).
    pub fn approx_f64(&self) -> Option<f64> {
        use num_traits::ToPrimitive;
        let e = self.exterieur.to_f64()?;
        let i = self.interieur.to_f64()?;
        Some(e * i.sqrt())
    }
}

/// Décompose n ≥ 0 en exterieur²·interieur, interieur sans facteur carré.
///
/// Retour:
/// - Some(Radical) si n ≥ 0 (n = 0 donne (0, 1))
/// - None si n < 0 (pas de racine réelle : l'appelant retombe sur un affichage générique)
pub fn simplifie_racine(n: &BigInt) -> Option<Radical> {
    if n.is_negative() {
        return None;
    }
    if n.is_zero() {
        return Some(Radical {
            exterieur: BigInt::zero(),
            interieur: BigInt::one(),
        });
    }

    let mut interieur = n.clone();
    let mut exterieur = BigInt::one();

    // Essai par p = 2 puis impairs (mêmes bornes que l'extraction de carrés parfaits).
    let mut p = BigInt::from(2);
    while &p * &p <= interieur {
        let p2 = &p * &p;

        while (&interieur % &p2).is_zero() {
            interieur /= &p2;
            exterieur *= &p;
        }

        if p == BigInt::from(2) {
            p = BigInt::from(3);
        } else {
            p += 2;
        }
    }

    Some(Radical {
        exterieur,
        interieur,
    })
}

/// Variante “entrée flottante” : n'accepte que les radicandes quasi entiers.
///
/// - non fini ou négatif -> None
/// - |x − round(x)| ≥ 1e-10 -> None (l'appelant affiche √(x) tel quel)
pub fn radical_depuis_f64(x: f64) -> Option<Radical> {
    use num_traits::FromPrimitive;

    if !x.is_finite() {
        return None;
    }
    let proche = x.round();
    if (x - proche).abs() >= 1e-10 || proche < 0.0 {
        return None;
    }
    simplifie_racine(&BigInt::from_f64(proche)?)
}

/* ------------------------ tests ------------------------ */
