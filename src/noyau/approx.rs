// src/noyau/approx.rs
//
// Approximation rationnelle par fraction continue
// -----------------------------------------------
// - signe traité à part, travail sur |x|
// - quasi-entier (à 1e-12 près) -> fast path (round(x), 1)
// - ≤ 30 convergents : h₂ = a·h₁ + h₀, k₂ = a·k₁ + k₀
// - arrêt si le dénominateur suivant dépasse la borne, ou si le reste
//   fractionnaire < 1e-15 (développement terminé exactement)
// - arithmétique en BigInt : aucun débordement possible, même pour les
//   f64 énormes qui passent le fast path entier

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Zero};

use super::format::nettoie_zero;

/// Borne par défaut sur le dénominateur (ajustable par l'appelant).
pub const MAX_DENOMINATEUR_DEFAUT: u64 = 2000;

/// Meilleure approximation rationnelle de `x` avec dénominateur ≤ `max_denom`.
///
/// Retour:
/// - Some(fraction réduite) si x fini
/// - None si x est NaN/∞
pub fn approche_fraction(x: f64, max_denom: u64) -> Option<BigRational> {
    if !x.is_finite() {
        return None;
    }
    let max_denom = max_denom.max(1);

    // |x| < 5e-16 : zéro exact (évite les artefacts de zéro signé)
    let x = nettoie_zero(x);

    let negatif = x < 0.0;
    let mut b = x.abs();

    // fast path entier
    if (b - b.round()).abs() < 1e-12 {
        let n = BigInt::from_f64(b.round())?;
        return Some(BigRational::from_integer(if negatif { -n } else { n }));
    }

    let borne = BigInt::from(max_denom);

    // convergents : h₁/k₁ courant, h₀/k₀ précédent
    let mut h0 = BigInt::zero();
    let mut h1 = BigInt::one();
    let mut k0 = BigInt::one();
    let mut k1 = BigInt::zero();

    for _ in 0..30 {
        let plancher = b.floor();
        let a = BigInt::from_f64(plancher)?;

        let h2 = &a * &h1 + &h0;
        let k2 = &a * &k1 + &k0;
        if k2 > borne {
            break;
        }

        h0 = h1;
        h1 = h2;
        k0 = k1;
        k1 = k2;

        let reste = b - plancher;
        if reste < 1e-15 {
            break;
        }
        b = 1.0 / reste;
    }

    // k₁ = 0 impossible ici (le fast path entier couvre le cas sans itération),
    // mais on reste défensif : pas de fraction sans dénominateur.
    if k1.is_zero() {
        return None;
    }

    let h1 = if negatif { -h1 } else { h1 };
    Some(BigRational::new(h1, k1))
}

/* ------------------------ tests ------------------------ */
