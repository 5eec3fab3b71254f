//! Tests scientifiques (campagne) : invariants + cohérence inter-modules.
//!
//! But : vérifier les propriétés du noyau sans faire chauffer la machine.
//! - propriétés des radicaux (reconstruction, sans facteur carré)
//! - meilleure fraction sous borne (convergents)
//! - cohérence table exacte / rapports flottants / fractions de côtés
//! - aller-retour des dérivations de côtés
//!
//! Notes (aligné avec l'état actuel du noyau) :
//! - La table ne couvre que {0,15,30,45,60,75,90}° : 37° doit retomber sur
//!   l'approximation (c'est un comportement voulu, pas un trou).
//! - Le verdict Pythagore est consultatif : un écart n'empêche jamais de
//!   calculer les rapports avec les côtés fournis.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::approx::approche_fraction;
use super::eval::{tableau_rapports, Affichage, Entree, Options};
use super::radical::simplifie_racine;
use super::rapports::{rapports_depuis_angle, rapports_depuis_cotes};
use super::triangle::{cathete_depuis_hypotenuse, hypotenuse_depuis_cathetes, verifie_triangle};
use super::trig::{table_pour, valeur_exacte, AngleRemarquable, NomRapport, ValeurTable};

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/* ------------------------ Radicaux ------------------------ */

#[test]
fn sci_radical_reconstruction_et_sans_carre() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for n in 0..=5000i64 {
        budget(t0, max);

        let r = simplifie_racine(&BigInt::from(n)).unwrap_or_else(|| panic!("n={n}"));
        assert_eq!(&r.exterieur * &r.exterieur * &r.interieur, BigInt::from(n));

        // sans facteur carré : aucun p² > 1 ne divise interieur
        let mut p = BigInt::from(2);
        while &p * &p <= r.interieur {
            assert!(
                !(&r.interieur % (&p * &p)).is_zero(),
                "n={n} : {} divisible par {p}²",
                r.interieur
            );
            p += 1;
        }
    }
}

/* ------------------------ Fraction continue ------------------------ */

#[test]
fn sci_fraction_entiers_exacts() {
    for k in -50i64..=50 {
        assert_eq!(approche_fraction(k as f64, 2000).unwrap(), frac(k, 1), "k={k}");
    }
}

#[test]
fn sci_fraction_retrouve_les_fractions_sous_la_borne() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // toute fraction n/d avec d ≤ borne doit être retrouvée exactement
    for d in 1i64..=60 {
        for n in 0i64..=d {
            budget(t0, max);
            let x = n as f64 / d as f64;
            let f = approche_fraction(x, 2000).unwrap();
            assert_eq!(f, frac(n, d), "n={n} d={d}");
        }
    }
}

#[test]
fn sci_fraction_borne_et_qualite() {
    // le convergent retenu respecte la borne et reste proche
    for &x in &[
        std::f64::consts::PI,
        std::f64::consts::E,
        std::f64::consts::SQRT_2,
        0.123456789,
    ] {
        for &borne in &[1u64, 7, 50, 2000] {
            let f = approche_fraction(x, borne).unwrap();
            assert!(f.denom() <= &BigInt::from(borne));

            let lu = f.numer().to_f64().unwrap() / f.denom().to_f64().unwrap();
            // au pire, l'entier le plus proche (borne 1)
            assert!((lu - x).abs() <= 0.5 + 1e-12, "x={x} borne={borne} f={f}");
        }
    }
}

/* ------------------------ Table / rapports : cohérence ------------------------ */

#[test]
fn sci_table_coherente_avec_rapports() {
    for angle in AngleRemarquable::TOUS {
        let rapports = rapports_depuis_angle(angle.degres());
        for nom in NomRapport::TOUS {
            let table = valeur_exacte(angle, nom);
            let flottant = rapports.get(nom);
            match table {
                ValeurTable::Indefini => {
                    assert!(
                        flottant.est_indefini(),
                        "{angle:?} {nom:?}: table indéfinie mais rapport défini"
                    );
                }
                ValeurTable::Exacte(e) => {
                    let lu = e
                        .approx_f64()
                        .unwrap_or_else(|| panic!("{angle:?} {nom:?}: lecture impossible"));
                    let v = flottant
                        .valeur()
                        .unwrap_or_else(|| panic!("{angle:?} {nom:?}: rapport indéfini"));
                    assert!(
                        (lu - v).abs() < 1e-9,
                        "{angle:?} {nom:?}: table={lu} rapport={v}"
                    );
                }
            }
        }
    }
}

#[test]
fn sci_37_degres_hors_table() {
    assert!(table_pour(37.0, NomRapport::Sin).is_none());

    // l'appelant retombe sur l'approximation : cellule Approchee
    let t = tableau_rapports(&Entree::ParAngle { degres: 37.0 }, Options::default());
    assert!(matches!(
        t.cellule(NomRapport::Sin).affichage,
        Affichage::Approchee(_)
    ));
}

#[test]
fn sci_cotes_et_angle_concordent() {
    // (3,4,5) : mêmes rapports par côtés et par angle (A = atan2(3,4))
    let par_cotes = rapports_depuis_cotes(3.0, 4.0, 5.0);
    let degres = 3f64.atan2(4.0).to_degrees();
    let par_angle = rapports_depuis_angle(degres);

    for nom in NomRapport::TOUS {
        let a = par_cotes.get(nom).valeur().unwrap();
        let b = par_angle.get(nom).valeur().unwrap();
        assert!((a - b).abs() < 1e-6, "{nom:?}: cotes={a} angle={b}");
    }
}

#[test]
fn sci_sin_45_valeurs_attendues() {
    let t = tableau_rapports(&Entree::ParAngle { degres: 45.0 }, Options::default());
    assert_eq!(t.cellule(NomRapport::Sin).affichage.texte(), "√2/2");
    assert_eq!(t.cellule(NomRapport::Cos).affichage.texte(), "√2/2");
    assert_eq!(
        t.cellule(NomRapport::Sin).decimal.as_deref(),
        Some("0.7071067812")
    );
}

#[test]
fn sci_90_degres_indefinis_cibles() {
    let r = rapports_depuis_angle(90.0);
    assert!(r.tan.est_indefini());
    assert!(r.sec.est_indefini());
    assert_eq!(r.sin.valeur(), Some(1.0));
    assert!(r.cos.valeur().unwrap().abs() < 1e-15);
}

/* ------------------------ Triangle ------------------------ */

#[test]
fn sci_pythagore_3_4_5_et_3_4_6() {
    assert!(verifie_triangle(3.0, 4.0, 5.0).est_valide());
    assert!(!verifie_triangle(3.0, 4.0, 6.0).est_valide());
}

#[test]
fn sci_verdict_consultatif_rapports_quand_meme() {
    // même avec un écart Pythagore, les rapports restent calculables
    let v = verifie_triangle(3.0, 4.0, 6.0);
    assert!(!v.est_valide());
    let t = tableau_rapports(
        &Entree::ParCotes {
            oppose: 3.0,
            adjacent: 4.0,
            hypotenuse: 6.0,
        },
        Options::default(),
    );
    assert_eq!(t.cellule(NomRapport::Sin).affichage.texte(), "1/2");
}

#[test]
fn sci_aller_retour_derivations() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for a in 1..=20i64 {
        for b in 1..=20i64 {
            budget(t0, max);
            let (a, b) = (a as f64, b as f64);
            let c = hypotenuse_depuis_cathetes(a, b).unwrap().valeur;
            let b2 = cathete_depuis_hypotenuse(c, a).unwrap().valeur;
            assert!((b2 - b).abs() < 1e-9, "a={a} b={b}: b2={b2}");
        }
    }
}

#[test]
fn sci_derivation_exacte_quand_entiere() {
    // (3,4) -> c = 5 exact ; (1,1) -> c = √2 ; (2,4) -> c = 2√5
    use super::format::format_exact;
    let d = hypotenuse_depuis_cathetes(2.0, 4.0).unwrap();
    assert_eq!(format_exact(&d.exacte.unwrap()), "2√5");
    assert!(d.etapes.iter().any(|e| e.contains("Pythagore")));
}
