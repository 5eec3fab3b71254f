//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées, budget temps global
//! - invariants clés :
//!   - cellule indéfinie => lecture décimale None (et réciproquement jamais
//!     de décimal "indéfini" sur une cellule définie)
//!   - dénominateur approché toujours ≤ borne
//!   - radical : reconstruction exacte, intérieur sans facteur carré
//!   - mode côtés et mode angle concordent sur des triangles valides

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::approx::approche_fraction;
use super::eval::{tableau_complementaire, tableau_rapports, Affichage, Entree, Options};
use super::radical::simplifie_racine;
use super::triangle::{hypotenuse_depuis_cathetes, verifie_triangle};
use super::trig::NomRapport;

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
    fn f64_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariant_cellules(t: &super::eval::TableauRapports, borne: u64) {
    for c in &t.cellules {
        match &c.affichage {
            Affichage::Indefinie => {
                assert!(c.decimal.is_none(), "{:?}: indéfini avec décimal", c.nom);
            }
            Affichage::Exacte(_) | Affichage::Fraction(_) => {
                assert!(c.decimal.is_some(), "{:?}: défini sans décimal", c.nom);
            }
            Affichage::Approchee(f) => {
                assert!(c.decimal.is_some(), "{:?}: défini sans décimal", c.nom);
                assert!(
                    f.denom() <= &BigInt::from(borne),
                    "{:?}: dénominateur {} > borne {borne}",
                    c.nom,
                    f.denom()
                );
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_radical_reconstruction() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let n = i64::from(rng.pick(1_000_000));
        let r = simplifie_racine(&BigInt::from(n)).unwrap_or_else(|| panic!("n={n}"));
        assert_eq!(&r.exterieur * &r.exterieur * &r.interieur, BigInt::from(n));

        let mut p = BigInt::from(2);
        while &p * &p <= r.interieur {
            assert!(!(&r.interieur % (&p * &p)).is_zero(), "n={n}");
            p += 1;
        }
    }
}

#[test]
fn fuzz_safe_fraction_borne_et_exactitude() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let d = i64::from(rng.pick(1999) + 1);
        let n = i64::from(rng.pick(4000)) - 2000;
        let x = n as f64 / d as f64;

        let f = approche_fraction(x, 2000).unwrap_or_else(|| panic!("x={x}"));
        assert!(f.denom() <= &BigInt::from(2000));

        // n/d (réduite) est sous la borne : elle doit être retrouvée exactement
        let lu = f.numer().to_f64().unwrap() / f.denom().to_f64().unwrap();
        assert!(
            (lu - x).abs() < 1e-9,
            "x={n}/{d} retrouvé {f} (lu={lu})"
        );
    }
}

#[test]
fn fuzz_safe_tableaux_deterministes_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0x5EED_u64);
    let opts = Options::default();

    for _ in 0..200 {
        budget(t0, max);

        let entree = if rng.pick(2) == 0 {
            // angles sur [-10, 100] : hors plage accepté (avertissement ailleurs)
            Entree::ParAngle {
                degres: rng.f64_unit() * 110.0 - 10.0,
            }
        } else {
            let oppose = rng.f64_unit() * 50.0;
            let adjacent = rng.f64_unit() * 50.0;
            let hypotenuse = (oppose * oppose + adjacent * adjacent).sqrt();
            Entree::ParCotes {
                oppose,
                adjacent,
                hypotenuse,
            }
        };

        let t1 = tableau_rapports(&entree, opts);
        check_invariant_cellules(&t1, opts.max_denominateur);

        // déterminisme : même entrée => même tableau
        let t2 = tableau_rapports(&entree, opts);
        assert_eq!(t1, t2);

        let tb = tableau_complementaire(&entree, opts);
        check_invariant_cellules(&tb, opts.max_denominateur);
    }
}

#[test]
fn fuzz_safe_cotes_vs_angle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xA11CE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let oppose = f64::from(rng.pick(40) + 1);
        let adjacent = f64::from(rng.pick(40) + 1);
        let hypotenuse = hypotenuse_depuis_cathetes(oppose, adjacent)
            .unwrap_or_else(|e| panic!("dérivation: {e}"))
            .valeur;

        assert!(verifie_triangle(oppose, adjacent, hypotenuse).est_valide());

        let par_cotes = super::rapports::rapports_depuis_cotes(oppose, adjacent, hypotenuse);
        let degres = oppose.atan2(adjacent).to_degrees();
        let par_angle = super::rapports::rapports_depuis_angle(degres);

        for nom in NomRapport::TOUS {
            let a = par_cotes.get(nom).valeur();
            let b = par_angle.get(nom).valeur();
            match (a, b) {
                (Some(a), Some(b)) => {
                    assert!((a - b).abs() < 1e-6, "{nom:?}: cotes={a} angle={b}")
                }
                // côtés > 0 : aucun rapport indéfini attendu dans ce fuzz
                autre => panic!("{nom:?}: {autre:?}"),
            }
        }
    }
}
