// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::expr::Expr;
use super::radical::Radical;

/// Nombre de décimales par défaut (zéros de queue retirés).
pub const DECIMALES_DEFAUT: usize = 10;

/* ------------------------ Décimal ------------------------ */

/// |x| < 5e-16 -> 0 exact (évite les artefacts de zéro signé et de bruit).
pub(crate) fn nettoie_zero(x: f64) -> f64 {
    if x.is_finite() && x.abs() < 5e-16 {
        return 0.0;
    }
    x
}

/// Lecture décimale : jusqu'à `decimales` chiffres, zéros de queue retirés.
/// Non fini -> "indéfini".
pub fn format_decimal(x: f64, decimales: usize) -> String {
    if !x.is_finite() {
        return "indéfini".to_string();
    }
    let x = nettoie_zero(x);
    let mut s = format!("{x:.decimales$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/* ------------------------ Fractions ------------------------ */

pub fn format_fraction(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Radicaux ------------------------ */

/// Politique d'affichage : 0 ; exterieur seul ; √interieur ; exterieur√interieur.
pub fn format_radical(r: &Radical) -> String {
    if r.exterieur.is_zero() {
        return "0".to_string();
    }
    if r.interieur.is_one() {
        return format!("{}", r.exterieur);
    }
    if r.exterieur.is_one() {
        return format!("√{}", r.interieur);
    }
    format!("{}√{}", r.exterieur, r.interieur)
}

/* ------------------------ Helpers exacts ------------------------ */

fn format_sqrt_of_int(n: &BigInt) -> String {
    format!("√{n}")
}

/// (p/q)·√n -> p√n/q ; √n/q si p=1 ; -√n/q si p=-1
fn format_mul_rat_sqrt(r: &BigRational, n: &BigInt) -> String {
    let p = r.numer();
    let q = r.denom();

    if p.is_zero() {
        return "0".to_string();
    }

    if p == &BigInt::one() {
        if q.is_one() {
            return format_sqrt_of_int(n);
        }
        return format!("{}/{}", format_sqrt_of_int(n), q);
    }

    if p == &BigInt::from(-1) {
        if q.is_one() {
            return format!("-{}", format_sqrt_of_int(n));
        }
        return format!("-{}/{}", format_sqrt_of_int(n), q);
    }

    if q.is_one() {
        return format!("{p}{}", format_sqrt_of_int(n));
    }
    format!("{p}{}/{}", format_sqrt_of_int(n), q)
}

fn as_sqrt_of_int(e: &Expr) -> Option<&BigInt> {
    if let Expr::Sqrt(inner) = e {
        if let Expr::Rat(r) = inner.as_ref() {
            if r.denom().is_one() {
                return Some(r.numer());
            }
        }
    }
    None
}

fn is_zero_expr(e: &Expr) -> bool {
    matches!(e, Expr::Rat(r) if r.is_zero())
}

fn needs_parens_for_unary_minus(e: &Expr) -> bool {
    matches!(e, Expr::Add(_, _) | Expr::Sub(_, _))
}

/* ------------------------ Affichage EXACT “joli” ------------------------ */

/// Formate une valeur exacte lisible : √2/2, 2√3/3, (√6-√2)/4, -√3, indéfini…
pub fn format_exact(e: &Expr) -> String {
    use Expr::*;

    match e {
        Indefini => "indéfini".to_string(),

        Rat(r) => format_fraction(r),

        // √2, √3… si argument entier
        Sqrt(x) => match &**x {
            Rat(r) if r.denom().is_one() => format_sqrt_of_int(r.numer()),
            _ => format!("√({})", format_exact(x)),
        },

        // cas joli : (p/q)·√n => p√n/q (donc √2/2, 2√3/3, etc.)
        Mul(a, b) => {
            if let (Rat(r), Some(n)) = (&**a, as_sqrt_of_int(b)) {
                return format_mul_rat_sqrt(r, n);
            }
            if let (Some(n), Rat(r)) = (as_sqrt_of_int(a), &**b) {
                return format_mul_rat_sqrt(r, n);
            }
            format!("({}*{})", format_exact(a), format_exact(b))
        }

        // a/b : on renforce les cas “√…/k”
        Div(a, b) => {
            if let Rat(rden) = &**b {
                if rden.denom().is_one() {
                    let k = rden.numer();

                    // √n / k -> √n/k
                    if let Some(n) = as_sqrt_of_int(a) {
                        return format!("{}/{}", format_sqrt_of_int(n), k);
                    }

                    // cas général : expr/k
                    return format!("{}/{}", format_exact(a), k);
                }
            }
            format!("{}/{}", format_exact(a), format_exact(b))
        }

        Add(a, b) => format!("({}+{})", format_exact(a), format_exact(b)),

        // 0 - x => -x (rendu propre)
        Sub(a, b) => {
            if is_zero_expr(a) {
                let sb = format_exact(b);
                if needs_parens_for_unary_minus(b) {
                    format!("-({sb})")
                } else {
                    format!("-{sb}")
                }
            } else {
                format!("({}-{})", format_exact(a), format_exact(b))
            }
        }
    }
}

/* ------------------------ tests ------------------------ */
