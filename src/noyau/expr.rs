// src/noyau/expr.rs
//
// AST exact réduit (sans flottants dans les valeurs).
// - Rat : rationnel exact
// - Sqrt : √(x) (en pratique, x rationnel ≥ 0)
// - Indefini : résultat exact indéfini (ex: sec(90°))
//
// Le domaine est volontairement petit : il porte les valeurs exactes de la
// table des angles remarquables et les côtés dérivés (k·√m). Pas de π, pas de
// variables, pas de fonctions trig dans l'arbre : la trig vit dans trig.rs.
//
// SAFE:
// - simplify() ne réduit que ce qui est strictement démontrable.
// - approx_f64() retourne None dès que la lecture n'a pas de sens (indéfini,
//   racine d'un négatif, division par zéro).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::radical::{simplifie_racine, Radical};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(BigRational),
    Indefini, // ex: sec(90°)

    Sqrt(Box<Expr>), // √(x)

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn entier(n: i64) -> Expr {
        Expr::Rat(BigRational::from_integer(BigInt::from(n)))
    }

    pub fn rat(n: i64, d: i64) -> Expr {
        Expr::Rat(BigRational::new(BigInt::from(n), BigInt::from(d)))
    }

    /// √n pour n entier ≥ 0 (forme brute, simplifiable ensuite).
    pub fn racine(n: i64) -> Expr {
        Expr::Sqrt(Box::new(Expr::entier(n)))
    }

    /// exterieur·√interieur sous forme d'arbre (Rat, √int, ou Rat·√int).
    pub fn depuis_radical(r: &Radical) -> Expr {
        let ext = Expr::Rat(BigRational::from_integer(r.exterieur.clone()));
        if r.interieur.is_one() {
            return ext;
        }
        let racine = Expr::Sqrt(Box::new(Expr::Rat(BigRational::from_integer(
            r.interieur.clone(),
        ))));
        if r.exterieur.is_one() {
            return racine;
        }
        Expr::Mul(Box::new(ext), Box::new(racine))
    }

    /// Simplification locale (SAFE), sans heuristiques.
    pub fn simplify(self) -> Expr {
        use Expr::*;

        match self {
            Rat(_) | Indefini => self,

            Add(a, b) => {
                let a = a.simplify();
                let b = b.simplify();
                match (&a, &b) {
                    (Indefini, _) | (_, Indefini) => Indefini,
                    (Rat(x), Rat(y)) => Rat(x + y),
                    (Rat(x), _) if x.is_zero() => b,
                    (_, Rat(y)) if y.is_zero() => a,
                    _ => Add(Box::new(a), Box::new(b)),
                }
            }

            Sub(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                // x - x => 0
                if a == b {
                    return Rat(BigRational::zero());
                }

                match (&a, &b) {
                    (Indefini, _) | (_, Indefini) => Indefini,
                    (Rat(x), Rat(y)) => Rat(x - y),
                    (_, Rat(y)) if y.is_zero() => a,
                    (Rat(x), _) if x.is_zero() => {
                        // 0 - b : on garde Sub(0,b) (signe porté par l'arbre)
                        Sub(Box::new(Rat(BigRational::zero())), Box::new(b))
                    }
                    _ => Sub(Box::new(a), Box::new(b)),
                }
            }

            Mul(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                if matches!(a, Indefini) || matches!(b, Indefini) {
                    return Indefini;
                }

                // √x * √x => x
                if let (Sqrt(x), Sqrt(y)) = (&a, &b) {
                    if x.as_ref() == y.as_ref() {
                        return (*x.clone()).simplify();
                    }
                }

                // √u * √v => √(u*v) si u,v rationnels ≥ 0
                if let (Sqrt(u), Sqrt(v)) = (&a, &b) {
                    if let (Expr::Rat(ru), Expr::Rat(rv)) = (u.as_ref(), v.as_ref()) {
                        if !ru.is_negative() && !rv.is_negative() {
                            return Expr::Sqrt(Box::new(Expr::Rat(ru.clone() * rv.clone())))
                                .simplify();
                        }
                    }
                }

                match (&a, &b) {
                    (Rat(x), Rat(y)) => Rat(x * y),
                    (Rat(x), _) if x.is_zero() => Rat(BigRational::zero()),
                    (_, Rat(y)) if y.is_zero() => Rat(BigRational::zero()),
                    (Rat(x), _) if x.is_one() => b,
                    (_, Rat(y)) if y.is_one() => a,
                    _ => Mul(Box::new(a), Box::new(b)),
                }
            }

            Div(a, b) => {
                let a = a.simplify();
                let b = b.simplify();

                if matches!(a, Indefini) || matches!(b, Indefini) {
                    return Indefini;
                }

                // division par zéro : reste symbolique (approx_f64 rendra None)
                if let Expr::Rat(y) = &b {
                    if y.is_zero() {
                        return Div(Box::new(a), Box::new(b));
                    }
                }

                // √x / √x => 1 (x rationnel non nul)
                if let (Expr::Sqrt(x), Expr::Sqrt(y)) = (&a, &b) {
                    if x.as_ref() == y.as_ref() {
                        if let Expr::Rat(r) = x.as_ref() {
                            if !r.is_zero() {
                                return Expr::Rat(BigRational::one());
                            }
                        }
                    }
                }

                match (&a, &b) {
                    (Rat(x), Rat(y)) => Rat(x / y),
                    (_, Rat(y)) if y.is_one() => a,

                    // (p/q) / √n  => (p/qn) * √n, si n entier > 0 (rationalisation)
                    (Rat(x), Sqrt(inner)) => {
                        if let Rat(rn) = &**inner {
                            if rn.is_positive() && rn.denom().is_one() {
                                let n = rn.clone();
                                let x_sur_n = x.clone() / n.clone();
                                return Mul(
                                    Box::new(Rat(x_sur_n)),
                                    Box::new(Sqrt(Box::new(Rat(n)))),
                                )
                                .simplify();
                            }
                        }
                        Div(Box::new(a), Box::new(b))
                    }

                    _ => Div(Box::new(a), Box::new(b)),
                }
            }

            Sqrt(x) => {
                let x = x.simplify();
                if matches!(x, Indefini) {
                    return Indefini;
                }
                // √(rat) : si entier ≥ 0, extraction des carrés parfaits √(s²·t) = s·√t
                if let Rat(r) = &x {
                    if r.is_zero() {
                        return Rat(BigRational::zero());
                    }
                    if r.is_positive() && r.denom().is_one() {
                        if let Some(rad) = simplifie_racine(r.numer()) {
                            if rad.interieur.is_one() || !rad.exterieur.is_one() {
                                return Expr::depuis_radical(&rad);
                            }
                        }
                    }
                }
                Sqrt(Box::new(x))
            }
        }
    }

    /// Lecture flottante de l'arbre. None si indéfini ou hors domaine réel.
    pub fn approx_f64(&self) -> Option<f64> {
        use Expr::*;
        match self {
            Indefini => None,
            Rat(r) => {
                let n = r.numer().to_f64()?;
                let d = r.denom().to_f64()?;
                Some(n / d)
            }
            Sqrt(x) => {
                let v = x.approx_f64()?;
                if v < 0.0 {
                    return None;
                }
                Some(v.sqrt())
            }
            Add(a, b) => Some(a.approx_f64()? + b.approx_f64()?),
            Sub(a, b) => Some(a.approx_f64()? - b.approx_f64()?),
            Mul(a, b) => Some(a.approx_f64()? * b.approx_f64()?),
            Div(a, b) => {
                let d = b.approx_f64()?;
                if d == 0.0 {
                    return None;
                }
                Some(a.approx_f64()? / d)
            }
        }
    }
}

/* ------------------------ tests ------------------------ */
