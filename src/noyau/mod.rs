//! Noyau exact du triangle rectangle
//!
//! Organisation interne :
//! - radical.rs  : n = exterieur²·interieur (racines simplifiées k·√m)
//! - approx.rs   : fraction continue (meilleure fraction sous une borne)
//! - expr.rs     : AST exact réduit + simplify (porte les valeurs symboliques)
//! - format.rs   : affichage décimal + EXACT “joli” (√2/2, 2√3/3…)
//! - trig.rs     : table des angles remarquables (7 angles × 6 rapports)
//! - rapports.rs : six rapports par angle ou par côtés + indéfini ciblé
//! - triangle.rs : Pythagore (consultatif) + dérivations côtés/angles
//! - eval.rs     : pipeline (mode angle / mode côtés -> tableau de cellules)

pub mod approx;
pub mod eval;
pub mod expr;
pub mod format;
pub mod radical;
pub mod rapports;
pub mod triangle;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{tableau_complementaire, tableau_rapports, Entree, Options, TableauRapports};
