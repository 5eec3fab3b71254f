//! Noyau — pipeline des rapports (mode angle / mode côtés)
//!
//! entrée -> rapports flottants -> par rapport :
//!     table des angles remarquables (exacte) -> fraction exacte (côtés quasi
//!     entiers) -> approximation par fraction continue -> cellule + décimal
//!
//! Un seul chemin paramétré par la variante d'entrée : les deux modes
//! produisent le même tableau de six cellules, l'“indéfini” restant local à
//! chaque cellule (les autres rapports restent affichables).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::FromPrimitive;

use super::approx::{approche_fraction, MAX_DENOMINATEUR_DEFAUT};
use super::expr::Expr;
use super::format::{format_decimal, format_exact, format_fraction, DECIMALES_DEFAUT};
use super::rapports::{rapports_depuis_angle, rapports_depuis_cotes, Rapport, Rapports};
use super::triangle::angles_depuis_cotes;
use super::trig::{table_pour, NomRapport, ValeurTable};

/// Entrée du pipeline : un angle OU trois côtés (variante explicite).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entree {
    ParAngle {
        degres: f64,
    },
    ParCotes {
        oppose: f64,
        adjacent: f64,
        hypotenuse: f64,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Borne sur le dénominateur des approximations (fraction continue).
    pub max_denominateur: u64,
    /// Décimales maximales de la lecture décimale (zéros de queue retirés).
    pub decimales: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_denominateur: MAX_DENOMINATEUR_DEFAUT,
            decimales: DECIMALES_DEFAUT,
        }
    }
}

/// Ce qu'une cellule affiche : exact symbolique, fraction (exacte ou
/// approchée), ou indéfini. Variante fermée : l'aval matche exhaustivement.
#[derive(Clone, Debug, PartialEq)]
pub enum Affichage {
    /// Valeur symbolique de la table des angles remarquables.
    Exacte(Expr),
    /// Fraction exacte (côtés quasi entiers, réduite par le pgcd).
    Fraction(BigRational),
    /// Meilleure fraction sous la borne (fraction continue).
    Approchee(BigRational),
    Indefinie,
}

impl Affichage {
    pub fn texte(&self) -> String {
        match self {
            Affichage::Exacte(e) => format_exact(e),
            Affichage::Fraction(f) | Affichage::Approchee(f) => format_fraction(f),
            Affichage::Indefinie => "indéfini".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cellule {
    pub nom: NomRapport,
    pub affichage: Affichage,
    /// Lecture décimale ; None si le rapport est indéfini.
    pub decimal: Option<String>,
}

/// Le tableau complet d'un angle : six cellules dans l'ordre sin..csc.
#[derive(Clone, Debug, PartialEq)]
pub struct TableauRapports {
    pub degres: f64,
    pub rapports: Rapports,
    pub cellules: [Cellule; 6],
}

impl TableauRapports {
    pub fn cellule(&self, nom: NomRapport) -> &Cellule {
        // TOUS et cellules partagent le même ordre
        let idx = NomRapport::TOUS
            .iter()
            .position(|n| *n == nom)
            .unwrap_or(0);
        &self.cellules[idx]
    }
}

/* ------------------------ Construction des cellules ------------------------ */

fn cellule_indefinie(nom: NomRapport) -> Cellule {
    Cellule {
        nom,
        affichage: Affichage::Indefinie,
        decimal: None,
    }
}

fn cellule_approchee(nom: NomRapport, valeur: f64, options: Options) -> Cellule {
    match approche_fraction(valeur, options.max_denominateur) {
        Some(f) => Cellule {
            nom,
            affichage: Affichage::Approchee(f),
            decimal: Some(format_decimal(valeur, options.decimales)),
        },
        // valeur non finie : ne devrait pas arriver (Rapport::Indefini l'a
        // déjà capté), mais on reste local et non bloquant
        None => cellule_indefinie(nom),
    }
}

/// Quasi-entier (à 1e-10 près) -> Some(entier), sinon None.
fn quasi_entier(x: f64) -> Option<BigInt> {
    let proche = x.round();
    if (x - proche).abs() < 1e-10 {
        BigInt::from_f64(proche)
    } else {
        None
    }
}

/// Mode côtés : fraction exacte num/den si les deux sont quasi entiers
/// (dénominateur arrondi non nul), sinon approximation.
fn cellule_depuis_quotient(
    nom: NomRapport,
    rapport: Rapport,
    num: f64,
    den: f64,
    options: Options,
) -> Cellule {
    let valeur = match rapport {
        Rapport::Indefini => return cellule_indefinie(nom),
        Rapport::Valeur(v) => v,
    };

    if let (Some(n), Some(d)) = (quasi_entier(num), quasi_entier(den)) {
        use num_traits::Zero;
        if !d.is_zero() {
            return Cellule {
                nom,
                affichage: Affichage::Fraction(BigRational::new(n, d)),
                decimal: Some(format_decimal(valeur, options.decimales)),
            };
        }
    }

    cellule_approchee(nom, valeur, options)
}

/* ------------------------ Pipeline ------------------------ */

/// Tableau des six rapports pour l'angle A décrit par `entree`.
pub fn tableau_rapports(entree: &Entree, options: Options) -> TableauRapports {
    match *entree {
        Entree::ParAngle { degres } => {
            let rapports = rapports_depuis_angle(degres);

            let cellules = NomRapport::TOUS.map(|nom| {
                // 1) table des angles remarquables
                match table_pour(degres, nom) {
                    Some(ValeurTable::Indefini) => return cellule_indefinie(nom),
                    Some(ValeurTable::Exacte(e)) => {
                        let decimal = rapports
                            .get(nom)
                            .valeur()
                            .map(|v| format_decimal(v, options.decimales));
                        return Cellule {
                            nom,
                            affichage: Affichage::Exacte(e),
                            decimal,
                        };
                    }
                    None => {}
                }

                // 2) hors table : fraction continue sur la valeur flottante
                match rapports.get(nom) {
                    Rapport::Indefini => cellule_indefinie(nom),
                    Rapport::Valeur(v) => cellule_approchee(nom, v, options),
                }
            });

            TableauRapports {
                degres,
                rapports,
                cellules,
            }
        }

        Entree::ParCotes {
            oppose,
            adjacent,
            hypotenuse,
        } => {
            let rapports = rapports_depuis_cotes(oppose, adjacent, hypotenuse);
            let (degres, _) = angles_depuis_cotes(oppose, adjacent);

            // numérateur/dénominateur de chaque rapport (mêmes définitions
            // que rapports_depuis_cotes)
            let quotient = |nom: NomRapport| -> (f64, f64) {
                use NomRapport::*;
                match nom {
                    Sin => (oppose, hypotenuse),
                    Cos => (adjacent, hypotenuse),
                    Tan => (oppose, adjacent),
                    Cot => (adjacent, oppose),
                    Sec => (hypotenuse, adjacent),
                    Csc => (hypotenuse, oppose),
                }
            };

            let cellules = NomRapport::TOUS.map(|nom| {
                let (num, den) = quotient(nom);
                cellule_depuis_quotient(nom, rapports.get(nom), num, den, options)
            });

            TableauRapports {
                degres,
                rapports,
                cellules,
            }
        }
    }
}

/// Tableau de l'angle complémentaire B : angle 90 − A, ou cathètes échangées.
pub fn tableau_complementaire(entree: &Entree, options: Options) -> TableauRapports {
    let complementaire = match *entree {
        Entree::ParAngle { degres } => Entree::ParAngle {
            degres: 90.0 - degres,
        },
        Entree::ParCotes {
            oppose,
            adjacent,
            hypotenuse,
        } => Entree::ParCotes {
            oppose: adjacent,
            adjacent: oppose,
            hypotenuse,
        },
    };
    tableau_rapports(&complementaire, options)
}

/* ------------------------ tests ------------------------ */
