// src/lib.rs
//
// Calculatrice trigo — noyau exact du triangle rectangle
// ------------------------------------------------------
// Bibliothèque pure : pas d'E/S, pas d'état partagé, pas d'interface.
// Les consommateurs (rendu, formulaires, dessin) fournissent un angle en
// degrés OU trois côtés, et récupèrent :
// - les six rapports trigonométriques (valeur exacte, fraction, ou indéfini)
//   avec leur lecture décimale ;
// - un verdict Pythagore consultatif et les côtés/angles dérivés, avec leur
//   démarche.

pub mod noyau;

pub use noyau::approx::{approche_fraction, MAX_DENOMINATEUR_DEFAUT};
pub use noyau::eval::{
    tableau_complementaire, tableau_rapports, Affichage, Cellule, Entree, Options,
    TableauRapports,
};
pub use noyau::expr::Expr;
pub use noyau::format::{format_decimal, format_exact, format_fraction, format_radical};
pub use noyau::radical::{radical_depuis_f64, simplifie_racine, Radical};
pub use noyau::rapports::{
    rapports_complementaires, rapports_depuis_angle, rapports_depuis_cotes, Rapport, Rapports,
};
pub use noyau::triangle::{
    angles_depuis_cotes, cathete_depuis_hypotenuse, complement, hypotenuse_depuis_cathetes,
    verifie_angles, verifie_triangle, ComparaisonPythagore, DeriveCote, ErreurDerivation,
    VerdictAngles, VerdictTriangle,
};
pub use noyau::trig::{table_pour, valeur_exacte, AngleRemarquable, NomRapport, ValeurTable};
