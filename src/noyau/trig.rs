// src/noyau/trig.rs
//
// Table des angles remarquables (valeurs trigonométriques exactes)
// ----------------------------------------------------------------
// - clef : degrés arrondis à 6 décimales, sur {0, 15, 30, 45, 60, 75, 90}
// - 7 angles × 6 rapports -> valeur exacte (Expr) ou Indefini
// - hors table : None (l'appelant retombe sur l'approximation rationnelle)
//
// Les entrées sont rationalisées (1/√3 -> √3/3, 4/(√6+√2) -> √6-√2) :
// même politique de rendu que le reste du noyau.
//
// Indéfinis = rapports dont le dénominateur définissant vaut 0 à cet angle :
// à 0° -> cot, csc (sin = 0) ; à 90° -> tan, sec (cos = 0).

use super::expr::Expr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleRemarquable {
    D0,
    D15,
    D30,
    D45,
    D60,
    D75,
    D90,
}

impl AngleRemarquable {
    /// Reconnaissance par degrés arrondis à 6 décimales.
    pub fn depuis_degres(degres: f64) -> Option<Self> {
        use AngleRemarquable::*;

        if !degres.is_finite() {
            return None;
        }
        let micro = (degres * 1e6).round();
        if !(0.0..=90e6).contains(&micro) {
            return None;
        }
        match micro as i64 {
            0 => Some(D0),
            15_000_000 => Some(D15),
            30_000_000 => Some(D30),
            45_000_000 => Some(D45),
            60_000_000 => Some(D60),
            75_000_000 => Some(D75),
            90_000_000 => Some(D90),
            _ => None,
        }
    }

    pub fn degres(self) -> f64 {
        use AngleRemarquable::*;
        match self {
            D0 => 0.0,
            D15 => 15.0,
            D30 => 30.0,
            D45 => 45.0,
            D60 => 60.0,
            D75 => 75.0,
            D90 => 90.0,
        }
    }

    pub const TOUS: [AngleRemarquable; 7] = {
        use AngleRemarquable::*;
        [D0, D15, D30, D45, D60, D75, D90]
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NomRapport {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
}

impl NomRapport {
    pub const TOUS: [NomRapport; 6] = {
        use NomRapport::*;
        [Sin, Cos, Tan, Cot, Sec, Csc]
    };

    pub fn nom(self) -> &'static str {
        use NomRapport::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Cot => "cot",
            Sec => "sec",
            Csc => "csc",
        }
    }
}

/// Issue d'une consultation de la table.
#[derive(Clone, Debug, PartialEq)]
pub enum ValeurTable {
    Exacte(Expr),
    Indefini,
}

/// Valeur exacte pour un angle remarquable et un rapport.
/// Pur, total sur le produit (angle, rapport) : table immuable.
pub fn valeur_exacte(angle: AngleRemarquable, rapport: NomRapport) -> ValeurTable {
    use AngleRemarquable::*;
    use NomRapport::*;

    // Constructeurs
    let zero = Expr::entier(0);
    let un = Expr::entier(1);
    let deux = Expr::entier(2);
    let moitie = Expr::rat(1, 2);

    let sqrt2 = Expr::racine(2);
    let sqrt3 = Expr::racine(3);

    // (p/q)·√n : forme canonique des coefficients de radicaux
    let coeff_racine = |p: i64, q: i64, n: i64| {
        Expr::Mul(Box::new(Expr::rat(p, q)), Box::new(Expr::racine(n)))
    };
    let sqrt2_sur_2 = || coeff_racine(1, 2, 2);
    let sqrt3_sur_2 = || coeff_racine(1, 2, 3);
    let sqrt3_sur_3 = || coeff_racine(1, 3, 3);
    let deux_sqrt3_sur_3 = || coeff_racine(2, 3, 3);

    // (√6 ± √2) et (√6 ± √2)/4 (sin/cos de 15° et 75°)
    let s6_plus_s2 = || Expr::Add(Box::new(Expr::racine(6)), Box::new(Expr::racine(2)));
    let s6_moins_s2 = || Expr::Sub(Box::new(Expr::racine(6)), Box::new(Expr::racine(2)));
    let s6_plus_s2_sur_4 = || Expr::Div(Box::new(s6_plus_s2()), Box::new(Expr::entier(4)));
    let s6_moins_s2_sur_4 = || Expr::Div(Box::new(s6_moins_s2()), Box::new(Expr::entier(4)));

    // 2 ± √3 (tan/cot de 15° et 75°)
    let deux_plus_sqrt3 = || Expr::Add(Box::new(Expr::entier(2)), Box::new(Expr::racine(3)));
    let deux_moins_sqrt3 = || Expr::Sub(Box::new(Expr::entier(2)), Box::new(Expr::racine(3)));

    let v = ValeurTable::Exacte;

    match (angle, rapport) {
        // ---- 0° : sin = 0 -> cot, csc indéfinis ----
        (D0, Sin) => v(zero),
        (D0, Cos) => v(un),
        (D0, Tan) => v(zero),
        (D0, Cot) => ValeurTable::Indefini,
        (D0, Sec) => v(un),
        (D0, Csc) => ValeurTable::Indefini,

        // ---- 15° ----
        (D15, Sin) => v(s6_moins_s2_sur_4()),
        (D15, Cos) => v(s6_plus_s2_sur_4()),
        (D15, Tan) => v(deux_moins_sqrt3()),
        (D15, Cot) => v(deux_plus_sqrt3()),
        // sec(15°) = 4/(√6+√2) = √6-√2 ; csc(15°) = 4/(√6-√2) = √6+√2
        (D15, Sec) => v(s6_moins_s2()),
        (D15, Csc) => v(s6_plus_s2()),

        // ---- 30° ----
        (D30, Sin) => v(moitie),
        (D30, Cos) => v(sqrt3_sur_2()),
        (D30, Tan) => v(sqrt3_sur_3()),
        (D30, Cot) => v(sqrt3),
        (D30, Sec) => v(deux_sqrt3_sur_3()),
        (D30, Csc) => v(deux),

        // ---- 45° ----
        (D45, Sin) => v(sqrt2_sur_2()),
        (D45, Cos) => v(sqrt2_sur_2()),
        (D45, Tan) => v(un),
        (D45, Cot) => v(un),
        (D45, Sec) => v(sqrt2.clone()),
        (D45, Csc) => v(sqrt2),

        // ---- 60° ----
        (D60, Sin) => v(sqrt3_sur_2()),
        (D60, Cos) => v(moitie),
        (D60, Tan) => v(sqrt3),
        (D60, Cot) => v(sqrt3_sur_3()),
        (D60, Sec) => v(deux),
        (D60, Csc) => v(deux_sqrt3_sur_3()),

        // ---- 75° ----
        (D75, Sin) => v(s6_plus_s2_sur_4()),
        (D75, Cos) => v(s6_moins_s2_sur_4()),
        (D75, Tan) => v(deux_plus_sqrt3()),
        (D75, Cot) => v(deux_moins_sqrt3()),
        // sec(75°) = 4/(√6-√2) = √6+√2 ; csc(75°) = 4/(√6+√2) = √6-√2
        (D75, Sec) => v(s6_plus_s2()),
        (D75, Csc) => v(s6_moins_s2()),

        // ---- 90° : cos = 0 -> tan, sec indéfinis ----
        (D90, Sin) => v(un),
        (D90, Cos) => v(zero),
        (D90, Tan) => ValeurTable::Indefini,
        (D90, Cot) => v(zero),
        (D90, Sec) => ValeurTable::Indefini,
        (D90, Csc) => v(un),
    }
}

/// Consultation directe par degrés : None = hors table (angle non remarquable).
pub fn table_pour(degres: f64, rapport: NomRapport) -> Option<ValeurTable> {
    AngleRemarquable::depuis_degres(degres).map(|a| valeur_exacte(a, rapport))
}

/* ------------------------ tests ------------------------ */
