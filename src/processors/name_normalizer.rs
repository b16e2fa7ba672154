use crate::utils::constants::HD_NAME_PREFIX;

/// Bayer abbreviations as they appear in the HYG `BayerFlamsteed` column
const GREEK_LETTERS: [(&str, &str); 24] = [
    ("Alp", "α"),
    ("Bet", "β"),
    ("Gam", "γ"),
    ("Del", "δ"),
    ("Eps", "ε"),
    ("Zet", "ζ"),
    ("Eta", "η"),
    ("The", "θ"),
    ("Iot", "ι"),
    ("Kap", "κ"),
    ("Lam", "λ"),
    ("Mu", "μ"),
    ("Nu", "ν"),
    ("Xi", "ξ"),
    ("Omi", "ο"),
    ("Pi", "π"),
    ("Rho", "ρ"),
    ("Sig", "σ"),
    ("Tau", "τ"),
    ("Ups", "υ"),
    ("Phi", "φ"),
    ("Chi", "χ"),
    ("Psi", "ψ"),
    ("Ome", "ω"),
];

/// Strip the Flamsteed number from a Bayer/Flamsteed designation.
///
/// Every digit run becomes a single space. When that leaves a separate token
/// ("24Alp" -> " Alp", "9Alp CMa" -> " Alp CMa") the spaced form is kept,
/// otherwise the designation is returned as given ("Alp", "Alp2", "24").
/// Runs of spaces are collapsed and the result is trimmed.
///
/// # Examples
/// ```
/// use wellknown_catalog::processors::normalize_bayer_flamsteed;
///
/// assert_eq!(normalize_bayer_flamsteed("24Alp"), "Alp");
/// assert_eq!(normalize_bayer_flamsteed("Alp2"), "Alp2");
/// ```
pub fn normalize_bayer_flamsteed(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut in_digits = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                stripped.push(' ');
                in_digits = true;
            }
        } else {
            stripped.push(c);
            in_digits = false;
        }
    }

    // Trailing digits stay glued to their letter ("Alp2" is alpha-2)
    let candidate = stripped.trim_end();
    let source = if candidate.contains(' ') { candidate } else { raw };

    collapse_spaces(source)
}

fn collapse_spaces(s: &str) -> String {
    s.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Compose a DSO catalog identifier such as "M42" or "NGC1976"
pub fn catalog_id(prefix: &str, id: Option<&str>) -> String {
    format!("{}{}", prefix, id.unwrap_or(""))
}

/// Henry Draper name used in the catalog ("hd48915")
pub fn hd_name(hd: &str) -> String {
    format!("{}{}", HD_NAME_PREFIX, hd)
}

/// Greek symbol for a Bayer abbreviation, if it is one
pub fn greek_symbol(abbreviation: &str) -> Option<&'static str> {
    GREEK_LETTERS
        .iter()
        .find(|(abbrev, _)| *abbrev == abbreviation)
        .map(|(_, symbol)| *symbol)
}

/// Replace a leading Bayer abbreviation with its Greek symbol ("Alp CMa" -> "α CMa")
pub fn substitute_greek(designation: &str) -> String {
    let (first, rest) = match designation.split_once(' ') {
        Some((first, rest)) => (first, Some(rest)),
        None => (designation, None),
    };

    match (greek_symbol(first), rest) {
        (Some(symbol), Some(rest)) => format!("{} {}", symbol, rest),
        (Some(symbol), None) => symbol.to_string(),
        (None, _) => designation.to_string(),
    }
}
