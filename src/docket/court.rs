//! Mapping between PACER court ids and CourtListener court ids.
//!
//! Most courts share an id in both systems. The exceptions are listed here;
//! anything not listed maps to itself.

/// Translate a PACER court id into the CourtListener id.
pub fn map_pacer_to_cl_id(pacer_id: &str) -> &str {
    match pacer_id {
        // Arizona Bankruptcy Court
        "azb" => "arb",
        // Court of Federal Claims
        "cofc" => "uscfc",
        // Nebraska Bankruptcy
        "neb" => "nebraskab",
        "nysb-mega" => "nysb",
        other => other,
    }
}

/// Translate a CourtListener court id into the PACER id.
///
/// `nysb` is not reversed: it is a real PACER id of its own.
pub fn map_cl_to_pacer_id(cl_id: &str) -> &str {
    match cl_id {
        "arb" => "azb",
        "uscfc" => "cofc",
        "nebraskab" => "neb",
        other => other,
    }
}
