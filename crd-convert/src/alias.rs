//! Checks for the alias factor-1 contract

use crd_core::{UnitError, UnitResult};
use crd_units::AliasMapping;
use crate::converters::absolute_factor;

/// The reference unit must be the family's pivot and every base term must
/// be an SI unit, so reinterpreting a reference-unit value in base units
/// leaves the number unchanged.
pub fn verify_alias_mapping(mapping: &AliasMapping) -> UnitResult<()> {
    let pivot = mapping.family.si();
    if absolute_factor(mapping.reference, pivot)? != 1.0 {
        return Err(UnitError::invalid_alias(format!(
            "{} is not the pivot of {} ({})",
            mapping.reference, mapping.family, pivot
        )));
    }
    for term in mapping.base.terms() {
        if absolute_factor(term.unit, term.unit.si())? != 1.0 {
            return Err(UnitError::invalid_alias(format!(
                "base term {} of {} is not an SI unit",
                term, mapping.reference
            )));
        }
    }
    Ok(())
}

pub fn verify_alias_mappings() -> UnitResult<()> {
    AliasMapping::all().iter().try_for_each(verify_alias_mapping)
}
