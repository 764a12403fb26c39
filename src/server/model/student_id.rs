//! Sequential student identifier allocation.
//!
//! Student identifiers have the form `bc` + 5-digit zero-padded number
//! (`bc00001`, `bc00042`, ...). Fixed-width padding makes lexicographic and
//! numeric ordering agree, so the current maximum can be found with a single
//! descending sort on the stored string. The allocator itself is pure; the
//! service layer feeds it the most recently allocated identifier read from
//! the store immediately before insert.

use crate::server::error::internal::InternalError;

/// Prefix shared by every allocated student identifier.
pub const STUDENT_ID_PREFIX: &str = "bc";

/// Identifier allocated when no records exist yet.
pub const FIRST_STUDENT_ID: &str = "bc00001";

/// Derives the next student identifier from the current maximum.
///
/// With no existing records the fixed starting identifier is allocated.
/// Otherwise the numeric suffix of the current maximum is incremented by one
/// and re-padded to 5 digits. Padding is a formatting minimum, not a cap:
/// past `bc99999` the number simply widens (`bc100000`).
///
/// # Arguments
/// - `last` - The highest allocated identifier currently in the store, if any
///
/// # Returns
/// - `Ok(String)` - The next identifier in the sequence
/// - `Err(InternalError::MalformedStudentId)` - The stored maximum does not
///   parse as `bc` + digits, which means the collection holds corrupted data
pub fn next_student_id(last: Option<&str>) -> Result<String, InternalError> {
    let Some(last) = last else {
        return Ok(FIRST_STUDENT_ID.to_string());
    };

    let number = parse_student_number(last)?;

    Ok(format!("{}{:05}", STUDENT_ID_PREFIX, number + 1))
}

/// Extracts the numeric suffix of a stored student identifier.
///
/// # Arguments
/// - `id` - A stored identifier expected to match `bc` + digits
///
/// # Returns
/// - `Ok(u64)` - The parsed numeric suffix
/// - `Err(InternalError::MalformedStudentId)` - Prefix missing or suffix non-numeric
pub fn parse_student_number(id: &str) -> Result<u64, InternalError> {
    id.strip_prefix(STUDENT_ID_PREFIX)
        .and_then(|suffix| suffix.parse::<u64>().ok())
        .ok_or_else(|| InternalError::MalformedStudentId {
            value: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests allocation when no records exist yet.
    ///
    /// Expected: Ok with the fixed starting identifier
    #[test]
    fn allocates_first_id_on_empty_store() {
        assert_eq!(next_student_id(None).unwrap(), "bc00001");
    }

    /// Tests incrementing a mid-range maximum.
    ///
    /// Expected: Ok with the numeric suffix incremented by one
    #[test]
    fn increments_current_maximum() {
        assert_eq!(next_student_id(Some("bc00042")).unwrap(), "bc00043");
    }

    /// Tests that padding is preserved for small suffixes.
    ///
    /// Expected: Ok with the suffix still zero-padded to 5 digits
    #[test]
    fn keeps_fixed_width_padding() {
        assert_eq!(next_student_id(Some("bc00001")).unwrap(), "bc00002");
        assert_eq!(next_student_id(Some("bc00999")).unwrap(), "bc01000");
    }

    /// Tests allocation past the padded range.
    ///
    /// Expected: Ok with the number widened beyond 5 digits
    #[test]
    fn widens_past_padded_range() {
        assert_eq!(next_student_id(Some("bc99999")).unwrap(), "bc100000");
    }

    /// Tests a stored maximum with a non-numeric suffix.
    ///
    /// Expected: Err naming the corrupted value
    #[test]
    fn rejects_non_numeric_suffix() {
        let err = next_student_id(Some("bcXYZ42")).unwrap_err();
        assert_eq!(
            err,
            InternalError::MalformedStudentId {
                value: "bcXYZ42".to_string()
            }
        );
    }

    /// Tests a stored maximum missing the `bc` prefix.
    ///
    /// Expected: Err naming the corrupted value
    #[test]
    fn rejects_missing_prefix() {
        let err = next_student_id(Some("00042")).unwrap_err();
        assert_eq!(
            err,
            InternalError::MalformedStudentId {
                value: "00042".to_string()
            }
        );
    }
}
