pub mod category_service;
pub mod product_service;
pub mod wishlist_service;

use crate::error::{AppError, AppResult};

/// Trim `raw`, rejecting names that are empty afterwards.
pub(crate) fn required_name(raw: &str, entity: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        tracing::warn!(entity, "blank name rejected");
        return Err(AppError::bad_request(format!("{entity} name is required.")));
    }
    Ok(name.to_string())
}

/// Path and body ids must agree on update.
pub(crate) fn ensure_ids_match(entity: &str, path_id: i32, body_id: i32) -> AppResult<()> {
    if path_id != body_id {
        tracing::warn!(entity, path_id, body_id, "id mismatch");
        return Err(AppError::bad_request(format!(
            "{entity} ID mismatch. Provided ID: {path_id}, {entity} ID: {body_id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(required_name("  Birthday ", "Wishlist").unwrap(), "Birthday");
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = required_name("   ", "Category").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Category name is required."));
    }

    #[test]
    fn mismatched_ids_are_rejected() {
        assert!(ensure_ids_match("Product", 3, 3).is_ok());
        let err = ensure_ids_match("Product", 3, 4).unwrap_err();
        assert!(
            matches!(err, AppError::BadRequest(msg) if msg == "Product ID mismatch. Provided ID: 3, Product ID: 4")
        );
    }
}
