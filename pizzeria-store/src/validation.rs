use crate::error::StoreError;

pub const MIN_PRICE: i32 = 1;
pub const MAX_PRICE: i32 = 30;

/// Checks that a restaurant pizza price lies within `MIN_PRICE..=MAX_PRICE`.
pub fn validate_price(price: i32) -> Result<i32, StoreError> {
    if (MIN_PRICE..=MAX_PRICE).contains(&price) {
        Ok(price)
    } else {
        Err(StoreError::InvalidPrice(price))
    }
}
