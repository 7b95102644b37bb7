pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with [`ErrorKind::NoCurrentItem`](crate::error::ErrorKind::NoCurrentItem)
/// when the predicate does not hold.
///
/// The first argument names the operation that required a current item.
#[macro_export]
macro_rules! verify_current {
    ($operation:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_current(result, $operation)?;
    }};
}

#[inline]
pub fn verify_current(has_current: bool, operation: &str) -> Result<()> {
    if has_current {
        Ok(())
    } else {
        no_current_item(operation)
    }
}

#[cold]
pub fn no_current_item(operation: &str) -> Result<()> {
    Err(crate::error::ErrorKind::NoCurrentItem {
        operation: operation.to_string(),
    }
    .into())
}
