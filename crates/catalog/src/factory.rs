//! Product factory: resolves catalog codes into base products.

use modshop_core::{AppContext, DomainError, DomainResult};

use crate::product::{Product, ProductCode};

/// The fixed product catalog.
///
/// Stateless; the type gives the construction side effect (a system log entry
/// per attempt) an explicit home.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

impl Catalog {
    /// Resolve `code` (matched case-insensitively) into a base product.
    ///
    /// Every attempt is recorded in the system log before resolution, unknown
    /// codes included. An unknown code is a recoverable `NotFound`, not a
    /// failure.
    pub fn create(ctx: &mut AppContext, code: &str) -> DomainResult<Product> {
        ctx.append_log(format!("Factory: creation of product '{code}'"));

        match ProductCode::parse(code) {
            Some(code) => Ok(Product::Base(code)),
            None => {
                tracing::debug!(code, "unknown product code");
                Err(DomainError::not_found())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_resolves_every_catalog_code() {
        let mut ctx = AppContext::new();

        for code in ProductCode::ALL {
            let product = Catalog::create(&mut ctx, code.as_str()).expect("known code");
            assert_eq!(product.code(), code);
            assert_eq!(product.base_price(), code.list_price());
        }
    }

    #[test]
    fn create_accepts_lowercase_codes() {
        let mut ctx = AppContext::new();

        let product = Catalog::create(&mut ctx, "mug").expect("known code");
        assert_eq!(product.code(), ProductCode::Mug);
        assert_eq!(product.description(), "Tazza");
    }

    #[test]
    fn create_rejects_unknown_codes_as_not_found() {
        let mut ctx = AppContext::new();

        let err = Catalog::create(&mut ctx, "POSTER").unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn create_logs_the_attempt_even_for_unknown_codes() {
        let mut ctx = AppContext::new();

        let _ = Catalog::create(&mut ctx, "TSHIRT");
        let _ = Catalog::create(&mut ctx, "POSTER");

        let messages: Vec<&str> = ctx
            .log()
            .entries()
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Factory: creation of product 'TSHIRT'",
                "Factory: creation of product 'POSTER'",
            ]
        );
    }
}
