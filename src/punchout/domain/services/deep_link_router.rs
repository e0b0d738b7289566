use crate::punchout::domain::model::{
    entities::punchout_claims::PunchoutClaims, enums::redirect_target::RedirectTarget,
};

/// Picks where a verified buyer lands inside the storefront.
///
/// A `sku` claim is a lookup key, not a catalog handle (it may be a supplier
/// part number or a variant id), and no SKU-to-handle resolution exists at
/// this layer, so SKU deep links land on the catalog entry point too.
/// Locale prefixing is left to the storefront's own routing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeepLinkRouter;

impl DeepLinkRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, claims: &PunchoutClaims) -> RedirectTarget {
        match claims.sku() {
            Some(sku) => {
                tracing::info!(
                    sku,
                    company_id = claims.company_id().value(),
                    "sku deep link requested; no catalog handle resolution available, using catalog entry point"
                );
                RedirectTarget::Store
            }
            None => RedirectTarget::Store,
        }
    }
}
