use crate::request::MaterialRequest;
use eco_types::{MaterialResolution, ResolutionTier};

/// One level of the material cascade.
///
/// Returning `None` passes the request on to the next tier.
pub trait MaterialStrategy: Send + Sync {
    fn tier(&self) -> ResolutionTier;

    fn name(&self) -> &str;

    fn resolve(&self, request: &MaterialRequest<'_>) -> Option<MaterialResolution>;
}
