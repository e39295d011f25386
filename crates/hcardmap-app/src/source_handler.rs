use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use crate::source::CardSource;
use hcardmap_core::error::CoreError;

pub struct CardSourceHandler<T: CardSource + Clone> {
    pub source: T,
}

#[async_trait]
impl<T: CardSource + Clone + 'static> salvo::Handler for CardSourceHandler<T> {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let source: Arc<dyn CardSource> = Arc::new(self.source.clone());
        depot.inject(source);
    }
}

/// ## Summary
/// Retrieves the card source from the depot.
///
/// ## Errors
/// Returns an error if no card source was injected.
pub fn get_source_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn CardSource>> {
    depot
        .obtain::<Arc<dyn CardSource>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Card source not found in depot").into())
}
