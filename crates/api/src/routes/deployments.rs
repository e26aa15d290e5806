//! Tenant deployment addressing endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tenantgate_shared::{AddressCandidates, DeploymentId};

use crate::error::ApiResult;
use crate::routing::{tenant_url_for, SelectAddress};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeploymentUrlResponse {
    pub deployment_id: DeploymentId,
    /// Direct address built from the configured domain
    pub tenant_url: String,
    /// Address to show the client (tunnel preferred over preview)
    pub display_url: String,
}

/// Resolve the URLs of a deployment
///
/// `preview_url` defaults to the tenant URL; a non-empty `tunnel_url` wins.
pub async fn get_deployment_url(
    State(state): State<AppState>,
    Path(deployment_id): Path<DeploymentId>,
    Query(candidates): Query<AddressCandidates>,
) -> ApiResult<Json<DeploymentUrlResponse>> {
    let tenant_url = tenant_url_for(&state.config.domain, &deployment_id)?.to_string();

    let candidates = AddressCandidates {
        preview_url: candidates
            .preview_url
            .filter(|p| !p.is_empty())
            .or_else(|| Some(tenant_url.clone())),
        tunnel_url: candidates.tunnel_url,
    };
    let display_url = candidates.select();

    tracing::debug!(
        deployment_id = %deployment_id,
        tenant_url = %tenant_url,
        display_url = %display_url,
        "Resolved deployment address"
    );

    Ok(Json(DeploymentUrlResponse {
        deployment_id,
        tenant_url,
        display_url,
    }))
}
