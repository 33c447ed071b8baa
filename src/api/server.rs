use crate::api::routes;
use crate::config::SharedConfig;
use crate::txt_store::DynTxtStore;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub txt_store: DynTxtStore,
}

/// Bind the HTTP API to [`Config::api_bind_addr`][crate::config::Config::api_bind_addr].
///
/// # Errors
///
/// Returns the underlying [`hyper::Error`] if the address can't be bound.
pub fn new(
    config: SharedConfig,
    txt_store: DynTxtStore,
) -> hyper::Result<impl Future<Output = hyper::Result<()>>> {
    let builder = axum::Server::try_bind(&config.api_bind_addr)?;
    Ok(builder.serve(routes::new(AppState { config, txt_store }).into_make_service()))
}
