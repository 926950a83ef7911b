use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{Res, api, error::Error, types::PkceToken};

/// Serves `/callback` on `addr` until the process exits.
pub async fn start_api_server(addr: &str, state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let app = Router::new().route("/callback", get(api::callback).layer(Extension(state)));

    let addr = SocketAddr::from_str(addr)
        .map_err(|e| Error::Config(format!("invalid SERVER_ADDRESS '{}': {}", addr, e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
