// ============================================================================
// File: src/server.rs
// ----------------------------------------------------------------------------
// HTTP/1.1 server: accepts connections and hands each request to a Router.
// ============================================================================

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{debug, info, warn};
use tokio::net::{TcpListener, TcpStream};

use crate::api::Router;
use crate::error::ServerError;

/// Pause after a failed accept, e.g. when out of file descriptors
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A bound listener plus the router serving it
///
/// Each connection runs on its own tokio task; a failing connection or
/// request never stops the accept loop.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind `addr` and prepare to serve `router`
    pub async fn bind(addr: SocketAddr, router: Router) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self { listener, router })
    }

    /// Address actually bound, useful when binding port 0
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until the process is stopped
    pub async fn serve(self) -> Result<(), ServerError> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` completes
    ///
    /// Stops accepting new connections once `shutdown` resolves; connections
    /// already accepted are left to finish on their own tasks.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        info!("USB Loader server listening on http://{}", self.local_addr()?);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("Shutdown requested, no longer accepting connections");
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => self.spawn_connection(stream, peer),
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                    }
                },
            }
        }
    }

    fn spawn_connection(&self, stream: TcpStream, peer: SocketAddr) {
        debug!("Accepted connection from {}", peer);
        let router = self.router.clone();

        tokio::spawn(async move {
            let service = service_fn(move |request| {
                let router = router.clone();
                async move { Ok::<_, Infallible>(router.handle(request).await) }
            });

            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                debug!("Connection from {} closed with error: {}", peer, e);
            }
        });
    }
}
