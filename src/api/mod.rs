// ============================================================================
// File: src/api/mod.rs
// ----------------------------------------------------------------------------
// HTTP routing for the disk API.
//
// `Router` is built explicitly from configuration and a command runner and
// handed to the server; there is no global route registration. Blocking
// tool invocations run on tokio's blocking pool so a slow `fdisk` or
// `mount` only holds up its own request.
// ============================================================================

mod response;
mod static_files;


pub use response::{ApiResponse, ResponseBody, plain_text};
pub use static_files::StaticFiles;

use std::sync::Arc;

use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Limited};
use hyper::body::Body;
use log::{debug, error, warn};

use crate::command::CommandRunner;
use crate::config::ServerConfig;
use crate::error::InventoryError;
use crate::inventory::{DeviceRecord, InventoryService};
use crate::mount::{MountOrchestrator, MountOutcome, MountRequest};

/// Inventory route
pub const DISKS_ROUTE: &str = "/api/disks";

/// Mount route
pub const MOUNT_ROUTE: &str = "/api/mount";

/// Largest mount request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Request dispatcher shared by all connections
#[derive(Debug, Clone)]
pub struct Router {
    inventory: Arc<InventoryService>,
    mounter: Arc<MountOrchestrator>,
    static_files: Arc<StaticFiles>,
}

impl Router {
    /// Build a router from configuration, running tools through `runner`
    pub fn new(config: &ServerConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            inventory: Arc::new(InventoryService::new(
                Arc::clone(&runner),
                config.commands.listing.clone(),
            )),
            mounter: Arc::new(MountOrchestrator::from_commands(runner, &config.commands)),
            static_files: Arc::new(StaticFiles::new(config.static_dir.clone())),
        }
    }

    /// Dispatch one request
    pub async fn handle<B>(&self, request: Request<B>) -> Response<ResponseBody>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        debug!("{} {}", method, path);

        match path.as_str() {
            DISKS_ROUTE if method == Method::GET => self.list_disks().await,
            MOUNT_ROUTE if method == Method::POST => self.mount_disk(request.into_body()).await,
            DISKS_ROUTE | MOUNT_ROUTE => {
                plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            _ => self.static_files.serve(&method, &path).await,
        }
    }

    async fn list_disks(&self) -> Response<ResponseBody> {
        let inventory = Arc::clone(&self.inventory);
        let listed = tokio::task::spawn_blocking(move || inventory.list_devices())
            .await
            .unwrap_or_else(|e| {
                error!("Disk listing task failed: {}", e);
                Err(InventoryError::Aborted(e.to_string()))
            });

        match listed {
            Ok(devices) => {
                ApiResponse::ok("Disk information retrieved successfully", devices).into_response()
            }
            Err(e) => ApiResponse::<Vec<DeviceRecord>>::failure(format!(
                "Failed to get disk information: {e}"
            ))
            .into_response(),
        }
    }

    async fn mount_disk<B>(&self, body: B) -> Response<ResponseBody>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let request = match read_mount_request(body).await {
            Ok(request) => request,
            Err(message) => {
                warn!("Rejected mount request: {}", message);
                return ApiResponse::<()>::failure(format!("Invalid request body: {message}"))
                    .into_response();
            }
        };

        let mounter = Arc::clone(&self.mounter);
        let outcome = tokio::task::spawn_blocking(move || mounter.mount(&request))
            .await
            .unwrap_or_else(|e| {
                error!("Mount task failed: {}", e);
                MountOutcome::failed(format!("Mount failed: {e}"))
            });

        ApiResponse::from(outcome).into_response()
    }
}

async fn read_mount_request<B>(body: B) -> Result<MountRequest, String>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bytes = Limited::new(body, MAX_BODY_BYTES)
        .collect()
        .await
        .map_err(|e| e.to_string())?
        .to_bytes();
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}
