//! Async task management for non-blocking catalog requests.
//!
//! Fetches run in background tasks while the UI keeps rendering. Results
//! come back to the main event loop as [`ApiMessage`]s over a tokio channel:
//! 1. The app records a pending operation (e.g. a page load ticket)
//! 2. The main loop hands it to [`TaskSpawner`], which spawns a tokio task
//! 3. The task sends an `ApiMessage` when it completes
//! 4. The main loop polls the channel with `try_recv()` and applies results

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{Artwork, ArtworkPage, Catalog};
use crate::controller::{collect_first, PageTicket};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// A page load finished.
    PageFetched {
        ticket: PageTicket,
        result: Result<ArtworkPage, String>,
    },

    /// The pages for a bulk selection have been collected.
    BulkSelectFetched {
        requested: usize,
        artworks: Vec<Artwork>,
    },
}

/// Spawns background tasks for catalog requests.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
    catalog: Arc<dyn Catalog>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender and catalog.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>, catalog: Arc<dyn Catalog>) -> Self {
        Self { tx, catalog }
    }

    /// Spawn a task to fetch the page described by `ticket`.
    pub fn spawn_fetch_page(&self, ticket: PageTicket) {
        let tx = self.tx.clone();
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move {
            let result = catalog
                .fetch_page(ticket.window)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(ApiMessage::PageFetched { ticket, result });
        });
    }

    /// Spawn a task to collect the first `requested` artworks.
    pub fn spawn_bulk_select(&self, requested: usize) {
        let tx = self.tx.clone();
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move {
            let artworks = collect_first(catalog.as_ref(), requested).await;
            debug!(requested, collected = artworks.len(), "Bulk selection collected");
            let _ = tx.send(ApiMessage::BulkSelectFetched {
                requested,
                artworks,
            });
        });
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel(
    catalog: Arc<dyn Catalog>,
) -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeCatalog;
    use crate::controller::SelectionController;

    #[tokio::test]
    async fn test_spawn_fetch_page() {
        let catalog = Arc::new(FakeCatalog::new(30));
        let (mut rx, spawner) = create_task_channel(catalog.clone());
        let mut controller = SelectionController::new();
        let ticket = controller.begin_page_load(2);

        spawner.spawn_fetch_page(ticket);

        match rx.recv().await {
            Some(ApiMessage::PageFetched { ticket: got, result }) => {
                assert_eq!(got, ticket);
                let page = result.unwrap();
                assert_eq!(page.data.first().map(|a| a.id), Some(21));
            }
            other => panic!("Unexpected message: {:?}", other),
        }
        assert_eq!(catalog.requested_pages(), vec![3]);
    }

    #[tokio::test]
    async fn test_spawn_fetch_page_error_is_stringified() {
        let catalog = Arc::new(FakeCatalog::new(30).failing_page(1));
        let (mut rx, spawner) = create_task_channel(catalog);
        let mut controller = SelectionController::new();

        spawner.spawn_fetch_page(controller.begin_page_load(0));

        match rx.recv().await {
            Some(ApiMessage::PageFetched { result: Err(e), .. }) => {
                assert!(e.contains("page 1"));
            }
            other => panic!("Unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_bulk_select() {
        let catalog = Arc::new(FakeCatalog::new(100));
        let (mut rx, spawner) = create_task_channel(catalog.clone());

        spawner.spawn_bulk_select(15);

        match rx.recv().await {
            Some(ApiMessage::BulkSelectFetched {
                requested,
                artworks,
            }) => {
                assert_eq!(requested, 15);
                assert_eq!(artworks.len(), 15);
            }
            other => panic!("Unexpected message: {:?}", other),
        }
        assert_eq!(catalog.requested_pages(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_spawn_bulk_select_huge_count_reports_back() {
        let catalog = Arc::new(FakeCatalog::new(12));
        let (mut rx, spawner) = create_task_channel(catalog);

        spawner.spawn_bulk_select(usize::MAX);

        match rx.recv().await {
            Some(ApiMessage::BulkSelectFetched {
                requested,
                artworks,
            }) => {
                assert_eq!(requested, usize::MAX);
                assert_eq!(artworks.len(), 12);
            }
            other => panic!("Unexpected message: {:?}", other),
        }
    }
}
