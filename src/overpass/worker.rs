use crossbeam_channel::{bounded, Receiver};

use crate::errors::OverpassError;
use crate::types::Element;

use super::{OverpassClient, OverpassQuery};

/// Receiving side of a background fetch. Exactly one result ever arrives;
/// there is no cancellation and no second request behind it.
pub struct FetchHandle {
    rx: Receiver<Result<Vec<Element>, OverpassError>>,
}

impl FetchHandle {
    /// Non-blocking check, for a UI loop that polls once per frame.
    pub fn poll(&self) -> Option<Result<Vec<Element>, OverpassError>> {
        self.rx.try_recv().ok()
    }

    /// Blocks until the fetch finishes.
    pub fn wait(self) -> Result<Vec<Element>, OverpassError> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(OverpassError::Fetch("fetch worker disconnected".to_string())))
    }
}

/// Runs the session's single fetch off the UI thread and hands back the
/// channel to read it from.
pub fn fetch_in_background(client: OverpassClient, query: OverpassQuery) -> FetchHandle {
    let (tx, rx) = bounded(1);
    std::thread::spawn(move || {
        let _ = tx.send(client.fetch_elements(&query));
    });
    FetchHandle { rx }
}
