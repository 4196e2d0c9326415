//! Depot helper extensions.

use std::any::Any;

use salvo::flash::FlashDepotExt;
use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

/// Read the one-shot status message set before the previous redirect.
pub(crate) trait DepotFlashExt {
    fn incoming_message(&mut self) -> Option<String>;
}

impl DepotFlashExt for Depot {
    fn incoming_message(&mut self) -> Option<String> {
        self.incoming_flash()
            .and_then(|flash| flash.iter().next())
            .map(|message| message.value.clone())
    }
}
