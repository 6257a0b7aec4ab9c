use std::sync::{
    Once,
    atomic::{AtomicBool, Ordering},
};

use log::{info, warn};

static RECEIVED_CTRL_C: AtomicBool = AtomicBool::new(false);
static INSTALL_HANDLER: Once = Once::new();

/// Installs a Ctrl-C / SIGTERM handler that only raises a flag; long running loops poll
/// [`received_ctrl_c`] and stop scheduling new work. Calling it multiple times is fine.
pub fn initialize() {
    INSTALL_HANDLER.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| {
            info!("Received termination signal");
            RECEIVED_CTRL_C.store(true, Ordering::Release);
        }) {
            warn!("Could not install signal handler: {e}");
        }
    });
}

pub fn received_ctrl_c() -> bool {
    RECEIVED_CTRL_C.load(Ordering::Acquire)
}
