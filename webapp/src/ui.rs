//! Browser side of the dispatcher's ui seam.

use log::{error, warn};
use rede_shared::{Notice, Route, Ui};

use crate::components::notice;
use crate::dom;

pub struct BrowserUi;

impl Ui for BrowserUi {
    async fn notify(&self, notice: Notice) {
        notice::show(notice).await;
    }

    fn confirm(&self, prompt: &str) -> bool {
        dom::window()
            .and_then(|w| w.confirm_with_message(prompt))
            .unwrap_or_else(|err| {
                warn!("confirm dialog failed: {err:?}");
                false
            })
    }

    fn navigate(&self, route: &Route) {
        let path = route.path();
        if let Err(err) = dom::window().and_then(|w| w.location().set_href(&path)) {
            error!("navigation to {path} failed: {err:?}");
        }
    }
}
