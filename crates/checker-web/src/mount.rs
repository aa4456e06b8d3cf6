//! Root Mount

use checker_core::{Result, ShellError};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;

/// Marker attribute set on a container once the app is attached
const MOUNTED_ATTR: &str = "data-shell-mounted";

/// Attach [`App`] to the element with the given id.
///
/// A missing container leaves the page untouched. Each container takes the
/// app at most once.
pub fn mount_app(container_id: &str) -> Result<()> {
    let container = document()
        .get_element_by_id(container_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ShellError::MissingContainer(container_id.to_string()))?;

    if container.has_attribute(MOUNTED_ATTR) {
        return Err(ShellError::AlreadyMounted);
    }
    container.set_attribute(MOUNTED_ATTR, "").map_err(|cause| {
        tracing::error!("setAttribute on #{} failed: {:?}", container_id, cause);
        ShellError::Dom(format!("cannot mark #{container_id} as mounted: {cause:?}"))
    })?;

    tracing::info!("Mounting app into #{}", container_id);
    leptos::mount::mount_to(container, App).forget();

    Ok(())
}
