use crate::core::ImageLoader;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadStatus {
    Pending,
    Ready,
    Failed,
}

#[derive(Clone)]
pub struct BrowserImage {
    element: Option<web::HtmlImageElement>,
    status: Rc<Cell<LoadStatus>>,
}

impl BrowserImage {
    pub fn element(&self) -> Option<&web::HtmlImageElement> {
        self.element.as_ref()
    }
}

/// Fetches through `<img>` and waits on `decode()` so a ready image draws without jank.
#[derive(Default)]
pub struct BrowserImageLoader;

impl ImageLoader for BrowserImageLoader {
    type Handle = BrowserImage;

    fn fetch(&mut self, src: &str) -> BrowserImage {
        let status = Rc::new(Cell::new(LoadStatus::Pending));
        let element = match web::HtmlImageElement::new() {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[images] cannot create image for {}: {:?}", src, e);
                status.set(LoadStatus::Failed);
                return BrowserImage {
                    element: None,
                    status,
                };
            }
        };
        element.set_src(src);

        let decoding = element.decode();
        let status_done = status.clone();
        let src_owned = src.to_string();
        spawn_local(async move {
            match JsFuture::from(decoding).await {
                Ok(_) => status_done.set(LoadStatus::Ready),
                Err(e) => {
                    log::warn!("[images] failed to load {}: {:?}", src_owned, e);
                    status_done.set(LoadStatus::Failed);
                }
            }
        });

        BrowserImage {
            element: Some(element),
            status,
        }
    }

    fn is_ready(&self, handle: &BrowserImage) -> bool {
        handle.status.get() == LoadStatus::Ready && handle.element.is_some()
    }
}
