//! Lazily fetched images, cached by source string.

use fnv::FnvHashMap;

/// Host side of image fetching.
pub trait ImageLoader {
    type Handle;

    /// Begin fetching `src`. Called at most once per distinct source.
    fn fetch(&mut self, src: &str) -> Self::Handle;

    /// Loaded and drawable. Pending or failed images are simply skipped.
    fn is_ready(&self, handle: &Self::Handle) -> bool;
}

pub struct ImageCache<L: ImageLoader> {
    loader: L,
    entries: FnvHashMap<String, L::Handle>,
}

impl<L: ImageLoader> ImageCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            entries: FnvHashMap::default(),
        }
    }

    pub fn get_or_fetch(&mut self, src: &str) -> &L::Handle {
        if !self.entries.contains_key(src) {
            log::debug!("[images] fetching {}", src);
            let handle = self.loader.fetch(src);
            self.entries.insert(src.to_string(), handle);
        }
        &self.entries[src]
    }

    /// The handle for `src` if it is ready to draw, fetching it on first use.
    pub fn ready(&mut self, src: &str) -> Option<&L::Handle> {
        self.get_or_fetch(src);
        let handle = self.entries.get(src)?;
        self.loader.is_ready(handle).then_some(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}
