use crate::catalog::ProjectRecord;

/// Part of the open overlay a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRegion {
    Backdrop,
    Panel,
}

/// Which project, if any, has its detail overlay open.
///
/// The state only borrows from the catalog. Selecting while already open
/// swaps the displayed record without passing through `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure<'a> {
    #[default]
    Closed,
    Open(&'a ProjectRecord),
}

impl<'a> Disclosure<'a> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&'a ProjectRecord> {
        match self {
            Self::Closed => None,
            Self::Open(record) => Some(record),
        }
    }

    pub fn select(&mut self, record: &'a ProjectRecord) {
        log::debug!("disclosure: open {:?}", record.title);
        *self = Self::Open(record);
    }

    /// Returns whether the state changed.
    pub fn clear(&mut self) -> bool {
        if let Self::Open(record) = self {
            log::debug!("disclosure: close {:?}", record.title);
            *self = Self::Closed;
            true
        } else {
            false
        }
    }

    /// Escape closes an open overlay; every other key is ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.clear()
    }

    /// Backdrop clicks dismiss; clicks inside the panel never do.
    pub fn handle_click(&mut self, region: OverlayRegion) -> bool {
        region == OverlayRegion::Backdrop && self.clear()
    }
}

/// Suspends and restores background scrolling while an overlay is shown.
pub trait ScrollLock {
    fn lock(&self);
    fn release(&self);

    fn apply(&self, locked: bool) {
        if locked {
            self.lock()
        } else {
            self.release()
        }
    }
}

/// Scroll lock on the document body through its `overflow` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        let Some(body) = body else {
            log::warn!("no document body to set overflow on");
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("couldn't set body overflow: {e:?}");
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn release(&self) {
        Self::set_overflow("auto");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::catalog::{projects, ProjectDetails};

    #[derive(Default)]
    struct RecordingLock {
        calls: RefCell<Vec<bool>>,
    }

    impl ScrollLock for RecordingLock {
        fn lock(&self) {
            self.calls.borrow_mut().push(true);
        }

        fn release(&self) {
            self.calls.borrow_mut().push(false);
        }
    }

    fn record(title: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            tags: vec![],
            details: ProjectDetails {
                challenge: String::new(),
                solution: String::new(),
                results: String::new(),
                images: vec![],
            },
            link: None,
        }
    }

    #[test]
    fn test_starts_closed() {
        let d = Disclosure::default();
        assert_eq!(d, Disclosure::Closed);
        assert!(!d.is_open());
        assert!(d.selected().is_none());
    }

    #[test]
    fn test_select_and_swap() {
        let first = record("first");
        let second = record("second");
        let mut d = Disclosure::Closed;

        d.select(&first);
        assert_eq!(d, Disclosure::Open(&first));

        d.select(&second);
        assert_eq!(d.selected().map(|r| r.title.as_str()), Some("second"));
        assert!(d.is_open());
    }

    #[test]
    fn test_every_catalog_record_opens() {
        for project in projects() {
            let mut d = Disclosure::Closed;
            d.select(project);
            assert_eq!(d.selected(), Some(project));
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let only = record("only");
        let mut d = Disclosure::Closed;
        assert!(!d.clear());
        assert_eq!(d, Disclosure::Closed);

        d.select(&only);
        assert!(d.clear());
        assert!(!d.clear());
        assert_eq!(d, Disclosure::Closed);
    }

    #[test]
    fn test_escape_key() {
        let only = record("only");
        let mut d = Disclosure::Closed;
        assert!(!d.handle_key("Escape"));
        assert_eq!(d, Disclosure::Closed);

        d.select(&only);
        assert!(!d.handle_key("Enter"));
        assert!(d.is_open());
        assert!(d.handle_key("Escape"));
        assert_eq!(d, Disclosure::Closed);
    }

    #[test]
    fn test_click_routing() {
        let only = record("only");
        let mut d = Disclosure::Closed;
        assert!(!d.handle_click(OverlayRegion::Backdrop));

        d.select(&only);
        assert!(!d.handle_click(OverlayRegion::Panel));
        assert_eq!(d, Disclosure::Open(&only));
        assert!(d.handle_click(OverlayRegion::Backdrop));
        assert_eq!(d, Disclosure::Closed);
    }

    #[test]
    fn test_scroll_lock_follows_state() {
        let only = record("only");
        let lock = RecordingLock::default();
        let mut d = Disclosure::Closed;

        d.select(&only);
        lock.apply(d.is_open());
        d.handle_key("Escape");
        lock.apply(d.is_open());

        assert_eq!(*lock.calls.borrow(), vec![true, false]);
    }
}
