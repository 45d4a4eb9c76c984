use std::collections::BTreeMap;

use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ListenerKind {
    Scroll,
    OutsideClick,
}

// ListenerRegistry
//
// holds at most one live handle per listener kind.  handles are expected to
// deregister themselves on drop (gloo's EventListener does), so releasing is
// just dropping them
#[derive(Debug)]
pub struct ListenerRegistry<H> {
    handles: BTreeMap<ListenerKind, H>,
}

impl<H> Default for ListenerRegistry<H> {
    fn default() -> Self {
        ListenerRegistry {
            handles: BTreeMap::new(),
        }
    }
}

impl<H> ListenerRegistry<H> {
    // make is only called when nothing is registered for kind; returns
    // whether a new handle was created
    pub fn register(&mut self, kind: ListenerKind, make: impl FnOnce() -> H) -> bool {
        if self.handles.contains_key(&kind) {
            return false;
        }

        debug!({ kind = ?kind }, "registering listener");
        self.handles.insert(kind, make());
        true
    }

    pub fn release_all(&mut self) {
        debug!({ count = self.handles.len() }, "releasing listeners");
        self.handles.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn registers_each_kind_once() {
        let mut registry = ListenerRegistry::default();
        let mut made = 0;

        assert!(registry.register(ListenerKind::Scroll, || made += 1));
        assert!(!registry.register(ListenerKind::Scroll, || made += 1));
        assert!(registry.register(ListenerKind::OutsideClick, || made += 1));

        assert_eq!(made, 2);
    }

    #[test]
    fn release_all_drops_handles() {
        let dropped = Rc::new(Cell::new(0));
        let mut registry = ListenerRegistry::default();

        registry.register(ListenerKind::Scroll, || Handle(dropped.clone()));
        registry.register(ListenerKind::OutsideClick, || Handle(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        registry.release_all();
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn dropping_registry_releases() {
        let dropped = Rc::new(Cell::new(0));
        {
            let mut registry = ListenerRegistry::default();
            registry.register(ListenerKind::Scroll, || Handle(dropped.clone()));
        }
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn can_register_again_after_release() {
        let mut registry: ListenerRegistry<()> = ListenerRegistry::default();

        registry.register(ListenerKind::Scroll, || ());
        registry.release_all();
        assert!(registry.register(ListenerKind::Scroll, || ()));
    }
}
