use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

static NEXT_MENU_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// A handle to a rendered DOM node, addressed by its element id.
///
/// The node only exists once the renderer has mounted it, so resolving the
/// handle may find nothing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NodeRef {
    id: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The two nodes the user menu hit-tests document clicks against.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MenuTargets {
    pub trigger: NodeRef,
    pub menu: NodeRef,
}

impl MenuTargets {
    /// Handles with ids unique to one menu instance.
    pub fn unique() -> Self {
        let n = NEXT_MENU_INSTANCE.fetch_add(1, Ordering::Relaxed);
        Self {
            trigger: NodeRef::new(format!("user-menu-trigger-{n}")),
            menu: NodeRef::new(format!("user-menu-popover-{n}")),
        }
    }
}
