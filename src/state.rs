//! Render loop lifecycle.
//!
//! The loop moves through exactly three states: `Uninitialized` before the
//! window and GPU resources exist, `Running` while frames are being drawn, and
//! `Terminated` after a close request. The scene payload is generic so the
//! teardown path can be exercised in tests with a drop-tracking double in
//! place of the real GPU-owning scene.

/// Lifecycle of the render loop. Resources exist only while `Running`.
#[derive(Debug)]
pub enum Lifecycle<S> {
    /// Before initialization; no resources exist yet.
    Uninitialized,
    /// The loop is live and owns the scene.
    Running(S),
    /// Shut down; all resources have been released. Terminal.
    Terminated,
}

impl<S> Lifecycle<S> {
    /// Start in `Uninitialized`.
    pub fn new() -> Self {
        Lifecycle::Uninitialized
    }

    /// Transition `Uninitialized → Running`, taking ownership of the scene.
    ///
    /// Ignored in any other state: winit can deliver `resumed` more than once,
    /// and a scene must never be created after shutdown.
    pub fn start(&mut self, scene: S) {
        if matches!(self, Lifecycle::Uninitialized) {
            *self = Lifecycle::Running(scene);
        }
    }

    /// Transition to `Terminated`, dropping the scene (and with it every GPU
    /// resource it owns) before the event loop returns.
    pub fn shut_down(&mut self) {
        *self = Lifecycle::Terminated;
    }

    /// Mutable access to the running scene, if any.
    pub fn scene_mut(&mut self) -> Option<&mut S> {
        match self {
            Lifecycle::Running(scene) => Some(scene),
            _ => None,
        }
    }

    /// True before `start` has been called.
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Lifecycle::Uninitialized)
    }

    /// True after `shut_down`.
    pub fn is_terminated(&self) -> bool {
        matches!(self, Lifecycle::Terminated)
    }
}

impl<S> Default for Lifecycle<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stands in for the GPU-owning scene and records when its resources are
    /// released.
    struct TrackedScene {
        released: Rc<RefCell<Vec<&'static str>>>,
        label: &'static str,
    }

    impl Drop for TrackedScene {
        fn drop(&mut self) {
            self.released.borrow_mut().push(self.label);
        }
    }

    #[test]
    fn close_request_releases_resources_before_loop_exit() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut lifecycle = Lifecycle::new();
        lifecycle.start(TrackedScene {
            released: Rc::clone(&released),
            label: "scene",
        });
        assert!(released.borrow().is_empty());

        // The close request path: shut_down runs before event_loop.exit(),
        // so the scene must already be gone here.
        lifecycle.shut_down();
        assert_eq!(*released.borrow(), vec!["scene"]);
        assert!(lifecycle.is_terminated());
    }

    #[test]
    fn start_is_ignored_after_shutdown() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut lifecycle = Lifecycle::new();
        lifecycle.shut_down();

        lifecycle.start(TrackedScene {
            released: Rc::clone(&released),
            label: "late",
        });
        // The late scene is dropped immediately, never run.
        assert_eq!(*released.borrow(), vec!["late"]);
        assert!(lifecycle.is_terminated());
    }

    #[test]
    fn repeated_resume_keeps_the_first_scene() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut lifecycle = Lifecycle::new();
        lifecycle.start(TrackedScene {
            released: Rc::clone(&released),
            label: "first",
        });
        lifecycle.start(TrackedScene {
            released: Rc::clone(&released),
            label: "second",
        });

        // Only the redundant scene was dropped.
        assert_eq!(*released.borrow(), vec!["second"]);
        assert!(lifecycle.scene_mut().is_some());
    }

    #[test]
    fn scene_access_follows_state() {
        let mut lifecycle: Lifecycle<u32> = Lifecycle::new();
        assert!(lifecycle.is_uninitialized());
        assert!(lifecycle.scene_mut().is_none());

        lifecycle.start(7);
        assert_eq!(lifecycle.scene_mut(), Some(&mut 7));

        lifecycle.shut_down();
        assert!(lifecycle.scene_mut().is_none());
    }
}
