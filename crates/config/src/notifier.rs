use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn FnMut()>;
type Slot = Rc<RefCell<Option<Callback>>>;

/// Synchronous change-notification registry.
///
/// Components that derive state from the configuration (theme mode, above
/// all) subscribe here; whoever reloads the config calls [`notify`] and
/// every live callback fires, in registration order, on the caller's
/// thread. There is no payload — subscribers re-read whatever they need.
///
/// Everything runs on the single UI thread, so the registry is plain
/// `Rc`/`RefCell` and deliberately not `Send`.
///
/// [`notify`]: ConfigNotifier::notify
#[derive(Default)]
pub struct ConfigNotifier {
    listeners: RefCell<Vec<Slot>>,
}

impl ConfigNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` and return its [`Listener`] guard.
    ///
    /// The registration lives exactly as long as the guard: dropping it
    /// deregisters the callback, so a destroyed subscriber can never be
    /// called back into.
    pub fn subscribe(&self, callback: impl FnMut() + 'static) -> Listener {
        let slot: Slot = Rc::new(RefCell::new(Some(Box::new(callback))));
        self.listeners.borrow_mut().push(Rc::clone(&slot));
        Listener { slot }
    }

    /// Fire every live callback.
    ///
    /// Callbacks may subscribe new listeners while running; they must not
    /// drop their own [`Listener`] from inside the callback.
    pub fn notify(&self) {
        let slots: Vec<Slot> = self.listeners.borrow().clone();
        for slot in slots {
            if let Some(cb) = slot.borrow_mut().as_mut() {
                cb();
            }
        }
        // compact slots whose guard has been dropped
        self.listeners.borrow_mut().retain(|s| s.borrow().is_some());
    }

    /// Number of currently registered (live) listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|s| s.borrow().is_some())
            .count()
    }
}

/// Scoped registration handle returned by [`ConfigNotifier::subscribe`].
///
/// Deregisters its callback exactly once, on drop, regardless of how the
/// owning component is torn down.
pub struct Listener {
    slot: Slot,
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("live", &self.slot.borrow().is_some())
            .finish()
    }
}
