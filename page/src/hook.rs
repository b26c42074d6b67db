//! Explicit handle for submitting a waitlist form from outside its own view.
//!
//! The page creates one [`SubmitHook`] and hands clones to whoever needs it:
//! the form that should answer (it registers itself on mount) and the
//! callers that trigger it, such as the nav "Join Waitlist" button.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Identity of one mounted form instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormId(u64);

impl FormId {
    /// Allocate an id no other form in this process has.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        FormId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

type FormFn = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct Registration {
    form: FormId,
    submit: FormFn,
    has_input: FormFn,
}

/// Cloneable slot holding at most one form's submit action.
///
/// Unbound hooks are harmless: [`SubmitHook::submit`] returns `false`.
#[derive(Clone, Default)]
pub struct SubmitHook {
    slot: Arc<Mutex<Option<Registration>>>,
}

impl SubmitHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `form` to this hook, replacing any earlier registration.
    ///
    /// `submit` runs one attempt and reports whether it was accepted;
    /// `has_input` reports whether the form holds a non-blank address.
    pub fn register<S, I>(&self, form: FormId, submit: S, has_input: I)
    where
        S: Fn() -> bool + Send + Sync + 'static,
        I: Fn() -> bool + Send + Sync + 'static,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.as_ref() {
            log::info!("submit hook rebound from form {:?} to {:?}", previous.form, form);
        } else {
            log::info!("submit hook bound to form {:?}", form);
        }
        *slot = Some(Registration {
            form,
            submit: Arc::new(submit),
            has_input: Arc::new(has_input),
        });
    }

    /// Unbind `form`, but only if it is still the bound form.
    ///
    /// Returns whether anything was released.
    pub fn release(&self, form: FormId) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(current) if current.form == form => {
                *slot = None;
                log::info!("submit hook released by form {:?}", form);
                true
            }
            _ => false,
        }
    }

    /// Form currently bound, if any.
    pub fn bound_form(&self) -> Option<FormId> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|r| r.form)
    }

    /// Submit the bound form.
    ///
    /// `false` when nothing is bound or the attempt was rejected, `true`
    /// when the address was accepted.
    pub fn submit(&self) -> bool {
        match self.current() {
            Some(registration) => (registration.submit)(),
            None => false,
        }
    }

    /// Submit the bound form only when it holds a non-blank address.
    ///
    /// A blank form is left as it is (no error message) and `false` is
    /// returned.
    pub fn submit_if_filled(&self) -> bool {
        match self.current() {
            Some(registration) if (registration.has_input)() => (registration.submit)(),
            _ => false,
        }
    }

    // cloned out of the lock so the form may touch the hook while submitting
    fn current(&self) -> Option<Registration> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for SubmitHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitHook")
            .field("bound_form", &self.bound_form())
            .finish()
    }
}
