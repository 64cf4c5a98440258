// src/items/action.rs
//! Layers deciding what activation hands to the navigation system.

use log::trace;

use crate::item::{Empty, Item, NavNode};
use crate::nav::{DONE_CMDS, ITEM_CMDS, Mode, NavAgent, NavTarget};
use crate::out::MenuOut;

/// Activation predicate of an [`Action`].
pub type ActionHandler = fn() -> bool;

/// Predicate for entries without an action: activation always fails.
pub fn do_nothing() -> bool {
    false
}

// ---------------------------------------------------------------------------
// NavHandler
// ---------------------------------------------------------------------------

/// Lets the inner item receive navigation commands.
///
/// Activation binds the item to [`ITEM_CMDS`], so commands issued through the
/// returned handle reach the inner [`NavTarget`].
#[derive(Debug, Clone, Copy)]
pub struct NavHandler<I>(I);

impl<I> NavHandler<I> {
    pub const fn new(inner: I) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &I {
        &self.0
    }

    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.0
    }
}

impl<I: Item + NavTarget> Item for NavHandler<I> {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) {
        self.0.print(nav, out);
    }

    fn print_view<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) -> bool {
        self.0.print_view(nav, out)
    }

    fn activate(&mut self) -> NavAgent<'_> {
        NavAgent::new(self, &ITEM_CMDS)
    }
}

impl<I: NavTarget> NavTarget for NavHandler<I> {
    fn up(&mut self) -> bool {
        self.0.up()
    }

    fn down(&mut self) -> bool {
        self.0.down()
    }

    fn enter(&mut self) -> bool {
        self.0.enter()
    }

    fn esc(&mut self) -> bool {
        self.0.esc()
    }

    fn mode(&self) -> Mode {
        self.0.mode()
    }

    fn reset(&mut self) {
        self.0.reset();
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Runs a predicate when the entry is activated.
///
/// A `true` answer yields a handle bound to this entry whose
/// [`NavAgent::result`] is `true`; a `false` answer yields the empty handle.
/// Either way the entry itself never takes navigation input.
#[derive(Debug, Clone, Copy)]
pub struct Action<I = Empty> {
    inner: I,
    act: ActionHandler,
}

impl<I> Action<I> {
    pub const fn new(inner: I, act: ActionHandler) -> Self {
        Self { inner, act }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: Item> Item for Action<I> {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) {
        self.inner.print(nav, out);
    }

    fn activate(&mut self) -> NavAgent<'_> {
        let accepted = (self.act)();
        trace!("Action activated: {}", accepted);
        if accepted {
            NavAgent::new(self, &DONE_CMDS)
        } else {
            NavAgent::empty()
        }
    }
}

/// Binding target for [`DONE_CMDS`], whose table never calls into it.
impl<I> NavTarget for Action<I> {
    fn up(&mut self) -> bool {
        false
    }

    fn down(&mut self) -> bool {
        false
    }

    fn enter(&mut self) -> bool {
        false
    }

    fn esc(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::StaticText;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static FIRED: AtomicUsize = AtomicUsize::new(0);

    fn accept() -> bool {
        FIRED.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn refuse() -> bool {
        false
    }

    struct Knob(i8);

    impl Item for Knob {
        fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _nav: &N, _out: &mut O) {}
    }

    impl NavTarget for Knob {
        fn up(&mut self) -> bool {
            self.0 += 1;
            true
        }

        fn down(&mut self) -> bool {
            self.0 -= 1;
            true
        }

        fn enter(&mut self) -> bool {
            false
        }

        fn esc(&mut self) -> bool {
            false
        }

        fn mode(&self) -> Mode {
            Mode::Edit
        }
    }

    #[test]
    fn test_refused_action_yields_empty_handle() {
        let mut item = Action::new(StaticText::new("Guarded"), refuse);
        let agent = item.activate();
        assert!(!agent.can_nav());
        assert!(!agent.is_bound());
        assert!(!agent.result());
    }

    #[test]
    fn test_accepted_action_is_bound_with_result() {
        let before = FIRED.load(Ordering::SeqCst);
        let mut item = Action::new(StaticText::new("Save"), accept);
        let mut agent = item.activate();
        assert!(agent.is_bound());
        assert!(agent.result());
        assert!(!agent.can_nav());
        assert!(!agent.up());
        assert_eq!(FIRED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_do_nothing_never_activates() {
        let mut item = Action::new(Empty, do_nothing);
        assert!(!item.activate().result());
    }

    #[test]
    fn test_nav_handler_routes_commands_to_inner_item() {
        let mut item = NavHandler::new(Knob(0));
        {
            let mut agent = item.activate();
            assert!(agent.can_nav());
            assert!(agent.up());
            assert!(agent.up());
            assert!(agent.down());
            assert!(!agent.esc());
            assert_eq!(agent.mode(), Mode::Edit);
        }
        assert_eq!(item.inner().0, 1);
    }
}
