// src/nav.rs
//! Navigation dispatch: capability tables and the uniform navigation handle.
//!
//! A [`CmdAgent`] is a stateless table describing *how* navigation commands
//! reach a concrete item. A [`NavAgent`] pairs such a table with a borrowed,
//! type-erased reference to the item, so input code can drive "whatever is
//! active" without knowing the composed item type and without allocating.
//!
//! The tables are shared immutable statics:
//!
//! - [`EMPTY_CMDS`]: the item does not navigate and activation failed.
//! - [`DONE_CMDS`]: the item does not navigate but activation succeeded.
//! - [`ITEM_CMDS`]: commands are forwarded to the bound [`NavTarget`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Editing mode reported by a navigable item.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain browsing, commands move the cursor
    #[default]
    Normal,
    /// Commands change the value of the focused item
    Edit,
    /// Fine grained editing
    Tune,
}

/// The four navigation commands an input collaborator can issue.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Up,
    Down,
    Enter,
    Esc,
}

/// Items that react to navigation commands.
///
/// Every operation returns `true` when the command was consumed. A `false`
/// return is the normal "not applicable" answer and the caller may hand the
/// input to someone else.
pub trait NavTarget {
    fn up(&mut self) -> bool;
    fn down(&mut self) -> bool;
    fn enter(&mut self) -> bool;
    fn esc(&mut self) -> bool;

    /// Current editing mode of the item.
    fn mode(&self) -> Mode {
        Mode::Normal
    }

    /// Drop any editing or focus state held below this item.
    fn reset(&mut self) {}
}

// ---------------------------------------------------------------------------
// Capability table
// ---------------------------------------------------------------------------

/// Shared descriptor of how to perform navigation on a bound item.
pub struct CmdAgent {
    can_nav: bool,
    result: bool,
    up: fn(&mut dyn NavTarget) -> bool,
    down: fn(&mut dyn NavTarget) -> bool,
    enter: fn(&mut dyn NavTarget) -> bool,
    esc: fn(&mut dyn NavTarget) -> bool,
    mode: fn(&dyn NavTarget) -> Mode,
    reset: fn(&mut dyn NavTarget),
}

fn ignore(_: &mut dyn NavTarget) -> bool {
    false
}

fn normal(_: &dyn NavTarget) -> Mode {
    Mode::Normal
}

fn keep(_: &mut dyn NavTarget) {}

fn forward_up(o: &mut dyn NavTarget) -> bool {
    o.up()
}

fn forward_down(o: &mut dyn NavTarget) -> bool {
    o.down()
}

fn forward_enter(o: &mut dyn NavTarget) -> bool {
    o.enter()
}

fn forward_esc(o: &mut dyn NavTarget) -> bool {
    o.esc()
}

fn forward_mode(o: &dyn NavTarget) -> Mode {
    o.mode()
}

fn forward_reset(o: &mut dyn NavTarget) {
    o.reset()
}

impl CmdAgent {
    /// Table for items that do not handle navigation.
    ///
    /// `result` is what activation reports to the caller.
    pub const fn empty(result: bool) -> Self {
        Self {
            can_nav: false,
            result,
            up: ignore,
            down: ignore,
            enter: ignore,
            esc: ignore,
            mode: normal,
            reset: keep,
        }
    }

    /// Table forwarding every command to the bound item.
    pub const fn item(result: bool) -> Self {
        Self {
            can_nav: true,
            result,
            up: forward_up,
            down: forward_down,
            enter: forward_enter,
            esc: forward_esc,
            mode: forward_mode,
            reset: forward_reset,
        }
    }

    pub fn can_nav(&self) -> bool {
        self.can_nav
    }

    pub fn result(&self) -> bool {
        self.result
    }

    pub fn up(&self, o: &mut dyn NavTarget) -> bool {
        (self.up)(o)
    }

    pub fn down(&self, o: &mut dyn NavTarget) -> bool {
        (self.down)(o)
    }

    pub fn enter(&self, o: &mut dyn NavTarget) -> bool {
        (self.enter)(o)
    }

    pub fn esc(&self, o: &mut dyn NavTarget) -> bool {
        (self.esc)(o)
    }

    pub fn mode(&self, o: &dyn NavTarget) -> Mode {
        (self.mode)(o)
    }

    pub fn reset(&self, o: &mut dyn NavTarget) {
        (self.reset)(o)
    }
}

impl fmt::Debug for CmdAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdAgent")
            .field("can_nav", &self.can_nav)
            .field("result", &self.result)
            .finish()
    }
}

/// No navigation, activation failed. Target of every empty [`NavAgent`].
pub static EMPTY_CMDS: CmdAgent = CmdAgent::empty(false);

/// No navigation, activation succeeded (fire and forget actions).
pub static DONE_CMDS: CmdAgent = CmdAgent::empty(true);

/// Navigation forwarded to the bound item.
pub static ITEM_CMDS: CmdAgent = CmdAgent::item(true);

// ---------------------------------------------------------------------------
// Navigation handle
// ---------------------------------------------------------------------------

/// Uniform handle to the currently active item.
///
/// The table reference is always valid: a handle without a bound item points
/// at [`EMPTY_CMDS`], so every operation is safe to call and simply reports
/// `false` / [`Mode::Normal`].
pub struct NavAgent<'a> {
    obj: Option<&'a mut dyn NavTarget>,
    run: &'static CmdAgent,
}

impl<'a> NavAgent<'a> {
    /// Bind `obj` to the capability table `run`.
    pub fn new(obj: &'a mut dyn NavTarget, run: &'static CmdAgent) -> Self {
        Self {
            obj: Some(obj),
            run,
        }
    }

    /// The canonical no-op handle.
    pub fn empty() -> Self {
        Self {
            obj: None,
            run: &EMPTY_CMDS,
        }
    }

    /// Whether an item instance is bound to this handle.
    pub fn is_bound(&self) -> bool {
        self.obj.is_some()
    }

    pub fn can_nav(&self) -> bool {
        self.run.can_nav()
    }

    pub fn result(&self) -> bool {
        self.run.result()
    }

    pub fn up(&mut self) -> bool {
        match self.obj.as_deref_mut() {
            Some(o) => self.run.up(o),
            None => false,
        }
    }

    pub fn down(&mut self) -> bool {
        match self.obj.as_deref_mut() {
            Some(o) => self.run.down(o),
            None => false,
        }
    }

    pub fn enter(&mut self) -> bool {
        match self.obj.as_deref_mut() {
            Some(o) => self.run.enter(o),
            None => false,
        }
    }

    pub fn esc(&mut self) -> bool {
        match self.obj.as_deref_mut() {
            Some(o) => self.run.esc(o),
            None => false,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.obj.as_deref() {
            Some(o) => self.run.mode(o),
            None => Mode::Normal,
        }
    }

    /// Tell the bound item to drop its editing state.
    pub fn reset(&mut self) {
        if let Some(o) = self.obj.as_deref_mut() {
            self.run.reset(o);
        }
    }

    /// Dispatch a [`Cmd`] to the matching operation.
    pub fn run(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::Up => self.up(),
            Cmd::Down => self.down(),
            Cmd::Enter => self.enter(),
            Cmd::Esc => self.esc(),
        }
    }
}

impl Default for NavAgent<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for NavAgent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavAgent")
            .field("bound", &self.is_bound())
            .field("run", self.run)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts commands and reports a fixed answer.
    struct Counter {
        ups: u8,
        downs: u8,
        answer: bool,
    }

    impl NavTarget for Counter {
        fn up(&mut self) -> bool {
            self.ups += 1;
            self.answer
        }

        fn down(&mut self) -> bool {
            self.downs += 1;
            self.answer
        }

        fn enter(&mut self) -> bool {
            self.answer
        }

        fn esc(&mut self) -> bool {
            self.answer
        }

        fn mode(&self) -> Mode {
            Mode::Edit
        }
    }

    #[test]
    fn test_default_handle_is_inert() {
        let mut agent = NavAgent::default();
        assert!(!agent.can_nav());
        assert!(!agent.is_bound());
        assert!(!agent.result());
        assert!(!agent.up());
        assert!(!agent.down());
        assert!(!agent.enter());
        assert!(!agent.esc());
        assert_eq!(agent.mode(), Mode::Normal);
    }

    #[test]
    fn test_item_cmds_forward_to_target() {
        let mut counter = Counter {
            ups: 0,
            downs: 0,
            answer: true,
        };
        {
            let mut agent = NavAgent::new(&mut counter, &ITEM_CMDS);
            assert!(agent.can_nav());
            assert!(agent.result());
            assert!(agent.up());
            assert!(agent.run(Cmd::Up));
            assert!(agent.run(Cmd::Down));
            assert_eq!(agent.mode(), Mode::Edit);
        }
        assert_eq!(counter.ups, 2);
        assert_eq!(counter.downs, 1);
    }

    #[test]
    fn test_item_cmds_report_unhandled() {
        let mut counter = Counter {
            ups: 0,
            downs: 0,
            answer: false,
        };
        let mut agent = NavAgent::new(&mut counter, &ITEM_CMDS);
        assert!(!agent.enter());
        assert!(!agent.esc());
    }

    #[test]
    fn test_empty_tables_never_touch_the_item() {
        let mut counter = Counter {
            ups: 0,
            downs: 0,
            answer: true,
        };
        {
            let mut agent = NavAgent::new(&mut counter, &DONE_CMDS);
            assert!(agent.is_bound());
            assert!(!agent.can_nav());
            assert!(agent.result());
            assert!(!agent.up());
            assert!(!agent.down());
            assert_eq!(agent.mode(), Mode::Normal);
        }
        assert_eq!(counter.ups, 0);
        assert_eq!(counter.downs, 0);
        assert!(!EMPTY_CMDS.result());
    }

    /// Holds an edit flag that only `reset` clears.
    struct Latch(bool);

    impl NavTarget for Latch {
        fn up(&mut self) -> bool {
            false
        }

        fn down(&mut self) -> bool {
            false
        }

        fn enter(&mut self) -> bool {
            self.0 = true;
            true
        }

        fn esc(&mut self) -> bool {
            false
        }

        fn reset(&mut self) {
            self.0 = false;
        }
    }

    #[test]
    fn test_reset_reaches_navigating_items_only() {
        let mut latch = Latch(true);
        NavAgent::new(&mut latch, &DONE_CMDS).reset();
        assert!(latch.0);
        NavAgent::new(&mut latch, &ITEM_CMDS).reset();
        assert!(!latch.0);
        NavAgent::empty().reset();
    }
}
