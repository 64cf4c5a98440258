// src/menu/item_nav.rs
//! Navigation root of one menu level.

use log::debug;

use super::{MenuChain, NavPos};
use crate::error::{MenuError, MenuResult};
use crate::item::{DynItem, Idx, Item, NavNode};
use crate::nav::{Cmd, ITEM_CMDS, Mode, NavAgent, NavTarget};
use crate::out::{ItemCtx, MenuOut};

/// A titled menu with a cursor.
///
/// Without focus, `up` and `down` move the cursor over enabled entries and
/// `enter` activates the entry under it. An entry whose handle navigates
/// takes the focus: from then on every command goes to it, until it answers
/// `false` to `enter` or `esc`, which hands control back to the menu.
///
/// The entry handle borrows the menu, so it is re-acquired for every command
/// instead of being stored.
pub struct ItemNav<M> {
    title: &'static str,
    menu: M,
    nav: NavPos,
    focus: Option<Idx>,
}

impl<M: MenuChain> ItemNav<M> {
    pub fn new(title: &'static str, menu: M) -> Self {
        Self {
            title,
            menu,
            nav: NavPos::default(),
            focus: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    /// Entry under the cursor.
    pub fn pos(&self) -> Idx {
        self.nav.pos
    }

    /// Entry receiving the commands, if any.
    pub fn focused(&self) -> Option<Idx> {
        self.focus
    }

    pub fn size(&self) -> Idx {
        M::SIZE
    }

    pub fn enable(&mut self, idx: Idx, on: bool) -> MenuResult<()> {
        self.check(idx)?;
        self.menu.enable(idx, on);
        Ok(())
    }

    pub fn enabled(&self, idx: Idx) -> MenuResult<bool> {
        self.check(idx)?;
        Ok(self.menu.enabled(idx))
    }

    /// Move the cursor to the `n`-th enabled entry, dropping any focus.
    pub fn select(&mut self, n: Idx) -> MenuResult<()> {
        let idx = self
            .menu
            .sel_idx(n)
            .ok_or(MenuError::NoEnabledEntry { index: n })?;
        self.release();
        self.nav.pos = idx;
        debug!("Menu '{}' jumped to entry {}", self.title, idx);
        Ok(())
    }

    /// Render this menu, or the view of the focused entry, as a fresh view.
    pub fn print_menu<O: MenuOut + ?Sized>(&self, out: &mut O) {
        out.print_menu(self, &self.nav);
    }

    /// Apply one navigation command. Returns `true` when it was consumed.
    pub fn command(&mut self, cmd: Cmd) -> bool {
        if let Some(idx) = self.focus {
            return self.forward(idx, cmd);
        }
        match cmd {
            Cmd::Up => self.step_up(),
            Cmd::Down => self.step_down(),
            Cmd::Enter => self.open(),
            Cmd::Esc => false,
        }
    }

    fn check(&self, idx: Idx) -> MenuResult<()> {
        if idx < M::SIZE {
            Ok(())
        } else {
            Err(MenuError::IndexOutOfRange {
                index: idx,
                size: M::SIZE,
            })
        }
    }

    fn step_up(&mut self) -> bool {
        match (0..self.nav.pos).rev().find(|&idx| self.menu.enabled(idx)) {
            Some(idx) => {
                self.nav.pos = idx;
                true
            }
            None => false,
        }
    }

    fn step_down(&mut self) -> bool {
        match (self.nav.pos + 1..M::SIZE).find(|&idx| self.menu.enabled(idx)) {
            Some(idx) => {
                self.nav.pos = idx;
                true
            }
            None => false,
        }
    }

    fn open(&mut self) -> bool {
        let idx = self.nav.pos;
        if !self.menu.enabled(idx) {
            return false;
        }
        let agent = self.menu.activate_item(idx);
        if !agent.can_nav() {
            return agent.result();
        }
        let mode = agent.mode();
        self.focus = Some(idx);
        self.nav.mode = mode;
        debug!("Menu '{}' focus on entry {} ({:?})", self.title, idx, mode);
        true
    }

    fn forward(&mut self, idx: Idx, cmd: Cmd) -> bool {
        let (handled, mode) = {
            let mut agent = self.menu.activate_item(idx);
            let handled = agent.run(cmd);
            (handled, agent.mode())
        };
        if handled {
            self.nav.mode = mode;
            return true;
        }
        match cmd {
            Cmd::Enter | Cmd::Esc => {
                self.release();
                true
            }
            Cmd::Up | Cmd::Down => false,
        }
    }

    /// Drop the focus, resetting whatever the focused entry still holds.
    fn release(&mut self) {
        if let Some(idx) = self.focus.take() {
            self.menu.activate_item(idx).reset();
            debug!("Menu '{}' released entry {}", self.title, idx);
        }
        self.nav.mode = Mode::Normal;
    }

    fn print_body<O: MenuOut + ?Sized>(&self, out: &mut O) {
        out.fmt_menu(true);
        out.fmt_title(true);
        out.raw_str(self.title);
        out.fmt_title(false);

        out.fmt_panel(true);
        let view = out.view(self.nav.pos);
        for idx in view.start..view.end.min(M::SIZE) {
            let selected = self.nav.selected(idx);
            out.set_item(ItemCtx {
                idx,
                selected,
                enabled: self.menu.enabled(idx),
                mode: if selected { self.nav.mode } else { Mode::Normal },
            });
            out.fmt_item(true);
            out.fmt_accel(true);
            out.fmt_accel(false);
            out.fmt_cursor(true);
            out.fmt_cursor(false);
            self.menu.print_item(idx, &self.nav, out);
            out.fmt_item(false);
        }
        out.fmt_panel(false);
        out.fmt_menu(false);
    }
}

impl<M: MenuChain> Item for ItemNav<M> {
    /// As an entry of a parent menu: the title only.
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _nav: &N, out: &mut O) {
        out.raw_str(self.title);
    }

    fn print_view<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, _nav: &N, out: &mut O) -> bool {
        let delegated = match self.focus {
            Some(idx) => self.menu.print_view_item(idx, &self.nav, out),
            None => false,
        };
        if !delegated {
            self.print_body(out);
        }
        true
    }

    fn activate(&mut self) -> NavAgent<'_> {
        NavAgent::new(self, &ITEM_CMDS)
    }
}

impl<M: MenuChain> DynItem for ItemNav<M> {
    fn print_dyn(&self, nav: &dyn NavNode, out: &mut dyn MenuOut) {
        self.print_view(nav, out);
    }
}

impl<M: MenuChain> NavTarget for ItemNav<M> {
    fn up(&mut self) -> bool {
        self.command(Cmd::Up)
    }

    fn down(&mut self) -> bool {
        self.command(Cmd::Down)
    }

    /// A nested menu is only left through `esc`.
    fn enter(&mut self) -> bool {
        self.command(Cmd::Enter);
        true
    }

    fn esc(&mut self) -> bool {
        self.command(Cmd::Esc)
    }

    fn mode(&self) -> Mode {
        self.nav.mode
    }

    /// Closes any open entry; the cursor stays where it is.
    fn reset(&mut self) {
        self.release();
    }
}
