// src/items/role.rs
//! Role annotation layers.
//!
//! [`AsRole`] brackets the inner item's output with the begin and end
//! notification of one [`Role`]. The pair is always emitted, even when the
//! inner item prints nothing, so back-ends can rely on it for layout.

use core::marker::PhantomData;

use crate::item::{Item, NavNode};
use crate::nav::{Mode, NavAgent, NavTarget};
use crate::out::{MenuOut, Role};

/// Type-level tag naming the role an [`AsRole`] announces.
pub trait RoleTag {
    const ROLE: Role;
}

#[derive(Debug, Clone, Copy)]
pub struct ValueRole;

#[derive(Debug, Clone, Copy)]
pub struct ModeRole;

#[derive(Debug, Clone, Copy)]
pub struct UnitRole;

#[derive(Debug, Clone, Copy)]
pub struct LabelRole;

#[derive(Debug, Clone, Copy)]
pub struct TitleRole;

#[derive(Debug, Clone, Copy)]
pub struct AccelRole;

impl RoleTag for ValueRole {
    const ROLE: Role = Role::Value;
}

impl RoleTag for ModeRole {
    const ROLE: Role = Role::Mode;
}

impl RoleTag for UnitRole {
    const ROLE: Role = Role::Unit;
}

impl RoleTag for LabelRole {
    const ROLE: Role = Role::Label;
}

impl RoleTag for TitleRole {
    const ROLE: Role = Role::Title;
}

impl RoleTag for AccelRole {
    const ROLE: Role = Role::Accel;
}

/// Wraps the inner output in a `R::ROLE` notification pair.
#[derive(Debug, Clone, Copy)]
pub struct AsRole<R, I> {
    inner: I,
    _role: PhantomData<R>,
}

/// Inner content is a value.
pub type AsValue<I> = AsRole<ValueRole, I>;
/// Inner content is an edit mode indicator.
pub type AsMode<I> = AsRole<ModeRole, I>;
/// Inner content is a unit, normally printed after a value.
pub type AsUnit<I> = AsRole<UnitRole, I>;
pub type AsLabel<I> = AsRole<LabelRole, I>;
pub type AsTitle<I> = AsRole<TitleRole, I>;
pub type AsAccel<I> = AsRole<AccelRole, I>;

impl<R: RoleTag, I> AsRole<R, I> {
    pub const fn new(inner: I) -> Self {
        Self {
            inner,
            _role: PhantomData,
        }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.inner
    }
}

impl<R: RoleTag, I: Item> Item for AsRole<R, I> {
    fn print<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) {
        out.fmt(R::ROLE, true);
        self.inner.print(nav, out);
        out.fmt(R::ROLE, false);
    }

    fn print_view<N: NavNode + ?Sized, O: MenuOut + ?Sized>(&self, nav: &N, out: &mut O) -> bool {
        self.inner.print_view(nav, out)
    }

    fn activate(&mut self) -> NavAgent<'_> {
        self.inner.activate()
    }
}

impl<R, I: NavTarget> NavTarget for AsRole<R, I> {
    fn up(&mut self) -> bool {
        self.inner.up()
    }

    fn down(&mut self) -> bool {
        self.inner.down()
    }

    fn enter(&mut self) -> bool {
        self.inner.enter()
    }

    fn esc(&mut self) -> bool {
        self.inner.esc()
    }

    fn mode(&self) -> Mode {
        self.inner.mode()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Empty, NoNav};
    use crate::items::{Field, StaticText};
    use crate::out::{Capture, MenuOutCap, TextFmt, Void};

    #[test]
    fn test_value_mode_pair_on_void_backend() {
        let item = AsValue::new(AsMode::new(Field::new(21, 0, 40, 1).unwrap()));
        let mut out = MenuOutCap::new(Capture::<Void, 32>::new(Void));
        item.print(&NoNav, &mut out);

        let capture = out.printer();
        assert_eq!(
            capture.events(),
            &[
                (Role::Value, true),
                (Role::Mode, true),
                (Role::Mode, false),
                (Role::Value, false),
            ]
        );
        assert!(capture.is_balanced());
    }

    #[test]
    fn test_pair_is_emitted_for_empty_inner_item() {
        let item = AsUnit::new(Empty);
        let mut out = MenuOutCap::new(Capture::<Void, 8>::new(Void));
        item.print(&NoNav, &mut out);
        assert_eq!(out.printer().events(), &[(Role::Unit, true), (Role::Unit, false)]);
        assert_eq!(out.printer().text(), "");
    }

    #[test]
    fn test_wrappers_nest_regardless_of_backend() {
        let item = AsLabel::new(StaticText::with(
            "Temp ",
            AsValue::new(AsUnit::new(StaticText::new("C"))),
        ));

        let mut text = MenuOutCap::new(Capture::<TextFmt<Void>, 32>::new(TextFmt::new(Void)));
        item.print(&NoNav, &mut text);
        let mut null = MenuOutCap::new(Capture::<Void, 32>::new(Void));
        item.print(&NoNav, &mut null);

        assert_eq!(text.printer().events(), null.printer().events());
        assert_eq!(null.printer().events().len(), 6);
        for role in [Role::Label, Role::Value, Role::Unit] {
            assert_eq!(null.printer().count(role, true), 1);
            assert_eq!(null.printer().count(role, false), 1);
        }
        assert!(null.printer().is_balanced());
        assert_eq!(null.printer().text(), "Temp C");
    }
}
