//! Fixed-capacity button arena.
//!
//! Slots are filled in registration order and never freed, so a
//! [`ButtonId`] stays valid for the life of the registry. Each slot has its
//! own critical-section mutex; the line table has another, taken only by
//! registration and lookup.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use platform::{ActiveLevel, ButtonHandler, LineId};

use crate::click::ClickTracker;
use crate::error::RegisterError;

/// Stable index of a registered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(usize);

impl ButtonId {
    /// Slot index inside the registry.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Everything the worker knows about one line.
pub(crate) struct Button {
    pub(crate) line: LineId,
    pub(crate) active: ActiveLevel,
    pub(crate) handler: Option<&'static dyn ButtonHandler>,
    pub(crate) clicks: ClickTracker,
}

type Slot = Mutex<CriticalSectionRawMutex, RefCell<Option<Button>>>;

pub(crate) struct Registry<const N: usize> {
    lines: Mutex<CriticalSectionRawMutex, RefCell<heapless::Vec<LineId, N>>>,
    slots: [Slot; N],
}

impl<const N: usize> Registry<N> {
    pub(crate) const fn new() -> Self {
        Self {
            lines: Mutex::new(RefCell::new(heapless::Vec::new())),
            slots: [const { Mutex::new(RefCell::new(None)) }; N],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.lock(|lines| lines.borrow().len())
    }

    pub(crate) const fn capacity(&self) -> usize {
        N
    }

    /// O(n) scan of the line table.
    pub(crate) fn find(&self, line: LineId) -> Option<ButtonId> {
        self.lines
            .lock(|lines| lines.borrow().iter().position(|l| *l == line))
            .map(ButtonId)
    }

    /// Reject `line` if it cannot be inserted right now.
    pub(crate) fn check_free<E>(&self, line: LineId) -> Result<(), RegisterError<E>> {
        self.lines.lock(|lines| {
            let lines = lines.borrow();
            if lines.contains(&line) {
                Err(RegisterError::AlreadyRegistered(line))
            } else if lines.is_full() {
                Err(RegisterError::RegistryFull { capacity: N })
            } else {
                Ok(())
            }
        })
    }

    /// Claim the next slot for `button`.
    ///
    /// The line table stays locked while the slot is filled, so a concurrent
    /// `find` never sees a line without its button.
    pub(crate) fn insert<E>(&self, button: Button) -> Result<ButtonId, RegisterError<E>> {
        self.lines.lock(|lines| {
            let mut lines = lines.borrow_mut();
            if lines.contains(&button.line) {
                return Err(RegisterError::AlreadyRegistered(button.line));
            }
            let index = lines.len();
            let slot = self
                .slots
                .get(index)
                .ok_or(RegisterError::RegistryFull { capacity: N })?;
            let line = button.line;
            lines
                .push(line)
                .map_err(|_| RegisterError::RegistryFull { capacity: N })?;
            slot.lock(|slot| *slot.borrow_mut() = Some(button));
            Ok(ButtonId(index))
        })
    }

    /// Run `f` on the button in slot `id` while holding that slot's lock.
    pub(crate) fn with_button<R>(&self, id: ButtonId, f: impl FnOnce(&mut Button) -> R) -> Option<R> {
        self.slots
            .get(id.index())?
            .lock(|slot| slot.borrow_mut().as_mut().map(f))
    }

    /// Ids of all registered buttons, in registration order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = ButtonId> {
        (0..self.len()).map(ButtonId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonConfig;
    use platform::mocks::RecordingHandler;

    static HANDLER: RecordingHandler = RecordingHandler::new();

    fn button(line: u8) -> Button {
        Button {
            line: LineId::new(line),
            active: ActiveLevel::Low,
            handler: Some(&HANDLER),
            clicks: ClickTracker::new(&ButtonConfig::default()),
        }
    }

    #[test]
    fn ids_follow_registration_order() {
        let registry: Registry<4> = Registry::new();
        assert_eq!(registry.insert::<()>(button(7)).map(ButtonId::index), Ok(0));
        assert_eq!(registry.insert::<()>(button(3)).map(ButtonId::index), Ok(1));
        assert_eq!(registry.find(LineId::new(3)), Some(ButtonId(1)));
        assert_eq!(registry.find(LineId::new(4)), None);
        assert_eq!(registry.ids().count(), 2);
    }

    #[test]
    fn duplicate_line_is_rejected() {
        let registry: Registry<4> = Registry::new();
        assert!(registry.insert::<()>(button(1)).is_ok());
        assert_eq!(
            registry.check_free::<()>(LineId::new(1)),
            Err(RegisterError::AlreadyRegistered(LineId::new(1)))
        );
        assert_eq!(
            registry.insert::<()>(button(1)).err(),
            Some(RegisterError::AlreadyRegistered(LineId::new(1)))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn full_registry_is_rejected() {
        let registry: Registry<1> = Registry::new();
        assert!(registry.insert::<()>(button(1)).is_ok());
        assert_eq!(
            registry.insert::<()>(button(2)).err(),
            Some(RegisterError::RegistryFull { capacity: 1 })
        );
        assert_eq!(registry.capacity(), 1);
    }

    #[test]
    fn with_button_reaches_the_slot() {
        let registry: Registry<2> = Registry::new();
        let id = registry.insert::<()>(button(5));
        let line = id.ok().and_then(|id| registry.with_button(id, |b| b.line));
        assert_eq!(line, Some(LineId::new(5)));
        assert_eq!(registry.with_button(ButtonId(1), |b| b.line), None);
        assert_eq!(registry.with_button(ButtonId(9), |b| b.line), None);
    }
}
