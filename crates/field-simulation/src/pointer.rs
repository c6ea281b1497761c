//! Pointer tracking: host input in, one field-space pointer out

use field_physics::Pointer;
use glam::Vec2;

/// Which host signal starts an engagement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngageOn {
    /// A mouse button goes down over the surface
    Press,
    /// The cursor enters the surface
    Enter,
}

/// Raw input as delivered by the host, in host window coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Entered,
    Pressed(Vec2),
    Moved(Vec2),
    Released,
    Left,
}

/// Maps host window coordinates onto the field.
///
/// The field is stretched over the whole window, so the mapping is a
/// per-axis scale of `field_size / display_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMapping {
    field_size: Vec2,
    display_size: Vec2,
}

impl ViewportMapping {
    pub fn new(field_size: Vec2, display_size: Vec2) -> Self {
        Self {
            field_size,
            display_size,
        }
    }

    pub fn set_display_size(&mut self, display_size: Vec2) {
        self.display_size = display_size;
    }

    pub fn to_field(&self, raw: Vec2) -> Vec2 {
        // A minimized window reports zero size
        raw * self.field_size / self.display_size.max(Vec2::ONE)
    }
}

/// Tracks the single pointer across engage/move/release signals.
///
/// Moves only count while engaged; releasing parks the pointer back at the
/// sentinel so no particle feels it on the next frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    mapping: ViewportMapping,
    engage_on: EngageOn,
    engaged: bool,
    pointer: Pointer,
}

impl PointerTracker {
    pub fn new(mapping: ViewportMapping, engage_on: EngageOn) -> Self {
        Self {
            mapping,
            engage_on,
            engaged: false,
            pointer: Pointer::SENTINEL,
        }
    }

    /// Current pointer in field coordinates
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Keep the mapping in step with the host window
    pub fn resize(&mut self, display_size: Vec2) {
        self.mapping.set_display_size(display_size);
    }

    pub fn handle(&mut self, signal: PointerSignal) {
        match signal {
            PointerSignal::Entered => {
                if self.engage_on == EngageOn::Enter {
                    self.engage();
                }
            }
            PointerSignal::Pressed(raw) => {
                if self.engage_on == EngageOn::Press {
                    self.engage();
                }
                self.move_to(raw);
            }
            PointerSignal::Moved(raw) => self.move_to(raw),
            PointerSignal::Released => self.release(),
            // A held button keeps following the cursor outside the window
            PointerSignal::Left => {
                if self.engage_on == EngageOn::Enter {
                    self.release();
                }
            }
        }
    }

    /// Start an engagement. The position follows with the next move.
    pub fn engage(&mut self) {
        if !self.engaged {
            log::debug!("pointer engaged");
        }
        self.engaged = true;
    }

    /// Update the position from a raw host coordinate. Ignored unless engaged.
    pub fn move_to(&mut self, raw: Vec2) {
        if self.engaged {
            self.pointer = Pointer::at(self.mapping.to_field(raw));
        }
    }

    /// End the engagement and park the pointer at the sentinel
    pub fn release(&mut self) {
        if self.engaged {
            log::debug!("pointer released");
        }
        self.engaged = false;
        self.pointer = Pointer::SENTINEL;
    }
}
