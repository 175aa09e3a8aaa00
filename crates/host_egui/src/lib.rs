//! egui host for the input normalizer.
//!
//! [`EguiField`] draws an `egui::TextEdit` and exposes it through
//! [`HostElement`](input_core::HostElement); [`FieldRouter`] drives one
//! normalizer per field from the UI frame loop. A frame is one event-loop
//! turn: deferred work posted during a frame runs at the start of the next.

mod field;
mod keys;

pub use field::EguiField;
pub use keys::{key_code, key_event};

use input_core::{EventOutcome, InputNormalizer};

pub type EguiInput = InputNormalizer<EguiField>;

/// Mounts a normalizer on first show and feeds it the field's native events.
pub struct FieldRouter {
    input: EguiInput,
    mounted: bool,
}

impl FieldRouter {
    pub fn new(input: EguiInput) -> Self {
        Self {
            input,
            mounted: false,
        }
    }

    pub fn input(&self) -> &EguiInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut EguiInput {
        &mut self.input
    }

    /// Draw the field and route what happened to it this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        if !self.mounted {
            self.input.mount();
        }
        self.input.run_deferred();

        let response = self.input.host_mut().show(ui);
        if !self.mounted {
            self.mounted = true;
            self.input.attached();
        }

        let mut prevented = false;
        while let Some(event) = self.input.host_mut().next_native_event() {
            prevented |= self.input.handle_event(event) == EventOutcome::PreventDefault;
        }
        if prevented {
            log::trace!(target: "host.egui", "{:?}: default action prevented", self.input.id());
        }
        if self.input.has_deferred() {
            ui.ctx().request_repaint();
        }
        response
    }
}
