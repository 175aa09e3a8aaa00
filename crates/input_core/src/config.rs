//! Options a text input is created with.

use core_types::ControlKind;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct InputConfig {
    /// Initial text.
    pub value: String,
    pub placeholder: String,
    /// Value of the `type` attribute. Empty means the host default ("text").
    #[serde(rename = "type")]
    pub input_type: String,
    pub disabled: bool,
    /// Select the whole text whenever the field gains focus.
    pub select_on_focus: bool,
    /// Focus the field as soon as it is attached.
    pub default_focus: bool,
    pub control: ControlKind,
}
