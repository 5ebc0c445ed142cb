mod editor_config;
mod range_editor;
mod view_state;

pub use editor_config::{EDITOR_CONFIG_JSON_SCHEMA_V1, RangeEditorConfig};
pub use range_editor::{RangeEditor, VolatilityPreset};
pub use view_state::{LiquidityView, ViewState};
