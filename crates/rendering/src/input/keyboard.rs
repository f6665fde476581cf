use bevy::prelude::*;

use simulation::tools::{ActiveTool, ToolType};

/// Number-key shortcut for a tool.
pub fn tool_for_key(key: KeyCode) -> Option<ToolType> {
    match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(ToolType::Building),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(ToolType::Road),
        _ => None,
    }
}

/// Quick-access tool shortcuts (1 = building, 2 = road).
pub fn keyboard_tool_switch(keys: Res<ButtonInput<KeyCode>>, mut tool: ResMut<ActiveTool>) {
    let Some(selected) = keys.get_just_pressed().copied().find_map(tool_for_key) else {
        return;
    };
    if tool.current() != selected {
        tool.select(selected);
    }
}
