use anyhow::Result;
use frontend_options_core::{Action, ActionCategory, ActionProperties};
use serde::Serialize;
use tracing::debug;

use crate::display::formatter::format_action;

#[derive(Debug, Serialize)]
pub struct ActionDescription {
    pub action: Action,
    pub category: ActionCategory,
    #[serde(flatten)]
    pub properties: ActionProperties,
}

impl ActionDescription {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            category: action.category(),
            properties: action.properties(),
        }
    }
}

pub fn describe_command(action: Action, json: bool) -> Result<()> {
    debug!("Describing action: {}", action);

    if json {
        let description = ActionDescription::new(action);
        println!("{}", serde_json::to_string_pretty(&description)?);
    } else {
        print!("{}", format_action(action));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_json_is_flat() {
        let value = serde_json::to_value(ActionDescription::new(Action::EmitSilGen)).unwrap();
        assert_eq!(value["action"], "emit-silgen");
        assert_eq!(value["category"], "module");
        assert_eq!(value["principal_output_suffix"], "sil");
        assert_eq!(value["can_emit_module"], false);
        assert_eq!(value["produces_textual_output"], true);
    }

    #[test]
    fn test_description_json_for_repl_has_null_suffix() {
        let value = serde_json::to_value(ActionDescription::new(Action::Repl)).unwrap();
        assert!(value["principal_output_suffix"].is_null());
        assert_eq!(value["is_immediate"], true);
    }
}
