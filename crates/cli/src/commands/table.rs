use anyhow::Result;
use frontend_options_core::Action;

use super::describe::ActionDescription;
use crate::display::formatter::format_table;

pub fn table_command(json: bool) -> Result<()> {
    if json {
        let rows: Vec<ActionDescription> =
            Action::ALL.into_iter().map(ActionDescription::new).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_table());
    }
    Ok(())
}
