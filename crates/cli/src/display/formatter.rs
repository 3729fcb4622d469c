use frontend_options_core::{Action, ActionCategory};

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn category_label(category: ActionCategory) -> &'static str {
    match category {
        ActionCategory::NoOutput => "no output",
        ActionCategory::Inspection => "inspection",
        ActionCategory::Interactive => "interactive",
        ActionCategory::Module => "module",
        ActionCategory::Lowering => "lowering",
    }
}

/// Multi-line description of one action's policy row
pub fn format_action(action: Action) -> String {
    let properties = action.properties();
    let rows = [
        ("category", category_label(action.category()).to_string()),
        (
            "principal suffix",
            properties
                .principal_output_suffix
                .map(|suffix| format!(".{suffix}"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("produces output", yes_no(properties.produces_output).to_string()),
        (
            "textual output",
            yes_no(properties.produces_textual_output).to_string(),
        ),
        ("immediate", yes_no(properties.is_immediate).to_string()),
        (
            "needs module name",
            yes_no(properties.needs_proper_module_name).to_string(),
        ),
        ("module + doc", yes_no(properties.can_emit_module).to_string()),
        ("objc header", yes_no(properties.can_emit_header).to_string()),
        (
            "dependencies",
            yes_no(properties.can_emit_dependencies).to_string(),
        ),
        (
            "loaded module trace",
            yes_no(properties.can_emit_loaded_module_trace).to_string(),
        ),
    ];

    let mut out = format!("{action}\n");
    for (label, value) in rows {
        out.push_str(&format!("  {label:<20} {value}\n"));
    }
    out
}

const TABLE_HEADERS: [&str; 9] = [
    "action", "suffix", "output", "text", "imm", "modname", "module", "header", "deps",
];

/// One line per action, with a trailing trace column
pub fn format_table() -> String {
    let action_width = Action::ALL
        .iter()
        .map(|action| action.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<action_width$}", TABLE_HEADERS[0]);
    for header in &TABLE_HEADERS[1..] {
        out.push_str(&format!(" {header:<8}"));
    }
    out.push_str(" trace\n");

    for action in Action::ALL {
        let p = action.properties();
        out.push_str(&format!("{:<action_width$}", action.as_str()));
        let cells = [
            p.principal_output_suffix.unwrap_or("-"),
            yes_no(p.produces_output),
            yes_no(p.produces_textual_output),
            yes_no(p.is_immediate),
            yes_no(p.needs_proper_module_name),
            yes_no(p.can_emit_module),
            yes_no(p.can_emit_header),
            yes_no(p.can_emit_dependencies),
        ];
        for cell in cells {
            out.push_str(&format!(" {cell:<8}"));
        }
        out.push_str(&format!(" {}\n", yes_no(p.can_emit_loaded_module_trace)));
    }
    out
}
