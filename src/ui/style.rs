pub fn root_container_style() -> &'static str {
    "display: flex; flex-direction: column; height: 100vh; padding: 16px; box-sizing: border-box; font-family: sans-serif;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ccc;"
}

pub fn table_header_cell_style(width: Option<f64>) -> String {
    let width = width.map(|px| format!(" width: {px}px;")).unwrap_or_default();
    format!(
        "position: sticky; top: 0; z-index: 1; background: #f3f3f3; border: 1px solid #bbb; padding: 6px; cursor: pointer; user-select: none; text-align: left;{width}"
    )
}

pub fn table_body_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 6px;"
}

pub fn dropdown_panel_style() -> &'static str {
    "position: absolute; top: 100%; left: 0; min-width: 200px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;"
}

pub fn modal_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;"
}

pub fn modal_panel_style() -> &'static str {
    "background: #fff; padding: 16px; border: 1px solid #999; border-radius: 6px; min-width: 320px;"
}

pub fn error_style() -> &'static str {
    "color: #a12; background: #fdecea; border: 1px solid #f5c2c0; padding: 6px 10px; margin: 8px 0;"
}
