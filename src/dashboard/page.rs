//! HTML page rendering
//!
//! Turns a `DashboardLayout` into a self-contained page. plotly.js draws the
//! charts; a short script forwards dropdown and slider events to the update
//! endpoint and hands the returned figures to `Plotly.react`.

use super::layout::DashboardLayout;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Path the page script posts state changes to
pub const UPDATE_PATH: &str = "/api/v1/update";

/// Render the full dashboard page
pub fn render_html(layout: &DashboardLayout) -> String {
    let heading = &layout.heading;
    let dropdown = &layout.site_dropdown;
    let slider = &layout.payload_slider;

    let options: String = dropdown
        .options
        .iter()
        .map(|o| {
            let selected = if o.value == dropdown.value { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&o.value),
                selected,
                escape_html(&o.label)
            )
        })
        .collect();

    let ticks: String = slider
        .marks
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<option value="{}" label="{}"></option>"#,
                value,
                escape_html(label)
            )
        })
        .collect();

    // Serialization of plain data structs can't fail
    let layout_json = serde_json::to_string(layout)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>
        body {{ font-family: sans-serif; margin: 0 auto; max-width: 1200px; padding: 16px; }}
        .slider {{ display: flex; gap: 12px; align-items: center; }}
        .slider input[type=range] {{ flex: 1; }}
        .graph {{ min-height: 450px; }}
    </style>
</head>
<body>
    <h1 style="text-align: {align}; color: {color}; font-size: {font_size}px;">{title}</h1>

    <select id="{dropdown_id}" title="{placeholder}">{options}</select>
    <br>

    <div id="{pie_id}" class="graph"></div>
    <br>

    <p>{payload_label}</p>
    <div id="{slider_id}" class="slider">
        <input type="range" id="{slider_id}-low" min="{min}" max="{max}" step="{step}" value="{low}" list="{slider_id}-marks">
        <input type="range" id="{slider_id}-high" min="{min}" max="{max}" step="{step}" value="{high}" list="{slider_id}-marks">
        <span id="{slider_id}-value">{low} - {high}</span>
    </div>
    <datalist id="{slider_id}-marks">{ticks}</datalist>

    <div id="{scatter_id}" class="graph"></div>

    <script>
        const LAYOUT = {layout_json};
        const state = {{
            site: LAYOUT.site_dropdown.value,
            payload_range: LAYOUT.payload_slider.value,
        }};

        async function refresh(triggeredBy) {{
            const body = {{ state }};
            if (triggeredBy) {{
                body.triggered_by = triggeredBy;
            }}
            const response = await fetch("{update_path}", {{
                method: "POST",
                headers: {{ "Content-Type": "application/json" }},
                body: JSON.stringify(body),
            }});
            if (!response.ok) {{
                console.error("update failed", await response.text());
                return;
            }}
            const {{ figures }} = await response.json();
            for (const [id, figure] of Object.entries(figures)) {{
                Plotly.react(id, figure.data, figure.layout);
            }}
        }}

        const sliderId = LAYOUT.payload_slider.id;
        const low = document.getElementById(sliderId + "-low");
        const high = document.getElementById(sliderId + "-high");

        function onSlide() {{
            const a = Number(low.value);
            const b = Number(high.value);
            state.payload_range = [Math.min(a, b), Math.max(a, b)];
            document.getElementById(sliderId + "-value").textContent =
                state.payload_range[0] + " - " + state.payload_range[1];
            refresh(sliderId);
        }}

        low.addEventListener("change", onSlide);
        high.addEventListener("change", onSlide);

        document.getElementById(LAYOUT.site_dropdown.id).addEventListener("change", (event) => {{
            state.site = event.target.value;
            refresh(LAYOUT.site_dropdown.id);
        }});

        document.addEventListener("DOMContentLoaded", () => refresh(null));
    </script>
</body>
</html>
"#,
        title = escape_html(&heading.text),
        plotly = PLOTLY_CDN,
        align = escape_html(&heading.style.text_align),
        color = escape_html(&heading.style.color),
        font_size = heading.style.font_size,
        dropdown_id = escape_html(&dropdown.id),
        placeholder = escape_html(&dropdown.placeholder),
        options = options,
        pie_id = escape_html(&layout.pie_chart.id),
        payload_label = escape_html(&layout.payload_label),
        slider_id = escape_html(&slider.id),
        min = slider.min,
        max = slider.max,
        step = slider.step,
        low = slider.value.low(),
        high = slider.value.high(),
        ticks = ticks,
        scatter_id = escape_html(&layout.scatter_chart.id),
        layout_json = layout_json,
        update_path = UPDATE_PATH,
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
