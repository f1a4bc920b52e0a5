use crate::model::CatalogData;

/// Render a self-contained HTML catalog page (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_catalog_html(data: &CatalogData) -> anyhow::Result<String> {
    // `</` would close the script element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Component Contracts</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .container { display: flex; height: calc(100vh - 58px); }
  .sidebar { width: 280px; border-right: 1px solid #ddd; padding: 12px; overflow: auto; }
  .main { flex: 1; padding: 12px; overflow: auto; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  .list-item { cursor: pointer; user-select: none; padding: 4px 6px; border-radius: 4px; }
  .list-item:hover { background: #f3f3f3; }
  .list-item.selected { background: #e9f2ff; border: 1px solid #cfe3ff; }
  .muted { color: #777; font-size: 12px; }
  .req { color: #b42318; font-size: 12px; }

  h3 { margin-top: 20px; }
  table { border-collapse: collapse; width: 100%; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 6px 8px; text-align: left; font-size: 14px; vertical-align: top; }
  th { background: white; border-bottom: 1px solid #ddd; }
  code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<div class="container">
  <div class="sidebar">
    <input id="search" placeholder="Search component..." style="width: 100%; box-sizing: border-box; padding: 6px 8px; margin-bottom: 8px; border: 1px solid #ddd; border-radius: 6px;">
    <div id="list"></div>
  </div>

  <div class="main">
    <h2 id="title">Select a component</h2>
    <div id="meta" class="muted"></div>
    <div id="sections"></div>
  </div>
</div>

<script>
// Embedded catalog data (JSON object literal)
const DATA = __DATA__;

const state = {
  selected: null,
  search: ""
};

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function text(s) {
  return s == null ? "" : escapeHtml(s);
}

function renderSummary() {
  const t = DATA.totals;
  document.getElementById("summary").innerHTML = `
    <span class="pill">components: <b>${t.components}</b></span>
    <span class="pill">props: <b>${t.props}</b></span>
    <span class="pill">enum props: <b>${t.enum_props}</b></span>
    <span class="pill">events: <b>${t.events}</b></span>
    <span class="pill">slots: <b>${t.slots}</b></span>
  `;
}

function renderList() {
  const root = document.getElementById("list");
  root.innerHTML = "";
  const s = state.search.toLowerCase();

  for (const c of DATA.components) {
    if (s && !c.name.toLowerCase().includes(s)) continue;

    const row = document.createElement("div");
    row.className = "list-item" + (state.selected === c.name ? " selected" : "");
    row.onclick = () => selectComponent(c.name);
    row.innerHTML = `${escapeHtml(c.name)} <span class="muted">(${c.props.length} props)</span>`;
    root.appendChild(row);
  }
}

function table(headers, rows) {
  if (!rows.length) return `<div class="muted">none</div>`;
  const head = headers.map(h => `<th>${h}</th>`).join("");
  const body = rows.map(r => `<tr>${r.map(c => `<td>${c}</td>`).join("")}</tr>`).join("");
  return `<table><thead><tr>${head}</tr></thead><tbody>${body}</tbody></table>`;
}

function selectComponent(name) {
  state.selected = name;
  const c = DATA.components.find(x => x.name === name);
  if (!c) return;

  document.getElementById("title").textContent = c.name;
  document.getElementById("meta").textContent = c.description || "";

  const props = c.props.map(p => [
    `<code>${escapeHtml(p.name)}</code>` + (p.required ? ` <span class="req">required</span>` : ""),
    `<code>${escapeHtml(p.type_label)}</code>`,
    p.default == null ? "" : `<code>${escapeHtml(p.default)}</code>`,
    text(p.description)
  ]);
  const events = c.events.map(e => [
    `<code>${escapeHtml(e.name)}</code>`,
    `<code>${escapeHtml(e.payload)}</code>`,
    text(e.description)
  ]);
  const slots = c.slots.map(s => [
    `<code>${escapeHtml(s.name)}</code>`,
    s.scope.map(v => `<code>${escapeHtml(v)}</code>`).join(", "),
    text(s.description)
  ]);

  document.getElementById("sections").innerHTML = `
    <h3>Props</h3>${table(["name", "type", "default", "description"], props)}
    <h3>Events</h3>${table(["name", "payload", "description"], events)}
    <h3>Slots</h3>${table(["name", "scope", "description"], slots)}
  `;

  renderList();
}

document.getElementById("search").addEventListener("input", (e) => {
  state.search = e.target.value || "";
  renderList();
});

renderSummary();
renderList();
if (DATA.components.length) selectComponent(DATA.components[0].name);
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_catalog_data;
    use crate::registry::Registry;

    #[test]
    fn embeds_catalog_json() {
        let registry = Registry::builtin().unwrap();
        let html = render_catalog_html(&build_catalog_data(&registry)).unwrap();

        assert!(!html.contains("__DATA__"));
        assert!(html.contains(r#""name":"Button""#));
        assert!(html.contains(r#""type_label":"boolean""#));
    }

    #[test]
    fn script_terminators_are_escaped() {
        let registry = Registry::builtin().unwrap();
        let mut data = build_catalog_data(&registry);
        data.components[0].description = Some("</script><b>".to_string());

        let html = render_catalog_html(&data).unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#"<\/script><b>"#));
    }
}
