use chrono::{DateTime, Utc};

use crate::render::{escape_attr, escape_text};

use super::note::Note;

const STYLE: &str = r#":root{ --bg:#070912; --fg:#e9eefb; --muted:rgba(233,238,251,.72); --card:rgba(255,255,255,.06); --border:rgba(255,255,255,.10); --accent:#9bd3ff; }
*{box-sizing:border-box}
body{ margin:0; font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; background: radial-gradient(1200px 600px at 20% 10%, rgba(155,211,255,.18), transparent 60%), radial-gradient(900px 500px at 80% 0%, rgba(185,167,255,.16), transparent 55%), var(--bg); color:var(--fg); }
main{ max-width:980px; margin:0 auto; padding:44px 20px 60px; }
a{ color:var(--accent); text-decoration:none; } a:hover{ text-decoration:underline; }
.header{ margin-bottom:20px; }
.kicker{ margin:0 0 10px; letter-spacing:.12em; text-transform:uppercase; font-size:12px; color:var(--muted); }
.card{ border:1px solid var(--border); border-radius:16px; padding:16px; background:var(--card); }
.grid{ display:grid; grid-template-columns: 1fr; gap: 14px; }
pre{ overflow:auto; padding:12px; border-radius:12px; background: rgba(0,0,0,.28); border:1px solid var(--border); }
code{ font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
.footer{ margin-top:18px; color:var(--muted); }"#;

/// Build stamp shown in the footer, e.g. `2024-05-01T12:00:00Z`.
pub fn build_stamp(built_at: DateTime<Utc>) -> String {
    built_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Wraps a body fragment in the full page template.
///
/// `title` is plain text and gets escaped; `body` is trusted HTML. `root` is
/// the relative path back to the site root (`./` for top-level pages).
pub fn page(title: &str, body: &str, built_at: DateTime<Utc>, root: &str) -> String {
    let title = escape_text(title);
    let root = escape_attr(root);
    let stamp = build_stamp(built_at);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="color-scheme" content="dark" />
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <main>
    <div class="header">
      <p class="kicker"><a href="{root}index.html">starlibrary</a></p>
    </div>
    {body}
    <div class="footer">
      <p>Built: {stamp}</p>
    </div>
  </main>
</body>
</html>
"#
    )
}

/// Body of a single note page.
pub fn note_body(note: &Note) -> String {
    format!("<article class=\"card\">\n{}\n</article>", note.html)
}

/// Body of the index page listing every note in order.
pub fn index_body(site_title: &str, notes: &[Note]) -> String {
    let items = if notes.is_empty() {
        r#"<li><span style="color:var(--muted)">No notes yet.</span></li>"#.to_string()
    } else {
        notes
            .iter()
            .map(|n| {
                format!(
                    r#"<li><a href="./{}">{}</a></li>"#,
                    escape_attr(&n.file_name()),
                    escape_text(&n.title)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    let site_title = escape_text(site_title);

    format!(
        r#"<section class="grid">
  <div class="card">
    <h1>{site_title}</h1>
    <p style="color:var(--muted)">A small shelf of notes. Plain HTML. No build system.</p>
  </div>
  <div class="card">
    <h2>Notes</h2>
    <ul>
{items}
</ul>
  </div>
</section>"#
    )
}
