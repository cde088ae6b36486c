//! HTML templates for the web interface.
//!
//! The page is static; all data is loaded from the JSON API by the inline
//! script, which writes it with `textContent` only.

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
header nav { display: flex; gap: 1rem; align-items: baseline; border-bottom: 1px solid #ddd; padding-bottom: .5rem; }
.logo { font-weight: bold; text-decoration: none; color: inherit; }
form { display: flex; gap: .5rem; margin: 1rem 0; }
input[type=url] { flex: 1; padding: .4rem; }
.card { border: 1px solid #ddd; border-radius: 4px; padding: .75rem; margin: .5rem 0; }
.urdu { direction: rtl; font-size: 1.1rem; }
.error { color: #b00020; }
.pager { display: flex; gap: .5rem; align-items: center; }
.muted { color: #666; font-size: .9rem; }
"#;

const SCRIPT: &str = r#"
function el(tag, cls, text) {
    const node = document.createElement(tag);
    if (cls) node.className = cls;
    if (text !== undefined) node.textContent = text;
    return node;
}

async function scrape(event) {
    event.preventDefault();
    const out = document.getElementById('result');
    out.replaceChildren(el('p', 'muted', 'Scraping...'));
    const url = document.getElementById('url').value;
    const res = await fetch('/api/scrape', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ url }),
    });
    const body = await res.json();
    if (!res.ok) {
        out.replaceChildren(el('p', 'error', body.error || 'Request failed'));
        return;
    }
    const card = el('div', 'card');
    card.append(
        el('h3', null, body.data.title),
        el('p', null, body.data.summary),
        el('p', 'urdu', body.data.summary_urdu),
        el('details', null),
    );
    const details = card.querySelector('details');
    details.append(el('summary', null, 'Full text'), el('p', null, body.data.full_text));
    out.replaceChildren(card);
    loadList('summaries', 1);
    loadList('full-texts', 1);
}

async function loadList(kind, page) {
    const res = await fetch(`/api/${kind}?page=${page}`);
    const body = await res.json();
    const list = document.getElementById(kind);
    if (!res.ok) {
        list.replaceChildren(el('p', 'error', body.error || 'Request failed'));
        return;
    }
    const items = kind === 'summaries' ? body.data.summaries : body.data.full_texts;
    const meta = body.data.pagination;
    const cards = items.map(item => {
        const card = el('div', 'card');
        card.append(el('strong', null, item.title), el('div', 'muted', item.url));
        if (kind === 'summaries') {
            card.append(el('p', null, item.summary), el('p', 'urdu', item.summary_urdu));
        } else {
            card.append(el('p', null, item.content.slice(0, 400)));
        }
        return card;
    });
    const pager = el('div', 'pager');
    const prev = el('button', null, 'Previous');
    prev.disabled = meta.current_page <= 1;
    prev.onclick = () => loadList(kind, meta.current_page - 1);
    const next = el('button', null, 'Next');
    next.disabled = meta.current_page >= meta.total_pages;
    next.onclick = () => loadList(kind, meta.current_page + 1);
    pager.append(prev, el('span', 'muted',
        `Page ${meta.current_page} of ${Math.max(meta.total_pages, 1)} (${meta.total_count} total)`), next);
    list.replaceChildren(...cards, pager);
}

document.getElementById('scrape-form').addEventListener('submit', scrape);
loadList('summaries', 1);
loadList('full-texts', 1);
"#;

/// Base HTML document.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Blog Summarizer</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <nav>
            <a href="/" class="logo">Blog Summarizer</a>
            <a href="/api/summaries">summaries.json</a>
            <a href="/api/full-texts">full-texts.json</a>
        </nav>
    </header>
    <main>
        <h1>{title}</h1>
        {content}
    </main>
    <script>{SCRIPT}</script>
</body>
</html>"#
    )
}

/// The scrape form and both archive listings.
pub fn index_page() -> String {
    let content = r#"
        <form id="scrape-form">
            <input type="url" id="url" placeholder="https://example.com/blog/post" required>
            <button type="submit">Summarize</button>
        </form>
        <section id="result"></section>
        <h2>Recent summaries</h2>
        <section id="summaries"></section>
        <h2>Full texts</h2>
        <section id="full-texts"></section>
    "#;
    base_template("Summarize a blog post", content)
}
