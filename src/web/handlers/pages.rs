// Static demo pages. Render-only — no core logic lives here, the pages
// just give the JSON endpoints a browser-visible front.

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<title>Gatepost</title>
<h1>Gatepost moderation demo</h1>
<ul>
  <li><a href="/paste">Paste text checker</a></li>
  <li><a href="/facebook">Mini social feed (JSON)</a></li>
  <li><a href="/facebook/live">Live feed</a></li>
  <li><a href="/chatbot">Chatbot</a></li>
</ul>"#,
    )
}

pub async fn paste_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<title>Paste checker</title>
<h1>Paste text to check</h1>
<form method="post" action="/paste">
  <textarea name="comment" rows="6" cols="60"></textarea><br>
  <button type="submit">Check</button>
</form>"#,
    )
}

pub async fn live_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<title>Live feed</title>
<h1>Live feed</h1>
<ul id="events"></ul>
<script>
  const list = document.getElementById("events");
  new EventSource("/facebook/stream").onmessage = (e) => {
    const li = document.createElement("li");
    li.textContent = e.data;
    list.appendChild(li);
  };
</script>"#,
    )
}

pub async fn chatbot_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<title>Chatbot</title>
<h1>Chatbot</h1>
<input id="msg" size="60"><button onclick="send()">Send</button>
<pre id="log"></pre>
<script>
  async function send() {
    const message = document.getElementById("msg").value;
    const res = await fetch("/chatbot", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ message }),
    });
    document.getElementById("log").textContent += JSON.stringify(await res.json()) + "\n";
  }
</script>"#,
    )
}
