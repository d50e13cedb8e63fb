//! Standalone HTML/JS clock page.
//!
//! The page carries its own copy of the hand-angle formulas so it keeps
//! running in a browser with no server.

use super::svg::escape;
use crate::clock::Mode;
use crate::config::PageSection;
use crate::render::{HandLengths, HandWidths};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>@TITLE@</title>
<style>
  body { background: @BG@; color: @FG@; font-family: sans-serif; text-align: center; margin: 0; padding: 20px; }
  button { background: @FG@; color: @BG@; border: none; padding: 8px 16px; margin: 4px; font-size: 14px; cursor: pointer; }
  #digital { font-size: 64px; font-weight: bold; margin: 60px 0; font-variant-numeric: tabular-nums; }
  .hint { font-size: 12px; opacity: 0.7; }
</style>
</head>
<body>
<h1>@TITLE@</h1>
<div>
  <button id="toggle-mode">Toggle analog/digital</button>
  <button id="toggle-format">Toggle 12/24-hour</button>
</div>
<canvas id="face" width="@SIZE@" height="@SIZE@"></canvas>
<div id="digital"></div>
<p class="hint">Press t to toggle the mode.</p>
<script>
  const FG = "@FG@";
  const MARGIN = @MARGIN@;
  const LENGTHS = { hour: @LH@, minute: @LM@, second: @LS@ };
  const WIDTHS = { hour: @WH@, minute: @WM@, second: @WS@ };
  let analog = @ANALOG@;
  let hour24 = @HOUR24@;

  const canvas = document.getElementById("face");
  const digital = document.getElementById("digital");
  const ctx = canvas.getContext("2d");

  // 0 degrees is twelve o'clock, angles grow clockwise
  function angles(now) {
    const h = now.getHours() % 12, m = now.getMinutes();
    const s = now.getSeconds() + now.getMilliseconds() / 1000;
    return {
      hour: ((h + m / 60 + s / 3600) * 30) % 360,
      minute: ((m + s / 60) * 6) % 360,
      second: (s * 6) % 360,
    };
  }

  function project(cx, cy, deg, len) {
    const rad = deg * Math.PI / 180;
    return [cx + len * Math.sin(rad), cy - len * Math.cos(rad)];
  }

  function line(cx, cy, deg, from, to, width) {
    const [x1, y1] = project(cx, cy, deg, from);
    const [x2, y2] = project(cx, cy, deg, to);
    ctx.lineWidth = width;
    ctx.beginPath();
    ctx.moveTo(x1, y1);
    ctx.lineTo(x2, y2);
    ctx.stroke();
  }

  function drawAnalog(now) {
    const w = canvas.width, h = canvas.height;
    const cx = w / 2, cy = h / 2;
    const r = Math.min(cx, cy) - MARGIN;
    ctx.clearRect(0, 0, w, h);
    if (r <= 0) return;
    ctx.strokeStyle = FG;
    ctx.lineCap = "round";
    ctx.lineWidth = 2;
    ctx.beginPath();
    ctx.arc(cx, cy, r, 0, 2 * Math.PI);
    ctx.stroke();
    for (let i = 0; i < 12; i++) line(cx, cy, i * 30, r * 0.85, r * 0.95, 2);
    const a = angles(now);
    for (const hand of ["hour", "minute", "second"]) {
      line(cx, cy, a[hand], 0, r * LENGTHS[hand], WIDTHS[hand]);
    }
  }

  function pad(n) { return String(n).padStart(2, "0"); }

  function drawDigital(now) {
    let h = now.getHours();
    let suffix = "";
    if (!hour24) {
      suffix = h >= 12 ? " PM" : " AM";
      h = h % 12 || 12;
    }
    digital.textContent = pad(h) + ":" + pad(now.getMinutes()) + ":" + pad(now.getSeconds()) + suffix;
  }

  function tick() {
    const now = new Date();
    canvas.style.display = analog ? "inline" : "none";
    digital.style.display = analog ? "none" : "block";
    if (analog) drawAnalog(now); else drawDigital(now);
  }

  document.getElementById("toggle-mode").onclick = () => { analog = !analog; tick(); };
  document.getElementById("toggle-format").onclick = () => { hour24 = !hour24; tick(); };
  document.addEventListener("keydown", (e) => {
    if (e.key === "t" || e.key === "T") { analog = !analog; tick(); }
  });

  setInterval(tick, 33);
  tick();
</script>
</body>
</html>
"#;

/// Options baked into the generated page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub start_mode: Mode,
    pub twenty_four_hour: bool,
    pub lengths: HandLengths,
    pub widths: HandWidths,
}

/// Render the self-contained clock page.
pub fn render_html(page: &PageSection, options: &PageOptions) -> String {
    let num = |v: f64| if v.is_finite() { v.to_string() } else { "0".to_string() };
    TEMPLATE
        .replace("@TITLE@", &escape(&page.title))
        .replace("@BG@", &css_color(&page.background))
        .replace("@FG@", &css_color(&page.foreground))
        .replace("@SIZE@", &page.size.to_string())
        .replace("@MARGIN@", &num(page.margin))
        .replace("@LH@", &num(options.lengths.hour))
        .replace("@LM@", &num(options.lengths.minute))
        .replace("@LS@", &num(options.lengths.second))
        .replace("@WH@", &num(options.widths.hour))
        .replace("@WM@", &num(options.widths.minute))
        .replace("@WS@", &num(options.widths.second))
        .replace("@ANALOG@", if options.start_mode == Mode::Analog { "true" } else { "false" })
        .replace("@HOUR24@", if options.twenty_four_hour { "true" } else { "false" })
}

/// Keep only characters that are valid in a CSS colour value.
fn css_color(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '))
        .collect()
}
