/// Embedded single-file dashboard (HTML + CSS + JS)
pub const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Spread Edge Dashboard</title>
<style>
  :root, [data-theme="dark"] {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --row: #1e2130;
    --accent: #6c63ff;
    --green: #00c896;
    --red: #ff4f6a;
    --amber: #ff9800;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  [data-theme="light"] {
    --bg: #f4f5f9;
    --card: #ffffff;
    --border: #dcdfe8;
    --row: #eef0f5;
    --accent: #4b44d6;
    --green: #00936e;
    --red: #d6334d;
    --amber: #c76e00;
    --text: #1c1e26;
    --muted: #6b6e85;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); flex-wrap: wrap; }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  .status-dot { width: 10px; height: 10px; border-radius: 50%; background: var(--green); display: inline-block; animation: pulse 1.5s infinite; }
  .status-dot.err { background: var(--red); animation: none; }
  @keyframes pulse { 0%,100% { opacity: 1; } 50% { opacity: .3; } }
  .controls { display: flex; align-items: center; gap: 1rem; margin-left: auto; font-size: .85rem; color: var(--muted); }
  .controls input[type=range] { width: 140px; accent-color: var(--accent); }
  .btn { background: none; border: 1px solid var(--border); color: var(--muted); padding: .3rem .8rem; border-radius: 6px; cursor: pointer; font-size: .8rem; }
  .btn:hover { border-color: var(--accent); color: var(--accent); }
  nav.tabs { display: flex; gap: .25rem; padding: 0 2rem; border-bottom: 1px solid var(--border); }
  nav.tabs button { background: none; border: none; color: var(--muted); padding: .8rem 1rem; cursor: pointer; font-size: .9rem; border-bottom: 2px solid transparent; }
  nav.tabs button.active { color: var(--text); border-bottom-color: var(--accent); }
  .layout { display: grid; grid-template-columns: 1fr 260px; gap: 1.5rem; padding: 1.5rem 2rem; }
  @media (max-width: 900px) { .layout { grid-template-columns: 1fr; } }
  main { display: grid; gap: 1.5rem; align-content: start; }
  .tab { display: none; gap: 1.5rem; }
  .tab.active { display: grid; }
  .stats-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; }
  .stat-card { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  .stat-card .label { color: var(--muted); font-size: .8rem; text-transform: uppercase; letter-spacing: .06em; margin-bottom: .4rem; }
  .stat-card .value { font-size: 1.7rem; font-weight: 700; }
  .pos { color: var(--green); }
  .neg { color: var(--red); }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; overflow: hidden; }
  .panel-header { padding: .9rem 1.2rem; border-bottom: 1px solid var(--border); font-weight: 600; display: flex; justify-content: space-between; align-items: center; }
  table { width: 100%; border-collapse: collapse; }
  th { padding: .7rem 1rem; text-align: left; font-size: .75rem; text-transform: uppercase; color: var(--muted); border-bottom: 1px solid var(--border); }
  td { padding: .65rem 1rem; font-size: .88rem; border-bottom: 1px solid var(--row); }
  tr:last-child td { border-bottom: none; }
  .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
  .bet-card { background: var(--card); border: 2px solid var(--border); border-radius: 10px; padding: 1rem 1.2rem; }
  .bet-card.hi { border-color: var(--red); }
  .bet-card.mid { border-color: var(--amber); }
  .bet-card.lo { border-color: var(--accent); }
  .bet-card h3 { font-size: 1.05rem; margin-bottom: .3rem; }
  .bet-card .game { color: var(--muted); font-size: .85rem; }
  .bet-card .meta { display: flex; justify-content: space-between; margin-top: .7rem; font-size: .82rem; }
  .bet-card .lines { margin-top: .4rem; font-size: .75rem; color: var(--muted); }
  .pill { display: inline-block; padding: .15rem .55rem; border-radius: 20px; font-size: .75rem; font-weight: 600; }
  .pill.win { background: rgba(0,200,150,.15); color: var(--green); }
  .pill.loss { background: rgba(255,79,106,.15); color: var(--red); }
  .pill.line { background: rgba(108,99,255,.2); color: var(--accent); }
  .pill.noline { background: rgba(136,136,170,.15); color: var(--muted); }
  aside .band-row { display: flex; justify-content: space-between; padding: .55rem 1.2rem; font-size: .85rem; border-bottom: 1px solid var(--row); }
  aside .band-row:last-child { border-bottom: none; }
  aside .band-total { font-weight: 600; border-top: 1px solid var(--row); }
  aside .band-guidance { padding: .55rem 1.2rem .9rem; font-size: .8rem; color: var(--muted); }
  #chart-container { padding: 1rem; height: 200px; position: relative; }
  canvas { width: 100% !important; }
  .empty { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; }
  #error-state { display: none; position: fixed; inset: 0; background: var(--bg); align-items: center; justify-content: center; flex-direction: column; gap: 1rem; z-index: 10; }
  #error-state.show { display: flex; }
  #error-state pre { color: var(--red); max-width: 80ch; white-space: pre-wrap; font-size: .85rem; }
</style>
</head>
<body>
<div id="error-state">
  <h2>⚠️ Could not load sheet data</h2>
  <pre id="error-message"></pre>
  <button class="btn" onclick="loadAll(true)">↻ Retry</button>
</div>

<header>
  <span class="status-dot" id="dot"></span>
  <h1>🏈 Spread Edge Dashboard</h1>
  <div class="controls">
    <label>Min edge <input type="range" id="min-edge" min="0" max="10" step="0.5"> <strong id="min-edge-value"></strong></label>
    <label><input type="checkbox" id="actionable-only" checked> Only bets</label>
    <button class="btn" id="theme-btn" onclick="toggleTheme()">◐ Theme</button>
    <button class="btn" onclick="loadAll(true)">↻ Refresh</button>
    <span id="last-updated"></span>
  </div>
</header>

<nav class="tabs">
  <button data-tab="bets" class="active">🎯 Current Bets</button>
  <button data-tab="performance">📈 Performance</button>
  <button data-tab="games">📋 All Games</button>
  <button data-tab="results">🗂 Results</button>
</nav>

<div class="layout">
<main>
  <section class="tab active" id="tab-bets">
    <div class="stats-grid">
      <div class="stat-card"><div class="label">Total Games</div><div class="value" id="s-games">–</div></div>
      <div class="stat-card"><div class="label">Lines Available</div><div class="value" id="s-lines">–</div></div>
      <div class="stat-card"><div class="label">Value Bets</div><div class="value" id="s-bets">–</div></div>
    </div>
    <div class="cards" id="bet-cards"><div class="empty">Loading…</div></div>
  </section>

  <section class="tab" id="tab-performance">
    <div class="stats-grid">
      <div class="stat-card"><div class="label">Settled Bets</div><div class="value" id="p-total">–</div></div>
      <div class="stat-card"><div class="label">Wins</div><div class="value" id="p-wins">–</div></div>
      <div class="stat-card"><div class="label">Losses</div><div class="value" id="p-losses">–</div></div>
      <div class="stat-card"><div class="label">Win Rate</div><div class="value" id="p-winrate">–</div></div>
      <div class="stat-card"><div class="label">Profit (Units)</div><div class="value" id="p-units">–</div></div>
    </div>
    <div class="panel">
      <div class="panel-header">Win Rate Over Time <span style="color:var(--muted);font-size:.8rem;" id="breakeven"></span></div>
      <div id="chart-container"><canvas id="winrate-chart"></canvas></div>
    </div>
    <div class="panel">
      <div class="panel-header">Recent Games</div>
      <table>
        <thead><tr><th>Game</th><th>Our Bet</th><th>Result</th></tr></thead>
        <tbody id="recent-tbody"><tr><td colspan="3" class="empty">Loading…</td></tr></tbody>
      </table>
    </div>
  </section>

  <section class="tab" id="tab-games">
    <div class="panel">
      <div class="panel-header">All Current Games</div>
      <table>
        <thead><tr><th>Matchup</th><th>Favorite</th><th>Predicted</th><th>Line</th><th>Edge</th><th>Edge Category</th><th>Status</th></tr></thead>
        <tbody id="games-tbody"><tr><td colspan="7" class="empty">Loading…</td></tr></tbody>
      </table>
    </div>
  </section>

  <section class="tab" id="tab-results">
    <div class="panel">
      <div class="panel-header">Results</div>
      <div id="results-table"><div class="empty">Loading…</div></div>
    </div>
  </section>
</main>

<aside>
  <div class="panel">
    <div class="panel-header">Edge Band History <span style="color:var(--muted);font-size:.75rem;" id="band-version"></span></div>
    <div id="band-rows"><div class="empty">Loading…</div></div>
    <div class="band-row band-total" id="band-overall"></div>
    <div class="band-guidance" id="band-guidance"></div>
  </div>
</aside>
</div>

<script>
const esc = v => String(v ?? '').replace(/[&<>"']/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));
const pct = v => Number.isFinite(v) ? v.toFixed(1) + '%' : '–';
const signed = v => (v >= 0 ? '+' : '') + v.toFixed(1);
const timeAgo = ts => {
  const d = (Date.now() - new Date(ts).getTime()) / 1000;
  if (d < 60) return Math.round(d) + 's ago';
  if (d < 3600) return Math.round(d / 60) + 'm ago';
  return new Date(ts).toLocaleTimeString();
};

const slider = document.getElementById('min-edge');
const actionableOnly = document.getElementById('actionable-only');
slider.value = document.body.dataset.minEdge || '2';

function applyTheme(theme) {
  document.documentElement.dataset.theme = theme;
  localStorage.setItem('theme', theme);
}
function toggleTheme() {
  applyTheme(document.documentElement.dataset.theme === 'dark' ? 'light' : 'dark');
  if (lastView) drawChart(lastView.performance.win_rate_series, lastView.performance.breakeven_win_rate);
}
applyTheme(localStorage.getItem('theme') || 'dark');

document.querySelectorAll('nav.tabs button').forEach(btn => {
  btn.addEventListener('click', () => {
    document.querySelectorAll('nav.tabs button').forEach(b => b.classList.toggle('active', b === btn));
    document.querySelectorAll('.tab').forEach(t => t.classList.toggle('active', t.id === 'tab-' + btn.dataset.tab));
    if (btn.dataset.tab === 'performance' && lastView) drawChart(lastView.performance.win_rate_series, lastView.performance.breakeven_win_rate);
  });
});

function cardClass(edge) {
  if (edge >= 9) return 'hi';
  if (edge >= 5) return 'mid';
  return 'lo';
}

function renderBets(view) {
  document.getElementById('s-games').textContent = view.total_games;
  document.getElementById('s-lines').textContent = view.lines_available + '/' + view.total_games;
  document.getElementById('s-bets').textContent = view.actionable_count;

  const opps = actionableOnly.checked
    ? view.opportunities.filter(o => o.side !== 'pass')
    : view.opportunities;
  const el = document.getElementById('bet-cards');
  if (!opps.length) {
    el.innerHTML = `<div class="empty">No betting opportunities with edge ≥ ${view.min_edge}</div>`;
    return;
  }
  el.innerHTML = opps.map(o => `<div class="bet-card ${cardClass(o.edge)}">
      <h3>${esc(o.tag)} ${esc(o.recommendation)}</h3>
      <div class="game">${esc(o.matchup)}</div>
      <div class="meta">
        <span><strong>Edge:</strong> ${o.edge.toFixed(1)}</span>
        <span><strong>Band:</strong> ${esc(o.band)}</span>
        <span><strong>Confidence:</strong> ${esc(o.confidence)}</span>
      </div>
      <div class="lines">Our line: ${esc(o.favorite)} -${o.our_line} | Vegas: ${o.vegas_line}</div>
    </div>`).join('');
}

function renderPerformance(p) {
  document.getElementById('p-total').textContent = p.total;
  document.getElementById('p-wins').textContent = p.wins;
  document.getElementById('p-losses').textContent = p.losses;
  const wr = document.getElementById('p-winrate');
  wr.textContent = p.total > 0 ? pct(p.win_rate) : '–';
  wr.className = 'value ' + (p.win_rate >= p.breakeven_win_rate ? 'pos' : 'neg');
  const units = document.getElementById('p-units');
  units.textContent = signed(p.profit_units);
  units.className = 'value ' + (p.profit_units >= 0 ? 'pos' : 'neg');
  document.getElementById('breakeven').textContent = 'Breakeven ' + pct(p.breakeven_win_rate);

  const tbody = document.getElementById('recent-tbody');
  if (!p.recent.length) {
    tbody.innerHTML = '<tr><td colspan="3" class="empty">No settled bets yet</td></tr>';
  } else {
    tbody.innerHTML = p.recent.slice().reverse().map(r => `<tr>
      <td>${esc(r.game)}</td>
      <td>${esc(r.our_bet)}</td>
      <td><span class="pill ${r.result === 'WIN' ? 'win' : 'loss'}">${r.result === 'WIN' ? '✅ WIN' : '❌ LOSS'}</span></td>
    </tr>`).join('');
  }
  drawChart(p.win_rate_series, p.breakeven_win_rate);
}

function renderGames(games) {
  const tbody = document.getElementById('games-tbody');
  if (!games.length) { tbody.innerHTML = '<tr><td colspan="7" class="empty">No games on the sheet</td></tr>'; return; }
  tbody.innerHTML = games.map(g => `<tr>
    <td>${esc(g.matchup)}</td>
    <td>${esc(g.favorite)}</td>
    <td>${esc(g.predicted_difference)}</td>
    <td>${esc(g.line)}</td>
    <td>${esc(g.edge)}</td>
    <td>${esc(g.edge_category)}</td>
    <td><span class="pill ${g.line_available ? 'line' : 'noline'}">${g.line_available ? '📈 ' : '⏳ '}${esc(g.status)}</span></td>
  </tr>`).join('');
}

function renderResults(rows) {
  const el = document.getElementById('results-table');
  if (!rows || !rows.length) { el.innerHTML = '<div class="empty">No results tab configured</div>'; return; }
  const headers = Object.keys(rows[0]);
  el.innerHTML = `<table>
    <thead><tr>${headers.map(h => `<th>${esc(h)}</th>`).join('')}</tr></thead>
    <tbody>${rows.map(r => `<tr>${headers.map(h => `<td>${esc(r[h])}</td>`).join('')}</tr>`).join('')}</tbody>
  </table>`;
}

function renderBands(reference) {
  document.getElementById('band-version').textContent = reference.version;
  document.getElementById('band-rows').innerHTML = reference.bands.map(b => `<div class="band-row">
    <span>${esc(b.tag)} ${esc(b.band)} pts</span>
    <span>${b.history.wins}-${b.history.losses} (${b.history.win_pct}%)</span>
  </div>`).join('');
  const o = reference.overall;
  document.getElementById('band-overall').innerHTML =
    `<span>Overall</span><span>${o.wins}-${o.losses} (${pct(o.win_pct)})</span>`;
  document.getElementById('band-guidance').textContent = reference.guidance;
}

function drawChart(series, breakeven) {
  const canvas = document.getElementById('winrate-chart');
  if (!canvas.parentElement.clientWidth) return;
  const ctx = canvas.getContext('2d');
  const W = canvas.parentElement.clientWidth - 32;
  const H = 160;
  canvas.width = W;
  canvas.height = H;
  ctx.clearRect(0, 0, W, H);
  const css = getComputedStyle(document.documentElement);
  const toY = v => H - (v / 100) * H;

  ctx.strokeStyle = css.getPropertyValue('--border');
  ctx.lineWidth = 1;
  for (let i = 0; i <= 4; i++) {
    const y = H - (i / 4) * H;
    ctx.beginPath(); ctx.moveTo(0, y); ctx.lineTo(W, y); ctx.stroke();
  }

  // Breakeven line
  ctx.setLineDash([6, 4]);
  ctx.strokeStyle = css.getPropertyValue('--green');
  ctx.beginPath(); ctx.moveTo(0, toY(breakeven)); ctx.lineTo(W, toY(breakeven)); ctx.stroke();
  ctx.setLineDash([]);

  if (series.length < 2) return;
  const step = W / (series.length - 1);
  ctx.strokeStyle = css.getPropertyValue('--accent');
  ctx.lineWidth = 2;
  ctx.beginPath();
  series.forEach((p, i) => i === 0 ? ctx.moveTo(0, toY(p.win_rate)) : ctx.lineTo(i * step, toY(p.win_rate)));
  ctx.stroke();
}

let lastView = null;

function showError(message) {
  document.getElementById('error-message').textContent = message;
  document.getElementById('error-state').classList.add('show');
  document.getElementById('dot').classList.add('err');
}

function clearError() {
  document.getElementById('error-state').classList.remove('show');
  document.getElementById('dot').classList.remove('err');
}

async function loadAll(refresh = false) {
  const params = new URLSearchParams({ min_edge: slider.value, refresh: refresh ? 'true' : 'false' });
  let view;
  try {
    const r = await fetch('/api/dashboard?' + params);
    const body = await r.json();
    if (!r.ok) throw new Error(body.error || ('HTTP ' + r.status));
    view = body;
  } catch (e) {
    showError(e.message || String(e));
    return;
  }
  clearError();
  lastView = view;
  renderBets(view);
  renderPerformance(view.performance);
  renderGames(view.games);
  renderResults(view.results);
  renderBands(view.reference);
  document.getElementById('last-updated').textContent = 'Updated ' + timeAgo(view.last_updated);
}

slider.addEventListener('input', () => { document.getElementById('min-edge-value').textContent = slider.value; });
slider.addEventListener('change', () => loadAll(false));
actionableOnly.addEventListener('change', () => lastView && renderBets(lastView));
document.getElementById('min-edge-value').textContent = slider.value;

// Auto-refresh every 5 minutes
loadAll();
setInterval(() => loadAll(false), 300000);
</script>
</body>
</html>"#;
