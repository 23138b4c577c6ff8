pub fn render_index(date: &str, month: &str) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{MONTH}}", month)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Reading Check-in</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1, h2 {
      font-family: "Fraunces", Georgia, serif;
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      opacity: 0.7;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 8px 6px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.12);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    input, select, button {
      font: inherit;
      padding: 8px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    button {
      background: var(--accent);
      color: white;
      border: none;
      cursor: pointer;
    }

    button.secondary {
      background: var(--accent-2);
    }

    .done {
      color: #2a8f5a;
      font-weight: 600;
    }

    .chart {
      display: flex;
      align-items: flex-end;
      gap: 3px;
      height: 140px;
    }

    .bar {
      flex: 1;
      background: var(--accent-2);
      border-radius: 4px 4px 0 0;
      min-height: 2px;
    }

    .status[data-type="error"] {
      color: var(--accent);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Reading Check-in</h1>
      <p class="subtitle">Today is <span id="date">{{DATE}}</span> &middot; <span id="summary"></span></p>
    </header>

    <section>
      <h2>Check in</h2>
      <form id="checkin-form">
        <select id="checkin-member" required></select>
        <input id="checkin-chapters" type="number" min="1" step="1" value="1" required />
        <button type="submit">Save</button>
      </form>
    </section>

    <section>
      <h2>Today</h2>
      <table>
        <thead><tr><th>Member</th><th>Chapters</th><th>Streak</th><th></th></tr></thead>
        <tbody id="today-rows"></tbody>
      </table>
    </section>

    <section>
      <h2>Leaderboard</h2>
      <p class="subtitle">
        <input id="month" type="month" value="{{MONTH}}" />
        <a id="export" href="/api/export?month={{MONTH}}">Export CSV</a>
      </p>
      <table>
        <thead><tr><th>#</th><th>Member</th><th>Chapters</th><th>Streak</th></tr></thead>
        <tbody id="board-rows"></tbody>
      </table>
    </section>

    <section>
      <h2>Daily activity</h2>
      <div class="chart" id="chart"></div>
    </section>

    <section>
      <h2>Members</h2>
      <form id="member-form">
        <input id="member-name" placeholder="Name" required />
        <button type="submit" class="secondary">Add member</button>
      </form>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const monthEl = document.getElementById('month');
    const exportEl = document.getElementById('export');
    const checkedInToday = new Set();

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const cell = (text) => {
      const td = document.createElement('td');
      td.textContent = text;
      return td;
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderToday = (today) => {
      document.getElementById('summary').textContent =
        `${today.checked_in}/${today.total_members} checked in`;

      const select = document.getElementById('checkin-member');
      const selected = select.value;
      select.innerHTML = '';
      const rows = document.getElementById('today-rows');
      rows.innerHTML = '';
      checkedInToday.clear();

      today.members.forEach((status) => {
        if (status.checked_in) {
          checkedInToday.add(status.member);
        }
        const option = document.createElement('option');
        option.value = status.member;
        option.textContent = status.member;
        select.appendChild(option);

        const tr = document.createElement('tr');
        tr.appendChild(cell(status.member));
        const chapters = cell(status.checked_in ? `${status.chapters} (done)` : '-');
        if (status.checked_in) {
          chapters.className = 'done';
        }
        tr.appendChild(chapters);
        tr.appendChild(cell(status.streak));
        const actions = document.createElement('td');
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'secondary';
        remove.textContent = 'Remove';
        remove.addEventListener('click', () => removeMember(status.member));
        actions.appendChild(remove);
        tr.appendChild(actions);
        rows.appendChild(tr);
      });

      if (selected) {
        select.value = selected;
      }
    };

    const renderReport = (report) => {
      const rows = document.getElementById('board-rows');
      rows.innerHTML = '';
      report.leaderboard.forEach((row, index) => {
        const tr = document.createElement('tr');
        tr.appendChild(cell(index + 1));
        tr.appendChild(cell(row.member));
        tr.appendChild(cell(row.total_chapters));
        tr.appendChild(cell(row.streak));
        rows.appendChild(tr);
      });

      const chart = document.getElementById('chart');
      chart.innerHTML = '';
      const max = Math.max(1, ...report.activity.map((point) => point.checked_in));
      report.activity.forEach((point) => {
        const bar = document.createElement('div');
        bar.className = 'bar';
        bar.style.height = `${(point.checked_in / max) * 100}%`;
        bar.title = `Day ${point.day}: ${point.checked_in}`;
        chart.appendChild(bar);
      });
    };

    const refresh = async () => {
      const month = monthEl.value;
      exportEl.href = `/api/export?month=${encodeURIComponent(month)}`;
      const [today, report] = await Promise.all([
        request('GET', '/api/today'),
        request('GET', `/api/report?month=${encodeURIComponent(month)}`)
      ]);
      renderToday(today);
      renderReport(report);
    };

    const removeMember = async (name) => {
      if (!window.confirm(`Remove ${name} and all of their records?`)) {
        return;
      }
      try {
        await request('DELETE', `/api/members/${encodeURIComponent(name)}`);
        await refresh();
        setStatus('Removed', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('checkin-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const member = document.getElementById('checkin-member').value;
      const chapters = document.getElementById('checkin-chapters').value;
      const editing = checkedInToday.has(member);
      request(editing ? 'PUT' : 'POST', '/api/checkins', { member, chapters })
        .then(refresh)
        .then(() => setStatus(editing ? 'Updated' : 'Saved', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('member-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('member-name');
      request('POST', '/api/members', { name: input.value })
        .then(() => {
          input.value = '';
          return refresh();
        })
        .then(() => setStatus('Member added', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    monthEl.addEventListener('change', () => {
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
