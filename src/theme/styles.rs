//! Global CSS for VinTrack.
//!
//! Black background, zinc cards, red accent. Component crates only emit
//! class names; everything they use is declared here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --black: #000000;
  --surface: #101014;
  --surface-raised: #181820;
  --surface-hover: #23232b;
  --border: #27272a;
  --border-strong: #3f3f46;

  /* ACCENT */
  --red: #ef4444;
  --red-deep: #dc2626;
  --red-soft: rgba(239, 68, 68, 0.2);
  --discord: #5865f2;
  --discord-hover: #404eed;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  /* STATUS */
  --warning: #facc15;
  --success: #4ade80;
  --danger: #f87171;
  --info: #60a5fa;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Shape */
  --radius-sm: 6px;
  --radius: 10px;
  --radius-lg: 16px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--black);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

img {
  display: block;
  object-fit: cover;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

table {
  border-collapse: collapse;
  width: 100%;
}

/* === Typography === */
.muted { color: var(--text-muted); }
.small { font-size: var(--text-sm); }
.tiny { font-size: var(--text-xs); }
.accent { color: var(--red); }
.positive { color: var(--success); }
.info { color: var(--info); }
.ellipsis {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 2.5rem;
}

.icon {
  flex-shrink: 0;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.6rem 1.1rem;
  border-radius: var(--radius);
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast), border-color var(--transition-fast);
  border: 1px solid transparent;
}

.btn-sm { padding: 0.35rem 0.75rem; font-size: var(--text-xs); }
.btn-md { }
.btn-lg { padding: 0.85rem 1.6rem; font-size: var(--text-base); }
.btn-block { width: 100%; }

.btn-primary { background: var(--red-deep); color: var(--text-primary); }
.btn-primary:hover:not(:disabled) { background: var(--red); }

.btn-secondary {
  background: var(--surface-raised);
  border-color: var(--border);
}
.btn-secondary:hover:not(:disabled) { background: var(--surface-hover); }

.btn-ghost { color: var(--text-secondary); }
.btn-ghost:hover:not(:disabled) { color: var(--text-primary); background: var(--surface-raised); }

.btn-danger { background: transparent; border-color: var(--red-deep); color: var(--red); }
.btn-danger:hover:not(:disabled) { background: var(--red-soft); }

.btn-success { background: #16a34a; }
.btn-success:hover:not(:disabled) { background: #15803d; }

.btn-discord { background: var(--discord); color: var(--text-primary); }
.btn-discord:hover:not(:disabled) { background: var(--discord-hover); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  position: relative;
  padding: 0.4rem;
  border-radius: var(--radius-sm);
  color: var(--text-muted);
}
.icon-btn:hover { color: var(--text-primary); background: var(--surface-raised); }
.icon-btn.danger:hover { color: var(--red); }
.icon-btn.send-btn { padding: 0.6rem; background: var(--red-deep); color: var(--text-primary); }
.icon-btn.send-btn:hover:not(:disabled) { background: var(--red); }
.icon-btn:disabled { opacity: 0.5; cursor: not-allowed; }

.close-btn { font-size: var(--text-xl); line-height: 1; }

.link-btn {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}
.link-btn:hover { color: var(--text-primary); text-decoration: underline; }
.link-btn.success { color: var(--success); }
.link-btn.danger { color: var(--danger); }

/* === Input Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  margin-bottom: 1rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-primary);
}

.input-field {
  width: 100%;
  background: var(--surface-raised);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  padding: 0.55rem 0.8rem;
  color: var(--text-primary);
  font: inherit;
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder { color: var(--text-muted); }

.input-field:focus {
  outline: none;
  border-color: var(--red);
  box-shadow: 0 0 0 1px var(--red);
}

.input-field:disabled { opacity: 0.6; }

.search-input-wrapper {
  position: relative;
  min-width: 260px;
}

.search-input-wrapper .search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
}

.search-input { padding-left: 2.25rem; }

.checkbox-row {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  padding: 0.25rem 0;
  cursor: pointer;
}

.checkbox-row input { accent-color: var(--red); }

/* === Toggle Switch === */
.toggle-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.3rem 0;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.toggle-switch {
  position: relative;
  width: 44px;
  height: 24px;
  border-radius: 999px;
  background: #4b5563;
  transition: background var(--transition-fast);
  flex-shrink: 0;
}

.toggle-switch.on { background: var(--red); }

.toggle-knob {
  position: absolute;
  top: 4px;
  left: 4px;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--text-primary);
  transition: transform var(--transition-fast);
}

.toggle-switch.on .toggle-knob { transform: translateX(20px); }

/* === Status Pills === */
.status-pill {
  display: inline-flex;
  align-items: center;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  border: 1px solid;
  font-size: var(--text-xs);
  font-weight: 500;
}

.tone-warning { color: var(--warning); background: rgba(250, 204, 21, 0.15); border-color: rgba(250, 204, 21, 0.3); }
.tone-success { color: var(--success); background: rgba(74, 222, 128, 0.15); border-color: rgba(74, 222, 128, 0.3); }
.tone-danger { color: var(--danger); background: rgba(248, 113, 113, 0.15); border-color: rgba(248, 113, 113, 0.3); }
.tone-info { color: var(--info); background: rgba(96, 165, 250, 0.15); border-color: rgba(96, 165, 250, 0.3); }
.tone-neutral { color: var(--text-muted); background: var(--surface-raised); border-color: var(--border); }

/* === Avatars === */
.avatar {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--red-deep);
  color: var(--text-primary);
  font-weight: 600;
  flex-shrink: 0;
}

.avatar img {
  width: 100%;
  height: 100%;
  border-radius: 50%;
}

.avatar-sm { width: 32px; height: 32px; font-size: var(--text-sm); }
.avatar-md { width: 40px; height: 40px; }
.avatar-lg { width: 72px; height: 72px; font-size: var(--text-xl); }

.presence-dot {
  position: absolute;
  right: 0;
  bottom: 0;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--success);
  border: 2px solid var(--surface);
}

/* === Rating === */
.rating {
  display: inline-flex;
  align-items: center;
  gap: 1px;
  font-size: var(--text-xs);
}

.star { color: #4b5563; }
.star.filled { color: var(--warning); }
.rating-count { margin-left: 0.25rem; color: var(--text-muted); }

/* === Modal Overlay === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
}

.modal-panel {
  width: 100%;
  max-width: 28rem;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.modal-panel.modal-wide { max-width: 42rem; }

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.modal-title { font-size: var(--text-lg); font-weight: 600; }
.modal-body { padding: 1.5rem; }
.modal-section { margin-bottom: 1.25rem; }
.section-label { font-weight: 500; margin-bottom: 0.35rem; }

.modal-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.modal-actions .btn { flex: 1; }

.modal-price { margin: 1rem 0; }
.price-large { font-size: var(--text-2xl); font-weight: 700; }

.gallery {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin: 1rem 0 1.5rem;
}

.gallery-main { position: relative; }
.gallery-main img { width: 100%; height: 16rem; border-radius: var(--radius); }

.gallery-side {
  display: grid;
  gap: 1rem;
}

.gallery-side img { width: 100%; height: 7.5rem; border-radius: var(--radius); }

.seller-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.seller-name { font-weight: 500; }

/* === Chips === */
.chip-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
  margin-bottom: 0.35rem;
}

.chip {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  padding: 0.2rem 0.5rem;
  border-radius: var(--radius-sm);
  background: var(--red-soft);
  color: var(--red);
  font-size: var(--text-xs);
}

.chip-remove { color: inherit; font-size: var(--text-sm); line-height: 1; }

/* === Landing === */
.landing {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
  background: var(--black);
}

.landing-glow {
  position: absolute;
  top: -10rem;
  left: 50%;
  width: 60rem;
  height: 30rem;
  transform: translateX(-50%);
  background: radial-gradient(ellipse at center, rgba(220, 38, 38, 0.25), transparent 70%);
  pointer-events: none;
}

.landing-nav {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  padding: 1rem 2rem;
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.brand-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border-radius: var(--radius-sm);
  background: var(--red-deep);
  font-weight: 800;
}

.brand-name { font-size: var(--text-lg); font-weight: 700; }

.landing-links {
  display: flex;
  gap: 2rem;
}

.landing-account {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.menu-toggle { display: none; }

.mobile-menu {
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.hero {
  position: relative;
  padding: 5rem 2rem 4rem;
  text-align: center;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  letter-spacing: -0.02em;
}

.hero-subtitle {
  max-width: 36rem;
  margin: 1rem auto 2rem;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.hero-actions {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-layout {
  display: grid;
  grid-template-columns: 1fr auto 1fr;
  align-items: center;
  gap: 2rem;
  max-width: 68rem;
  margin: 4rem auto 0;
  text-align: left;
}

.hero-side {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.earnings-card,
.feature-card,
.notify-card {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.earnings-card {
  flex-direction: column;
  align-items: flex-start;
  border-color: rgba(220, 38, 38, 0.5);
}

.earnings-head {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.earnings-value {
  font-size: var(--text-2xl);
  font-weight: 800;
  color: var(--success);
}

.feature-card .icon { color: var(--red); }
.soon { color: var(--red); font-size: var(--text-xs); font-weight: 600; }

.notify-emoji { font-size: var(--text-xl); }
.notify-title { font-weight: 600; font-size: var(--text-sm); }

.phone {
  width: 18rem;
  padding: 1rem 0.75rem;
  border-radius: 2.5rem;
  border: 6px solid var(--surface-hover);
  background: var(--surface);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.phone-status {
  display: flex;
  justify-content: center;
  font-size: var(--text-xs);
  font-weight: 600;
}

.phone-card {
  display: flex;
  gap: 0.6rem;
  padding: 0.5rem;
  background: var(--surface-raised);
  border-radius: var(--radius);
}

.phone-card-image { position: relative; }
.phone-card-image img { width: 64px; height: 64px; border-radius: var(--radius-sm); }

.phone-card-info {
  display: flex;
  flex-direction: column;
  gap: 0.15rem;
  min-width: 0;
  font-size: var(--text-xs);
}

.phone-card-title { font-weight: 600; }

.phone-card-seller,
.phone-card-price {
  display: flex;
  align-items: center;
  gap: 0.35rem;
}

.phone-card-price .price { font-weight: 700; }
.phone-card-price .retail { color: var(--text-muted); text-decoration: line-through; }
.phone-card-price .discount { color: var(--success); font-weight: 600; }

.condition-badge {
  position: absolute;
  top: 0.5rem;
  left: 0.5rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  background: #f97316;
  font-size: 0.625rem;
  font-weight: 600;
}

.pricing,
.reviews,
.final-cta {
  padding: 5rem 2rem;
}

.plans {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.5rem;
  max-width: 68rem;
  margin: 0 auto;
}

.plan {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 2rem 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.plan.highlighted {
  border-color: var(--red);
  box-shadow: 0 0 40px rgba(220, 38, 38, 0.25);
}

.plan-badge {
  position: absolute;
  top: -0.75rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.2rem 0.8rem;
  border-radius: 999px;
  background: var(--red-deep);
  font-size: var(--text-xs);
  font-weight: 700;
}

.plan-brand { color: var(--text-muted); font-size: var(--text-sm); font-weight: 500; }
.plan-name { font-size: var(--text-xl); font-weight: 700; }
.plan-price { font-size: var(--text-2xl); font-weight: 800; }
.plan-period { color: var(--text-muted); font-size: var(--text-sm); }

.plan-features {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  margin: 1.25rem 0;
  flex: 1;
  font-size: var(--text-sm);
}

.plan-features li { display: flex; gap: 0.5rem; }
.plan-features .included .mark { color: var(--success); }
.plan-features .excluded { color: var(--text-muted); }
.plan-features .excluded .mark { color: var(--danger); }

.review-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.5rem;
  max-width: 68rem;
  margin: 0 auto;
}

.review-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.review-text { color: var(--text-secondary); font-style: italic; }

.review-author {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.review-name { font-weight: 600; }

.final-cta { text-align: center; }
.final-cta p { margin-bottom: 2rem; }

.landing-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 2rem;
  border-top: 1px solid var(--border);
}

/* === App Shell === */
.dashboard {
  display: flex;
  height: 100vh;
  overflow: hidden;
}

.dashboard-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  min-width: 0;
}

.dashboard-content {
  flex: 1;
  overflow-y: auto;
  padding: 2rem;
}

/* === Sidebar === */
.sidebar {
  width: 16rem;
  display: flex;
  flex-direction: column;
  background: var(--surface);
  border-right: 1px solid var(--border);
}

.sidebar-brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 1.25rem 1.25rem 1rem;
  text-align: left;
}

.version-badge {
  padding: 0.1rem 0.45rem;
  border-radius: var(--radius-sm);
  background: var(--red-soft);
  color: var(--red);
  font-size: 0.625rem;
  font-weight: 600;
}

.sidebar-nav {
  flex: 1;
  overflow-y: auto;
  padding: 0 0.75rem;
}

.sidebar-section { margin-top: 1.25rem; }

.sidebar-section-title {
  padding: 0 0.75rem 0.5rem;
  color: var(--text-muted);
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.08em;
}

.sidebar-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.6rem 0.75rem;
  border-radius: var(--radius);
  color: var(--text-secondary);
  font-size: var(--text-sm);
  text-align: left;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.sidebar-item:hover { background: var(--surface-raised); color: var(--text-primary); }

.sidebar-item.active {
  background: var(--red-soft);
  color: var(--red);
}

.sidebar-external { margin-left: auto; color: var(--text-muted); }

.sidebar-footer {
  padding: 1rem 0.75rem;
  border-top: 1px solid var(--border);
}

.sidebar-user {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 0.5rem 0.75rem;
}

.sidebar-user-name {
  font-size: var(--text-sm);
  font-weight: 500;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* === Header === */
.dashboard-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.9rem 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.autocoop-switch {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.autocoop-text {
  display: flex;
  flex-direction: column;
  line-height: 1.2;
}

.autocoop-status { font-size: var(--text-sm); font-weight: 600; color: var(--text-muted); }
.autocoop-status.on { color: var(--success); }

.header-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.notification-dot {
  position: absolute;
  top: 4px;
  right: 4px;
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--red);
}

.user-chip {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 0.35rem 0.6rem;
  border-radius: var(--radius);
  text-align: left;
}

button.user-chip:hover { background: var(--surface-raised); }

.user-chip-text {
  display: flex;
  flex-direction: column;
  line-height: 1.2;
}

.user-chip-name { font-size: var(--text-sm); font-weight: 600; }
.user-chip-role { font-size: var(--text-xs); color: var(--text-muted); }

/* === Views === */
.view {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.view-header.row {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
}

.view-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 0.35rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: 1.25rem;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 1rem;
}

.toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.toolbar-left,
.toolbar-right {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 4rem 1rem;
  color: var(--text-muted);
  text-align: center;
}

.empty-title { color: var(--text-primary); font-size: var(--text-lg); font-weight: 600; }

/* === Tables === */
.table-card { padding: 0; overflow-x: auto; }
.table-card .card-title { padding: 1.25rem 1.25rem 0; }

.data-table th {
  padding: 0.9rem 1.25rem;
  background: var(--surface-raised);
  color: var(--text-secondary);
  font-size: var(--text-xs);
  font-weight: 500;
  text-align: left;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.data-table td {
  padding: 0.9rem 1.25rem;
  border-top: 1px solid var(--border);
  font-size: var(--text-sm);
  vertical-align: middle;
}

.data-table tbody tr:hover { background: rgba(24, 24, 32, 0.5); }

.item-cell {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.thumb { width: 48px; height: 48px; border-radius: var(--radius); }
.item-name { font-weight: 500; }
.price { font-weight: 600; }

.row-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.filter-name-cell {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.accent-bar {
  width: 4px;
  height: 2rem;
  border-radius: 999px;
  background: var(--red);
}

/* === Feed === */
.feed-layout {
  display: grid;
  grid-template-columns: 18rem 1fr;
  gap: 1.5rem;
  align-items: start;
}

.filter-panel {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.filter-group h3 {
  font-size: var(--text-sm);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.price-range {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
}

.buyer-row {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-top: 0.5rem;
}

.buyer-name { font-weight: 500; }
.buyer-balance { margin-left: auto; color: var(--success); font-weight: 600; }

.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(15rem, 1fr));
  gap: 1.25rem;
}

.product-card {
  padding: 0;
  overflow: hidden;
  cursor: pointer;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.product-card:hover { border-color: var(--border-strong); transform: translateY(-2px); }

.product-image { position: relative; }
.product-image img { width: 100%; height: 14rem; }

.product-info {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  padding: 1rem;
}

.product-title { font-weight: 600; }

.product-seller,
.product-prices,
.product-footer,
.product-stats {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.product-stats {
  justify-content: flex-start;
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.product-stats span { display: inline-flex; align-items: center; gap: 0.25rem; }
.product-stats.spaced { justify-content: space-between; margin-bottom: 1.25rem; }

.skeleton { cursor: default; }

.skeleton-image,
.skeleton-line {
  background: linear-gradient(90deg, var(--surface-raised), var(--surface-hover), var(--surface-raised));
  background-size: 200% 100%;
  animation: shimmer 1.2s infinite linear;
}

.skeleton-image { height: 14rem; }
.skeleton-line { height: 0.8rem; margin: 1rem; border-radius: var(--radius-sm); }
.skeleton-line.short { width: 50%; }

@keyframes shimmer {
  from { background-position: 200% 0; }
  to { background-position: -200% 0; }
}

/* === Orders === */
.status-cards {
  display: grid;
  grid-template-columns: repeat(5, minmax(0, 1fr));
  gap: 1rem;
}

.status-card {
  text-align: left;
  color: var(--text-secondary);
  transition: border-color var(--transition-fast);
}

.status-card:hover { border-color: var(--border-strong); }

.status-card.active {
  background: var(--red-soft);
  border-color: rgba(239, 68, 68, 0.5);
  color: var(--red);
}

.status-count { font-size: var(--text-xl); font-weight: 700; }

/* === Stats === */
.range-select { width: auto; }

.metric-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1rem;
}

.metric-value { font-size: var(--text-xl); font-weight: 700; margin: 0.35rem 0; }

.trend {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  font-size: var(--text-sm);
}

.trend.up { color: var(--success); }
.trend.down { color: var(--danger); }

.chart-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.bar-chart {
  display: flex;
  align-items: flex-end;
  gap: 0.75rem;
  height: 12rem;
}

.bar-column {
  flex: 1;
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  align-items: center;
  gap: 0.4rem;
}

.bar {
  width: 100%;
  border-radius: var(--radius-sm) var(--radius-sm) 0 0;
  background: linear-gradient(to top, var(--red-deep), var(--red));
}

.share-row { margin-bottom: 1rem; }

.share-head {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  margin-bottom: 0.35rem;
}

.share-track {
  height: 8px;
  border-radius: 999px;
  background: var(--surface-raised);
  overflow: hidden;
}

.share-fill { height: 100%; background: var(--red); }

/* === Messaging === */
.messaging-view {
  display: grid;
  grid-template-columns: 20rem 1fr;
  gap: 1.25rem;
  height: calc(100vh - 10rem);
}

.conversation-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  overflow-y: auto;
}

.conversation-list-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.conversation-list-head .card-title { margin-bottom: 0; }

.conversation-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.6rem;
  border-radius: var(--radius);
  text-align: left;
}

.conversation-row:hover { background: var(--surface-raised); }
.conversation-row.active { background: var(--red-soft); }

.conversation-body {
  flex: 1;
  min-width: 0;
}

.conversation-top,
.conversation-bottom {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.unread-badge {
  min-width: 1.25rem;
  padding: 0 0.35rem;
  border-radius: 999px;
  background: var(--red-deep);
  font-size: var(--text-xs);
  font-weight: 600;
  text-align: center;
}

.thread {
  display: flex;
  flex-direction: column;
  padding: 0;
}

.thread-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.thread-messages {
  flex: 1;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.25rem;
}

.bubble {
  max-width: 70%;
  padding: 0.6rem 0.9rem;
  border-radius: var(--radius-lg);
  font-size: var(--text-sm);
}

.bubble.mine { align-self: flex-end; background: var(--red-deep); }
.bubble.theirs { align-self: flex-start; background: var(--surface-raised); }

.bubble-time {
  display: block;
  margin-top: 0.25rem;
  font-size: 0.625rem;
  opacity: 0.7;
}

.thread-compose {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-top: 1px solid var(--border);
}

.thread-compose .form-field { flex: 1; margin-bottom: 0; }

/* === Account === */
.account-card {
  max-width: 36rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.account-identity {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1rem;
}

.account-name { font-size: var(--text-lg); font-weight: 600; }

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 900px) {
  .landing-links,
  .landing-account { display: none; }
  .menu-toggle { display: inline-flex; }
  .hero-layout,
  .plans,
  .review-grid { grid-template-columns: 1fr; }
  .phone { margin: 0 auto; }
  .feed-layout,
  .chart-grid,
  .messaging-view { grid-template-columns: 1fr; }
  .metric-grid,
  .status-cards { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .sidebar { width: 4.5rem; }
  .sidebar .brand-name,
  .sidebar .version-badge,
  .sidebar-section-title,
  .sidebar-item span,
  .sidebar-user-name { display: none; }
}
"#;
