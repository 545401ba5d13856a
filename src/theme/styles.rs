//! Global CSS styles for the Card Shop.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --duel-navy: #1a1a2e;
  --duel-indigo: #16213e;
  --duel-panel: #0f3460;
  --millennium-gold: #f5c518;
  --magic-purple: #7b2cbf;
  --trap-crimson: #e94560;
  --text-primary: #ffffff;
  --text-muted: rgba(255, 255, 255, 0.7);
  --font-display: 'Cinzel', Georgia, serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--duel-navy);
  color: var(--text-primary);
  font-family: var(--font-body);
}

.shop { opacity: 0; transition: opacity 0.4s ease; }
.shop.loaded { opacity: 1; }

.container { max-width: 1140px; margin: 0 auto; padding: 0 1rem; }

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 1000;
  background: var(--duel-indigo);
  transition: box-shadow 0.3s ease;
}

.navbar .container {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  min-height: 64px;
}

.navbar-brand {
  font-family: var(--font-display);
  font-size: 1.4rem;
  color: var(--millennium-gold);
  text-decoration: none;
}

.navbar-nav { list-style: none; margin: 0; padding: 0; display: flex; gap: 0.5rem; }
.nav-item { position: relative; }
.nav-link {
  display: block;
  padding: 0.5rem 0.75rem;
  color: var(--text-muted);
  text-decoration: none;
}
.nav-link:hover { color: var(--text-primary); }

.dropdown-menu {
  display: none;
  list-style: none;
  margin: 0;
  padding: 0.5rem 0;
  background: var(--duel-panel);
  border-radius: 6px;
}
.dropdown-menu.show { display: block; }
.dropdown-item {
  display: block;
  padding: 0.4rem 1rem;
  color: var(--text-primary);
  text-decoration: none;
  white-space: nowrap;
}
.dropdown-item:hover { background: rgba(255, 255, 255, 0.08); }

.navbar-toggler {
  display: none;
  background: transparent;
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: 6px;
  padding: 0.4rem 0.6rem;
  cursor: pointer;
}
.navbar-toggler.active { border-color: var(--text-primary); background: rgba(255, 255, 255, 0.08); }
.navbar-toggler-icon {
  display: block;
  width: 22px;
  height: 2px;
  background: var(--text-primary);
  box-shadow: 0 -7px 0 var(--text-primary), 0 7px 0 var(--text-primary);
  margin: 8px 0;
}

/* Mobile: collapsible panel, click-driven submenus */
.viewport-mobile .navbar-toggler { display: block; }
.viewport-mobile .navbar-collapse { display: none; width: 100%; max-height: 80vh; overflow-y: auto; }
.viewport-mobile .navbar-collapse.show { display: block; }
.viewport-mobile .navbar-nav { flex-direction: column; padding-bottom: 1rem; }

/* Desktop: inline panel, hover-driven submenus */
.viewport-desktop .navbar-collapse { display: block; }
.native-disclosure .dropdown-menu { position: absolute; top: 100%; left: 0; min-width: 180px; }
.native-disclosure .dropdown:hover .dropdown-menu { display: block; }

/* === Buttons & ripple === */
.btn {
  position: relative;
  overflow: hidden;
  border: none;
  border-radius: 6px;
  padding: 0.6rem 1.2rem;
  font-weight: 600;
  cursor: pointer;
}
.btn-primary { background: var(--magic-purple); color: var(--text-primary); }
.btn-add { background: var(--millennium-gold); color: var(--duel-navy); width: 100%; }

.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.6);
  transform: scale(0);
  animation: ripple-effect 0.6s ease-out;
  pointer-events: none;
}

@keyframes ripple-effect {
  to {
    transform: scale(2);
    opacity: 0;
  }
}

/* === Hero === */
.hero { padding: 4rem 0; background: linear-gradient(135deg, var(--duel-indigo), var(--magic-purple)); }
.hero-inner { display: flex; flex-wrap: wrap; align-items: center; gap: 2rem; }
.hero-copy { flex: 1 1 320px; }
.hero-title { font-family: var(--font-display); font-size: 2.6rem; margin: 0 0 1rem; }
.hero-tagline { color: var(--text-muted); margin-bottom: 1.5rem; }
.hero-cards { flex: 1 1 320px; display: flex; justify-content: center; gap: 1rem; }
.floating-card img { width: 120px; border-radius: 8px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4); }

/* === Stats === */
.stats-section { padding: 3rem 0; background: var(--duel-panel); }
.stats-row { display: flex; flex-wrap: wrap; justify-content: space-around; text-align: center; }
.stat-number { font-size: 2.4rem; color: var(--millennium-gold); margin: 0; }
.stat-label { color: var(--text-muted); }

/* === Cards === */
.section-title { font-family: var(--font-display); margin: 2.5rem 0 1.5rem; }
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
  padding-bottom: 3rem;
}
.yugioh-card {
  background: var(--duel-indigo);
  border-radius: 10px;
  overflow: hidden;
  transition: transform 0.1s ease-out;
}
.card-image { width: 100%; aspect-ratio: 59 / 86; object-fit: cover; display: block; }
.card-image.lazy { background: var(--duel-panel); }
.card-body { padding: 1rem; }
.card-title { margin: 0 0 0.25rem; font-size: 1rem; }
.card-rarity { font-size: 0.8rem; color: var(--millennium-gold); }
.card-price { font-size: 1.2rem; font-weight: 700; }

/* === Toasts === */
.toast-container { position: fixed; top: 0; right: 0; padding: 1rem; z-index: 9999; }
.toast {
  min-width: 260px;
  margin-bottom: 0.5rem;
  border-radius: 6px;
  color: var(--text-primary);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
}
.toast .d-flex { display: flex; align-items: center; }
.toast-body { padding: 0.75rem 1rem; flex: 1; }
.btn-close {
  background: transparent;
  border: none;
  color: inherit;
  font-size: 1.2rem;
  cursor: pointer;
  margin-right: 0.5rem;
}
.btn-close::before { content: '\00d7'; }
.bg-success { background: #198754; }
.bg-danger { background: var(--trap-crimson); }
.bg-warning { background: #ffc107; color: #212529; }
.bg-info { background: #0dcaf0; color: #212529; }

/* === Scroll to top === */
.scroll-to-top {
  position: fixed;
  bottom: 20px;
  right: 20px;
  width: 50px;
  height: 50px;
  border-radius: 50%;
  border: none;
  font-size: 1.25rem;
  color: #fff;
  background: var(--magic-purple);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
  cursor: pointer;
  opacity: 0;
  visibility: hidden;
  transition: all 0.3s ease;
  z-index: 1000;
}
.scroll-to-top.visible { opacity: 1; visibility: visible; }
"#;
