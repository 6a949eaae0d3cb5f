//! Global CSS styles for Le Tétravers.
//!
//! Dark cosmic background, neon realm accents, serif display type.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --color-bg: #0a0a1a;
  --color-bg-deep: #12122a;
  --color-panel: rgba(18, 18, 42, 0.85);
  --color-cyan: #00D9FF;
  --color-magenta: #FF3366;
  --color-purple: #9B7EDE;
  --color-gold: #FFD700;
  --color-text: #e8e8f0;
  --color-text-dim: rgba(232, 232, 240, 0.7);

  --font-display: 'Cinzel', 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Raleway', 'Segoe UI', sans-serif;

  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--color-bg);
  color: var(--color-text);
  font-family: var(--font-body);
  line-height: 1.7;
  min-height: 100vh;
  overflow-x: hidden;
}

main {
  position: relative;
  z-index: 1;
  padding-top: 80px;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
}

.glow-text {
  text-shadow: 0 0 10px var(--color-cyan), 0 0 30px rgba(0, 217, 255, 0.5);
}

/* === Starfield === */
.stars-background {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background: radial-gradient(ellipse at center, var(--color-bg-deep) 0%, var(--color-bg) 70%);
}

.star {
  position: absolute;
  border-radius: 50%;
  background: #ffffff;
  opacity: 0.2;
  animation: twinkle 4s ease-in-out infinite;
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; }
  50% { opacity: 1; }
}

/* === Navigation === */
.navigation {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  background: rgba(10, 10, 26, 0.85);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid rgba(0, 217, 255, 0.2);
  animation: slide-down 0.8s ease-out;
}

@keyframes slide-down {
  from { transform: translateY(-100px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1.25rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  text-decoration: none;
}

.logo-text {
  font-family: var(--font-display);
  font-size: 1.5rem;
  letter-spacing: 0.3em;
  color: var(--color-cyan);
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  position: relative;
  color: var(--color-text-dim);
  text-decoration: none;
  letter-spacing: 0.1em;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--color-cyan);
}

.nav-underline {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -6px;
  height: 2px;
  background: var(--color-cyan);
  box-shadow: 0 0 10px var(--color-cyan);
}

/* === Shared Page Chrome === */
.univers-header,
.creatures-header,
.recits-header,
.contact-header {
  text-align: center;
  padding: 4rem 2rem 2rem;
  animation: fade-down 0.8s ease-out;
}

@keyframes fade-down {
  from { transform: translateY(-50px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.page-title {
  font-family: var(--font-display);
  font-size: 3rem;
  color: var(--color-cyan);
  letter-spacing: 0.1em;
}

.page-subtitle {
  margin-top: 1rem;
  color: var(--color-text-dim);
  font-size: 1.15rem;
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.2rem;
  text-align: center;
  margin-bottom: 2rem;
  color: var(--color-gold);
}

.loading-state {
  text-align: center;
  padding: 4rem 2rem;
  color: var(--color-cyan);
  letter-spacing: 0.1em;
  animation: pulse 1.5s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 0.4; }
  50% { opacity: 1; }
}

/* === Home === */
.hero-section {
  min-height: calc(100vh - 80px);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  padding: 2rem;
  text-align: center;
}

.hero-content {
  animation: fade-down 1s ease-out 0.3s both;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 4.5rem;
  letter-spacing: 0.2em;
  color: var(--color-cyan);
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--color-gold);
  margin-top: 0.5rem;
}

.hero-tagline {
  color: var(--color-text-dim);
  margin-top: 0.5rem;
}

.eye-container {
  width: 100%;
  max-width: 480px;
  min-height: 400px;
  animation: fade-in 1.5s ease-out 0.2s both;
}

.mystic-eye {
  width: 100%;
  height: 400px;
}

.eye-ring {
  filter: drop-shadow(0 0 6px currentColor);
}

.eye-sphere {
  filter: drop-shadow(0 0 24px var(--color-cyan));
  opacity: 0.9;
}

.enter-button {
  padding: 1rem 3rem;
  font-family: var(--font-display);
  font-size: 1.1rem;
  letter-spacing: 0.15em;
  color: var(--color-cyan);
  background: transparent;
  border: 2px solid var(--color-cyan);
  border-radius: 4px;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
  animation: fade-in 1s ease-out 1.5s both;
}

.enter-button:hover {
  transform: scale(1.05);
  box-shadow: 0 0 30px rgba(0, 217, 255, 0.8);
}

.enter-button:active {
  transform: scale(0.95);
}

.intro-section {
  padding: 6rem 0;
}

.section-description {
  max-width: 800px;
  margin: 0 auto 3rem;
  text-align: center;
  color: var(--color-text-dim);
  font-size: 1.1rem;
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 2rem;
}

.feature-card {
  padding: 2rem;
  text-align: center;
  background: var(--color-panel);
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 8px;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.feature-card:hover {
  transform: scale(1.05);
  border-color: var(--color-cyan);
}

.feature-icon {
  font-size: 2.5rem;
  margin-bottom: 1rem;
}

.feature-card h3 {
  font-family: var(--font-display);
  margin-bottom: 0.75rem;
}

/* === Univers === */
.magic-system-section,
.royaumes-section,
.transcendance-section {
  padding: 4rem 0;
}

.magic-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  margin-bottom: 2rem;
}

.magic-card {
  padding: 2rem;
  background: var(--color-panel);
  border-left: 3px solid var(--color-purple);
  border-radius: 4px;
}

.magic-card h3 {
  color: var(--color-purple);
  margin-bottom: 0.75rem;
}

.magic-types {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.type-badge {
  padding: 0.5rem 1.25rem;
  border: 1px solid;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.03);
}

.type-icon {
  margin-right: 0.5rem;
}

.royaumes-map {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 2rem;
}

.royaume-node {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 2rem;
  background: var(--color-panel);
  border: 2px solid;
  border-radius: 12px;
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.royaume-node:hover {
  transform: scale(1.1);
}

.royaume-orb,
.modal-orb {
  width: 60px;
  height: 60px;
  border-radius: 50%;
  box-shadow: 0 0 30px currentColor;
}

.transcendance-text,
.creators-text,
.contact-text {
  max-width: 800px;
  margin: 0 auto;
  text-align: center;
  color: var(--color-text-dim);
  font-size: 1.1rem;
}

/* === Detail Overlays === */
.modal-overlay,
.royaume-modal-overlay,
.recit-modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(6px);
  animation: fade-in 0.3s ease-out;
}

.modal-panel,
.royaume-modal,
.recit-modal {
  position: relative;
  width: 100%;
  max-width: 640px;
  max-height: 85vh;
  overflow-y: auto;
  padding: 2.5rem;
  background: var(--color-bg-deep);
  border: 2px solid var(--color-cyan);
  border-radius: 12px;
  animation: zoom-in 0.3s ease-out;
}

.recit-modal {
  max-width: 800px;
  border-color: var(--color-gold);
}

@keyframes zoom-in {
  from { transform: scale(0.8); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 36px;
  height: 36px;
  color: var(--color-text);
  background: transparent;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 50%;
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.modal-close:hover {
  color: var(--color-magenta);
  border-color: var(--color-magenta);
}

.modal-header {
  display: flex;
  align-items: center;
  gap: 1.25rem;
  padding-bottom: 1.25rem;
  margin-bottom: 1.25rem;
  border-bottom: 1px solid;
}

.modal-header h2,
.recit-modal-header h2 {
  font-family: var(--font-display);
  font-size: 2rem;
}

.modal-content p {
  color: var(--color-text-dim);
}

/* === Creatures === */
.creatures-gallery,
.creators-section {
  padding: 4rem 0;
}

.creatures-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 2rem;
}

.creature-card {
  display: flex;
  flex-direction: column;
  padding: 2rem;
  background: var(--color-panel);
  border: 1px solid;
  border-radius: 12px;
  transition: transform var(--transition-normal);
}

.creature-card:hover {
  transform: scale(1.03);
}

.creature-icon {
  width: 100px;
  height: 100px;
  margin: 0 auto 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
}

.creature-glyph {
  font-size: 3rem;
}

.creature-name {
  font-family: var(--font-display);
  font-size: 1.5rem;
  text-align: center;
}

.creature-type {
  text-align: center;
  text-transform: uppercase;
  letter-spacing: 0.15em;
  font-size: 0.85rem;
  margin-bottom: 1rem;
}

.creature-excerpt {
  flex: 1;
  color: var(--color-text-dim);
  font-size: 0.95rem;
}

.creature-royaume {
  margin-top: 1.5rem;
  padding-top: 1rem;
  border-top: 1px solid;
  text-align: center;
}

.royaume-badge {
  display: inline-block;
  padding: 0.25rem 1rem;
  border-radius: 999px;
  color: var(--color-bg);
  font-size: 0.8rem;
  font-weight: 600;
}

/* === Récits === */
.recits-codex {
  padding: 4rem 0;
}

.recits-list {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  max-width: 900px;
  margin: 0 auto;
}

.recit-entry {
  padding: 2rem;
  background: var(--color-panel);
  border-left: 3px solid var(--color-gold);
  border-radius: 4px;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.recit-entry:hover {
  transform: translateX(8px);
  box-shadow: 0 0 20px rgba(255, 215, 0, 0.2);
}

.recit-category {
  display: inline-block;
  padding: 0.2rem 0.8rem;
  color: var(--color-gold);
  border: 1px solid var(--color-gold);
  border-radius: 999px;
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.recit-title {
  font-family: var(--font-display);
  margin: 1rem 0 0.5rem;
}

.recit-excerpt {
  color: var(--color-text-dim);
}

.recit-read-more {
  margin-top: 1rem;
  padding: 0;
  color: var(--color-cyan);
  background: none;
  border: none;
  font-size: 0.95rem;
  cursor: pointer;
}

.recit-modal-header {
  margin-bottom: 1.5rem;
}

.recit-modal-header h2 {
  margin-top: 1rem;
  color: var(--color-gold);
}

.recit-modal-content p {
  margin-bottom: 1.25rem;
  color: var(--color-text-dim);
}

/* === Contact === */
.newsletter-section,
.contact-info-section {
  padding: 4rem 0;
}

.newsletter-card {
  max-width: 700px;
  margin: 0 auto;
  padding: 3rem;
  text-align: center;
  background: var(--color-panel);
  border: 1px solid rgba(0, 217, 255, 0.3);
  border-radius: 16px;
  box-shadow: 0 0 40px rgba(0, 217, 255, 0.1);
}

.newsletter-icon {
  font-size: 3rem;
  color: var(--color-cyan);
  margin-bottom: 1rem;
}

.pulse-animation {
  display: inline-block;
  animation: pulse 2s ease-in-out infinite;
}

.newsletter-title {
  font-family: var(--font-display);
  color: var(--color-gold);
  margin-bottom: 1rem;
}

.newsletter-description {
  color: var(--color-text-dim);
  margin-bottom: 2rem;
}

.form-group {
  display: flex;
  gap: 1rem;
}

.email-input {
  flex: 1;
  padding: 0.9rem 1.25rem;
  color: var(--color-text);
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid rgba(0, 217, 255, 0.3);
  border-radius: 4px;
  font-size: 1rem;
}

.email-input:focus {
  outline: none;
  border-color: var(--color-cyan);
  box-shadow: 0 0 10px rgba(0, 217, 255, 0.3);
}

.submit-button {
  padding: 0.9rem 2rem;
  color: var(--color-bg);
  background: var(--color-cyan);
  border: none;
  border-radius: 4px;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.submit-button:hover:not(:disabled) {
  transform: scale(1.05);
}

.submit-button:disabled,
.email-input:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.form-message {
  margin-top: 1rem;
  padding: 0.75rem 1rem;
  border-radius: 4px;
  animation: fade-down 0.3s ease-out;
}

.form-message.success {
  color: var(--color-cyan);
  border: 1px solid var(--color-cyan);
  background: rgba(0, 217, 255, 0.08);
}

.form-message.error {
  color: var(--color-magenta);
  border: 1px solid var(--color-magenta);
  background: rgba(255, 51, 102, 0.08);
}

.newsletter-benefits {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-top: 2.5rem;
  text-align: left;
}

.benefit-icon {
  color: var(--color-gold);
  margin-right: 0.75rem;
}

.cosmic-divider {
  display: flex;
  justify-content: center;
  gap: 2rem;
  margin: 2.5rem 0;
  color: var(--color-purple);
  font-size: 1.5rem;
}

.contact-quote {
  text-align: center;
  font-style: italic;
  color: var(--color-gold);
  font-size: 1.2rem;
}

/* === Small Screens === */
@media (max-width: 768px) {
  .nav-menu { gap: 1rem; font-size: 0.85rem; }
  .hero-title { font-size: 2.5rem; }
  .page-title { font-size: 2rem; }
  .form-group { flex-direction: column; }
}
"#;
