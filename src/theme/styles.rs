//! Global CSS styles for Creative Diary.
//!
//! Warm paper and wood with a violet ink accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #fdf6ec;
  --paper-card: #fffaf2;
  --paper-page: #fef7cd;
  --paper-sketch: #fec6a1;

  /* INK (Primary accent) */
  --ink: #6d3fd6;
  --ink-soft: rgba(109, 63, 214, 0.3);
  --ink-faint: rgba(109, 63, 214, 0.12);
  --ink-contrast: #ffffff;

  /* WOOD (Shelf) */
  --wood-light: #8b7355;
  --wood: #6b5845;
  --wood-dark: #5c4033;

  /* ACCENT */
  --accent: #f3e8ff;
  --dot: #8b5cf6;

  /* TEXT */
  --text-primary: #2b2233;
  --text-muted: #7a6f82;

  /* SEMANTIC */
  --danger: #d9304f;

  /* Typography */
  --font-hand: 'Caveat', 'Comic Neue', cursive;
  --font-body: 'Nunito', 'Segoe UI', sans-serif;

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

body {
  font-family: var(--font-body);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font: inherit;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

textarea {
  font: inherit;
  color: inherit;
}

/* === Layout === */
.diary {
  display: flex;
  min-height: 100vh;
}

.diary__main {
  flex: 1;
  padding: 2rem;
}

.diary__header {
  text-align: center;
  margin-bottom: 2rem;
  animation: fade-in 500ms ease-out both;
}

.page-title {
  font-family: var(--font-hand);
  font-size: 4.5rem;
  color: var(--ink);
  line-height: 1.1;
}

.tagline {
  font-size: 1.125rem;
  color: var(--text-muted);
}

.diary__content {
  max-width: 72rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.diary__top {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 1.5rem;
}

.card {
  background: var(--paper-card);
  border: 4px solid var(--ink-soft);
  border-radius: 1rem;
  padding: 1.5rem;
  box-shadow: 0 10px 25px rgba(43, 34, 51, 0.12);
  animation: fade-in 500ms ease-out both;
}

.card-title,
.section-title {
  font-family: var(--font-hand);
  color: var(--ink);
}

.card-title {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.section-title {
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 1.5rem;
}

/* === Sidebar === */
.sidebar {
  width: 16rem;
  min-height: 100vh;
  position: sticky;
  top: 0;
  padding: 1.5rem;
  background: var(--paper-card);
  border-right: 4px solid var(--ink-soft);
}

.profile {
  display: flex;
  flex-direction: column;
  align-items: center;
  margin-bottom: 2rem;
  text-align: center;
}

.profile__avatar {
  width: 8rem;
  height: 8rem;
  border-radius: 50%;
  border: 4px solid var(--ink-soft);
  background: var(--ink);
  color: var(--ink-contrast);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
  box-shadow: 0 10px 20px rgba(109, 63, 214, 0.25);
}

.profile__name {
  font-family: var(--font-hand);
  font-size: 2rem;
  color: var(--ink);
}

.profile__tagline {
  font-size: 0.875rem;
  font-style: italic;
  color: var(--text-muted);
}

.stats {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.stat-card {
  padding: 1rem;
  background: var(--paper);
  border: 2px solid var(--ink-faint);
  border-radius: 0.75rem;
}

.stat-card__header {
  display: flex;
  gap: 0.75rem;
  align-items: center;
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--ink);
}

.stat-card__value {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--ink);
}

/* === Calendar === */
.calendar__header {
  display: flex;
  justify-content: center;
  margin-bottom: 1.5rem;
}

.month-pill {
  background: var(--ink);
  color: var(--ink-contrast);
  padding: 0.5rem 2rem;
  border-radius: 999px;
  border: 4px solid var(--ink-soft);
  font-family: var(--font-hand);
  font-size: 2rem;
}

.calendar__grid {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  gap: 0.75rem;
}

.day-cell {
  position: relative;
  aspect-ratio: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  background: var(--accent);
  color: var(--ink);
  border: 3px solid var(--ink-soft);
  border-radius: 1.5rem;
  box-shadow: 0 4px 8px rgba(43, 34, 51, 0.08);
  transition: all var(--transition-normal);
}

.day-cell:hover,
.day-cell--filled {
  background: var(--ink);
  color: var(--ink-contrast);
}

.day-cell:hover {
  transform: scale(1.05);
  box-shadow: 0 10px 20px rgba(43, 34, 51, 0.16);
}

.day-cell__dot {
  position: absolute;
  top: -0.25rem;
  right: -0.25rem;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: var(--dot);
  border: 2px solid var(--paper-card);
}

.day-cell__icon {
  font-size: 1.25rem;
}

.day-cell__label {
  font-size: 0.75rem;
  font-weight: 700;
}

/* === Notes === */
.notes-panel__lines {
  width: 100%;
  min-height: 16rem;
  border: none;
  resize: none;
  outline: none;
  background: repeating-linear-gradient(
    to bottom,
    transparent 0,
    transparent 1.95rem,
    var(--ink-soft) 1.95rem,
    var(--ink-soft) 2rem
  );
  line-height: 2rem;
}

/* === Shelf === */
.shelf {
  position: relative;
  padding: 2rem 2rem 0;
  border-radius: 0.75rem;
  border: 4px solid var(--wood-dark);
  background: linear-gradient(to bottom, var(--wood-light), var(--wood));
  box-shadow: 0 20px 40px rgba(43, 34, 51, 0.25);
}

.shelf__items {
  display: flex;
  justify-content: space-around;
  align-items: flex-end;
  gap: 1rem;
  min-height: 220px;
  padding-bottom: 1rem;
}

.shelf__plank {
  height: 1rem;
  margin: 1rem -2rem 0;
  border-radius: 0 0 0.75rem 0.75rem;
  background: linear-gradient(to bottom, var(--wood), var(--wood-dark));
}

.shelf-slot {
  position: relative;
  background: none;
  border: none;
  transition: transform var(--transition-normal);
  animation: fade-in 500ms ease-out both;
}

.shelf-slot:hover {
  translate: 0 -0.5rem;
  scale: 1.05;
}

.shelf-spine {
  width: 4rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem;
  border: 4px solid var(--ink-soft);
  border-radius: 0.5rem;
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
  color: #ffffff;
}

.shelf-spine__icon {
  font-size: 1.5rem;
}

.shelf-spine__title {
  writing-mode: vertical-rl;
  text-orientation: mixed;
  font-size: 0.75rem;
  font-weight: 700;
  text-shadow: 0 1px 2px rgba(0, 0, 0, 0.5);
}

.shelf-record {
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  border: 4px solid var(--ink-soft);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
}

.shelf-record__hole {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 50%;
  background: var(--paper);
}

.shelf-slot__tooltip {
  position: absolute;
  bottom: -2rem;
  left: 50%;
  translate: -50% 0;
  padding: 0.25rem 0.75rem;
  border-radius: 0.5rem;
  background: var(--ink);
  color: var(--ink-contrast);
  font-size: 0.75rem;
  font-weight: 700;
  white-space: nowrap;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-fast);
}

.shelf-slot:hover .shelf-slot__tooltip {
  opacity: 1;
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(43, 34, 51, 0.55);
}

.modal {
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--paper-card);
  border: 4px solid var(--ink-soft);
  border-radius: 1rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
  animation: modal-appear 300ms ease-out;
}

.day-editor {
  width: min(42rem, 92vw);
}

.shelf-viewer {
  width: min(64rem, 94vw);
}

@keyframes modal-appear {
  from { opacity: 0; transform: scale(0.96); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

.modal-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-family: var(--font-hand);
  font-size: 2.5rem;
  color: var(--ink);
}

.modal-section {
  margin-top: 1.5rem;
  padding: 1.5rem;
  border: 2px solid var(--ink-faint);
  border-radius: 0.75rem;
  background: rgba(253, 246, 236, 0.5);
}

.modal-section__title {
  font-family: var(--font-hand);
  font-size: 1.75rem;
  color: var(--ink);
  margin-bottom: 0.75rem;
}

.day-editor__text {
  width: 100%;
  min-height: 12rem;
  padding: 0.75rem;
  resize: none;
  border: 2px solid var(--ink-faint);
  border-radius: 0.5rem;
  background: var(--paper);
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.modal-actions > button {
  flex: 1;
}

.btn-primary,
.btn-secondary {
  padding: 0.75rem 1.5rem;
  border-radius: 0.75rem;
  font-size: 1.125rem;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--ink);
  color: var(--ink-contrast);
  border: none;
  box-shadow: 0 6px 12px rgba(109, 63, 214, 0.25);
}

.btn-primary:hover {
  background: #5a31b8;
}

.btn-secondary {
  background: transparent;
  color: var(--ink);
  border: 2px solid var(--ink-soft);
}

.btn-secondary:hover:not(:disabled) {
  background: var(--ink-faint);
}

.btn-wide {
  width: 100%;
  margin-top: 1.5rem;
}

/* === Photos === */
.photo-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
}

.photo-tile {
  position: relative;
  aspect-ratio: 1;
  overflow: hidden;
  border: 4px solid var(--ink-faint);
  border-radius: 0.5rem;
  background: var(--paper);
}

.photo-tile__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.photo-tile__remove {
  position: absolute;
  top: 0.25rem;
  right: 0.25rem;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 50%;
  border: none;
  background: rgba(43, 34, 51, 0.6);
  color: #ffffff;
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.photo-tile:hover .photo-tile__remove {
  opacity: 1;
}

.photo-picker {
  aspect-ratio: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  border: 4px dashed var(--ink-soft);
  border-radius: 0.5rem;
  background: var(--paper);
  color: var(--ink);
  transition: all var(--transition-fast);
}

.photo-picker:hover:not(:disabled) {
  border-color: var(--ink);
  background: var(--ink-faint);
}

.photo-picker__icon {
  font-size: 1.5rem;
}

.photo-picker__label {
  font-size: 0.75rem;
}

.photo-error {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  margin-top: 0.75rem;
  padding: 0.5rem 0.75rem;
  border-radius: 0.5rem;
  background: rgba(217, 48, 79, 0.1);
  color: var(--danger);
  font-size: 0.875rem;
}

.photo-error__dismiss {
  background: none;
  border: 1px solid var(--danger);
  border-radius: 0.375rem;
  color: var(--danger);
  padding: 0.125rem 0.5rem;
}

/* === Book === */
.book__spread {
  display: flex;
  gap: 1rem;
}

.book__page {
  position: relative;
  flex: 1;
  min-height: 500px;
  padding: 3rem 2rem 2rem;
  background: var(--paper-page);
  border: 4px solid var(--ink-soft);
  border-radius: 0.5rem;
  box-shadow: 0 10px 20px rgba(43, 34, 51, 0.15);
}

.book__page-number {
  position: absolute;
  top: 1rem;
  right: 1rem;
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--text-muted);
}

.book__text {
  width: 100%;
  min-height: 420px;
  border: none;
  outline: none;
  resize: none;
  background: repeating-linear-gradient(
    to bottom,
    transparent 0,
    transparent 1.95rem,
    var(--ink-faint) 1.95rem,
    var(--ink-faint) 2rem
  );
  line-height: 2rem;
}

.book__lines {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.book__line {
  min-height: 1.5rem;
  border-bottom: 1px solid var(--ink-faint);
}

.page-nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: 1.5rem;
}

.page-nav__title {
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--ink);
}

/* === Sketchbook === */
.sketchbook {
  padding: 2rem;
  min-height: 500px;
  background: var(--paper-sketch);
  border: 4px solid var(--ink-soft);
  border-radius: 0.5rem;
}

.shelf-viewer__title {
  font-family: var(--font-hand);
  font-size: 2.25rem;
  color: var(--ink);
  text-align: center;
  margin-bottom: 1rem;
}

.sketchbook__sheet {
  text-align: center;
  color: var(--text-muted);
  margin-bottom: 1rem;
}

/* === Markdown === */
.markdown-toolbar {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.markdown-toolbar > button {
  padding: 0.25rem 0.75rem;
  border: 2px solid var(--ink-soft);
  border-radius: 0.5rem;
  background: transparent;
  color: var(--ink);
}

.markdown-toolbar > button.active {
  background: var(--ink);
  color: var(--ink-contrast);
}

.markdown-textarea,
.markdown-preview {
  width: 100%;
  min-height: 350px;
  padding: 1rem;
  border: 2px solid var(--ink-faint);
  border-radius: 0.5rem;
  background: var(--paper-card);
}

.markdown-textarea {
  resize: vertical;
}

.page-markdown h1,
.page-markdown h2,
.page-markdown h3 {
  font-family: var(--font-hand);
  color: var(--ink);
  margin: 0.5rem 0;
}

.page-markdown p,
.page-markdown ul,
.page-markdown ol,
.page-markdown blockquote {
  margin-bottom: 0.75rem;
}

.page-markdown ul,
.page-markdown ol {
  padding-left: 1.5rem;
}

.page-markdown blockquote {
  padding-left: 1rem;
  border-left: 3px solid var(--ink-soft);
  color: var(--text-muted);
}

/* === Album === */
.album__pages {
  padding: 2rem;
  border: 4px solid var(--ink-soft);
  border-radius: 0.5rem;
  background: linear-gradient(135deg, rgba(217, 70, 239, 0.2), rgba(139, 92, 246, 0.2));
}

.album__grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  margin-bottom: 1.5rem;
}

.album__frame {
  padding: 1rem;
  background: #ffffff;
  rotate: -2deg;
  box-shadow: 0 10px 20px rgba(43, 34, 51, 0.2);
}

.album__frame .photo-tile {
  aspect-ratio: 4 / 3;
  border: none;
}

.album__placeholder {
  aspect-ratio: 4 / 3;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3rem;
  background: var(--paper);
  border-radius: 0.25rem;
}

.album__caption {
  margin-top: 0.75rem;
  text-align: center;
  font-size: 0.875rem;
  font-style: italic;
  color: var(--text-muted);
}

.album .photo-picker {
  aspect-ratio: auto;
  width: 100%;
  padding: 1rem;
}

/* === Vinyl === */
.vinyl__stage {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 3rem;
  border: 4px solid var(--ink-soft);
  border-radius: 0.5rem;
  background: linear-gradient(135deg, var(--ink-soft), var(--ink-faint));
}

.vinyl__record {
  width: 16rem;
  height: 16rem;
  border-radius: 50%;
  border: 8px solid var(--ink-soft);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 2rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
  animation: spin-slow 8s linear infinite;
}

.vinyl__label {
  width: 6rem;
  height: 6rem;
  border-radius: 50%;
  background: var(--paper);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3rem;
}

.vinyl__title {
  font-family: var(--font-hand);
  font-size: 2.5rem;
  color: var(--ink);
  margin-bottom: 1rem;
}

.vinyl__subtitle {
  font-size: 1.125rem;
  font-style: italic;
  color: var(--text-muted);
}

@keyframes spin-slow {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

/* === Responsive === */
@media (max-width: 1024px) {
  .diary__top {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 768px) {
  .sidebar {
    display: none;
  }

  .calendar__grid {
    grid-template-columns: repeat(5, 1fr);
  }

  .book__spread {
    flex-direction: column;
  }
}
"#;
