//! Global CSS for the Verdant page.
//!
//! The palette is emitted as custom properties on `:root`; everything else
//! refers to it through `var(...)`.

use super::colors::PALETTE;

/// Full stylesheet: palette variables followed by the page rules
pub fn global_styles() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css.push_str(PAGE_STYLES);
    css
}

const PAGE_STYLES: &str = r#"
:root {
  --font-serif: 'Fraunces', Georgia, serif;
  --font-sans: 'Inter', system-ui, sans-serif;
  --header-height: 72px;
  --radius: 14px;
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
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: inherit; }

.container {
  width: min(1120px, 100% - 2.5rem);
  margin-inline: auto;
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

/* === Header === */
.header {
  position: fixed;
  inset: 0 0 auto 0;
  height: var(--header-height);
  z-index: 100;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.header.scrolled {
  background: rgba(250, 247, 240, 0.96);
  box-shadow: 0 2px 16px rgba(30, 42, 34, 0.08);
}

.header__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.header__brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-serif);
  font-size: 1.5rem;
  text-decoration: none;
  color: var(--leaf-dark);
}

/* === Navigation === */
.nav__list {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav__link {
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav__link:hover { color: var(--leaf); }

.nav__toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 0.5rem;
}

.nav__toggle-bar {
  width: 24px;
  height: 2px;
  background: var(--ink);
}

@media (max-width: 768px) {
  .nav__toggle { display: flex; }

  .nav {
    position: fixed;
    inset: var(--header-height) 0 0 0;
    background: var(--cream);
    transform: translateX(100%);
    transition: transform var(--transition-normal);
  }

  .nav.nav--open { transform: translateX(0); }

  .nav__list {
    flex-direction: column;
    align-items: center;
    padding-top: 3rem;
  }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  border: 2px solid transparent;
  font: inherit;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn--primary { background: var(--leaf); color: var(--cream); }
.btn--primary:hover { background: var(--leaf-dark); }
.btn--outline { border-color: var(--leaf); color: var(--leaf); background: transparent; }
.btn--ghost { background: transparent; color: var(--ink); }
.btn:disabled { opacity: 0.7; cursor: progress; }

.spinner {
  width: 16px;
  height: 16px;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Sections === */
.hero {
  padding: calc(var(--header-height) + 6rem) 0 6rem;
  background: linear-gradient(160deg, var(--leaf-light), var(--cream));
}

.hero__title {
  font-family: var(--font-serif);
  font-size: clamp(2.5rem, 6vw, 4rem);
  color: var(--leaf-dark);
}

.hero__lead { max-width: 38rem; margin: 1rem 0 2rem; color: var(--ink-muted); }
.hero__actions { display: flex; gap: 1rem; flex-wrap: wrap; }

.section { padding: 5rem 0; }
.section--alt { background: var(--sand); }

.section__title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  margin-bottom: 0.75rem;
}

.section__lead { color: var(--ink-muted); margin-bottom: 2rem; }

/* === Filters === */
.filters {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem 3rem;
  margin-bottom: 2rem;
}

.filter-group__label {
  display: block;
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--ink-muted);
  margin-bottom: 0.5rem;
}

.filter-group__buttons { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.filter-btn {
  padding: 0.4rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--leaf);
  background: transparent;
  color: var(--leaf);
  font: inherit;
  cursor: pointer;
}

.filter-btn.active { background: var(--leaf); color: var(--cream); }

/* === Cards === */
.plant-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.plant-card, .care-item, .season-card {
  animation: rise-in 0.6s ease both;
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: none; }
}

.plant-card__body {
  height: 100%;
  padding: 1.5rem;
  border-radius: var(--radius);
  background: white;
  box-shadow: 0 4px 20px rgba(30, 42, 34, 0.06);
}

.fade-in { animation: fade-in 0.4s ease both; }
.fade-in--replay { animation-name: fade-in-replay; }

@keyframes fade-in {
  from { opacity: 0; transform: scale(0.97); }
  to { opacity: 1; transform: none; }
}

@keyframes fade-in-replay {
  from { opacity: 0; transform: scale(0.97); }
  to { opacity: 1; transform: none; }
}

.plant-card__name { font-family: var(--font-serif); font-size: 1.35rem; }
.plant-card__botanical { font-style: italic; color: var(--ink-muted); font-size: 0.9rem; }
.plant-card__blurb { margin: 0.75rem 0; }
.plant-card__tags { display: flex; gap: 0.5rem; margin-bottom: 0.75rem; }

.tag {
  font-size: 0.75rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--leaf-light);
  color: var(--leaf-dark);
}

.tag--expert { background: var(--terracotta); color: white; }

.plant-card__care {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.25rem 0.75rem;
  font-size: 0.9rem;
}

.plant-card__care dt { font-weight: 600; }

.no-results {
  margin-top: 2rem;
  text-align: center;
  color: var(--ink-muted);
}

/* === Accordion === */
.accordion { display: grid; gap: 0.75rem; }

.accordion__item {
  border-radius: var(--radius);
  background: white;
  overflow: hidden;
}

.accordion__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.1rem 1.5rem;
  cursor: pointer;
  font-weight: 600;
}

.accordion__icon { transition: transform var(--transition-normal); }
.accordion__item--open .accordion__icon { transform: rotate(45deg); }
.accordion__panel { padding: 0 1.5rem 1.25rem; color: var(--ink-muted); }

/* === Seasons === */
.season-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.season-card {
  padding: 1.5rem;
  border-radius: var(--radius);
  background: var(--leaf-light);
}

.season-card__title { font-family: var(--font-serif); margin-bottom: 0.5rem; }

/* === Newsletter === */
.section--newsletter { background: var(--leaf-dark); color: var(--cream); }
.section--newsletter .section__lead { color: var(--leaf-light); }

.newsletter__card {
  max-width: 34rem;
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--cream);
  color: var(--ink);
}

.newsletter__form { display: grid; gap: 1rem; }

.form-field__input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--sand);
  border-radius: 8px;
  font: inherit;
}

.form-field--invalid .form-field__input { border-color: var(--danger); }

.form-field__error, .newsletter__error {
  margin-top: 0.35rem;
  color: var(--danger);
  font-size: 0.85rem;
}

.checkbox { display: flex; gap: 0.6rem; align-items: flex-start; font-size: 0.9rem; }

.newsletter__success h3 { font-family: var(--font-serif); color: var(--leaf-dark); }

/* === Footer === */
.footer { padding: 2rem 0; background: var(--ink); color: var(--sand); }
.footer__inner { display: flex; justify-content: space-between; }

/* === Not Found === */
.not-found {
  min-height: 100vh;
  display: grid;
  place-items: center;
  text-align: center;
}

.not-found__title { font-family: var(--font-serif); font-size: 2.5rem; }
.not-found__path { color: var(--ink-muted); margin: 1rem 0 2rem; }

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_variables_are_emitted() {
        let css = global_styles();
        for (name, value) in PALETTE {
            assert!(css.contains(&format!("{}: {};", name, value)), "missing {}", name);
        }
    }

    #[test]
    fn test_state_classes_are_styled() {
        let css = global_styles();
        for class in [".nav--open", ".scrolled", ".active", ".accordion__item--open", ".fade-in"] {
            assert!(css.contains(class), "missing {}", class);
        }
    }
}
