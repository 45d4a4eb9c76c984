pub const BASE_COMPONENTS: &str = r#"
/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  width: 100%;
  padding: var(--space-4);
  background-color: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.site-header.scrolled {
  background-color: var(--header-scrolled);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.site-title {
  font-family: 'Poppins', sans-serif;
  font-weight: 900;
  line-height: 1.25;
  text-align: center;
  font-size: 6rem;
}

.header-desktop {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.header-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-8);
  width: 100%;
  max-width: 32rem;
  margin-top: var(--space-4);
}

.nav-links {
  display: flex;
  gap: var(--space-8);
  list-style: none;
  font-size: 1.25rem;
}

.nav-link {
  color: inherit;
  font-weight: 500;
  text-underline-offset: 4px;
}

.nav-link:hover,
.nav-link.active {
  text-decoration: underline;
}

.nav-link.active {
  color: var(--nav-active);
}

.icon-button {
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  padding: var(--space-2);
  border-radius: var(--radius-full);
}

.icon {
  width: 2rem;
  height: 2rem;
}

.header-mobile {
  display: none;
}

/* Mobile drawer */
.mobile-menu {
  display: none;
  position: fixed;
  top: var(--menu-top);
  left: 0;
  right: 0;
  z-index: 40;
  padding: var(--space-4);
  flex-direction: column;
  align-items: center;
  background-color: var(--menu-background);
  opacity: 0;
  visibility: hidden;
}

.mobile-menu.open {
  opacity: 1;
  visibility: visible;
}

.mobile-menu .menu-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  font-size: 3rem;
  font-weight: 100;
}

.mobile-menu ul {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  list-style: none;
  padding-top: var(--space-8);
  font-size: 1.875rem;
}

.mobile-menu .nav-link {
  display: block;
  text-align: center;
  font-weight: 700;
  text-decoration: none;
}

.mobile-menu .nav-link.active {
  color: var(--accent);
}

@media (max-width: 767px) {
  .header-desktop {
    display: none;
  }

  .header-mobile {
    display: flex;
    flex-direction: column;
    align-items: center;
  }

  .site-title {
    font-size: 2.25rem;
  }

  .mobile-menu {
    display: flex;
  }
}

/* Buttons */
.btn-outline {
  margin-top: var(--space-4);
  padding: var(--space-2) var(--space-4);
  border: 2px solid currentColor;
  border-radius: var(--radius-md);
  background: none;
  color: inherit;
  font-weight: 700;
  cursor: pointer;
  transition: background-color var(--transition-fast);
}

.btn-outline:hover {
  background-color: var(--hover-surface);
}

.btn-pill {
  padding: var(--space-4) var(--space-8);
  border-radius: var(--radius-full);
  font-weight: 700;
  font-size: 1.125rem;
  background-color: var(--pill-background);
  color: var(--pill-text);
  transition: transform var(--transition-normal);
}

.btn-pill:hover {
  transform: scale(1.05);
  text-decoration: none;
}

/* Modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 64rem;
  max-height: 90vh;
  overflow-y: auto;
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background-color: var(--surface);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.modal-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  font-size: 1.875rem;
  font-weight: 100;
}

.modal-body {
  padding: var(--space-8);
}

.modal-title {
  font-size: 3rem;
  font-weight: 900;
  margin-bottom: var(--space-4);
  color: var(--heading);
}

.modal-description {
  font-size: 1.125rem;
  margin-bottom: var(--space-8);
  opacity: 0.75;
}

.modal-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: var(--space-8);
  align-items: start;
}

.modal-gallery figure {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.modal-gallery img {
  width: 100%;
  height: auto;
  object-fit: contain;
  border-radius: var(--radius-md);
}

.modal-gallery figcaption {
  margin-top: var(--space-2);
  font-size: 0.875rem;
  font-style: italic;
  text-align: center;
  opacity: 0.75;
}
"#;
