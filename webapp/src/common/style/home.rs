pub const HOME_STYLES: &str = r#"
/* Sections */
.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  background: var(--background);
  color: var(--text-primary);
  transition: color 500ms, background 500ms;
}

.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-height: 70vh;
  padding: var(--space-24);
  padding-top: 5rem;
}

.profile-picture {
  width: 12rem;
  height: 12rem;
  margin: 3rem auto;
  object-fit: cover;
  border-radius: var(--radius-full);
  border: 4px solid currentColor;
  box-shadow: 0 20px 25px -5px var(--card-shadow);
}

.hero-headline {
  font-size: 2.25rem;
  font-weight: 900;
  opacity: 0.75;
  text-align: center;
}

.hero-tagline {
  text-align: center;
}

.page-section {
  padding: var(--space-24);
}

.section-title {
  font-size: 3.75rem;
  font-weight: 900;
  line-height: 1.25;
  margin-bottom: var(--space-10);
  text-align: center;
  color: var(--heading);
}

/* Scroll reveal */
.reveal {
  opacity: 0;
  transform: translateY(1rem);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

.about-block {
  max-width: 56rem;
  margin: 0 auto var(--space-10);
  font-size: 1.25rem;
}

.about-block h3 {
  font-size: 1.875rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

/* Work */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: var(--space-8);
  max-width: var(--container-width);
  margin: 0 auto;
  align-items: stretch;
}

.project-card {
  display: flex;
  flex-direction: column;
  border: 1px solid currentColor;
  border-radius: var(--radius-md);
  box-shadow: 0 10px 15px -3px var(--card-shadow);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: scale(1.05);
  box-shadow: 0 25px 50px -12px var(--card-shadow-hover);
}

.project-cover {
  height: 14rem;
}

.project-cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-top-left-radius: var(--radius-md);
  border-top-right-radius: var(--radius-md);
}

.project-body {
  display: flex;
  flex-direction: column;
  flex-grow: 1;
  padding: var(--space-8);
}

.project-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.project-description {
  flex-grow: 1;
  opacity: 0.75;
}

.work-links {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-6);
  margin-top: var(--space-16);
}

/* Contact */
.contact-blurb {
  max-width: 42rem;
  margin: 0 auto var(--space-6);
  font-size: 1.25rem;
  text-align: center;
}

.social-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}

.social-link {
  padding: 12px;
  border: 2px solid currentColor;
  border-radius: var(--radius-full);
  color: var(--text-primary);
  transition: transform var(--transition-fast);
}

.social-link:hover {
  transform: scale(1.1);
}

.social-link svg {
  width: 1.5rem;
  height: 1.5rem;
  fill: currentColor;
}

/* Footer */
.site-footer {
  width: 100%;
  margin-top: auto;
  padding: var(--space-4);
  text-align: center;
  font-size: 0.875rem;
  background-color: var(--footer-background);
}

.site-error {
  padding: var(--space-16);
  text-align: center;
}

@media (max-width: 767px) {
  .hero,
  .page-section {
    padding: var(--space-8);
  }

  .section-title {
    font-size: 2.25rem;
  }

  .modal-title {
    font-size: 2.25rem;
  }
}
"#;
