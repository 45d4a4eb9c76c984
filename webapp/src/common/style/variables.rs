pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --accent: #ff6b6b;           /* Headings and active nav in dark mode */
  --zinc-200: #e4e4e7;
  --zinc-800: #27272a;
  --zinc-900: #18181b;
  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;
  --gray-700: #374151;

  /* Light theme (default) */
  --background: linear-gradient(to bottom right, var(--gray-100), #ffffff);
  --text-primary: #000000;
  --heading: #000000;
  --nav-active: inherit;
  --header-scrolled: rgba(255, 255, 255, 0.9);
  --menu-background: rgba(255, 255, 255, 0.95);
  --footer-background: rgba(255, 255, 255, 0.8);
  --surface: #ffffff;
  --border: var(--gray-200);
  --card-shadow: rgba(209, 213, 219, 0.5);
  --card-shadow-hover: rgba(156, 163, 175, 0.75);
  --pill-background: var(--zinc-800);
  --pill-text: #ffffff;
  --hover-surface: var(--zinc-200);

  /* Layout */
  --container-width: 72rem;
  --menu-top: 7rem;

  /* Spacing System */
  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-full: 9999px;

  /* Transitions */
  --transition-fast: 200ms;
  --transition-normal: 300ms;
  --transition-reveal: 700ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}

:root.dark {
  --background: linear-gradient(to bottom right, var(--zinc-900), #000000);
  --text-primary: #ffffff;
  --heading: var(--accent);
  --nav-active: var(--accent);
  --header-scrolled: rgba(0, 0, 0, 0.8);
  --menu-background: rgba(0, 0, 0, 0.95);
  --footer-background: rgba(0, 0, 0, 0.8);
  --surface: var(--zinc-900);
  --border: var(--gray-700);
  --card-shadow: rgba(0, 0, 0, 0.5);
  --card-shadow-hover: rgba(0, 0, 0, 0.75);
  --pill-background: var(--zinc-200);
  --pill-text: #000000;
  --hover-surface: var(--zinc-800);
}
"#;
