use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

pub const FONTS: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700;900&display=swap";

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Poppins', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES
);
