// DOM hooks the page markup provides. Every feature skips itself quietly
// when its elements are missing.

// Particle background
pub const PARTICLE_CANVAS_ID: &str = "particles-canvas";

// Navigation
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = "section[id]";

// Scroll-driven effects
pub const REVEAL_SELECTOR: &str =
    ".skill-category, .project-card, .timeline-item, .education-card, .about-text, .about-image";
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
pub const HERO_VISUAL_SELECTOR: &str = ".hero-visual";
pub const HERO_STATS_SELECTOR: &str = ".hero-stats";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const SKILL_PROGRESS_PROPERTY: &str = "--progress";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const OBSERVER_THRESHOLD: f64 = 0.5;

// Typing effect (kept off like the live site)
pub const FEATURE_TYPING_EFFECT: bool = false;
pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_NAME_ID: &str = "name";
pub const CONTACT_EMAIL_ID: &str = "email";
pub const CONTACT_SUBJECT_ID: &str = "subject";
pub const CONTACT_MESSAGE_ID: &str = "message";
pub const NOTICE_SELECTOR: &str = ".notification";

// Misc page glue
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const FOOTER_YEAR_SELECTOR: &str = ".footer-bottom p";
pub const SITE_OWNER: &str = "Akshay Tiwari";
pub const SKIP_LINK_TARGET: &str = "#home";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";
pub const SKIP_LINK_HIDDEN_TOP: &str = "-100px";
pub const SKIP_LINK_STYLE: &str = "position: absolute; top: -100px; left: 0; \
    background: var(--primary); color: white; padding: 0.5rem 1rem; \
    text-decoration: none; z-index: 10001; transition: top 0.3s;";
pub const LOADED_CLASS: &str = "loaded";
pub const REVEAL_AFTER_LOAD_MS: i32 = 100;
