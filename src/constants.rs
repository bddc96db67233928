/// DOM hooks shared by the wasm front-end.
///
/// Selectors, element ids and class names live here so the static page shell
/// and the wiring code agree on one set of names.

// Tree (scroll progress visualization)
pub const TREE_ROOT: &str = ".why-tree-vertical";
pub const TREE_NODE: &str = "[data-node-index]";
pub const TREE_NODE_INDEX_ATTR: &str = "data-node-index";
pub const TREE_TRUNK_FILL: &str = ".tree-trunk-fill";
pub const TREE_TRUNK_GLOW: &str = ".tree-trunk-glow";
pub const TREE_END_DOT: &str = ".tree-end-dot";
pub const TREE_BRANCH: &str = ".tree-branch";
pub const TREE_NODE_PARTS: &str = ".trunk-connector-dot, .tree-node-card";

// Pointer effects
pub const TILT_CARD: &str = ".tilt-card";
pub const TEAM_CARD: &str = ".team-member-card";
pub const MAGNETIC_BUTTON: &str = ".magnetic-btn";
pub const SHOWCASE_WRAPPER: &str = ".showcase-wrapper";
pub const SHOWCASE_CARD: &str = ".phone-card";
pub const HERO_PHONE: &str = ".hero-phone";
pub const HERO_GLOW: &str = ".hero-glow-orb";

// Scroll effects
pub const PARALLAX: &str = ".parallax";
pub const PARALLAX_SPEED_ATTR: &str = "data-speed";
pub const NAVBAR: &str = ".navbar";
pub const NAV_LINK: &str = ".nav-link";
pub const NAV_SECTIONS: [&str; 4] = ["features", "how-it-works", "preview", "team"];

// Reveal
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
pub const COUNTER_END_ATTR: &str = "data-end";
pub const COUNTER_SUFFIX_ATTR: &str = "data-suffix";
pub const COUNTER_DURATION_ATTR: &str = "data-duration";
pub const TEXT_REVEAL_ATTR: &str = "data-text";
pub const SPARKLES_SLOT: &str = "[data-sparkles]";

// Containers filled from the site configuration
pub const NAV_LINKS_ID: &str = "nav-links";
pub const MOBILE_NAV_LINKS_ID: &str = "mobile-nav-links";
pub const PROBLEMS_GRID_ID: &str = "problems-grid";
pub const STEPS_GRID_ID: &str = "steps-grid";
pub const SHOWCASE_CAROUSEL_ID: &str = "phone-carousel";
pub const FEATURES_GRID_ID: &str = "features-grid";
pub const TREE_NODES_ID: &str = "tree-nodes";
pub const TECH_STACK_ID: &str = "tech-stack";
pub const ROADMAP_GRID_ID: &str = "roadmap-grid";
pub const TEAM_GRID_ID: &str = "team-grid";
pub const FAQ_LIST_ID: &str = "faq-list";
pub const FOOTER_LINKS_ID: &str = "footer-links";
pub const FOOTER_SOCIAL_ID: &str = "footer-social";
pub const FOOTER_COPYRIGHT_ID: &str = "footer-copyright";

// FAQ and mobile menu
pub const FAQ_ITEM: &str = ".faq-item";
pub const FAQ_INDEX_ATTR: &str = "data-faq-index";
pub const FAQ_ICON: &str = ".faq-icon";
pub const MOBILE_MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const MOBILE_MENU: &str = ".mobile-menu";
pub const MOBILE_MENU_CLOSERS: &str = ".mobile-menu-overlay, .mobile-menu a";

// Contact form
pub const CONTACT_FORM: &str = "form.contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

// Classes toggled by the wiring code
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ANIMATE: &str = "animate";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "navbar-scrolled";
pub const CLASS_ERROR: &str = "error";
pub const CLASS_SUCCESS: &str = "success";

// FAQ item open on first render
pub const FAQ_DEFAULT_OPEN: Option<usize> = Some(0);
