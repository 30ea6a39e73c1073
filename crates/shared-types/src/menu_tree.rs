//! The dashboard's navigation tree.

use crate::menu::{Glyph, MenuEntry, MenuGroup};

use crate::menu::BadgeKind::{Count, Version};

const DASHBOARD_ITEMS: &[MenuEntry] = &[
    MenuEntry::link("eCommerce", "/").badge(Version),
    MenuEntry::link("Analytics", "/dashboard/analytics"),
    MenuEntry::link("Data Request", "/dashboard/data-request"),
    MenuEntry::link("Marketing", "/dashboard/marketing").badge(Version),
    MenuEntry::link("CRM", "/dashboard/crm").badge(Version),
];

const TASK_ITEMS: &[MenuEntry] = &[
    MenuEntry::link("List", "/task/list").badge(Version),
    MenuEntry::link("Kanban", "/task/kanban").badge(Version),
];

const FORMS_ITEMS: &[MenuEntry] = &[
    MenuEntry::link("Form Elements", "/forms/form-elements"),
    MenuEntry::link("Form Layout", "/forms/form-layout"),
    MenuEntry::link("Form Validation", "/forms/form-validation").badge(Version),
];

const PAGES_ITEMS: &[MenuEntry] = &[
    MenuEntry::link("Settings", "/settings"),
    MenuEntry::link("File Manager", "/pages/file-manager").badge(Version),
    MenuEntry::link("Data Tables", "/pages/data-tables").badge(Version),
    MenuEntry::link("Pricing Tables", "/pages/pricing-tables").badge(Version),
    MenuEntry::link("Error Page", "/pages/error-page").badge(Version),
    MenuEntry::link("Mail Success", "/pages/mail-success").badge(Version),
];

const UI_ITEMS: &[MenuEntry] = &[
    MenuEntry::link("Alerts", "/ui/alerts"),
    MenuEntry::link("Buttons", "/ui/buttons"),
    MenuEntry::link("Button Group", "/ui/buttons-group").badge(Version),
    MenuEntry::link("Badge", "/ui/badge").badge(Version),
    MenuEntry::link("Breadcrumb", "/ui/breadcrumb").badge(Version),
    MenuEntry::link("Cards", "/ui/cards").badge(Version),
    MenuEntry::link("Dropdowns", "/ui/dropdowns").badge(Version),
    MenuEntry::link("Modals", "/ui/modals").badge(Version),
    MenuEntry::link("Tabs", "/ui/tabs").badge(Version),
    MenuEntry::link("Tooltips", "/ui/tooltips").badge(Version),
    MenuEntry::link("Popovers", "/ui/popovers").badge(Version),
    MenuEntry::link("Accordion", "/ui/accordion").badge(Version),
    MenuEntry::link("Notifications", "/ui/notifications").badge(Version),
    MenuEntry::link("Pagination", "/ui/pagination").badge(Version),
    MenuEntry::link("Progress", "/ui/progress").badge(Version),
    MenuEntry::link("Carousel", "/ui/carousel").badge(Version),
    MenuEntry::link("Images", "/ui/images").badge(Version),
    MenuEntry::link("Videos", "/ui/videos").badge(Version),
];

const AUTH_ITEMS: &[MenuEntry] = &[
    MenuEntry::link("Sign In", "/auth/signin"),
    MenuEntry::link("Sign Up", "/auth/signup"),
    MenuEntry::link("Reset Password", "/auth/reset-password").badge(Version),
];

const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry::group("Dashboard", Glyph::Dashboard, "/", "dashboard", DASHBOARD_ITEMS),
    MenuEntry::link("Calendar", "/calendar")
        .icon(Glyph::Calendar)
        .keyword("calendar"),
    MenuEntry::link("Profile", "/profile")
        .icon(Glyph::Profile)
        .keyword("profile"),
    MenuEntry::group("Task", Glyph::Task, "/task", "task", TASK_ITEMS),
    MenuEntry::group("Forms", Glyph::Forms, "/forms", "forms", FORMS_ITEMS),
    MenuEntry::link("Tables", "/tables")
        .icon(Glyph::Tables)
        .keyword("tables"),
    MenuEntry::group("Pages", Glyph::Pages, "/pages", "pages", PAGES_ITEMS),
];

// The support entries share the "chart" keyword, so `/chart` highlights all
// three along with Chart itself. Narrowing these keywords is the same open
// product question as substring matching in `is_active`.
const SUPPORT_ENTRIES: &[MenuEntry] = &[
    MenuEntry::link("Messages", "/messages")
        .icon(Glyph::Messages)
        .keyword("chart")
        .badge(Count),
    MenuEntry::link("Inbox", "/inbox")
        .icon(Glyph::Inbox)
        .keyword("chart")
        .badge(Version),
    MenuEntry::link("Invoice", "/invoice")
        .icon(Glyph::Invoice)
        .keyword("chart")
        .badge(Version),
];

const OTHERS_ENTRIES: &[MenuEntry] = &[
    MenuEntry::link("Chart", "/chart")
        .icon(Glyph::Chart)
        .keyword("chart"),
    MenuEntry::group("UI Elements", Glyph::UiElements, "/ui", "ui", UI_ITEMS),
    MenuEntry::group(
        "Authentication",
        Glyph::Authentication,
        "/auth",
        "auth",
        AUTH_ITEMS,
    ),
];

/// Sidebar sections in display order.
pub const MENU: &[MenuGroup] = &[
    MenuGroup {
        title: "Menu",
        entries: MENU_ENTRIES,
    },
    MenuGroup {
        title: "Support",
        entries: SUPPORT_ENTRIES,
    },
    MenuGroup {
        title: "Others",
        entries: OTHERS_ENTRIES,
    },
];
