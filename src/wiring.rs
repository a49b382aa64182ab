//! Plugin wiring validation
//!
//! Walks the `dynamicPlugins.frontend` mapping and checks each plugin entry
//! for unknown wiring keys, route declarations, mount points, and menu items.
//! Field checks are independent: a broken declaration never suppresses the
//! remaining checks on the same entry or document.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::document::ConfigNode;
use crate::validation::{codes, Diagnostic, DocumentValidator, ValidationResult};

/// Wiring keys recognized on a frontend plugin entry. `enabled` and `config`
/// are always allowed alongside these.
pub const KNOWN_WIRING_KEYS: &[&str] = &[
    "dynamicRoutes",
    "mountPoints",
    "menuItems",
    "entityTabs",
    "appIcons",
    "routeBindings",
    "apiFactories",
    "translationResources",
];

/// Icon names bundled with the host shell. The set is advisory, not
/// exhaustive: an icon outside it warns but is never rejected.
pub const KNOWN_ICONS: &[&str] = &[
    "HomeIcon",
    "CategoryIcon",
    "ExtensionIcon",
    "CreateComponentIcon",
    "LibraryBooksIcon",
    "GroupIcon",
    "NotificationsIcon",
    "AdminPanelSettingsIcon",
    "SettingsIcon",
    "SchoolIcon",
    "ChatIcon",
    "DashboardIcon",
    "StorageIcon",
    "SecurityIcon",
    "BuildIcon",
    "CodeIcon",
    "CloudIcon",
    "MonitorIcon",
    "SearchIcon",
    "PersonIcon",
    "StarIcon",
    "WarningIcon",
    "InfoIcon",
];

/// Mount point identifiers contributed by the host shell. Declared
/// `mountPoint` values are not checked against this set.
pub const KNOWN_MOUNT_POINTS: &[&str] = &[
    "entity.page.overview/cards",
    "entity.page.overview/context",
    "entity.page.ci-cd/cards",
    "entity.page.kubernetes/cards",
    "entity.page.api/cards",
    "entity.page.docs/cards",
    "search.page.results",
    "search.page.filters",
    "search.page.types",
];

/// Validator for the dynamic plugins wiring document
pub struct WiringValidator {
    known_keys: HashSet<&'static str>,
    known_icons: HashSet<&'static str>,
}

impl Default for WiringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl WiringValidator {
    pub fn new() -> Self {
        Self {
            known_keys: KNOWN_WIRING_KEYS.iter().copied().collect(),
            known_icons: KNOWN_ICONS.iter().copied().collect(),
        }
    }

    /// Check one plugin entry. Sub-order is fixed: unknown keys, then
    /// routes, then mount points, then menu items.
    fn check_entry(
        &self,
        plugin: &str,
        entry: &ConfigNode,
        routes_seen: &mut HashMap<String, String>,
        result: &mut ValidationResult,
    ) {
        for (key, _) in entry.as_mapping().unwrap_or(&[]) {
            if !self.known_keys.contains(key.as_str()) && key != "enabled" && key != "config" {
                result.add(Diagnostic::warning(
                    codes::UNKNOWN_WIRING_KEY,
                    format!("Unknown wiring key: '{key}'"),
                    plugin,
                ));
            }
        }

        self.check_routes(plugin, entry, routes_seen, result);
        self.check_mount_points(plugin, entry, result);
        self.check_menu_items(plugin, entry, result);
    }

    fn check_routes(
        &self,
        plugin: &str,
        entry: &ConfigNode,
        routes_seen: &mut HashMap<String, String>,
        result: &mut ValidationResult,
    ) {
        let routes = entry
            .get("dynamicRoutes")
            .and_then(ConfigNode::as_sequence)
            .unwrap_or(&[]);

        for (index, route) in routes.iter().enumerate() {
            let locator = format!("{plugin}.dynamicRoutes[{index}]");

            match route.get("path") {
                None => result.add(Diagnostic::error(
                    codes::MISSING_FIELD,
                    "Missing required 'path'",
                    &locator,
                )),
                Some(path) => {
                    let rendered = path.render();
                    if !rendered.starts_with('/') {
                        result.add(Diagnostic::error(
                            codes::ROUTE_PATH_FORMAT,
                            format!("Path must start with '/': {rendered}"),
                            &locator,
                        ));
                    }
                    if let Some(path) = path.as_str() {
                        record_route(path, &locator, routes_seen, result);
                    }
                }
            }

            if route.get("importName").is_none() {
                result.add(Diagnostic::error(
                    codes::MISSING_FIELD,
                    "Missing required 'importName'",
                    &locator,
                ));
            }

            self.check_menu_icon(route, &locator, result);
        }
    }

    fn check_menu_icon(&self, route: &ConfigNode, locator: &str, result: &mut ValidationResult) {
        let Some(icon) = route.get("menuItem").and_then(|menu| menu.get("icon")) else {
            return;
        };
        if icon.is_null() {
            return;
        }
        let name = icon.render();
        if name.is_empty() || self.known_icons.contains(name.as_str()) {
            return;
        }
        result.add(Diagnostic::warning(
            codes::UNKNOWN_ICON,
            format!(
                "Unknown icon '{name}'. Known icons: {}, ...",
                self.icon_sample()
            ),
            locator,
        ));
    }

    fn check_mount_points(&self, plugin: &str, entry: &ConfigNode, result: &mut ValidationResult) {
        let mounts = entry
            .get("mountPoints")
            .and_then(ConfigNode::as_sequence)
            .unwrap_or(&[]);

        for (index, mount) in mounts.iter().enumerate() {
            let locator = format!("{plugin}.mountPoints[{index}]");
            if mount.get("mountPoint").is_none() {
                result.add(Diagnostic::error(
                    codes::MISSING_FIELD,
                    "Missing required 'mountPoint'",
                    &locator,
                ));
            }
            if mount.get("importName").is_none() {
                result.add(Diagnostic::error(
                    codes::MISSING_FIELD,
                    "Missing required 'importName'",
                    &locator,
                ));
            }
        }
    }

    fn check_menu_items(&self, plugin: &str, entry: &ConfigNode, result: &mut ValidationResult) {
        let items = entry
            .get("menuItems")
            .and_then(ConfigNode::as_sequence)
            .unwrap_or(&[]);

        for (index, item) in items.iter().enumerate() {
            let locator = format!("{plugin}.menuItems[{index}]");
            if item.get("text").is_none() {
                result.add(Diagnostic::error(
                    codes::MISSING_FIELD,
                    "Missing required 'text'",
                    &locator,
                ));
            }
            if item.get("to").is_none() {
                result.add(Diagnostic::error(
                    codes::MISSING_FIELD,
                    "Missing required 'to'",
                    &locator,
                ));
            }
        }
    }

    /// First five known icons in sorted order, for the unknown-icon message
    fn icon_sample(&self) -> String {
        let mut names: Vec<&str> = self.known_icons.iter().copied().collect();
        names.sort_unstable();
        names[..5].join(", ")
    }
}

/// Record a route path in the document-wide uniqueness table.
///
/// On first sight the owner is recorded silently. On a repeat, the conflict
/// warning names the current recorded owner, then the owner is overwritten:
/// a third occurrence reports against the second, never the first.
fn record_route(
    path: &str,
    locator: &str,
    routes_seen: &mut HashMap<String, String>,
    result: &mut ValidationResult,
) {
    if let Some(owner) = routes_seen.get(path) {
        result.add(Diagnostic::warning(
            codes::ROUTE_CONFLICT,
            format!("Route '{path}' conflicts with {owner} (last one wins)"),
            locator,
        ));
    }
    routes_seen.insert(path.to_owned(), locator.to_owned());
}

impl DocumentValidator for WiringValidator {
    fn name(&self) -> &'static str {
        "wiring"
    }

    fn validate(&self, doc: &ConfigNode) -> ValidationResult {
        let mut result = ValidationResult::new();

        let entries = doc
            .get("dynamicPlugins")
            .and_then(|dp| dp.get("frontend"))
            .and_then(ConfigNode::as_mapping)
            .unwrap_or(&[]);

        if entries.is_empty() {
            result.add(Diagnostic::warning(
                codes::NO_FRONTEND_PLUGINS,
                "No frontend plugins configured",
                "dynamicPlugins.frontend",
            ));
            return result;
        }

        // Route paths are unique across the whole document, not per plugin;
        // the table lives for exactly one validation pass.
        let mut routes_seen: HashMap<String, String> = HashMap::new();

        for (plugin, entry) in entries {
            self.check_entry(plugin, entry, &mut routes_seen, &mut result);
        }

        debug!(
            plugins = entries.len(),
            diagnostics = result.diagnostics.len(),
            "wiring validation complete"
        );
        result
    }
}
