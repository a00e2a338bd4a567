//! Navigation system for GoodSeva
//!
//! Screens are typed [`Route`]s that map to and from URL paths. Before
//! sign-in a single onboarding stack is shown; afterwards each of the seven
//! bottom tabs keeps its own stack, and the header menu jumps between them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decoded query parameters
pub type RouteParams = HashMap<String, String>;

/// All screens in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Onboarding
    /// Login / Register landing screen
    #[default]
    Welcome,
    /// Language picker
    Language,
    /// Role picker
    Role,
    /// GST verification
    VerifyGst,
    /// Account registration
    Register,
    /// Post-registration verification
    Verification,
    /// Login
    Login,

    // Tabs
    /// Dashboard
    Home,
    /// Available loads
    Loads,
    /// Bids
    Bids,
    /// Trips
    Trips,
    /// Trucks
    Trucks,
    /// Drivers
    Drivers,
    /// Profile
    Profile,

    // Pushed screens
    /// Trip details
    TripDetails {
        /// Trip identifier
        id: String,
    },
    /// Add-truck form
    AddTruck,
    /// Add-driver form
    AddDriver,
    /// Settings
    Settings,
    /// Theme picker
    ThemeSettings,

    /// Unknown path
    NotFound,
}

impl Route {
    /// Path as written by links and deep links
    pub fn to_path(&self) -> String {
        match self {
            Route::Welcome => "/".to_string(),
            Route::Language => "/language".to_string(),
            Route::Role => "/role".to_string(),
            Route::VerifyGst => "/verifygst".to_string(),
            Route::Register => "/register".to_string(),
            Route::Verification => "/verification".to_string(),
            Route::Login => "/login".to_string(),
            Route::Home => "/home".to_string(),
            Route::Loads => "/loads".to_string(),
            Route::Bids => "/bids".to_string(),
            Route::Trips => "/trips".to_string(),
            Route::Trucks => "/trucks".to_string(),
            Route::Drivers => "/drivers".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::TripDetails { id } => format!("/trip-details?id={}", urlencoding::encode(id)),
            Route::AddTruck => "/trucks/add-truck".to_string(),
            Route::AddDriver => "/drivers/add-driver".to_string(),
            Route::Settings => "/home/settings".to_string(),
            Route::ThemeSettings => "/home/theme".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "GoodSeva",
            Route::Language => "Choose Language",
            Route::Role => "Select Role",
            Route::VerifyGst => "Verify GST",
            Route::Register => "Register",
            Route::Verification => "Verification",
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Loads => "Loads",
            Route::Bids => "Bids",
            Route::Trips => "Trips",
            Route::Trucks => "Trucks",
            Route::Drivers => "Drivers",
            Route::Profile => "Profile",
            Route::TripDetails { .. } => "Trip Details",
            Route::AddTruck => "Add Truck",
            Route::AddDriver => "Add Driver",
            Route::Settings => "Settings",
            Route::ThemeSettings => "Theme",
            Route::NotFound => "Not Found",
        }
    }

    /// Whether this screen belongs to the pre-sign-in flow
    pub fn is_onboarding(&self) -> bool {
        matches!(
            self,
            Route::Welcome
                | Route::Language
                | Route::Role
                | Route::VerifyGst
                | Route::Register
                | Route::Verification
                | Route::Login
        )
    }

    /// The tab whose stack hosts this screen
    pub fn tab(&self) -> Option<NavigationTab> {
        match self {
            Route::Home | Route::Settings | Route::ThemeSettings => Some(NavigationTab::Home),
            Route::Loads => Some(NavigationTab::Loads),
            Route::Bids => Some(NavigationTab::Bids),
            Route::Trips | Route::TripDetails { .. } => Some(NavigationTab::Trips),
            Route::Trucks | Route::AddTruck => Some(NavigationTab::Trucks),
            Route::Drivers | Route::AddDriver => Some(NavigationTab::Drivers),
            Route::Profile => Some(NavigationTab::Profile),
            _ => None,
        }
    }

    /// Next step of the registration flow
    pub fn next_onboarding_step(&self) -> Option<Route> {
        match self {
            Route::Welcome => Some(Route::Language),
            Route::Language => Some(Route::Role),
            Route::Role => Some(Route::VerifyGst),
            Route::VerifyGst => Some(Route::Register),
            Route::Register => Some(Route::Verification),
            _ => None,
        }
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// Bottom tabs shown after sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Dashboard
    #[default]
    Home,
    /// Loads
    Loads,
    /// Bids
    Bids,
    /// Trips
    Trips,
    /// Trucks
    Trucks,
    /// Drivers
    Drivers,
    /// Profile
    Profile,
}

impl NavigationTab {
    /// Screen at the bottom of this tab's stack
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Loads => Route::Loads,
            NavigationTab::Bids => Route::Bids,
            NavigationTab::Trips => Route::Trips,
            NavigationTab::Trucks => Route::Trucks,
            NavigationTab::Drivers => Route::Drivers,
            NavigationTab::Profile => Route::Profile,
        }
    }

    /// Ionicons name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Loads => "cube-outline",
            NavigationTab::Bids => "pricetags-outline",
            NavigationTab::Trips => "swap-horizontal-outline",
            NavigationTab::Trucks => "bus-outline",
            NavigationTab::Drivers | NavigationTab::Profile => "person-outline",
        }
    }

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        self.root_route().title()
    }

    /// Tabs in tab bar order
    pub fn all() -> [NavigationTab; 7] {
        [
            NavigationTab::Home,
            NavigationTab::Loads,
            NavigationTab::Bids,
            NavigationTab::Trips,
            NavigationTab::Trucks,
            NavigationTab::Drivers,
            NavigationTab::Profile,
        ]
    }
}

// =============================================================================
// Stacks
// =============================================================================

/// One screen on a stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// Screen shown
    pub route: Route,
    /// Random key, distinct for every push
    pub key: String,
}

impl StackEntry {
    /// Entry with a fresh key
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// A stack of screens; never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    pushed: Vec<StackEntry>,
}

impl NavigationStack {
    /// Stack holding only `root`
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            pushed: Vec::new(),
        }
    }

    /// Open a screen on top
    pub fn push(&mut self, route: Route) {
        self.pushed.push(StackEntry::new(route));
    }

    /// Close the top screen; the root is never popped
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Close everything above the root
    pub fn pop_to_root(&mut self) {
        self.pushed.clear();
    }

    /// Swap the top screen for `route`
    pub fn replace(&mut self, route: Route) {
        match self.pushed.last_mut() {
            Some(last) => *last = StackEntry::new(route),
            None => self.root = StackEntry::new(route),
        }
    }

    /// Top entry
    pub fn current_entry(&self) -> &StackEntry {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Top screen
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Whether anything sits above the root
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Number of screens, root included
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Start over from `route`
    pub fn reset(&mut self, route: Route) {
        *self = Self::new(route);
    }
}

// =============================================================================
// Header Menu
// =============================================================================

/// Entries of the header's overflow menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    /// Open the profile tab
    Profile,
    /// Open settings
    Settings,
    /// Open the theme picker
    Theme,
    /// Sign out
    Logout,
}

impl MenuItem {
    /// Get all items in display order
    pub fn all() -> [MenuItem; 4] {
        [MenuItem::Profile, MenuItem::Settings, MenuItem::Theme, MenuItem::Logout]
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Profile => "Profile",
            MenuItem::Settings => "Settings",
            MenuItem::Theme => "Theme",
            MenuItem::Logout => "Logout",
        }
    }

    /// Ionicons name
    pub fn icon(&self) -> &'static str {
        match self {
            MenuItem::Profile => "person-outline",
            MenuItem::Settings => "settings-outline",
            MenuItem::Theme => "color-palette-outline",
            MenuItem::Logout => "log-out-outline",
        }
    }

    /// Target route
    pub fn route(&self) -> Route {
        match self {
            MenuItem::Profile => Route::Profile,
            MenuItem::Settings => Route::Settings,
            MenuItem::Theme => Route::ThemeSettings,
            MenuItem::Logout => Route::Welcome,
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Where the user is
///
/// Before sign-in the onboarding stack is shown; after sign-in the active
/// tab's stack is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Whether the tab area is shown
    pub signed_in: bool,
    /// Pre-sign-in stack rooted at the welcome screen
    pub onboarding: NavigationStack,
    /// Selected tab
    pub active_tab: NavigationTab,
    /// One stack per tab
    pub tab_stacks: HashMap<NavigationTab, NavigationStack>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let tab_stacks = NavigationTab::all()
            .into_iter()
            .map(|tab| (tab, NavigationStack::new(tab.root_route())))
            .collect();

        Self {
            signed_in: false,
            onboarding: NavigationStack::new(Route::Welcome),
            active_tab: NavigationTab::Home,
            tab_stacks,
        }
    }
}

impl NavigationState {
    /// Signed out, on the welcome screen
    pub fn new() -> Self {
        Self::default()
    }

    fn tab_stack_mut(&mut self, tab: NavigationTab) -> &mut NavigationStack {
        self.tab_stacks
            .entry(tab)
            .or_insert_with(|| NavigationStack::new(tab.root_route()))
    }

    /// Stack on screen
    pub fn current_stack(&self) -> &NavigationStack {
        if !self.signed_in {
            return &self.onboarding;
        }
        self.tab_stacks.get(&self.active_tab).unwrap_or(&self.onboarding)
    }

    fn current_stack_mut(&mut self) -> &mut NavigationStack {
        if self.signed_in {
            let tab = self.active_tab;
            self.tab_stack_mut(tab)
        } else {
            &mut self.onboarding
        }
    }

    /// Screen on top of the visible stack
    pub fn current_route(&self) -> &Route {
        self.current_stack().current()
    }

    /// Open a screen
    ///
    /// After sign-in, a tab root switches tabs and any other tab-hosted
    /// screen is pushed onto its tab's stack. Everything else is pushed onto
    /// the stack on screen.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("navigate to {}", route.to_path());

        if self.signed_in {
            if let Some(tab) = route.tab() {
                self.active_tab = tab;
                if route != tab.root_route() {
                    self.tab_stack_mut(tab).push(route);
                }
                return;
            }
        }
        self.current_stack_mut().push(route);
    }

    /// Replace the current screen
    ///
    /// Replacing with a tab route enters the tab area with fresh stacks, as
    /// a successful login does.
    pub fn replace(&mut self, route: Route) {
        tracing::debug!("replace with {}", route.to_path());

        match route.tab() {
            Some(tab) => {
                self.onboarding.reset(Route::Welcome);
                for stack_tab in NavigationTab::all() {
                    self.tab_stack_mut(stack_tab).pop_to_root();
                }
                self.signed_in = true;
                self.active_tab = tab;
                if route != tab.root_route() {
                    self.tab_stack_mut(tab).push(route);
                }
            }
            None => self.current_stack_mut().replace(route),
        }
    }

    /// Close the top screen of the visible stack
    pub fn go_back(&mut self) -> bool {
        self.current_stack_mut().pop()
    }

    /// Whether [`go_back`](Self::go_back) would close a screen
    pub fn can_go_back(&self) -> bool {
        self.current_stack().can_go_back()
    }

    /// Select a tab, keeping its stack
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.active_tab = tab;
    }

    /// Advance the registration flow from the current screen
    pub fn continue_onboarding(&mut self) -> bool {
        match self.current_route().next_onboarding_step() {
            Some(next) => {
                self.navigate(next);
                true
            }
            None => false,
        }
    }

    /// Act on a header menu selection
    pub fn select_menu_item(&mut self, item: MenuItem) {
        match item {
            MenuItem::Logout => self.logout(),
            other => self.navigate(other.route()),
        }
    }

    /// Sign out and return to the welcome screen
    pub fn logout(&mut self) {
        tracing::debug!("logout");
        self.reset();
    }

    /// Back to the freshly started state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

struct RoutePattern {
    segments: Vec<String>,
    builder: fn(&RouteParams) -> Option<Route>,
}

/// Maps paths back to routes
///
/// Layout group segments such as `(tabs)` or `(auth)` are ignored, so
/// `/(auth)/login` and `/login` match the same screen.
pub struct Router {
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router knowing every screen
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Welcome));
        router.add_route("/language", |_| Some(Route::Language));
        router.add_route("/role", |_| Some(Route::Role));
        router.add_route("/verifygst", |_| Some(Route::VerifyGst));
        router.add_route("/register", |_| Some(Route::Register));
        router.add_route("/verification", |_| Some(Route::Verification));
        router.add_route("/login", |_| Some(Route::Login));

        router.add_route("/home", |_| Some(Route::Home));
        router.add_route("/home/settings", |_| Some(Route::Settings));
        router.add_route("/home/theme", |_| Some(Route::ThemeSettings));
        router.add_route("/loads", |_| Some(Route::Loads));
        router.add_route("/bids", |_| Some(Route::Bids));
        router.add_route("/trips", |_| Some(Route::Trips));
        router.add_route("/trip-details", |params| {
            Some(Route::TripDetails {
                id: params.get("id").filter(|id| !id.is_empty())?.clone(),
            })
        });
        router.add_route("/trucks", |_| Some(Route::Trucks));
        router.add_route("/trucks/add-truck", |_| Some(Route::AddTruck));
        router.add_route("/drivers", |_| Some(Route::Drivers));
        router.add_route("/drivers/add-driver", |_| Some(Route::AddDriver));
        router.add_route("/profile", |_| Some(Route::Profile));

        router
    }

    fn add_route(&mut self, pattern: &str, builder: fn(&RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Resolve `path`, falling back to [`Route::NotFound`]
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let segments: Vec<&str> = pathname
            .split('/')
            .filter(|s| !s.is_empty() && !is_group_segment(s))
            .collect();
        let params = parse_query(query);

        self.patterns
            .iter()
            .filter(|pattern| pattern.segments.iter().map(String::as_str).eq(segments.iter().copied()))
            .find_map(|pattern| (pattern.builder)(&params))
            .unwrap_or(Route::NotFound)
    }
}

fn is_group_segment(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}

fn parse_query(query: Option<&str>) -> RouteParams {
    query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(key, value)| {
            let value = urlencoding::decode(value).ok()?;
            Some((key.to_string(), value.into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<Route> {
        vec![
            Route::Welcome,
            Route::Language,
            Route::Role,
            Route::VerifyGst,
            Route::Register,
            Route::Verification,
            Route::Login,
            Route::Home,
            Route::Loads,
            Route::Bids,
            Route::Trips,
            Route::Trucks,
            Route::Drivers,
            Route::Profile,
            Route::TripDetails { id: "1".to_string() },
            Route::AddTruck,
            Route::AddDriver,
            Route::Settings,
            Route::ThemeSettings,
        ]
    }

    #[test]
    fn test_router_round_trips() {
        let router = Router::new();
        for route in all_routes() {
            assert_eq!(router.match_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_trip_details_path() {
        let route = Route::TripDetails { id: "1".to_string() };
        assert_eq!(route.to_path(), "/trip-details?id=1");

        let router = Router::new();
        assert_eq!(router.match_path("/trip-details?id=1"), route);
        assert_eq!(router.match_path("/trip-details"), Route::NotFound);
        assert_eq!(router.match_path("/trip-details?id="), Route::NotFound);
    }

    #[test]
    fn test_trip_id_is_encoded() {
        let route = Route::TripDetails { id: "a b&c".to_string() };
        assert_eq!(Router::new().match_path(&route.to_path()), route);
    }

    #[test]
    fn test_group_segments_are_ignored() {
        let router = Router::new();
        assert_eq!(router.match_path("/(auth)/login"), Route::Login);
        assert_eq!(router.match_path("/(home)/home/theme"), Route::ThemeSettings);
        assert_eq!(router.match_path("/(tabs)/(home)/home"), Route::Home);
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Router::new().match_path("/nowhere"), Route::NotFound);
    }

    #[test]
    fn test_stack_never_empty() {
        let mut stack = NavigationStack::new(Route::Trucks);
        assert!(!stack.pop());
        assert_eq!(stack.current(), &Route::Trucks);

        stack.push(Route::AddTruck);
        assert_eq!(stack.depth(), 2);
        assert!(stack.pop());
        assert_eq!(stack.current(), &Route::Trucks);
    }

    #[test]
    fn test_stack_entries_have_unique_keys() {
        assert_ne!(StackEntry::new(Route::Home).key, StackEntry::new(Route::Home).key);
    }

    #[test]
    fn test_onboarding_order() {
        let mut nav = NavigationState::new();
        let mut visited = vec![nav.current_route().clone()];
        while nav.continue_onboarding() {
            visited.push(nav.current_route().clone());
        }

        assert_eq!(
            visited,
            vec![
                Route::Welcome,
                Route::Language,
                Route::Role,
                Route::VerifyGst,
                Route::Register,
                Route::Verification,
            ]
        );
    }

    #[test]
    fn test_login_replaces_with_home() {
        let mut nav = NavigationState::new();
        nav.navigate(Route::Login);
        nav.replace(Route::Home);

        assert!(nav.signed_in);
        assert_eq!(nav.current_route(), &Route::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_pushed_screens_land_on_their_tab() {
        let mut nav = NavigationState::new();
        nav.replace(Route::Home);

        nav.navigate(Route::TripDetails { id: "2".to_string() });
        assert_eq!(nav.active_tab, NavigationTab::Trips);
        assert!(nav.go_back());
        assert_eq!(nav.current_route(), &Route::Trips);

        nav.switch_tab(NavigationTab::Drivers);
        nav.navigate(Route::AddDriver);
        assert_eq!(nav.current_route(), &Route::AddDriver);

        nav.switch_tab(NavigationTab::Home);
        assert_eq!(nav.current_route(), &Route::Home);
        nav.switch_tab(NavigationTab::Drivers);
        assert_eq!(nav.current_route(), &Route::AddDriver);
    }

    #[test]
    fn test_header_menu() {
        let mut nav = NavigationState::new();
        nav.replace(Route::Home);
        nav.switch_tab(NavigationTab::Bids);

        nav.select_menu_item(MenuItem::Theme);
        assert_eq!(nav.active_tab, NavigationTab::Home);
        assert_eq!(nav.current_route(), &Route::ThemeSettings);

        nav.select_menu_item(MenuItem::Profile);
        assert_eq!(nav.current_route(), &Route::Profile);

        nav.select_menu_item(MenuItem::Logout);
        assert!(!nav.signed_in);
        assert_eq!(nav.current_route(), &Route::Welcome);
        assert_eq!(nav.active_tab, NavigationTab::Home);
        assert!(nav.tab_stacks.values().all(|stack| stack.depth() == 1));
    }

    #[test]
    fn test_language_from_settings_stays_in_tabs() {
        let mut nav = NavigationState::new();
        nav.replace(Route::Home);
        nav.select_menu_item(MenuItem::Settings);
        nav.navigate(Route::Language);

        assert!(nav.signed_in);
        assert_eq!(nav.current_route(), &Route::Language);
        assert!(nav.go_back());
        assert_eq!(nav.current_route(), &Route::Settings);
    }

    #[test]
    fn test_tabs() {
        let labels: Vec<_> = NavigationTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Home", "Loads", "Bids", "Trips", "Trucks", "Drivers", "Profile"]);
        assert_eq!(NavigationTab::Trips.icon(), "swap-horizontal-outline");
        for tab in NavigationTab::all() {
            assert_eq!(tab.root_route().tab(), Some(tab));
        }
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_string(&Route::TripDetails { id: "3".to_string() }).unwrap();
        assert_eq!(json, r#"{"route":"TripDetails","params":{"id":"3"}}"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Route::TripDetails { id: "3".to_string() });
    }
}
