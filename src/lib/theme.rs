//! Shared Tailwind class constants to keep the dashboard sections visually
//! consistent.

pub struct Theme;

impl Theme {
    /// Container for an action row on the dashboard.
    pub const ROW: &'static str = "px-6 py-4 group transition-colors";

    /// Standard icon style that transitions from gray to dark/white on parent
    /// hover.
    pub const ICON: &'static str = "material-symbols-outlined text-gray-400 dark:text-gray-500 group-hover:text-gray-900 dark:group-hover:text-white transition-colors";

    /// Secondary action button used next to row content.
    pub const ROW_BUTTON: &'static str = "text-sm font-medium text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-900 border border-gray-300 dark:border-gray-600 rounded-md px-3 py-1.5 hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors cursor-pointer whitespace-nowrap shrink-0";
}
