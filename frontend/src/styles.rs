pub const PAGE: &str = "min-h-screen w-full bg-pink-50 dark:bg-gray-900 text-gray-800 dark:text-gray-100 transition-colors duration-500";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-800/60 backdrop-blur-md border-b border-pink-200/50 dark:border-gray-700/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-pink-600 dark:text-pink-300";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-pink-600 dark:hover:text-pink-400 transition-colors duration-200";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-pink-600 dark:hover:text-pink-400 rounded-lg transition-colors duration-200";
pub const SECTION: &str = "relative z-10 max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-16";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-lg shadow-pink-200/50 dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-8 py-3 rounded-full font-semibold text-white bg-gradient-to-r from-pink-400 to-pink-600 hover:from-pink-500 hover:to-pink-700 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_ROUND: &str = "w-12 h-12 inline-flex items-center justify-center rounded-full text-white bg-gradient-to-br from-pink-400 to-pink-600 hover:scale-105 transition-transform duration-200";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-pink-200 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-pink-500";
pub const TEXT_H1: &str = "text-4xl sm:text-5xl font-bold text-pink-600 dark:text-pink-300";
pub const TEXT_H2: &str = "text-3xl font-bold text-pink-600 dark:text-pink-300 text-center mb-8";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const OVERLAY: &str = "fixed inset-0 z-[1000] flex items-center justify-center bg-black/90";
