//! Fixed localized (Urdu) texts shown by the page.

/// Shown in place of the list when the dataset cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "شاعری لوڈ کرنے میں مسئلہ ہوا۔ براہ کرم دوبارہ کوشش کریں۔";
/// Shown when a load or a filter yields zero records.
pub const NO_RESULTS_MESSAGE: &str = "کوئی شاعری نہیں ملی۔";
pub const READ_MORE_LABEL: &str = "مکمل پڑھیں →";
pub const POEM_OF_THE_DAY_BADGE: &str = "آج کی شاعری ✨";
pub const POET_PREFIX: &str = "از:";
pub const YEAR_LABEL: &str = "سنہ اشاعت:";
pub const THEMES_LABEL: &str = "موضوعات:";
pub const BACK_LABEL: &str = "← واپس جائیں";
pub const THEME_SEPARATOR: &str = " • ";
