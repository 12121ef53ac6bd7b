pub const API_HEROES: &str = "https://mlbb-stats.ridwaanhall.com/api/v1/heroes/";

/// Stand-in image shown when a hero icon is missing.
pub fn placeholder_icon(size: u32, label: &str) -> String {
    format!("https://placehold.co/{size}x{size}/57534e/e7e5e4?text={label}")
}
