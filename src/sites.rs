const SITES: [(&str, &str); 7] = [
    ("M", "Mauna Loa, HI, United States"),
    ("B", "Big Bear, CA, United States"),
    ("C", "Cerro Tololo, Chile"),
    ("Z", "Boulder, CO, United States (Engineering)"),
    ("L", "Learmonth, Australia"),
    ("U", "Udaipur, India"),
    ("T", "El Tiede, Spain"),
];

/// Full name of an H-Alpha site, or the code itself if it isn't a known site.
pub fn site_name<'a>(code: &'a str) -> &'a str {
    SITES
        .iter()
        .find(|&&(site, _)| site == code)
        .map(|&(_, name)| name)
        .unwrap_or(code)
}
