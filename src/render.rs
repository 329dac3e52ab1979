use chrono::{DateTime, Local};

use age::format_age;
use sites::site_name;
use status::{SiteStatus, StatusReply};

/// The four strings written into the page after a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub header: String,
    pub updated: String,
    pub table: String,
    pub message: String,
}

impl Rendered {
    pub fn new(reply: &StatusReply, now: &DateTime<Local>) -> Self {
        Rendered {
            header: reply.header().to_string(),
            updated: updated_line(now),
            table: status_table(reply),
            message: reply.message.clone(),
        }
    }
}

pub fn updated_line(now: &DateTime<Local>) -> String {
    format!("Updated {} local time", now.format("%-m/%-d/%Y, %-I:%M:%S %p"))
}

/// Links are only links if they look like URLs, anything else goes in as text.
pub fn link_cell(link: &str, label: &str) -> String {
    if link.starts_with("http") {
        format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            link.replace('"', "&quot;"),
            label
        )
    } else {
        link.to_string()
    }
}

pub fn row_cells(site: &SiteStatus) -> [String; 4] {
    [
        site_name(&site.site_code).to_string(),
        format_age(site.age),
        link_cell(&site.image_link, "Latest"),
        link_cell(&site.movie_url, "Movie"),
    ]
}

/// Rows keep the server's order.
pub fn status_table(reply: &StatusReply) -> String {
    let mut table =
        String::from("<table><tr><th>Site</th><th>Data age</th><th>Latest</th><th>Movie</th></tr>");

    for site in &reply.site_info {
        table.push_str("<tr>");
        for cell in row_cells(site).iter() {
            table.push_str("<td>");
            table.push_str(cell);
            table.push_str("</td>");
        }
        table.push_str("</tr>");
    }

    table.push_str("</table>");
    table
}
