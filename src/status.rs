use serde_json;

use StatusError;

pub const DEFAULT_HEADER: &str = "NSO GONG H-Alpha Solar Observing Station Status";

// {"message":" GONG <A HREF=\"https://monitor.nso.edu\">status</a> monitor",
//  "header": "optional",
//  "siteInfo":[
//    {"movieURL":"https://gong2.nso.edu/products/scaleViewTest/view.php?configFile=configs/hAlphaColor.cfg&productIndex=3",
//     "imageLink":"https://gong2.nso.edu/HA/hac/202211/20221102/20221102145712Ch.jpg",
//     "age":242,
//     "siteCode":"C"}
//  ]}

/// One update's worth of station status, as sent by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusReply {
    /// Free-form markup, shown verbatim.
    pub message: String,
    #[serde(default)]
    pub header: Option<String>,
    /// Sorted by the server into ascending age.
    #[serde(rename = "siteInfo")]
    pub site_info: Vec<SiteStatus>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteStatus {
    #[serde(rename = "siteCode")]
    pub site_code: String,
    /// Seconds since the station's latest data was taken.
    pub age: u64,
    #[serde(rename = "imageLink")]
    pub image_link: String,
    #[serde(rename = "movieURL")]
    pub movie_url: String,
}

impl StatusReply {
    pub fn from_json(body: &str) -> Result<Self, StatusError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn header(&self) -> &str {
        self.header.as_ref().map(String::as_str).unwrap_or(DEFAULT_HEADER)
    }
}
