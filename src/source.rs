use hyper::ext::ReasonPhrase;
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};

use StatusError;

pub const STATUS_URL: &str = "https://gong2.nso.edu/products/hAlphaLatest/hac.php";

/// Where the status JSON comes from.
pub trait StatusSource {
    /// Fetch the body of the status document. Anything but 200 OK is
    /// reported as `StatusError::Status`.
    fn fetch(&mut self) -> Result<String, StatusError>;
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        HttpSource::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        HttpSource { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl StatusSource for HttpSource {
    fn fetch(&mut self) -> Result<String, StatusError> {
        debug!("GET {}", self.url);
        let response = self.client.get(self.url.clone()).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = reason_phrase(&response);
            return Err(StatusError::Status {
                code: status.as_u16(),
                reason,
            });
        }

        Ok(response.text()?)
    }
}

/// The reason phrase as sent by the server. hyper only keeps it when it
/// differs from the standard one for the code.
fn reason_phrase(response: &Response) -> String {
    let status = response.status();
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string()),
    }
}
