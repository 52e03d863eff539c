use reqwest::{Client, Error as RequestError};

static MENSA_URL: &str =
    "https://www.sw-ka.de/de/hochschulgastronomie/speiseplan/mensa_adenauerring/";
static MRI_URL: &str = "https://casinocatering.de/speiseplan/";

static USER_AGENT: &str = concat!("mensaman/", env!("CARGO_PKG_VERSION"));

pub fn make_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Today's plan of the Mensa am Adenauerring.
pub async fn mensa_page(client: &Client) -> Result<String, RequestError> {
    page(client, MENSA_URL).await
}

/// The MRI casino's weekly plan.
pub async fn mri_page(client: &Client) -> Result<String, RequestError> {
    page(client, MRI_URL).await
}

async fn page(client: &Client, url: &str) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let response = client.get(url).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::trace!("Got {url} in\t{:?}", start.elapsed());
    Ok(text)
}
