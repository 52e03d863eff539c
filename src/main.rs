#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod error;
mod fetch;
mod parse;
mod render;

use chrono::{Datelike, Local};
use scraper::Html;

use crate::fetch::{make_client, mensa_page, mri_page};
use crate::parse::{clean_mensa, parse_mensa_page, parse_mri_page};
use crate::render::Plan;

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let client = make_client();
    let (mensa_html, mri_html) = futures::try_join!(mensa_page(&client), mri_page(&client))?;
    let now = Local::now();

    let mensa_doc = Html::parse_document(&mensa_html);
    let lines_mensa = clean_mensa(&parse_mensa_page(mensa_doc.root_element())?);

    let mri_doc = Html::parse_document(&mri_html);
    let meals_mri = parse_mri_page(mri_doc.root_element(), now.weekday())?;

    println!(
        "{}",
        Plan {
            lines_mensa: &lines_mensa,
            meals_mri: &meals_mri,
            now,
        }
    );
    Ok(())
}
