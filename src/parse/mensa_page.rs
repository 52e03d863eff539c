//! Extractor for the Mensa am Adenauerring day plan.
//!
//! All class-name and id literals below mirror the live site's markup and
//! break if the site changes; they are kept together in the
//! `static_selector!` declarations of each function.

use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;

use super::error::{Error, Result};
use super::model::{Diet, Line, Meal};
use crate::static_selector;

/// Parses the day plan into one [`Line`] per serving counter, meals in
/// document order.
///
/// The page carries one container per day and always lists the current day
/// as `canteen_day_1`; the calendar date is not cross-checked. A missing
/// day container is a structural error.
pub fn parse_mensa_page(element: ElementRef) -> Result<Vec<Line>> {
    static_selector!(TODAY_SELECTOR <- "div#canteen_day_1");
    static_selector!(LINE_SELECTOR <- "tr.mensatype_rows");
    static_selector!(LINE_NAME_SELECTOR <- "td.mensatype");
    static_selector!(MEAL_ROW_SELECTOR <- r#"tr[class^="mt-"]"#);

    let today = element
        .select(&TODAY_SELECTOR)
        .next()
        .ok_or_else(|| Error::html_parse_error("canteen_day_1 container not found"))?;

    let mut lines = vec![];
    for line_element in today.select(&LINE_SELECTOR) {
        let name_cell = line_element
            .select(&LINE_NAME_SELECTOR)
            .next()
            .ok_or_else(|| {
                Error::html_parse_error("every mensatype_rows row should have a mensatype cell")
            })?;
        // Line names are split over <br>s on the page; joining the text
        // nodes gives e.g. "Linie 1Gut & Günstig".
        let name: String = name_cell.text().collect();
        if name.is_empty() {
            return Err(Error::text_node_parse_error(
                "mensatype cell should have text inside",
            ));
        }

        let meals = line_element
            .select(&MEAL_ROW_SELECTOR)
            .map(parse_meal_row)
            .collect::<Result<Vec<_>>>()?;
        lines.push(Line { name, meals });
    }
    Ok(lines)
}

fn parse_meal_row(row: ElementRef) -> Result<Meal> {
    static_selector!(MEAL_NAME_SELECTOR <- "td.menu-title span");
    let name_element = row
        .select(&MEAL_NAME_SELECTOR)
        .next()
        .ok_or_else(|| Error::html_parse_error("every meal row should have a menu-title span"))?;
    let name: String = name_element.text().collect();
    Ok(Meal {
        diet: extract_diet(row),
        name,
        price: extract_price(row),
    })
}

/// Reads the diet off the row's icon. Markers are checked in a fixed order
/// and the first match wins; rows without an icon have no diet.
fn extract_diet(row: ElementRef) -> Option<Diet> {
    static_selector!(DIET_ICON_SELECTOR <- "td.mtd-icon img");
    let icon_src = row.select(&DIET_ICON_SELECTOR).next()?.attr("src")?;
    if icon_src.contains("rindfleisch") {
        Some(Diet::Beef)
    } else if icon_src.contains("schweinefleisch") {
        Some(Diet::Pork)
    } else if icon_src.contains("vegetarisch") {
        Some(Diet::Vegetarian)
    } else if icon_src.contains("vegan") {
        Some(Diet::Vegan)
    } else {
        None
    }
}

/// Reads the row's price in cents. The page publishes two price tiers per
/// row (`price_1` and `price_3`); the plan always quotes the second one.
/// Rows without a `digits,digits` amount have no price.
fn extract_price(row: ElementRef) -> Option<u32> {
    static_selector!(PRICE_SELECTOR <- "span.price_3");
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    let re = PRICE_RE.get_or_init(|| Regex::new(r"\d+,\d+").expect("regex should be valid"));

    let price_text: String = row.select(&PRICE_SELECTOR).next()?.text().collect();
    let amount = re.find(&price_text)?;
    amount.as_str().replace(',', "").parse().ok()
}
